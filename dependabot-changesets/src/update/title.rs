//! Pull request title recognition.

use super::markdown::strip_markup;
use super::UpdateTriple;
use regex::Regex;
use std::sync::LazyLock;

/// `bump the <group> group`, anywhere in the title.
static GROUPED_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bbump\s+the\s+\S+\s+group\b").expect("valid grouped title regex")
});

/// `[Security] type(scope)!: bump <package> from <from> to <to> in /<dir>`,
/// with every part except the bump clause optional.
static SINGLE_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
        ^\s*
        (?:\[[^\]]*\]\s*)?
        (?:[a-z][\w-]*(?:\([^)]*\))?!?:\s*)?
        bump\s+(?P<package>\S+)
        \s+from\s+(?P<from>\S+)
        \s+to\s+(?P<to>\S+?)
        (?:\s+in\s+\S+)?
        \s*$",
    )
    .expect("valid single title regex")
});

/// Returns true when the title describes a grouped update
/// (`Bump the <group> group ...`).
///
/// Trailing `across N directories` / `with N updates` clauses and
/// conventional-commit prefixes do not matter.
#[must_use]
pub fn is_grouped_pr(title: &str) -> bool {
    GROUPED_TITLE.is_match(title)
}

/// Extracts the update from a single-package title such as
/// `chore(deps-dev): bump @typescript-eslint/parser from 6.10.0 to 6.11.0`.
///
/// Returns `None` for anything else, grouped titles included.
#[must_use]
pub fn extract_update_from_title(title: &str) -> Option<UpdateTriple> {
    let caps = SINGLE_TITLE.captures(title)?;
    UpdateTriple::new(
        strip_markup(&caps["package"]),
        strip_markup(&caps["from"]),
        strip_markup(&caps["to"]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_grouped_titles() {
        assert!(is_grouped_pr("Bump the all group with 9 updates"));
        assert!(is_grouped_pr("Bump the asdfghjkl group with 25 updates"));
        assert!(is_grouped_pr(
            "Bump the all group across 1 directory with 19 updates"
        ));
        assert!(is_grouped_pr("chore(deps): bump the all group with 3 updates "));
        assert!(is_grouped_pr("Bump the cloudflare group"));
        assert!(is_grouped_pr(
            "build(deps): Bump the npm_and_yarn group across 2 directories with 4 updates"
        ));
    }

    #[test]
    fn rejects_single_package_titles() {
        assert!(!is_grouped_pr("Some other PR update"));
        assert!(!is_grouped_pr("Bump marked from 9.1.5 to 9.1.6"));
        assert!(!is_grouped_pr(
            "chore(deps-dev): bump @typescript-eslint/parser from 6.10.0 to 6.11.0"
        ));
        assert!(!is_grouped_pr("Bump group-by from 2.0.0 to 3.0.0 with 4 updates"));
    }

    #[test]
    fn extracts_update_from_title() {
        let update =
            extract_update_from_title("Bump @typescript-eslint/parser from 6.10.0 to 6.11.0")
                .unwrap();
        assert_eq!(update.package, "@typescript-eslint/parser");
        assert_eq!(update.from, "6.10.0");
        assert_eq!(update.to, "6.11.0");
        assert_eq!(update.changelog, None);
    }

    #[test]
    fn extracts_update_from_conventional_commit_title() {
        let update = extract_update_from_title(
            "chore(deps-dev): bump @typescript-eslint/parser from 6.10.0 to 6.11.0",
        )
        .unwrap();
        assert_eq!(
            update,
            UpdateTriple::new("@typescript-eslint/parser", "6.10.0", "6.11.0").unwrap()
        );
    }

    #[test]
    fn ignores_directory_suffix_and_security_tag() {
        let update = extract_update_from_title("Bump nanoid from 3.3.6 to 3.3.8 in /web").unwrap();
        assert_eq!(update.package, "nanoid");
        assert_eq!(update.to, "3.3.8");

        let update =
            extract_update_from_title("[Security] Bump cookie from 0.4.0 to 0.7.0").unwrap();
        assert_eq!(update.package, "cookie");
        assert_eq!(update.from, "0.4.0");
    }

    #[test]
    fn returns_none_for_unrecognized_titles() {
        assert_eq!(extract_update_from_title("Bump the all group with 9 updates"), None);
        assert_eq!(extract_update_from_title("Bump @auth/core and @auth/sveltekit"), None);
        assert_eq!(extract_update_from_title("Fix typo in README"), None);
    }
}
