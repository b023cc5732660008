//! Inline markdown cleanup for values lifted out of PR bodies.

use regex::Regex;
use std::sync::LazyLock;

/// A whole-value markdown link: `[text](target)`.
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(.+)\]\([^)\s]*\)$").expect("valid link regex"));

/// Emphasis and code-span delimiters, longest first.
const WRAPPERS: [&str; 5] = ["**", "__", "`", "*", "_"];

/// Invisible characters Dependabot places inside mentions (`@\u{200B}scope`).
const INVISIBLE: [char; 3] = ['\u{200B}', '\u{200C}', '\u{FEFF}'];

/// Removes invisible characters from `text`.
#[must_use]
pub fn strip_invisible(text: &str) -> String {
    text.chars().filter(|c| !INVISIBLE.contains(c)).collect()
}

/// Reduces a markdown-decorated value to its literal text.
///
/// Peels links, code spans and emphasis wrapping the whole value, in any
/// nesting order (`**[`x`](url)**` yields `x`). Markup inside the value is
/// left alone.
#[must_use]
pub fn strip_markup(value: &str) -> String {
    let mut current = strip_invisible(value).trim().to_string();

    loop {
        let next = peel_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn peel_once(value: &str) -> String {
    if let Some(caps) = LINK.captures(value) {
        return caps[1].trim().to_string();
    }

    for wrapper in WRAPPERS {
        let wrapped = value.len() > wrapper.len() * 2
            && value.starts_with(wrapper)
            && value.ends_with(wrapper);
        if wrapped {
            return value[wrapper.len()..value.len() - wrapper.len()]
                .trim()
                .to_string();
        }
    }

    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_code_spans_and_links() {
        assert_eq!(strip_markup("`0.3.11`"), "0.3.11");
        assert_eq!(
            strip_markup("[@auth/sveltekit](https://github.com/nextauthjs/next-auth)"),
            "@auth/sveltekit"
        );
        assert_eq!(
            strip_markup("**[`svelte`](https://github.com/sveltejs/svelte)**"),
            "svelte"
        );
    }

    #[test]
    fn keeps_inner_underscores() {
        assert_eq!(strip_markup("`snake_case_pkg`"), "snake_case_pkg");
        assert_eq!(strip_markup("snake_case_pkg"), "snake_case_pkg");
    }

    #[test]
    fn removes_zero_width_spaces() {
        assert_eq!(strip_markup("`@\u{200B}auth/core`"), "@auth/core");
    }
}
