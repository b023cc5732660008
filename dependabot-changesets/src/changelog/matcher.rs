//! Package name matching against markdown/HTML text.

/// Matches a package name, and the forms Dependabot writes it in, as a
/// whole token.
#[derive(Debug, Clone)]
pub(crate) struct PackageMatcher {
    needles: Vec<String>,
}

impl PackageMatcher {
    /// Builds the spellings of `package` worth looking for:
    /// the literal name, `@\u{200B}scope/name`, `%40scope%2Fname` and the
    /// markdown-escaped `snake\_case`.
    pub(crate) fn new(package: &str) -> Self {
        let mut needles = vec![package.to_string()];
        let mut push = |needle: String| {
            if !needles.contains(&needle) {
                needles.push(needle);
            }
        };

        push(package.replace('@', "@\u{200B}"));
        push(package.replace('@', "%40").replace('/', "%2F"));
        push(package.replace('@', "%40").replace('/', "%2f"));
        push(package.replace('_', "\\_"));

        Self { needles }
    }

    /// Returns true when `text` mentions the package as a whole token.
    pub(crate) fn is_mentioned_in(&self, text: &str) -> bool {
        self.needles.iter().any(|needle| {
            text.match_indices(needle.as_str()).any(|(index, _)| {
                let before = text[..index].chars().next_back();
                let after = &text[index + needle.len()..];
                // Percent-encoded names sit inside URL paths.
                let starts_token = needle.starts_with('%') || !before.is_some_and(is_name_char);
                starts_token && !continues_name(after)
            })
        })
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | '@')
}

/// A trailing full stop ends a sentence, not a name.
fn continues_name(after: &str) -> bool {
    let mut chars = after.chars();
    match chars.next() {
        Some('.') => chars.next().is_some_and(char::is_alphanumeric),
        Some(c) => is_name_char(c),
        None => false,
    }
}
