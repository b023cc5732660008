//! Location of `<details>` runs in a PR body.

use std::ops::Range;

const OPEN: &str = "<details";
const CLOSE: &str = "</details>";

/// A run of adjacent `<details>` elements separated only by whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DetailsRun {
    /// Byte range of the run, from the first `<details` to the last `</details>`.
    pub range: Range<usize>,
}

/// Finds every balanced `<details>` run in `body`, in document order.
///
/// An element without a matching close tag ends the scan.
pub(crate) fn find_runs(body: &str) -> Vec<DetailsRun> {
    // ASCII lowercasing keeps byte offsets aligned with `body`.
    let lower = body.to_ascii_lowercase();
    let mut runs = Vec::new();
    let mut cursor = 0;

    while let Some(start) = find_open(&lower, cursor) {
        let Some(mut end) = element_end(&lower, start) else {
            break;
        };

        loop {
            let gap = lower[end..].len() - lower[end..].trim_start().len();
            let next = end + gap;
            if find_open(&lower, next) != Some(next) {
                break;
            }
            match element_end(&lower, next) {
                Some(next_end) => end = next_end,
                None => break,
            }
        }

        runs.push(DetailsRun { range: start..end });
        cursor = end;
    }

    runs
}

/// Next `<details>` or `<details ...>` tag at or after `from`.
fn find_open(lower: &str, from: usize) -> Option<usize> {
    let mut cursor = from;
    while let Some(offset) = lower[cursor..].find(OPEN) {
        let index = cursor + offset;
        let after = lower[index + OPEN.len()..].chars().next();
        if matches!(after, Some(c) if c == '>' || c.is_whitespace()) {
            return Some(index);
        }
        cursor = index + OPEN.len();
    }
    None
}

/// End offset (exclusive) of the element opened at `start`, honouring nesting.
fn element_end(lower: &str, start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut cursor = start;

    loop {
        let open = find_open(lower, cursor);
        let close = lower[cursor..].find(CLOSE).map(|offset| cursor + offset)?;

        match open {
            Some(open) if open < close => {
                depth += 1;
                cursor = open + OPEN.len();
            }
            _ => {
                depth = depth.saturating_sub(1);
                cursor = close + CLOSE.len();
                if depth == 0 {
                    return Some(cursor);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slices(body: &str) -> Vec<&str> {
        find_runs(body)
            .into_iter()
            .map(|run| &body[run.range])
            .collect()
    }

    #[test]
    fn groups_adjacent_elements() {
        let body = "intro\n<details>\n<summary>Release notes</summary>\n</details>\n<details>\n<summary>Commits</summary>\n</details>\n<br />\n";
        assert_eq!(
            slices(body),
            vec!["<details>\n<summary>Release notes</summary>\n</details>\n<details>\n<summary>Commits</summary>\n</details>"]
        );
    }

    #[test]
    fn separates_runs_split_by_text() {
        let body = "a\n<details>one</details>\nb\n<details>two</details>";
        assert_eq!(
            slices(body),
            vec!["<details>one</details>", "<details>two</details>"]
        );
    }

    #[test]
    fn honours_nesting() {
        let body = "<details><details>inner</details>outer</details>tail";
        assert_eq!(
            slices(body),
            vec!["<details><details>inner</details>outer</details>"]
        );
    }

    #[test]
    fn stops_at_unbalanced_element() {
        assert!(find_runs("<details>never closed").is_empty());
        assert!(find_runs("no blocks here").is_empty());
    }

    #[test]
    fn accepts_attributes_and_uppercase() {
        assert_eq!(slices("<DETAILS open>x</DETAILS>"), vec!["<DETAILS open>x</DETAILS>"]);
    }
}
