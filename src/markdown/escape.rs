//! Pure text helpers used by the block renderers.
//!
//! These handle line-ending normalization, structural escaping of table
//! cells and fence length selection for code blocks.

use std::borrow::Cow;

use memchr::{memchr, memchr_iter};

use crate::model::Value;

/// Minimum number of backticks in a code fence.
pub const MIN_FENCE_LENGTH: usize = 3;

/// Convert `\r\n` and lone `\r` line endings to `\n`.
///
/// Borrows the input when there is nothing to convert.
///
/// # Examples
///
/// ```
/// use simdoc::markdown::normalize_newlines;
///
/// assert_eq!(normalize_newlines("a\r\nb\rc"), "a\nb\nc");
/// ```
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if memchr(b'\r', text.as_bytes()).is_none() {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Escape literal pipes so they can't be read as column delimiters.
///
/// Only `|` is touched; other Markdown syntax passes through.
///
/// ```
/// use simdoc::markdown::escape_pipes;
///
/// assert_eq!(escape_pipes("x|y"), "x\\|y");
/// ```
pub fn escape_pipes(text: &str) -> Cow<'_, str> {
    if memchr(b'|', text.as_bytes()).is_none() {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace('|', "\\|"))
}

/// Length of the longest run of consecutive backticks in `text`.
pub fn longest_backtick_run(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut prev: Option<usize> = None;

    for pos in memchr_iter(b'`', text.as_bytes()) {
        current = match prev {
            Some(p) if p + 1 == pos => current + 1,
            _ => 1,
        };
        longest = longest.max(current);
        prev = Some(pos);
    }

    longest
}

/// Calculate the fence length for a code block containing `text`.
///
/// The fence is one backtick longer than the longest run inside the body,
/// and never shorter than three, so the body can't close the block early.
///
/// # Examples
///
/// ```
/// use simdoc::markdown::calculate_fence_length;
///
/// assert_eq!(calculate_fence_length("let x = 1;"), 3);
/// assert_eq!(calculate_fence_length("line1\n```\nline2"), 4);
/// ```
pub fn calculate_fence_length(text: &str) -> usize {
    (longest_backtick_run(text) + 1).max(MIN_FENCE_LENGTH)
}

/// Build the fence string for a code block containing `text`.
pub fn select_code_fence(text: &str) -> String {
    "`".repeat(calculate_fence_length(text))
}

/// Format a value for use inside a table cell.
///
/// Line breaks become `<br>` (a table row can't span lines) and pipes are
/// escaped. The empty sentinel gives an empty cell.
pub fn format_table_cell(value: &Value) -> String {
    if value.is_empty() {
        return String::new();
    }
    format_cell_text(value.as_str())
}

/// Format raw text for use inside a table cell (see [`format_table_cell`]).
pub fn format_cell_text(text: &str) -> String {
    let text = normalize_newlines(text).replace('\n', "<br>");
    escape_pipes(&text).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_newlines_borrows_clean_text() {
        assert!(matches!(normalize_newlines("a\nb"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_normalize_newlines_crlf_and_cr() {
        assert_eq!(normalize_newlines("a\r\nb"), "a\nb");
        assert_eq!(normalize_newlines("a\rb"), "a\nb");
        assert_eq!(normalize_newlines("a\r\n\rb"), "a\n\nb");
    }

    #[test]
    fn test_escape_pipes() {
        assert_eq!(escape_pipes("a | b"), "a \\| b");
        assert_eq!(escape_pipes("||"), "\\|\\|");
        assert_eq!(escape_pipes("*no pipes*"), "*no pipes*");
    }

    #[test]
    fn test_longest_run() {
        assert_eq!(longest_backtick_run(""), 0);
        assert_eq!(longest_backtick_run("`"), 1);
        assert_eq!(longest_backtick_run("`` and ```"), 3);
        assert_eq!(longest_backtick_run("` ` `"), 1);
        assert_eq!(longest_backtick_run("a`````b"), 5);
    }

    #[test]
    fn test_fence_length_no_backticks() {
        assert_eq!(calculate_fence_length("let x = 1;"), 3);
    }

    #[test]
    fn test_fence_length_with_backticks() {
        assert_eq!(calculate_fence_length("``"), 3);
        assert_eq!(calculate_fence_length("```"), 4);
        assert_eq!(calculate_fence_length("````"), 5);
    }

    #[test]
    fn test_fence_length_multiple_runs() {
        assert_eq!(calculate_fence_length("`` and ```"), 4);
    }

    #[test]
    fn test_select_code_fence() {
        assert_eq!(select_code_fence("plain"), "```");
        assert_eq!(select_code_fence("````"), "`````");
    }

    #[test]
    fn test_format_table_cell() {
        assert_eq!(format_table_cell(&Value::EMPTY), "");
        assert_eq!(format_table_cell(&Value::from("x|y")), "x\\|y");
        assert_eq!(format_table_cell(&Value::from("1\r\n2")), "1<br>2");
        assert_eq!(format_table_cell(&Value::from("*bold*")), "*bold*");
    }
}
