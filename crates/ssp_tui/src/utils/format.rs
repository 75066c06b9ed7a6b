//! Formatting helpers for TUI text (width-aware wrapping and truncation).
//!
//! Widths are terminal columns (unicode-width), so CJK text wraps correctly.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `s` to at most `max_width` columns, appending "…" when truncated.
pub fn truncate_ellipsis(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let budget = max_width - 1;
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Wrap text to lines of at most `width` columns.
///
/// Breaks at spaces where possible and inside words (or unspaced CJK runs) otherwise.
/// Explicit newlines are kept; blank lines inside the text stay blank.
/// Returns empty vec for empty or whitespace-only input.
pub fn wrap_lines(s: &str, width: usize) -> Vec<String> {
    if width == 0 || s.trim().is_empty() {
        return Vec::new();
    }
    let mut out = Vec::new();
    for paragraph in s.split('\n') {
        let before = out.len();
        wrap_paragraph(paragraph, width, &mut out);
        if out.len() == before {
            out.push(String::new());
        }
    }
    out
}

fn wrap_paragraph(text: &str, width: usize, out: &mut Vec<String>) {
    let mut line = String::new();
    let mut line_width = 0;
    for word in text.split(' ').filter(|w| !w.is_empty()) {
        let word_width = word.width();
        let sep = usize::from(!line.is_empty());
        if line_width + sep + word_width <= width {
            if sep == 1 {
                line.push(' ');
            }
            line.push_str(word);
            line_width += sep + word_width;
            continue;
        }
        if !line.is_empty() {
            out.push(std::mem::take(&mut line));
            line_width = 0;
        }
        if word_width <= width {
            line.push_str(word);
            line_width = word_width;
            continue;
        }
        for c in word.chars() {
            let w = c.width().unwrap_or(0);
            if line_width + w > width && !line.is_empty() {
                out.push(std::mem::take(&mut line));
                line_width = 0;
            }
            line.push(c);
            line_width += w;
        }
    }
    if !line.is_empty() {
        out.push(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_ellipsis_short() {
        assert_eq!(truncate_ellipsis("hi", 10), "hi");
        assert_eq!(truncate_ellipsis("hello", 5), "hello");
    }

    #[test]
    fn truncate_ellipsis_long() {
        assert_eq!(truncate_ellipsis("hello world", 8), "hello w…");
        assert_eq!(truncate_ellipsis("ab", 1), "…");
        assert_eq!(truncate_ellipsis("ab", 0), "");
    }

    #[test]
    fn truncate_ellipsis_wide_chars() {
        // each kana is two columns
        assert_eq!(truncate_ellipsis("あいうえお", 5), "あい…");
    }

    #[test]
    fn wrap_lines_by_width() {
        let lines = wrap_lines("one two three four", 8);
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }

    #[test]
    fn wrap_lines_empty() {
        assert!(wrap_lines("", 10).is_empty());
        assert!(wrap_lines("   ", 10).is_empty());
        assert!(wrap_lines("abc", 0).is_empty());
    }

    #[test]
    fn wrap_lines_cjk_by_columns() {
        let lines = wrap_lines("あいうえお", 4);
        assert_eq!(lines, vec!["あい", "うえ", "お"]);
    }

    #[test]
    fn wrap_lines_long_word_is_broken() {
        let lines = wrap_lines("abcdefghij xy", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn wrap_lines_keeps_newlines() {
        let lines = wrap_lines("first\n\nthird", 20);
        assert_eq!(lines, vec!["first", "", "third"]);
    }
}
