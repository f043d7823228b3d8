//! ANSI-aware text measurement.
//!
//! Widths are counted one column per `char` outside escape sequences. An escape
//! starts at `ESC` and ends at the first ASCII letter after it, which covers SGR
//! (`\x1b[1;31m`) and the other CSI sequences widgets emit. An escape that never
//! terminates swallows the rest of the string, so [`truncate`] drops a dangling
//! one before anything is appended after it.

const ESC: char = '\x1b';
const ELLIPSIS: &str = "...";

/// Yields every char of `s` paired with whether it occupies a visible column.
struct Scanner<'a> {
    chars: std::str::Chars<'a>,
    in_escape: bool,
}

impl<'a> Scanner<'a> {
    fn new(s: &'a str) -> Self {
        Self {
            chars: s.chars(),
            in_escape: false,
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = (char, bool);

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.chars.next()?;
        if c == ESC {
            self.in_escape = true;
            return Some((c, false));
        }
        if self.in_escape {
            if c.is_ascii_alphabetic() {
                self.in_escape = false;
            }
            return Some((c, false));
        }
        Some((c, true))
    }
}

pub fn visible_width(s: &str) -> usize {
    Scanner::new(s).filter(|&(_, visible)| visible).count()
}

/// `s` without a trailing escape that is still open at the end of the string.
fn trim_dangling_escape(s: &str) -> &str {
    let mut open = None;
    for (i, c) in s.char_indices() {
        if c == ESC {
            open = Some(i);
        } else if open.is_some() && c.is_ascii_alphabetic() {
            open = None;
        }
    }
    match open {
        Some(start) => &s[..start],
        None => s,
    }
}

/// Cut `s` to at most `max_width` visible columns.
///
/// Escape sequences are copied even after the cut so trailing resets still apply.
/// When there is room (`max_width > 3`) the cut is marked with `...`. A trailing
/// unterminated escape is dropped.
pub fn truncate(s: &str, max_width: usize) -> String {
    let s = trim_dangling_escape(s);
    if visible_width(s) <= max_width {
        return s.to_string();
    }

    let with_ellipsis = max_width > ELLIPSIS.len();
    let budget = if with_ellipsis {
        max_width - ELLIPSIS.len()
    } else {
        max_width
    };

    let mut result = String::with_capacity(s.len());
    let mut used = 0;
    for (c, visible) in Scanner::new(s) {
        if !visible {
            result.push(c);
        } else if used < budget {
            result.push(c);
            used += 1;
        }
    }

    if with_ellipsis {
        result.push_str(ELLIPSIS);
    }
    result
}

pub fn strip_ansi(s: &str) -> String {
    Scanner::new(s)
        .filter(|&(_, visible)| visible)
        .map(|(c, _)| c)
        .collect()
}

/// Truncate then right-pad with spaces so the result is exactly `width` wide.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let fitted = truncate(s, width);
    let used = visible_width(&fitted);
    format!("{}{}", fitted, " ".repeat(width.saturating_sub(used)))
}

/// Center `s` in `width` columns. Odd slack goes to the right.
pub fn center(s: &str, width: usize) -> String {
    let fitted = truncate(s, width);
    let slack = width.saturating_sub(visible_width(&fitted));
    let left = slack / 2;
    format!(
        "{}{}{}",
        " ".repeat(left),
        fitted,
        " ".repeat(slack - left)
    )
}

/// True if `s` contains an escape introducer.
pub fn has_escape(s: &str) -> bool {
    s.contains(ESC)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn plain_text_width_is_char_count() {
        assert_eq!(visible_width("hello"), 5);
        assert_eq!(visible_width(""), 0);
    }

    #[test]
    fn sgr_sequences_have_no_width() {
        assert_eq!(visible_width("\x1b[1;31mred\x1b[0m"), 3);
        assert_eq!(visible_width("\x1b[38;2;10;20;30mrgb\x1b[m"), 3);
    }

    #[test]
    fn box_drawing_counts_one_per_char() {
        assert_eq!(visible_width("╭──╮"), 4);
    }

    #[test]
    fn unterminated_escape_swallows_rest() {
        assert_eq!(visible_width("ab\x1b[31"), 2);
        assert_eq!(visible_width("ab\x1b[31;4 123 456"), 2);
        assert_eq!(truncate("ab\x1b[31;4 123", 1), "a");
    }

    #[test]
    fn dangling_escape_is_dropped_before_padding() {
        assert_eq!(pad_to_width("ab\x1b[31", 6), "ab    ");
        assert_eq!(visible_width(&pad_to_width("ab\x1b[31", 6)), 6);
        assert_eq!(visible_width(&pad_to_width("\x1b", 3)), 3);
        assert_eq!(center("ab\x1b[", 6), "  ab  ");
    }

    #[test]
    fn dangling_escape_does_not_eat_ellipsis() {
        let out = truncate("abcdefgh\x1b[31;4", 6);
        assert_eq!(out, "abc...");
        assert_eq!(visible_width(&out), 6);
    }

    #[test]
    fn terminated_escapes_survive_trimming() {
        assert_eq!(truncate("\x1b[31mab\x1b[0m", 5), "\x1b[31mab\x1b[0m");
        assert_eq!(truncate("\x1b[31mab\x1b[", 5), "\x1b[31mab");
    }

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exact", 5), "exact");
    }

    #[test_case("hello world", 8, "hello..." ; "ellipsis when room")]
    #[test_case("hello world", 4, "h..." ; "ellipsis at four")]
    #[test_case("hello world", 3, "hel" ; "hard cut at three")]
    #[test_case("hello world", 1, "h" ; "hard cut at one")]
    #[test_case("hello world", 0, "" ; "zero width")]
    fn truncate_cases(input: &str, width: usize, expected: &str) {
        assert_eq!(truncate(input, width), expected);
    }

    #[test]
    fn truncate_keeps_trailing_reset() {
        let styled = "\x1b[31mhello world\x1b[0m";
        let out = truncate(styled, 8);
        assert_eq!(out, "\x1b[31mhello\x1b[0m...");
        assert_eq!(visible_width(&out), 8);
    }

    #[test]
    fn strip_removes_escapes() {
        assert_eq!(strip_ansi("\x1b[1mbold\x1b[0m text"), "bold text");
    }

    #[test]
    fn pad_to_width_pads_and_truncates() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("abcdefgh", 6), "abc...");
        assert_eq!(visible_width(&pad_to_width("\x1b[32mok\x1b[0m", 6)), 6);
    }

    #[test]
    fn center_biases_slack_right() {
        assert_eq!(center("ab", 5), " ab  ");
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("toolong", 4), "t...");
    }
}
