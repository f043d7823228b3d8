//! Text styling on top of crossterm's styled content.

use crossterm::style::{Attribute, ContentStyle, StyledContent};

pub use crossterm::style::Color;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub dim: bool,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            bold: false,
            dim: false,
        }
    }

    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn is_plain(&self) -> bool {
        *self == Style::default()
    }

    pub fn to_content_style(&self) -> ContentStyle {
        let mut style = ContentStyle::new();
        style.foreground_color = self.fg;
        style.background_color = self.bg;
        if self.bold {
            style.attributes.set(Attribute::Bold);
        }
        if self.dim {
            style.attributes.set(Attribute::Dim);
        }
        style
    }

    /// Wrap `text` in this style. Plain styles and empty text pass through untouched.
    pub fn paint(&self, text: &str) -> String {
        if self.is_plain() || text.is_empty() {
            return text.to_string();
        }
        format!("{}", StyledContent::new(self.to_content_style(), text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_style_emits_nothing() {
        assert_eq!(Style::new().paint("x"), "x");
        assert_eq!(Style::new().fg(Color::Red).paint(""), "");
    }

    #[test]
    fn foreground_only_resets_foreground() {
        assert_eq!(
            Style::new().fg(Color::DarkRed).paint("err"),
            "\x1b[38;5;1merr\x1b[39m"
        );
    }

    #[test]
    fn attributes_force_full_reset() {
        let style = Style::new().fg(Color::Cyan).bold();
        assert_eq!(style.paint("ok"), "\x1b[38;5;14m\x1b[1mok\x1b[0m");
    }

    #[test]
    fn background_precedes_foreground() {
        let style = Style::new().fg(Color::Yellow).bg(Color::DarkGrey);
        assert_eq!(style.paint("w"), "\x1b[48;5;8m\x1b[38;5;11mw\x1b[49m\x1b[39m");
    }

    #[test]
    fn extended_colors() {
        assert_eq!(
            Style::new().fg(Color::Rgb { r: 1, g: 2, b: 3 }).paint("x"),
            "\x1b[38;2;1;2;3mx\x1b[39m"
        );
        assert_eq!(
            Style::new().bg(Color::AnsiValue(236)).paint("x"),
            "\x1b[48;5;236mx\x1b[49m"
        );
    }

    #[test]
    fn bold_and_dim_are_separate_sequences() {
        assert_eq!(Style::new().bold().dim().paint("d"), "\x1b[1m\x1b[2md\x1b[0m");
    }

    #[test]
    fn content_style_carries_every_field() {
        let style = Style::new().fg(Color::Green).bg(Color::Black).dim();
        let content = style.to_content_style();
        assert_eq!(content.foreground_color, Some(Color::Green));
        assert_eq!(content.background_color, Some(Color::Black));
        assert!(content.attributes.has(Attribute::Dim));
        assert!(!content.attributes.has(Attribute::Bold));
    }
}
