//! Bordered card chrome.
//!
//! A frame is a rectangle of exactly `width` x `height` cells: a top border (with an
//! optional embedded title), `height - 2` content rows and a bottom border. Content
//! that does not fit is dropped, never the other way round. Every emitted line has
//! the same visible width, which the compositor relies on.

use crate::ansi::{has_escape, pad_to_width, truncate};
use crate::style::{Color, Style};

/// Columns taken by one vertical border.
pub const BORDER: usize = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FrameState {
    #[default]
    Normal,
    Focused,
    Selected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

pub const ROUNDED: BorderGlyphs = BorderGlyphs {
    top_left: '╭',
    top_right: '╮',
    bottom_left: '╰',
    bottom_right: '╯',
    horizontal: '─',
    vertical: '│',
};

pub const HEAVY: BorderGlyphs = BorderGlyphs {
    top_left: '┏',
    top_right: '┓',
    bottom_left: '┗',
    bottom_right: '┛',
    horizontal: '━',
    vertical: '┃',
};

pub const DOUBLE: BorderGlyphs = BorderGlyphs {
    top_left: '╔',
    top_right: '╗',
    bottom_left: '╚',
    bottom_right: '╝',
    horizontal: '═',
    vertical: '║',
};

pub const ASCII: BorderGlyphs = BorderGlyphs {
    top_left: '+',
    top_right: '+',
    bottom_left: '+',
    bottom_right: '+',
    horizontal: '-',
    vertical: '|',
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStyle {
    pub glyphs: &'static BorderGlyphs,
    pub border: Style,
    pub title: Style,
}

/// Glyphs and colors for each [`FrameState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTheme {
    pub normal: FrameStyle,
    pub focused: FrameStyle,
    pub selected: FrameStyle,
}

impl FrameTheme {
    pub const DEFAULT: FrameTheme = FrameTheme {
        normal: FrameStyle {
            glyphs: &ROUNDED,
            border: Style::new().fg(Color::DarkGrey),
            title: Style::new().fg(Color::Grey),
        },
        focused: FrameStyle {
            glyphs: &HEAVY,
            border: Style::new().fg(Color::Cyan),
            title: Style::new().fg(Color::Cyan).bold(),
        },
        selected: FrameStyle {
            glyphs: &DOUBLE,
            border: Style::new().fg(Color::Yellow),
            title: Style::new().fg(Color::Yellow).bold(),
        },
    };

    /// Distinct ASCII glyphs per state with no color, for logs and plain terminals.
    pub const PLAIN: FrameTheme = FrameTheme {
        normal: FrameStyle {
            glyphs: &ASCII,
            border: Style::new(),
            title: Style::new(),
        },
        focused: FrameStyle {
            glyphs: &HEAVY,
            border: Style::new(),
            title: Style::new(),
        },
        selected: FrameStyle {
            glyphs: &DOUBLE,
            border: Style::new(),
            title: Style::new(),
        },
    };

    pub fn style_for(&self, state: FrameState) -> &FrameStyle {
        match state {
            FrameState::Normal => &self.normal,
            FrameState::Focused => &self.focused,
            FrameState::Selected => &self.selected,
        }
    }
}

impl Default for FrameTheme {
    fn default() -> Self {
        FrameTheme::DEFAULT
    }
}

/// One card's frame, ready to render at a fixed size.
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    pub state: FrameState,
    pub title: Option<&'a str>,
    pub padding: usize,
    pub theme: &'a FrameTheme,
}

impl<'a> Frame<'a> {
    pub fn new(state: FrameState, theme: &'a FrameTheme) -> Self {
        Self {
            state,
            title: None,
            padding: 1,
            theme,
        }
    }

    pub fn title(mut self, title: Option<&'a str>) -> Self {
        self.title = title;
        self
    }

    pub fn padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Width available to content inside a frame of `width` columns.
    pub fn interior_width(&self, width: usize) -> usize {
        width.saturating_sub(2 * BORDER + 2 * self.effective_padding(width))
    }

    /// Rows available to content inside a frame of `height` rows.
    pub fn interior_height(&self, height: usize) -> usize {
        height.saturating_sub(2 * BORDER)
    }

    fn effective_padding(&self, width: usize) -> usize {
        self.padding.min(width.saturating_sub(2 * BORDER) / 2)
    }

    /// Render `content` inside the frame, returning exactly `height` lines of
    /// visible width `width`.
    pub fn render(&self, content: &str, width: usize, height: usize) -> Vec<String> {
        if width < 2 * BORDER || height < 2 * BORDER {
            return vec![" ".repeat(width); height];
        }

        let style = self.theme.style_for(self.state);
        let glyphs = style.glyphs;
        let pad = " ".repeat(self.effective_padding(width));
        let interior = self.interior_width(width);
        let vertical = style.border.paint(&glyphs.vertical.to_string());

        let mut lines = Vec::with_capacity(height);
        lines.push(self.top_border(style, width));

        let mut content_lines = content.lines();
        for _ in 0..self.interior_height(height) {
            let raw = content_lines.next().unwrap_or("");
            let mut body = pad_to_width(raw, interior);
            if has_escape(raw) {
                body.push_str("\x1b[0m");
            }
            lines.push(format!("{vertical}{pad}{body}{pad}{vertical}"));
        }

        let bottom = format!(
            "{}{}{}",
            glyphs.bottom_left,
            glyphs.horizontal.to_string().repeat(width - 2 * BORDER),
            glyphs.bottom_right
        );
        lines.push(style.border.paint(&bottom));
        lines
    }

    fn top_border(&self, style: &FrameStyle, width: usize) -> String {
        let glyphs = style.glyphs;
        let run = width - 2 * BORDER;
        let horizontal = glyphs.horizontal.to_string();

        let label = match self.title {
            // Needs room for a leading rule, a space on each side and one title char.
            Some(title) if run >= 4 && !title.is_empty() => {
                Some(format!(" {} ", truncate(title, run - 3)))
            }
            _ => None,
        };

        match label {
            Some(label) => {
                let used = 1 + crate::ansi::visible_width(&label);
                let left = format!("{}{}", glyphs.top_left, horizontal);
                let right = format!(
                    "{}{}",
                    horizontal.repeat(run.saturating_sub(used)),
                    glyphs.top_right
                );
                format!(
                    "{}{}{}",
                    style.border.paint(&left),
                    style.title.paint(&label),
                    style.border.paint(&right)
                )
            }
            None => style.border.paint(&format!(
                "{}{}{}",
                glyphs.top_left,
                horizontal.repeat(run),
                glyphs.top_right
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ansi::{strip_ansi, visible_width};
    use insta::assert_snapshot;
    use test_case::test_case;

    fn plain(state: FrameState) -> Frame<'static> {
        Frame::new(state, &FrameTheme::PLAIN)
    }

    #[test]
    fn normal_frame_snapshot() {
        let lines = plain(FrameState::Normal)
            .title(Some("Jobs"))
            .render("alpha\nbeta", 14, 5);
        assert_snapshot!(lines.join("\n"), @r"
        +- Jobs -----+
        | alpha      |
        | beta       |
        |            |
        +------------+
        ");
    }

    #[test_case(FrameState::Normal ; "normal")]
    #[test_case(FrameState::Focused ; "focused")]
    #[test_case(FrameState::Selected ; "selected")]
    fn every_line_has_frame_width(state: FrameState) {
        let frame = Frame::new(state, &FrameTheme::DEFAULT).title(Some("Build"));
        let content = "\x1b[32mok\x1b[0m\na much longer line that overflows\n\nlast";
        let lines = frame.render(content, 20, 6);
        assert_eq!(lines.len(), 6);
        for line in &lines {
            assert_eq!(visible_width(line), 20, "line {:?}", line);
        }
    }

    #[test]
    fn states_use_distinct_glyphs() {
        let top = |state| strip_ansi(&Frame::new(state, &FrameTheme::DEFAULT).render("", 10, 3)[0]);
        let (normal, focused, selected) = (
            top(FrameState::Normal),
            top(FrameState::Focused),
            top(FrameState::Selected),
        );
        assert!(normal.starts_with('╭'));
        assert!(focused.starts_with('┏'));
        assert!(selected.starts_with('╔'));
    }

    #[test]
    fn states_use_distinct_colors() {
        let theme = FrameTheme::DEFAULT;
        assert_ne!(theme.normal.border, theme.focused.border);
        assert_ne!(theme.focused.border, theme.selected.border);
    }

    #[test]
    fn overflowing_content_is_dropped() {
        let lines = plain(FrameState::Normal).render("1\n2\n3\n4\n5", 8, 4);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "| 1    |");
        assert_eq!(lines[2], "| 2    |");
        assert_eq!(lines[3], "+------+");
    }

    #[test]
    fn styled_content_is_reset_before_border() {
        let lines = plain(FrameState::Normal).render("\x1b[31mred", 10, 3);
        assert!(lines[1].ends_with("\x1b[0m |"));
    }

    #[test]
    fn unterminated_escape_keeps_line_width() {
        let lines = plain(FrameState::Normal).render("ab\x1b[31", 10, 3);
        let widths: Vec<usize> = lines.iter().map(|l| visible_width(l)).collect();
        assert_eq!(widths, vec![10, 10, 10]);
        assert_eq!(strip_ansi(&lines[1]), "| ab     |");
    }

    #[test]
    fn long_title_is_truncated() {
        let lines = plain(FrameState::Normal)
            .title(Some("an extremely long title"))
            .render("", 12, 3);
        assert_eq!(visible_width(&lines[0]), 12);
        assert_eq!(lines[0], "+- an e... +");
    }

    #[test]
    fn degenerate_sizes_render_blank() {
        let lines = plain(FrameState::Normal).render("x", 1, 3);
        assert_eq!(lines, vec![" "; 3]);
        assert!(plain(FrameState::Normal).render("x", 5, 0).is_empty());
    }

    #[test]
    fn padding_shrinks_interior() {
        let frame = plain(FrameState::Normal).padding(2);
        assert_eq!(frame.interior_width(20), 14);
        assert_eq!(frame.interior_height(6), 4);
        let lines = frame.render("abc", 10, 3);
        assert_eq!(lines[1], "|  abc   |");
    }
}
