//! A static card of text lines that marks itself when focused or selected.

use crate::style::{Color, Style};
use crate::widget::Widget;

const FOCUS_MARKER: &str = "> ";
const SELECT_MARKER: &str = "* ";
const NO_MARKER: &str = "  ";

/// Static lines with a leading marker that follows the focus and selection hooks.
#[derive(Debug, Clone, Default)]
pub struct TextCard {
    title: Option<String>,
    lines: Vec<String>,
    focused: bool,
    selected: bool,
}

impl TextCard {
    pub fn new(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    fn marker(&self) -> String {
        if self.selected {
            Style::new().fg(Color::DarkYellow).bold().paint(SELECT_MARKER)
        } else if self.focused {
            Style::new().fg(Color::DarkCyan).paint(FOCUS_MARKER)
        } else {
            NO_MARKER.to_string()
        }
    }
}

impl Widget for TextCard {
    fn render(&self, _width: usize, height: usize) -> String {
        let marker = self.marker();
        self.lines
            .iter()
            .take(height)
            .enumerate()
            .map(|(i, line)| {
                if i == 0 {
                    format!("{marker}{line}")
                } else {
                    format!("{NO_MARKER}{line}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn select(&mut self) {
        self.selected = true;
    }

    fn deselect(&mut self) {
        self.selected = false;
    }
}
