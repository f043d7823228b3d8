//! Draws a whole grid of framed cards, plus an optional title band, into lines.

use crate::ansi::{center, pad_to_width};
use crate::frame::{Frame, FrameState, FrameTheme};
use crate::layout::{span, GridGeometry};

/// Rows taken by a title band: top border, centered title, bottom border.
pub const TITLE_BAND_HEIGHT: usize = 3;

/// Title band height for an optional title.
pub fn title_band_height(title: Option<&str>) -> usize {
    if title.is_some() {
        TITLE_BAND_HEIGHT
    } else {
        0
    }
}

/// Merges per-card blocks into a single canvas, row-group by row-group.
pub struct Compositor<'a> {
    columns: usize,
    cell_width: usize,
    gap: usize,
    title: Option<&'a str>,
    theme: &'a FrameTheme,
}

impl<'a> Compositor<'a> {
    pub fn new(geometry: &GridGeometry, theme: &'a FrameTheme) -> Self {
        Self {
            columns: geometry.columns.max(1),
            cell_width: geometry.cell_width,
            gap: geometry.gap,
            title: None,
            theme,
        }
    }

    pub fn title(mut self, title: Option<&'a str>) -> Self {
        self.title = title;
        self
    }

    pub fn width(&self) -> usize {
        span(self.columns, self.cell_width, self.gap)
    }

    /// Lay `blocks` out left to right, top to bottom.
    ///
    /// Blocks in the same row-group are padded to the tallest block with blank lines
    /// of the slot width, and a short final row is filled with blank slots so every
    /// output line has the full canvas width.
    pub fn compose(&self, blocks: &[Vec<String>]) -> Vec<String> {
        let width = self.width();
        let separator = " ".repeat(self.gap);
        let blank_slot = " ".repeat(self.cell_width);
        let mut lines = Vec::new();

        if let Some(title) = self.title {
            let band = Frame::new(FrameState::Normal, self.theme)
                .padding(0)
                .render(&center(title, width.saturating_sub(2)), width, TITLE_BAND_HEIGHT);
            lines.extend(band);
        }

        for (group_index, group) in blocks.chunks(self.columns).enumerate() {
            if group_index > 0 {
                for _ in 0..self.gap {
                    lines.push(" ".repeat(width));
                }
            }

            let height = group.iter().map(Vec::len).max().unwrap_or(0);
            for row in 0..height {
                let mut line = String::new();
                for slot in 0..self.columns {
                    if slot > 0 {
                        line.push_str(&separator);
                    }
                    match group.get(slot).and_then(|block| block.get(row)) {
                        Some(cell_line) => line.push_str(&pad_to_width(cell_line, self.cell_width)),
                        None => line.push_str(&blank_slot),
                    }
                }
                lines.push(line);
            }
        }

        lines
    }

    pub fn compose_to_string(&self, blocks: &[Vec<String>]) -> String {
        self.compose(blocks).join("\n")
    }
}
