//! Centered, size-clamped modal overlay.
//!
//! The rectangle is a percentage of the viewport, truncated to whole cells, clamped
//! between the policy minimums and the viewport less [`MARGIN`]. Centering uses floor
//! division, so an odd slack puts the extra cell on the right and bottom.

use tessera_config::{ModalConfig, OverlayKind};
use tracing::debug;

use crate::cell_grid::CellGrid;
use crate::frame::{Frame, FrameState, FrameTheme};
use crate::layout::Viewport;

/// Cells reserved on each axis so the modal never touches the viewport edge.
pub const MARGIN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModalPolicy {
    pub pct_width: f64,
    pub pct_height: f64,
    pub min_width: usize,
    pub min_height: usize,
}

impl Default for ModalPolicy {
    fn default() -> Self {
        ModalConfig::default().into()
    }
}

impl From<ModalConfig> for ModalPolicy {
    fn from(config: ModalConfig) -> Self {
        Self {
            pct_width: config.pct_width,
            pct_height: config.pct_height,
            min_width: config.min_width,
            min_height: config.min_height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayMode {
    /// Emit only the modal, shifted into place with leading blank lines and spaces.
    /// Whatever was on screen is expected to be cleared by the display layer.
    Sequential,
    /// Paint the modal over the grid canvas.
    Layered,
}

impl From<OverlayKind> for OverlayMode {
    fn from(kind: OverlayKind) -> Self {
        match kind {
            OverlayKind::Sequential => OverlayMode::Sequential,
            OverlayKind::Layered => OverlayMode::Layered,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

fn clamp_extent(total: usize, pct: f64, min: usize) -> usize {
    let scaled = (total as f64 * pct).floor().max(0.0) as usize;
    let max = total.saturating_sub(MARGIN).max(1);
    scaled.max(min).max(1).min(max)
}

impl ModalRect {
    pub fn compute(viewport: Viewport, policy: &ModalPolicy) -> Self {
        let width = clamp_extent(viewport.width, policy.pct_width, policy.min_width);
        let height = clamp_extent(viewport.height, policy.pct_height, policy.min_height);
        Self {
            x: viewport.width.saturating_sub(width) / 2,
            y: viewport.height.saturating_sub(height) / 2,
            width,
            height,
        }
    }

    /// Shift each line right by `x` and push the block down by `y` blank lines.
    pub fn place_sequential(&self, block: &[String]) -> Vec<String> {
        let indent = " ".repeat(self.x);
        std::iter::repeat(String::new())
            .take(self.y)
            .chain(block.iter().map(|line| format!("{indent}{line}")))
            .collect()
    }

    /// Paint `block` over `canvas` inside a viewport-sized cell grid.
    ///
    /// The canvas is clipped to the viewport width; rows past the viewport height are
    /// kept so an oversized grid is not silently cut.
    pub fn place_layered(&self, canvas: &[String], block: &[String], viewport: Viewport) -> Vec<String> {
        let height = viewport.height.max(canvas.len());
        let mut grid = CellGrid::new(viewport.width, height);
        grid.blit_lines(canvas, 0, 0);
        grid.blit_lines(block, self.x, self.y);
        grid.to_lines()
    }
}

/// Modal state owned by the board.
#[derive(Debug, Clone)]
pub struct Modal {
    visible: bool,
    title: Option<String>,
    content: String,
    policy: ModalPolicy,
}

impl Modal {
    pub fn new(policy: ModalPolicy) -> Self {
        Self {
            visible: false,
            title: None,
            content: String::new(),
            policy,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn policy(&self) -> &ModalPolicy {
        &self.policy
    }

    pub fn set_policy(&mut self, policy: ModalPolicy) {
        self.policy = policy;
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn open(&mut self, title: Option<String>, content: impl Into<String>) {
        self.title = title;
        self.content = content.into();
        self.visible = true;
        debug!(title = ?self.title, "modal opened");
    }

    /// Hide the modal. Returns false if it was already hidden.
    pub fn close(&mut self) -> bool {
        let was_visible = std::mem::replace(&mut self.visible, false);
        if was_visible {
            debug!("modal closed");
        }
        was_visible
    }

    /// Frame the modal content at the size the policy allows for `viewport`.
    pub fn render_block(&self, viewport: Viewport, theme: &FrameTheme, padding: usize) -> (ModalRect, Vec<String>) {
        let rect = ModalRect::compute(viewport, &self.policy);
        let block = Frame::new(FrameState::Focused, theme)
            .title(self.title.as_deref())
            .padding(padding)
            .render(&self.content, rect.width, rect.height);
        (rect, block)
    }

    /// Combine the modal with `canvas` if visible; otherwise return the canvas.
    pub fn overlay(
        &self,
        canvas: Vec<String>,
        viewport: Viewport,
        mode: OverlayMode,
        theme: &FrameTheme,
        padding: usize,
    ) -> Vec<String> {
        if !self.visible {
            return canvas;
        }
        let (rect, block) = self.render_block(viewport, theme, padding);
        match mode {
            OverlayMode::Sequential => rect.place_sequential(&block),
            OverlayMode::Layered => rect.place_layered(&canvas, &block, viewport),
        }
    }
}
