//! Board configuration
//!
//! The recognized option surface for a card board. Every field has a default so a
//! partial file (or no file at all) yields a usable board.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ConfigError, ConfigResult};

/// Default column count for the fixed grid policy.
pub const DEFAULT_COLUMNS: usize = 2;
/// Default spacing between cells, in character cells.
pub const DEFAULT_GAP: usize = 1;
/// Default minimum cell width for the responsive grid policy.
pub const DEFAULT_MIN_CELL_WIDTH: usize = 30;
/// Default horizontal padding inside each card frame.
pub const DEFAULT_FRAME_PADDING: usize = 1;
/// Largest gap or cell width accepted; no terminal is wider than this.
pub const MAX_EXTENT: usize = u16::MAX as usize;
/// Default spinner cadence in milliseconds.
pub const DEFAULT_SPINNER_INTERVAL_MS: u64 = 100;

/// Top-level board configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Column count used when `responsive` is false. Must be at least 1.
    pub columns: usize,
    /// Blank cells between grid columns and rows.
    pub gap: usize,
    /// Smallest cell width the responsive policy will lay out. Must be positive.
    pub min_cell_width: usize,
    /// Derive the column count from the viewport width instead of `columns`.
    pub responsive: bool,
    /// Text of the title band above the grid. Empty means no title band.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Horizontal padding between a frame border and its content.
    pub frame_padding: usize,
    /// How the modal is combined with the grid canvas.
    pub overlay: OverlayKind,
    /// Interval between animation ticks.
    pub spinner_interval_ms: u64,
    /// Modal sizing policy.
    pub modal: ModalConfig,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            gap: DEFAULT_GAP,
            min_cell_width: DEFAULT_MIN_CELL_WIDTH,
            responsive: false,
            title: None,
            frame_padding: DEFAULT_FRAME_PADDING,
            overlay: OverlayKind::default(),
            spinner_interval_ms: DEFAULT_SPINNER_INTERVAL_MS,
            modal: ModalConfig::default(),
        }
    }
}

/// Modal sizing policy, as fractions of the viewport with absolute minimums.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    /// Fraction of the viewport width, in `(0, 1]`.
    pub pct_width: f64,
    /// Fraction of the viewport height, in `(0, 1]`.
    pub pct_height: f64,
    /// Minimum modal width in cells.
    pub min_width: usize,
    /// Minimum modal height in cells.
    pub min_height: usize,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            pct_width: 0.7,
            pct_height: 0.8,
            min_width: 60,
            min_height: 20,
        }
    }
}

/// Modal placement strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayKind {
    /// Emit the modal alone, offset into place. The display clears and redraws.
    #[default]
    Sequential,
    /// Paint the modal over the grid canvas.
    Layered,
}

impl BoardConfig {
    /// Check every option against its allowed range.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.columns == 0 {
            return Err(ConfigError::invalid("columns", "must be at least 1"));
        }
        if self.min_cell_width == 0 {
            return Err(ConfigError::invalid("min_cell_width", "must be positive"));
        }
        if self.min_cell_width > MAX_EXTENT {
            return Err(ConfigError::invalid(
                "min_cell_width",
                format!("must be at most {MAX_EXTENT}"),
            ));
        }
        if self.gap > MAX_EXTENT {
            return Err(ConfigError::invalid(
                "gap",
                format!("must be at most {MAX_EXTENT}"),
            ));
        }
        if self.spinner_interval_ms == 0 {
            return Err(ConfigError::invalid(
                "spinner_interval_ms",
                "must be positive",
            ));
        }
        self.modal.validate()
    }

    /// Collapse equivalent spellings: a blank title is the same as no title.
    pub fn normalized(mut self) -> Self {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                warn!("ignoring blank board title");
                self.title = None;
            }
        }
        self
    }

    /// Title text, if a title band should be rendered.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.trim().is_empty())
    }
}

impl ModalConfig {
    /// Check fractions are in `(0, 1]`.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.pct_width > 0.0 && self.pct_width <= 1.0) {
            return Err(ConfigError::invalid(
                "modal.pct_width",
                format!("{} is outside (0, 1]", self.pct_width),
            ));
        }
        if !(self.pct_height > 0.0 && self.pct_height <= 1.0) {
            return Err(ConfigError::invalid(
                "modal.pct_height",
                format!("{} is outside (0, 1]", self.pct_height),
            ));
        }
        Ok(())
    }
}
