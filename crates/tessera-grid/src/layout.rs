//! Grid geometry.
//!
//! Geometry is a pure function of the viewport, the grid options, the card count and
//! the title band height. It is recomputed in full on every render pass; nothing
//! here is cached.

use tracing::trace;

/// Narrowest cell the engine will produce.
pub const MIN_CELL_WIDTH: usize = 10;
/// Shortest cell the engine will produce.
pub const MIN_CELL_HEIGHT: usize = 8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: usize,
    pub height: usize,
}

impl Viewport {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

impl From<(u16, u16)> for Viewport {
    fn from((width, height): (u16, u16)) -> Self {
        Self::new(width as usize, height as usize)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridPolicy {
    Fixed(usize),
    Responsive { min_cell_width: usize },
}

impl Default for GridPolicy {
    fn default() -> Self {
        GridPolicy::Fixed(2)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridOptions {
    pub policy: GridPolicy,
    pub gap: usize,
}

impl GridOptions {
    pub fn fixed(columns: usize, gap: usize) -> Self {
        Self {
            policy: GridPolicy::Fixed(columns),
            gap,
        }
    }

    pub fn responsive(min_cell_width: usize, gap: usize) -> Self {
        Self {
            policy: GridPolicy::Responsive { min_cell_width },
            gap,
        }
    }

    /// Column count for `cells` cards in a viewport `viewport_width` wide.
    pub fn columns(&self, viewport_width: usize, cells: usize) -> usize {
        let wanted = match self.policy {
            GridPolicy::Fixed(columns) => columns,
            GridPolicy::Responsive { min_cell_width } => {
                viewport_width / min_cell_width.saturating_add(self.gap).max(1)
            }
        };
        wanted.clamp(1, cells.max(1))
    }
}

/// The derived shape of one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub columns: usize,
    pub rows: usize,
    pub cell_width: usize,
    pub cell_height: usize,
    pub gap: usize,
}

impl GridGeometry {
    pub fn compute(
        viewport: Viewport,
        options: &GridOptions,
        cells: usize,
        title_band_height: usize,
    ) -> Self {
        let gap = options.gap;
        let columns = options.columns(viewport.width, cells);
        let rows = cells.div_ceil(columns);

        let cell_width = (viewport.width.saturating_sub(gap.saturating_mul(columns - 1))
            / columns)
            .max(MIN_CELL_WIDTH);

        let usable_height = viewport
            .height
            .saturating_sub(title_band_height)
            .saturating_sub(gap.saturating_mul(rows.saturating_sub(1)));
        let cell_height = (usable_height / rows.max(1)).max(MIN_CELL_HEIGHT);

        let geometry = Self {
            columns,
            rows,
            cell_width,
            cell_height,
            gap,
        };
        trace!(?viewport, cells, ?geometry, "grid layout");
        geometry
    }

    /// Width of the composed grid: every column plus the gaps between them.
    /// Saturates instead of overflowing.
    pub fn total_width(&self) -> usize {
        span(self.columns, self.cell_width, self.gap)
    }

    /// Height of the composed grid, excluding any title band.
    pub fn total_height(&self) -> usize {
        span(self.rows, self.cell_height, self.gap)
    }

    /// Grid coordinates of card `index`.
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }
}

/// Extent of `count` cells of `size` separated by `gap`, saturating at `usize::MAX`.
pub(crate) fn span(count: usize, size: usize, gap: usize) -> usize {
    count
        .saturating_mul(size)
        .saturating_add(gap.saturating_mul(count.saturating_sub(1)))
}
