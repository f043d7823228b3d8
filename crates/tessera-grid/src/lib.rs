//! # Tessera Grid
//!
//! Renders a grid of framed cards into a terminal viewport, with a single focus
//! cursor, an independent selection marker and a centered modal overlay.
//!
//! The pipeline for one frame is:
//!
//! 1. [`GridGeometry::compute`] derives columns and cell size from the viewport
//! 2. each [`Widget`] renders its body at the interior size of its cell
//! 3. [`Frame`] wraps the body in chrome for its [`FrameState`]
//! 4. [`Compositor`] stitches the blocks into rows under an optional title band
//! 5. [`Modal`] lays an overlay on top when visible
//!
//! [`Board`] drives that pipeline and consumes [`Event`]s one at a time.
//!
//! ```rust
//! use tessera_grid::{Board, Event, TextCard};
//! use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
//!
//! let mut builder = Board::builder();
//! builder.viewport(80, 24).columns(2).title("Services");
//! for name in ["api", "db", "queue"] {
//!     builder.card(TextCard::new([name]));
//! }
//! let mut board = builder.build();
//!
//! board.update(Event::Key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)));
//! assert_eq!(board.focused(), Some(2));
//! println!("{}", board.render());
//! ```

pub mod ansi;
pub mod board;
pub mod cell_grid;
pub mod compositor;
pub mod event;
pub mod focus;
pub mod frame;
pub mod layout;
pub mod modal;
pub mod spinner;
pub mod style;
pub mod widget;
pub mod widgets;

#[cfg(any(test, feature = "test-utils"))]
pub mod proptest_strategies;

pub use board::{Board, BoardBuilder, ScheduledTick};
pub use compositor::{Compositor, TITLE_BAND_HEIGHT};
pub use event::{CardId, Event, NavAction, TickId};
pub use focus::{Direction, FocusNavigator, Hook};
pub use frame::{Frame, FrameState, FrameTheme};
pub use layout::{GridGeometry, GridOptions, GridPolicy, Viewport};
pub use modal::{Modal, ModalPolicy, ModalRect, OverlayMode};
pub use spinner::{Schedule, Spinner, TaskStatus};
pub use style::{Color, Style};
pub use widget::Widget;
pub use widgets::{TaskCard, TextCard};

/// Text measurement helpers re-exported for widget authors.
pub mod utils {
    pub use crate::ansi::{center, pad_to_width, strip_ansi, truncate, visible_width};
}
