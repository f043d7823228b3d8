//! Small card bodies used by the CLI and tests.

mod task;
mod text;

pub use task::TaskCard;
pub use text::TextCard;
