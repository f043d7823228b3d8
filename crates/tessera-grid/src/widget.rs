//! The contract between the board and a card body.

use crate::spinner::Schedule;

/// A card body. The board owns the frame around it and tells it nothing beyond the
/// size it has to fill and the focus/selection transitions it goes through.
///
/// Only [`render`](Widget::render) is required. Returned text may carry SGR
/// sequences; lines are cut to the interior width and extra lines are dropped.
pub trait Widget {
    fn render(&self, width: usize, height: usize) -> String;

    /// Label embedded in the card's top border.
    fn title(&self) -> Option<&str> {
        None
    }

    fn focus(&mut self) {}

    fn blur(&mut self) {}

    fn select(&mut self) {}

    fn deselect(&mut self) {}

    /// Called once when the card joins a board. Return a schedule to start animating.
    fn init(&mut self) -> Option<Schedule> {
        None
    }

    /// Handle a tick from run `epoch`. Returning `None` stops the animation.
    fn tick(&mut self, _epoch: u64) -> Option<Schedule> {
        None
    }
}
