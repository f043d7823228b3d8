//! Focus and selection over an ordered card list laid out in rows.
//!
//! Focus and selection are independent: moving focus never touches the selection,
//! and cancelling the selection never touches focus. Moves that would leave the grid
//! are rejected rather than wrapped.

use crate::frame::FrameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Widget notification produced by a navigator transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hook {
    Focus(usize),
    Blur(usize),
    Select(usize),
    Deselect(usize),
}

impl Hook {
    /// Card the hook is addressed to.
    pub fn index(&self) -> usize {
        match *self {
            Hook::Focus(i) | Hook::Blur(i) | Hook::Select(i) | Hook::Deselect(i) => i,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusNavigator {
    len: usize,
    focused: Option<usize>,
    selected: Option<usize>,
}

impl FocusNavigator {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            focused: None,
            selected: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Visual state of card `index`. Selection outranks focus.
    pub fn frame_state(&self, index: usize) -> FrameState {
        if self.selected == Some(index) {
            FrameState::Selected
        } else if self.focused == Some(index) {
            FrameState::Focused
        } else {
            FrameState::Normal
        }
    }

    /// Focus `index` directly. Out-of-range indices are ignored.
    pub fn focus(&mut self, index: usize) -> Vec<Hook> {
        if index >= self.len || self.focused == Some(index) {
            return Vec::new();
        }
        let mut hooks = Vec::with_capacity(2);
        if let Some(prev) = self.focused {
            hooks.push(Hook::Blur(prev));
        }
        self.focused = Some(index);
        hooks.push(Hook::Focus(index));
        hooks
    }

    /// Move focus one step. An unfocused grid focuses its first card instead.
    pub fn move_focus(&mut self, direction: Direction, columns: usize) -> Vec<Hook> {
        let Some(current) = self.focused else {
            return self.focus(0);
        };
        let columns = columns.max(1);

        let target = match direction {
            Direction::Right => current.checked_add(1),
            Direction::Left => current.checked_sub(1),
            Direction::Down => current.checked_add(columns),
            Direction::Up => current.checked_sub(columns),
        };

        match target {
            Some(next) if next < self.len => self.focus(next),
            _ => Vec::new(),
        }
    }

    /// Toggle selection on the focused card.
    pub fn toggle_select(&mut self) -> Vec<Hook> {
        let Some(current) = self.focused else {
            return Vec::new();
        };

        if self.selected == Some(current) {
            self.selected = None;
            return vec![Hook::Deselect(current)];
        }

        let mut hooks = Vec::with_capacity(2);
        if let Some(prev) = self.selected.take() {
            hooks.push(Hook::Deselect(prev));
        }
        self.selected = Some(current);
        hooks.push(Hook::Select(current));
        hooks
    }

    /// Clear the selection, leaving focus where it is.
    pub fn cancel(&mut self) -> Vec<Hook> {
        match self.selected.take() {
            Some(prev) => vec![Hook::Deselect(prev)],
            None => Vec::new(),
        }
    }

    /// Account for a card appended at the end of the list.
    pub fn push(&mut self) {
        self.len += 1;
    }

    /// Account for removal of card `index`, shifting later indices down.
    ///
    /// Returns hooks for the card that inherits focus, if any. Indices past the end
    /// are ignored.
    pub fn remove(&mut self, index: usize) -> Vec<Hook> {
        if index >= self.len {
            return Vec::new();
        }
        self.len -= 1;

        self.selected = match self.selected {
            Some(s) if s == index => None,
            Some(s) if s > index => Some(s - 1),
            other => other,
        };

        match self.focused {
            Some(f) if f == index => {
                if self.len == 0 {
                    self.focused = None;
                    Vec::new()
                } else {
                    let next = index.min(self.len - 1);
                    self.focused = Some(next);
                    vec![Hook::Focus(next)]
                }
            }
            Some(f) if f > index => {
                self.focused = Some(f - 1);
                Vec::new()
            }
            _ => Vec::new(),
        }
    }
}
