//! Input events consumed by [`Board::update`](crate::board::Board::update).
//!
//! Keys use crossterm types directly; [`NavAction`] is the abstraction layer the
//! board dispatches on.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Identifies which card an animation tick belongs to and which run issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickId {
    pub card: CardId,
    pub epoch: u64,
}

/// Stable card handle. Survives removal of other cards, unlike a grid index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Resize { width: u16, height: u16 },
    Key(KeyEvent),
    Tick(TickId),
}

impl From<KeyEvent> for Event {
    fn from(key: KeyEvent) -> Self {
        Event::Key(key)
    }
}

/// What a key does on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Left,
    Right,
    Up,
    Down,
    ToggleSelect,
    Cancel,
}

impl NavAction {
    /// Map a key press to an action. Releases and control/alt chords map to `None`,
    /// as do unbound keys.
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return None;
        }
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => Some(NavAction::Left),
            KeyCode::Right | KeyCode::Char('l') => Some(NavAction::Right),
            KeyCode::Up | KeyCode::Char('k') => Some(NavAction::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(NavAction::Down),
            KeyCode::Enter | KeyCode::Char(' ') => Some(NavAction::ToggleSelect),
            KeyCode::Esc => Some(NavAction::Cancel),
            _ => None,
        }
    }
}
