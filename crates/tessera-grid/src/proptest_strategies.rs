//! Proptest strategies for grid property tests
//!
//! Provides reusable generators for layout, navigation and text measurement.

use crate::focus::Direction;
use crate::layout::{GridOptions, Viewport};
use proptest::prelude::*;

/// Viewport width: 0 (edge case), narrow (1-20), normal (21-240)
pub fn arb_width() -> impl Strategy<Value = usize> {
    prop_oneof![
        1 => Just(0usize),
        2 => 1usize..=20,
        7 => 21usize..=240,
    ]
}

pub fn arb_viewport() -> impl Strategy<Value = Viewport> {
    (arb_width(), 0usize..=80).prop_map(|(width, height)| Viewport::new(width, height))
}

/// Card counts, weighted toward small grids where edges matter most
pub fn arb_card_count() -> impl Strategy<Value = usize> {
    prop_oneof![
        1 => Just(0usize),
        6 => 1usize..=12,
        3 => 13usize..=60,
    ]
}

pub fn arb_gap() -> impl Strategy<Value = usize> {
    0usize..4
}

/// Fixed or responsive options with a small gap
pub fn arb_grid_options() -> impl Strategy<Value = GridOptions> {
    prop_oneof![
        (0usize..8, arb_gap()).prop_map(|(columns, gap)| GridOptions::fixed(columns, gap)),
        (1usize..60, arb_gap()).prop_map(|(min, gap)| GridOptions::responsive(min, gap)),
    ]
}

pub fn arb_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Left),
        Just(Direction::Right),
        Just(Direction::Up),
        Just(Direction::Down),
    ]
}

/// Text with SGR color runs mixed into plain words
pub fn arb_styled_text() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        3 => "[a-zA-Z0-9 ]{0,12}",
        1 => (30u8..38).prop_map(|code| format!("\x1b[{code}m")),
        1 => Just("\x1b[0m".to_string()),
        1 => Just("\x1b[1;36m".to_string()),
    ];
    prop::collection::vec(piece, 0..10).prop_map(|pieces| pieces.concat())
}

/// Arbitrary text plus escape fragments that never terminate
///
/// Mixes unicode strings, well-formed SGR runs, a bare `ESC`, and `ESC [` with
/// parameters but no final letter, alone or at the end of the text.
pub fn arb_messy_text() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        3 => any::<String>(),
        2 => arb_styled_text(),
        1 => Just("\x1b".to_string()),
        1 => "[0-9;]{0,6}".prop_map(|params| format!("\x1b[{params}")),
    ];
    prop::collection::vec(piece, 0..6).prop_map(|pieces| pieces.concat())
}

/// Card body of a few styled lines
pub fn arb_body() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_styled_text(), 0..12).prop_map(|lines| lines.join("\n"))
}

pub fn arb_messy_body() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_messy_text(), 0..12).prop_map(|lines| lines.join("\n"))
}
