//! Colour alphabet and the differential transition codec.
//!
//! The link can only report "which colour is showing" and "for how long", so
//! symbols are carried by the *change* from one colour to the next. For every
//! previous colour there are exactly four reachable colours, giving two bits
//! per transition:
//!
//! | previous | symbol 0 | symbol 1 | symbol 2 | symbol 3 |
//! |----------|----------|----------|----------|----------|
//! | Off      | White    | Red      | Green    | Blue     |
//! | White    | Off      | Red      | Green    | Blue     |
//! | Red      | Off      | White    | Green    | Blue     |
//! | Green    | Off      | White    | Red      | Blue     |
//! | Blue     | Off      | White    | Red      | Green    |
//!
//! Symbol 0 is the neutral transition: Off's neutral partner is White, and every
//! other colour's neutral partner is Off. Holding the same colour also reads as
//! symbol 0, but the decoder never sees it as a transition.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Symbol;

/// One of the five discrete signal levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Color {
    /// No light.
    #[default]
    Off,
    White,
    Red,
    Green,
    Blue,
}

impl Color {
    /// Every colour in fixed declaration order. Both directions of the codec
    /// enumerate candidates in this order.
    pub const ALL: [Color; 5] = [Color::Off, Color::White, Color::Red, Color::Green, Color::Blue];

    /// Light-level number of this colour (Off = 0 .. Blue = 4).
    pub const fn level(self) -> u8 {
        match self {
            Color::Off => 0,
            Color::White => 1,
            Color::Red => 2,
            Color::Green => 3,
            Color::Blue => 4,
        }
    }

    /// Colour for a light-level number, or `None` outside `0..=4`.
    pub const fn from_level(level: u8) -> Option<Color> {
        match level {
            0 => Some(Color::Off),
            1 => Some(Color::White),
            2 => Some(Color::Red),
            3 => Some(Color::Green),
            4 => Some(Color::Blue),
            _ => None,
        }
    }

    /// The colour that carries symbol 0 away from `self`.
    pub const fn neutral_partner(self) -> Color {
        match self {
            Color::Off => Color::White,
            _ => Color::Off,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Off => "off",
            Color::White => "white",
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// Symbol carried by the transition `prev -> curr`.
///
/// Same colour or the neutral partner yields symbol 0; the remaining three
/// colours take symbols 1, 2 and 3 in declaration order.
pub fn symbol_for_transition(prev: Color, curr: Color) -> Symbol {
    if curr == prev || curr == prev.neutral_partner() {
        return Symbol::NEUTRAL;
    }
    let mut next = 1u8;
    for candidate in Color::ALL {
        if candidate == prev || candidate == prev.neutral_partner() {
            continue;
        }
        if candidate == curr {
            return Symbol::new(next);
        }
        next += 1;
    }
    // Unreachable for a five-colour alphabet: `curr` is one of the candidates.
    Symbol::NEUTRAL
}

/// Colour that, following `prev`, carries `symbol`.
///
/// Scans the alphabet in declaration order, skipping `prev`, and returns the
/// first colour whose transition maps back to `symbol`. Symbols above 3 are
/// clamped to 3 first.
pub fn color_for_symbol(prev: Color, symbol: Symbol) -> Color {
    let symbol = symbol.clamped();
    Color::ALL
        .into_iter()
        .filter(|&candidate| candidate != prev)
        .find(|&candidate| symbol_for_transition(prev, candidate) == symbol)
        .unwrap_or(Color::Off)
}
