use core::{convert::TryFrom, str::FromStr};

use super::card::ParseError;

/// One of the four French playing card suits.
///
/// Suits are ordered by their nominal encoding value, with
/// [`Suit::Spade`] the lowest and [`Suit::Club`] the highest.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum Suit {
    Spade = 0,
    Heart,
    Diamond,
    Club,
}

impl Suit {
    /// Returns the one-hot nibble used in the card encoding
    /// (spade = 1, heart = 2, diamond = 4, club = 8).
    pub fn nibble(self) -> u32 {
        1 << (self as u32)
    }
}

impl TryFrom<u8> for Suit {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Suit::Spade),
            1 => Ok(Suit::Heart),
            2 => Ok(Suit::Diamond),
            3 => Ok(Suit::Club),
            _ => Err(ParseError),
        }
    }
}

impl FromStr for Suit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        match s {
            "s" | "♠" => Ok(Suit::Spade),
            "h" | "♥" => Ok(Suit::Heart),
            "d" | "♦" => Ok(Suit::Diamond),
            "c" | "♣" => Ok(Suit::Club),
            _ => Err(ParseError),
        }
    }
}
