use core::{convert::TryFrom, str::FromStr};

use super::card::ParseError;

/// One of the thirteen ranks of a standard French 52-playing card deck.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum Rank {
    Two = 0,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

/// One-character notation for each rank, deuces to aces.
const SYMBOLS: &[u8; 13] = b"23456789TJQKA";

impl Rank {
    /// Every rank, deuces to aces.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Returns the rank's position in the ace-low ordering used by lowball
    /// rankings, with [`Rank::Ace`] at 0 and [`Rank::King`] at 12.
    pub fn ace_index(self) -> u8 {
        (self as u8 + 1) % 13
    }
}

impl TryFrom<u8> for Rank {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::ALL.get(value as usize).copied().ok_or(ParseError)
    }
}

impl FromStr for Rank {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            [symbol] => SYMBOLS
                .iter()
                .position(|candidate| candidate == symbol)
                .map(|i| Rank::ALL[i])
                .ok_or(ParseError),
            _ => Err(ParseError),
        }
    }
}
