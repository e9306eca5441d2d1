//! Vega evaluates and compares poker hands across most popular variants:
//! Texas Hold'em, short-deck (6+), Manila, Spanish, Omaha (4/5/6 pocket
//! cards, with or without an eight-or-better low), Dallas, Houston, Stud,
//! Stud Hi/Lo, Razz, Badugi, deuce-to-seven lowball, Soko and
//! jacks-or-better.
//!
//! Every 5-card hand maps to a single 16-bit [`EvalRank`] that totally
//! orders all poker hands, 1 being the best possible hand and 7462 the
//! worst. The 5-card kernel is the Cactus-Kev evaluator backed by
//! compile-time generated perfect-hash lookup tables; 7-card evaluation can
//! additionally use the 32 M-entry state-machine lookup table (the
//! `twoplustwo` feature) loaded at runtime.
//!
//! # Example
//!
//! ```
//! use vega_poker::base::*;
//! use vega_poker::{eval, order, Variant};
//!
//! fn main() -> Result<(), ParseError> {
//!     let board = parse_cards("Ah Ks 7s 7d 2c")?;
//!     let players = [
//!         parse_cards("As Qd")?, // aces and sevens
//!         parse_cards("Kd Kc")?, // kings full of sevens
//!     ];
//!
//!     let evals = players
//!         .iter()
//!         .map(|pocket| eval(Variant::Holdem, pocket, &board))
//!         .collect::<Vec<_>>();
//!
//!     let (indices, pivot) = order(&evals, false);
//!     assert_eq!(&indices[..pivot], &[1]);
//!     Ok(())
//! }
//! ```

use core::fmt;

use quickdiv::DivisorU64;

mod cactus;
mod combos;
mod display;
mod eval;
mod kernels;
mod low;
mod mapper;
mod normalize;
#[cfg(feature = "twoplustwo")]
mod twoplustwo;
mod variant;

/// Basic types for playing card games.
pub mod base {
    pub use vega_base::{parse_cards, Card, ParseError, Rank, Suit, CARDS};
}

/// Deck types suitable for dealing each supported variant.
pub mod deck {
    pub use vega_base::{Deck, FullDeck, ManilaDeck, ShortDeck, SpanishDeck};
}

pub use cactus::{rank_five, rank_hand, rank_seven, rank_six};
pub use eval::{compare, order, Eval};
pub use low::{
    ace_five_rank, badugi_rank, eight_or_better_rank, lowball_rank, razz_rank, ACE_FIVE_MAX,
    EIGHT_OR_BETTER_MAX,
};
pub use mapper::{
    from_flush_over, from_lowball, soko_rank, to_flush_over, to_lowball, to_manila, to_short,
    to_spanish, SOKO_FOUR_FLUSH_MAX, SOKO_FOUR_STRAIGHT_MAX, SOKO_NOTHING_MAX, SOKO_PAIR_MAX,
};
#[cfg(feature = "twoplustwo")]
pub use twoplustwo::{TableError, TwoPlusTwoTable};
pub use variant::{eval, Variant};

use vega_base::constants::{
    FLUSH_MAX, FOUR_OF_A_KIND_MAX, FULL_HOUSE_MAX, NOTHING_MAX, PAIR_MAX, STRAIGHT_FLUSH_MAX,
    STRAIGHT_MAX, THREE_OF_A_KIND_MAX, TWO_PAIR_MAX,
};

struct MiniPhf {
    buckets_len: DivisorU64,
    len: DivisorU64,
    values: &'static [u16],
    pilots: &'static [u32],
}

impl MiniPhf {
    pub const fn new(values: &'static [u16], pilots: &'static [u32]) -> MiniPhf {
        let buckets_len = DivisorU64::new(pilots.len() as u64);
        let len = DivisorU64::new(values.len() as u64);
        MiniPhf {
            buckets_len,
            len,
            values,
            pilots,
        }
    }

    #[inline]
    pub fn get(&self, key: u64) -> u16 {
        let pilot = self.pilots[(key % self.buckets_len) as usize] as u64;
        let idx = ((key ^ pilot) % self.len) as usize;
        self.values[idx]
    }
}

/// The strength ranking of a poker hand.
///
/// Ranks order hands from best to worst: 1 is a royal flush and
/// [`NOTHING_MAX`](vega_base::constants::NOTHING_MAX) (7462) the worst
/// high-card hand. Variant transforms extend the space upwards (Soko) or
/// re-map it (lowball), always keeping "smaller is better".
/// [`EvalRank::INVALID`] marks a missing or unqualified result and orders
/// after every valid rank.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub struct EvalRank(pub u16);

impl EvalRank {
    /// The sentinel rank of an uninitialized or unqualified evaluation.
    pub const INVALID: EvalRank = EvalRank(u16::MAX);

    /// Returns `true` unless the rank is the invalid sentinel.
    #[inline]
    pub fn is_valid(self) -> bool {
        self != EvalRank::INVALID
    }

    /// Returns the hand-ranking category of a rank in the standard 5-card
    /// evaluation order.
    ///
    /// Ranks outside `1..=7462` (the invalid sentinel, Soko's extended
    /// bands, paired Razz ranks) have no standard category and return
    /// [`HandCategory::Ineligible`].
    pub fn category(self) -> HandCategory {
        match self.0 {
            0 => HandCategory::Ineligible,
            _ if self.0 <= STRAIGHT_FLUSH_MAX => HandCategory::StraightFlush,
            _ if self.0 <= FOUR_OF_A_KIND_MAX => HandCategory::FourOfAKind,
            _ if self.0 <= FULL_HOUSE_MAX => HandCategory::FullHouse,
            _ if self.0 <= FLUSH_MAX => HandCategory::Flush,
            _ if self.0 <= STRAIGHT_MAX => HandCategory::Straight,
            _ if self.0 <= THREE_OF_A_KIND_MAX => HandCategory::ThreeOfAKind,
            _ if self.0 <= TWO_PAIR_MAX => HandCategory::TwoPair,
            _ if self.0 <= PAIR_MAX => HandCategory::Pair,
            _ if self.0 <= NOTHING_MAX => HandCategory::Nothing,
            _ => HandCategory::Ineligible,
        }
    }
}

/// A poker hand-ranking category.
///
/// [`HandCategory::FourFlush`] and [`HandCategory::FourStraight`] only occur
/// in Soko, where they rank between two pair and one pair.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum HandCategory {
    /// A hand without a valid ranking, for example a 9-high in an
    /// eight-or-better low game.
    Ineligible,
    /// A valid hand that does not fall into any of the other categories.
    Nothing,
    /// Two cards of one rank, and three cards of three other ranks.
    Pair,
    /// Four cards of sequential rank plus an unmatched fifth card (Soko).
    FourStraight,
    /// Four cards of the same suit plus an unmatched fifth card (Soko).
    FourFlush,
    /// Two cards of one rank, two cards of another rank and a fifth card of
    /// a different, third rank.
    TwoPair,
    /// Three cards of the same rank, and two cards of two other ranks.
    ThreeOfAKind,
    /// Five cards of sequential rank, with at least two different suits.
    Straight,
    /// Five cards of the same suit, but without sequential rank.
    Flush,
    /// Three cards of one rank and two cards of another rank.
    FullHouse,
    /// Four cards of the same rank and one card of another rank.
    FourOfAKind,
    /// Five cards of sequential rank, all of the same suit.
    StraightFlush,
}

/// The worst rank that still qualifies as a jacks-or-better pair.
pub const JACKS_OR_BETTER_MAX: u16 = 4205;

/// The errors reported by the variant registry and parsing front ends.
///
/// The evaluators themselves never fail: an input that does not meet a
/// variant's size preconditions produces an [`Eval`] whose ranks stay
/// [`EvalRank::INVALID`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// An input token does not name a legal card.
    InvalidCard,
    /// A variant name is unknown.
    InvalidType,
    /// A serialized id does not resolve to a variant.
    InvalidId,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCard => write!(f, "invalid card"),
            Error::InvalidType => write!(f, "invalid game type"),
            Error::InvalidId => write!(f, "invalid game id"),
        }
    }
}

impl std::error::Error for Error {}

impl From<vega_base::ParseError> for Error {
    fn from(_: vega_base::ParseError) -> Error {
        Error::InvalidCard
    }
}
