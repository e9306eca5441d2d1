//! Playing card primitives shared by the Vega hand evaluators.

pub mod constants;

mod card;
mod deck;
mod rank;
mod suit;

pub use card::{parse_cards, Card, ParseError};
pub use constants::CARDS;
pub use deck::{Deck, FullDeck, ManilaDeck, ShortDeck, SpanishDeck};
pub use rank::Rank;
pub use suit::Suit;
