use crate::{Card, Rank, CARDS};

/// A shuffled stack of playing cards dealt front to back.
///
/// The whole stack is permuted when the deck is created and again on every
/// [`reset`](Deck::reset); dealing only advances a cursor, so cards that
/// are already out are never reordered. For a fixed seed the sequence of
/// shuffles is reproducible.
pub struct Deck {
    cards: Vec<Card>,
    next: usize,
    rng: fastrand::Rng,
}

impl Deck {
    /// Creates a deck holding the given cards, shuffled by a random seed.
    pub fn new(cards: Vec<Card>) -> Deck {
        Deck::with_seed(cards, fastrand::u64(..))
    }

    /// Creates a deck holding the given cards, shuffled by `seed`.
    pub fn with_seed(cards: Vec<Card>, seed: u64) -> Deck {
        let mut deck = Deck {
            cards,
            next: 0,
            rng: fastrand::Rng::with_seed(seed),
        };
        deck.rng.shuffle(&mut deck.cards);
        deck
    }

    /// Deals the next `count` cards, or `None` if fewer remain.
    pub fn deal(&mut self, count: usize) -> Option<&[Card]> {
        if count > self.len() {
            return None;
        }

        let start = self.next;
        self.next += count;
        Some(&self.cards[start..self.next])
    }

    /// Returns the number of cards not yet dealt.
    pub fn len(&self) -> usize {
        self.cards.len() - self.next
    }

    /// Returns `true` once every card has been dealt.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Takes back every dealt card and reshuffles the deck.
    pub fn reset(&mut self) {
        self.next = 0;
        self.rng.shuffle(&mut self.cards);
    }
}

macro_rules! stripped_deck {
    ($(#[$docs:meta])* $name:ident, $lowest:expr) => {
        $(#[$docs])*
        pub struct $name(Deck);

        impl $name {
            fn cards() -> Vec<Card> {
                CARDS
                    .iter()
                    .filter(|c| c.rank() >= $lowest)
                    .copied()
                    .collect()
            }

            /// Creates a new deck shuffled by a random seed.
            pub fn new() -> $name {
                $name(Deck::new(Self::cards()))
            }

            /// Creates a new deck shuffled according to the given seed.
            pub fn with_seed(seed: u64) -> $name {
                $name(Deck::with_seed(Self::cards(), seed))
            }

            /// Deals the next `count` cards, or `None` if fewer remain.
            pub fn deal(&mut self, count: usize) -> Option<&[Card]> {
                self.0.deal(count)
            }

            /// Returns the number of cards not yet dealt.
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Returns `true` once every card has been dealt.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Takes back every dealt card and reshuffles the deck.
            pub fn reset(&mut self) {
                self.0.reset();
            }
        }

        impl Default for $name {
            fn default() -> $name {
                $name::new()
            }
        }
    };
}

stripped_deck!(
    /// A standard 52-playing cards deck.
    FullDeck,
    Rank::Two
);

stripped_deck!(
    /// A deck consisting of the 36 six-or-better cards from a standard deck.
    ShortDeck,
    Rank::Six
);

stripped_deck!(
    /// A deck consisting of the 32 seven-or-better cards used in Manila.
    ManilaDeck,
    Rank::Seven
);

stripped_deck!(
    /// A deck consisting of the 28 eight-or-better cards used in Spanish poker.
    SpanishDeck,
    Rank::Eight
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case::full(FullDeck::with_seed(7).len(), 52)]
    #[case::short(ShortDeck::with_seed(7).len(), 36)]
    #[case::manila(ManilaDeck::with_seed(7).len(), 32)]
    #[case::spanish(SpanishDeck::with_seed(7).len(), 28)]
    fn deck_sizes(#[case] len: usize, #[case] expected: usize) {
        assert_eq!(len, expected);
    }

    #[test]
    fn deal_and_reset() {
        let mut deck = FullDeck::with_seed(42);
        let dealt = deck.deal(5).unwrap().to_vec();
        assert_eq!(dealt.len(), 5);
        assert_eq!(deck.len(), 47);

        deck.reset();
        assert_eq!(deck.len(), 52);
        assert!(deck.deal(53).is_none());
    }

    #[test]
    fn reset_reshuffles() {
        let mut deck = FullDeck::with_seed(42);
        let first = deck.deal(52).unwrap().to_vec();
        deck.reset();
        let second = deck.deal(52).unwrap().to_vec();

        assert_ne!(first, second);

        // Same seed, same shuffle sequence.
        let mut replay = FullDeck::with_seed(42);
        assert_eq!(replay.deal(52).unwrap(), &first[..]);
    }

    #[test]
    fn no_duplicates() {
        let mut deck = FullDeck::with_seed(123);
        let mut seen = 0u64;
        while let Some(cards) = deck.deal(1) {
            let bit = 1u64 << cards[0].idx();
            assert_eq!(seen & bit, 0);
            seen |= bit;
        }
        assert_eq!(seen.count_ones(), 52);
    }
}
