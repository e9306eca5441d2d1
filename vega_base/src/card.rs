use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

#[cfg(feature = "colored")]
use colored::{Color, Colorize};

use crate::constants::{CARDS, CARDS_DEBUG_STR, CARDS_STR};
use crate::rank::Rank;
use crate::suit::Suit;

/// A card from a standard 52-card deck, packed into a single 32-bit word.
///
/// The layout is the classic Cactus-Kev encoding:
///
/// ```text
/// bits 31..16   bits 15..12   bits 11..8   bits 7..0
/// rank bit      suit nibble   rank index   rank prime
/// ```
///
/// Exactly one rank bit and one suit bit are set, so five cards can be
/// tested for a flush with a single AND over the suit nibbles, and the
/// product of the five prime bytes identifies the rank multiset without
/// branching.
#[derive(PartialEq, Eq, Hash, Clone, Copy)]
pub struct Card(pub(crate) u32);

impl Card {
    /// Creates a new card of the given `rank` and `suit`.
    pub fn new(rank: Rank, suit: Suit) -> Self {
        CARDS[4 * (rank as usize) + suit as usize]
    }

    /// Returns the raw 32-bit encoding.
    #[inline]
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Returns the position of the card in a standard 52-card deck ordered
    /// by rank and then suit (deuces to aces, spades to clubs).
    pub fn idx(self) -> usize {
        4 * self.rank_index() as usize + self.suit() as usize
    }

    /// Returns the rank of the card.
    pub fn rank(self) -> Rank {
        self.rank_index().try_into().unwrap()
    }

    /// Returns the suit of the card.
    pub fn suit(self) -> Suit {
        (((self.0 >> 12) & 0xf).trailing_zeros() as u8)
            .try_into()
            .unwrap()
    }

    /// Returns the rank index, 0 for a deuce up to 12 for an ace.
    #[inline]
    pub fn rank_index(self) -> u8 {
        ((self.0 >> 8) & 0xf) as u8
    }

    /// Returns the rank's position in the ace-low ordering, with the ace
    /// at 0 and the king at 12.
    #[inline]
    pub fn ace_index(self) -> u8 {
        self.rank().ace_index()
    }

    /// Returns the prime assigned to the card's rank.
    #[inline]
    pub fn prime(self) -> u32 {
        self.0 & 0xff
    }

    /// Returns an ordering where `self` is greater if it has greater rank,
    /// or greater suit if the ranks are equal.
    ///
    /// Note that [`Rank::Ace`] is taken to be the lowest rank, unlike in the
    /// standard aces-high ranking which [`Card`] uses to implement
    /// [`PartialOrd`].
    pub fn aces_low_cmp(&self, other: &Self) -> Ordering {
        match (self.rank(), other.rank()) {
            (Rank::Ace, Rank::Ace) => self.cmp(other),
            (Rank::Ace, _) => Ordering::Less,
            (_, Rank::Ace) => Ordering::Greater,
            (_, _) => self.cmp(other),
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        // Rank bit dominates, then the suit nibble in nominal order.
        self.0.cmp(&other.0)
    }
}

/// An error which can be returned when parsing a [`Card`], [`Rank`] or
/// [`Suit`], or a whole hand string.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ParseError;

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse value")
    }
}

impl std::error::Error for ParseError {}

impl FromStr for Card {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (rank_ch, suit_ch) = match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => (r, s),
            _ => return Err(ParseError),
        };

        let rank = rank_ch.to_string().parse::<Rank>()?;
        let suit = suit_ch.to_string().parse::<Suit>()?;

        Ok(Self::new(rank, suit))
    }
}

/// Parses a space-separated string of cards, e.g. `"Ah Kd 7s"`.
///
/// Duplicate cards are rejected with a [`ParseError`].
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(Vec::new());
    }

    let mut seen = 0u64;
    let mut cards = Vec::new();
    for part in s.split_whitespace() {
        let card = part.parse::<Card>()?;
        let bit = 1u64 << card.idx();
        if seen & bit != 0 {
            return Err(ParseError);
        }
        seen |= bit;
        cards.push(card);
    }

    Ok(cards)
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", CARDS_DEBUG_STR[self.idx()])
    }
}

impl fmt::Display for Card {
    #[cfg(feature = "colored")]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let base_str = CARDS_STR[self.idx()];
        write!(f, "{}", base_str.color(self.get_color()))
    }

    #[cfg(not(feature = "colored"))]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let base_str = CARDS_STR[self.idx()];
        write!(f, "{}", base_str)
    }
}

impl Card {
    #[cfg(feature = "colored")]
    fn get_color(&self) -> Color {
        if cfg!(feature = "colored-4color") {
            match self.suit() {
                Suit::Club => Color::Green,
                Suit::Diamond => Color::Blue,
                Suit::Heart => Color::Red,
                Suit::Spade => Color::Black,
            }
        } else {
            match self.suit() {
                Suit::Heart | Suit::Diamond => Color::Red,
                Suit::Spade | Suit::Club => Color::Black,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cmp::Ordering;
    use rstest::*;

    #[rstest]
    #[case::two_of_clubs("2c", Card::new(Rank::Two, Suit::Club))]
    #[case::eight_of_hearts("8h", Card::new(Rank::Eight, Suit::Heart))]
    #[case::jack_of_diamonds("Jd", Card::new(Rank::Jack, Suit::Diamond))]
    #[case::king_of_spades("Ks", Card::new(Rank::King, Suit::Spade))]
    #[case::ace_of_diamonds("Ad", Card::new(Rank::Ace, Suit::Diamond))]
    fn parse(#[case] s: &str, #[case] expected: Card) -> Result<(), ParseError> {
        let card: Card = s.parse()?;
        assert_eq!(card, expected);
        Ok(())
    }

    #[rstest]
    #[case::empty("")]
    #[case::two_cards("2c 5h")]
    #[case::invalid_rank("Yh")]
    #[case::invalid_suit("Kf")]
    fn invalid_parse(#[case] s: &str) {
        let card = s.parse::<Card>();
        assert_eq!(card, Err(ParseError));
    }

    #[rstest]
    #[case::king_of_diamonds("Kd", 0x08004b25)]
    #[case::five_of_spades("5s", 0x00081307)]
    #[case::jack_of_clubs("Jc", 0x0200891d)]
    fn encoding(#[case] s: &str, #[case] expected: u32) -> Result<(), ParseError> {
        let card: Card = s.parse()?;
        assert_eq!(card.bits(), expected);
        Ok(())
    }

    #[rstest]
    #[case::same_rank_1("3s", "3c")]
    #[case::same_rank_2("Jh", "Jd")]
    #[case::same_suit("5c", "6c")]
    #[case::aces_high("Kh", "Ah")]
    fn order(#[case] lower: &str, #[case] higher: &str) -> Result<(), ParseError> {
        let lower_card = lower.parse::<Card>()?;
        let higher_card = higher.parse::<Card>()?;
        let result = lower_card.cmp(&higher_card);
        assert_eq!(result, Ordering::Less);
        Ok(())
    }

    #[rstest]
    #[case::duplicate_card("Ah 5h 4c 3c Ah")]
    #[case::garbage("Ah 5x")]
    fn invalid_hand_parse(#[case] s: &str) {
        assert_eq!(parse_cards(s), Err(ParseError));
    }

    #[test]
    fn hand_parse() -> Result<(), ParseError> {
        let cards = parse_cards("Ah 5s Ts")?;
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].rank(), Rank::Ace);
        assert_eq!(cards[1].suit(), Suit::Spade);
        Ok(())
    }
}
