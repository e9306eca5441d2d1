use crate::Card;

/// Number of cards in a standard deck.
pub const CARD_COUNT: usize = 52;

/// Number of distinct ranks in a standard 52-card deck.
pub const RANK_COUNT: usize = 13;

/// Prime assigned to each rank, deuce to ace. The product of five card
/// primes uniquely identifies the rank multiset of a 5-card hand.
pub static PRIMES: [u32; RANK_COUNT] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

/// Upper bounds of the hand-category bands in the 5-card evaluation order,
/// 1 being the best possible hand and [`NOTHING_MAX`] the worst.
pub const STRAIGHT_FLUSH_MAX: u16 = 10;
pub const FOUR_OF_A_KIND_MAX: u16 = 166;
pub const FULL_HOUSE_MAX: u16 = 322;
pub const FLUSH_MAX: u16 = 1599;
pub const STRAIGHT_MAX: u16 = 1609;
pub const THREE_OF_A_KIND_MAX: u16 = 2467;
pub const TWO_PAIR_MAX: u16 = 3325;
pub const PAIR_MAX: u16 = 6185;
pub const NOTHING_MAX: u16 = 7462;

/// The ten straight rank-bit masks, royal through wheel.
pub static STRAIGHT_MASKS: [u32; 10] = [
    0x1f00, 0x0f80, 0x07c0, 0x03e0, 0x01f0, 0x00f8, 0x007c, 0x003e, 0x001f, 0x100f,
];

/// All 52 cards in rank-suit order (deuces to aces, spades to clubs).
///
/// The index of a card in this array is `4 * rank + suit`.
pub static CARDS: [Card; CARD_COUNT] = {
    let mut data = [Card(0); CARD_COUNT];
    let mut idx = 0;
    while idx < CARD_COUNT {
        let rank = (idx / 4) as u32;
        let suit = (idx % 4) as u32;

        data[idx] = Card((1 << (16 + rank)) | ((1 << suit) << 12) | (rank << 8) | PRIMES[rank as usize]);

        idx += 1;
    }

    data
};

/// Display string representations for all cards.
pub static CARDS_STR: [&str; CARD_COUNT] = [
    "2♠", "2♥", "2♦", "2♣", "3♠", "3♥", "3♦", "3♣", "4♠", "4♥", "4♦", "4♣", "5♠", "5♥", "5♦", "5♣",
    "6♠", "6♥", "6♦", "6♣", "7♠", "7♥", "7♦", "7♣", "8♠", "8♥", "8♦", "8♣", "9♠", "9♥", "9♦", "9♣",
    "T♠", "T♥", "T♦", "T♣", "J♠", "J♥", "J♦", "J♣", "Q♠", "Q♥", "Q♦", "Q♣", "K♠", "K♥", "K♦", "K♣",
    "A♠", "A♥", "A♦", "A♣",
];

/// Debug string representations for all cards.
pub static CARDS_DEBUG_STR: [&str; CARD_COUNT] = [
    "2s", "2h", "2d", "2c", "3s", "3h", "3d", "3c", "4s", "4h", "4d", "4c", "5s", "5h", "5d", "5c",
    "6s", "6h", "6d", "6c", "7s", "7h", "7d", "7c", "8s", "8h", "8d", "8c", "9s", "9h", "9d", "9c",
    "Ts", "Th", "Td", "Tc", "Js", "Jh", "Jd", "Jc", "Qs", "Qh", "Qd", "Qc", "Ks", "Kh", "Kd", "Kc",
    "As", "Ah", "Ad", "Ac",
];

/// Full English language names of all card ranks.
pub static RANK_NAMES: [&str; RANK_COUNT] = [
    "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Jack", "Queen",
    "King", "Ace",
];

/// Full English language plural names of all card ranks.
pub static PLURAL_RANK_NAMES: [&str; RANK_COUNT] = [
    "Twos", "Threes", "Fours", "Fives", "Sixes", "Sevens", "Eights", "Nines", "Tens", "Jacks",
    "Queens", "Kings", "Aces",
];
