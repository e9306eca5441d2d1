use vega_base::constants::{PRIMES, RANK_COUNT};
use vega_base::Card;

use crate::combos::{T6C5, T7C5};
use crate::EvalRank;

include!(concat!(env!("OUT_DIR"), "/cactus_phf.rs"));

/// Returns the product of the rank primes selected by a 13-bit rank mask.
#[inline]
pub(crate) fn prime_product_of_bits(mask: u32) -> u32 {
    (0..RANK_COUNT)
        .filter(|r| mask & (1 << r) != 0)
        .map(|r| PRIMES[r])
        .product()
}

/// Returns the rank of a 5-card poker hand, 1 (royal flush) through 7462
/// (7-5-4-3-2 unsuited).
///
/// This is the Cactus-Kev evaluation: one AND over the suit nibbles decides
/// between the flush map and the unique-5 map, and the product of the rank
/// primes is the lookup key.
///
/// # Examples
///
/// ```
/// use vega_poker::{base::*, rank_five};
///
/// let cards: [Card; 5] = parse_cards("3c Js Qd 3h Jc")?.try_into().unwrap();
/// let rank = rank_five(&cards);
/// # Ok::<(), vega_poker::base::ParseError>(())
/// ```
#[inline]
pub fn rank_five(cards: &[Card; 5]) -> EvalRank {
    let [c0, c1, c2, c3, c4] = cards.map(|c| c.bits());

    if c0 & c1 & c2 & c3 & c4 & 0xf000 != 0 {
        let bits = (c0 | c1 | c2 | c3 | c4) >> 16;
        EvalRank(CACTUS_FLUSH_PHF.get(prime_product_of_bits(bits) as u64))
    } else {
        let key = (c0 & 0xff) * (c1 & 0xff) * (c2 & 0xff) * (c3 & 0xff) * (c4 & 0xff);
        EvalRank(CACTUS_UNIQUE_PHF.get(key as u64))
    }
}

/// Returns the rank of the best 5-card hand among 6 cards.
#[inline]
pub fn rank_six(cards: &[Card; 6]) -> EvalRank {
    T6C5
        .iter()
        .map(|row| rank_five(&[cards[row[0]], cards[row[1]], cards[row[2]], cards[row[3]], cards[row[4]]]))
        .min()
        .unwrap()
}

/// Returns the rank of the best 5-card hand among 7 cards by iterating the
/// 21 subsets.
#[inline]
pub(crate) fn rank_seven_cactus(cards: &[Card; 7]) -> EvalRank {
    T7C5
        .iter()
        .map(|row| rank_five(&[cards[row[0]], cards[row[1]], cards[row[2]], cards[row[3]], cards[row[4]]]))
        .min()
        .unwrap()
}

/// Returns the rank of the best 5-card hand among 7 cards.
///
/// Uses the installed state-machine lookup table when the `twoplustwo`
/// feature is enabled and a table has been loaded; otherwise falls back to
/// the 21-subset Cactus loop. Both paths return bit-for-bit identical ranks.
#[inline]
pub fn rank_seven(cards: &[Card; 7]) -> EvalRank {
    #[cfg(feature = "twoplustwo")]
    if let Some(table) = crate::twoplustwo::installed() {
        return table.rank_seven(cards);
    }

    rank_seven_cactus(cards)
}

/// Returns the rank of the best 5-card hand that can be made from 5, 6 or 7
/// cards.
///
/// Any other input size evaluates to [`EvalRank::INVALID`].
pub fn rank_hand(cards: &[Card]) -> EvalRank {
    match cards.len() {
        5 => rank_five(cards.try_into().unwrap()),
        6 => rank_six(cards.try_into().unwrap()),
        7 => rank_seven(cards.try_into().unwrap()),
        _ => EvalRank::INVALID,
    }
}
