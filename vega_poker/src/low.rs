use vega_base::Card;

use crate::cactus::rank_five;
use crate::mapper::to_lowball;
use crate::EvalRank;

/// The worst rank that still qualifies as an eight-or-better low.
pub const EIGHT_OR_BETTER_MAX: u16 = 512;

/// Upper bound of the unpaired ace-to-five rank space.
pub const ACE_FIVE_MAX: u16 = 16384;

/// The seed mask that disqualifies any card above an eight.
const EIGHT_OR_BETTER_SEED: u16 = 0xff00;

/// Ranks a hand for ace-to-five lowball as a 13-bit mask of ace-low rank
/// indices, smaller meaning better.
///
/// Any repeated rank raises the `0x8000` pair flag, pushing the hand after
/// every unpaired one. `seed` pre-sets rank bits so that unwanted ranks
/// count as pairs; its bits are stripped from the result, which stays below
/// [`ACE_FIVE_MAX`] for every unpaired hand.
///
/// # Examples
///
/// ```
/// use vega_poker::{ace_five_rank, base::*};
///
/// let cards = parse_cards("5h 4s 3d 2c Ah")?;
/// assert_eq!(ace_five_rank(&cards, 0).0, 0b11111);
/// # Ok::<(), vega_poker::base::ParseError>(())
/// ```
#[inline]
pub fn ace_five_rank(cards: &[Card], seed: u16) -> EvalRank {
    let mut mask = seed;
    let mut flag = 0;
    for c in cards {
        let bit = 1u16 << c.ace_index();
        if mask & bit != 0 {
            flag = 0x8000;
        }
        mask |= bit;
    }

    EvalRank(flag | (mask & !seed))
}

/// Ranks a 5-card hand for an eight-or-better low.
///
/// The hand qualifies iff the result is below [`EIGHT_OR_BETTER_MAX`];
/// callers decide whether an unqualified result invalidates the low.
#[inline]
pub fn eight_or_better_rank(cards: &[Card; 5]) -> EvalRank {
    ace_five_rank(cards, EIGHT_OR_BETTER_SEED)
}

/// Ranks a 5-card Razz hand.
///
/// Unpaired hands use the ace-to-five ranking. Paired hands rank after all
/// of them, ordered by the inverted 5-card evaluation so that comparisons
/// between paired hands follow the usual high-hand set layout.
#[inline]
pub fn razz_rank(cards: &[Card; 5]) -> EvalRank {
    let rank = ace_five_rank(cards, 0);
    if rank.0 < ACE_FIVE_MAX {
        rank
    } else {
        EvalRank(u16::MAX - rank_five(cards).0)
    }
}

/// Ranks a 5-card hand for deuce-to-seven lowball, where 7-5-4-3-2 unsuited
/// is the best possible hand and a royal flush the worst.
#[inline]
pub fn lowball_rank(cards: &[Card; 5]) -> EvalRank {
    to_lowball(rank_five(cards))
}

/// Ranks a Badugi hand and splits it into the made cards and the rest.
///
/// The made hand is the largest subset with pairwise distinct ranks and
/// suits, ties broken towards the lowest ace-low ranks. The rank encodes
/// the number of missing cards in the top bits and the ace-low rank mask
/// below, so four-card hands order before three-card hands and so on.
pub fn badugi_rank(cards: &[Card]) -> (EvalRank, Vec<Card>, Vec<Card>) {
    let mut best_value = u16::MAX;
    let mut best_subset = 0usize;

    for subset in 1usize..(1 << cards.len()) {
        let mut mask = 0u16;
        let mut suits = 0u8;
        let mut valid = true;
        for (i, c) in cards.iter().enumerate() {
            if subset & (1 << i) == 0 {
                continue;
            }
            let rank_bit = 1u16 << c.ace_index();
            let suit_bit = 1u8 << (c.suit() as u8);
            if mask & rank_bit != 0 || suits & suit_bit != 0 {
                valid = false;
                break;
            }
            mask |= rank_bit;
            suits |= suit_bit;
        }
        if !valid {
            continue;
        }

        let value = ((4 - subset.count_ones() as u16) << 13) | mask;
        if value < best_value {
            best_value = value;
            best_subset = subset;
        }
    }

    if best_subset == 0 {
        return (EvalRank::INVALID, Vec::new(), Vec::new());
    }

    let (best, unused) = cards
        .iter()
        .enumerate()
        .partition::<Vec<_>, _>(|(i, _)| best_subset & (1 << i) != 0);

    (
        EvalRank(best_value),
        best.into_iter().map(|(_, c)| *c).collect(),
        unused.into_iter().map(|(_, c)| *c).collect(),
    )
}
