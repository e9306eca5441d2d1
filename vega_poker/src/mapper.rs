//! Pure rank transforms that adapt the standard 5-card evaluation order to
//! variant rules.

use vega_base::constants::{
    FLUSH_MAX, FOUR_OF_A_KIND_MAX, FULL_HOUSE_MAX, NOTHING_MAX, PAIR_MAX, STRAIGHT_MAX,
    TWO_PAIR_MAX,
};
use vega_base::Card;

use crate::cactus::rank_five;
use crate::EvalRank;

/// Number of full-house hands shifted past the flushes.
const FULL_HOUSE_COUNT: u16 = FULL_HOUSE_MAX - FOUR_OF_A_KIND_MAX;

/// Number of flush hands shifted past the full houses.
const FLUSH_COUNT: u16 = FLUSH_MAX - FULL_HOUSE_MAX;

/// In the lowball order, where the 5-4-3-2-A straight flush lands: the
/// bottom of the ace-high flushes.
pub(crate) const LOWBALL_FLUSH_SLOT: u16 = 811;

/// In the lowball order, where the 5-4-3-2-A straight lands: the bottom of
/// the ace-high unmade hands.
pub(crate) const LOWBALL_NOTHING_SLOT: u16 = 6678;

/// Worst Soko four-flush: 715 rank sets times 13 kickers past two pair.
pub const SOKO_FOUR_FLUSH_MAX: u16 = TWO_PAIR_MAX + 13 * 715;

/// Worst Soko four-straight: 10 spans times 13 kickers past the four-flushes.
pub const SOKO_FOUR_STRAIGHT_MAX: u16 = SOKO_FOUR_FLUSH_MAX + 13 * 10;

/// Worst Soko pair, after sliding the pair band past the inserted bands.
pub const SOKO_PAIR_MAX: u16 = SOKO_FOUR_STRAIGHT_MAX + (PAIR_MAX - TWO_PAIR_MAX);

/// Worst Soko hand of all.
pub const SOKO_NOTHING_MAX: u16 = SOKO_PAIR_MAX + (NOTHING_MAX - PAIR_MAX);

/// How far pair and unmade hands slide to make room for the Soko bands.
pub(crate) const SOKO_SLIDE: u16 = SOKO_FOUR_STRAIGHT_MAX - TWO_PAIR_MAX;

/// Re-ranks so that flushes beat full houses, used by the stripped-deck
/// variants where flushes are the rarer hand.
#[inline]
pub fn to_flush_over(rank: EvalRank) -> EvalRank {
    EvalRank(match rank.0 {
        r if r > FOUR_OF_A_KIND_MAX && r <= FULL_HOUSE_MAX => r + FLUSH_COUNT,
        r if r > FULL_HOUSE_MAX && r <= FLUSH_MAX => r - FULL_HOUSE_COUNT,
        r => r,
    })
}

/// Undoes [`to_flush_over`].
#[inline]
pub fn from_flush_over(rank: EvalRank) -> EvalRank {
    EvalRank(match rank.0 {
        r if r > FOUR_OF_A_KIND_MAX && r <= FOUR_OF_A_KIND_MAX + FLUSH_COUNT => {
            r + FULL_HOUSE_COUNT
        }
        r if r > FOUR_OF_A_KIND_MAX + FLUSH_COUNT && r <= FLUSH_MAX => r - FLUSH_COUNT,
        r => r,
    })
}

/// Maps a standard rank into the six-plus (short-deck) order.
///
/// A-9-8-7-6 becomes the lowest straight (flush), and flushes beat full
/// houses.
#[inline]
pub fn to_short(rank: EvalRank) -> EvalRank {
    let promoted = match rank.0 {
        747 => 6,    // A-9-8-7-6 suited, the lowest straight flush
        6610 => 1605, // A-9-8-7-6 offsuit, the lowest straight
        r => r,
    };
    to_flush_over(EvalRank(promoted))
}

/// Maps a standard rank into the Manila (seven-plus deck) order.
#[inline]
pub fn to_manila(rank: EvalRank) -> EvalRank {
    let promoted = match rank.0 {
        691 => 5,    // A-T-9-8-7 suited
        6554 => 1604, // A-T-9-8-7 offsuit
        r => r,
    };
    to_flush_over(EvalRank(promoted))
}

/// Maps a standard rank into the Spanish (eight-plus deck) order.
#[inline]
pub fn to_spanish(rank: EvalRank) -> EvalRank {
    let promoted = match rank.0 {
        607 => 4,    // A-J-T-9-8 suited
        6470 => 1603, // A-J-T-9-8 offsuit
        r => r,
    };
    to_flush_over(EvalRank(promoted))
}

/// Maps a standard rank into the deuce-to-seven lowball order, where aces
/// are always high and straights and flushes count against the hand.
///
/// The 5-4-3-2-A straight flush and straight are first re-filed as an
/// ace-high flush and an ace-high unmade hand, then the whole order is
/// inverted so that 7-5-4-3-2 unsuited ranks 1.
#[inline]
pub fn to_lowball(rank: EvalRank) -> EvalRank {
    let r = match rank.0 {
        10 => LOWBALL_FLUSH_SLOT,
        r if r > 10 && r <= LOWBALL_FLUSH_SLOT => r - 1,
        r => r,
    };
    let r = match r {
        STRAIGHT_MAX => LOWBALL_NOTHING_SLOT,
        r if r > STRAIGHT_MAX && r <= LOWBALL_NOTHING_SLOT => r - 1,
        r => r,
    };
    EvalRank(NOTHING_MAX - r + 1)
}

/// Undoes [`to_lowball`].
#[inline]
pub fn from_lowball(rank: EvalRank) -> EvalRank {
    let r = NOTHING_MAX - rank.0 + 1;
    let r = match r {
        LOWBALL_NOTHING_SLOT => STRAIGHT_MAX,
        r if r >= STRAIGHT_MAX && r < LOWBALL_NOTHING_SLOT => r + 1,
        r => r,
    };
    EvalRank(match r {
        LOWBALL_FLUSH_SLOT => 10,
        r if r >= 10 && r < LOWBALL_FLUSH_SLOT => r + 1,
        r => r,
    })
}

/// Ranks a 5-card Soko hand.
///
/// Hands of two pair or better keep their standard rank. Below that, a
/// four-card flush beats a four-card straight, and both beat any pair;
/// everything else slides down past the two inserted bands.
pub fn soko_rank(cards: &[Card; 5]) -> EvalRank {
    let rank = rank_five(cards);
    if rank.0 <= TWO_PAIR_MAX {
        return rank;
    }

    if let Some(rank) = best_four_flush(cards) {
        return rank;
    }
    if let Some(rank) = best_four_straight(cards) {
        return rank;
    }

    EvalRank(rank.0 + SOKO_SLIDE)
}

fn best_four_flush(cards: &[Card; 5]) -> Option<EvalRank> {
    let mut best: Option<u16> = None;

    for skip in 0..5 {
        let mut suits = 0xf000u32;
        let mut mask = 0u32;
        for (i, c) in cards.iter().enumerate() {
            if i != skip {
                suits &= c.bits();
                mask |= c.bits() >> 16;
            }
        }
        if suits & 0xf000 == 0 {
            continue;
        }

        let kicker = cards[skip].rank_index() as u16;
        let value = TWO_PAIR_MAX + 1 + 13 * four_set_index(mask) + (12 - kicker);
        best = Some(best.map_or(value, |b: u16| b.min(value)));
    }

    best.map(EvalRank)
}

fn best_four_straight(cards: &[Card; 5]) -> Option<EvalRank> {
    let mut best: Option<u16> = None;

    for skip in 0..5 {
        let mut mask = 0u32;
        for (i, c) in cards.iter().enumerate() {
            if i != skip {
                mask |= c.bits() >> 16;
            }
        }
        if mask.count_ones() != 4 || (mask >> mask.trailing_zeros()) != 0xf {
            continue;
        }

        let high = mask.trailing_zeros() as u16 + 3;
        let kicker = cards[skip].rank_index() as u16;
        let value = SOKO_FOUR_FLUSH_MAX + 1 + 13 * (12 - high) + (12 - kicker);
        best = Some(best.map_or(value, |b: u16| b.min(value)));
    }

    best.map(EvalRank)
}

/// Position of a 4-bit rank set among all C(13, 4) sets in descending
/// numeric order, 0 being A-K-Q-J.
fn four_set_index(mask: u32) -> u16 {
    let mut index = 0u32;
    let mut remaining = 4u32;
    for b in (0..13u32).rev() {
        if mask & (1 << b) != 0 {
            remaining -= 1;
            if remaining == 0 {
                break;
            }
        } else {
            index += choose(b, remaining - 1);
        }
    }
    index as u16
}

fn choose(n: u32, k: u32) -> u32 {
    if k > n {
        return 0;
    }
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::parse_cards;
    use rstest::rstest;

    fn hand5(s: &str) -> [Card; 5] {
        parse_cards(s).unwrap().try_into().unwrap()
    }

    #[test]
    fn flush_over_round_trip() {
        for r in (FOUR_OF_A_KIND_MAX + 1)..=FLUSH_MAX {
            let rank = EvalRank(r);
            assert_eq!(from_flush_over(to_flush_over(rank)), rank);
        }
    }

    #[test]
    fn flush_over_moves_flushes_past_full_houses() {
        // Best flush lands right after the quads, best full house after
        // the worst flush.
        assert_eq!(to_flush_over(EvalRank(323)), EvalRank(167));
        assert_eq!(to_flush_over(EvalRank(FLUSH_MAX)), EvalRank(1443));
        assert_eq!(to_flush_over(EvalRank(167)), EvalRank(1444));
        assert_eq!(to_flush_over(EvalRank(FULL_HOUSE_MAX)), EvalRank(FLUSH_MAX));

        // Quads and straights stay put.
        assert_eq!(to_flush_over(EvalRank(166)), EvalRank(166));
        assert_eq!(to_flush_over(EvalRank(1600)), EvalRank(1600));
    }

    #[test]
    fn lowball_round_trip() {
        for r in 1..=NOTHING_MAX {
            let rank = EvalRank(r);
            assert_eq!(from_lowball(to_lowball(rank)), rank);
        }
    }

    #[rstest]
    #[case::worst_high_card_is_best("7h 5s 4d 3c 2h", 1)]
    #[case::royal_flush_is_worst("As Ks Qs Js Ts", NOTHING_MAX)]
    fn lowball_values(#[case] cards: &str, #[case] expected: u16) {
        let rank = to_lowball(crate::rank_five(&hand5(cards)));
        assert_eq!(rank, EvalRank(expected));
    }

    #[test]
    fn lowball_wheel_hands_are_refiled() {
        // 5-4-3-2-A suited is just an ace-high flush in deuce-to-seven.
        let wheel_flush = to_lowball(crate::rank_five(&hand5("5d 4d 3d 2d Ad")));
        assert_eq!(wheel_flush, EvalRank(NOTHING_MAX - LOWBALL_FLUSH_SLOT + 1));

        // 5-4-3-2-A offsuit is an ace-high unmade hand.
        let wheel = to_lowball(crate::rank_five(&hand5("5h 4s 3d 2c Ah")));
        assert_eq!(wheel, EvalRank(NOTHING_MAX - LOWBALL_NOTHING_SLOT + 1));

        // Both still lose to a king-high unmade hand.
        let king_high = to_lowball(crate::rank_five(&hand5("Kh 5s 4d 3c 2h")));
        assert!(king_high < wheel);
        assert!(wheel < wheel_flush);
    }

    #[rstest]
    #[case::short_straight_flush("9d 8d 7d 6d Ad", to_short as fn(EvalRank) -> EvalRank, 6)]
    #[case::short_straight("9d 8s 7d 6d Ad", to_short, 1605)]
    #[case::manila_straight_flush("Td 9d 8d 7d Ad", to_manila, 5)]
    #[case::manila_straight("Td 9s 8d 7d Ad", to_manila, 1604)]
    #[case::spanish_straight_flush("Jd Td 9d 8d Ad", to_spanish, 4)]
    #[case::spanish_straight("Jd Ts 9d 8d Ad", to_spanish, 1603)]
    fn stripped_deck_promotions(
        #[case] cards: &str,
        #[case] mapper: fn(EvalRank) -> EvalRank,
        #[case] expected: u16,
    ) {
        assert_eq!(mapper(crate::rank_five(&hand5(cards))), EvalRank(expected));
    }

    #[test]
    fn short_deck_flush_beats_full_house() {
        let flush = to_short(crate::rank_five(&hand5("Kh 9h 8h 7h 6h")));
        let boat = to_short(crate::rank_five(&hand5("Ah Ac Ad Kh Kc")));
        assert!(flush < boat);
    }

    #[rstest]
    #[case::best_four_straight("Ah Qd Ks Jh As", 12621)]
    #[case::best_four_flush("As Ks Qs Js 2d", TWO_PAIR_MAX + 1 + 12 - 0)]
    fn soko_known_ranks(#[case] cards: &str, #[case] expected: u16) {
        assert_eq!(soko_rank(&hand5(cards)), EvalRank(expected));
    }

    #[test]
    fn soko_bands() {
        // Four-flush with a ten high.
        let four_flush = soko_rank(&hand5("4h Th 6h 9c 7h"));
        assert!(four_flush.0 > TWO_PAIR_MAX && four_flush.0 <= SOKO_FOUR_FLUSH_MAX);

        // Four-straight nine high.
        let four_straight = soko_rank(&hand5("9h 8d 7s 6h 2c"));
        assert!(
            four_straight.0 > SOKO_FOUR_FLUSH_MAX && four_straight.0 <= SOKO_FOUR_STRAIGHT_MAX
        );

        // A four-flush beats any four-straight, which beats any pair.
        let pair = soko_rank(&hand5("Ah As Kd Qc 9h"));
        assert!(four_flush < four_straight);
        assert!(four_straight < pair);
        assert!(pair.0 > SOKO_FOUR_STRAIGHT_MAX && pair.0 <= SOKO_PAIR_MAX);

        // Two pair or better keeps its standard rank.
        let two_pair = soko_rank(&hand5("Ah As Kd Kc 9h"));
        assert_eq!(two_pair, crate::rank_five(&hand5("Ah As Kd Kc 9h")));

        // The worst unmade Soko hand fills the very bottom of the order.
        let worst = soko_rank(&hand5("Qh 9s 7d 5c 2h"));
        assert!(worst.0 <= SOKO_NOTHING_MAX);
    }

    #[test]
    fn soko_worst_hand_is_nothing_max() {
        // Q-9-7-5-2 rainbow has no four-flush and no four-straight and is
        // the worst high-card hand that avoids both.
        let mut worst = EvalRank(0);
        let mut deck = crate::deck::FullDeck::with_seed(5);
        for _ in 0..2000 {
            deck.reset();
            let cards: [Card; 5] = deck.deal(5).unwrap().try_into().unwrap();
            let rank = soko_rank(&cards);
            assert!(rank.0 <= SOKO_NOTHING_MAX);
            worst = worst.max(rank);
        }
        assert!(worst.0 > SOKO_FOUR_STRAIGHT_MAX);
    }
}
