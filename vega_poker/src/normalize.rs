//! Canonical presentation order for the winning five cards.
//!
//! Normalization never changes a rank; it only reorders the best and unused
//! lists (and swaps suit-equivalent cards between them) so that two
//! evaluations with the same rank present the same way. All of the
//! reorderings are deterministic sorts, which makes the pass idempotent.

use vega_base::constants::{NOTHING_MAX, TWO_PAIR_MAX};
use vega_base::{Card, Rank};

use crate::eval::Eval;
use crate::low::ACE_FIVE_MAX;
use crate::mapper::{
    from_flush_over, from_lowball, LOWBALL_FLUSH_SLOT, LOWBALL_NOTHING_SLOT, SOKO_FOUR_FLUSH_MAX,
    SOKO_FOUR_STRAIGHT_MAX, SOKO_NOTHING_MAX, SOKO_SLIDE,
};
use crate::{EvalRank, HandCategory, Variant};

pub(crate) fn normalize(ev: &mut Eval) {
    if ev.hi_rank.is_valid() {
        let (best, unused) = (&mut ev.hi_best, &mut ev.hi_unused);
        match ev.variant {
            Variant::Razz => razz_layout(ev.hi_rank, best, unused),
            Variant::Badugi => ace_low_layout(best, unused),
            Variant::Lowball => lowball_layout(ev.hi_rank, best, unused),
            Variant::Soko => soko_layout(ev.hi_rank, best, unused),
            Variant::Short | Variant::Manila | Variant::Spanish => {
                let base = ev.variant.straight_base();
                high_layout(from_flush_over(ev.hi_rank), base, best, unused);
            }
            _ => high_layout(ev.hi_rank, Rank::Five, best, unused),
        }
    }

    // Every low side is an ace-to-five low.
    if ev.lo_rank.is_valid() {
        ace_low_layout(&mut ev.lo_best, &mut ev.lo_unused);
    }
}

/// Category of a Soko rank, with the two inserted bands mapped out.
pub(crate) fn soko_category(rank: EvalRank) -> HandCategory {
    match rank.0 {
        r if r <= TWO_PAIR_MAX => rank.category(),
        r if r <= SOKO_FOUR_FLUSH_MAX => HandCategory::FourFlush,
        r if r <= SOKO_FOUR_STRAIGHT_MAX => HandCategory::FourStraight,
        r if r <= SOKO_NOTHING_MAX => EvalRank(r - SOKO_SLIDE).category(),
        _ => HandCategory::Ineligible,
    }
}

/// Category of a deuce-to-seven lowball rank.
pub(crate) fn lowball_category(rank: EvalRank) -> HandCategory {
    match NOTHING_MAX - rank.0 + 1 {
        LOWBALL_FLUSH_SLOT => HandCategory::Flush,
        LOWBALL_NOTHING_SLOT => HandCategory::Nothing,
        _ => from_lowball(rank).category(),
    }
}

/// Lays out a hand ranked in the standard 5-card order.
fn high_layout(rank: EvalRank, base: Rank, best: &mut [Card], unused: &mut [Card]) {
    match rank.category() {
        HandCategory::StraightFlush | HandCategory::Straight => {
            straight_layout(best, base);
            sort_desc(unused);
        }
        HandCategory::Flush => {
            sort_desc(best);
            sort_desc(unused);
        }
        HandCategory::FourOfAKind
        | HandCategory::FullHouse
        | HandCategory::ThreeOfAKind
        | HandCategory::TwoPair
        | HandCategory::Pair => set_layout(best, unused),
        _ => {
            sort_desc(best);
            sort_desc(unused);
            suit_normalize(best, unused);
        }
    }
}

/// High-to-low, with the wheel around the variant's base rank rotated so
/// the ace comes last.
fn straight_layout(best: &mut [Card], base: Rank) {
    sort_desc(best);
    if best.len() == 5 && best[0].rank() == Rank::Ace && best[1].rank() == base {
        best.rotate_left(1);
    }
}

/// Sets in descending set-size order, ties by rank; kickers after,
/// descending.
fn set_layout(best: &mut [Card], unused: &mut [Card]) {
    let mut counts = [0u8; 13];
    for c in best.iter() {
        counts[c.rank_index() as usize] += 1;
    }

    best.sort_by(|a, b| {
        (counts[b.rank_index() as usize], b).cmp(&(counts[a.rank_index() as usize], a))
    });
    sort_desc(unused);
    suit_normalize(best, unused);
}

/// Descending ace-low order, so an ace always comes last.
fn ace_low_layout(best: &mut [Card], unused: &mut [Card]) {
    best.sort_by(|a, b| b.aces_low_cmp(a));
    unused.sort_by(|a, b| b.aces_low_cmp(a));
    suit_normalize(best, unused);
}

/// Unpaired Razz hands read as ace-to-five lows; paired ones re-use the
/// set layout of their underlying high-hand category.
fn razz_layout(rank: EvalRank, best: &mut [Card], unused: &mut [Card]) {
    if rank.0 < ACE_FIVE_MAX {
        ace_low_layout(best, unused);
    } else {
        set_layout(best, unused);
    }
}

fn lowball_layout(rank: EvalRank, best: &mut [Card], unused: &mut [Card]) {
    match NOTHING_MAX - rank.0 + 1 {
        // 5-4-3-2-A suited: an ace-high flush in this order.
        LOWBALL_FLUSH_SLOT => {
            sort_desc(best);
            sort_desc(unused);
        }
        // 5-4-3-2-A offsuit: an ace-high unmade hand.
        LOWBALL_NOTHING_SLOT => {
            sort_desc(best);
            sort_desc(unused);
            suit_normalize(best, unused);
        }
        _ => high_layout(from_lowball(rank), Rank::Five, best, unused),
    }
}

fn soko_layout(rank: EvalRank, best: &mut [Card], unused: &mut [Card]) {
    match rank.0 {
        r if r <= TWO_PAIR_MAX => high_layout(rank, Rank::Five, best, unused),
        r if r <= SOKO_FOUR_FLUSH_MAX => {
            // The four flush cards in descending order, the kicker fifth.
            let mut suit_counts = [0u8; 4];
            for c in best.iter() {
                suit_counts[c.suit() as usize] += 1;
            }
            best.sort_by(|a, b| {
                (suit_counts[b.suit() as usize] == 4, b)
                    .cmp(&(suit_counts[a.suit() as usize] == 4, a))
            });
            sort_desc(unused);
        }
        r if r <= SOKO_FOUR_STRAIGHT_MAX => {
            four_straight_layout(best);
            sort_desc(unused);
        }
        _ => high_layout(EvalRank(rank.0 - SOKO_SLIDE), Rank::Five, best, unused),
    }
}

/// The four running cards in descending order, the kicker fifth.
fn four_straight_layout(best: &mut [Card]) {
    for skip in 0..best.len() {
        let mut mask = 0u32;
        for (i, c) in best.iter().enumerate() {
            if i != skip {
                mask |= c.bits() >> 16;
            }
        }
        if mask.count_ones() != 4 || (mask >> mask.trailing_zeros()) != 0xf {
            continue;
        }

        let kicker = best[skip];
        let mut run: Vec<Card> = best
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != skip)
            .map(|(_, c)| *c)
            .collect();
        sort_desc(&mut run);
        run.push(kicker);
        best.copy_from_slice(&run);
        return;
    }
}

fn sort_desc(cards: &mut [Card]) {
    cards.sort_by(|a, b| b.cmp(a));
}

/// Swaps suit-equivalent cards between the best and unused lists so the
/// best slot of each rank holds the stronger suit: the suit with more
/// cards in the full deal, ties broken by nominal suit value.
fn suit_normalize(best: &mut [Card], unused: &mut [Card]) {
    if best.is_empty() || unused.is_empty() {
        return;
    }

    let mut suit_counts = [0u8; 4];
    for c in best.iter().chain(unused.iter()) {
        suit_counts[c.suit() as usize] += 1;
    }
    let weight = |c: &Card| (suit_counts[c.suit() as usize], c.suit().nibble());

    for r in 0..13u8 {
        let best_slots: Vec<usize> = (0..best.len())
            .filter(|&i| best[i].rank_index() == r)
            .collect();
        let unused_slots: Vec<usize> = (0..unused.len())
            .filter(|&i| unused[i].rank_index() == r)
            .collect();
        if best_slots.is_empty() || unused_slots.is_empty() {
            continue;
        }

        let mut pool: Vec<Card> = best_slots
            .iter()
            .map(|&i| best[i])
            .chain(unused_slots.iter().map(|&i| unused[i]))
            .collect();
        pool.sort_by(|a, b| weight(b).cmp(&weight(a)));

        let mut pool = pool.into_iter();
        for &i in &best_slots {
            best[i] = pool.next().unwrap();
        }
        for &i in &unused_slots {
            unused[i] = pool.next().unwrap();
        }
    }
}
