use core::cmp::Ordering;

use vega_base::Card;

use crate::normalize;
use crate::{EvalRank, HandCategory, Variant};

/// The result of evaluating one player's cards under a variant.
///
/// A freshly created record carries [`EvalRank::INVALID`] in both rank
/// fields; the dispatched evaluator fills in the high side and, for split
/// games, the low side. The record owns its best/unused card lists
/// outright, independent of the input slices.
#[derive(Debug, Clone)]
pub struct Eval {
    pub variant: Variant,
    pub hi_rank: EvalRank,
    pub hi_best: Vec<Card>,
    pub hi_unused: Vec<Card>,
    pub lo_rank: EvalRank,
    pub lo_best: Vec<Card>,
    pub lo_unused: Vec<Card>,
}

impl Eval {
    /// Creates an empty evaluation for the given variant.
    pub fn new(variant: Variant) -> Eval {
        Eval {
            variant,
            hi_rank: EvalRank::INVALID,
            hi_best: Vec::new(),
            hi_unused: Vec::new(),
            lo_rank: EvalRank::INVALID,
            lo_best: Vec::new(),
            lo_unused: Vec::new(),
        }
    }

    /// Returns the hand-ranking category of the high side, interpreted in
    /// the variant's own rank space.
    pub fn hi_category(&self) -> HandCategory {
        if !self.hi_rank.is_valid() {
            return HandCategory::Ineligible;
        }

        match self.variant {
            Variant::Short | Variant::Manila | Variant::Spanish => {
                crate::from_flush_over(self.hi_rank).category()
            }
            Variant::Soko => normalize::soko_category(self.hi_rank),
            Variant::Lowball => normalize::lowball_category(self.hi_rank),
            Variant::Razz => {
                if self.hi_rank.0 < crate::ACE_FIVE_MAX {
                    HandCategory::Nothing
                } else {
                    EvalRank(u16::MAX - self.hi_rank.0).category()
                }
            }
            Variant::Badugi => HandCategory::Nothing,
            _ => self.hi_rank.category(),
        }
    }

    /// Reorders the best and unused card lists into their canonical
    /// presentation. Idempotent, and never changes either rank.
    pub fn normalize(&mut self) {
        normalize::normalize(self);
    }

    /// Compares two evaluations by the chosen side.
    ///
    /// Under `low`, entries without a qualifying low compare after
    /// everything else; under high, invalid evaluations do.
    pub fn comp(&self, other: &Eval, low: bool) -> Ordering {
        if low {
            self.lo_key().cmp(&other.lo_key())
        } else {
            self.hi_key().cmp(&other.hi_key())
        }
    }

    fn hi_key(&self) -> u32 {
        if self.hi_rank.is_valid() {
            self.hi_rank.0 as u32
        } else {
            u32::MAX
        }
    }

    fn lo_key(&self) -> u32 {
        if self.lo_rank.is_valid() && self.lo_rank.0 != 0 {
            self.lo_rank.0 as u32
        } else {
            u32::MAX
        }
    }
}

/// Compares two evaluations by the chosen side; see [`Eval::comp`].
pub fn compare(a: &Eval, b: &Eval, low: bool) -> Ordering {
    a.comp(b, low)
}

/// Orders evaluations from best to worst and splits off the winners.
///
/// Returns the index permutation (a stable sort, so tied entries keep their
/// original relative order) and the pivot: positions `[0..pivot)` are tied
/// for best. Under `low`, a best entry without a qualifying low makes the
/// pivot 0 — nobody wins the low half.
pub fn order(evs: &[Eval], low: bool) -> (Vec<usize>, usize) {
    let mut indices: Vec<usize> = (0..evs.len()).collect();
    let key = |i: usize| {
        if low {
            evs[i].lo_key()
        } else {
            evs[i].hi_key()
        }
    };
    indices.sort_by_key(|&i| key(i));

    let Some(&winner) = indices.first() else {
        return (indices, 0);
    };
    if low && key(winner) == u32::MAX {
        return (indices, 0);
    }

    let pivot = indices
        .iter()
        .take_while(|&&i| key(i) == key(winner))
        .count();
    (indices, pivot)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval_with(hi: u16, lo: u16) -> Eval {
        let mut ev = Eval::new(Variant::OmahaHiLo);
        ev.hi_rank = EvalRank(hi);
        ev.lo_rank = EvalRank(lo);
        ev
    }

    #[test]
    fn order_splits_winners() {
        let evs = [
            eval_with(100, u16::MAX),
            eval_with(10, u16::MAX),
            eval_with(10, u16::MAX),
            eval_with(7462, u16::MAX),
        ];

        let (indices, pivot) = order(&evs, false);
        assert_eq!(indices, vec![1, 2, 0, 3]);
        assert_eq!(pivot, 2);
    }

    #[test]
    fn order_is_stable_for_ties() {
        let evs = vec![eval_with(5, u16::MAX); 3];
        let (indices, pivot) = order(&evs, false);
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(pivot, 3);
    }

    #[test]
    fn low_winners_require_qualification() {
        let evs = [eval_with(10, u16::MAX), eval_with(20, u16::MAX)];
        let (_, pivot) = order(&evs, true);
        assert_eq!(pivot, 0);

        let evs = [eval_with(10, u16::MAX), eval_with(20, 31)];
        let (indices, pivot) = order(&evs, true);
        assert_eq!(indices, vec![1, 0]);
        assert_eq!(pivot, 1);
    }

    #[test]
    fn invalid_sorts_last_under_hi() {
        let evs = [Eval::new(Variant::Holdem), eval_with(7462, u16::MAX)];
        let (indices, pivot) = order(&evs, false);
        assert_eq!(indices, vec![1, 0]);
        assert_eq!(pivot, 1);
    }

    #[test]
    fn compare_matches_comp() {
        let a = eval_with(10, 31);
        let b = eval_with(20, 40);
        assert_eq!(compare(&a, &b, false), Ordering::Less);
        assert_eq!(compare(&b, &a, true), Ordering::Greater);
        assert_eq!(compare(&a, &a, false), Ordering::Equal);
    }
}
