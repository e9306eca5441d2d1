//! Best-of-N selection kernels that wrap the 5-card rankers.
//!
//! Every kernel keeps the first subset that reaches the minimum rank, so
//! evaluation is deterministic for a given input order; the normalizer then
//! canonicalizes the presentation.

use vega_base::Card;

use crate::combos::{T2C2, T3C2, T3C3, T4C2, T4C3, T5C2, T5C3, T6C2, T6C5, T7C5};
use crate::low::{eight_or_better_rank, EIGHT_OR_BETTER_MAX};
use crate::EvalRank;

/// A 5-card ranking function plugged into the kernels.
pub(crate) type Ranker = fn(&[Card; 5]) -> EvalRank;

/// The winning subset of a kernel run.
pub(crate) struct Pick {
    pub rank: EvalRank,
    pub best: Vec<Card>,
    pub unused: Vec<Card>,
}

/// Selects the best 5-card hand from 5, 6 or 7 cards under `ranker`.
pub(crate) fn best_five(cards: &[Card], ranker: Ranker) -> Option<Pick> {
    match cards.len() {
        5 => {
            let hand: [Card; 5] = cards.try_into().unwrap();
            Some(Pick {
                rank: ranker(&hand),
                best: cards.to_vec(),
                unused: Vec::new(),
            })
        }
        6 => pick_rows(cards, &T6C5, ranker),
        7 => pick_rows(cards, &T7C5, ranker),
        _ => None,
    }
}

fn pick_rows<const W: usize>(
    cards: &[Card],
    table: &'static [[usize; W]],
    ranker: Ranker,
) -> Option<Pick> {
    let mut best: Option<(EvalRank, &[usize; W])> = None;

    for row in table {
        let hand = [
            cards[row[0]],
            cards[row[1]],
            cards[row[2]],
            cards[row[3]],
            cards[row[4]],
        ];
        let rank = ranker(&hand);
        if best.map_or(true, |(r, _)| rank < r) {
            best = Some((rank, row));
        }
    }

    best.map(|(rank, row)| Pick {
        rank,
        best: row[..5].iter().map(|&i| cards[i]).collect(),
        unused: row[5..].iter().map(|&i| cards[i]).collect(),
    })
}

fn choose_rows<const W: usize>(
    table: &'static [[usize; W]],
    k: usize,
) -> impl Iterator<Item = (&'static [usize], &'static [usize])> {
    table.iter().map(move |row| (&row[..k], &row[k..]))
}

/// Enumerates every way of taking exactly 2 pocket cards and 3 board cards,
/// tracking independent minima for the high hand and, when `lo` is set, the
/// eight-or-better low.
///
/// Supports 2 to 6 pocket cards and 3 to 5 board cards; anything else
/// yields no result. The low pick is only produced when the best low
/// qualifies.
pub(crate) fn pocket_board(
    pocket: &[Card],
    board: &[Card],
    ranker: Ranker,
    lo: bool,
) -> Option<(Pick, Option<Pick>)> {
    let pocket_rows: Vec<(&[usize], &[usize])> = match pocket.len() {
        2 => choose_rows(&T2C2, 2).collect(),
        3 => choose_rows(&T3C2, 2).collect(),
        4 => choose_rows(&T4C2, 2).collect(),
        5 => choose_rows(&T5C2, 2).collect(),
        6 => choose_rows(&T6C2, 2).collect(),
        _ => return None,
    };
    let board_rows: Vec<(&[usize], &[usize])> = match board.len() {
        3 => choose_rows(&T3C3, 3).collect(),
        4 => choose_rows(&T4C3, 3).collect(),
        5 => choose_rows(&T5C3, 3).collect(),
        _ => return None,
    };

    let mut hi: Option<(EvalRank, Pick)> = None;
    let mut lo_best: Option<(EvalRank, Pick)> = None;

    for &(bc, bu) in &board_rows {
        for &(pc, pu) in &pocket_rows {
            let hand = [
                pocket[pc[0]],
                pocket[pc[1]],
                board[bc[0]],
                board[bc[1]],
                board[bc[2]],
            ];

            let rank = ranker(&hand);
            if hi.as_ref().map_or(true, |(r, _)| rank < *r) {
                hi = Some((rank, make_pick(rank, &hand, pocket, pu, board, bu)));
            }

            if lo {
                let rank = eight_or_better_rank(&hand);
                if rank.0 < EIGHT_OR_BETTER_MAX
                    && lo_best.as_ref().map_or(true, |(r, _)| rank < *r)
                {
                    lo_best = Some((rank, make_pick(rank, &hand, pocket, pu, board, bu)));
                }
            }
        }
    }

    hi.map(|(_, pick)| (pick, lo_best.map(|(_, pick)| pick)))
}

fn make_pick(
    rank: EvalRank,
    hand: &[Card; 5],
    pocket: &[Card],
    pocket_unused: &[usize],
    board: &[Card],
    board_unused: &[usize],
) -> Pick {
    Pick {
        rank,
        best: hand.to_vec(),
        unused: pocket_unused
            .iter()
            .map(|&i| pocket[i])
            .chain(board_unused.iter().map(|&i| board[i]))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{parse_cards, ParseError};
    use crate::rank_five;

    #[test]
    fn best_five_tracks_unused() -> Result<(), ParseError> {
        let cards = parse_cards("5d 4d 3d 2d Ad Tc Jc")?;
        let pick = best_five(&cards, rank_five).unwrap();

        assert_eq!(pick.rank, EvalRank(10));
        assert_eq!(pick.best, parse_cards("5d 4d 3d 2d Ad")?);
        assert_eq!(pick.unused, parse_cards("Tc Jc")?);
        Ok(())
    }

    #[test]
    fn best_five_rejects_bad_sizes() -> Result<(), ParseError> {
        assert!(best_five(&parse_cards("5d 4d")?, rank_five).is_none());
        assert!(best_five(&parse_cards("5d 4d 3d 2d Ad Tc Jc 9c")?, rank_five).is_none());
        Ok(())
    }

    #[test]
    fn omaha_uses_exactly_two_pocket_cards() -> Result<(), ParseError> {
        // Three hearts on the board plus one in the pocket is no flush in
        // Omaha; two pocket hearts complete it.
        let board = parse_cards("Ah 7h 2h Ks 3d")?;

        let one_heart = parse_cards("Qh Qs Jc Td")?;
        let (pick, _) = pocket_board(&one_heart, &board, rank_five, false).unwrap();
        assert!(pick.rank.0 > 1599, "no flush with a single pocket heart");

        let two_hearts = parse_cards("Qh Jh 8s 8d")?;
        let (pick, _) = pocket_board(&two_hearts, &board, rank_five, false).unwrap();
        assert!(pick.rank.0 <= 1599, "flush with two pocket hearts");
        Ok(())
    }

    #[test]
    fn omaha_low_requires_qualification() -> Result<(), ParseError> {
        let board = parse_cards("Ah 7h 2h Ks 3d")?;

        let (_, lo) = pocket_board(&parse_cards("4h 5s Jc Td")?, &board, rank_five, true).unwrap();
        let lo = lo.unwrap();
        assert!(lo.rank.0 < EIGHT_OR_BETTER_MAX);
        assert_eq!(lo.best.len(), 5);
        assert_eq!(lo.unused.len(), 4);

        // A board with only two low cards cannot make a low at all.
        let board = parse_cards("Ah 7h Th Ks Qd")?;
        let (_, lo) = pocket_board(&parse_cards("4h 5s Jc Td")?, &board, rank_five, true).unwrap();
        assert!(lo.is_none());
        Ok(())
    }

    #[test]
    fn pocket_board_first_enumeration_wins_ties() -> Result<(), ParseError> {
        // Both pocket pairs of aces make the same two-pair rank; the first
        // enumerated pair must be reported.
        let pocket = parse_cards("As Ah Ad Ac")?;
        let board = parse_cards("Kh Kd 2c")?;
        let (pick, _) = pocket_board(&pocket, &board, rank_five, false).unwrap();
        assert_eq!(pick.best[..2], parse_cards("As Ah")?[..]);
        Ok(())
    }
}
