use core::fmt;
use core::ops::RangeInclusive;
use core::str::FromStr;

use vega_base::{Card, Rank};

use crate::cactus::rank_five;
use crate::kernels::{best_five, pocket_board, Pick, Ranker};
use crate::low::{badugi_rank, eight_or_better_rank, lowball_rank, razz_rank, EIGHT_OR_BETTER_MAX};
use crate::mapper::{soko_rank, to_manila, to_short, to_spanish};
use crate::{Error, Eval, EvalRank, JACKS_OR_BETTER_MAX};

/// A poker variant tag, selecting which evaluator and rule set is used.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Variant {
    Holdem,
    Short,
    Manila,
    Spanish,
    Omaha,
    OmahaHiLo,
    OmahaFive,
    OmahaSix,
    Dallas,
    Houston,
    Stud,
    StudHiLo,
    Razz,
    Badugi,
    Lowball,
    Soko,
    JacksOrBetter,
}

impl Variant {
    /// Every supported variant, in id order.
    pub const ALL: [Variant; 17] = [
        Variant::Holdem,
        Variant::Short,
        Variant::Manila,
        Variant::Spanish,
        Variant::Omaha,
        Variant::OmahaHiLo,
        Variant::OmahaFive,
        Variant::OmahaSix,
        Variant::Dallas,
        Variant::Houston,
        Variant::Stud,
        Variant::StudHiLo,
        Variant::Razz,
        Variant::Badugi,
        Variant::Lowball,
        Variant::Soko,
        Variant::JacksOrBetter,
    ];

    /// A stable numeric id, usable for serialization.
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Resolves a serialized id back to its variant.
    pub fn from_id(id: u8) -> Result<Variant, Error> {
        Variant::ALL.get(id as usize).copied().ok_or(Error::InvalidId)
    }

    /// The variant's canonical name.
    pub fn name(self) -> &'static str {
        match self {
            Variant::Holdem => "Holdem",
            Variant::Short => "Short",
            Variant::Manila => "Manila",
            Variant::Spanish => "Spanish",
            Variant::Omaha => "Omaha",
            Variant::OmahaHiLo => "OmahaHiLo",
            Variant::OmahaFive => "OmahaFive",
            Variant::OmahaSix => "OmahaSix",
            Variant::Dallas => "Dallas",
            Variant::Houston => "Houston",
            Variant::Stud => "Stud",
            Variant::StudHiLo => "StudHiLo",
            Variant::Razz => "Razz",
            Variant::Badugi => "Badugi",
            Variant::Lowball => "Lowball",
            Variant::Soko => "Soko",
            Variant::JacksOrBetter => "JacksOrBetter",
        }
    }

    /// How many pocket cards the variant evaluates.
    pub fn pocket_range(self) -> RangeInclusive<usize> {
        match self {
            Variant::Holdem
            | Variant::Short
            | Variant::Manila
            | Variant::Spanish
            | Variant::Dallas => 2..=2,
            Variant::Omaha | Variant::OmahaHiLo | Variant::Badugi => 4..=4,
            Variant::OmahaFive | Variant::Soko | Variant::JacksOrBetter | Variant::Lowball => 5..=5,
            Variant::OmahaSix => 6..=6,
            Variant::Houston => 3..=3,
            Variant::Stud | Variant::StudHiLo | Variant::Razz => 5..=7,
        }
    }

    /// How many board cards the variant evaluates.
    pub fn board_range(self) -> RangeInclusive<usize> {
        match self {
            Variant::Holdem | Variant::Short | Variant::Manila | Variant::Spanish => 0..=5,
            Variant::Omaha
            | Variant::OmahaHiLo
            | Variant::OmahaFive
            | Variant::OmahaSix
            | Variant::Dallas
            | Variant::Houston => 3..=5,
            _ => 0..=0,
        }
    }

    /// Whether the variant splits the pot with an eight-or-better low.
    pub fn has_lo(self) -> bool {
        matches!(self, Variant::OmahaHiLo | Variant::StudHiLo)
    }

    /// The high end of the variant's lowest straight: a wheel runs
    /// base-high down to the ace.
    pub fn straight_base(self) -> Rank {
        match self {
            Variant::Short => Rank::Nine,
            Variant::Manila => Rank::Ten,
            Variant::Spanish => Rank::Jack,
            _ => Rank::Five,
        }
    }

    /// The lowest card rank present in the variant's deck.
    pub fn deck_low_rank(self) -> Rank {
        match self {
            Variant::Short => Rank::Six,
            Variant::Manila => Rank::Seven,
            Variant::Spanish => Rank::Eight,
            _ => Rank::Two,
        }
    }

    /// Evaluates a deal under this variant's rules.
    ///
    /// Pocket or board sizes outside the variant's supported ranges leave
    /// both ranks invalid; the evaluators themselves never fail.
    pub fn eval(self, pocket: &[Card], board: &[Card]) -> Eval {
        let mut ev = Eval::new(self);
        if !self.pocket_range().contains(&pocket.len())
            || !self.board_range().contains(&board.len())
        {
            return ev;
        }

        match self {
            Variant::Holdem => combined(&mut ev, pocket, board, rank_five),
            Variant::Short => combined(&mut ev, pocket, board, short_ranker),
            Variant::Manila => combined(&mut ev, pocket, board, manila_ranker),
            Variant::Spanish => combined(&mut ev, pocket, board, spanish_ranker),
            Variant::Omaha
            | Variant::OmahaFive
            | Variant::OmahaSix
            | Variant::Dallas
            | Variant::Houston => split(&mut ev, pocket, board, false),
            Variant::OmahaHiLo => split(&mut ev, pocket, board, true),
            Variant::Stud => combined(&mut ev, pocket, board, rank_five),
            Variant::StudHiLo => {
                combined(&mut ev, pocket, board, rank_five);
                if let Some(pick) = best_five(pocket, eight_or_better_rank) {
                    if pick.rank.0 < EIGHT_OR_BETTER_MAX {
                        set_lo(&mut ev, pick);
                    }
                }
            }
            Variant::Razz => combined(&mut ev, pocket, board, razz_rank),
            Variant::Badugi => {
                let (rank, best, unused) = badugi_rank(pocket);
                if rank.is_valid() {
                    ev.hi_rank = rank;
                    ev.hi_best = best;
                    ev.hi_unused = unused;
                }
            }
            Variant::Lowball => combined(&mut ev, pocket, board, lowball_rank),
            Variant::Soko => combined(&mut ev, pocket, board, soko_rank),
            Variant::JacksOrBetter => {
                combined(&mut ev, pocket, board, rank_five);
                if ev.hi_rank.0 > JACKS_OR_BETTER_MAX {
                    ev.hi_rank = EvalRank::INVALID;
                    ev.hi_best.clear();
                    ev.hi_unused.clear();
                }
            }
        }

        ev.normalize();
        ev
    }
}

fn short_ranker(cards: &[Card; 5]) -> EvalRank {
    to_short(rank_five(cards))
}

fn manila_ranker(cards: &[Card; 5]) -> EvalRank {
    to_manila(rank_five(cards))
}

fn spanish_ranker(cards: &[Card; 5]) -> EvalRank {
    to_spanish(rank_five(cards))
}

/// Evaluates the pocket and board as one combined pool of 5 to 7 cards.
fn combined(ev: &mut Eval, pocket: &[Card], board: &[Card], ranker: Ranker) {
    let cards: Vec<Card> = pocket.iter().chain(board.iter()).copied().collect();
    if let Some(pick) = best_five(&cards, ranker) {
        set_hi(ev, pick);
    }
}

/// Evaluates with the 2-from-pocket, 3-from-board rule.
fn split(ev: &mut Eval, pocket: &[Card], board: &[Card], lo: bool) {
    if let Some((hi, lo)) = pocket_board(pocket, board, rank_five, lo) {
        set_hi(ev, hi);
        if let Some(lo) = lo {
            set_lo(ev, lo);
        }
    }
}

fn set_hi(ev: &mut Eval, pick: Pick) {
    ev.hi_rank = pick.rank;
    ev.hi_best = pick.best;
    ev.hi_unused = pick.unused;
}

fn set_lo(ev: &mut Eval, pick: Pick) {
    ev.lo_rank = pick.rank;
    ev.lo_best = pick.best;
    ev.lo_unused = pick.unused;
}

/// Evaluates a deal under the given variant; see [`Variant::eval`].
pub fn eval(variant: Variant, pocket: &[Card], board: &[Card]) -> Eval {
    variant.eval(pocket, board)
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .iter()
            .find(|v| v.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or(Error::InvalidType)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{parse_cards, ParseError};
    use rstest::rstest;

    #[test]
    fn ids_round_trip() {
        for variant in Variant::ALL {
            assert_eq!(Variant::from_id(variant.id()), Ok(variant));
        }
        assert_eq!(Variant::from_id(200), Err(Error::InvalidId));
    }

    #[test]
    fn names_round_trip() {
        for variant in Variant::ALL {
            assert_eq!(variant.name().parse::<Variant>(), Ok(variant));
        }
        assert_eq!("NoSuchGame".parse::<Variant>(), Err(Error::InvalidType));
    }

    #[rstest]
    #[case::holdem_short_pocket(Variant::Holdem, "Ah", "Kh Qh Jh Th 2c")]
    #[case::holdem_short_board(Variant::Holdem, "Ah Kh", "Qh Jh")]
    #[case::omaha_three_pocket(Variant::Omaha, "Ah Kh Qh", "Jh Th 2c")]
    #[case::badugi_five_cards(Variant::Badugi, "Ah 2c 3s 4d 5d", "")]
    #[case::stud_four_cards(Variant::Stud, "Ah Kh Qh Jh", "")]
    fn out_of_range_inputs_stay_invalid(
        #[case] variant: Variant,
        #[case] pocket: &str,
        #[case] board: &str,
    ) -> Result<(), ParseError> {
        let ev = eval(variant, &parse_cards(pocket)?, &parse_cards(board)?);
        assert!(!ev.hi_rank.is_valid());
        assert!(!ev.lo_rank.is_valid());
        assert!(ev.hi_best.is_empty());
        Ok(())
    }

    #[test]
    fn dallas_uses_both_pocket_cards() -> Result<(), ParseError> {
        let ev = eval(
            Variant::Dallas,
            &parse_cards("Ah Kh")?,
            &parse_cards("Qh Jh Th 2c 3c")?,
        );
        assert_eq!(ev.hi_rank, EvalRank(1));
        Ok(())
    }

    #[test]
    fn houston_uses_exactly_two_of_three() -> Result<(), ParseError> {
        // Three pocket broadway hearts cannot all play, so no royal flush.
        let ev = eval(
            Variant::Houston,
            &parse_cards("Ah Kh Qh")?,
            &parse_cards("Jh Th 2c")?,
        );
        assert!(ev.hi_rank.0 > 10);
        Ok(())
    }

    #[test]
    fn stud_hi_lo_tracks_both_sides() -> Result<(), ParseError> {
        let ev = eval(
            Variant::StudHiLo,
            &parse_cards("Ah 2h 3h 4h 5h Kc Kd")?,
            &[],
        );
        // Steel wheel high, five-high low.
        assert_eq!(ev.hi_rank, EvalRank(10));
        assert_eq!(ev.lo_rank, EvalRank(0b1_1111));
        Ok(())
    }

    #[test]
    fn stud_hi_lo_low_must_qualify() -> Result<(), ParseError> {
        let ev = eval(
            Variant::StudHiLo,
            &parse_cards("Ah 2h 3h 9h Th Kc Kd")?,
            &[],
        );
        assert!(ev.hi_rank.is_valid());
        assert!(!ev.lo_rank.is_valid());
        Ok(())
    }

    #[rstest]
    #[case::worst_jacks("Jh Jc 4d 3h 2s", true)]
    #[case::pair_of_tens("Th Tc 4d 3h 2s", false)]
    #[case::ace_high("Ah Kc 4d 3h 2s", false)]
    #[case::two_pair("Jh Jc 4d 4h 2s", true)]
    fn jacks_or_better_qualification(
        #[case] cards: &str,
        #[case] qualifies: bool,
    ) -> Result<(), ParseError> {
        let ev = eval(Variant::JacksOrBetter, &parse_cards(cards)?, &[]);
        assert_eq!(ev.hi_rank.is_valid(), qualifies);
        Ok(())
    }
}
