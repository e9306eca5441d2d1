use core::fmt;

use crate::{Eval, HandCategory};

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandCategory::Ineligible => write!(f, "Ineligible"),
            HandCategory::Nothing => write!(f, "High Card"),
            HandCategory::Pair => write!(f, "Pair"),
            HandCategory::FourStraight => write!(f, "Four Straight"),
            HandCategory::FourFlush => write!(f, "Four Flush"),
            HandCategory::TwoPair => write!(f, "Two Pair"),
            HandCategory::ThreeOfAKind => write!(f, "Three of a Kind"),
            HandCategory::Straight => write!(f, "Straight"),
            HandCategory::Flush => write!(f, "Flush"),
            HandCategory::FullHouse => write!(f, "Full House"),
            HandCategory::FourOfAKind => write!(f, "Four of a Kind"),
            HandCategory::StraightFlush => write!(f, "Straight Flush"),
        }
    }
}

impl fmt::Display for Eval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hi_category())?;

        if !self.hi_best.is_empty() {
            write!(f, " [")?;
            for (i, card) in self.hi_best.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:?}", card)?;
            }
            write!(f, "]")?;
        }

        if self.lo_rank.is_valid() {
            write!(f, ", Low [")?;
            for (i, card) in self.lo_best.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:?}", card)?;
            }
            write!(f, "]")?;
        }

        Ok(())
    }
}
