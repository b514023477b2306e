//! Game variants and the string-level evaluation entry point.
//!
//! Each variant owns its own enumeration of candidate hands: Hold'em searches every
//! five-card subset of seven cards, Omaha only the two-hole-plus-three-board hands.

pub mod omaha;
pub mod texas;

use crate::evaluator::{EvalError, Evaluation};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Variant {
    Texas,
    Omaha,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Texas, Variant::Omaha];

    /// Private cards dealt to a player.
    pub const fn hole_count(self) -> usize {
        match self {
            Variant::Texas => crate::hand::HoleCards::SIZE,
            Variant::Omaha => omaha::OmahaHoleCards::SIZE,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Variant::Texas => "texas",
            Variant::Omaha => "omaha",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VariantParseError {
    #[error("unknown variant: '{0}'")]
    Unknown(String),
}

impl FromStr for Variant {
    type Err = VariantParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "texas" | "holdem" | "hold'em" => Ok(Variant::Texas),
            "omaha" => Ok(Variant::Omaha),
            _ => Err(VariantParseError::Unknown(s.to_string())),
        }
    }
}

/// Evaluate wire-format cards for `variant`.
///
/// `hole` and `board` are concatenated two-character cards (`"AsKd"`); a card count that
/// does not fit the variant fails with [`EvalError::MalformedCard`].
///
/// ```
/// use poker_eval::variants::{evaluate, Variant};
///
/// let eval = evaluate(Variant::Texas, "AsKd", "QhJhTh9h8h").unwrap();
/// assert_eq!(eval.name(), "straight flush");
///
/// let eval = evaluate(Variant::Omaha, "AsKd2c3c", "QhJhTh9h8h").unwrap();
/// assert_eq!(eval.name(), "straight");
/// ```
pub fn evaluate(variant: Variant, hole: &str, board: &str) -> Result<Evaluation, EvalError> {
    match variant {
        Variant::Texas => texas::evaluate_texas_str(hole, board),
        Variant::Omaha => omaha::evaluate_omaha_str(hole, board),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hole_counts() {
        assert_eq!(Variant::Texas.hole_count(), 2);
        assert_eq!(Variant::Omaha.hole_count(), 4);
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("Texas".parse::<Variant>().unwrap(), Variant::Texas);
        assert_eq!("holdem".parse::<Variant>().unwrap(), Variant::Texas);
        assert_eq!(" omaha ".parse::<Variant>().unwrap(), Variant::Omaha);
        assert!("stud".parse::<Variant>().is_err());
        for v in Variant::ALL {
            assert_eq!(v.to_string().parse::<Variant>().unwrap(), v);
        }
    }

    #[test]
    fn dispatch_checks_variant_counts() {
        assert_eq!(
            evaluate(Variant::Omaha, "AsKd", "QhJhTh9h8h"),
            Err(EvalError::MalformedCard { expected: 4, found: 2 })
        );
        assert_eq!(
            evaluate(Variant::Texas, "AsKd2c3c", "QhJhTh9h8h"),
            Err(EvalError::MalformedCard { expected: 2, found: 4 })
        );
    }

    #[test]
    fn same_cards_rank_differently_per_variant() {
        // Hold'em plays the board flush; Omaha needs two hearts in hand
        let board = "2h5h9hJhKh";
        assert_eq!(evaluate(Variant::Texas, "AcAd", board).unwrap().name(), "flush");
        assert_eq!(evaluate(Variant::Omaha, "AcAd3s4s", board).unwrap().name(), "pair");
    }
}
