pub mod class;
pub(crate) mod analysis;
pub(crate) mod combinations;
pub(crate) mod multiset;
pub(crate) mod rules;
pub(crate) mod straight;

pub use class::HandClass;

use crate::cards::{Card, Rank};
use core::cmp::Ordering;

/// Compact, comparable hand strength. Higher is better.
/// Encodes category and ranked tiebreakers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct HandValue(u64);

/// Poker hand category from weakest to strongest.
///
/// A royal flush is not a category of its own, it is the Ace-high [`Category::StraightFlush`];
/// see [`HandClass`] for the display refinement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }
}

/// Detailed evaluation result. `value` drives ordering.
///
/// `best_five` lists the winning cards in tie-break order: grouped cards first (trips before
/// the pair of a full house), then kickers by rank, with the Ace last in a wheel.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: Category,
    pub best_five: [Card; 5],
    value: HandValue,
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Evaluation {}

impl Evaluation {
    /// Return the packed comparable value for ordering/caching.
    pub const fn value(&self) -> HandValue {
        self.value
    }

    /// Display class, with the royal flush split out of straight flushes.
    pub fn class(&self) -> HandClass {
        HandClass::of(self.category, &self.best_five)
    }

    /// Canonical lower-case name, e.g. `"full house"`.
    pub fn name(&self) -> &'static str {
        self.class().name()
    }
}

impl HandValue {
    const CAT_SHIFT: u32 = 48;
    const RANK_STRIDE: u32 = 6;

    /// Return the packed comparable value.
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Category stored in the high bits.
    pub fn category(self) -> Option<Category> {
        let ordinal = (self.0 >> Self::CAT_SHIFT) as usize;
        Category::ALL.get(ordinal).copied()
    }

    /// Pack a category and up to five tiebreak ranks (most significant first).
    ///
    /// Layout, most significant to least:
    /// `[ category (16) | t0 (6) | t1 (6) | t2 (6) | t3 (6) | t4 (6) | 18 zero bits ]`.
    /// Missing tiebreakers are zero, which is below every rank, so a lexicographic
    /// comparison of tiebreak sequences equals the numeric comparison of the packed values.
    pub fn from_parts(category: Category, tiebreak: &[Rank]) -> Self {
        debug_assert!(tiebreak.len() <= 5);
        let mut v: u64 = (category as u64) << Self::CAT_SHIFT;
        for (i, r) in tiebreak.iter().take(5).enumerate() {
            let offset = Self::CAT_SHIFT - Self::RANK_STRIDE * (i as u32 + 1);
            v |= (r.value() as u64) << offset;
        }
        HandValue(v)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("expected {expected} cards, parsed {found}")]
    MalformedCard { expected: usize, found: usize },
    #[error("expected {expected} hole cards, got {found}")]
    InvalidHandSize { expected: usize, found: usize },
    #[error("expected {expected} board cards, got {found}")]
    InvalidBoardSize { expected: usize, found: usize },
    #[error("a hand is ranked from exactly 5 cards, got {0}")]
    InvalidCardCount(usize),
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
}

/// Rank exactly five cards.
///
/// Any other count is a contract violation and fails with [`EvalError::InvalidCardCount`]
/// instead of being truncated or padded.
///
/// ```
/// use poker_eval::cards::parse_cards;
/// use poker_eval::evaluator::{rank, Category, EvalError};
///
/// let eval = rank(&parse_cards("TsJsQsKsAs")).unwrap();
/// assert_eq!(eval.category, Category::StraightFlush);
/// assert_eq!(eval.name(), "royal flush");
///
/// assert_eq!(rank(&parse_cards("TsJsQsKs")), Err(EvalError::InvalidCardCount(4)));
/// ```
pub fn rank(cards: &[Card]) -> Result<Evaluation, EvalError> {
    let five: &[Card; 5] = cards.try_into().map_err(|_| EvalError::InvalidCardCount(cards.len()))?;
    Ok(evaluate_five(five))
}

/// Evaluate exactly five cards; detects category and encodes tie-breakers.
pub fn evaluate_five(cards: &[Card; 5]) -> Evaluation {
    let analysis = analysis::HandAnalysis::new(cards);
    let rule = rules::matching_rule(&analysis);
    analysis.build_evaluation(rule.category(), &rule.tiebreak(&analysis))
}

/// Best evaluation over a set of five-card candidates, `None` if there are none.
pub(crate) fn best_of<I>(hands: I) -> Option<Evaluation>
where
    I: IntoIterator<Item = [Card; 5]>,
{
    hands.into_iter().map(|hand| evaluate_five(&hand)).max()
}
