use crate::cards::{format_cards, parse_exact, Card};
use crate::evaluator::combinations::Combinations;
use crate::evaluator::{EvalError, Evaluation};
use crate::hand::{ensure_distinct, validate_deal, Board};
use log::{debug, trace};
use std::str::FromStr;

/// Hole pairs times board triples: C(4,2) * C(5,3).
pub const OMAHA_HANDS: usize = Combinations::<4, 2>::COUNT * Combinations::<5, 3>::COUNT;

/// Omaha hole cards: exactly four private cards.
///
/// ```
/// use poker_eval::cards::{Card, Rank, Suit};
/// use poker_eval::variants::omaha::OmahaHoleCards;
///
/// let hole = OmahaHoleCards::try_new(
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::King, Suit::Spades),
///     Card::new(Rank::Queen, Suit::Hearts),
///     Card::new(Rank::Jack, Suit::Hearts),
/// ).unwrap();
/// assert_eq!(hole.as_array().len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OmahaHoleCards([Card; 4]);

impl OmahaHoleCards {
    pub const SIZE: usize = 4;

    pub fn try_new(a: Card, b: Card, c: Card, d: Card) -> Result<Self, EvalError> {
        let cards = [a, b, c, d];
        ensure_distinct(&cards)?;
        Ok(Self(cards))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, EvalError> {
        match *slice {
            [a, b, c, d] => Self::try_new(a, b, c, d),
            _ => Err(EvalError::InvalidHandSize { expected: Self::SIZE, found: slice.len() }),
        }
    }

    pub fn as_array(&self) -> [Card; 4] {
        self.0
    }
}

impl FromStr for OmahaHoleCards {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(&parse_exact(s, Self::SIZE)?)
    }
}

/// Every legal Omaha hand: two hole cards plus three board cards, [`OMAHA_HANDS`] in all.
///
/// Hands are yielded as `[hole, hole, board, board, board]`.
pub fn omaha_hands(hole: &OmahaHoleCards, board: &Board) -> impl Iterator<Item = [Card; 5]> {
    let hole = hole.as_array();
    let board = board.as_array();
    Combinations::<4, 2>::new().flat_map(move |pair| {
        let [h0, h1] = Combinations::<4, 2>::select(pair, &hole);
        Combinations::<5, 3>::new().map(move |triple| {
            let [b0, b1, b2] = Combinations::<5, 3>::select(triple, &board);
            [h0, h1, b0, b1, b2]
        })
    })
}

/// Evaluate an Omaha hand with the rule "use exactly 2 hole + 3 board cards".
///
/// ```
/// use poker_eval::evaluator::Category;
/// use poker_eval::variants::omaha::{evaluate_omaha, OmahaHoleCards};
///
/// // four hearts in hand but only one on board: no flush in Omaha
/// let hole: OmahaHoleCards = "AhKhQhJh".parse().unwrap();
/// let eval = evaluate_omaha(&hole, &"2h7c8d9sTc".parse().unwrap()).unwrap();
/// assert_eq!(eval.category, Category::Straight);
/// ```
pub fn evaluate_omaha(hole: &OmahaHoleCards, board: &Board) -> Result<Evaluation, EvalError> {
    validate_deal(&hole.as_array(), board)?;
    let best = search(omaha_hands(hole, board)).ok_or(EvalError::InvalidCardCount(0))?;
    debug!(
        "omaha {} on {}: {} [{}]",
        format_cards(&hole.as_array()),
        format_cards(board.as_slice()),
        best.name(),
        format_cards(&best.best_five),
    );
    Ok(best)
}

/// Wire-level entry: `hole` must hold 4 card tokens and `board` 5.
pub fn evaluate_omaha_str(hole: &str, board: &str) -> Result<Evaluation, EvalError> {
    let hole: OmahaHoleCards = hole.parse()?;
    let board: Board = board.parse()?;
    evaluate_omaha(&hole, &board)
}

#[cfg(not(feature = "parallel"))]
fn search<I>(hands: I) -> Option<Evaluation>
where
    I: Iterator<Item = [Card; 5]>,
{
    crate::evaluator::best_of(hands.inspect(|hand| trace!("omaha candidate {}", format_cards(hand))))
}

#[cfg(feature = "parallel")]
fn search<I>(hands: I) -> Option<Evaluation>
where
    I: Iterator<Item = [Card; 5]>,
{
    use rayon::prelude::*;

    let hands: Vec<[Card; 5]> = hands.collect();
    hands.par_iter().map(crate::evaluator::evaluate_five).max()
}
