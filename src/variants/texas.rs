use crate::cards::{format_cards, Card};
use crate::evaluator::combinations::Combinations;
use crate::evaluator::{best_of, EvalError, Evaluation};
use crate::hand::{validate_deal, Board, HoleCards};
use log::{debug, trace};

/// How many hole cards the winning five uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HoleUsage {
    /// The board alone is the best hand.
    PlaysBoard,
    OneHoleCard,
    BothHoleCards,
}

/// Classify how many of `hole` appear in the evaluation's best five.
///
/// ```
/// use poker_eval::variants::texas::{evaluate_texas, hole_usage, HoleUsage};
///
/// let hole = "AsKd".parse().unwrap();
/// let eval = evaluate_texas(&hole, &"QhJhTh9h8h".parse().unwrap()).unwrap();
/// assert_eq!(hole_usage(&hole, &eval), HoleUsage::PlaysBoard);
/// ```
pub fn hole_usage(hole: &HoleCards, eval: &Evaluation) -> HoleUsage {
    let used = hole.as_array().into_iter().filter(|c| eval.best_five.contains(c)).count();
    match used {
        0 => HoleUsage::PlaysBoard,
        1 => HoleUsage::OneHoleCard,
        _ => HoleUsage::BothHoleCards,
    }
}

/// Evaluate a Hold'em hand: the best five of the seven cards, any mix of hole and board.
///
/// ```
/// use poker_eval::evaluator::Category;
/// use poker_eval::hand::{Board, HoleCards};
/// use poker_eval::variants::texas::evaluate_texas;
///
/// let hole: HoleCards = "AsAh".parse().unwrap();
/// let board: Board = "QcJd9h3s2c".parse().unwrap();
/// let eval = evaluate_texas(&hole, &board).unwrap();
/// assert_eq!(eval.category, Category::Pair);
/// ```
pub fn evaluate_texas(hole: &HoleCards, board: &Board) -> Result<Evaluation, EvalError> {
    validate_deal(&hole.as_array(), board)?;
    let [h0, h1] = hole.as_array();
    let [b0, b1, b2, b3, b4] = board.as_array();
    let seven = [h0, h1, b0, b1, b2, b3, b4];

    let best = evaluate_seven(&seven).ok_or(EvalError::InvalidCardCount(0))?;

    debug!(
        "texas {}{} on {}: {} [{}] {:?}",
        h0,
        h1,
        format_cards(board.as_slice()),
        best.name(),
        format_cards(&best.best_five),
        hole_usage(hole, &best),
    );
    Ok(best)
}

/// Wire-level entry: `hole` must hold 2 card tokens and `board` 5.
///
/// ```
/// use poker_eval::variants::texas::evaluate_texas_str;
///
/// let eval = evaluate_texas_str("2h2d", "2s2c3h4h5h").unwrap();
/// assert_eq!(eval.name(), "four of a kind");
/// ```
pub fn evaluate_texas_str(hole: &str, board: &str) -> Result<Evaluation, EvalError> {
    let hole: HoleCards = hole.parse()?;
    let board: Board = board.parse()?;
    evaluate_texas(&hole, &board)
}

/// Best five of exactly seven cards, no hole/board distinction.
pub fn evaluate_seven(cards: &[Card; 7]) -> Option<Evaluation> {
    best_of(Combinations::<7, 5>::new().map(|idx| {
        let hand = Combinations::<7, 5>::select(idx, cards);
        trace!("texas candidate {}", format_cards(&hand));
        hand
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::Category;

    #[test]
    fn board_straight_flush_ignores_hole_cards() {
        let eval = evaluate_texas_str("AsKd", "QhJhTh9h8h").unwrap();
        assert_eq!(eval.category, Category::StraightFlush);
        assert_eq!(eval.name(), "straight flush");
        let hole: HoleCards = "AsKd".parse().unwrap();
        assert_eq!(hole_usage(&hole, &eval), HoleUsage::PlaysBoard);
    }

    #[test]
    fn one_hole_card_completes_royal() {
        let eval = evaluate_texas_str("Ah2c", "KhQhJhTh3d").unwrap();
        assert_eq!(eval.name(), "royal flush");
        let hole: HoleCards = "Ah2c".parse().unwrap();
        assert_eq!(hole_usage(&hole, &eval), HoleUsage::OneHoleCard);
    }

    #[test]
    fn pocket_pair_uses_both() {
        let eval = evaluate_texas_str("9s9d", "9h5c5d2sKh").unwrap();
        assert_eq!(eval.category, Category::FullHouse);
        let hole: HoleCards = "9s9d".parse().unwrap();
        assert_eq!(hole_usage(&hole, &eval), HoleUsage::BothHoleCards);
    }

    #[test]
    fn overlap_is_rejected() {
        let err = evaluate_texas_str("AsKd", "As3h4h5h6h").unwrap_err();
        assert!(matches!(err, EvalError::DuplicateCard(_)));
    }

    #[test]
    fn short_board_is_malformed() {
        let err = evaluate_texas_str("AsKd", "2h3h4h5h").unwrap_err();
        assert_eq!(err, EvalError::MalformedCard { expected: 5, found: 4 });
    }

    #[test]
    fn seven_card_helper_matches_texas() {
        let hole: HoleCards = "AcAd".parse().unwrap();
        let board: Board = "AhKsKd7c2h".parse().unwrap();
        let [h0, h1] = hole.as_array();
        let [b0, b1, b2, b3, b4] = board.as_array();
        let seven = evaluate_seven(&[h0, h1, b0, b1, b2, b3, b4]).unwrap();
        assert_eq!(seven, evaluate_texas(&hole, &board).unwrap());
        assert_eq!(seven.category, Category::FullHouse);
    }
}
