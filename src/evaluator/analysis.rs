use super::multiset::RankMultiset;
use super::straight;
use crate::cards::{Card, Rank, Suit};
use crate::evaluator::{Category, Evaluation, HandValue};

/// Pre-computed analysis of a 5-card hand.
/// Built once and shared by all category rules.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Cards by rank descending, then suit descending.
    pub sorted_cards: [Card; 5],
    pub ranks: [Rank; 5],
    pub multiset: RankMultiset,
    pub flush_suit: Option<Suit>,
    /// Top card of the straight; `Five` for the wheel.
    pub straight_top: Option<Rank>,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut sorted_cards = *cards;
        sorted_cards.sort_by(|a, b| b.cmp(a));
        let ranks = sorted_cards.map(Card::rank);

        let first_suit = sorted_cards[0].suit();
        let flush_suit = sorted_cards.iter().all(|c| c.suit() == first_suit).then_some(first_suit);

        Self {
            sorted_cards,
            ranks,
            multiset: RankMultiset::from_ranks(&ranks),
            flush_suit,
            straight_top: straight::top_rank(&ranks),
        }
    }

    pub fn is_flush(&self) -> bool {
        self.flush_suit.is_some()
    }

    pub fn is_straight(&self) -> bool {
        self.straight_top.is_some()
    }

    /// Cards reordered to follow the tiebreak sequence.
    ///
    /// Grouped ranks lead by multiplicity; in a wheel the Ace moves behind the Two.
    pub fn presentation_order(&self) -> [Card; 5] {
        let mut cards = self.sorted_cards;
        if self.straight_top == Some(Rank::Five) {
            cards.rotate_left(1);
            return cards;
        }
        cards.sort_by(|a, b| {
            let ma = self.multiset.multiplicity(a.rank());
            let mb = self.multiset.multiplicity(b.rank());
            mb.cmp(&ma).then(b.cmp(a))
        });
        cards
    }

    /// Build an Evaluation from a category and tiebreak ranks.
    pub fn build_evaluation(&self, category: Category, tiebreak: &[Rank]) -> Evaluation {
        let value = HandValue::from_parts(category, tiebreak);
        Evaluation { category, best_five: self.presentation_order(), value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn analyze(s: &str) -> HandAnalysis {
        let cards: [Card; 5] = parse_cards(s).try_into().expect("five cards");
        HandAnalysis::new(&cards)
    }

    #[test]
    fn royal_flush_analysis() {
        let a = analyze("TsJsQsKsAs");
        assert_eq!(a.flush_suit, Some(Suit::Spades));
        assert_eq!(a.straight_top, Some(Rank::Ace));
        assert_eq!(a.multiset.multiplicities(), vec![1, 1, 1, 1, 1]);
    }

    #[test]
    fn flush_without_straight() {
        let a = analyze("AdJd9d5d2d");
        assert!(a.is_flush());
        assert!(!a.is_straight());
    }

    #[test]
    fn straight_without_flush() {
        let a = analyze("9s8h7d6c5s");
        assert!(a.is_straight());
        assert!(!a.is_flush());
        assert_eq!(a.straight_top, Some(Rank::Nine));
    }

    #[test]
    fn cards_sorted_descending() {
        let a = analyze("3sAh5dKc9s");
        assert_eq!(a.ranks, [Rank::Ace, Rank::King, Rank::Nine, Rank::Five, Rank::Three]);
    }

    #[test]
    fn presentation_groups_before_kickers() {
        let a = analyze("AsKhKd3cKs");
        let order: String = a.presentation_order().iter().map(|c| c.to_string()).collect();
        assert_eq!(order, "KsKhKdAs3c");
    }

    #[test]
    fn presentation_moves_wheel_ace_last() {
        let a = analyze("5s4h3d2cAs");
        let order: String = a.presentation_order().iter().map(|c| c.to_string()).collect();
        assert_eq!(order, "5s4h3d2cAs");
    }
}
