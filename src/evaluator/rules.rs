use super::analysis::HandAnalysis;
use super::multiset::Pattern;
use crate::cards::Rank;
use crate::evaluator::Category;

/// Strategy pattern: one rule per category.
///
/// Rules are mutually exclusive for five distinct cards, so exactly one applies to any
/// legal hand. They are still consulted strongest first.
pub trait CategoryRule {
    fn category(&self) -> Category;
    fn applies(&self, analysis: &HandAnalysis) -> bool;

    /// Ranks compared after the category, most significant first.
    fn tiebreak(&self, analysis: &HandAnalysis) -> Vec<Rank> {
        analysis.multiset.tiebreak()
    }
}

/// Five consecutive ranks, all same suit
pub struct StraightFlushRule;

impl CategoryRule for StraightFlushRule {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn applies(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_flush() && analysis.is_straight()
    }

    fn tiebreak(&self, analysis: &HandAnalysis) -> Vec<Rank> {
        analysis.straight_top.into_iter().collect()
    }
}

pub struct FourOfAKindRule;

impl CategoryRule for FourOfAKindRule {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn applies(&self, analysis: &HandAnalysis) -> bool {
        analysis.multiset.pattern() == Pattern::Quads
    }
}

pub struct FullHouseRule;

impl CategoryRule for FullHouseRule {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn applies(&self, analysis: &HandAnalysis) -> bool {
        analysis.multiset.pattern() == Pattern::FullHouse
    }
}

pub struct FlushRule;

impl CategoryRule for FlushRule {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn applies(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_flush()
            && !analysis.is_straight()
            && analysis.multiset.pattern() == Pattern::Distinct
    }

    // All five ranks; the multiset tiebreak is the same thing for distinct ranks
    fn tiebreak(&self, analysis: &HandAnalysis) -> Vec<Rank> {
        analysis.ranks.to_vec()
    }
}

pub struct StraightRule;

impl CategoryRule for StraightRule {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn applies(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_straight() && !analysis.is_flush()
    }

    fn tiebreak(&self, analysis: &HandAnalysis) -> Vec<Rank> {
        analysis.straight_top.into_iter().collect()
    }
}

pub struct ThreeOfAKindRule;

impl CategoryRule for ThreeOfAKindRule {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }

    fn applies(&self, analysis: &HandAnalysis) -> bool {
        analysis.multiset.pattern() == Pattern::Trips
    }
}

pub struct TwoPairRule;

impl CategoryRule for TwoPairRule {
    fn category(&self) -> Category {
        Category::TwoPair
    }

    fn applies(&self, analysis: &HandAnalysis) -> bool {
        analysis.multiset.pattern() == Pattern::TwoPair
    }
}

pub struct PairRule;

impl CategoryRule for PairRule {
    fn category(&self) -> Category {
        Category::Pair
    }

    fn applies(&self, analysis: &HandAnalysis) -> bool {
        analysis.multiset.pattern() == Pattern::OnePair
    }
}

pub struct HighCardRule;

impl CategoryRule for HighCardRule {
    fn category(&self) -> Category {
        Category::HighCard
    }

    fn applies(&self, analysis: &HandAnalysis) -> bool {
        analysis.multiset.pattern() == Pattern::Distinct
            && !analysis.is_flush()
            && !analysis.is_straight()
    }
}

/// Rules in priority order, strongest first.
pub const RULES: [&dyn CategoryRule; 9] = [
    &StraightFlushRule,
    &FourOfAKindRule,
    &FullHouseRule,
    &FlushRule,
    &StraightRule,
    &ThreeOfAKindRule,
    &TwoPairRule,
    &PairRule,
    &HighCardRule,
];

/// First rule that applies. Falls back to high card so malformed input never panics.
pub fn matching_rule(analysis: &HandAnalysis) -> &'static dyn CategoryRule {
    RULES.iter().copied().find(|rule| rule.applies(analysis)).unwrap_or(&HighCardRule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Card};

    fn analyze(s: &str) -> HandAnalysis {
        let cards: [Card; 5] = parse_cards(s).try_into().expect("five cards");
        HandAnalysis::new(&cards)
    }

    fn applicable(analysis: &HandAnalysis) -> Vec<Category> {
        RULES.iter().filter(|r| r.applies(analysis)).map(|r| r.category()).collect()
    }

    #[test]
    fn exactly_one_rule_per_category_example() {
        let cases = [
            ("9h8h7h6h5h", Category::StraightFlush),
            ("AsAhAdAcKs", Category::FourOfAKind),
            ("KsKhKdQcQs", Category::FullHouse),
            ("AdJd9d5d2d", Category::Flush),
            ("9s8h7d6c5s", Category::Straight),
            ("JsJhJd9c7s", Category::ThreeOfAKind),
            ("AsAhKdKcQs", Category::TwoPair),
            ("JsJh9d7c3s", Category::Pair),
            ("AsKhJd9c7s", Category::HighCard),
        ];
        for (hand, category) in cases {
            assert_eq!(applicable(&analyze(hand)), vec![category], "{hand}");
        }
    }

    #[test]
    fn straight_flush_uses_top_card_only() {
        let a = analyze("9h8h7h6h5h");
        assert_eq!(StraightFlushRule.tiebreak(&a), vec![Rank::Nine]);
    }

    #[test]
    fn wheel_tiebreak_is_five() {
        let a = analyze("As2h3d4c5s");
        assert_eq!(StraightRule.tiebreak(&a), vec![Rank::Five]);
    }

    #[test]
    fn repeated_cards_still_match_a_rule() {
        // five identical cards: invalid input, but ranking must not panic
        let a = analyze("AsAsAsAsAs");
        assert_eq!(matching_rule(&a).category(), Category::FourOfAKind);
        let a = analyze("AsAsKsQsJs");
        assert_eq!(matching_rule(&a).category(), Category::Pair);
    }
}
