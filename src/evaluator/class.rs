//! Display classes for evaluated hands.

use super::straight;
use crate::cards::{Card, Rank};
use crate::evaluator::Category;
use std::fmt;

/// What a hand is called. Mirrors [`Category`] plus the royal flush, which is only a name:
/// it ranks as the top straight flush and never affects hand values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandClass {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl HandClass {
    /// Classify a resolved category.
    ///
    /// ```
    /// use poker_eval::cards::parse_cards;
    /// use poker_eval::evaluator::{Category, HandClass};
    ///
    /// let royal: [_; 5] = parse_cards("TsJsQsKsAs").try_into().unwrap();
    /// assert_eq!(HandClass::of(Category::StraightFlush, &royal), HandClass::RoyalFlush);
    /// ```
    pub fn of(category: Category, best_five: &[Card; 5]) -> Self {
        match category {
            Category::HighCard => HandClass::HighCard,
            Category::Pair => HandClass::Pair,
            Category::TwoPair => HandClass::TwoPair,
            Category::ThreeOfAKind => HandClass::ThreeOfAKind,
            Category::Straight => HandClass::Straight,
            Category::Flush => HandClass::Flush,
            Category::FullHouse => HandClass::FullHouse,
            Category::FourOfAKind => HandClass::FourOfAKind,
            Category::StraightFlush => {
                if straight::top_rank(&best_five.map(Card::rank)) == Some(Rank::Ace) {
                    HandClass::RoyalFlush
                } else {
                    HandClass::StraightFlush
                }
            }
        }
    }

    pub const fn category(self) -> Category {
        match self {
            HandClass::HighCard => Category::HighCard,
            HandClass::Pair => Category::Pair,
            HandClass::TwoPair => Category::TwoPair,
            HandClass::ThreeOfAKind => Category::ThreeOfAKind,
            HandClass::Straight => Category::Straight,
            HandClass::Flush => Category::Flush,
            HandClass::FullHouse => Category::FullHouse,
            HandClass::FourOfAKind => Category::FourOfAKind,
            HandClass::StraightFlush | HandClass::RoyalFlush => Category::StraightFlush,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            HandClass::HighCard => "high card",
            HandClass::Pair => "pair",
            HandClass::TwoPair => "two pair",
            HandClass::ThreeOfAKind => "three of a kind",
            HandClass::Straight => "straight",
            HandClass::Flush => "flush",
            HandClass::FullHouse => "full house",
            HandClass::FourOfAKind => "four of a kind",
            HandClass::StraightFlush => "straight flush",
            HandClass::RoyalFlush => "royal flush",
        }
    }
}

impl fmt::Display for HandClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::evaluator::evaluate_five;

    fn five(s: &str) -> [Card; 5] {
        parse_cards(s).try_into().expect("five cards")
    }

    #[test]
    fn royal_only_for_ace_high_straight_flush() {
        assert_eq!(evaluate_five(&five("TsJsQsKsAs")).class(), HandClass::RoyalFlush);
        assert_eq!(evaluate_five(&five("4h5h6h7h8h")).class(), HandClass::StraightFlush);
        // steel wheel holds an Ace but tops at Five
        assert_eq!(evaluate_five(&five("Ad2d3d4d5d")).class(), HandClass::StraightFlush);
    }

    #[test]
    fn broadway_offsuit_is_plain_straight() {
        assert_eq!(evaluate_five(&five("TsJhQsKsAs")).class(), HandClass::Straight);
    }

    #[test]
    fn every_class_maps_back_to_its_category() {
        for category in Category::ALL {
            let any = five("2c3d5h7s9c");
            assert_eq!(HandClass::of(category, &any).category(), category);
        }
        assert_eq!(HandClass::RoyalFlush.category(), Category::StraightFlush);
    }

    #[test]
    fn names_are_lower_case() {
        assert_eq!(HandClass::ThreeOfAKind.to_string(), "three of a kind");
        assert_eq!(HandClass::RoyalFlush.name(), "royal flush");
        assert_eq!(HandClass::HighCard.name(), "high card");
    }
}
