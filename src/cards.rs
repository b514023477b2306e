//! Cards and the two-character wire format.
//!
//! A card on the wire is a rank character from `23456789TJQKA` followed by a suit character
//! from `shdc`, e.g. `"As"` or `"Td"`. Both alphabets are case-sensitive.

use crate::evaluator::EvalError;
use std::fmt;
use std::str::FromStr;

/// Card ranks from Two (low) to Ace (high).
///
/// The Ace also plays low in the wheel straight (A-2-3-4-5); that is handled by the
/// straight detector, the rank itself always compares high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Wire characters, indexed like [`Rank::ALL`].
    const WIRE: [char; 13] = ['2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A'];

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Rank::value`]; `None` outside `2..=14`.
    pub const fn from_value(v: u8) -> Option<Rank> {
        if v < 2 || v > 14 {
            return None;
        }
        Some(Rank::ALL[(v - 2) as usize])
    }

    pub const fn to_char(self) -> char {
        Self::WIRE[(self as u8 - 2) as usize]
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(char),
}

impl TryFrom<char> for Rank {
    type Error = RankParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::WIRE
            .iter()
            .position(|&w| w == c)
            .map(|i| Self::ALL[i])
            .ok_or(RankParseError::Invalid(c))
    }
}

/// Four suits. Suits never break ties; the order C < D < H < S only makes sorting stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    const WIRE: [char; 4] = ['c', 'd', 'h', 's'];

    pub const fn to_char(self) -> char {
        Self::WIRE[self as usize]
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(char),
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::WIRE
            .iter()
            .position(|&w| w == c)
            .map(|i| Self::ALL[i])
            .ok_or(SuitParseError::Invalid(c))
    }
}

/// A playing card: rank + suit.
///
/// ```
/// use poker_eval::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Ace, Suit::Spades);
/// assert_eq!(card.to_string(), "As");
/// assert_eq!("As".parse::<Card>().unwrap(), card);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }
    pub const fn suit(self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("a card is two characters, got '{0}'")]
    Length(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

/// Exactly one wire token, surrounding whitespace allowed.
impl FromStr for Card {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(su), None) => Ok(Card::new(Rank::try_from(r)?, Suit::try_from(su)?)),
            _ => Err(CardParseError::Length(s.to_string())),
        }
    }
}

/// Extract every `<rank><suit>` token from `input`, left to right.
///
/// Tokens do not overlap and anything that is not part of a token is skipped, so this
/// never fails; callers that need a fixed number of cards use [`parse_exact`].
///
/// ```
/// use poker_eval::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("AsKd xx 9c");
/// assert_eq!(cards.len(), 3);
/// assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spades));
/// assert_eq!(cards[2], Card::new(Rank::Nine, Suit::Clubs));
/// ```
pub fn parse_cards(input: &str) -> Vec<Card> {
    let mut cards = Vec::with_capacity(input.len() / 2);
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        let Ok(rank) = Rank::try_from(c) else {
            continue;
        };
        if let Some(suit) = chars.peek().and_then(|&s| Suit::try_from(s).ok()) {
            chars.next();
            cards.push(Card::new(rank, suit));
        }
    }
    cards
}

/// Parse `input` and require exactly `count` cards.
///
/// ```
/// use poker_eval::cards::parse_exact;
/// use poker_eval::evaluator::EvalError;
///
/// assert_eq!(parse_exact("2h3h4h5h6h", 5).unwrap().len(), 5);
/// assert!(matches!(
///     parse_exact("2h3h4h5hZZ", 5),
///     Err(EvalError::MalformedCard { expected: 5, found: 4 })
/// ));
/// ```
pub fn parse_exact(input: &str, count: usize) -> Result<Vec<Card>, EvalError> {
    let cards = parse_cards(input);
    if cards.len() != count {
        return Err(EvalError::MalformedCard { expected: count, found: cards.len() });
    }
    Ok(cards)
}

/// Render cards in wire format, e.g. `"AsKd"`.
pub fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(Card::to_string).collect()
}
