use crate::cards::{parse_exact, Card};
use crate::evaluator::EvalError;
use std::collections::HashSet;
use std::str::FromStr;

/// Number of community cards every evaluation needs.
pub const BOARD_SIZE: usize = 5;

/// Texas Hold'em hole cards: exactly two private cards.
///
/// ```
/// use poker_eval::cards::{Card, Rank, Suit};
/// use poker_eval::hand::HoleCards;
///
/// let hole = HoleCards::try_new(
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::King, Suit::Spades),
/// ).unwrap();
/// assert_eq!(hole.as_array().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleCards(Card, Card);

impl HoleCards {
    pub const SIZE: usize = 2;

    pub fn try_new(a: Card, b: Card) -> Result<Self, EvalError> {
        if a == b {
            return Err(EvalError::DuplicateCard(a));
        }
        Ok(Self(a, b))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, EvalError> {
        match *slice {
            [a, b] => Self::try_new(a, b),
            _ => Err(EvalError::InvalidHandSize { expected: Self::SIZE, found: slice.len() }),
        }
    }

    pub fn first(&self) -> Card {
        self.0
    }

    pub fn second(&self) -> Card {
        self.1
    }

    pub fn as_array(&self) -> [Card; 2] {
        [self.0, self.1]
    }
}

/// Wire form, e.g. `"AsKd"`; a token count other than two is a [`EvalError::MalformedCard`].
impl FromStr for HoleCards {
    type Err = EvalError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(&parse_exact(s, Self::SIZE)?)
    }
}

/// The five community cards.
///
/// ```
/// use poker_eval::hand::Board;
///
/// let board: Board = "2h3h4h5h6h".parse().unwrap();
/// assert_eq!(board.as_array().len(), 5);
/// assert!("2h3h4h5h".parse::<Board>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board([Card; BOARD_SIZE]);

impl Board {
    pub fn try_new(cards: &[Card]) -> Result<Self, EvalError> {
        let cards: [Card; BOARD_SIZE] = cards.try_into().map_err(|_| {
            EvalError::InvalidBoardSize { expected: BOARD_SIZE, found: cards.len() }
        })?;
        ensure_distinct(&cards)?;
        Ok(Self(cards))
    }

    pub fn as_array(&self) -> [Card; BOARD_SIZE] {
        self.0
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.0
    }
}

impl FromStr for Board {
    type Err = EvalError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_new(&parse_exact(s, BOARD_SIZE)?)
    }
}

/// Fail with the first card that appears twice.
pub fn ensure_distinct<'a, I>(cards: I) -> Result<(), EvalError>
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut seen = HashSet::new();
    for &card in cards {
        if !seen.insert(card) {
            return Err(EvalError::DuplicateCard(card));
        }
    }
    Ok(())
}

/// Validate that hole cards and board share no card.
pub fn validate_deal(hole: &[Card], board: &Board) -> Result<(), EvalError> {
    ensure_distinct(hole.iter().chain(board.as_slice()))
}
