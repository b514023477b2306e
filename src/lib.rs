//! poker-eval: Texas Hold'em and Omaha hand evaluation
//!
//! Goals:
//! - Deterministic evaluation with one comparable strength value per hand
//! - Small, well-documented public API
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: evaluate a Hold'em hand
//! ```
//! use poker_eval::evaluator::Category;
//! use poker_eval::variants::{evaluate, Variant};
//!
//! let eval = evaluate(Variant::Texas, "AsAh", "KcQdJh3s2c").unwrap();
//! assert_eq!(eval.category, Category::Pair);
//! assert_eq!(eval.name(), "pair");
//! ```
//!
//! ## Typed API
//! ```
//! use poker_eval::cards::{Card, Rank, Suit};
//! use poker_eval::hand::{Board, HoleCards};
//! use poker_eval::variants::texas::evaluate_texas;
//!
//! let hole = HoleCards::try_new(
//!     Card::new(Rank::Two, Suit::Hearts),
//!     Card::new(Rank::Two, Suit::Diamonds),
//! ).unwrap();
//! let board: Board = "2s2c3h4h5h".parse().unwrap();
//! assert_eq!(evaluate_texas(&hole, &board).unwrap().name(), "four of a kind");
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run --bin poker-eval -- texas AsKd QhJhTh9h8h
//! ```

#[cfg(feature = "serde")]
pub mod api;
pub mod cards;
pub mod evaluator;
pub mod hand;
pub mod variants;

pub use evaluator::{rank, Category, EvalError, Evaluation, HandClass, HandValue};
pub use variants::{evaluate, Variant};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
