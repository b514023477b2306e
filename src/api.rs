//! Boundary types for an HTTP front end.
//!
//! `GET /evaluate/{texas,omaha}?hand=..&board=..` answers `{"handRank": "<name>"}` on
//! success, 400 for bad input and 500 when evaluation itself breaks. The web framework only
//! has to deserialize the query into [`EvaluateQuery`] and write out an [`ApiResponse`].

use crate::evaluator::EvalError;
use crate::hand::BOARD_SIZE;
use crate::variants::{evaluate, Variant};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Query string of an evaluate request. Both parameters are required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluateQuery {
    pub hand: Option<String>,
    pub board: Option<String>,
}

/// Successful evaluate response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandRankResponse {
    #[serde(rename = "handRank")]
    pub hand_rank: String,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ApiError {
    #[error("hand and board are required")]
    MissingParams,
    #[error("hand must be {expected} characters, got {found}")]
    InvalidHandLength { expected: usize, found: usize },
    #[error("board must be {expected} characters, got {found}")]
    InvalidBoardLength { expected: usize, found: usize },
    #[error(transparent)]
    Evaluation(#[from] EvalError),
    #[error("response encoding failed: {0}")]
    Encode(String),
}

impl ApiError {
    /// HTTP status for this error: input problems are the client's, a ranker contract
    /// failure is ours.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Evaluation(EvalError::InvalidCardCount(_)) | ApiError::Encode(_) => 500,
            _ => 400,
        }
    }
}

/// Status code plus body, ready to be written by any HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl EvaluateQuery {
    pub fn new(hand: impl Into<String>, board: impl Into<String>) -> Self {
        Self { hand: Some(hand.into()), board: Some(board.into()) }
    }

    /// Check presence and lengths, in that order, and hand back the raw strings.
    pub fn validate(&self, variant: Variant) -> Result<(&str, &str), ApiError> {
        let (Some(hand), Some(board)) = (self.hand.as_deref(), self.board.as_deref()) else {
            return Err(ApiError::MissingParams);
        };
        if hand.is_empty() || board.is_empty() {
            return Err(ApiError::MissingParams);
        }
        let expected = 2 * variant.hole_count();
        let found = hand.chars().count();
        if found != expected {
            return Err(ApiError::InvalidHandLength { expected, found });
        }
        let expected = 2 * BOARD_SIZE;
        let found = board.chars().count();
        if found != expected {
            return Err(ApiError::InvalidBoardLength { expected, found });
        }
        Ok((hand, board))
    }
}

/// Validate and evaluate one request.
///
/// ```
/// use poker_eval::api::{handle, EvaluateQuery};
/// use poker_eval::variants::Variant;
///
/// let resp = handle(Variant::Texas, &EvaluateQuery::new("2h2d", "2s2c3h4h5h")).unwrap();
/// assert_eq!(resp.hand_rank, "four of a kind");
/// ```
pub fn handle(variant: Variant, query: &EvaluateQuery) -> Result<HandRankResponse, ApiError> {
    let (hand, board) = query.validate(variant)?;
    let eval = evaluate(variant, hand, board)?;
    debug!("{variant} {hand} {board} -> {}", eval.name());
    Ok(HandRankResponse { hand_rank: eval.name().to_string() })
}

/// Plain-text error body, the same for every input problem of a variant.
pub fn error_body(variant: Variant) -> &'static str {
    match variant {
        Variant::Texas => "Invalid Texas input",
        Variant::Omaha => "Invalid Omaha input",
    }
}

/// Run [`handle`] and render the outcome as status + body.
pub fn respond(variant: Variant, query: &EvaluateQuery) -> ApiResponse {
    let result = handle(variant, query).and_then(|resp| {
        serde_json::to_string(&resp).map_err(|e| ApiError::Encode(e.to_string()))
    });
    match result {
        Ok(body) => ApiResponse { status: 200, content_type: "application/json", body },
        Err(err) => {
            warn!("{variant} request rejected: {err}");
            ApiResponse {
                status: err.status(),
                content_type: "text/plain",
                body: error_body(variant).to_string(),
            }
        }
    }
}
