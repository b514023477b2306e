#![cfg(feature = "serde")]

use poker_eval::api::{error_body, handle, respond, ApiError, EvaluateQuery, HandRankResponse};
use poker_eval::evaluator::EvalError;
use poker_eval::variants::Variant;

fn query(hand: &str, board: &str) -> EvaluateQuery {
    EvaluateQuery::new(hand, board)
}

#[test]
fn texas_quads_response() {
    let resp = respond(Variant::Texas, &query("2h2d", "2s2c3h4h5h"));
    assert_eq!(resp.status, 200);
    assert_eq!(resp.content_type, "application/json");
    let body: HandRankResponse = serde_json::from_str(&resp.body).unwrap();
    assert_eq!(body.hand_rank, "four of a kind");
}

#[test]
fn omaha_response() {
    let resp = handle(Variant::Omaha, &query("AhKhQhJh", "2h7c8d9sTc")).unwrap();
    assert_eq!(resp.hand_rank, "straight");
}

#[test]
fn every_input_problem_is_a_400_with_the_variant_body() {
    let bad = [
        EvaluateQuery { hand: None, board: Some("2s2c3h4h5h".into()) },
        query("2h2d", ""),
        query("2h2d2c", "2s3c3h4h5h"),
        query("2h2d", "2s2c3h4h"),
        query("2h2d", "2s2c3h4h5x"),
        query("2h2h", "2s2c3h4h5h"),
    ];
    for q in &bad {
        let resp = respond(Variant::Texas, q);
        assert_eq!(resp.status, 400, "{q:?}");
        assert_eq!(resp.content_type, "text/plain");
        assert_eq!(resp.body, error_body(Variant::Texas));
    }
}

#[test]
fn error_mapping() {
    assert_eq!(
        handle(Variant::Omaha, &query("AhKh", "2h7c8d9sTc")),
        Err(ApiError::InvalidHandLength { expected: 8, found: 4 })
    );
    assert_eq!(
        handle(Variant::Texas, &query("AhKh", "2h7c8d9sT")),
        Err(ApiError::InvalidBoardLength { expected: 10, found: 9 })
    );
    assert_eq!(ApiError::MissingParams.status(), 400);
    assert_eq!(ApiError::from(EvalError::InvalidCardCount(6)).status(), 500);
    assert_eq!(error_body(Variant::Omaha), "Invalid Omaha input");
}

#[test]
fn query_from_json() {
    let q: EvaluateQuery =
        serde_json::from_str(r#"{"hand":"AsKd","board":"QhJhTh9h8h"}"#).unwrap();
    assert_eq!(handle(Variant::Texas, &q).unwrap().hand_rank, "straight flush");
}
