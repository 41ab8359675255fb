//! Tests for board error types.

use crate::board::BoardError;

#[test]
fn not_found_error_displays_correctly() {
    let err = BoardError::not_found("label", "urgent");
    assert_eq!(err.to_string(), "label 'urgent' not found");
    assert!(err.is_not_found());
    assert!(err.is_label_missing());
}

#[test]
fn only_label_not_found_counts_as_missing_label() {
    assert!(!BoardError::not_found("card", "c1").is_label_missing());
    assert!(!BoardError::not_found("resource", "/api/boards/b1").is_label_missing());
    let err = BoardError::Api {
        status: 500,
        message: "boom".to_string(),
    };
    assert!(!err.is_label_missing());
}

#[test]
fn api_error_displays_correctly() {
    let err = BoardError::Api {
        status: 422,
        message: "Invalid color".to_string(),
    };
    assert_eq!(err.to_string(), "Planka API error (422): Invalid color");
    assert!(!err.is_not_found());
}

#[test]
fn invalid_response_error_displays_correctly() {
    let err = BoardError::InvalidResponse {
        message: "missing field `item`".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Invalid response from Planka: missing field `item`"
    );
}

#[test]
fn serde_error_converts_to_invalid_response() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: BoardError = json_err.into();
    assert!(matches!(err, BoardError::InvalidResponse { .. }));
}

#[test]
fn empty_palette_is_not_a_not_found() {
    assert!(!BoardError::EmptyPalette.is_not_found());
}
