#![allow(clippy::unwrap_used, clippy::expect_used)]

use errlens_core::errors::LensError;
use errlens_core::logging_facility::test_capture::init_test_capture;
use errlens_core::schema::{EVENT_END, EVENT_END_ERROR, EVENT_HINT_FALLBACK, EVENT_START, EVENT_UNMATCHED};
use errlens_core::{classify, extract_by_hint, log_op_end, log_op_error, log_op_start};
use serde_json::json;

#[test]
fn test_log_op_start_and_end() {
    let capture = init_test_capture();
    let op_name = "test_log_op_boundaries_unique_1";

    log_op_start!(op_name, hint = "sap");
    log_op_end!(op_name, duration_ms = 42);

    assert_eq!(capture.find(op_name, EVENT_START).len(), 1);
    let ends = capture.find(op_name, EVENT_END);
    assert_eq!(ends.len(), 1, "Should have exactly one end event");
    assert_eq!(ends[0].field("duration_ms"), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_2";

    let err = LensError::UnknownShape {
        id: "mainframe".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let errors = capture.find(op_name, EVENT_END_ERROR);
    assert_eq!(errors.len(), 1, "Should have exactly one error event");
    assert_eq!(errors[0].field("err.code"), Some("ERR_UNKNOWN_SHAPE"));
    assert!(errors[0].field("err.message").unwrap().contains("mainframe"));
}

#[test]
fn test_hint_fallback_is_logged_without_payload() {
    let capture = init_test_capture();
    let payload = json!({"message": "secret-token-abc"});

    let _ = extract_by_hint(&payload, "hint_fallback_unregistered_3");

    let fallbacks: Vec<_> = capture
        .find("extract_by_hint", EVENT_HINT_FALLBACK)
        .into_iter()
        .filter(|e| e.field("hint") == Some("hint_fallback_unregistered_3"))
        .collect();
    assert_eq!(fallbacks.len(), 1);
    assert_eq!(fallbacks[0].field("registered"), Some("false"));
    assert_eq!(fallbacks[0].field("value_kind"), Some("object"));
    assert!(fallbacks[0].fields.values().all(|v| !v.contains("secret-token-abc")));
}

#[test]
fn test_unmatched_input_is_logged() {
    let capture = init_test_capture();

    let result = classify(&json!(12345));
    assert!(result.is_unknown());

    let unmatched = capture.count_events(|e| {
        e.op.as_deref() == Some("classify")
            && e.event.as_deref() == Some(EVENT_UNMATCHED)
            && e.field("value_kind") == Some("number")
    });
    assert!(unmatched >= 1);
}

#[test]
fn test_outranked_hint_is_logged_as_registered_fallback() {
    let capture = init_test_capture();
    let payload = json!({
        "errorMessage": {"error": {
            "errorDescription": "Invalid customer ID",
            "errorType": "VALIDATION_ERROR"
        }}
    });

    let info = extract_by_hint(&payload, "gateway");
    assert_eq!(info.message, "Invalid customer ID");

    let fallbacks = capture.count_events(|e| {
        e.op.as_deref() == Some("extract_by_hint")
            && e.event.as_deref() == Some(EVENT_HINT_FALLBACK)
            && e.field("hint") == Some("gateway")
            && e.field("registered") == Some("true")
    });
    assert!(fallbacks >= 1);
}
