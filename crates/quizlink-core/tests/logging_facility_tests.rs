#![allow(clippy::unwrap_used, clippy::expect_used)]

use quizlink_core::errors::QuizError;
use quizlink_core::logging_facility::test_capture::init_test_capture;
use quizlink_core::{log_op_end, log_op_error, log_op_start};
use quizlink_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_ERR_CODE, FIELD_QUIZ_ID,
};

#[test]
fn test_log_op_start_with_fields() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, quiz_id = 3_i64);

    let start_events = capture.matching(op_name, EVENT_START);
    assert_eq!(start_events.len(), 1, "Should have exactly one start event");
    assert_eq!(start_events[0].field(FIELD_QUIZ_ID), Some("3"));
}

#[test]
fn test_log_op_end_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42_u64);

    let end_events = capture.matching(op_name, EVENT_END);
    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field("duration_ms"), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = QuizError::InvalidTableName {
        name: "users".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 0_u64);

    let error_events = capture.matching(op_name, EVENT_END_ERROR);
    assert_eq!(error_events.len(), 1, "Should have exactly one error event");
    assert_eq!(
        error_events[0].field(FIELD_ERR_CODE),
        Some("ERR_INVALID_TABLE_NAME")
    );
}

#[test]
fn test_start_end_pair_carries_component() {
    let capture = init_test_capture();
    let op_name = "test_start_end_pair_unique_4";

    log_op_start!(op_name);
    log_op_end!(op_name, duration_ms = 1_u64);

    let events: Vec<_> = capture
        .events()
        .into_iter()
        .filter(|e| e.op() == Some(op_name))
        .collect();

    assert_eq!(events.len(), 2);
    assert!(events
        .iter()
        .all(|e| e.component() == Some(module_path!())));
}
