#![allow(clippy::unwrap_used, clippy::expect_used)]

use deepeq_core::assert::OP_ASSERT_OBJECTS_EQUAL;
use deepeq_core::errors::{AssertionFailure, FailureKind};
use deepeq_core::logging_facility::test_capture::init_test_capture;
use deepeq_core::{assert_objects_equal, deep_eq_record, deep_equals};
use deepeq_core::{log_op_end, log_op_error, log_op_start};
use deepeq_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_MISMATCH, EVENT_START, FIELD_DURATION_MS,
    FIELD_ERR_CODE, FIELD_ERR_KIND, FIELD_EXPECTED_TYPE, FIELD_MISMATCH_COUNT,
    FIELD_MISMATCH_KIND, FIELD_PATH,
};
use tracing::Level;

// Each test compares its own record type so events can be told apart while
// tests run in parallel against the shared capture.

struct StartEndProbe {
    value: i32,
}
deep_eq_record!(StartEndProbe { value: i32 });

struct FailureProbe {
    left_only_field: Option<String>,
    counter: u8,
}
deep_eq_record!(FailureProbe {
    left_only_field: Option<String>,
    counter: u8,
});

struct SilentProbe {
    silent_probe_values: Vec<u16>,
}
deep_eq_record!(SilentProbe {
    silent_probe_values: Vec<u16>,
});

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    let start_events = capture.find(|e| {
        e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_START)
    });
    assert!(
        !start_events.is_empty(),
        "Should have captured at least one start event"
    );
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events =
        capture.find(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END));
    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_log_op_error_includes_kind_and_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let failure = AssertionFailure::new(FailureKind::TypeMismatch);
    log_op_error!(op_name, failure, duration_ms = 10);

    let error_events = capture.find(|e| {
        e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END_ERROR)
    });
    assert_eq!(error_events.len(), 1, "Should have exactly one error event");

    let error_event = &error_events[0];
    assert_eq!(error_event.level, Level::ERROR);
    assert_eq!(error_event.field(FIELD_ERR_CODE), Some("ERR_TYPE_MISMATCH"));
    assert_eq!(error_event.field(FIELD_ERR_KIND), Some("TypeMismatch"));
}

#[test]
fn test_log_macros_with_multiple_fields() {
    let capture = init_test_capture();
    let op_name = "test_log_macros_fields_unique_4";

    log_op_start!(op_name, expected_type = "i32", note = "Test");

    let start_event = capture
        .find(|e| e.op.as_deref() == Some(op_name))
        .into_iter()
        .next()
        .expect("Should have start event");
    assert_eq!(start_event.field(FIELD_EXPECTED_TYPE), Some("i32"));
    assert_eq!(start_event.field("note"), Some("Test"));
}

#[test]
#[should_panic(expected = "Expected event")]
fn test_capture_assert_event_exists_fails() {
    let capture = init_test_capture();

    // This should panic because no such event exists
    capture.assert_event_exists("nonexistent_op_truly_unique_999", EVENT_START);
}

#[test]
fn test_successful_assertion_logs_start_and_end() {
    let capture = init_test_capture();

    assert_objects_equal(&StartEndProbe { value: 1 }, &StartEndProbe { value: 1 }).unwrap();

    let probe_type = std::any::type_name::<StartEndProbe>();
    let starts = capture.count_events(|e| {
        e.op.as_deref() == Some(OP_ASSERT_OBJECTS_EQUAL)
            && e.event.as_deref() == Some(EVENT_START)
            && e.field(FIELD_EXPECTED_TYPE) == Some(probe_type)
    });
    assert_eq!(starts, 1, "Should have exactly one start event");
    capture.assert_event_exists(OP_ASSERT_OBJECTS_EQUAL, EVENT_END);
}

#[test]
fn test_failed_assertion_logs_mismatches_and_error() {
    let capture = init_test_capture();

    let failure = assert_objects_equal(
        &FailureProbe {
            left_only_field: Some("x".into()),
            counter: 1,
        },
        &FailureProbe {
            left_only_field: None,
            counter: 2,
        },
    )
    .unwrap_err();
    assert_eq!(failure.mismatches().len(), 2);

    let mismatch_events = capture.find(|e| {
        e.event.as_deref() == Some(EVENT_MISMATCH)
            && e.field(FIELD_PATH) == Some(".left_only_field")
    });
    assert_eq!(mismatch_events.len(), 1);
    assert_eq!(mismatch_events[0].level, Level::DEBUG);
    assert_eq!(
        mismatch_events[0].field(FIELD_MISMATCH_KIND),
        Some("expected_not_null")
    );

    let error_events = capture.find(|e| {
        e.op.as_deref() == Some(OP_ASSERT_OBJECTS_EQUAL)
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.field(FIELD_MISMATCH_COUNT) == Some("2")
    });
    assert!(!error_events.is_empty());
    assert_eq!(error_events[0].field(FIELD_ERR_CODE), Some("ERR_NOT_EQUAL"));
    assert!(error_events[0].field(FIELD_DURATION_MS).is_some());
}

#[test]
fn test_deep_equals_does_not_log() {
    let capture = init_test_capture();

    let expected = SilentProbe {
        silent_probe_values: vec![1],
    };
    let actual = SilentProbe {
        silent_probe_values: vec![2],
    };
    assert!(!deep_equals(&expected, &actual));

    let probe_type = std::any::type_name::<SilentProbe>();
    let events = capture.count_events(|e| {
        e.field(FIELD_EXPECTED_TYPE) == Some(probe_type)
            || e.field(FIELD_PATH) == Some(".silent_probe_values[0]")
    });
    assert_eq!(events, 0);
}
