//! Canonical schema constants for structured logging
//!
//! These constants keep field keys and event names consistent between the
//! logging macros, the test capture layer and the assertions in tests.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Comparison identifiers
pub const FIELD_PATH: &str = "path";
pub const FIELD_MISMATCH_KIND: &str = "mismatch_kind";
pub const FIELD_EXPECTED_TYPE: &str = "expected_type";
pub const FIELD_ACTUAL_TYPE: &str = "actual_type";

// Report sizes
pub const FIELD_MISMATCH_COUNT: &str = "mismatch_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_MISMATCH: &str = "mismatch";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_accessibility() {
        assert!(!FIELD_COMPONENT.is_empty());
        assert!(!FIELD_OP.is_empty());
        assert!(!FIELD_PATH.is_empty());
        assert!(!EVENT_START.is_empty());
        assert!(!EVENT_END.is_empty());
        assert!(!EVENT_END_ERROR.is_empty());
    }

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
        assert_ne!(EVENT_MISMATCH, EVENT_END_ERROR);
    }
}
