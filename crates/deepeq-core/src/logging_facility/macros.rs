//! Canonical logging macros
//!
//! Field keys follow `deepeq_core_types::schema`. Callers need `tracing` in
//! scope as a dependency.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use deepeq_core::log_op_start;
/// log_op_start!("assert_objects_equal");
/// log_op_start!("assert_objects_equal", expected_type = "i32");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use deepeq_core::log_op_end;
/// log_op_end!("assert_objects_equal", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an assertion failure as the end of an operation
///
/// # Example
///
/// ```
/// # use deepeq_core::log_op_error;
/// use deepeq_core::errors::{AssertionFailure, FailureKind};
///
/// let failure = AssertionFailure::new(FailureKind::NotEqual);
/// log_op_error!("assert_objects_equal", failure, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $failure:expr, duration_ms = $duration:expr) => {{
        let failure: &$crate::errors::AssertionFailure = &$failure;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?failure.kind(),
            err.code = failure.code(),
        );
    }};
    ($op:expr, $failure:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let failure: &$crate::errors::AssertionFailure = &$failure;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?failure.kind(),
            err.code = failure.code(),
            $($field)*
        );
    }};
}
