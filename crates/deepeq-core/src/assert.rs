//! Assertion entry points
//!
//! ## Logging Ownership
//!
//! `Comparator::assert_equal` owns lifecycle logging for an assertion:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure, preceded by one `debug` event per mismatch
//!
//! The comparison engine itself does not log, so scratch comparisons made
//! while matching unordered collections stay silent.

use crate::compare::{compare_values, ComparisonPath, Mismatch, MismatchKind, Report};
use crate::config::CompareConfig;
use crate::core_types::schema;
use crate::errors::{AssertionFailure, ConfigError, FailureKind, Result};
use crate::value::DeepEq;
use crate::{log_op_end, log_op_error, log_op_start};
use std::time::Instant;

/// Operation name used in log events
pub const OP_ASSERT_OBJECTS_EQUAL: &str = "assert_objects_equal";

const TOP_EXPECTED_NULL: &str = "Expected element was null but actual element was not null.";
const TOP_EXPECTED_NOT_NULL: &str = "Expected element was not null but actual element was null.";

/// Deep-equality checker carrying its configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct Comparator {
    config: CompareConfig,
}

impl Comparator {
    pub fn new(config: CompareConfig) -> Self {
        Self { config }
    }

    /// Build a comparator from `DEEPEQ_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a variable is set to a malformed value.
    pub fn from_env() -> std::result::Result<Self, ConfigError> {
        CompareConfig::from_env().map(Self::new)
    }

    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// Compare two values and return every mismatch found
    pub fn compare(&self, expected: &dyn DeepEq, actual: &dyn DeepEq) -> Report {
        compare_values(expected, actual, self.config.max_depth)
    }

    /// Returns true if the values are deeply equal under this configuration
    pub fn deep_equals(&self, expected: &dyn DeepEq, actual: &dyn DeepEq) -> bool {
        self.compare(expected, actual).is_empty()
    }

    /// Assert that two values are deeply equal
    ///
    /// Absent or differently typed roots fail immediately with a single
    /// top-level message. Otherwise every mismatch is collected and the
    /// failure message lists them one per line.
    ///
    /// # Errors
    ///
    /// - `NullMismatch` if exactly one root is absent
    /// - `TypeMismatch` if the roots have different runtime types
    /// - `NotEqual` if structural comparison found mismatches
    pub fn assert_equal(&self, expected: &dyn DeepEq, actual: &dyn DeepEq) -> Result<()> {
        log_op_start!(
            OP_ASSERT_OBJECTS_EQUAL,
            expected_type = expected.runtime_type_name(),
            actual_type = actual.runtime_type_name()
        );
        let start = Instant::now();

        self.check(expected, actual).map_err(|failure| {
            for mismatch in failure.mismatches() {
                tracing::debug!(
                    component = module_path!(),
                    op = OP_ASSERT_OBJECTS_EQUAL,
                    event = schema::EVENT_MISMATCH,
                    path = %mismatch.path,
                    mismatch_kind = mismatch.kind.name(),
                );
            }
            log_op_error!(
                OP_ASSERT_OBJECTS_EQUAL,
                failure,
                duration_ms = start.elapsed().as_millis() as u64,
                mismatch_count = failure.mismatches().len()
            );
            failure
        })?;

        log_op_end!(
            OP_ASSERT_OBJECTS_EQUAL,
            duration_ms = start.elapsed().as_millis() as u64
        );
        Ok(())
    }

    fn check(&self, expected: &dyn DeepEq, actual: &dyn DeepEq) -> Result<()> {
        let expected_absent = expected.shape().is_absent();
        let actual_absent = actual.shape().is_absent();

        match (expected_absent, actual_absent) {
            (true, true) => return Ok(()),
            (true, false) => {
                return Err(top_level_failure(
                    FailureKind::NullMismatch,
                    TOP_EXPECTED_NULL.to_string(),
                    MismatchKind::ExpectedNull,
                ))
            }
            (false, true) => {
                return Err(top_level_failure(
                    FailureKind::NullMismatch,
                    TOP_EXPECTED_NOT_NULL.to_string(),
                    MismatchKind::ExpectedNotNull,
                ))
            }
            (false, false) => {}
        }

        if expected.runtime_type_id() != actual.runtime_type_id() {
            let expected_type = expected.runtime_type_name();
            let actual_type = actual.runtime_type_name();
            return Err(top_level_failure(
                FailureKind::TypeMismatch,
                format!(
                    "Expected element to be of type '{}' but was of type '{}'.",
                    expected_type, actual_type
                ),
                MismatchKind::TypeMismatch {
                    expected: expected_type.to_string(),
                    actual: actual_type.to_string(),
                },
            ));
        }

        let report = self.compare(expected, actual);
        if report.is_empty() {
            return Ok(());
        }

        let message = report.render(self.config.line_separator);
        Err(AssertionFailure::new(FailureKind::NotEqual)
            .with_op(OP_ASSERT_OBJECTS_EQUAL)
            .with_message(message)
            .with_mismatches(report.into_mismatches()))
    }
}

fn top_level_failure(
    kind: FailureKind,
    message: String,
    mismatch: MismatchKind,
) -> AssertionFailure {
    AssertionFailure::new(kind)
        .with_op(OP_ASSERT_OBJECTS_EQUAL)
        .with_message(message)
        .with_mismatches(vec![Mismatch::new(ComparisonPath::root(), mismatch)])
}

/// Assert that two values are deeply equal using the default configuration
///
/// Always uses [`CompareConfig::default`]: `\n` separators and no depth
/// limit. `DEEPEQ_*` environment variables are not read; use
/// [`Comparator::from_env`] for that.
///
/// # Errors
///
/// Returns an [`AssertionFailure`] describing every difference; see
/// [`Comparator::assert_equal`].
///
/// # Example
///
/// ```
/// use deepeq_core::assert_objects_equal;
///
/// assert!(assert_objects_equal(&vec![1, 2], &vec![1, 2]).is_ok());
///
/// let failure = assert_objects_equal(&vec![1, 2, 3], &vec![1, 2, 4]).unwrap_err();
/// assert_eq!(failure.to_string(), "Expected '[2]' to be '3' but was '4'.");
/// ```
pub fn assert_objects_equal(expected: &dyn DeepEq, actual: &dyn DeepEq) -> Result<()> {
    Comparator::default().assert_equal(expected, actual)
}

/// Assert deep equality, panicking with the failure message on mismatch
///
/// Arguments are taken by place and borrowed.
///
/// # Example
///
/// ```should_panic
/// use deepeq_core::assert_objects_equal;
///
/// let expected = vec!['a', 'b'];
/// let actual = vec!['a', 'c'];
/// assert_objects_equal!(expected, actual);
/// ```
#[macro_export]
macro_rules! assert_objects_equal {
    ($expected:expr, $actual:expr $(,)?) => {
        if let ::std::result::Result::Err(failure) =
            $crate::assert_objects_equal(&$expected, &$actual)
        {
            ::std::panic!("{}", failure);
        }
    };
}
