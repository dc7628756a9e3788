use crate::compare::Mismatch;
use deepeq_core_types::UnknownSeparator;
use thiserror::Error;

/// Result type alias for assertion outcomes
pub type Result<T> = std::result::Result<T, AssertionFailure>;

// ========== Error Facility ==========

/// Failure kind taxonomy
///
/// Each kind maps to a stable code usable in logs and by callers that need
/// to branch on the class of failure without parsing the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Exactly one of the two compared roots was absent
    NullMismatch,
    /// The compared roots have different runtime types
    TypeMismatch,
    /// Structural comparison found one or more mismatches
    NotEqual,
}

impl FailureKind {
    /// Get the stable code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            FailureKind::NullMismatch => "ERR_NULL_MISMATCH",
            FailureKind::TypeMismatch => "ERR_TYPE_MISMATCH",
            FailureKind::NotEqual => "ERR_NOT_EQUAL",
        }
    }
}

/// Aggregated assertion failure
///
/// Carries the full human-readable message plus the structured mismatch
/// records it was rendered from. `Display` writes the bare message so the
/// text seen by a test runner is exactly the rendered report.
#[derive(Debug, Clone)]
pub struct AssertionFailure {
    kind: FailureKind,
    op: Option<String>,
    message: String,
    mismatches: Vec<Mismatch>,
}

impl AssertionFailure {
    /// Create a new failure with the specified kind
    pub fn new(kind: FailureKind) -> Self {
        Self {
            kind,
            op: None,
            message: String::new(),
            mismatches: Vec::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Set the failure message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach the mismatch records behind the message
    pub fn with_mismatches(mut self, mismatches: Vec<Mismatch>) -> Self {
        self.mismatches = mismatches;
        self
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// Get the stable code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Records in discovery order
    pub fn mismatches(&self) -> &[Mismatch] {
        &self.mismatches
    }
}

impl std::fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for AssertionFailure {}

// ========== End Error Facility ==========

/// Invalid comparison configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}")]
    InvalidSeparator {
        var: String,
        #[source]
        source: UnknownSeparator,
    },

    #[error("invalid {var} '{value}': expected a positive integer")]
    InvalidMaxDepth { var: String, value: String },
}
