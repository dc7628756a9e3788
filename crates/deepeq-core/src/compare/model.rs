//! Mismatch records and comparison reports
//!
//! All types serialize with `serde` so a report can be emitted as JSON next
//! to the human-readable message.

use super::path::ComparisonPath;
use deepeq_core_types::LineSeparator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What differed at a path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MismatchKind {
    /// Expected side absent, actual side present
    ExpectedNull,
    /// Expected side present, actual side absent
    ExpectedNotNull,
    /// Runtime types differ
    TypeMismatch { expected: String, actual: String },
    /// Fixed-size array lengths differ
    LengthMismatch { expected: usize, actual: usize },
    /// Collection sizes differ
    SizeMismatch { expected: usize, actual: usize },
    /// Leaf values differ
    ValueMismatch { expected: String, actual: String },
    /// Unordered collections of equal size hold different items
    ItemsDiffer { count: usize, items: Vec<String> },
    /// Nesting went past the configured depth limit
    DepthExceeded { limit: usize },
}

impl MismatchKind {
    /// Stable snake_case name, used as a log field value
    pub fn name(&self) -> &'static str {
        match self {
            MismatchKind::ExpectedNull => "expected_null",
            MismatchKind::ExpectedNotNull => "expected_not_null",
            MismatchKind::TypeMismatch { .. } => "type_mismatch",
            MismatchKind::LengthMismatch { .. } => "length_mismatch",
            MismatchKind::SizeMismatch { .. } => "size_mismatch",
            MismatchKind::ValueMismatch { .. } => "value_mismatch",
            MismatchKind::ItemsDiffer { .. } => "items_differ",
            MismatchKind::DepthExceeded { .. } => "depth_exceeded",
        }
    }

    pub fn is_null_mismatch(&self) -> bool {
        matches!(
            self,
            MismatchKind::ExpectedNull | MismatchKind::ExpectedNotNull
        )
    }
}

/// One discrepancy at one path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    pub path: ComparisonPath,
    pub kind: MismatchKind,
}

impl Mismatch {
    pub fn new(path: ComparisonPath, kind: MismatchKind) -> Self {
        Self { path, kind }
    }

    /// The record rendered as one message line
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = &self.path;
        match &self.kind {
            MismatchKind::ExpectedNull => {
                write!(f, "Expected '{}' to be null but was not null.", path)
            }
            MismatchKind::ExpectedNotNull => {
                write!(f, "Expected '{}' to be not null but was null.", path)
            }
            MismatchKind::TypeMismatch { expected, actual } => write!(
                f,
                "Expected '{}' to be of type '{}' but was of type '{}'.",
                path, expected, actual
            ),
            MismatchKind::LengthMismatch { expected, actual } => write!(
                f,
                "Expected '{}' to be of length {} but was of length {}.",
                path, expected, actual
            ),
            MismatchKind::SizeMismatch { expected, actual } => write!(
                f,
                "Expected '{}' to be of size {} but was of size {}.",
                path, expected, actual
            ),
            MismatchKind::ValueMismatch { expected, actual } => write!(
                f,
                "Expected '{}' to be '{}' but was '{}'.",
                path, expected, actual
            ),
            MismatchKind::ItemsDiffer { count, items } => write!(
                f,
                "Expected '{}' to contain same items, however {} items were different: [{}].",
                path,
                count,
                items.join(", ")
            ),
            MismatchKind::DepthExceeded { limit } => write!(
                f,
                "Expected '{}' to be compared within a depth of {} but nesting went deeper.",
                path, limit
            ),
        }
    }
}

/// Ordered mismatch records from one comparison
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    mismatches: Vec<Mismatch>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record; records are never removed or reordered
    pub fn push(&mut self, mismatch: Mismatch) {
        self.mismatches.push(mismatch);
    }

    pub fn is_empty(&self) -> bool {
        self.mismatches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.mismatches.len()
    }

    /// Records in discovery order
    pub fn mismatches(&self) -> &[Mismatch] {
        &self.mismatches
    }

    pub fn into_mismatches(self) -> Vec<Mismatch> {
        self.mismatches
    }

    /// Render the report as a multi-line message
    pub fn render(&self, separator: LineSeparator) -> String {
        super::render::render_report(self, separator)
    }
}

impl From<Vec<Mismatch>> for Report {
    fn from(mismatches: Vec<Mismatch>) -> Self {
        Self { mismatches }
    }
}
