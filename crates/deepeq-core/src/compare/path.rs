//! Comparison paths
//!
//! A path addresses a sub-value relative to the compared root: `.name` for a
//! record field, `[i]` for an element position. The root is the empty path
//! and renders as the empty string.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One step from a value to one of its parts
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, ".{}", name),
            PathSegment::Index(index) => write!(f, "[{}]", index),
        }
    }
}

/// Address of a sub-value, e.g. `.object[0].int_value`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComparisonPath {
    segments: Vec<PathSegment>,
}

impl ComparisonPath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Extend with a field segment
    pub fn field(&self, name: &str) -> Self {
        self.push(PathSegment::Field(name.to_string()))
    }

    /// Extend with an element position
    pub fn index(&self, index: usize) -> Self {
        self.push(PathSegment::Index(index))
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments below the root
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    fn push(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);
        Self { segments }
    }
}

impl fmt::Display for ComparisonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}
