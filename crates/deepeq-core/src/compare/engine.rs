//! Structural comparison engine
//!
//! The core entry point is [`compare_values`], which walks two values
//! depth-first and returns a [`Report`] with every mismatch found, in
//! discovery order. The walk never stops at the first mismatch.
//!
//! ## Policies
//!
//! - **Null**: exactly one side absent records a null mismatch and stops that
//!   branch. Both sides absent is equal.
//! - **Type**: runtime types must be identical; otherwise one type mismatch
//!   is recorded and the branch stops.
//! - **Leaf**: exact equality via [`Leaf::leaf_eq`].
//! - **Arrays / sequences**: length (arrays) or size (sequences) first, then
//!   positional comparison with `[i]` segments.
//! - **Unordered collections**: size first, then the symmetric difference by
//!   deep equality, reported once at the collection path with the differing
//!   items listed in sorted order of their rendering.
//! - **Records**: fields in declaration order with `.name` segments.

use super::model::{Mismatch, MismatchKind, Report};
use super::path::ComparisonPath;
use super::render::describe;
use crate::value::{DeepEq, FieldValue, Leaf, Shape, ValueKind};

/// Compare two values and collect every mismatch
///
/// `max_depth` bounds how many path segments a composite may sit below the
/// root before the walk stops with a depth record; `None` means unbounded.
pub fn compare_values(
    expected: &dyn DeepEq,
    actual: &dyn DeepEq,
    max_depth: Option<usize>,
) -> Report {
    let mut walker = Walker::new(max_depth);
    walker.compare_nodes(expected, actual, &ComparisonPath::root());
    walker.report
}

/// Returns true if the two values are deeply equal
pub fn deep_equals(expected: &dyn DeepEq, actual: &dyn DeepEq) -> bool {
    compare_values(expected, actual, None).is_empty()
}

/// How a length difference of an ordered container is reported
#[derive(Clone, Copy)]
enum Extent {
    Length,
    Size,
}

struct Walker {
    max_depth: Option<usize>,
    report: Report,
}

impl Walker {
    fn new(max_depth: Option<usize>) -> Self {
        Self {
            max_depth,
            report: Report::new(),
        }
    }

    fn record(&mut self, path: &ComparisonPath, kind: MismatchKind) {
        self.report.push(Mismatch::new(path.clone(), kind));
    }

    /// Compare any two values at `path`; returns true if records were added
    fn compare_nodes(
        &mut self,
        expected: &dyn DeepEq,
        actual: &dyn DeepEq,
        path: &ComparisonPath,
    ) -> bool {
        let before = self.report.len();
        let expected_shape = expected.shape();
        let actual_shape = actual.shape();

        if !self.check_presence(&expected_shape, &actual_shape, path) {
            return self.report.len() > before;
        }
        if !self.check_type(expected, actual, path) {
            return true;
        }

        match (expected_shape, actual_shape) {
            (Shape::Leaf(e), Shape::Leaf(a)) => self.compare_leaf(e, a, path),
            _ if self.beyond_limit(path) => {
                if let Some(limit) = self.max_depth {
                    self.record(path, MismatchKind::DepthExceeded { limit });
                }
            }
            (Shape::Array(e), Shape::Array(a)) => {
                self.compare_ordered(&e, &a, path, Extent::Length)
            }
            (Shape::Sequence(e), Shape::Sequence(a)) => {
                self.compare_ordered(&e, &a, path, Extent::Size)
            }
            (Shape::Unordered(e), Shape::Unordered(a)) => self.compare_unordered(&e, &a, path),
            (Shape::Record(e), Shape::Record(a)) => self.compare_fields(&e, &a, path),
            (e, a) => {
                // Same runtime type exposing different shapes
                self.record(
                    path,
                    MismatchKind::TypeMismatch {
                        expected: format!("{} ({})", expected.runtime_type_name(), e.label()),
                        actual: format!("{} ({})", actual.runtime_type_name(), a.label()),
                    },
                );
            }
        }

        self.report.len() > before
    }

    /// Null policy; returns true when both sides are present
    fn check_presence(
        &mut self,
        expected: &Shape<'_>,
        actual: &Shape<'_>,
        path: &ComparisonPath,
    ) -> bool {
        match (expected.is_absent(), actual.is_absent()) {
            (true, true) => false,
            (true, false) => {
                self.record(path, MismatchKind::ExpectedNull);
                false
            }
            (false, true) => {
                self.record(path, MismatchKind::ExpectedNotNull);
                false
            }
            (false, false) => true,
        }
    }

    /// Type policy; returns true when runtime types are identical
    fn check_type(
        &mut self,
        expected: &dyn DeepEq,
        actual: &dyn DeepEq,
        path: &ComparisonPath,
    ) -> bool {
        if expected.runtime_type_id() == actual.runtime_type_id() {
            return true;
        }
        self.record(
            path,
            MismatchKind::TypeMismatch {
                expected: expected.runtime_type_name().to_string(),
                actual: actual.runtime_type_name().to_string(),
            },
        );
        false
    }

    fn beyond_limit(&self, path: &ComparisonPath) -> bool {
        self.max_depth.is_some_and(|limit| path.depth() > limit)
    }

    fn compare_leaf(&mut self, expected: &dyn Leaf, actual: &dyn Leaf, path: &ComparisonPath) {
        if !expected.leaf_eq(actual) {
            self.record(
                path,
                MismatchKind::ValueMismatch {
                    expected: expected.render(),
                    actual: actual.render(),
                },
            );
        }
    }

    /// Leaf-classified field: presence and type already settled by the caller
    fn compare_leaf_field(
        &mut self,
        expected: &dyn DeepEq,
        actual: &dyn DeepEq,
        path: &ComparisonPath,
    ) {
        if !self.check_type(expected, actual, path) {
            return;
        }
        match (expected.shape(), actual.shape()) {
            (Shape::Leaf(e), Shape::Leaf(a)) => self.compare_leaf(e, a, path),
            _ => {
                self.compare_nodes(expected, actual, path);
            }
        }
    }

    fn compare_fields(
        &mut self,
        expected: &[FieldValue<'_>],
        actual: &[FieldValue<'_>],
        path: &ComparisonPath,
    ) {
        for (e, a) in expected.iter().zip(actual) {
            let field_path = path.field(e.name);
            let e_shape = e.value.shape();
            let a_shape = a.value.shape();
            if !self.check_presence(&e_shape, &a_shape, &field_path) {
                continue;
            }
            match e.kind {
                ValueKind::Leaf => self.compare_leaf_field(e.value, a.value, &field_path),
                ValueKind::Composite | ValueKind::Dynamic => {
                    self.compare_nodes(e.value, a.value, &field_path);
                }
            }
        }
    }

    fn compare_ordered(
        &mut self,
        expected: &[&dyn DeepEq],
        actual: &[&dyn DeepEq],
        path: &ComparisonPath,
        extent: Extent,
    ) {
        if expected.len() != actual.len() {
            let (e, a) = (expected.len(), actual.len());
            let kind = match extent {
                Extent::Length => MismatchKind::LengthMismatch {
                    expected: e,
                    actual: a,
                },
                Extent::Size => MismatchKind::SizeMismatch {
                    expected: e,
                    actual: a,
                },
            };
            self.record(path, kind);
            return;
        }

        for (index, (e, a)) in expected.iter().zip(actual).enumerate() {
            self.compare_nodes(*e, *a, &path.index(index));
        }
    }

    fn compare_unordered(
        &mut self,
        expected: &[&dyn DeepEq],
        actual: &[&dyn DeepEq],
        path: &ComparisonPath,
    ) {
        if expected.len() != actual.len() {
            self.record(
                path,
                MismatchKind::SizeMismatch {
                    expected: expected.len(),
                    actual: actual.len(),
                },
            );
            return;
        }

        let mut different: Vec<&dyn DeepEq> = Vec::new();
        for (side, other) in [(expected, actual), (actual, expected)] {
            for item in side {
                let matched = other.iter().any(|candidate| deep_equals(*item, *candidate));
                if !matched {
                    push_distinct(&mut different, *item);
                }
            }
        }

        if !different.is_empty() {
            // Sorted so hash-ordered collections render the same on every run
            let mut items: Vec<String> = different.into_iter().map(describe).collect();
            items.sort();
            self.record(
                path,
                MismatchKind::ItemsDiffer {
                    count: items.len(),
                    items,
                },
            );
        }
    }
}

/// Add `item` unless a deeply equal item is already present
fn push_distinct<'a>(items: &mut Vec<&'a dyn DeepEq>, item: &'a dyn DeepEq) {
    if !items.iter().any(|existing| deep_equals(*existing, item)) {
        items.push(item);
    }
}
