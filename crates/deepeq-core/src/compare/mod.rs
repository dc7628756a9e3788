//! Structural comparison.
//!
//! Walks two values and produces a structured, ordered list of mismatches
//! suitable for a single aggregated assertion failure.
//!
//! ## Entry point
//!
//! ```
//! use deepeq_core::compare::{compare_values, render_report};
//! use deepeq_core::LineSeparator;
//!
//! let report = compare_values(&vec![1, 2, 3], &vec![1, 2, 4], None);
//! assert_eq!(
//!     render_report(&report, LineSeparator::Lf),
//!     "Expected '[2]' to be '3' but was '4'."
//! );
//! ```
//!
//! ## Guarantees
//!
//! - **Exhaustive**: every mismatch is recorded before the walk returns.
//! - **Deterministic**: records follow field-declaration and element order;
//!   unordered differences are listed sorted by their rendering.
//! - **Side-effect free**: the compared values are only read.

pub mod engine;
pub mod model;
pub mod path;
pub mod render;

pub use engine::{compare_values, deep_equals};
pub use model::{Mismatch, MismatchKind, Report};
pub use path::{ComparisonPath, PathSegment};
pub use render::{describe, render_report};
