//! deepeq Core - Structural deep-equality assertions
//!
//! This crate compares two values of the same declared type by walking their
//! observable state and reports every path at which they differ:
//! - Value model (`DeepEq`, `Shape`, leaves, record schemas)
//! - Comparison engine with null, type, leaf, container and unordered policies
//! - Report rendering with an injectable line separator
//! - Assertion entry points (`assert_objects_equal`, `Comparator`)
//! - Error, logging and configuration facilities
//!
//! # Example
//!
//! ```
//! use deepeq_core::{assert_objects_equal, deep_eq_record};
//!
//! struct Account {
//!     owner: String,
//!     balance: i64,
//! }
//! deep_eq_record!(Account {
//!     owner: String,
//!     balance: i64,
//! });
//!
//! let expected = Account { owner: "ada".into(), balance: 10 };
//! let actual = Account { owner: "ada".into(), balance: 12 };
//!
//! let failure = assert_objects_equal(&expected, &actual).unwrap_err();
//! assert_eq!(failure.to_string(), "Expected '.balance' to be '10' but was '12'.");
//! ```

pub mod assert;
pub mod compare;
pub mod config;
pub mod errors;
pub mod logging_facility;
pub mod value;

pub use deepeq_core_types as core_types;

// Re-export commonly used types
pub use assert::{assert_objects_equal, Comparator};
pub use compare::{deep_equals, render_report, ComparisonPath, Mismatch, MismatchKind, Report};
pub use config::CompareConfig;
pub use core_types::LineSeparator;
pub use errors::{AssertionFailure, ConfigError, FailureKind, Result};
pub use value::{Bag, DeepEq, Shape, ValueKind};
