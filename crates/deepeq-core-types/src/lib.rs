//! Core types shared across deepeq facilities
//!
//! This crate provides foundational types used by both the comparison
//! engine and the logging facility:
//!
//! - **Schema constants**: Canonical field keys and event names
//! - **Line separator**: The injectable separator used to render reports

pub mod schema;
pub mod separator;

pub use separator::{LineSeparator, UnknownSeparator};
