//! Leaf values: compared by exact equality, rendered as text
//!
//! Integers, booleans, chars and text render with `Display`. Floats render
//! with `Debug` (`2.0` rather than `2`) and compare by bit pattern, so `NaN`
//! equals itself and `0.0` differs from `-0.0`. Enumerations declared with
//! [`deep_eq_enum!`](crate::deep_eq_enum) render their variant name.

use super::{DeepEq, Shape, ValueKind};
use std::any::Any;

/// A directly comparable value
pub trait Leaf: Any {
    /// Exact equality against another leaf of the same runtime type
    ///
    /// Returns false when `other` is of a different type.
    fn leaf_eq(&self, other: &dyn Leaf) -> bool;

    /// Default text rendering used in mismatch records
    fn render(&self) -> String;

    fn as_any(&self) -> &dyn Any;
}

macro_rules! display_leaf {
    ($($ty:ty),* $(,)?) => {$(
        impl Leaf for $ty {
            fn leaf_eq(&self, other: &dyn Leaf) -> bool {
                other
                    .as_any()
                    .downcast_ref::<$ty>()
                    .is_some_and(|other| self == other)
            }

            fn render(&self) -> String {
                self.to_string()
            }

            fn as_any(&self) -> &dyn Any {
                self
            }
        }

        impl DeepEq for $ty {
            fn static_kind() -> ValueKind {
                ValueKind::Leaf
            }

            fn shape(&self) -> Shape<'_> {
                Shape::Leaf(self)
            }
        }
    )*};
}

macro_rules! float_leaf {
    ($($ty:ty),* $(,)?) => {$(
        impl Leaf for $ty {
            fn leaf_eq(&self, other: &dyn Leaf) -> bool {
                other
                    .as_any()
                    .downcast_ref::<$ty>()
                    .is_some_and(|other| self.to_bits() == other.to_bits())
            }

            fn render(&self) -> String {
                format!("{:?}", self)
            }

            fn as_any(&self) -> &dyn Any {
                self
            }
        }

        impl DeepEq for $ty {
            fn static_kind() -> ValueKind {
                ValueKind::Leaf
            }

            fn shape(&self) -> Shape<'_> {
                Shape::Leaf(self)
            }
        }
    )*};
}

display_leaf!(
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    bool,
    char,
    String,
    &'static str,
);

float_leaf!(f32, f64);

/// Declare enumeration types as leaves
///
/// The type must implement `PartialEq` and `Debug`; mismatches render the
/// `Debug` output, which for unit variants is the variant name.
///
/// # Example
///
/// ```
/// use deepeq_core::{assert_objects_equal, deep_eq_enum};
///
/// #[derive(Debug, PartialEq)]
/// enum Colour {
///     Red,
///     Green,
/// }
/// deep_eq_enum!(Colour);
///
/// let failure = assert_objects_equal(&Colour::Red, &Colour::Green).unwrap_err();
/// assert_eq!(failure.message(), "Expected '' to be 'Red' but was 'Green'.");
/// ```
#[macro_export]
macro_rules! deep_eq_enum {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::value::Leaf for $ty {
            fn leaf_eq(&self, other: &dyn $crate::value::Leaf) -> bool {
                other
                    .as_any()
                    .downcast_ref::<$ty>()
                    .is_some_and(|other| self == other)
            }

            fn render(&self) -> ::std::string::String {
                ::std::format!("{:?}", self)
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }

        impl $crate::DeepEq for $ty {
            fn static_kind() -> $crate::ValueKind {
                $crate::ValueKind::Leaf
            }

            fn shape(&self) -> $crate::Shape<'_> {
                $crate::Shape::Leaf(self)
            }
        }
    )+};
}
