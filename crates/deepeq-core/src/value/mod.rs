//! Structural value model
//!
//! Every type that takes part in a deep comparison implements [`DeepEq`],
//! which exposes a [`Shape`]: the structural view the comparison engine walks.
//!
//! - Leaves (numbers, booleans, chars, text, enumerations) expose themselves
//!   through the [`Leaf`] trait and are compared by exact equality.
//! - Fixed-size arrays and runtime-length slices expose [`Shape::Array`].
//! - Ordered collections (`Vec`, `VecDeque`, `LinkedList`) expose
//!   [`Shape::Sequence`].
//! - Unordered collections (`HashSet`, `BTreeSet`, [`Bag`]) expose
//!   [`Shape::Unordered`].
//! - Records expose their fields through a [`RecordSchema`] declared with
//!   [`deep_eq_record!`](crate::deep_eq_record).
//! - `Option`, `Box`, `Rc` and `Arc` are transparent: they report the shape and
//!   runtime type of the value they hold, and `None` is [`Shape::Absent`].

pub mod collections;
pub mod leaf;
pub mod record;

pub use collections::Bag;
pub use leaf::Leaf;
pub use record::{FieldDescriptor, RecordSchema};

use serde::{Deserialize, Serialize};
use std::any::{Any, TypeId};

/// Static classification of a type for comparison purposes
///
/// The classification belongs to the type, not to any particular value, so
/// it is decided once when a record schema is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// Compared by exact equality
    Leaf,
    /// Compared by structural recursion
    Composite,
    /// Resolved from the runtime value (type-erased or boxed holders)
    Dynamic,
}

/// A value that can be deeply compared
pub trait DeepEq: Any {
    /// Classification of the implementing type
    fn static_kind() -> ValueKind
    where
        Self: Sized,
    {
        ValueKind::Composite
    }

    /// The structural view of this value
    fn shape(&self) -> Shape<'_>;

    /// Identity of the underlying runtime type
    fn runtime_type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Fully-qualified name of the underlying runtime type
    fn runtime_type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// One field of a record, read through its schema
#[derive(Clone, Copy)]
pub struct FieldValue<'a> {
    pub name: &'static str,
    pub kind: ValueKind,
    pub value: &'a dyn DeepEq,
}

/// Structural view of a value
pub enum Shape<'a> {
    /// No value (`None`)
    Absent,
    /// Directly comparable value
    Leaf(&'a dyn Leaf),
    /// Fixed-size array; length mismatches are reported as lengths
    Array(Vec<&'a dyn DeepEq>),
    /// Ordered sequence; length mismatches are reported as sizes
    Sequence(Vec<&'a dyn DeepEq>),
    /// Collection without positional indexing
    Unordered(Vec<&'a dyn DeepEq>),
    /// Record with named fields in declaration order
    Record(Vec<FieldValue<'a>>),
}

impl Shape<'_> {
    /// Returns true if this is the absent shape
    pub fn is_absent(&self) -> bool {
        matches!(self, Shape::Absent)
    }

    /// Short label used in debug output
    pub fn label(&self) -> &'static str {
        match self {
            Shape::Absent => "absent",
            Shape::Leaf(_) => "leaf",
            Shape::Array(_) => "array",
            Shape::Sequence(_) => "sequence",
            Shape::Unordered(_) => "unordered",
            Shape::Record(_) => "record",
        }
    }
}

impl std::fmt::Debug for Shape<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shape::Absent => write!(f, "Absent"),
            Shape::Leaf(leaf) => write!(f, "Leaf({})", leaf.render()),
            Shape::Array(items) => write!(f, "Array(len={})", items.len()),
            Shape::Sequence(items) => write!(f, "Sequence(len={})", items.len()),
            Shape::Unordered(items) => write!(f, "Unordered(len={})", items.len()),
            Shape::Record(fields) => {
                let names: Vec<&str> = fields.iter().map(|f| f.name).collect();
                write!(f, "Record({})", names.join(", "))
            }
        }
    }
}
