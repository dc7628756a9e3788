//! Record schemas: explicit per-type field descriptors
//!
//! A record type declares the fields that take part in comparison with
//! [`deep_eq_record!`](crate::deep_eq_record). The macro builds a
//! [`RecordSchema`] once per type (lazily, in a `OnceLock`) holding a
//! [`FieldDescriptor`] for every field: its name, a statically checked
//! accessor, and the [`ValueKind`] of the declared field type.
//!
//! Invoke the macro in the module that defines the type so that private
//! fields are reachable; comparison sees internal state, not just the public
//! surface.

use super::{DeepEq, FieldValue, Shape, ValueKind};

/// Descriptor for one field of a record type
pub struct FieldDescriptor<T: 'static> {
    name: &'static str,
    accessor: fn(&T) -> &dyn DeepEq,
    kind: ValueKind,
}

impl<T: 'static> FieldDescriptor<T> {
    pub const fn new(name: &'static str, accessor: fn(&T) -> &dyn DeepEq, kind: ValueKind) -> Self {
        Self {
            name,
            accessor,
            kind,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Classification of the declared field type
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Read this field from a record value
    pub fn read<'a>(&self, record: &'a T) -> &'a dyn DeepEq {
        (self.accessor)(record)
    }
}

/// Ordered field descriptors of a record type
pub struct RecordSchema<T: 'static> {
    fields: Vec<FieldDescriptor<T>>,
}

impl<T: 'static> RecordSchema<T> {
    /// Build a schema; field order is comparison order
    pub fn new(fields: Vec<FieldDescriptor<T>>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldDescriptor<T>] {
        &self.fields
    }

    /// Project a record value onto its record shape
    pub fn project<'a>(&self, record: &'a T) -> Shape<'a> {
        Shape::Record(
            self.fields
                .iter()
                .map(|field| FieldValue {
                    name: field.name,
                    kind: field.kind,
                    value: field.read(record),
                })
                .collect(),
        )
    }
}

/// Implement `DeepEq` for a record type by declaring its compared fields
///
/// Each field is listed with its declared type; the type is checked against
/// the actual field and decides whether the field is a leaf. Fields that are
/// not listed are not compared.
///
/// # Example
///
/// ```
/// use deepeq_core::{assert_objects_equal, deep_eq_record};
///
/// struct Node {
///     child: Option<Box<Node>>,
///     name: String,
/// }
/// deep_eq_record!(Node {
///     child: Option<Box<Node>>,
///     name: String,
/// });
///
/// let leaf = |name: &str| Node { child: None, name: name.to_string() };
/// let expected = Node { child: Some(Box::new(leaf("a"))), name: "root".to_string() };
/// let actual = Node { child: Some(Box::new(leaf("b"))), name: "root".to_string() };
///
/// let failure = assert_objects_equal(&expected, &actual).unwrap_err();
/// assert_eq!(failure.message(), "Expected '.child.name' to be 'a' but was 'b'.");
/// ```
#[macro_export]
macro_rules! deep_eq_record {
    ($ty:ty { $($field:ident : $field_ty:ty),* $(,)? }) => {
        impl $crate::DeepEq for $ty {
            fn shape(&self) -> $crate::Shape<'_> {
                static SCHEMA: ::std::sync::OnceLock<$crate::value::RecordSchema<$ty>> =
                    ::std::sync::OnceLock::new();
                SCHEMA
                    .get_or_init(|| {
                        $crate::value::RecordSchema::new(::std::vec![
                            $(
                                $crate::value::FieldDescriptor::new(
                                    ::std::stringify!($field),
                                    {
                                        fn access(record: &$ty) -> &dyn $crate::DeepEq {
                                            let field: &$field_ty = &record.$field;
                                            field
                                        }
                                        access
                                    },
                                    <$field_ty as $crate::DeepEq>::static_kind(),
                                ),
                            )*
                        ])
                    })
                    .project(self)
            }
        }
    };
}
