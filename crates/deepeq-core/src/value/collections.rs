//! `DeepEq` for standard containers and transparent holders

use super::{DeepEq, Shape, ValueKind};
use std::any::TypeId;
use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

fn elements<'a, T: DeepEq>(items: impl Iterator<Item = &'a T>) -> Vec<&'a dyn DeepEq> {
    items.map(|item| item as &dyn DeepEq).collect()
}

// ---------------------------------------------------------------------------
// Arrays
// ---------------------------------------------------------------------------

impl<T: DeepEq, const N: usize> DeepEq for [T; N] {
    fn shape(&self) -> Shape<'_> {
        Shape::Array(elements(self.iter()))
    }
}

/// Runtime-length arrays, usually held as `Box<[T]>`
impl<T: DeepEq> DeepEq for [T] {
    fn shape(&self) -> Shape<'_> {
        Shape::Array(elements(self.iter()))
    }
}

// ---------------------------------------------------------------------------
// Ordered sequences
// ---------------------------------------------------------------------------

impl<T: DeepEq> DeepEq for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(elements(self.iter()))
    }
}

impl<T: DeepEq> DeepEq for VecDeque<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(elements(self.iter()))
    }
}

impl<T: DeepEq> DeepEq for LinkedList<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(elements(self.iter()))
    }
}

// ---------------------------------------------------------------------------
// Unordered collections
// ---------------------------------------------------------------------------

impl<T: DeepEq, S: 'static> DeepEq for HashSet<T, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Unordered(elements(self.iter()))
    }
}

impl<T: DeepEq> DeepEq for BTreeSet<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Unordered(elements(self.iter()))
    }
}

/// An unordered collection with no hashing or ordering requirement
///
/// Useful for element types that cannot live in a `HashSet` or `BTreeSet`
/// (records holding floats, type-erased values). Duplicates are kept, so
/// the size of a bag is the number of items pushed into it.
///
/// Comparison is not multiset equality: after the sizes match, each item
/// only needs a deeply equal counterpart on the other side, so
/// `[1, 1, 2]` and `[1, 2, 2]` compare equal.
#[derive(Debug, Clone, PartialEq)]
pub struct Bag<T>(Vec<T>);

impl<T> Bag<T> {
    /// Create an empty bag
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Add an item
    pub fn insert(&mut self, item: T) {
        self.0.push(item);
    }

    /// Number of items, duplicates included
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }
}

impl<T> Default for Bag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Bag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> From<Vec<T>> for Bag<T> {
    fn from(items: Vec<T>) -> Self {
        Self(items)
    }
}

impl<T: DeepEq> DeepEq for Bag<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Unordered(elements(self.0.iter()))
    }
}

// ---------------------------------------------------------------------------
// Transparent holders
// ---------------------------------------------------------------------------

impl<T: DeepEq> DeepEq for Option<T> {
    fn static_kind() -> ValueKind {
        T::static_kind()
    }

    fn shape(&self) -> Shape<'_> {
        match self {
            Some(value) => value.shape(),
            None => Shape::Absent,
        }
    }

    fn runtime_type_id(&self) -> TypeId {
        match self {
            Some(value) => value.runtime_type_id(),
            None => TypeId::of::<Self>(),
        }
    }

    fn runtime_type_name(&self) -> &'static str {
        match self {
            Some(value) => value.runtime_type_name(),
            None => std::any::type_name::<Self>(),
        }
    }
}

macro_rules! transparent_pointer {
    ($($ptr:ident),* $(,)?) => {$(
        impl<T: ?Sized + DeepEq> DeepEq for $ptr<T> {
            fn static_kind() -> ValueKind {
                ValueKind::Dynamic
            }

            fn shape(&self) -> Shape<'_> {
                (**self).shape()
            }

            fn runtime_type_id(&self) -> TypeId {
                (**self).runtime_type_id()
            }

            fn runtime_type_name(&self) -> &'static str {
                (**self).runtime_type_name()
            }
        }
    )*};
}

transparent_pointer!(Box, Rc, Arc);

#[cfg(test)]
mod tests {
    use super::*;

    fn len_of(shape: Shape<'_>) -> usize {
        match shape {
            Shape::Array(items) | Shape::Sequence(items) | Shape::Unordered(items) => items.len(),
            _ => panic!("not a container"),
        }
    }

    #[test]
    fn test_container_shapes() {
        assert!(matches!([1_u8, 2, 3].shape(), Shape::Array(_)));
        let boxed: Box<[u8]> = vec![1, 2].into_boxed_slice();
        assert!(matches!(boxed.shape(), Shape::Array(_)));
        assert!(matches!(VecDeque::from(vec![1_u8]).shape(), Shape::Sequence(_)));
        assert!(matches!(
            BTreeSet::from([1_u8]).shape(),
            Shape::Unordered(_)
        ));
    }

    #[test]
    fn test_container_lengths() {
        assert_eq!(len_of(vec!['a', 'b', 'c'].shape()), 3);
        assert_eq!(len_of(HashSet::from([1_i32, 2]).shape()), 2);
        assert_eq!(len_of(Bag::from(vec![1.0_f64, 1.0]).shape()), 2);
    }

    #[test]
    fn test_boxed_slice_type_ignores_length() {
        let three: Box<[char]> = vec!['a', 'b', 'c'].into_boxed_slice();
        let two: Box<[char]> = vec!['a', 'b'].into_boxed_slice();
        assert_eq!(three.runtime_type_id(), two.runtime_type_id());
        assert_eq!(three.runtime_type_name(), "[char]");
    }

    #[test]
    fn test_rc_and_arc_are_transparent() {
        let rc = Rc::new(String::from("shared"));
        let arc = Arc::new(String::from("shared"));
        assert_eq!(rc.runtime_type_id(), TypeId::of::<String>());
        assert_eq!(arc.runtime_type_id(), TypeId::of::<String>());
        assert!(matches!(rc.shape(), Shape::Leaf(_)));
    }

    #[test]
    fn test_bag_collects() {
        let bag: Bag<i32> = (1..=3).collect();
        assert_eq!(bag.len(), 3);
        assert!(!bag.is_empty());
        assert!(Bag::<i32>::default().is_empty());
        assert_eq!(bag.iter().sum::<i32>(), 6);
    }
}
