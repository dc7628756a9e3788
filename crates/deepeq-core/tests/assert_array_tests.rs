#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{generate_nested_objects, primitive, GenericObjectContainingObject, TreeNodeObject};
use deepeq_core::{assert_objects_equal, FailureKind, MismatchKind};

fn boxed<T, const N: usize>(items: [T; N]) -> Box<[T]> {
    Box::new(items)
}

fn nodes(first: &str, second: &str, second_depth: usize) -> Box<[TreeNodeObject]> {
    boxed([
        generate_nested_objects(3, TreeNodeObject::new(first)),
        generate_nested_objects(second_depth, TreeNodeObject::new(second)),
    ])
}

#[test]
fn test_array_of_primitives_with_same_values_are_equal() {
    assert!(assert_objects_equal(&['A', 'B', 'C'], &['A', 'B', 'C']).is_ok());
    assert!(assert_objects_equal(&boxed(['A', 'B', 'C']), &boxed(['A', 'B', 'C'])).is_ok());
}

#[test]
fn test_array_of_different_sizes_are_not_equal() {
    let err = assert_objects_equal(&boxed(['A', 'B', 'C']), &boxed(['A', 'B'])).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Expected '' to be of length 3 but was of length 2."
    );
    assert_eq!(
        err.mismatches()[0].kind,
        MismatchKind::LengthMismatch {
            expected: 3,
            actual: 2
        }
    );
}

#[test]
fn test_fixed_arrays_of_different_sizes_are_different_types() {
    let err = assert_objects_equal(&['A', 'B', 'C'], &['A', 'B']).unwrap_err();

    assert_eq!(err.kind(), FailureKind::TypeMismatch);
    assert_eq!(
        err.to_string(),
        "Expected element to be of type '[char; 3]' but was of type '[char; 2]'."
    );
}

#[test]
fn test_empty_arrays_are_equal() {
    assert!(assert_objects_equal(&boxed::<i32, 0>([]), &boxed::<i32, 0>([])).is_ok());
}

#[test]
fn test_array_of_primitives_with_different_values_are_not_equal() {
    let err = assert_objects_equal(&[1, 2, 3], &[1, 2, 4]).unwrap_err();

    assert_eq!(err.to_string(), "Expected '[2]' to be '3' but was '4'.");
}

#[test]
fn test_array_of_primitive_only_objects_with_same_values_are_equal() {
    assert!(assert_objects_equal(
        &[primitive('A'), primitive('A')],
        &[primitive('A'), primitive('A')]
    )
    .is_ok());
}

#[test]
fn test_array_of_primitive_only_objects_with_different_values_are_not_equal() {
    let err = assert_objects_equal(
        &[primitive('A'), primitive('A')],
        &[primitive('A'), primitive('B')],
    )
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Expected '[1].char_value' to be 'A' but was 'B'."
    );
}

#[test]
fn test_array_of_nested_objects_with_same_values_are_equal() {
    assert!(assert_objects_equal(
        &nodes("Some text 0", "Some text 1", 2),
        &nodes("Some text 0", "Some text 1", 2)
    )
    .is_ok());
}

#[test]
fn test_arrays_of_nested_objects_with_different_values_on_top_level_properties_are_not_equal() {
    let err = assert_objects_equal(
        &nodes("Some text 0", "Some text 1", 2),
        &nodes("Some text 0", "Some text 2", 2),
    )
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Expected '[1].name' to be 'Some text 1' but was 'Some text 2'."
    );
}

#[test]
fn test_array_of_nested_objects_with_different_values_in_nesting_are_not_equal() {
    let err = assert_objects_equal(
        &nodes("Some text 0", "Some text 1", 2),
        &nodes("Some text 0", "Some text 1", 3),
    )
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Expected '[1].child.child.child' to be null but was not null."
    );
}

#[test]
fn test_object_containing_different_sized_arrays_are_not_equal() {
    let err = assert_objects_equal(
        &GenericObjectContainingObject::new(boxed(['A', 'B', 'C'])),
        &GenericObjectContainingObject::new(boxed(['A', 'B', 'C', 'D'])),
    )
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Expected '.object' to be of length 3 but was of length 4."
    );
}

#[test]
fn test_object_containing_array_with_same_primitive_values_are_equal() {
    assert!(assert_objects_equal(
        &GenericObjectContainingObject::new([1, 2, 3]),
        &GenericObjectContainingObject::new([1, 2, 3])
    )
    .is_ok());
}

#[test]
fn test_object_containing_array_with_different_primitive_values_are_not_equal() {
    let err = assert_objects_equal(
        &GenericObjectContainingObject::new([1, 2, 3]),
        &GenericObjectContainingObject::new([1, 2, 4]),
    )
    .unwrap_err();

    assert_eq!(err.to_string(), "Expected '.object[2]' to be '3' but was '4'.");
}

#[test]
fn test_object_containing_array_with_same_object_values_are_equal() {
    assert!(assert_objects_equal(
        &GenericObjectContainingObject::new([primitive('A')]),
        &GenericObjectContainingObject::new([primitive('A')])
    )
    .is_ok());
}

#[test]
fn test_object_containing_array_with_different_object_values_are_not_equal() {
    let err = assert_objects_equal(
        &GenericObjectContainingObject::new([common::PrimitiveOnlyObject::new(1, 2.0, false, 'A')]),
        &GenericObjectContainingObject::new([common::PrimitiveOnlyObject::new(3, 4.0, false, 'B')]),
    )
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Expected '.object[0].int_value' to be '1' but was '3'.\n\
         Expected '.object[0].double_value' to be '2.0' but was '4.0'.\n\
         Expected '.object[0].char_value' to be 'A' but was 'B'."
    );
}
