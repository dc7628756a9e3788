#![allow(dead_code)]

use deepeq_core::{deep_eq_record, DeepEq};

/// Record with private leaf fields only
pub struct PrimitiveOnlyObject {
    int_value: i32,
    double_value: f64,
    boolean_value: bool,
    char_value: char,
}

impl PrimitiveOnlyObject {
    pub fn new(int_value: i32, double_value: f64, boolean_value: bool, char_value: char) -> Self {
        Self {
            int_value,
            double_value,
            boolean_value,
            char_value,
        }
    }
}

deep_eq_record!(PrimitiveOnlyObject {
    int_value: i32,
    double_value: f64,
    boolean_value: bool,
    char_value: char,
});

/// Plain data carrier with public leaf fields
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimitiveOnlyRecord {
    pub int_value: i32,
    pub double_value: f64,
    pub boolean_value: bool,
    pub char_value: char,
}

deep_eq_record!(PrimitiveOnlyRecord {
    int_value: i32,
    double_value: f64,
    boolean_value: bool,
    char_value: char,
});

/// Singly linked chain of named nodes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TreeNodeObject {
    child: Option<Box<TreeNodeObject>>,
    name: String,
}

impl TreeNodeObject {
    pub fn new(name: &str) -> Self {
        Self {
            child: None,
            name: name.to_string(),
        }
    }

    pub fn set_child(&mut self, child: TreeNodeObject) {
        self.child = Some(Box::new(child));
    }

    pub fn child_mut(&mut self) -> Option<&mut TreeNodeObject> {
        self.child.as_deref_mut()
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }
}

deep_eq_record!(TreeNodeObject {
    child: Option<Box<TreeNodeObject>>,
    name: String,
});

/// Holder of an arbitrary, type-erased value
pub struct GenericObjectContainingObject {
    object: Option<Box<dyn DeepEq>>,
}

impl GenericObjectContainingObject {
    pub fn new(object: impl DeepEq) -> Self {
        Self {
            object: Some(Box::new(object)),
        }
    }

    pub fn empty() -> Self {
        Self { object: None }
    }
}

deep_eq_record!(GenericObjectContainingObject {
    object: Option<Box<dyn DeepEq>>,
});

/// Same layout as `GenericObjectContainingObject`, distinct type
pub struct GenericObjectContainingObject2 {
    object: Option<Box<dyn DeepEq>>,
}

impl GenericObjectContainingObject2 {
    pub fn new(object: impl DeepEq) -> Self {
        Self {
            object: Some(Box::new(object)),
        }
    }
}

deep_eq_record!(GenericObjectContainingObject2 {
    object: Option<Box<dyn DeepEq>>,
});

/// Record without fields
pub struct Blank;

deep_eq_record!(Blank {});

/// Hang a chain of `depth` nodes named "element" below `parent`
pub fn generate_nested_objects(depth: usize, mut parent: TreeNodeObject) -> TreeNodeObject {
    if depth > 0 {
        parent.set_child(generate_nested_objects(
            depth - 1,
            TreeNodeObject::new("element"),
        ));
    }
    parent
}

/// Baseline object that varies only in its char field
pub fn primitive(char_value: char) -> PrimitiveOnlyObject {
    PrimitiveOnlyObject::new(1, 2.0, false, char_value)
}
