use serde_json::{Map, Value};

/// Structural view of a JSON value: the only distinction key path
/// extraction cares about.
#[derive(Debug, Clone, Copy)]
pub enum Shape<'a> {
    Object(&'a Map<String, Value>),
    Array(&'a [Value]),
    /// String, number, boolean or null
    Scalar,
}

impl<'a> Shape<'a> {
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => Shape::Object(map),
            Value::Array(items) => Shape::Array(items),
            Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Null => Shape::Scalar,
        }
    }

    pub fn is_container(&self) -> bool {
        !matches!(self, Shape::Scalar)
    }
}
