use indexmap::IndexMap;

use crate::{ParseError, Value};

fn mismatch(expected: &'static str, value: &Value) -> ParseError {
    ParseError::TypeMismatch {
        expected,
        found: value.type_name(),
    }
}

impl TryFrom<Value> for bool {
    type Error = ParseError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(mismatch("boolean", &other)),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = ParseError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(n),
            other => Err(mismatch("number", &other)),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = ParseError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(mismatch("string", &other)),
        }
    }
}

impl TryFrom<Value> for Vec<Value> {
    type Error = ParseError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => Ok(items),
            other => Err(mismatch("array", &other)),
        }
    }
}

impl TryFrom<Value> for IndexMap<String, Value> {
    type Error = ParseError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(members) => Ok(members),
            other => Err(mismatch("object", &other)),
        }
    }
}
