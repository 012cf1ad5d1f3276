use serde::{Deserialize, Serialize};

///
/// Value
///
/// Scalar row payloads as handed over by a persistence layer. Visibility
/// filtering only ever looks at column names; values ride along untouched.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[remain::sorted]
pub enum Value {
    Bool(bool),
    Float(f64),
    Int(i64),
    Null,
    Text(String),
    Uint(u64),
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::Uint(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_pick_the_matching_variant() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(7i64), Value::Int(7));
        assert_eq!(Value::from("token"), Value::Text("token".to_string()));
        assert!(Value::Null.is_null());
    }
}
