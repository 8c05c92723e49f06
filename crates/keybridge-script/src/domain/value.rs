//! Dynamically typed values passed between scripts and native functions.

use serde::{Deserialize, Serialize};

/// A script value.
///
/// Serialized untagged, so it maps directly onto JSON: `null`, booleans,
/// numbers, strings and arrays.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptValue {
    #[default]
    Nil,
    Boolean(bool),
    Number(f64),
    String(String),
    Table(Vec<ScriptValue>),
}

impl ScriptValue {
    /// Type name as scripts see it.
    pub fn type_name(&self) -> &'static str {
        match self {
            ScriptValue::Nil => "nil",
            ScriptValue::Boolean(_) => "boolean",
            ScriptValue::Number(_) => "number",
            ScriptValue::String(_) => "string",
            ScriptValue::Table(_) => "table",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            ScriptValue::Boolean(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match *self {
            ScriptValue::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScriptValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for ScriptValue {
    fn from(b: bool) -> Self {
        ScriptValue::Boolean(b)
    }
}

impl From<f64> for ScriptValue {
    fn from(n: f64) -> Self {
        ScriptValue::Number(n)
    }
}

impl From<&str> for ScriptValue {
    fn from(s: &str) -> Self {
        ScriptValue::String(s.to_string())
    }
}

impl From<String> for ScriptValue {
    fn from(s: String) -> Self {
        ScriptValue::String(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_mapping() {
        // Arrange
        let json = r#"[null, true, 1.5, "a", ["b", 2]]"#;

        // Act
        let values: Vec<ScriptValue> = serde_json::from_str(json).expect("parse");

        // Assert
        assert_eq!(
            values,
            vec![
                ScriptValue::Nil,
                ScriptValue::Boolean(true),
                ScriptValue::Number(1.5),
                ScriptValue::from("a"),
                ScriptValue::Table(vec![ScriptValue::from("b"), ScriptValue::Number(2.0)]),
            ]
        );
    }

    #[test]
    fn test_integers_read_as_numbers() {
        let v: ScriptValue = serde_json::from_str("3").expect("parse");
        assert_eq!(v, ScriptValue::Number(3.0));
    }

    #[test]
    fn test_type_names() {
        assert_eq!(ScriptValue::Nil.type_name(), "nil");
        assert_eq!(ScriptValue::from(false).type_name(), "boolean");
        assert_eq!(ScriptValue::from(0.0).type_name(), "number");
        assert_eq!(ScriptValue::from("x").type_name(), "string");
        assert_eq!(ScriptValue::Table(vec![]).type_name(), "table");
    }

    #[test]
    fn test_accessors_only_match_their_type() {
        assert_eq!(ScriptValue::from(true).as_bool(), Some(true));
        assert_eq!(ScriptValue::from("true").as_bool(), None);
        assert_eq!(ScriptValue::from(2.0).as_number(), Some(2.0));
        assert_eq!(ScriptValue::from("2").as_number(), None);
        assert_eq!(ScriptValue::from("k").as_str(), Some("k"));
        assert_eq!(ScriptValue::Nil.as_str(), None);
    }
}
