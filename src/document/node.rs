//! Generic YAML value tree.
//!
//! Every decoded document is represented as a tree of `YamlValue`s. The tree is
//! a closed set of variants (null, boolean, number, string, sequence, object),
//! so code that inspects it can match exhaustively instead of probing types at
//! runtime.
//!
//! # Example
//!
//! ```
//! use yamlquery::document::node::{Mapping, YamlValue};
//!
//! let mut map = Mapping::new();
//! map.insert("name".to_string(), YamlValue::String("yamlquery".to_string()));
//! map.insert("version".to_string(), YamlValue::Number(1.0));
//! let object = YamlValue::Object(map);
//!
//! assert!(object.is_object());
//! assert_eq!(object.type_name(), "object");
//! ```

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Field mapping of a YAML object, in document order.
pub type Mapping = IndexMap<String, YamlValue>;

/// A decoded YAML value.
///
/// Numbers are always stored as `f64`; the decoder does not distinguish
/// integer and float literals. Integer extraction truncates.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum YamlValue {
    /// A YAML null (`~`, `null`, or an empty value)
    #[default]
    Null,
    /// A YAML boolean
    Boolean(bool),
    /// A YAML number (integer or float)
    Number(f64),
    /// A YAML string
    String(String),
    /// A YAML sequence containing ordered values
    Sequence(Vec<YamlValue>),
    /// A YAML mapping with string keys
    Object(Mapping),
}

impl YamlValue {
    /// Returns true if this value is an object.
    ///
    /// # Example
    ///
    /// ```
    /// use yamlquery::document::node::{Mapping, YamlValue};
    ///
    /// assert!(YamlValue::Object(Mapping::new()).is_object());
    /// assert!(!YamlValue::Number(42.0).is_object());
    /// ```
    pub fn is_object(&self) -> bool {
        matches!(self, YamlValue::Object(_))
    }

    /// Returns true if this value is a sequence.
    pub fn is_sequence(&self) -> bool {
        matches!(self, YamlValue::Sequence(_))
    }

    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, YamlValue::Null)
    }

    /// Returns true if this value is a container (object or sequence).
    pub fn is_container(&self) -> bool {
        matches!(self, YamlValue::Object(_) | YamlValue::Sequence(_))
    }

    /// Short lowercase name of the variant, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            YamlValue::Null => "null",
            YamlValue::Boolean(_) => "boolean",
            YamlValue::Number(_) => "number",
            YamlValue::String(_) => "string",
            YamlValue::Sequence(_) => "sequence",
            YamlValue::Object(_) => "object",
        }
    }
}

impl fmt::Display for YamlValue {
    /// Renders the value in a compact flow style, e.g. `{name: a, tags: [x, y]}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YamlValue::Null => write!(f, "null"),
            YamlValue::Boolean(b) => write!(f, "{}", b),
            YamlValue::Number(n) => write!(f, "{}", n),
            YamlValue::String(s) => write!(f, "{}", s),
            YamlValue::Sequence(items) => {
                write!(f, "[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            YamlValue::Object(fields) => {
                write!(f, "{{")?;
                for (idx, (key, value)) in fields.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<bool> for YamlValue {
    fn from(b: bool) -> Self {
        YamlValue::Boolean(b)
    }
}

impl From<f64> for YamlValue {
    fn from(n: f64) -> Self {
        YamlValue::Number(n)
    }
}

impl From<&str> for YamlValue {
    fn from(s: &str) -> Self {
        YamlValue::String(s.to_string())
    }
}

impl From<String> for YamlValue {
    fn from(s: String) -> Self {
        YamlValue::String(s)
    }
}

impl From<Vec<YamlValue>> for YamlValue {
    fn from(items: Vec<YamlValue>) -> Self {
        YamlValue::Sequence(items)
    }
}

impl From<Mapping> for YamlValue {
    fn from(fields: Mapping) -> Self {
        YamlValue::Object(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_checks() {
        assert!(YamlValue::Object(Mapping::new()).is_container());
        assert!(YamlValue::Sequence(vec![]).is_container());
        assert!(YamlValue::Sequence(vec![]).is_sequence());
        assert!(!YamlValue::String("x".into()).is_container());
        assert!(YamlValue::Null.is_null());
        assert!(YamlValue::default().is_null());
    }

    #[test]
    fn test_type_names() {
        assert_eq!(YamlValue::Null.type_name(), "null");
        assert_eq!(YamlValue::Boolean(true).type_name(), "boolean");
        assert_eq!(YamlValue::Number(1.5).type_name(), "number");
        assert_eq!(YamlValue::from("a").type_name(), "string");
        assert_eq!(YamlValue::Sequence(vec![]).type_name(), "sequence");
        assert_eq!(YamlValue::Object(Mapping::new()).type_name(), "object");
    }

    #[test]
    fn test_display_scalars() {
        assert_eq!(YamlValue::Null.to_string(), "null");
        assert_eq!(YamlValue::Boolean(false).to_string(), "false");
        assert_eq!(YamlValue::Number(6.0).to_string(), "6");
        assert_eq!(YamlValue::Number(6.5).to_string(), "6.5");
        assert_eq!(YamlValue::from("bar").to_string(), "bar");
    }

    #[test]
    fn test_display_nested() {
        let mut fields = Mapping::new();
        fields.insert("name".to_string(), YamlValue::from("a"));
        fields.insert(
            "tags".to_string(),
            YamlValue::Sequence(vec![YamlValue::from("x"), YamlValue::Number(2.0)]),
        );

        assert_eq!(
            YamlValue::Object(fields).to_string(),
            "{name: a, tags: [x, 2]}"
        );
    }

    #[test]
    fn test_serialize_untagged() {
        let mut fields = Mapping::new();
        fields.insert("a".to_string(), YamlValue::Null);
        fields.insert("b".to_string(), YamlValue::Boolean(true));
        fields.insert("c".to_string(), YamlValue::from("s"));

        let json = serde_json::to_string(&YamlValue::Object(fields)).unwrap();
        assert_eq!(json, r#"{"a":null,"b":true,"c":"s"}"#);
    }
}
