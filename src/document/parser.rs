//! YAML decoding into the generic value tree.
//!
//! This module turns raw YAML bytes into the `Mapping` that every `YamlQuery`
//! owns. Scanning and parsing are delegated to `serde_yaml`; this module only
//! maps its output onto `YamlValue`.
//!
//! # Example
//!
//! ```
//! use yamlquery::document::parser::parse_yaml;
//! use yamlquery::document::node::YamlValue;
//!
//! let root = parse_yaml(b"name: Alice\nage: 30\n").unwrap();
//! assert_eq!(root.get("age"), Some(&YamlValue::Number(30.0)));
//! ```

use super::node::{Mapping, YamlValue};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_yaml::Value as SerdeValue;
use tracing::{debug, warn};

/// Parses the first document of a YAML stream into a root mapping.
///
/// An empty stream, or a document that is just `null`, yields an empty
/// mapping. Later documents in a multi-document stream are ignored.
///
/// # Errors
///
/// This function will return an error if:
/// - The input is not valid YAML (or not valid UTF-8)
/// - The top level of the document is not a mapping
///
/// # Examples
///
/// ```
/// use yamlquery::document::parser::parse_yaml;
///
/// assert!(parse_yaml(b"").unwrap().is_empty());
/// assert!(parse_yaml(b"- a\n- b\n").is_err());
/// ```
pub fn parse_yaml(bytes: &[u8]) -> Result<Mapping> {
    let document = match serde_yaml::Deserializer::from_slice(bytes).next() {
        Some(document) => document,
        None => {
            debug!("empty YAML stream, using empty mapping");
            return Ok(Mapping::new());
        }
    };

    let value = SerdeValue::deserialize(document).context("Failed to parse YAML")?;

    match convert_value(value) {
        YamlValue::Object(fields) => {
            debug!(fields = fields.len(), "decoded YAML document");
            Ok(fields)
        }
        YamlValue::Null => Ok(Mapping::new()),
        other => bail!(
            "Expected a mapping at the document root, found {}",
            other.type_name()
        ),
    }
}

/// Parses YAML like [`parse_yaml`], but never fails.
///
/// Malformed input and non-mapping documents are logged and replaced with an
/// empty mapping, so lookups against the result report missing fields rather
/// than a decode failure.
pub fn parse_yaml_lenient(bytes: &[u8]) -> Mapping {
    parse_yaml(bytes).unwrap_or_else(|err| {
        warn!("{:#}; using empty mapping", err);
        Mapping::new()
    })
}

/// Converts a `serde_yaml::Value` into a `YamlValue`.
///
/// Integers and floats both become `YamlValue::Number`. Tags are discarded and
/// the tagged value is kept.
pub fn convert_value(value: SerdeValue) -> YamlValue {
    match value {
        SerdeValue::Null => YamlValue::Null,
        SerdeValue::Bool(b) => YamlValue::Boolean(b),
        SerdeValue::Number(n) => YamlValue::Number(n.as_f64().unwrap_or(0.0)),
        SerdeValue::String(s) => YamlValue::String(s),
        SerdeValue::Sequence(items) => {
            YamlValue::Sequence(items.into_iter().map(convert_value).collect())
        }
        SerdeValue::Mapping(map) => YamlValue::Object(convert_mapping(map)),
        SerdeValue::Tagged(tagged) => convert_value(tagged.value),
    }
}

fn convert_mapping(map: serde_yaml::Mapping) -> Mapping {
    let mut fields = Mapping::with_capacity(map.len());
    for (key, value) in map {
        match mapping_key(&key) {
            Some(name) => {
                fields.insert(name, convert_value(value));
            }
            None => warn!(key = ?key, "dropping mapping entry with a non-scalar key"),
        }
    }
    fields
}

/// Scalar keys are stringified; sequence and mapping keys have no string form.
fn mapping_key(key: &SerdeValue) -> Option<String> {
    match key {
        SerdeValue::String(s) => Some(s.clone()),
        SerdeValue::Number(n) => Some(n.to_string()),
        SerdeValue::Bool(b) => Some(b.to_string()),
        SerdeValue::Null => Some("null".to_string()),
        SerdeValue::Tagged(tagged) => mapping_key(&tagged.value),
        SerdeValue::Sequence(_) | SerdeValue::Mapping(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scalars() {
        let yaml = b"name: Alice\nage: 30\nratio: 0.5\nactive: true\nnothing: ~\n";
        let root = parse_yaml(yaml).unwrap();

        assert_eq!(root.len(), 5);
        assert_eq!(root["name"], YamlValue::String("Alice".to_string()));
        assert_eq!(root["age"], YamlValue::Number(30.0));
        assert_eq!(root["ratio"], YamlValue::Number(0.5));
        assert_eq!(root["active"], YamlValue::Boolean(true));
        assert_eq!(root["nothing"], YamlValue::Null);
    }

    #[test]
    fn test_parse_preserves_field_order() {
        let root = parse_yaml(b"zeta: 1\nalpha: 2\nmid: 3\n").unwrap();
        let keys: Vec<&str> = root.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_parse_nested() {
        let yaml = br#"
users:
  - name: Alice
    tags: [admin, dev]
  - name: Bob
    tags: []
"#;
        let root = parse_yaml(yaml).unwrap();

        match &root["users"] {
            YamlValue::Sequence(users) => {
                assert_eq!(users.len(), 2);
                match &users[0] {
                    YamlValue::Object(user) => {
                        assert_eq!(user["name"], YamlValue::String("Alice".to_string()));
                        assert!(matches!(&user["tags"], YamlValue::Sequence(t) if t.len() == 2));
                    }
                    _ => panic!("Expected object"),
                }
            }
            _ => panic!("Expected sequence"),
        }
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_yaml(b"").unwrap().is_empty());
        assert!(parse_yaml(b"# only a comment\n").unwrap().is_empty());
        assert!(parse_yaml(b"~\n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_non_mapping_root_is_error() {
        let err = parse_yaml(b"- a\n- b\n").unwrap_err();
        assert!(err.to_string().contains("found sequence"));

        assert!(parse_yaml(b"just a string\n").is_err());
    }

    #[test]
    fn test_parse_malformed_is_error() {
        assert!(parse_yaml(b"key: [unclosed\n").is_err());
        assert!(parse_yaml(b"a: b: c\n").is_err());
    }

    #[test]
    fn test_parse_lenient_falls_back_to_empty() {
        assert!(parse_yaml_lenient(b"key: [unclosed\n").is_empty());
        assert!(parse_yaml_lenient(b"- a\n").is_empty());
        assert_eq!(parse_yaml_lenient(b"a: 1\n").len(), 1);
    }

    #[test]
    fn test_parse_first_document_only() {
        let root = parse_yaml(b"---\nfirst: 1\n---\nsecond: 2\n").unwrap();
        assert!(root.contains_key("first"));
        assert!(!root.contains_key("second"));
    }

    #[test]
    fn test_parse_resolves_aliases() {
        let yaml = b"base: &b\n  port: 80\ncopy: *b\n";
        let root = parse_yaml(yaml).unwrap();
        assert_eq!(root["base"], root["copy"]);
    }

    #[test]
    fn test_parse_strips_tags() {
        let root = parse_yaml(b"secret: !vault hunter2\n").unwrap();
        assert_eq!(root["secret"], YamlValue::String("hunter2".to_string()));
    }

    #[test]
    fn test_parse_stringifies_scalar_keys() {
        let root = parse_yaml(b"1: one\ntrue: yes\n").unwrap();
        assert_eq!(root["1"], YamlValue::String("one".to_string()));
        assert_eq!(root["true"], YamlValue::String("yes".to_string()));
    }

    #[test]
    fn test_parse_drops_complex_keys() {
        let root = parse_yaml(b"? [a, b]\n: complex\nplain: ok\n").unwrap();
        assert_eq!(root.len(), 1);
        assert!(root.contains_key("plain"));
    }

    #[test]
    fn test_convert_numbers_are_f64() {
        let value: SerdeValue = serde_yaml::from_str("[1, -2, 3.25, -0.5]").unwrap();
        assert_eq!(
            convert_value(value),
            YamlValue::Sequence(vec![
                YamlValue::Number(1.0),
                YamlValue::Number(-2.0),
                YamlValue::Number(3.25),
                YamlValue::Number(-0.5),
            ])
        );
    }
}
