//! Path resolution over a `YamlValue` tree.
//!
//! A path is a flat list of literal segments. Each segment is either a
//! sequence index (anything that parses as an integer) or an object field
//! name. Integer parsing always wins, so a field literally named `"0"` is not
//! reachable through this syntax.

use super::error::PathError;
use crate::document::node::YamlValue;

/// Walks `path` from `root` and returns the value it names.
///
/// An empty path returns `root`. A path that ends on a null value fails with
/// [`PathError::NilResult`].
///
/// # Example
///
/// ```
/// use yamlquery::document::parser::parse_yaml;
/// use yamlquery::document::node::YamlValue;
/// use yamlquery::query::resolve::resolve;
///
/// let root = YamlValue::Object(parse_yaml(b"items: [a, b]\n").unwrap());
/// let value = resolve(&root, &["items", "1"]).unwrap();
/// assert_eq!(value, &YamlValue::String("b".to_string()));
/// ```
pub fn resolve<'a, S: AsRef<str>>(
    root: &'a YamlValue,
    path: &[S],
) -> Result<&'a YamlValue, PathError> {
    let mut current = root;
    for segment in path {
        current = step(current, segment.as_ref())?;
    }

    if current.is_null() {
        let segment = path
            .last()
            .map(|s| s.as_ref().to_string())
            .unwrap_or_default();
        return Err(PathError::NilResult { segment });
    }
    Ok(current)
}

/// Applies a single segment to `node`.
pub fn step<'a>(node: &'a YamlValue, segment: &str) -> Result<&'a YamlValue, PathError> {
    match parse_index(segment) {
        Some(index) => sequence_element(node, index, segment),
        None => object_field(node, segment),
    }
}

/// Parses a segment as a sequence index.
///
/// Accepts an optional sign followed by decimal digits that fit in an `i64`;
/// everything else is treated as a field name.
pub fn parse_index(segment: &str) -> Option<i64> {
    segment.parse::<i64>().ok()
}

fn sequence_element<'a>(
    node: &'a YamlValue,
    index: i64,
    segment: &str,
) -> Result<&'a YamlValue, PathError> {
    let items = match node {
        YamlValue::Sequence(items) => items,
        _ => {
            return Err(PathError::NotAnArray {
                segment: segment.to_string(),
                found: node.clone(),
            })
        }
    };

    usize::try_from(index)
        .ok()
        .and_then(|idx| items.get(idx))
        .ok_or(PathError::IndexOutOfBounds {
            index,
            len: items.len(),
        })
}

fn object_field<'a>(node: &'a YamlValue, name: &str) -> Result<&'a YamlValue, PathError> {
    match node {
        YamlValue::Object(fields) => fields.get(name).ok_or_else(|| PathError::FieldNotFound {
            field: name.to_string(),
        }),
        _ => Err(PathError::NotAnObject {
            segment: name.to_string(),
            found: node.clone(),
        }),
    }
}
