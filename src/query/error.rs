//! Error types for path resolution and value coercion.

use crate::document::node::YamlValue;
use std::fmt;
use thiserror::Error;

/// Crate-local result type for single-value queries.
pub type Result<T> = std::result::Result<T, QueryError>;

/// Failure while walking a path through the value tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    /// An index segment was applied to something other than a sequence.
    #[error("array index \"{segment}\" on non-array {found}")]
    NotAnArray {
        /// The index segment as written.
        segment: String,
        /// Value the segment was applied to.
        found: YamlValue,
    },
    /// A field segment was applied to something other than an object.
    #[error("object lookup \"{segment}\" on non-object {found}")]
    NotAnObject {
        /// The field segment as written.
        segment: String,
        /// Value the segment was applied to.
        found: YamlValue,
    },
    /// Index was negative or past the end of the sequence.
    #[error("array index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds {
        /// Parsed index.
        index: i64,
        /// Length of the sequence.
        len: usize,
    },
    /// Object has no field with this name.
    #[error("object does not contain field \"{field}\"")]
    FieldNotFound {
        /// Missing field name.
        field: String,
    },
    /// The path resolved, but to a null value.
    #[error("nil value found at \"{segment}\"")]
    NilResult {
        /// Last segment of the path.
        segment: String,
    },
}

/// The static type a coercion was asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    String,
    Boolean,
    Number,
    Integer,
    Object,
    Sequence,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Expected::String => "string",
            Expected::Boolean => "boolean",
            Expected::Number => "numeric",
            Expected::Integer => "integer",
            Expected::Object => "object",
            Expected::Sequence => "sequence",
        };
        write!(f, "{}", name)
    }
}

/// A resolved value could not be converted to the requested type.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("expected {expected} value, got {} \"{found}\"", .found.type_name())]
pub struct CoercionError {
    /// Requested type.
    pub expected: Expected,
    /// Value that was found instead.
    pub found: YamlValue,
}

impl CoercionError {
    pub(crate) fn new(expected: Expected, found: &YamlValue) -> Self {
        Self {
            expected,
            found: found.clone(),
        }
    }
}

/// Any failure of a typed query.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error(transparent)]
    Path(#[from] PathError),
    #[error(transparent)]
    Coercion(#[from] CoercionError),
}

impl QueryError {
    /// Returns the path error, if resolution failed.
    pub fn as_path(&self) -> Option<&PathError> {
        match self {
            QueryError::Path(err) => Some(err),
            QueryError::Coercion(_) => None,
        }
    }

    /// Returns the coercion error, if the value had the wrong type.
    pub fn as_coercion(&self) -> Option<&CoercionError> {
        match self {
            QueryError::Coercion(err) => Some(err),
            QueryError::Path(_) => None,
        }
    }
}

/// Failure of a typed-sequence query, carrying the partially filled result.
///
/// `partial` always has the length of the resolved sequence when an element
/// failed: slots before `index` hold converted values, the failing slot and
/// everything after it hold `T::default()`. When the path itself could not be
/// resolved to a sequence, `partial` is empty and `index` is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceError<T> {
    /// Converted values, zero-filled from the failing element onwards.
    pub partial: Vec<T>,
    /// Position of the element that failed coercion.
    pub index: Option<usize>,
    /// Underlying failure.
    pub error: QueryError,
}

impl<T> SequenceError<T> {
    pub(crate) fn unresolved(error: impl Into<QueryError>) -> Self {
        Self {
            partial: Vec::new(),
            index: None,
            error: error.into(),
        }
    }

    /// Splits the error into the partial result and the underlying failure.
    pub fn into_parts(self) -> (Vec<T>, QueryError) {
        (self.partial, self.error)
    }
}

impl<T> fmt::Display for SequenceError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(f, "element {}: {}", index, self.error),
            None => write!(f, "{}", self.error),
        }
    }
}

impl<T: fmt::Debug> std::error::Error for SequenceError<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_error_messages() {
        let err = PathError::IndexOutOfBounds { index: 5, len: 2 };
        assert_eq!(
            err.to_string(),
            "array index 5 out of bounds for array of length 2"
        );

        let err = PathError::NotAnObject {
            segment: "name".to_string(),
            found: YamlValue::Number(3.0),
        };
        assert_eq!(err.to_string(), "object lookup \"name\" on non-object 3");
    }

    #[test]
    fn test_coercion_error_message() {
        let err = CoercionError::new(Expected::String, &YamlValue::Number(3.0));
        assert_eq!(err.to_string(), "expected string value, got number \"3\"");
    }

    #[test]
    fn test_query_error_accessors() {
        let err: QueryError = PathError::FieldNotFound {
            field: "x".to_string(),
        }
        .into();
        assert!(err.as_path().is_some());
        assert!(err.as_coercion().is_none());
        assert_eq!(err.to_string(), "object does not contain field \"x\"");
    }

    #[test]
    fn test_sequence_error_display_and_source() {
        use std::error::Error as _;

        let err = SequenceError {
            partial: vec![1_i64, 0],
            index: Some(1),
            error: CoercionError::new(Expected::Integer, &YamlValue::Boolean(true)).into(),
        };
        assert_eq!(
            err.to_string(),
            "element 1: expected integer value, got boolean \"true\""
        );
        assert!(err.source().is_some());

        let (partial, inner) = err.into_parts();
        assert_eq!(partial, vec![1, 0]);
        assert!(inner.as_coercion().is_some());
    }
}
