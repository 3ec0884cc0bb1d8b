//! The query engine: one decoded document plus typed lookups against it.

use super::coerce::{self, FromYaml};
use super::error::{Result, SequenceError};
use super::resolve::resolve;
use crate::document::node::{Mapping, YamlValue};
use crate::document::parser::{parse_yaml, parse_yaml_lenient};

/// A decoded YAML document that can be queried by path.
///
/// The document is never modified after construction, so a `YamlQuery` can
/// be shared between threads and queried concurrently.
///
/// # Example
///
/// ```
/// use yamlquery::query::YamlQuery;
///
/// let yq = YamlQuery::parse(b"foo: bar\nnum: 6\nwork: [a, b]\n");
/// assert_eq!(yq.string(&["foo"]).unwrap(), "bar");
/// assert_eq!(yq.integer(&["num"]).unwrap(), 6);
/// assert_eq!(yq.strings(&["work"]).unwrap(), vec!["a", "b"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct YamlQuery {
    root: YamlValue,
}

impl YamlQuery {
    /// Wraps an already decoded root mapping.
    pub fn new(root: Mapping) -> Self {
        Self {
            root: YamlValue::Object(root),
        }
    }

    /// Decodes `bytes` as YAML.
    ///
    /// Malformed input, or a document whose top level is not a mapping,
    /// produces an empty document rather than an error. Use
    /// [`YamlQuery::try_parse`] to see the decode failure.
    pub fn parse(bytes: &[u8]) -> Self {
        Self::new(parse_yaml_lenient(bytes))
    }

    /// Decodes `bytes` as YAML, failing on malformed or non-mapping input.
    pub fn try_parse(bytes: &[u8]) -> anyhow::Result<Self> {
        parse_yaml(bytes).map(Self::new)
    }

    /// Returns the root value, always a `YamlValue::Object`.
    pub fn root(&self) -> &YamlValue {
        &self.root
    }

    /// Returns the value at `path` without coercion.
    pub fn value<S: AsRef<str>>(&self, path: &[S]) -> Result<&YamlValue> {
        Ok(resolve(&self.root, path)?)
    }

    /// Resolves `path` and converts the value with `T::from_yaml`.
    pub fn get<T: FromYaml, S: AsRef<str>>(&self, path: &[S]) -> Result<T> {
        let value = resolve(&self.root, path)?;
        Ok(T::from_yaml(value)?)
    }

    pub fn string<S: AsRef<str>>(&self, path: &[S]) -> Result<String> {
        self.get(path)
    }

    pub fn bool<S: AsRef<str>>(&self, path: &[S]) -> Result<bool> {
        self.get(path)
    }

    /// Extracts a number; string values holding a float literal are parsed.
    pub fn number<S: AsRef<str>>(&self, path: &[S]) -> Result<f64> {
        self.get(path)
    }

    /// Extracts an integer, truncating numbers toward zero.
    pub fn integer<S: AsRef<str>>(&self, path: &[S]) -> Result<i64> {
        self.get(path)
    }

    pub fn object<S: AsRef<str>>(&self, path: &[S]) -> Result<Mapping> {
        self.get(path)
    }

    pub fn sequence<S: AsRef<str>>(&self, path: &[S]) -> Result<Vec<YamlValue>> {
        self.get(path)
    }

    /// Resolves `path` to a sequence and converts every element.
    ///
    /// Conversion stops at the first element that fails. The returned error
    /// then carries a result vector as long as the sequence, with every slot
    /// from the failing one onwards left at `T::default()`.
    ///
    /// # Example
    ///
    /// ```
    /// use yamlquery::query::YamlQuery;
    ///
    /// let yq = YamlQuery::parse(b"mixed: [a, b, 3]\n");
    /// let err = yq.sequence_of::<String, _>(&["mixed"]).unwrap_err();
    /// assert_eq!(err.index, Some(2));
    /// assert_eq!(err.partial, vec!["a", "b", ""]);
    /// ```
    pub fn sequence_of<T: FromYaml, S: AsRef<str>>(
        &self,
        path: &[S],
    ) -> std::result::Result<Vec<T>, SequenceError<T>> {
        let value = resolve(&self.root, path).map_err(SequenceError::<T>::unresolved)?;
        let items = coerce::items(value).map_err(SequenceError::<T>::unresolved)?;

        let mut converted = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match T::from_yaml(item) {
                Ok(value) => converted.push(value),
                Err(err) => {
                    converted.resize_with(items.len(), T::default);
                    return Err(SequenceError {
                        partial: converted,
                        index: Some(index),
                        error: err.into(),
                    });
                }
            }
        }
        Ok(converted)
    }

    pub fn strings<S: AsRef<str>>(
        &self,
        path: &[S],
    ) -> std::result::Result<Vec<String>, SequenceError<String>> {
        self.sequence_of(path)
    }

    pub fn integers<S: AsRef<str>>(
        &self,
        path: &[S],
    ) -> std::result::Result<Vec<i64>, SequenceError<i64>> {
        self.sequence_of(path)
    }

    pub fn numbers<S: AsRef<str>>(
        &self,
        path: &[S],
    ) -> std::result::Result<Vec<f64>, SequenceError<f64>> {
        self.sequence_of(path)
    }

    pub fn bools<S: AsRef<str>>(
        &self,
        path: &[S],
    ) -> std::result::Result<Vec<bool>, SequenceError<bool>> {
        self.sequence_of(path)
    }

    pub fn objects<S: AsRef<str>>(
        &self,
        path: &[S],
    ) -> std::result::Result<Vec<Mapping>, SequenceError<Mapping>> {
        self.sequence_of(path)
    }

    pub fn sequences<S: AsRef<str>>(
        &self,
        path: &[S],
    ) -> std::result::Result<Vec<Vec<YamlValue>>, SequenceError<Vec<YamlValue>>> {
        self.sequence_of(path)
    }

    /// Alias for [`YamlQuery::sequences`].
    pub fn matrix_2d<S: AsRef<str>>(
        &self,
        path: &[S],
    ) -> std::result::Result<Vec<Vec<YamlValue>>, SequenceError<Vec<YamlValue>>> {
        self.sequences(path)
    }
}

impl Default for YamlQuery {
    fn default() -> Self {
        Self::new(Mapping::new())
    }
}

impl From<Mapping> for YamlQuery {
    fn from(root: Mapping) -> Self {
        Self::new(root)
    }
}
