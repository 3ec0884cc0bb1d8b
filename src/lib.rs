//! yamlquery - query decoded YAML documents by path.
//!
//! A document is decoded once into a tree of [`YamlValue`]s and wrapped in a
//! [`YamlQuery`]. Each query names a flat list of path segments and the type
//! it wants back:
//!
//! ```
//! use yamlquery::YamlQuery;
//!
//! let yq = YamlQuery::parse(b"name: Alice\nage: 41\nwork: [writing, editing]\n");
//!
//! assert_eq!(yq.string(&["name"]).unwrap(), "Alice");
//! assert_eq!(yq.integer(&["age"]).unwrap(), 41);
//! assert_eq!(yq.string(&["work", "1"]).unwrap(), "editing");
//! assert!(yq.string(&["email"]).is_err());
//! ```

pub mod config;
pub mod document;
pub mod file;
pub mod query;
pub mod render;

pub use document::node::{Mapping, YamlValue};
pub use query::{CoercionError, Expected, PathError, QueryError, SequenceError, YamlQuery};
