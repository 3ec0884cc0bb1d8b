//! Path queries with typed extraction over a decoded YAML document.
//!
//! A query is a flat list of literal segments. Segments that parse as
//! integers index into sequences; all others look up object fields.
//!
//! # Examples
//!
//! ```
//! use yamlquery::query::YamlQuery;
//!
//! let yq = YamlQuery::parse(b"servers:\n  - host: a.example\n    port: 8080\n");
//! assert_eq!(yq.string(&["servers", "0", "host"]).unwrap(), "a.example");
//! assert_eq!(yq.integer(&["servers", "0", "port"]).unwrap(), 8080);
//! ```

pub mod coerce;
pub mod engine;
pub mod error;
pub mod resolve;

pub use coerce::FromYaml;
pub use engine::YamlQuery;
pub use error::{CoercionError, Expected, PathError, QueryError, SequenceError};
pub use resolve::resolve;
