//! Decoded YAML documents.
//!
//! `node` defines the generic value tree and `parser` builds it from raw
//! YAML bytes.

pub mod node;
pub mod parser;
