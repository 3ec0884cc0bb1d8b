//! File I/O for YAML documents.
//!
//! This module loads YAML from disk or stdin, with optional gzip
//! decompression, into a queryable document.

pub mod loader;
