//! YAML file loading functionality.
//!
//! This module provides functions to load YAML documents from files or stdin
//! into a `YamlQuery`. Gzip-compressed input is decompressed transparently.

use crate::query::YamlQuery;
use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Gzip stream magic bytes.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Loads a YAML file from the filesystem into a `YamlQuery`.
///
/// Files ending in `.gz` are decompressed first. With `strict` set, malformed
/// YAML or a non-mapping document is an error; otherwise it yields an empty
/// document (see [`YamlQuery::parse`]).
///
/// # Examples
///
/// ```no_run
/// use yamlquery::file::loader::load_query_file;
///
/// let yq = load_query_file("config.yml", false).unwrap();
/// let name = yq.string(&["name"]).unwrap_or_default();
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file path does not exist or cannot be read
/// - A `.gz` file is not valid gzip data
/// - `strict` is set and the contents are not a YAML mapping
pub fn load_query_file<P: AsRef<Path>>(path: P, strict: bool) -> Result<YamlQuery> {
    let path_ref = path.as_ref();

    let bytes = if is_gzipped(path_ref) {
        read_gzipped_file(path_ref)?
    } else {
        fs::read(path_ref)
            .with_context(|| format!("Failed to read file {}", path_ref.display()))?
    };
    debug!(path = %path_ref.display(), bytes = bytes.len(), "loaded YAML source");

    decode(&bytes, strict)
        .with_context(|| format!("Failed to parse YAML in {}", path_ref.display()))
}

/// Loads a YAML document from standard input.
///
/// Input starting with the gzip magic bytes is decompressed first.
///
/// # Errors
///
/// This function will return an error if:
/// - Reading from stdin fails
/// - Gzip-looking input cannot be decompressed
/// - `strict` is set and the input is not a YAML mapping
pub fn load_query_from_stdin(strict: bool) -> Result<YamlQuery> {
    let mut buffer = Vec::new();
    std::io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;
    debug!(bytes = buffer.len(), "read YAML from stdin");

    load_query_from_bytes(&buffer, strict).context("Failed to parse YAML from stdin")
}

/// Decodes an in-memory buffer, decompressing it if it is gzip data.
pub fn load_query_from_bytes(bytes: &[u8], strict: bool) -> Result<YamlQuery> {
    if bytes.starts_with(&GZIP_MAGIC) {
        let decompressed = decompress_gzip_bytes(bytes)?;
        decode(&decompressed, strict)
    } else {
        decode(bytes, strict)
    }
}

fn decode(bytes: &[u8], strict: bool) -> Result<YamlQuery> {
    if strict {
        YamlQuery::try_parse(bytes)
    } else {
        Ok(YamlQuery::parse(bytes))
    }
}

/// Checks for a `.gz` extension, e.g. `config.yml.gz`.
fn is_gzipped(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false)
}

/// Reads and decompresses a gzipped file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The file is not valid gzip format (corrupted)
fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    use flate2::read::GzDecoder;

    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let mut decoder = GzDecoder::new(file);
    let mut content = Vec::new();
    decoder
        .read_to_end(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

fn decompress_gzip_bytes(bytes: &[u8]) -> Result<Vec<u8>> {
    use flate2::read::GzDecoder;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = Vec::new();
    decoder
        .read_to_end(&mut content)
        .context("Failed to decompress gzipped input")?;
    Ok(content)
}
