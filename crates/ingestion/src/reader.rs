//! Listing and classification file reading.
//!
//! Files are read fully into memory, then decoded by trying each candidate
//! encoding in order. The first encoding that decodes without malformed
//! sequences wins; a failure under one encoding is never final on its own.

use std::path::Path;

use beamer_core::{Config, Error, ListingRow, Result};
use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use serde_json::Value;
use tracing::{debug, info, warn};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Bytes with no assigned character in windows-1252. encoding_rs maps them to
/// C1 controls, so they are rejected here to keep the decode strict.
const WINDOWS_1252_UNDEFINED: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

/// Reader for the listing (CSV) and classification (JSON) files.
#[derive(Debug, Clone)]
pub struct FileReader {
    /// Candidate encodings, most preferred first.
    encodings: Vec<&'static Encoding>,
}

impl Default for FileReader {
    fn default() -> Self {
        Self {
            encodings: vec![UTF_8, WINDOWS_1252],
        }
    }
}

impl FileReader {
    /// Create a reader from encoding labels such as `"utf-8"` or `"windows-1252"`.
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Result<Self> {
        if labels.is_empty() {
            return Err(Error::config("at least one encoding is required"));
        }
        let encodings = labels
            .iter()
            .map(|label| {
                let label = label.as_ref();
                Encoding::for_label(label.as_bytes())
                    .ok_or_else(|| Error::config(format!("unknown encoding: {label:?}")))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { encodings })
    }

    /// Create a reader from the configured encoding list.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::from_labels(config.encodings.as_slice())
    }

    /// Names of the candidate encodings, in the order they are tried.
    pub fn encoding_names(&self) -> Vec<&'static str> {
        self.encodings.iter().map(|e| e.name()).collect()
    }

    /// Read a CSV listing file into rows keyed by the header row, in source order.
    pub fn read_properties(&self, path: impl AsRef<Path>) -> Result<Vec<ListingRow>> {
        let path = path.as_ref();
        let text = self.read_text(path, "csv")?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());
        let headers = reader.headers()?.clone();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(ListingRow::new(headers.iter().zip(record.iter())));
        }

        info!(path = %path.display(), rows = rows.len(), "read property listing");
        Ok(rows)
    }

    /// Read a JSON classification file.
    pub fn read_trees(&self, path: impl AsRef<Path>) -> Result<Value> {
        let path = path.as_ref();
        let text = self.read_text(path, "json")?;
        let tree = serde_json::from_str(&text)?;
        info!(path = %path.display(), "read tree classification");
        Ok(tree)
    }

    /// Read and decode a whole file.
    fn read_text(&self, path: &Path, kind: &str) -> Result<String> {
        if path.as_os_str().is_empty() {
            return Err(Error::input(format!("Empty path to {kind} file: {path:?}")));
        }

        let bytes = std::fs::read(path).map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
            _ => Error::Io(err),
        })?;

        for &encoding in &self.encodings {
            let input = if encoding == UTF_8 {
                bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes)
            } else {
                &bytes[..]
            };
            let decoded = if encoding == WINDOWS_1252
                && input.iter().any(|b| WINDOWS_1252_UNDEFINED.contains(b))
            {
                None
            } else {
                encoding.decode_without_bom_handling_and_without_replacement(input)
            };
            match decoded {
                Some(text) => {
                    debug!(path = %path.display(), encoding = encoding.name(), "decoded file");
                    return Ok(text.into_owned());
                }
                None => {
                    warn!(path = %path.display(), encoding = encoding.name(), "decode failed, trying next encoding");
                }
            }
        }

        Err(Error::Decode {
            path: path.to_path_buf(),
        })
    }
}

/// Read a CSV listing file with the default encodings.
pub fn read_properties(path: impl AsRef<Path>) -> Result<Vec<ListingRow>> {
    FileReader::default().read_properties(path)
}

/// Read a JSON classification file with the default encodings.
pub fn read_trees(path: impl AsRef<Path>) -> Result<Value> {
    FileReader::default().read_trees(path)
}
