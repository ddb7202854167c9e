//! Configuration for the beamer report.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default listing file name.
pub const DEFAULT_PROPERTIES_FILE: &str = "dublin-property.csv";

/// Default classification file name.
pub const DEFAULT_TREES_FILE: &str = "dublin-trees.json";

/// Report configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the property listing (CSV).
    pub properties_path: PathBuf,
    /// Path to the street classification (JSON).
    pub trees_path: PathBuf,
    /// Encoding labels tried in order when decoding input files.
    pub encodings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            properties_path: PathBuf::from(DEFAULT_PROPERTIES_FILE),
            trees_path: PathBuf::from(DEFAULT_TREES_FILE),
            encodings: vec!["utf-8".to_string(), "windows-1252".to_string()],
        }
    }
}

/// Fields present in a configuration file; absent ones keep the base value.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    properties_path: Option<PathBuf>,
    trees_path: Option<PathBuf>,
    encodings: Option<Vec<String>>,
}

impl Config {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::default().overlay_file(path)
    }

    /// Replace only the fields present in the JSON file at `path`.
    pub fn overlay_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
            _ => Error::Io(err),
        })?;
        let file: ConfigFile = serde_json::from_str(&text)
            .map_err(|err| Error::config(format!("{}: {}", path.display(), err)))?;

        if let Some(properties_path) = file.properties_path {
            self.properties_path = properties_path;
        }
        if let Some(trees_path) = file.trees_path {
            self.trees_path = trees_path;
        }
        if let Some(encodings) = file.encodings {
            self.encodings = encodings;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.properties_path, PathBuf::from("dublin-property.csv"));
        assert_eq!(config.trees_path, PathBuf::from("dublin-trees.json"));
        assert_eq!(config.encodings, vec!["utf-8", "windows-1252"]);
    }

    #[test]
    fn test_partial_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"trees_path": "other.json"}}"#).unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.trees_path, PathBuf::from("other.json"));
        assert_eq!(config.properties_path, PathBuf::from(DEFAULT_PROPERTIES_FILE));
    }

    #[test]
    fn test_overlay_keeps_base_paths() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"encodings": ["latin1"]}}"#).unwrap();

        let base = Config {
            properties_path: PathBuf::from("/opt/beamer/dublin-property.csv"),
            trees_path: PathBuf::from("/opt/beamer/dublin-trees.json"),
            ..Config::default()
        };
        let config = base.clone().overlay_file(file.path()).unwrap();
        assert_eq!(config.properties_path, base.properties_path);
        assert_eq!(config.trees_path, base.trees_path);
        assert_eq!(config.encodings, vec!["latin1"]);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"tree_path": "typo.json"}}"#).unwrap();

        assert!(matches!(Config::from_file(file.path()), Err(Error::Config(_))));
    }

    #[test]
    fn test_missing_config_file() {
        let err = Config::from_file("/nonexistent/beamer.json").unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }
}
