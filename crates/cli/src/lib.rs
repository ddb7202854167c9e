//! Report assembly and exit status mapping for the `beamer` binary.

use std::path::{Path, PathBuf};

use beamer_core::{config, Config, Error, ErrorCategory, Result};
use beamer_ingestion::{parse_trees, FileReader};
use beamer_pricing::{average_price, first_currency, PriceReport};
use tracing::info;

/// Successful termination (`EX_OK`).
pub const EXIT_OK: u8 = 0;
/// Input data was incorrect in some way (`EX_DATAERR`).
pub const EXIT_DATA_ERROR: u8 = 65;
/// Internal software error (`EX_SOFTWARE`).
pub const EXIT_SOFTWARE: u8 = 70;
/// An input file does not exist (`EX_OSFILE`).
pub const EXIT_FILE_NOT_FOUND: u8 = 72;

/// Read both files and compute the short and tall street averages.
pub fn generate_report(properties: impl AsRef<Path>, trees: impl AsRef<Path>) -> Result<PriceReport> {
    generate_report_with(&FileReader::default(), properties, trees)
}

/// Same as [`generate_report`], decoding files with the given reader.
pub fn generate_report_with(
    reader: &FileReader,
    properties: impl AsRef<Path>,
    trees: impl AsRef<Path>,
) -> Result<PriceReport> {
    let tree = reader.read_trees(trees)?;
    let classes = parse_trees(&tree)?;
    let rows = reader.read_properties(properties)?;

    let short_average = average_price(&rows, |street| classes.short.contains(street))?;
    let tall_average = average_price(&rows, |street| classes.tall.contains(street))?;
    let currency = first_currency(&rows)?;

    info!(%currency, short_average, tall_average, "computed report");
    Ok(PriceReport {
        currency,
        short_average,
        tall_average,
    })
}

/// Generate a report from a configuration.
pub fn run(config: &Config) -> Result<PriceReport> {
    let reader = FileReader::from_config(config)?;
    generate_report_with(&reader, &config.properties_path, &config.trees_path)
}

/// Process exit status for an error.
pub fn exit_code(error: &Error) -> u8 {
    match error.category() {
        ErrorCategory::Input => EXIT_DATA_ERROR,
        ErrorCategory::FileNotFound => EXIT_FILE_NOT_FOUND,
        ErrorCategory::Unexpected => EXIT_SOFTWARE,
    }
}

/// Configuration with the default data files resolved beside the executable.
pub fn default_config() -> Config {
    Config {
        properties_path: beside_executable(config::DEFAULT_PROPERTIES_FILE),
        trees_path: beside_executable(config::DEFAULT_TREES_FILE),
        ..Config::default()
    }
}

/// Combine defaults, an optional configuration file, and command line paths.
///
/// Paths given on the command line win over the configuration file, which wins
/// over the defaults beside the executable.
pub fn load_config(
    config_file: Option<&Path>,
    properties: Option<PathBuf>,
    trees: Option<PathBuf>,
) -> Result<Config> {
    let mut config = match config_file {
        Some(path) => default_config().overlay_file(path)?,
        None => default_config(),
    };
    if let Some(path) = properties {
        config.properties_path = path;
    }
    if let Some(path) = trees {
        config.trees_path = path;
    }
    Ok(config)
}

/// Resolve a relative default file name against the directory holding the executable.
pub fn beside_executable(file_name: impl AsRef<Path>) -> PathBuf {
    let file_name = file_name.as_ref();
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(file_name)))
        .unwrap_or_else(|| file_name.to_path_buf())
}
