//! Error types for the beamer report.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Broad error category, used by the command line to pick an exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad input: empty paths, malformed prices, undecodable or malformed files.
    Input,
    /// A path that does not resolve to a file.
    FileNotFound,
    /// Anything else, including missing classification branches.
    Unexpected,
}

/// Main error type for the beamer report.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input (empty path, malformed file shape, missing column).
    #[error("Input error: {0}")]
    Input(String),

    /// Price string that does not reduce to a number.
    #[error("{0}")]
    BadPriceFormat(String),

    /// Price with a numeric body behind an unrecognised currency symbol.
    #[error("Unknown currency in price: {0:?}")]
    UnknownCurrency(String),

    /// None of the candidate encodings could decode the file.
    #[error("Could not decode {} with any known encoding", .path.display())]
    Decode { path: PathBuf },

    /// File does not exist.
    #[error("No such file: {}", .0.display())]
    FileNotFound(PathBuf),

    /// No listing row carries a recognised currency symbol.
    #[error("Not found: no known currency symbol in any price")]
    CurrencyNotFound,

    /// Classification data lacks a required top-level branch.
    #[error("Missing classification branch: {0:?}")]
    MissingBranch(String),

    /// A filter matched no listing rows, so no average exists.
    #[error("No matching rows: {0}")]
    NoMatchingRows(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV parse error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Create an input error.
    pub fn input(msg: impl Into<String>) -> Self {
        Error::Input(msg.into())
    }

    /// Create a bad price format error.
    pub fn bad_price(msg: impl Into<String>) -> Self {
        Error::BadPriceFormat(msg.into())
    }

    /// Create an unknown currency error carrying the original price string.
    pub fn unknown_currency(price: impl Into<String>) -> Self {
        Error::UnknownCurrency(price.into())
    }

    /// Create a no matching rows error.
    pub fn no_matching_rows(msg: impl Into<String>) -> Self {
        Error::NoMatchingRows(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// True for both price format variants; an unknown currency is a bad price too.
    pub fn is_price_format(&self) -> bool {
        matches!(self, Error::BadPriceFormat(_) | Error::UnknownCurrency(_))
    }

    /// Category used at the recovery boundary.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Input(_)
            | Error::BadPriceFormat(_)
            | Error::UnknownCurrency(_)
            | Error::Decode { .. }
            | Error::CurrencyNotFound
            | Error::Config(_)
            | Error::Json(_)
            | Error::Csv(_) => ErrorCategory::Input,
            Error::FileNotFound(_) => ErrorCategory::FileNotFound,
            Error::Io(err) if err.kind() == std::io::ErrorKind::NotFound => {
                ErrorCategory::FileNotFound
            }
            Error::MissingBranch(_) | Error::NoMatchingRows(_) | Error::Io(_) => {
                ErrorCategory::Unexpected
            }
        }
    }
}
