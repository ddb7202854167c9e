//! Core types and configuration for the beamer report.
//!
//! This crate provides shared types used across all other crates:
//! - Listing rows, currencies, and classified street sets
//! - Configuration structures
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{Error, ErrorCategory, Result};
pub use types::*;
