//! Data ingestion for the beamer report.
//!
//! This crate handles:
//! - Reading the property listing and tree classification files
//! - Multi-encoding decoding with ordered fallback
//! - Flattening the classification tree into street name sets

pub mod reader;
pub mod trees;

pub use reader::{read_properties, read_trees, FileReader};
pub use trees::{collect_leaf_keys, parse_trees};
