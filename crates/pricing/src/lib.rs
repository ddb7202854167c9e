//! Price engine for the beamer report.
//!
//! This crate provides:
//! - Currency-prefixed price parsing with unknown-currency detection
//! - Filtered price averaging
//! - Currency detection over listing rows
//! - Report formatting

pub mod average;
pub mod price;
pub mod report;

pub use average::average_price;
pub use price::{convert_price_to_float, first_currency};
pub use report::{format_amount, PriceReport};
