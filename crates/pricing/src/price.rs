//! Price string parsing.
//!
//! Prices in the listing look like `€ 23,456.78`. Parsing strips separators
//! and known currency symbols, then reads what remains as a decimal number.

use beamer_core::{Currency, Error, ListingRow, Result, KNOWN_CURRENCIES};

/// Convert a currency-prefixed price string to a number.
///
/// If the cleaned string does not parse, one leading character is dropped and
/// parsing retried. Success on the retry means the price carried a currency
/// symbol we do not recognise, reported as [`Error::UnknownCurrency`]; failure
/// means the price is simply malformed.
///
/// Numbers are read with `f64::from_str`, so digit-group underscores such as
/// `1_000` are malformed rather than accepted.
pub fn convert_price_to_float(price: &str) -> Result<f64> {
    if price.is_empty() {
        return Err(Error::bad_price(format!("Empty price: {price:?}")));
    }

    let stripped: String = price
        .chars()
        .filter(|&c| !matches!(c, ',' | ' ') && !KNOWN_CURRENCIES.contains(&c))
        .collect();
    let stripped = stripped.trim();

    if let Ok(value) = stripped.parse::<f64>() {
        return Ok(value);
    }

    let mut chars = stripped.chars();
    chars.next();
    if chars.as_str().parse::<f64>().is_ok() {
        return Err(Error::unknown_currency(price));
    }

    Err(Error::bad_price(format!("Bad price: {price:?}")))
}

/// Currency of the first row whose price starts with a known symbol.
pub fn first_currency(rows: &[ListingRow]) -> Result<Currency> {
    rows.iter()
        .filter_map(|row| row.price())
        .filter_map(|price| price.trim().chars().next())
        .find_map(Currency::from_symbol)
        .ok_or(Error::CurrencyNotFound)
}
