//! Average price over a filtered set of listing rows.

use beamer_core::{Error, ListingRow, Result, STREET_NAME_COLUMN};
use tracing::debug;

use crate::price::convert_price_to_float;

/// Mean price of the rows whose street name satisfies `included`.
///
/// Rows are scanned in source order and the first bad price aborts the scan.
/// A row missing the street name column is an input error; a matching row
/// without a price is a bad price.
pub fn average_price<F>(rows: &[ListingRow], mut included: F) -> Result<f64>
where
    F: FnMut(&str) -> bool,
{
    let mut sum = 0.0;
    let mut count = 0usize;

    for (index, row) in rows.iter().enumerate() {
        let street = row.street_name().ok_or_else(|| {
            Error::input(format!("row {index} has no {STREET_NAME_COLUMN:?} column"))
        })?;
        if !included(street) {
            continue;
        }
        let price = row
            .price()
            .ok_or_else(|| Error::bad_price(format!("Empty price: None (row {index})")))?;
        sum += convert_price_to_float(price)?;
        count += 1;
    }

    if count == 0 {
        return Err(Error::no_matching_rows(format!(
            "none of {} rows matched the street filter",
            rows.len()
        )));
    }

    debug!(matched = count, total = rows.len(), "averaged prices");
    Ok(sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn row(street: &str, price: &str) -> ListingRow {
        ListingRow::new([("Street Name", street), ("Price", price)])
    }

    fn sample_rows() -> Vec<ListingRow> {
        vec![
            row("S", "€ 100.11"),
            row("L", "€ 900.99"),
            row("S", "€ 300.33"),
        ]
    }

    #[test]
    fn test_average_of_matching_rows() {
        let rows = sample_rows();
        assert_relative_eq!(average_price(&rows, |s| s == "S").unwrap(), 200.22, epsilon = 1e-9);
        assert_relative_eq!(average_price(&rows, |s| s == "L").unwrap(), 900.99, epsilon = 1e-9);
    }

    #[test]
    fn test_average_with_set_membership() {
        let rows = sample_rows();
        let streets: std::collections::BTreeSet<String> =
            ["S".to_string(), "L".to_string()].into_iter().collect();
        let average = average_price(&rows, |s| streets.contains(s)).unwrap();
        assert_relative_eq!(average, (100.11 + 900.99 + 300.33) / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_unmatched_bad_prices_are_not_parsed() {
        let mut rows = sample_rows();
        rows.push(row("L", "garbage"));
        assert_relative_eq!(average_price(&rows, |s| s == "S").unwrap(), 200.22, epsilon = 1e-9);
    }

    #[test]
    fn test_bad_price_in_match_fails() {
        let mut rows = sample_rows();
        rows.push(row("S", "¥ 5"));
        let err = average_price(&rows, |s| s == "S").unwrap_err();
        assert!(matches!(err, Error::UnknownCurrency(_)));
    }

    #[test]
    fn test_no_matching_rows() {
        let err = average_price(&sample_rows(), |s| s == "X").unwrap_err();
        assert!(matches!(err, Error::NoMatchingRows(_)));

        let err = average_price(&[], |_| true).unwrap_err();
        assert!(matches!(err, Error::NoMatchingRows(_)));
    }

    #[test]
    fn test_missing_columns() {
        let rows = vec![ListingRow::new([("Price", "€ 1")])];
        assert!(matches!(
            average_price(&rows, |_| true),
            Err(Error::Input(_))
        ));

        let rows = vec![ListingRow::new([("Street Name", "S")])];
        assert!(matches!(
            average_price(&rows, |_| true),
            Err(Error::BadPriceFormat(_))
        ));
    }
}
