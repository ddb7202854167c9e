//! Report formatting.

use std::fmt;

use beamer_core::Currency;

/// Average prices for both street classes, in one currency.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceReport {
    pub currency: Currency,
    pub short_average: f64,
    pub tall_average: f64,
}

impl fmt::Display for PriceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Price average among short trees: {} {}",
            self.currency,
            format_amount(self.short_average)
        )?;
        write!(
            f,
            "Price average among  tall trees: {} {}",
            self.currency,
            format_amount(self.tall_average)
        )
    }
}

/// Format an amount with thousands separators and two decimal places.
pub fn format_amount(amount: f64) -> String {
    if amount.is_nan() {
        return "nan".to_string();
    }
    if amount.is_infinite() {
        return if amount < 0.0 { "-inf" } else { "inf" }.to_string();
    }

    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount.is_sign_negative() { "-" } else { "" };
    format!("{sign}{grouped}.{cents}")
}
