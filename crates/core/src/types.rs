//! Core data types for the beamer report.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Column holding the property address.
pub const ADDRESS_COLUMN: &str = "Address";
/// Column holding the street name.
pub const STREET_NAME_COLUMN: &str = "Street Name";
/// Column holding the currency-prefixed price.
pub const PRICE_COLUMN: &str = "Price";

/// Currency symbols the price parser recognises.
pub const KNOWN_CURRENCIES: [char; 3] = ['$', '£', '€'];

/// One property record from the listing file, keyed by header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingRow {
    fields: BTreeMap<String, String>,
}

impl ListingRow {
    /// Build a row from header/value pairs.
    pub fn new<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Value for any column.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    #[inline]
    pub fn address(&self) -> Option<&str> {
        self.get(ADDRESS_COLUMN)
    }

    #[inline]
    pub fn street_name(&self) -> Option<&str> {
        self.get(STREET_NAME_COLUMN)
    }

    #[inline]
    pub fn price(&self) -> Option<&str> {
        self.get(PRICE_COLUMN)
    }

    /// Column names present in this row.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

/// A recognised currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    Dollar,
    Pound,
    Euro,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Dollar, Currency::Pound, Currency::Euro];

    /// The currency symbol.
    pub fn symbol(self) -> char {
        match self {
            Currency::Dollar => '$',
            Currency::Pound => '£',
            Currency::Euro => '€',
        }
    }

    /// Look up a currency by its symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.symbol() == symbol)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Street names flattened out of the classification tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreetClasses {
    /// Streets lined with short trees.
    pub short: BTreeSet<String>,
    /// Streets lined with tall trees.
    pub tall: BTreeSet<String>,
}
