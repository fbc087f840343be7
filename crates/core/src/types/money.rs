//! Monetary amounts using decimal arithmetic.

use core::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A monetary amount with its currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Amount in the currency's standard unit (e.g., złoty, not grosze).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: String,
}

impl Money {
    /// Create a new amount.
    #[must_use]
    pub fn new(amount: Decimal, currency_code: impl Into<String>) -> Self {
        Self {
            amount,
            currency_code: currency_code.into(),
        }
    }

    /// The amount rounded to two decimal places, without currency.
    ///
    /// Midpoints round away from zero.
    #[must_use]
    pub fn amount_display(&self) -> String {
        let rounded = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{rounded:.2}")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount_display(), self.currency_code)
    }
}

/// Price range across a product's variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Minimum price among all variants.
    pub min_variant_price: Money,
    /// Maximum price among all variants.
    pub max_variant_price: Money,
}

impl PriceRange {
    /// Whether every variant costs the same.
    #[must_use]
    pub fn is_single_price(&self) -> bool {
        self.min_variant_price.amount == self.max_variant_price.amount
    }
}

impl fmt::Display for PriceRange {
    /// Formats as `99.00 PLN`, or `99.00 - 149.00 PLN` when prices differ.
    ///
    /// The currency of the minimum price is used for the whole range.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let min = &self.min_variant_price;
        if self.is_single_price() {
            write!(f, "{min}")
        } else {
            write!(
                f,
                "{} - {} {}",
                min.amount_display(),
                self.max_variant_price.amount_display(),
                min.currency_code
            )
        }
    }
}
