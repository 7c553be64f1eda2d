//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are displayed the way the `ru-RU` locale formats them: thousands
//! grouped with a non-breaking space, a comma before any fractional part, and
//! the currency symbol after the amount (`8 999 ₽`).

use core::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Thousands separator used by the `ru-RU` locale (U+00A0).
const GROUP_SEPARATOR: char = '\u{a0}';

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (roubles, not kopecks).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a whole-rouble price.
    #[must_use]
    pub fn rub(amount: i64) -> Self {
        Self::new(Decimal::from(amount), CurrencyCode::RUB)
    }

    /// Apply a percentage discount, rounding to whole currency units.
    ///
    /// Percentages above 100 are clamped to 100.
    #[must_use]
    pub fn discounted(&self, percent: u8) -> Self {
        let keep = Decimal::from(100 - percent.min(100));
        let amount = (self.amount * keep / Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        Self::new(amount, self.currency_code)
    }

    /// Multiply by a quantity (order totals).
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self::new(self.amount * Decimal::from(quantity), self.currency_code)
    }

    /// Format the amount without the currency symbol (`8 999`, `1 234,5`).
    #[must_use]
    pub fn format_amount(&self) -> String {
        let rounded = self.amount.round_dp(2).normalize();
        let whole = rounded.trunc().abs().normalize().to_string();

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, c) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(GROUP_SEPARATOR);
            }
            grouped.push(c);
        }

        let fraction = rounded.fract().abs().normalize();
        if !fraction.is_zero() {
            let digits = fraction.to_string();
            grouped.push(',');
            grouped.push_str(digits.trim_start_matches("0."));
        }

        if rounded.is_sign_negative() && !rounded.is_zero() {
            grouped.insert(0, '-');
        }
        grouped
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.format_amount(), self.currency_code.symbol())
    }
}

/// ISO 4217 currency codes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum CurrencyCode {
    #[default]
    RUB,
    USD,
    EUR,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::RUB => "₽",
            Self::USD => "$",
            Self::EUR => "€",
        }
    }
}
