//! Monetary types for amounts and rates.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::error::PricingError;

/// Currency amount represented as a Decimal for precision.
pub type Amount = Decimal;

/// Fractional rate (0.175 = 17.5%) represented as a Decimal.
pub type Rate = Decimal;

/// Largest amount accepted as a target or profile parameter.
///
/// Keeps every intermediate of the gross-up formulas well inside
/// `Decimal`'s range.
pub const MAX_AMOUNT: Amount = dec!(1000000000000);

/// Parse a user-entered amount.
///
/// Accepts `.` or `,` as decimal separator. When both appear, the last one
/// is the decimal separator and the other is treated as a thousands
/// grouping mark (`1.234,56` and `1,234.56` both parse to `1234.56`).
/// Only digits, separators and a leading `-` are allowed; exponents,
/// underscores and a leading `+` are rejected.
pub fn parse_amount(input: &str) -> Result<Amount, PricingError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(PricingError::invalid_target("amount is empty"));
    }

    let normalized = match (trimmed.rfind('.'), trimmed.rfind(',')) {
        (Some(dot), Some(comma)) if comma > dot => trimmed.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => trimmed.replace(',', ""),
        (None, Some(_)) => trimmed.replace(',', "."),
        _ => trimmed.to_string(),
    };

    let not_a_number = || PricingError::invalid_target(format!("'{trimmed}' is not a number"));
    let digits = normalized.strip_prefix('-').unwrap_or(&normalized);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(not_a_number());
    }

    Decimal::from_str(&normalized).map_err(|_| not_a_number())
}

/// Round an amount to whole cents, half away from zero.
#[must_use]
pub fn round_cents(amount: Amount) -> Amount {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
