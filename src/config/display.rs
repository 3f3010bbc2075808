//! Currency display settings.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{round_cents, Amount};

/// How amounts are rendered for people.
///
/// Amounts are always computed at full precision; rounding to cents happens
/// only here.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: char,
}

fn default_currency_symbol() -> String {
    "R$".into()
}

fn default_decimal_separator() -> char {
    ','
}

fn default_thousands_separator() -> char {
    '.'
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            decimal_separator: default_decimal_separator(),
            thousands_separator: default_thousands_separator(),
        }
    }
}

impl DisplayConfig {
    /// Format an amount with the currency symbol, e.g. `R$ 1.234,56`.
    #[must_use]
    pub fn money(&self, amount: Amount) -> String {
        format!("{} {}", self.currency_symbol, self.number(amount))
    }

    /// Format an amount without the currency symbol, e.g. `1.234,56`.
    #[must_use]
    pub fn number(&self, amount: Amount) -> String {
        let rounded = round_cents(amount);
        let digits = format!("{:.2}", rounded.abs());
        let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (position, digit) in whole.chars().enumerate() {
            if position > 0 && (whole.len() - position) % 3 == 0 {
                grouped.push(self.thousands_separator);
            }
            grouped.push(digit);
        }

        let sign = if rounded < Decimal::ZERO { "-" } else { "" };
        format!("{sign}{grouped}{}{cents}", self.decimal_separator)
    }

    /// Format a rate as a percentage, e.g. `17,5%`.
    #[must_use]
    pub fn percent(&self, rate: Decimal) -> String {
        let percent = (rate * Decimal::ONE_HUNDRED).normalize().to_string();
        format!("{}%", percent.replace('.', &self.decimal_separator.to_string()))
    }
}
