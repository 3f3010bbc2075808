//! Marketplace profiles declared in configuration.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{Amount, FeeProfile, Rate, ShippingRule};

/// Registry-wide settings.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryConfig {
    /// Start from the built-in marketplaces before applying `[[marketplaces]]`.
    #[serde(default = "default_include_builtin")]
    pub include_builtin: bool,
}

fn default_include_builtin() -> bool {
    true
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            include_builtin: default_include_builtin(),
        }
    }
}

/// One `[[marketplaces]]` entry.
///
/// Which optional tables are present decides the pricing algorithm: a
/// `commission_cap` makes a capped-commission profile, a `[marketplaces.shipping]`
/// table a threshold-shipping profile, neither a flat-commission profile.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarketplaceConfig {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rules: String,
    pub commission_rate: Rate,
    #[serde(default)]
    pub fixed_fee: Amount,
    #[serde(default)]
    pub commission_cap: Option<Amount>,
    #[serde(default)]
    pub shipping: Option<ShippingRule>,
}

impl MarketplaceConfig {
    /// Build the (not yet validated) fee profile this entry declares.
    #[must_use]
    pub fn to_profile(&self) -> FeeProfile {
        let mut profile = FeeProfile::new(self.id.as_str(), self.commission_rate)
            .with_fixed_fee(self.fixed_fee)
            .with_display(
                self.name.clone().unwrap_or_else(|| self.id.clone()),
                self.description.clone(),
                self.rules.clone(),
            );
        if let Some(cap) = self.commission_cap {
            profile = profile.with_commission_cap(cap);
        }
        if let Some(rule) = self.shipping {
            profile = profile.with_shipping(rule);
        }
        profile
    }
}

impl Default for MarketplaceConfig {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: None,
            description: String::new(),
            rules: String::new(),
            commission_rate: Decimal::ZERO,
            fixed_fee: Decimal::ZERO,
            commission_cap: None,
            shipping: None,
        }
    }
}
