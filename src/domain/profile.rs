//! Marketplace fee profiles and the policy shapes derived from them.
//!
//! - [`FeeProfile`] - Parameters one marketplace charges a seller, plus display metadata
//! - [`ShippingRule`] - Free-shipping threshold and the shipping cost absorbed above it
//! - [`FeePolicy`] - Closed set of pricing algorithms a profile maps onto
//!
//! The policy is derived from which optional parameters a profile declares,
//! never from its identifier, so new marketplaces only need a new profile.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::PricingError;
use super::id::MarketplaceId;
use super::money::{Amount, Rate, MAX_AMOUNT};

/// Free-shipping rule: at or above the threshold the seller ships for free
/// and absorbs the estimated shipping cost instead of the fixed fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingRule {
    pub free_shipping_threshold: Amount,
    pub estimated_shipping_cost: Amount,
}

/// Fee parameters for one marketplace.
///
/// Optional parameters that are absent mean "rule does not apply", which is
/// different from a rule with a zero amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeeProfile {
    id: MarketplaceId,
    name: String,
    description: String,
    rules: String,
    commission_rate: Rate,
    fixed_fee: Amount,
    #[serde(skip_serializing_if = "Option::is_none")]
    commission_cap: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shipping: Option<ShippingRule>,
}

/// The pricing algorithm a profile resolves with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeePolicy {
    /// Percentage commission with an absolute ceiling, plus a fixed fee.
    CappedCommission {
        commission_rate: Rate,
        fixed_fee: Amount,
        commission_cap: Amount,
    },
    /// Fixed fee below the free-shipping threshold, shipping subsidy at or above it.
    ThresholdShipping {
        commission_rate: Rate,
        fixed_fee: Amount,
        shipping: ShippingRule,
    },
    /// Uncapped percentage commission, plus a fixed fee that is usually zero.
    FlatCommission {
        commission_rate: Rate,
        fixed_fee: Amount,
    },
}

impl FeePolicy {
    /// Stable name of the policy shape.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CappedCommission { .. } => "capped_commission",
            Self::ThresholdShipping { .. } => "threshold_shipping",
            Self::FlatCommission { .. } => "flat_commission",
        }
    }

    /// Commission rate shared by every shape.
    #[must_use]
    pub const fn commission_rate(&self) -> Rate {
        match *self {
            Self::CappedCommission {
                commission_rate, ..
            }
            | Self::ThresholdShipping {
                commission_rate, ..
            }
            | Self::FlatCommission {
                commission_rate, ..
            } => commission_rate,
        }
    }
}

impl FeeProfile {
    /// Create a profile charging only a percentage commission.
    ///
    /// The display name defaults to the identifier. Use the `with_*` methods
    /// to declare the remaining parameters.
    pub fn new(id: impl Into<MarketplaceId>, commission_rate: Rate) -> Self {
        let id = id.into();
        Self {
            name: id.to_string(),
            id,
            description: String::new(),
            rules: String::new(),
            commission_rate,
            fixed_fee: Decimal::ZERO,
            commission_cap: None,
            shipping: None,
        }
    }

    #[must_use]
    pub fn with_fixed_fee(mut self, fixed_fee: Amount) -> Self {
        self.fixed_fee = fixed_fee;
        self
    }

    #[must_use]
    pub fn with_commission_cap(mut self, cap: Amount) -> Self {
        self.commission_cap = Some(cap);
        self
    }

    #[must_use]
    pub fn with_shipping(mut self, rule: ShippingRule) -> Self {
        self.shipping = Some(rule);
        self
    }

    /// Attach the human-facing name, pitch and rules summary.
    #[must_use]
    pub fn with_display(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        rules: impl Into<String>,
    ) -> Self {
        self.name = name.into();
        self.description = description.into();
        self.rules = rules.into();
        self
    }

    #[must_use]
    pub const fn id(&self) -> &MarketplaceId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn rules(&self) -> &str {
        &self.rules
    }

    #[must_use]
    pub const fn commission_rate(&self) -> Rate {
        self.commission_rate
    }

    #[must_use]
    pub const fn fixed_fee(&self) -> Amount {
        self.fixed_fee
    }

    #[must_use]
    pub const fn commission_cap(&self) -> Option<Amount> {
        self.commission_cap
    }

    #[must_use]
    pub const fn shipping(&self) -> Option<ShippingRule> {
        self.shipping
    }

    /// Check every parameter is in range.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidProfile`] naming the first parameter
    /// out of range.
    pub fn validate(&self) -> Result<(), PricingError> {
        let invalid = |reason: &str| Err(PricingError::invalid_profile(&self.id, reason));

        if self.id.as_str().trim().is_empty() {
            return invalid("id cannot be empty");
        }
        if self.commission_rate < Decimal::ZERO || self.commission_rate >= Decimal::ONE {
            return invalid("commission_rate must be in [0, 1)");
        }
        if !within_max(self.fixed_fee) {
            return invalid("fixed_fee must be between 0 and the maximum amount");
        }
        if let Some(cap) = self.commission_cap {
            if cap <= Decimal::ZERO || cap > MAX_AMOUNT {
                return invalid("commission_cap must be greater than 0");
            }
        }
        if let Some(rule) = self.shipping {
            if rule.free_shipping_threshold <= Decimal::ZERO
                || rule.free_shipping_threshold > MAX_AMOUNT
            {
                return invalid("free_shipping_threshold must be greater than 0");
            }
            if !within_max(rule.estimated_shipping_cost) {
                return invalid("estimated_shipping_cost must be between 0 and the maximum amount");
            }
        }
        Ok(())
    }

    /// Validate the profile and map it onto its pricing algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidProfile`] when a parameter is out of
    /// range or the profile declares both a commission cap and a shipping
    /// rule, a shape no algorithm prices.
    pub fn policy(&self) -> Result<FeePolicy, PricingError> {
        self.validate()?;

        let commission_rate = self.commission_rate;
        let fixed_fee = self.fixed_fee;

        match (self.commission_cap, self.shipping) {
            (Some(commission_cap), None) => Ok(FeePolicy::CappedCommission {
                commission_rate,
                fixed_fee,
                commission_cap,
            }),
            (None, Some(shipping)) => Ok(FeePolicy::ThresholdShipping {
                commission_rate,
                fixed_fee,
                shipping,
            }),
            (None, None) => Ok(FeePolicy::FlatCommission {
                commission_rate,
                fixed_fee,
            }),
            (Some(_), Some(_)) => Err(PricingError::invalid_profile(
                &self.id,
                "declares both a commission cap and a shipping rule",
            )),
        }
    }
}

fn within_max(amount: Amount) -> bool {
    amount >= Decimal::ZERO && amount <= MAX_AMOUNT
}
