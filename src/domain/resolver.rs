//! Reverse fee resolution: from the net a seller wants to keep to the gross
//! listing price a marketplace must be asked to charge.
//!
//! Every function here is pure. Resolution reads an immutable
//! [`ProfileRegistry`], never logs, and returns identical results for
//! identical inputs, so calls may run concurrently without coordination.
//!
//! # Example
//!
//! ```
//! use grossup::domain::{resolve, FeeBranch, ProfileRegistry};
//! use rust_decimal_macros::dec;
//!
//! let registry = ProfileRegistry::builtin();
//! let result = resolve(&registry, "shein", dec!(90)).unwrap();
//!
//! assert_eq!(result.gross_price, dec!(100));
//! assert_eq!(result.commission_amount, dec!(10));
//! assert_eq!(result.branch, FeeBranch::Flat);
//! ```

use rust_decimal::Decimal;
use serde::Serialize;

use super::error::PricingError;
use super::id::MarketplaceId;
use super::money::{Amount, Rate, MAX_AMOUNT};
use super::profile::{FeePolicy, FeeProfile, ShippingRule};
use super::registry::ProfileRegistry;

/// A single price calculation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingRequest {
    pub marketplace_id: MarketplaceId,
    /// Amount the seller wants to keep after every deduction.
    pub target_net: Amount,
}

impl PricingRequest {
    pub fn new(marketplace_id: impl Into<MarketplaceId>, target_net: Amount) -> Self {
        Self {
            marketplace_id: marketplace_id.into(),
            target_net,
        }
    }
}

/// Which arm of a fee policy produced a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeeBranch {
    /// Capped-commission profile whose commission stayed under the cap.
    Uncapped,
    /// Capped-commission profile where the cap was hit.
    Capped,
    /// Threshold profile priced below the free-shipping threshold.
    FixedFee,
    /// Threshold profile priced with the shipping subsidy.
    ShippingSubsidy,
    /// Flat-commission profile.
    Flat,
}

/// Outcome of [`select_shipping_branch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShippingBranch {
    /// Keep the provisional price and charge the fixed fee.
    FixedFee,
    /// Reprice with the estimated shipping cost in place of the fixed fee.
    FreeShipping,
}

/// Gross price and the deductions that bring it back down to the net.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingResult {
    pub marketplace_id: MarketplaceId,
    pub branch: FeeBranch,
    /// Listing price shown to buyers.
    pub gross_price: Amount,
    pub commission_amount: Amount,
    pub fixed_fee_amount: Amount,
    pub shipping_amount: Amount,
    /// Echo of the requested target net.
    pub net: Amount,
}

impl PricingResult {
    /// Sum of every amount the marketplace keeps or the seller absorbs.
    #[must_use]
    pub fn total_deductions(&self) -> Amount {
        self.commission_amount + self.fixed_fee_amount + self.shipping_amount
    }

    /// Absolute difference between `gross - deductions` and the net.
    #[must_use]
    pub fn reconciliation_error(&self) -> Amount {
        (self.gross_price - self.total_deductions() - self.net).abs()
    }
}

/// Resolves requests against a borrowed registry.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    registry: &'a ProfileRegistry,
}

impl<'a> Resolver<'a> {
    #[must_use]
    pub const fn new(registry: &'a ProfileRegistry) -> Self {
        Self { registry }
    }

    /// Resolve one request.
    ///
    /// # Errors
    ///
    /// - [`PricingError::InvalidTarget`] if the target is not positive or
    ///   exceeds [`MAX_AMOUNT`]
    /// - [`PricingError::UnknownMarketplace`] if the marketplace is not registered
    /// - [`PricingError::InvalidProfile`] if its profile has no pricing algorithm
    /// - [`PricingError::Overflow`] if an intermediate value is unrepresentable
    pub fn resolve(&self, request: &PricingRequest) -> Result<PricingResult, PricingError> {
        validate_target(request.target_net)?;
        let profile = self.registry.get_profile(request.marketplace_id.as_str())?;
        resolve_profile(profile, request.target_net)
    }
}

/// Resolve the listing price for `target_net` on `marketplace_id`.
///
/// # Errors
///
/// See [`Resolver::resolve`].
pub fn resolve(
    registry: &ProfileRegistry,
    marketplace_id: &str,
    target_net: Amount,
) -> Result<PricingResult, PricingError> {
    Resolver::new(registry).resolve(&PricingRequest::new(marketplace_id, target_net))
}

/// Resolve the listing price for `target_net` directly against a profile.
///
/// # Errors
///
/// See [`Resolver::resolve`]; never returns `UnknownMarketplace`.
pub fn resolve_profile(
    profile: &FeeProfile,
    target_net: Amount,
) -> Result<PricingResult, PricingError> {
    validate_target(target_net)?;

    let breakdown = match profile.policy()? {
        FeePolicy::CappedCommission {
            commission_rate,
            fixed_fee,
            commission_cap,
        } => capped_commission(target_net, commission_rate, fixed_fee, commission_cap)?,
        FeePolicy::ThresholdShipping {
            commission_rate,
            fixed_fee,
            shipping,
        } => threshold_shipping(target_net, commission_rate, fixed_fee, &shipping)?,
        FeePolicy::FlatCommission {
            commission_rate,
            fixed_fee,
        } => flat_commission(target_net, commission_rate, fixed_fee)?,
    };

    Ok(PricingResult {
        marketplace_id: profile.id().clone(),
        branch: breakdown.branch,
        gross_price: breakdown.gross_price,
        commission_amount: breakdown.commission_amount,
        fixed_fee_amount: breakdown.fixed_fee_amount,
        shipping_amount: breakdown.shipping_amount,
        net: target_net,
    })
}

/// Decide which fee model applies from the provisional fixed-fee price.
///
/// The decision is made once, on the price computed under the fixed-fee
/// assumption. A subsidy-branch price that lands back under the threshold
/// is not re-examined.
#[must_use]
pub fn select_shipping_branch(provisional_gross: Amount, rule: &ShippingRule) -> ShippingBranch {
    if provisional_gross >= rule.free_shipping_threshold {
        ShippingBranch::FreeShipping
    } else {
        ShippingBranch::FixedFee
    }
}

struct Breakdown {
    branch: FeeBranch,
    gross_price: Amount,
    commission_amount: Amount,
    fixed_fee_amount: Amount,
    shipping_amount: Amount,
}

fn validate_target(target_net: Amount) -> Result<(), PricingError> {
    if target_net <= Decimal::ZERO {
        return Err(PricingError::invalid_target(format!(
            "target net must be greater than 0, got {target_net}"
        )));
    }
    if target_net > MAX_AMOUNT {
        return Err(PricingError::invalid_target(format!(
            "target net must not exceed {MAX_AMOUNT}"
        )));
    }
    Ok(())
}

fn capped_commission(
    target_net: Amount,
    commission_rate: Rate,
    fixed_fee: Amount,
    commission_cap: Amount,
) -> Result<Breakdown, PricingError> {
    let mut gross_price = gross_up(target_net, fixed_fee, commission_rate)?;
    let mut branch = FeeBranch::Uncapped;

    // Once the cap binds the commission is a constant and the price is additive.
    if percent_of(gross_price, commission_rate)? > commission_cap {
        gross_price = add(&[target_net, commission_cap, fixed_fee])?;
        branch = FeeBranch::Capped;
    }

    Ok(Breakdown {
        branch,
        gross_price,
        commission_amount: percent_of(gross_price, commission_rate)?.min(commission_cap),
        fixed_fee_amount: fixed_fee,
        shipping_amount: Decimal::ZERO,
    })
}

fn threshold_shipping(
    target_net: Amount,
    commission_rate: Rate,
    fixed_fee: Amount,
    rule: &ShippingRule,
) -> Result<Breakdown, PricingError> {
    let provisional = gross_up(target_net, fixed_fee, commission_rate)?;

    let (branch, gross_price, fixed_fee_amount, shipping_amount) =
        match select_shipping_branch(provisional, rule) {
            ShippingBranch::FixedFee => {
                (FeeBranch::FixedFee, provisional, fixed_fee, Decimal::ZERO)
            }
            ShippingBranch::FreeShipping => (
                FeeBranch::ShippingSubsidy,
                gross_up(target_net, rule.estimated_shipping_cost, commission_rate)?,
                Decimal::ZERO,
                rule.estimated_shipping_cost,
            ),
        };

    Ok(Breakdown {
        branch,
        gross_price,
        commission_amount: percent_of(gross_price, commission_rate)?,
        fixed_fee_amount,
        shipping_amount,
    })
}

fn flat_commission(
    target_net: Amount,
    commission_rate: Rate,
    fixed_fee: Amount,
) -> Result<Breakdown, PricingError> {
    let gross_price = gross_up(target_net, fixed_fee, commission_rate)?;

    Ok(Breakdown {
        branch: FeeBranch::Flat,
        gross_price,
        commission_amount: percent_of(gross_price, commission_rate)?,
        fixed_fee_amount: fixed_fee,
        shipping_amount: Decimal::ZERO,
    })
}

/// `(target_net + absorbed) / (1 - commission_rate)`.
fn gross_up(
    target_net: Amount,
    absorbed: Amount,
    commission_rate: Rate,
) -> Result<Amount, PricingError> {
    let retained = Decimal::ONE - commission_rate;
    add(&[target_net, absorbed])?
        .checked_div(retained)
        .ok_or(PricingError::Overflow {
            operation: "grossing up the target",
        })
}

fn percent_of(amount: Amount, rate: Rate) -> Result<Amount, PricingError> {
    amount.checked_mul(rate).ok_or(PricingError::Overflow {
        operation: "computing the commission",
    })
}

fn add(amounts: &[Amount]) -> Result<Amount, PricingError> {
    amounts
        .iter()
        .try_fold(Decimal::ZERO, |sum, amount| sum.checked_add(*amount))
        .ok_or(PricingError::Overflow {
            operation: "summing fees",
        })
}
