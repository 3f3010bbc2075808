//! Read-only registry of marketplace fee profiles.
//!
//! A registry is built once at startup and never mutated afterwards, so it
//! can be shared by reference (or behind an `Arc`) across any number of
//! concurrent resolvers without locking.

use std::collections::HashMap;

use rust_decimal_macros::dec;

use super::error::{PricingError, RegistryError};
use super::id::MarketplaceId;
use super::profile::{FeeProfile, ShippingRule};

/// Marketplaces known without any configuration.
#[must_use]
pub fn builtin_profiles() -> Vec<FeeProfile> {
    vec![
        FeeProfile::new("shopee", dec!(0.20))
            .with_fixed_fee(dec!(4.0))
            .with_commission_cap(dec!(100))
            .with_display(
                "Shopee",
                "High volume, strong reach for regional apparel.",
                "Based on the Extra Free Shipping program (January 2026).",
            ),
        FeeProfile::new("mercadolivre", dec!(0.175))
            .with_fixed_fee(dec!(6.0))
            .with_shipping(ShippingRule {
                free_shipping_threshold: dec!(79),
                estimated_shipping_cost: dec!(25.0),
            })
            .with_display(
                "Mercado Livre",
                "The most trusted marketplace in Brazil.",
                "Premium listing with free shipping above R$ 79.",
            ),
        FeeProfile::new("shein", dec!(0.10)).with_display(
            "Shein Brasil",
            "The current fashion giant.",
            "Apparel only, catalogue-standard photos.",
        ),
    ]
}

/// Immutable mapping from marketplace identifier to fee profile.
///
/// Iteration follows declaration order.
#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    profiles: Vec<FeeProfile>,
    index: HashMap<MarketplaceId, usize>,
}

impl ProfileRegistry {
    /// Registry holding the built-in marketplaces.
    #[must_use]
    pub fn builtin() -> Self {
        let profiles = builtin_profiles();
        let index = profiles
            .iter()
            .enumerate()
            .map(|(position, profile)| (profile.id().clone(), position))
            .collect();
        Self { profiles, index }
    }

    /// Build a registry from validated profiles.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateMarketplace`] if two profiles share
    /// an identifier, or [`RegistryError::Profile`] if any profile fails
    /// validation or maps onto no pricing algorithm.
    pub fn from_profiles(
        profiles: impl IntoIterator<Item = FeeProfile>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::default();
        for profile in profiles {
            profile.policy()?;
            if registry.index.contains_key(profile.id()) {
                return Err(RegistryError::DuplicateMarketplace {
                    id: profile.id().clone(),
                });
            }
            registry
                .index
                .insert(profile.id().clone(), registry.profiles.len());
            registry.profiles.push(profile);
        }
        Ok(registry)
    }

    /// Layer extra profiles over this registry.
    ///
    /// A profile whose identifier is already registered replaces the existing
    /// entry in place; new identifiers are appended in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateMarketplace`] if `overrides` repeats
    /// an identifier, or [`RegistryError::Profile`] if any resulting profile
    /// fails validation.
    pub fn with_overrides(
        self,
        overrides: impl IntoIterator<Item = FeeProfile>,
    ) -> Result<Self, RegistryError> {
        let mut profiles = self.profiles;
        let mut index = self.index;
        let mut seen = Vec::new();

        for profile in overrides {
            if seen.contains(profile.id()) {
                return Err(RegistryError::DuplicateMarketplace {
                    id: profile.id().clone(),
                });
            }
            seen.push(profile.id().clone());

            match index.get(profile.id()) {
                Some(&position) => profiles[position] = profile,
                None => {
                    index.insert(profile.id().clone(), profiles.len());
                    profiles.push(profile);
                }
            }
        }

        Self::from_profiles(profiles)
    }

    /// Look up the profile registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::UnknownMarketplace`] if nothing is registered
    /// under `id`.
    pub fn get_profile(&self, id: &str) -> Result<&FeeProfile, PricingError> {
        self.index
            .get(id)
            .map(|&position| &self.profiles[position])
            .ok_or_else(|| PricingError::UnknownMarketplace {
                id: MarketplaceId::new(id),
            })
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All profiles in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &FeeProfile> {
        self.profiles.iter()
    }

    /// All identifiers in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &MarketplaceId> {
        self.profiles.iter().map(FeeProfile::id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
