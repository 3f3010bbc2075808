//! Pricing and registry errors for the fee-resolution domain.
//!
//! None of these are transient: every failure is reported synchronously to
//! the caller and never retried.
//!
//! # Examples
//!
//! ```
//! use grossup::domain::{PricingError, ProfileRegistry};
//! use rust_decimal_macros::dec;
//!
//! let registry = ProfileRegistry::builtin();
//! let result = grossup::domain::resolve(&registry, "shopee", dec!(0));
//!
//! assert!(matches!(result, Err(PricingError::InvalidTarget { .. })));
//! ```

use thiserror::Error;

use super::id::MarketplaceId;

/// Errors raised while resolving a listing price.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// The target net is missing, non-numeric, non-positive or out of range.
    #[error("invalid target: {reason}")]
    InvalidTarget {
        /// Why the target was rejected.
        reason: String,
    },

    /// No profile is registered under the requested identifier.
    #[error("unknown marketplace: {id}")]
    UnknownMarketplace {
        /// The identifier that was looked up.
        id: MarketplaceId,
    },

    /// A profile declares a shape or parameter the resolver cannot price.
    #[error("invalid fee profile for {id}: {reason}")]
    InvalidProfile {
        /// The offending profile.
        id: MarketplaceId,
        /// What is wrong with it.
        reason: String,
    },

    /// An intermediate value does not fit in a `Decimal`.
    #[error("arithmetic overflow while {operation}")]
    Overflow {
        /// The computation that overflowed.
        operation: &'static str,
    },
}

impl PricingError {
    pub(crate) fn invalid_target(reason: impl Into<String>) -> Self {
        Self::InvalidTarget {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_profile(id: &MarketplaceId, reason: impl Into<String>) -> Self {
        Self::InvalidProfile {
            id: id.clone(),
            reason: reason.into(),
        }
    }

    /// Stable machine-readable name of the error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidTarget { .. } => "invalid_target",
            Self::UnknownMarketplace { .. } => "unknown_marketplace",
            Self::InvalidProfile { .. } => "invalid_profile",
            Self::Overflow { .. } => "overflow",
        }
    }
}

/// Errors raised while building a [`ProfileRegistry`](super::ProfileRegistry).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Two profiles share an identifier.
    #[error("duplicate marketplace id: {id}")]
    DuplicateMarketplace {
        /// The repeated identifier.
        id: MarketplaceId,
    },

    /// A profile failed validation or maps onto no pricing algorithm.
    #[error(transparent)]
    Profile(#[from] PricingError),
}
