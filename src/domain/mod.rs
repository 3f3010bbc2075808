//! Marketplace fee domain: profiles, the registry, and the reverse resolver.

mod error;
mod id;
mod money;
mod profile;
mod registry;
mod resolver;

pub use error::{PricingError, RegistryError};
pub use id::MarketplaceId;
pub use money::{parse_amount, round_cents, Amount, Rate, MAX_AMOUNT};
pub use profile::{FeePolicy, FeeProfile, ShippingRule};
pub use registry::{builtin_profiles, ProfileRegistry};
pub use resolver::{
    resolve, resolve_profile, select_shipping_branch, FeeBranch, PricingRequest, PricingResult,
    Resolver, ShippingBranch,
};
