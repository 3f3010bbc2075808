//! Domain identifier types with proper encapsulation.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Marketplace identifier - newtype for type safety.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors. Identifiers are stored as given; lookups
/// are case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketplaceId(String);

impl MarketplaceId {
    /// Create a new MarketplaceId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the marketplace ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MarketplaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for MarketplaceId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for MarketplaceId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl Borrow<str> for MarketplaceId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for MarketplaceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
