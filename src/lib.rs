//! Grossup - listing prices that net a target amount after marketplace fees.
//!
//! Marketplaces deduct a commission, a fixed fee and sometimes a shipping
//! subsidy from every sale. Given the amount a seller wants to keep, this
//! crate computes the gross listing price that leaves exactly that amount.
//!
//! # Architecture
//!
//! - **`domain::profile`** - Fee parameters per marketplace and the policy
//!   shape derived from them
//!   - `CappedCommission` - Percentage commission with an absolute ceiling
//!   - `ThresholdShipping` - Fixed fee below a threshold, shipping subsidy above
//!   - `FlatCommission` - Plain percentage commission
//! - **`domain::registry`** - Immutable id to profile lookup
//! - **`domain::resolver`** - Pure, re-entrant reverse pricing
//!
//! # Modules
//!
//! - [`config`] - TOML configuration: logging, display format, custom marketplaces
//! - [`domain`] - Money types, fee profiles, registry and resolver
//! - [`error`] - Error types for the crate
//! - [`cli`] - Command-line front end
//!
//! # Example
//!
//! ```
//! use grossup::domain::{resolve, ProfileRegistry};
//! use rust_decimal_macros::dec;
//!
//! let registry = ProfileRegistry::builtin();
//! let result = resolve(&registry, "shein", dec!(90)).unwrap();
//! assert_eq!(result.gross_price, dec!(100));
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
