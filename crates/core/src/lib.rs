//! `cinema-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;

pub use error::{InvalidPurchase, PurchaseError, PurchaseResult, PurchaseRule, ValidationResult};
pub use id::AccountId;
