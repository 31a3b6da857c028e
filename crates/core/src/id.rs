//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{InvalidPurchase, PurchaseRule};

/// Identifier of the purchasing account.
///
/// Always strictly positive; the only way to build one from untrusted input is
/// through the checked constructors below.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct AccountId(u64);

impl AccountId {
    /// Validate a raw, possibly absent account id.
    pub fn parse(raw: Option<i64>) -> Result<Self, InvalidPurchase> {
        match raw {
            Some(v) if v > 0 => Ok(Self(v as u64)),
            Some(v) => Err(InvalidPurchase::new(
                PurchaseRule::AccountId,
                format!("invalid account id: {v}"),
            )),
            None => Err(InvalidPurchase::new(
                PurchaseRule::AccountId,
                "account id is required",
            )),
        }
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<i64> for AccountId {
    type Error = InvalidPurchase;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::parse(Some(value))
    }
}

impl From<AccountId> for i64 {
    fn from(value: AccountId) -> Self {
        // Constructed only from positive i64 values, so this never truncates.
        value.0 as i64
    }
}

impl FromStr for AccountId {
    type Err = InvalidPurchase;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim().parse::<i64>().map_err(|e| {
            InvalidPurchase::new(PurchaseRule::AccountId, format!("invalid account id: {e}"))
        })?;
        Self::parse(Some(raw))
    }
}
