//! Purchase error model.

use thiserror::Error;

/// Result type for validation-only operations (no collaborator calls).
pub type ValidationResult<T> = Result<T, InvalidPurchase>;

/// Result type for a full purchase (validation plus collaborator calls).
pub type PurchaseResult<T> = Result<T, PurchaseError>;

/// The purchase rule a request violated, in the order rules are checked.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PurchaseRule {
    /// Account id absent or not strictly positive.
    AccountId,
    /// Ticket request list absent or empty.
    NoRequests,
    /// An element of the request list is absent.
    MissingRequest,
    /// A request has no ticket type.
    MissingTicketType,
    /// A request asks for zero or fewer tickets.
    NonPositiveCount,
    /// More tickets than the configured maximum.
    TooManyTickets,
    /// Child or infant tickets without an adult.
    AdultRequired,
    /// More infants than adults.
    InfantsExceedAdults,
}

impl PurchaseRule {
    /// Stable machine-readable code (used in API error bodies).
    pub const fn code(self) -> &'static str {
        match self {
            PurchaseRule::AccountId => "invalid_account_id",
            PurchaseRule::NoRequests => "no_requests",
            PurchaseRule::MissingRequest => "missing_request",
            PurchaseRule::MissingTicketType => "missing_ticket_type",
            PurchaseRule::NonPositiveCount => "non_positive_count",
            PurchaseRule::TooManyTickets => "too_many_tickets",
            PurchaseRule::AdultRequired => "adult_required",
            PurchaseRule::InfantsExceedAdults => "infants_exceed_adults",
        }
    }
}

impl core::fmt::Display for PurchaseRule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

/// A purchase request was rejected before any collaborator was called.
///
/// This is the single validation error kind. The `rule` lets callers branch
/// without matching on the message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid purchase: {reason}")]
pub struct InvalidPurchase {
    rule: PurchaseRule,
    reason: String,
}

impl InvalidPurchase {
    pub fn new(rule: PurchaseRule, reason: impl Into<String>) -> Self {
        Self {
            rule,
            reason: reason.into(),
        }
    }

    pub fn rule(&self) -> PurchaseRule {
        self.rule
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Failure of a full purchase.
///
/// Collaborator failures are transparent: their message and source chain are
/// those of the collaborator, untouched.
#[derive(Debug, Error)]
pub enum PurchaseError {
    #[error(transparent)]
    Invalid(#[from] InvalidPurchase),

    /// The payment collaborator failed; no seats were reserved.
    #[error(transparent)]
    Payment(anyhow::Error),

    /// The reservation collaborator failed after payment went through.
    #[error(transparent)]
    Reservation(anyhow::Error),
}

impl PurchaseError {
    /// Returns the validation failure, if this is one.
    pub fn as_invalid(&self) -> Option<&InvalidPurchase> {
        match self {
            PurchaseError::Invalid(e) => Some(e),
            _ => None,
        }
    }
}
