//! Aggregated ticket counts and the totals derived from them.

use serde::Serialize;

use cinema_core::AccountId;

use crate::rules::TicketRules;
use crate::ticket_type::TicketType;

/// Ticket counts per type, summed across all requests of a purchase.
///
/// Summing is commutative, so the order requests arrive in never changes the
/// result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PurchaseSummary {
    pub adults: u64,
    pub children: u64,
    pub infants: u64,
}

impl PurchaseSummary {
    pub fn record(&mut self, ticket_type: TicketType, count: u64) {
        let slot = match ticket_type {
            TicketType::Adult => &mut self.adults,
            TicketType::Child => &mut self.children,
            TicketType::Infant => &mut self.infants,
        };
        *slot = slot.saturating_add(count);
    }

    pub fn count_of(&self, ticket_type: TicketType) -> u64 {
        match ticket_type {
            TicketType::Adult => self.adults,
            TicketType::Child => self.children,
            TicketType::Infant => self.infants,
        }
    }

    pub fn total_tickets(&self) -> u64 {
        self.adults
            .saturating_add(self.children)
            .saturating_add(self.infants)
    }

    /// Tickets that need a physical seat (everyone except infants).
    pub fn seats_to_allocate(&self) -> u64 {
        TicketType::ALL
            .into_iter()
            .filter(|t| t.occupies_seat())
            .fold(0u64, |acc, t| acc.saturating_add(self.count_of(t)))
    }

    pub fn amount_to_pay(&self, rules: &TicketRules) -> u64 {
        TicketType::ALL.into_iter().fold(0u64, |acc, t| {
            acc.saturating_add(self.count_of(t).saturating_mul(rules.price_of(t)))
        })
    }
}

/// A purchase that passed every rule, with its totals worked out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedPurchase {
    account_id: AccountId,
    summary: PurchaseSummary,
    amount_to_pay: u64,
    seats_to_allocate: u64,
}

impl ValidatedPurchase {
    pub(crate) fn new(
        account_id: AccountId,
        summary: PurchaseSummary,
        rules: &TicketRules,
    ) -> Self {
        Self {
            account_id,
            summary,
            amount_to_pay: summary.amount_to_pay(rules),
            seats_to_allocate: summary.seats_to_allocate(),
        }
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn summary(&self) -> &PurchaseSummary {
        &self.summary
    }

    pub fn amount_to_pay(&self) -> u64 {
        self.amount_to_pay
    }

    pub fn seats_to_allocate(&self) -> u64 {
        self.seats_to_allocate
    }
}
