use std::sync::{Arc, RwLock};

use cinema_core::AccountId;
use cinema_tickets::{SeatReservationService, TicketPaymentService};

/// One call made to a collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollaboratorCall {
    Payment { account_id: AccountId, amount: u64 },
    Reservation { account_id: AccountId, seats: u64 },
}

/// Ordered, append-only log of collaborator calls.
///
/// Share one log between a payment and a reservation adapter to observe the
/// order in which a purchase calls them.
#[derive(Debug, Default)]
pub struct CallLog {
    calls: RwLock<Vec<CollaboratorCall>>,
}

impl CallLog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn record(&self, call: CollaboratorCall) {
        if let Ok(mut calls) = self.calls.write() {
            calls.push(call);
        }
    }

    pub fn calls(&self) -> Vec<CollaboratorCall> {
        match self.calls.read() {
            Ok(calls) => calls.clone(),
            Err(_) => vec![],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.calls().is_empty()
    }
}

/// In-memory payment adapter for tests/dev.
///
/// Every attempt is logged, including ones configured to fail.
#[derive(Debug, Clone)]
pub struct InMemoryPaymentService {
    log: Arc<CallLog>,
    failure: Option<String>,
}

impl InMemoryPaymentService {
    pub fn new(log: Arc<CallLog>) -> Self {
        Self { log, failure: None }
    }

    /// Make every payment fail with `message` (after being logged).
    pub fn failing_with(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }
}

impl TicketPaymentService for InMemoryPaymentService {
    fn make_payment(&self, account_id: AccountId, amount_to_pay: u64) -> anyhow::Result<()> {
        self.log.record(CollaboratorCall::Payment {
            account_id,
            amount: amount_to_pay,
        });
        match &self.failure {
            Some(message) => Err(anyhow::anyhow!("{message}")),
            None => Ok(()),
        }
    }
}

/// In-memory seat reservation adapter for tests/dev.
#[derive(Debug, Clone)]
pub struct InMemorySeatReservationService {
    log: Arc<CallLog>,
    failure: Option<String>,
}

impl InMemorySeatReservationService {
    pub fn new(log: Arc<CallLog>) -> Self {
        Self { log, failure: None }
    }

    pub fn failing_with(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }
}

impl SeatReservationService for InMemorySeatReservationService {
    fn reserve_seat(&self, account_id: AccountId, seats_to_allocate: u64) -> anyhow::Result<()> {
        self.log.record(CollaboratorCall::Reservation {
            account_id,
            seats: seats_to_allocate,
        });
        match &self.failure {
            Some(message) => Err(anyhow::anyhow!("{message}")),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(id: i64) -> AccountId {
        AccountId::try_from(id).unwrap()
    }

    #[test]
    fn shared_log_keeps_call_order() {
        let log = CallLog::new();
        let payments = InMemoryPaymentService::new(log.clone());
        let reservations = InMemorySeatReservationService::new(log.clone());

        reservations.reserve_seat(account(2), 1).unwrap();
        payments.make_payment(account(1), 25).unwrap();

        assert_eq!(
            log.calls(),
            vec![
                CollaboratorCall::Reservation {
                    account_id: account(2),
                    seats: 1
                },
                CollaboratorCall::Payment {
                    account_id: account(1),
                    amount: 25
                },
            ]
        );
    }

    #[test]
    fn failing_adapter_still_logs_the_attempt() {
        let log = CallLog::new();
        let payments = InMemoryPaymentService::new(log.clone()).failing_with("card declined");

        let err = payments.make_payment(account(1), 10).unwrap_err();

        assert_eq!(err.to_string(), "card declined");
        assert_eq!(log.calls().len(), 1);
    }
}
