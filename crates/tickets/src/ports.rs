//! Collaborator ports: the two external services a purchase ends with.
//!
//! Implementations live outside this crate. Failures are reported as
//! `anyhow::Error` and reach the caller unchanged.

use std::sync::Arc;

use cinema_core::AccountId;

/// Takes payment for a purchase.
pub trait TicketPaymentService: Send + Sync {
    fn make_payment(&self, account_id: AccountId, amount_to_pay: u64) -> anyhow::Result<()>;
}

/// Reserves seats for a purchase.
pub trait SeatReservationService: Send + Sync {
    fn reserve_seat(&self, account_id: AccountId, seats_to_allocate: u64) -> anyhow::Result<()>;
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for Arc<T> {
    fn make_payment(&self, account_id: AccountId, amount_to_pay: u64) -> anyhow::Result<()> {
        (**self).make_payment(account_id, amount_to_pay)
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for Arc<T> {
    fn reserve_seat(&self, account_id: AccountId, seats_to_allocate: u64) -> anyhow::Result<()> {
        (**self).reserve_seat(account_id, seats_to_allocate)
    }
}
