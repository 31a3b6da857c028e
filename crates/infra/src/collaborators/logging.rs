use cinema_core::AccountId;
use cinema_tickets::{SeatReservationService, TicketPaymentService};

/// Payment gateway stand-in: records the request in the log and succeeds.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingPaymentGateway;

impl TicketPaymentService for LoggingPaymentGateway {
    fn make_payment(&self, account_id: AccountId, amount_to_pay: u64) -> anyhow::Result<()> {
        tracing::info!(%account_id, amount_to_pay, "payment gateway: charge accepted");
        Ok(())
    }
}

/// Seat booking stand-in: records the request in the log and succeeds.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSeatReservation;

impl SeatReservationService for LoggingSeatReservation {
    fn reserve_seat(&self, account_id: AccountId, seats_to_allocate: u64) -> anyhow::Result<()> {
        tracing::info!(%account_id, seats_to_allocate, "seat booking: seats held");
        Ok(())
    }
}
