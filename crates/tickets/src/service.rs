//! Purchase validation, pricing, and the hand-off to payment and reservation.

use cinema_core::{
    AccountId, InvalidPurchase, PurchaseError, PurchaseResult, PurchaseRule, ValidationResult,
};

use crate::ports::{SeatReservationService, TicketPaymentService};
use crate::request::{PurchaseRequest, TicketRequest};
use crate::rules::TicketRules;
use crate::summary::{PurchaseSummary, ValidatedPurchase};
use crate::ticket_type::TicketType;

/// Ticket purchasing entry point.
pub trait TicketService: Send + Sync {
    /// Validate and price a purchase without calling any collaborator.
    fn quote(&self, request: &PurchaseRequest) -> ValidationResult<ValidatedPurchase>;

    /// Validate and price a purchase, then take payment and reserve seats,
    /// in that order.
    ///
    /// Neither collaborator is called unless every rule passes. A payment
    /// failure means no reservation is attempted; a reservation failure after
    /// a successful payment is returned as is, without compensation.
    fn purchase_tickets(&self, request: &PurchaseRequest) -> PurchaseResult<()>;
}

/// Default [`TicketService`]: stateless apart from its rules and collaborators.
#[derive(Debug, Clone)]
pub struct TicketServiceImpl<P, R> {
    payments: P,
    reservations: R,
    rules: TicketRules,
}

impl<P, R> TicketServiceImpl<P, R>
where
    P: TicketPaymentService,
    R: SeatReservationService,
{
    pub fn new(payments: P, reservations: R) -> Self {
        Self::with_rules(payments, reservations, TicketRules::default())
    }

    pub fn with_rules(payments: P, reservations: R, rules: TicketRules) -> Self {
        Self {
            payments,
            reservations,
            rules,
        }
    }

    pub fn rules(&self) -> &TicketRules {
        &self.rules
    }

    fn validate(&self, request: &PurchaseRequest) -> ValidationResult<ValidatedPurchase> {
        let account_id = AccountId::parse(request.account_id)?;

        let tickets = match request.tickets.as_deref() {
            Some(tickets) if !tickets.is_empty() => tickets,
            _ => {
                return Err(InvalidPurchase::new(
                    PurchaseRule::NoRequests,
                    "no ticket request made",
                ));
            }
        };

        let mut summary = PurchaseSummary::default();
        for (index, ticket) in tickets.iter().enumerate() {
            let (ticket_type, count) = ensure_well_formed(index, ticket.as_ref())?;
            summary.record(ticket_type, count);
        }

        self.ensure_within_limit(&summary)?;
        ensure_adult_present(&summary)?;
        ensure_infants_have_laps(&summary)?;

        Ok(ValidatedPurchase::new(account_id, summary, &self.rules))
    }

    fn ensure_within_limit(&self, summary: &PurchaseSummary) -> ValidationResult<()> {
        let max = self.rules.max_tickets();
        if summary.total_tickets() > max {
            return Err(InvalidPurchase::new(
                PurchaseRule::TooManyTickets,
                format!(
                    "cannot purchase more than {max} tickets at a time (requested {})",
                    summary.total_tickets()
                ),
            ));
        }
        Ok(())
    }
}

fn ensure_well_formed(
    index: usize,
    ticket: Option<&TicketRequest>,
) -> ValidationResult<(TicketType, u64)> {
    let Some(ticket) = ticket else {
        return Err(InvalidPurchase::new(
            PurchaseRule::MissingRequest,
            format!("ticket request #{index} is missing"),
        ));
    };

    let Some(ticket_type) = ticket.ticket_type else {
        return Err(InvalidPurchase::new(
            PurchaseRule::MissingTicketType,
            format!("ticket request #{index} has no ticket type"),
        ));
    };

    // Non-positive counts fail the conversion.
    match u64::try_from(ticket.count) {
        Ok(count) if count > 0 => Ok((ticket_type, count)),
        _ => Err(InvalidPurchase::new(
            PurchaseRule::NonPositiveCount,
            format!(
                "ticket request #{index}: number of tickets must be positive, got {}",
                ticket.count
            ),
        )),
    }
}

fn ensure_adult_present(summary: &PurchaseSummary) -> ValidationResult<()> {
    if summary.adults == 0 && summary.seats_to_allocate() > 0 {
        return Err(InvalidPurchase::new(
            PurchaseRule::AdultRequired,
            "cannot purchase child or infant tickets without purchasing an adult ticket",
        ));
    }
    Ok(())
}

fn ensure_infants_have_laps(summary: &PurchaseSummary) -> ValidationResult<()> {
    if summary.infants > 0 && summary.adults == 0 {
        return Err(InvalidPurchase::new(
            PurchaseRule::InfantsExceedAdults,
            "cannot purchase infant tickets without an associated adult ticket",
        ));
    }
    if summary.infants > summary.adults {
        return Err(InvalidPurchase::new(
            PurchaseRule::InfantsExceedAdults,
            format!(
                "cannot have more infant tickets ({}) than adult tickets ({})",
                summary.infants, summary.adults
            ),
        ));
    }
    Ok(())
}

impl<P, R> TicketService for TicketServiceImpl<P, R>
where
    P: TicketPaymentService,
    R: SeatReservationService,
{
    fn quote(&self, request: &PurchaseRequest) -> ValidationResult<ValidatedPurchase> {
        self.validate(request).inspect_err(|e| {
            tracing::debug!(rule = %e.rule(), reason = e.reason(), "purchase rejected");
        })
    }

    fn purchase_tickets(&self, request: &PurchaseRequest) -> PurchaseResult<()> {
        let purchase = self.quote(request)?;
        let account_id = purchase.account_id();

        self.payments
            .make_payment(account_id, purchase.amount_to_pay())
            .map_err(PurchaseError::Payment)?;
        tracing::info!(
            account_id = %account_id,
            amount = purchase.amount_to_pay(),
            "payment taken"
        );

        self.reservations
            .reserve_seat(account_id, purchase.seats_to_allocate())
            .map_err(PurchaseError::Reservation)?;
        tracing::info!(
            account_id = %account_id,
            seats = purchase.seats_to_allocate(),
            "seats reserved"
        );

        Ok(())
    }
}
