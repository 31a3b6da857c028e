use std::sync::Arc;

use cinema_infra::{LoggingPaymentGateway, LoggingSeatReservation};
use cinema_tickets::{TicketRules, TicketService, TicketServiceImpl};

/// Services shared by all handlers.
#[derive(Clone)]
pub struct AppServices {
    tickets: Arc<dyn TicketService>,
}

impl AppServices {
    pub fn new(tickets: Arc<dyn TicketService>) -> Self {
        Self { tickets }
    }

    /// Wire the ticket service to the logging stand-ins for the third-party
    /// payment and seat booking services.
    pub fn with_logging_collaborators(rules: TicketRules) -> Self {
        Self::new(Arc::new(TicketServiceImpl::with_rules(
            LoggingPaymentGateway,
            LoggingSeatReservation,
            rules,
        )))
    }

    pub fn tickets(&self) -> &dyn TicketService {
        self.tickets.as_ref()
    }
}
