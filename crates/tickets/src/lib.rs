//! Ticket purchasing domain module.
//!
//! This crate contains the purchase validation and pricing rules, implemented
//! as deterministic domain logic. The only side effects are the two calls made
//! through the collaborator ports in [`ports`].

pub mod ports;
pub mod request;
pub mod rules;
pub mod service;
pub mod summary;
pub mod ticket_type;

pub use ports::{SeatReservationService, TicketPaymentService};
pub use request::{PurchaseRequest, TicketRequest};
pub use rules::{
    ConfigError, DEFAULT_ADULT_PRICE, DEFAULT_CHILD_PRICE, DEFAULT_MAX_TICKETS, INFANT_PRICE,
    TicketRules,
};
pub use service::{TicketService, TicketServiceImpl};
pub use summary::{PurchaseSummary, ValidatedPurchase};
pub use ticket_type::TicketType;
