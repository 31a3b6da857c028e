//! Payment and seat reservation adapters.
//!
//! - `logging`: stand-ins for the third-party services (log and succeed)
//! - `in_memory`: recording adapters for tests/dev, sharing one ordered call log

pub mod in_memory;
pub mod logging;

pub use in_memory::{
    CallLog, CollaboratorCall, InMemoryPaymentService, InMemorySeatReservationService,
};
pub use logging::{LoggingPaymentGateway, LoggingSeatReservation};
