//! Infrastructure layer: adapters for the external purchase collaborators.

pub mod collaborators;

pub use collaborators::{
    CallLog, CollaboratorCall, InMemoryPaymentService, InMemorySeatReservationService,
    LoggingPaymentGateway, LoggingSeatReservation,
};
