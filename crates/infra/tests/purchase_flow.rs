//! End-to-end purchase flow: real service, in-memory collaborators.

use std::sync::Arc;

use cinema_core::{AccountId, PurchaseError, PurchaseRule};
use cinema_infra::{
    CallLog, CollaboratorCall, InMemoryPaymentService, InMemorySeatReservationService,
};
use cinema_tickets::{PurchaseRequest, TicketRequest, TicketService, TicketServiceImpl};

type Service = TicketServiceImpl<InMemoryPaymentService, InMemorySeatReservationService>;

fn service_with_log() -> (Service, Arc<CallLog>) {
    let log = CallLog::new();
    let service = TicketServiceImpl::new(
        InMemoryPaymentService::new(log.clone()),
        InMemorySeatReservationService::new(log.clone()),
    );
    (service, log)
}

fn account(id: i64) -> AccountId {
    AccountId::try_from(id).unwrap()
}

fn rule_of(err: PurchaseError) -> PurchaseRule {
    match err {
        PurchaseError::Invalid(e) => e.rule(),
        other => panic!("Expected InvalidPurchase, got {other:?}"),
    }
}

#[test]
fn family_purchase_is_paid_then_seated() {
    let (service, log) = service_with_log();
    let request = PurchaseRequest::new(
        1,
        [
            TicketRequest::adults(2),
            TicketRequest::children(1),
            TicketRequest::infants(1),
        ],
    );

    service.purchase_tickets(&request).unwrap();

    assert_eq!(
        log.calls(),
        vec![
            CollaboratorCall::Payment {
                account_id: account(1),
                amount: 65
            },
            CollaboratorCall::Reservation {
                account_id: account(1),
                seats: 3
            },
        ]
    );
}

#[test]
fn rejected_purchases_never_touch_collaborators() {
    let cases = [
        (
            PurchaseRequest::new(1, [TicketRequest::adults(1), TicketRequest::infants(2)]),
            PurchaseRule::InfantsExceedAdults,
        ),
        (
            PurchaseRequest::new(0, [TicketRequest::adults(1)]),
            PurchaseRule::AccountId,
        ),
        (PurchaseRequest::new(1, []), PurchaseRule::NoRequests),
        (
            PurchaseRequest {
                account_id: Some(1),
                tickets: None,
            },
            PurchaseRule::NoRequests,
        ),
        (
            PurchaseRequest::new(1, [TicketRequest::adults(26)]),
            PurchaseRule::TooManyTickets,
        ),
        (
            PurchaseRequest::new(1, [TicketRequest::children(1)]),
            PurchaseRule::AdultRequired,
        ),
    ];

    for (request, expected) in cases {
        let (service, log) = service_with_log();
        let err = service.purchase_tickets(&request).unwrap_err();
        assert_eq!(rule_of(err), expected, "request: {request:?}");
        assert!(log.is_empty(), "collaborators called for {request:?}");
    }
}

#[test]
fn maximum_purchase_goes_through() {
    let (service, log) = service_with_log();

    service
        .purchase_tickets(&PurchaseRequest::new(1, [TicketRequest::adults(25)]))
        .unwrap();

    assert_eq!(
        log.calls(),
        vec![
            CollaboratorCall::Payment {
                account_id: account(1),
                amount: 625
            },
            CollaboratorCall::Reservation {
                account_id: account(1),
                seats: 25
            },
        ]
    );
}

#[test]
fn declined_payment_stops_before_reservation() {
    let log = CallLog::new();
    let service = TicketServiceImpl::new(
        InMemoryPaymentService::new(log.clone()).failing_with("card declined"),
        InMemorySeatReservationService::new(log.clone()),
    );

    let err = service
        .purchase_tickets(&PurchaseRequest::new(9, [TicketRequest::adults(1)]))
        .unwrap_err();

    assert!(matches!(err, PurchaseError::Payment(_)));
    assert_eq!(err.to_string(), "card declined");
    assert_eq!(
        log.calls(),
        vec![CollaboratorCall::Payment {
            account_id: account(9),
            amount: 25
        }]
    );
}

#[test]
fn failed_reservation_is_not_compensated() {
    let log = CallLog::new();
    let service = TicketServiceImpl::new(
        InMemoryPaymentService::new(log.clone()),
        InMemorySeatReservationService::new(log.clone()).failing_with("screen sold out"),
    );

    let err = service
        .purchase_tickets(&PurchaseRequest::new(9, [TicketRequest::adults(2)]))
        .unwrap_err();

    assert!(matches!(err, PurchaseError::Reservation(_)));
    assert_eq!(err.to_string(), "screen sold out");
    // Payment stays recorded; nothing refunds it.
    assert_eq!(log.calls().len(), 2);
}

#[test]
fn shared_adapters_work_behind_arc() {
    let log = CallLog::new();
    let payments = Arc::new(InMemoryPaymentService::new(log.clone()));
    let reservations = Arc::new(InMemorySeatReservationService::new(log.clone()));
    let service = TicketServiceImpl::new(payments.clone(), reservations.clone());

    service
        .purchase_tickets(&PurchaseRequest::new(3, [TicketRequest::adults(1)]))
        .unwrap();
    service
        .purchase_tickets(&PurchaseRequest::new(4, [TicketRequest::adults(1)]))
        .unwrap();

    assert_eq!(log.calls().len(), 4);
}
