use serde::{Deserialize, Serialize};
use uuid::Uuid;

use cinema_tickets::{
    PurchaseRequest, PurchaseSummary, TicketRequest, TicketType, ValidatedPurchase,
};

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /purchases` and `POST /purchases/quote`.
///
/// Nulls are accepted here and reported as purchase rule violations by the
/// ticket service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PurchaseBody {
    pub account_id: Option<i64>,
    pub tickets: Option<Vec<Option<TicketLine>>>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TicketLine {
    #[serde(rename = "type")]
    pub ticket_type: Option<TicketType>,
    pub count: i64,
}

impl From<TicketLine> for TicketRequest {
    fn from(line: TicketLine) -> Self {
        TicketRequest {
            ticket_type: line.ticket_type,
            count: line.count,
        }
    }
}

impl From<PurchaseBody> for PurchaseRequest {
    fn from(body: PurchaseBody) -> Self {
        PurchaseRequest {
            account_id: body.account_id,
            tickets: body
                .tickets
                .map(|lines| lines.into_iter().map(|l| l.map(TicketRequest::from)).collect()),
        }
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub account_id: u64,
    pub amount_to_pay: u64,
    pub seats_to_allocate: u64,
    pub tickets: PurchaseSummary,
}

impl From<&ValidatedPurchase> for QuoteResponse {
    fn from(p: &ValidatedPurchase) -> Self {
        Self {
            account_id: p.account_id().get(),
            amount_to_pay: p.amount_to_pay(),
            seats_to_allocate: p.seats_to_allocate(),
            tickets: *p.summary(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PurchaseResponse {
    pub purchase_id: Uuid,
    pub account_id: u64,
    pub amount_paid: u64,
    pub seats_reserved: u64,
    pub tickets: PurchaseSummary,
}

impl PurchaseResponse {
    pub fn new(purchase_id: Uuid, p: &ValidatedPurchase) -> Self {
        Self {
            purchase_id,
            account_id: p.account_id().get(),
            amount_paid: p.amount_to_pay(),
            seats_reserved: p.seats_to_allocate(),
            tickets: *p.summary(),
        }
    }
}
