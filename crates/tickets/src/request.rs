use serde::{Deserialize, Serialize};

use crate::ticket_type::TicketType;

/// A request for `count` tickets of one type.
///
/// This is the unvalidated input shape: the type may be missing and the count
/// may be zero or negative. Both are rejected during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRequest {
    pub ticket_type: Option<TicketType>,
    pub count: i64,
}

impl TicketRequest {
    pub fn new(ticket_type: TicketType, count: i64) -> Self {
        Self {
            ticket_type: Some(ticket_type),
            count,
        }
    }

    pub fn adults(count: i64) -> Self {
        Self::new(TicketType::Adult, count)
    }

    pub fn children(count: i64) -> Self {
        Self::new(TicketType::Child, count)
    }

    pub fn infants(count: i64) -> Self {
        Self::new(TicketType::Infant, count)
    }
}

/// A purchase as submitted by a caller: account plus ordered ticket requests.
///
/// Every part is optional so that missing input is reported as a purchase
/// rule violation instead of failing earlier during decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub account_id: Option<i64>,
    pub tickets: Option<Vec<Option<TicketRequest>>>,
}

impl PurchaseRequest {
    /// Build a request where every ticket request is present.
    pub fn new(account_id: i64, tickets: impl IntoIterator<Item = TicketRequest>) -> Self {
        Self {
            account_id: Some(account_id),
            tickets: Some(tickets.into_iter().map(Some).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_wraps_every_ticket_request() {
        let req = PurchaseRequest::new(1, [TicketRequest::adults(2), TicketRequest::infants(1)]);
        assert_eq!(req.account_id, Some(1));
        assert_eq!(
            req.tickets,
            Some(vec![
                Some(TicketRequest::new(TicketType::Adult, 2)),
                Some(TicketRequest::new(TicketType::Infant, 1)),
            ])
        );
    }

    #[test]
    fn nulls_decode_into_missing_parts() {
        let req: PurchaseRequest = serde_json::from_str(
            r#"{"account_id": null, "tickets": [null, {"ticket_type": null, "count": -1}]}"#,
        )
        .unwrap();
        assert_eq!(req.account_id, None);
        assert_eq!(
            req.tickets,
            Some(vec![
                None,
                Some(TicketRequest {
                    ticket_type: None,
                    count: -1
                }),
            ])
        );

        let empty: PurchaseRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, PurchaseRequest::default());
    }

    #[test]
    fn requests_compare_by_value() {
        let a = PurchaseRequest::new(7, [TicketRequest::adults(2), TicketRequest::children(1)]);
        let b = PurchaseRequest::new(7, [TicketRequest::adults(2), TicketRequest::children(1)]);
        assert_eq!(a, b);
        assert_eq!(a.clone(), b);
        assert_ne!(a, PurchaseRequest::new(7, [TicketRequest::adults(2)]));
    }
}
