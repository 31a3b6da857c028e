use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use cinema_core::{InvalidPurchase, PurchaseError};

pub fn purchase_error_to_response(err: PurchaseError) -> axum::response::Response {
    match err {
        PurchaseError::Invalid(e) => invalid_purchase_to_response(e),
        PurchaseError::Payment(e) => {
            tracing::warn!(error = %e, "payment failed");
            json_error(StatusCode::BAD_GATEWAY, "payment_failed", e.to_string())
        }
        PurchaseError::Reservation(e) => {
            // Payment already went through at this point.
            tracing::error!(error = %e, "seat reservation failed after payment");
            json_error(StatusCode::BAD_GATEWAY, "reservation_failed", e.to_string())
        }
    }
}

pub fn invalid_purchase_to_response(err: InvalidPurchase) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        axum::Json(json!({
            "error": "invalid_purchase",
            "rule": err.rule().code(),
            "message": err.reason(),
        })),
    )
        .into_response()
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
