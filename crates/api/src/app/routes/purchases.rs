use std::sync::Arc;

use axum::{
    Json, Router, extract::Extension, http::StatusCode, response::IntoResponse, routing::post,
};
use uuid::Uuid;

use cinema_tickets::PurchaseRequest;

use crate::app::{dto, errors};
use crate::app::services::AppServices;
use crate::context::RequestContext;

pub fn router() -> Router {
    Router::new()
        .route("/", post(purchase_tickets))
        .route("/quote", post(quote_purchase))
}

pub async fn purchase_tickets(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<RequestContext>,
    Json(body): Json<dto::PurchaseBody>,
) -> axum::response::Response {
    let request = PurchaseRequest::from(body);

    // 1) Price it (pure) so the response can report the totals
    let quote = match services.tickets().quote(&request) {
        Ok(q) => q,
        Err(e) => return errors::invalid_purchase_to_response(e),
    };

    // 2) Pay, then reserve
    if let Err(e) = services.tickets().purchase_tickets(&request) {
        return errors::purchase_error_to_response(e);
    }

    let purchase_id = Uuid::now_v7();
    tracing::info!(
        %purchase_id,
        request_id = %ctx.request_id(),
        account_id = %quote.account_id(),
        amount = quote.amount_to_pay(),
        seats = quote.seats_to_allocate(),
        "purchase completed"
    );

    (StatusCode::OK, Json(dto::PurchaseResponse::new(purchase_id, &quote))).into_response()
}

pub async fn quote_purchase(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::PurchaseBody>,
) -> axum::response::Response {
    let request = PurchaseRequest::from(body);

    match services.tickets().quote(&request) {
        Ok(q) => (StatusCode::OK, Json(dto::QuoteResponse::from(&q))).into_response(),
        Err(e) => errors::invalid_purchase_to_response(e),
    }
}
