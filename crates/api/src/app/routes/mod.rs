use axum::Router;

pub mod purchases;
pub mod system;

/// Router for all purchase endpoints.
pub fn router() -> Router {
    Router::new().nest("/purchases", purchases::router())
}
