use crate::interface_adapters::handlers::fulfillment;
use crate::interface_adapters::state::AppState;
use axum::{Router, routing::post};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/fulfillment", post(fulfillment))
        .with_state(state)
}
