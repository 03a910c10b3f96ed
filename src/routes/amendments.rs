use crate::{AppState, handlers};
use axum::{Router, routing::get};

pub fn amendment_routes() -> Router<AppState> {
    Router::new().route("/all", get(handlers::get_amendments))
}
