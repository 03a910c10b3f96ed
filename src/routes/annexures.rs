use crate::{AppState, handlers};
use axum::{Router, routing::get};

pub fn annexure_routes() -> Router<AppState> {
    Router::new()
        // GET /api/v1/annexures and /api/v1/annexures/all both list annexures.
        .route("/", get(handlers::get_annexures))
        .route("/all", get(handlers::get_annexures))
        // GET /api/v1/annexures/{annexure_id}/full
        // The letter is matched case-insensitively.
        .route("/{annexure_id}/full", get(handlers::get_full_annexure))
}
