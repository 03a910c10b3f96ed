use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Schedules 1 - 6. Schedules 4 and 5 share the competency row shape; the
/// others with nested content are served whole under `/full`.
pub fn schedule_routes() -> Router<AppState> {
    Router::new()
        .route("/one", get(handlers::get_schedule_one))
        .route("/one-a", get(handlers::get_schedule_one_a))
        .route("/two/full", get(handlers::get_schedule_two_full))
        .route("/three/full", get(handlers::get_schedule_three_full))
        .route("/four", get(handlers::get_schedule_four))
        .route("/five", get(handlers::get_schedule_five))
        .route("/six/full", get(handlers::get_schedule_six_full))
}
