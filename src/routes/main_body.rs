use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Main Router Module
///
/// Read-only access to the main body of the constitution. Chapter IDs are
/// range-checked to 1 - 14 and section IDs to 1 - 243 (plus 23065 for 230A)
/// inside the handlers, before any procedure is called.
pub fn main_routes() -> Router<AppState> {
    Router::new()
        .route("/preamble", get(handlers::get_preamble))
        .route("/chapters/all", get(handlers::get_chapters))
        .route("/chapters/{chapter_id}", get(handlers::get_chapter))
        // Flat list of the chapter's sections.
        .route(
            "/chapters/{chapter_id}/sections",
            get(handlers::get_sections_by_chapter),
        )
        // Every section of the chapter with subsections and clauses nested.
        .route("/chapters/{chapter_id}/full", get(handlers::get_full_chapter))
        .route("/sections/all", get(handlers::get_sections))
        .route("/section/{section_id}", get(handlers::get_section))
        .route(
            "/section/{section_id}/subsections",
            get(handlers::get_subsections),
        )
        .route("/section/{section_id}/clauses", get(handlers::get_clauses))
        .route("/section/{section_id}/full", get(handlers::get_full_section))
        .route("/ndr/all", get(handlers::get_non_derogable_rights))
}
