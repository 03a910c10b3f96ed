use axum::{
    Router,
    extract::FromRef,
    http::{HeaderName, HeaderValue, Method},
    middleware,
    routing::get,
};
use std::{sync::Arc, time::Duration};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

pub mod aggregation;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod rate_limit;
pub mod repository;
pub mod validation;

// One router module per versioned path prefix.
pub mod routes;
use routes::{amendments, annexures, main_body, schedules};

// --- Public Re-exports ---

pub use config::AppConfig;
pub use error::ApiError;
pub use rate_limit::{FixedWindowLimiter, RateLimiterState};
pub use repository::{
    AmendmentRepositoryState, MainRepositoryState, PostgresRepository, ScheduleRepositoryState,
};

/// ApiDoc
///
/// OpenAPI document for every endpoint and response schema, served at
/// `/api-docs/openapi.json` with the Swagger UI in the local environment.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::get_preamble, handlers::get_chapters, handlers::get_chapter,
        handlers::get_sections_by_chapter, handlers::get_full_chapter, handlers::get_sections,
        handlers::get_section, handlers::get_subsections, handlers::get_clauses,
        handlers::get_full_section, handlers::get_non_derogable_rights,
        handlers::get_schedule_one, handlers::get_schedule_one_a, handlers::get_schedule_two_full,
        handlers::get_schedule_three_full, handlers::get_schedule_four, handlers::get_schedule_five,
        handlers::get_schedule_six_full,
        handlers::get_annexures, handlers::get_full_annexure,
        handlers::get_amendments
    ),
    components(
        schemas(
            models::Preamble, models::Chapter, models::Section, models::SectionByChapter,
            models::Subsection, models::Clause, models::NonDerogableRight, models::FullSection,
            models::FullChapter, models::Amendment, models::Annexure, models::AnnexureSection,
            models::AnnexureSubsection, models::FullAnnexure, models::ScheduleOneNationalFlag,
            models::ScheduleOneAGeoAreasProvince, models::ScheduleTwoOathsAffirmation,
            models::ScheduleTwoSubsection, models::ScheduleTwoFull, models::ScheduleThreePart,
            models::ScheduleThreeElectionProcedure, models::ScheduleThreeSubsection,
            models::ScheduleThreeFull, models::Competency,
            models::ScheduleSixTransitionalArrangement, models::ScheduleSixSubsection,
            models::ScheduleSixClause, models::ScheduleSixFull,
        )
    ),
    tags(
        (name = "constitution", description = "Read-only Constitution API")
    )
)]
pub struct ApiDoc;

/// AppState
///
/// Single, cheaply clonable container for everything a request may need.
/// Handlers pull only the repository they use through `FromRef`.
#[derive(Clone)]
pub struct AppState {
    /// Preamble, chapters, sections, non-derogable rights.
    pub main_repo: MainRepositoryState,
    /// Schedules and annexures.
    pub schedule_repo: ScheduleRepositoryState,
    pub amendment_repo: AmendmentRepositoryState,
    /// Shared by every `/api/v1` request.
    pub limiter: RateLimiterState,
    pub config: AppConfig,
}

impl AppState {
    /// Builds the state with one Postgres-backed repository serving all
    /// three repository roles.
    pub fn from_postgres(repo: PostgresRepository, config: AppConfig) -> Self {
        let repo = Arc::new(repo);
        Self {
            main_repo: repo.clone(),
            schedule_repo: repo.clone(),
            amendment_repo: repo,
            limiter: limiter_for(&config),
            config,
        }
    }
}

/// The process-wide limiter described by `config`.
pub fn limiter_for(config: &AppConfig) -> RateLimiterState {
    Arc::new(FixedWindowLimiter::new(
        config.rate_limit_permits,
        Duration::from_secs(config.rate_limit_window_secs),
    ))
}

// --- Axum FromRef Extractor Implementations ---

impl FromRef<AppState> for MainRepositoryState {
    fn from_ref(app_state: &AppState) -> MainRepositoryState {
        app_state.main_repo.clone()
    }
}

impl FromRef<AppState> for ScheduleRepositoryState {
    fn from_ref(app_state: &AppState) -> ScheduleRepositoryState {
        app_state.schedule_repo.clone()
    }
}

impl FromRef<AppState> for AmendmentRepositoryState {
    fn from_ref(app_state: &AppState) -> AmendmentRepositoryState {
        app_state.amendment_repo.clone()
    }
}

impl FromRef<AppState> for RateLimiterState {
    fn from_ref(app_state: &AppState) -> RateLimiterState {
        app_state.limiter.clone()
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// create_router
///
/// Assembles the versioned API routes, the rate limiter, the docs (local
/// only), and the observability and CORS layers.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    // Header name constant for request correlation.
    let x_request_id = HeaderName::from_static("x-request-id");

    // `route_layer` only counts requests that hit a real endpoint.
    let api = Router::new()
        .nest("/api/v1/main", main_body::main_routes())
        .nest("/api/v1/schedules", schedules::schedule_routes())
        .nest("/api/v1/annexures", annexures::annexure_routes())
        .nest("/api/v1/amendments", amendments::amendment_routes())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit::rate_limit,
        ));

    let mut base_router = Router::new()
        // Load balancer probe; never rate limited.
        .route("/health", get(|| async { "ok" }))
        .merge(api);

    if state.config.env == config::Env::Local {
        base_router = base_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    base_router
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        .layer(cors)
}

/// GET-only CORS policy for the configured origins. Origins that are not
/// valid header values are skipped with a warning.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(origins)
        .allow_headers(Any)
}

/// trace_span_logger
///
/// Opens the per-request span, tagged with method, URI and the `x-request-id`
/// set by `SetRequestIdLayer`, so every log line of one request correlates.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
