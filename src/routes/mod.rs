/// Router Module Index
///
/// One module per versioned path prefix. Each returns a `Router<AppState>`
/// with paths relative to its prefix; `create_router` nests them under
/// `/api/v1/...` and applies the rate limiter to all of them.

/// `/api/v1/main`: Preamble, Chapters 1 - 14, sections and the non-derogable rights table.
pub mod main_body;

/// `/api/v1/schedules`: Schedules 1 - 6.
pub mod schedules;

/// `/api/v1/annexures`: annexure listing and full annexure content.
pub mod annexures;

/// `/api/v1/amendments`: amendments to date.
pub mod amendments;
