use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::{sync::Arc, time::Duration};
use tokio::{sync::Mutex, time::Instant};

use crate::error::ApiError;

#[derive(Debug)]
struct Window {
    started: Instant,
    admitted: u32,
}

/// FixedWindowLimiter
///
/// Process-wide fixed-window limiter: at most `permits` requests are admitted
/// per `window`. A new window opens with the first request after the current
/// one has elapsed; unused permits do not carry over.
#[derive(Debug)]
pub struct FixedWindowLimiter {
    permits: u32,
    window: Duration,
    current: Mutex<Window>,
}

pub type RateLimiterState = Arc<FixedWindowLimiter>;

impl FixedWindowLimiter {
    pub fn new(permits: u32, window: Duration) -> Self {
        Self {
            permits,
            window,
            current: Mutex::new(Window {
                started: Instant::now(),
                admitted: 0,
            }),
        }
    }

    /// Admits the request if the current window still has a permit.
    pub async fn try_acquire(&self) -> bool {
        let now = Instant::now();
        let mut window = self.current.lock().await;
        if now.duration_since(window.started) >= self.window {
            window.started = now;
            window.admitted = 0;
        }
        if window.admitted < self.permits {
            window.admitted += 1;
            true
        } else {
            false
        }
    }
}

/// rate_limit
///
/// Middleware guarding the `/api/v1` routes. Rejected requests never reach
/// the handler or the database.
pub async fn rate_limit(
    State(limiter): State<RateLimiterState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if limiter.try_acquire().await {
        Ok(next.run(request).await)
    } else {
        Err(ApiError::RateLimited)
    }
}
