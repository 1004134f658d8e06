//! HTTP surface: the habit REST routes plus the static web UI.
//!
//! | Method | Path                       | Handler                    |
//! |--------|----------------------------|----------------------------|
//! | GET    | `/api/habits`              | list, 200                  |
//! | POST   | `/api/habits`              | create, 201                |
//! | DELETE | `/api/habits/:id`          | delete, 200 `{message}`    |
//! | POST   | `/api/habits/:id/complete` | complete, 200 `{message, habit}` |
//!
//! Everything else falls through to files under the public directory.

use crate::api::HabitsApi;
use crate::store::SharedStore;
use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderValue, Request};
use axum::middleware::{from_fn_with_state, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, Instrument};

pub mod error;
mod handlers;
mod static_files;

pub use handlers::{CompleteResponse, CreateHabitRequest};

#[derive(Clone)]
pub struct AppState {
    pub api: Arc<HabitsApi<SharedStore>>,
    pub public_dir: Arc<PathBuf>,
    request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    pub fn new(api: HabitsApi<SharedStore>, public_dir: impl Into<PathBuf>) -> Self {
        Self {
            api: Arc::new(api),
            public_dir: Arc::new(public_dir.into()),
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }

    fn next_request_id(&self) -> String {
        format!("req-{:08x}", self.request_id_seed.fetch_add(1, Ordering::Relaxed))
    }
}

async fn request_tracing_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let started = Instant::now();
    let request_id = state.next_request_id();
    let span = tracing::info_span!(
        "http.request",
        request_id = %request_id,
        method = %request.method(),
        route = %request.uri().path(),
    );

    let mut response = next
        .run(request)
        .instrument(span.clone())
        .await;
    span.in_scope(|| {
        info!(
            status = response.status().as_u16(),
            latency_ms = started.elapsed().as_millis() as u64,
            "request finished"
        )
    });
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert("x-request-id", value);
    }
    response
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/habits",
            get(handlers::list_habits_handler).post(handlers::create_habit_handler),
        )
        .route(
            "/api/habits/:id",
            axum::routing::delete(handlers::delete_habit_handler),
        )
        .route(
            "/api/habits/:id/complete",
            post(handlers::complete_habit_handler),
        )
        .route("/", get(static_files::index_handler))
        .fallback(static_files::static_fallback_handler)
        .layer(from_fn_with_state(state.clone(), request_tracing_middleware))
        .with_state(state)
}
