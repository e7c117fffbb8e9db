pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod state;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::state::AppState;

/// Build the application router over the given state.
///
/// Read routes are public; every mutating route sits behind the bearer
/// gate. The front-end assets are the fallback so unknown paths resolve to
/// static files rather than API 404s.
pub fn app(state: AppState) -> Router {
    let public = Router::new()
        .route("/api/profile", get(handlers::profile::get))
        .route("/api/skills", get(handlers::skills::list))
        .route("/api/skills/top", get(handlers::skills::top))
        .route("/api/projects", get(handlers::projects::list))
        .route("/api/search", get(handlers::projects::search));

    let protected = Router::new()
        .route("/api/profile", put(handlers::profile::update))
        .route("/api/skills", post(handlers::skills::create))
        .route(
            "/api/skills/:id",
            put(handlers::skills::update).delete(handlers::skills::delete),
        )
        .route("/api/projects", post(handlers::projects::create))
        .route(
            "/api/projects/:id",
            put(handlers::projects::update).delete(handlers::projects::delete),
        )
        .route("/api/education", post(handlers::education::create))
        .route(
            "/api/education/:id",
            put(handlers::education::update).delete(handlers::education::delete),
        )
        .route("/api/work", post(handlers::work::create))
        .route(
            "/api/work/:id",
            put(handlers::work::update).delete(handlers::work::delete),
        )
        .route_layer(from_fn_with_state(state.clone(), middleware::require_bearer));

    Router::new()
        .route("/health", get(handlers::health::health))
        .merge(public)
        .merge(protected)
        .fallback_service(ServeDir::new(&state.config.server.static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
