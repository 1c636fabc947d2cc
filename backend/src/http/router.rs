//! Router configuration for the HTTP API.
//!
//! Sets up all routes and middleware (CORS, compression, tracing).

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // The map front-end is served from a different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route("/clock", get(handlers::get_clock))
        // Individual rules
        .route("/meters/enforcement", get(handlers::get_meter_enforcement))
        .route("/winter-ban", get(handlers::get_winter_ban))
        .route("/permit-zone", get(handlers::get_permit_zone))
        .route("/street-cleaning", get(handlers::get_street_cleaning))
        // Composed verdicts
        .route("/parkability", post(handlers::assess_parkability))
        .route("/parkability/batch", post(handlers::assess_parkability_batch))
        // Location catalog
        .route(
            "/locations",
            get(handlers::list_locations).post(handlers::upsert_location),
        )
        .route(
            "/locations/{location_id}/parkability",
            get(handlers::get_location_parkability),
        );

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::LocalRepository;
    use crate::db::repository::LocationRepository;
    use crate::models::CIVIL_TIMEZONE;
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let repo = Arc::new(LocalRepository::new()) as Arc<dyn LocationRepository>;
        let state = AppState::new(repo, CIVIL_TIMEZONE);
        let _router = create_router(state);
    }
}
