pub mod health;

use axum::{routing::get, routing::post, Router};

use crate::advisor::handlers as advisor_handlers;
use crate::analytics::handlers as analytics_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analytics API
        .route(
            "/api/v1/analytics/report",
            post(analytics_handlers::handle_report),
        )
        .route(
            "/api/v1/analytics/growth",
            post(analytics_handlers::handle_growth),
        )
        .route(
            "/api/v1/analytics/quadrant",
            post(analytics_handlers::handle_quadrant),
        )
        // Recommendations API
        .route(
            "/api/v1/recommendations/skills",
            post(analytics_handlers::handle_skill_recommendations),
        )
        .route(
            "/api/v1/recommendations/careers",
            post(advisor_handlers::handle_career_recommendations),
        )
        .with_state(state)
}
