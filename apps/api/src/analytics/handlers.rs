//! Axum route handlers for the Analytics API.

use axum::{extract::State, Json};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::analytics::domains::{classify_all, domain_averages};
use crate::analytics::growth::{advanced_milestones, project_growth, AdvancedMilestone, DomainProjection};
use crate::analytics::priority::{rank_priorities, SkillPriority};
use crate::analytics::quadrant::{analyze_quadrant, QuadrantPoint};
use crate::analytics::recommendations::{skill_recommendations, RecommendationSet};
use crate::analytics::report::{build_report, AnalyticsReport};
use crate::errors::AppError;
use crate::models::assessment::Assessment;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyticsRequest {
    pub assessment: Assessment,
    /// Optional jitter seed. Omit for fresh randomness; set for reproducible
    /// quadrant output.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct GrowthResponse {
    pub projections: Vec<DomainProjection>,
    pub milestones: Vec<AdvancedMilestone>,
}

#[derive(Debug, Serialize)]
pub struct QuadrantResponse {
    pub points: Vec<QuadrantPoint>,
    pub priorities: Vec<SkillPriority>,
}

fn jitter_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analytics/report
///
/// The full dashboard payload: summary, domain analysis, benchmarks, growth,
/// quadrant, priorities, recommendations, and insights in one response.
pub async fn handle_report(
    State(_state): State<AppState>,
    Json(request): Json<AnalyticsRequest>,
) -> Result<Json<AnalyticsReport>, AppError> {
    request.assessment.validate()?;

    let mut rng = jitter_rng(request.seed);
    let report = build_report(&request.assessment, &mut rng);

    Ok(Json(report))
}

/// POST /api/v1/analytics/growth
///
/// The 12-month projection per domain plus advanced-level milestones.
pub async fn handle_growth(
    State(_state): State<AppState>,
    Json(request): Json<AnalyticsRequest>,
) -> Result<Json<GrowthResponse>, AppError> {
    request.assessment.validate()?;

    let skills = classify_all(&request.assessment.skills);
    let averages = domain_averages(&skills);
    let projections = project_growth(
        &averages,
        request.assessment.experience_years,
        &request.assessment.learning_goals,
    );
    let milestones = advanced_milestones(&projections);

    Ok(Json(GrowthResponse {
        projections,
        milestones,
    }))
}

/// POST /api/v1/analytics/quadrant
///
/// Impact/effort quadrant points and the ranked development priorities
/// derived from them.
pub async fn handle_quadrant(
    State(_state): State<AppState>,
    Json(request): Json<AnalyticsRequest>,
) -> Result<Json<QuadrantResponse>, AppError> {
    request.assessment.validate()?;

    let mut rng = jitter_rng(request.seed);
    let skills = classify_all(&request.assessment.skills);
    let points = analyze_quadrant(&skills, &request.assessment.learning_goals, &mut rng);
    let priorities = rank_priorities(&points);

    Ok(Json(QuadrantResponse { points, priorities }))
}

/// POST /api/v1/recommendations/skills
///
/// Static table-driven skill-development recommendations.
pub async fn handle_skill_recommendations(
    State(_state): State<AppState>,
    Json(assessment): Json<Assessment>,
) -> Result<Json<RecommendationSet>, AppError> {
    assessment.validate()?;

    Ok(Json(skill_recommendations(&assessment)))
}
