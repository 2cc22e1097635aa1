//! Axum route handlers for the Career Advisor API.

use axum::{extract::State, Json};

use crate::advisor::CareerGuidance;
use crate::errors::AppError;
use crate::models::profile::CandidateProfile;
use crate::state::AppState;

/// POST /api/v1/recommendations/careers
///
/// Forwards the candidate profile to the external advisor and returns its
/// structured guidance. Blocking from the caller's perspective: the only
/// suspension point is the HTTP round-trip.
pub async fn handle_career_recommendations(
    State(state): State<AppState>,
    Json(profile): Json<CandidateProfile>,
) -> Result<Json<CareerGuidance>, AppError> {
    profile.validate()?;

    let guidance = state.advisor.recommend(&profile).await?;

    Ok(Json(guidance))
}
