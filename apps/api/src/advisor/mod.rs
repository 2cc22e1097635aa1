//! Career advisor: forwards a candidate profile to the external
//! text-generation service and returns structured career guidance.
//!
//! Trait-based so tests and alternative backends can swap in without touching
//! the endpoint or handler code. `AppState` holds an `Arc<dyn CareerAdvisor>`.
//!
//! This component has no algorithmic core: request construction, schema
//! validation of the reply, and error re-wrapping only. A single unguarded
//! call with no retry, backoff, streaming, or caching.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::{LlmClient, LlmError};
use crate::models::profile::CandidateProfile;

pub mod handlers;
pub mod prompts;

// ────────────────────────────────────────────────────────────────────────────
// Output data models (shared across all advisor backends)
// ────────────────────────────────────────────────────────────────────────────

/// One recommended career path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerMatch {
    pub title: String,
    /// How well the career fits the profile, 0–100.
    pub match_score: u32,
    pub description: String,
    pub requirements: String,
    pub growth_potential: String,
    pub next_steps: String,
}

/// Full guidance returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerGuidance {
    pub careers: Vec<CareerMatch>,
    pub development_plan: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The career advisor trait. Carried in `AppState` as `Arc<dyn CareerAdvisor>`.
#[async_trait]
pub trait CareerAdvisor: Send + Sync {
    async fn recommend(&self, profile: &CandidateProfile) -> Result<CareerGuidance, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// OpenAiAdvisor: default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Advisor backed by the OpenAI chat completions API in JSON mode.
pub struct OpenAiAdvisor(pub LlmClient);

#[async_trait]
impl CareerAdvisor for OpenAiAdvisor {
    async fn recommend(&self, profile: &CandidateProfile) -> Result<CareerGuidance, AppError> {
        let prompt = serde_json::to_string(profile)
            .map_err(|e| AppError::Llm(format!("failed to serialize profile: {e}")))?;

        let guidance = self
            .0
            .call_json::<CareerGuidance>(&prompt, prompts::CAREER_GUIDANCE_SYSTEM)
            .await
            .map_err(wrap_llm_error)?;

        validate_guidance(&guidance)?;

        Ok(guidance)
    }
}

/// Maps client errors to user-facing ones. Quota/billing failures keep their
/// own variant (spec'd as a distinct message); everything else collapses into
/// the generic recommendation failure.
fn wrap_llm_error(e: LlmError) -> AppError {
    match e {
        LlmError::Quota(msg) => AppError::Quota(msg),
        other => AppError::Llm(format!("career recommendations failed: {other}")),
    }
}

/// Validates the reply shape beyond what serde enforces.
fn validate_guidance(guidance: &CareerGuidance) -> Result<(), AppError> {
    if guidance.careers.is_empty() {
        return Err(AppError::Llm(
            "career recommendations failed: reply contained no careers".to_string(),
        ));
    }
    for career in &guidance.careers {
        if career.match_score > 100 {
            return Err(AppError::Llm(format!(
                "career recommendations failed: match_score {} out of range for '{}'",
                career.match_score, career.title
            )));
        }
    }
    Ok(())
}
