//! Candidate profile sent to the career advisor: the structured object the
//! external text-generation service sees as the user message.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::assessment::SkillRating;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub skills: Vec<SkillRating>,
    pub experience_years: f64,
    pub education_level: String,
    /// Free-text interests and passions, as typed by the user.
    pub interests: String,
}

impl CandidateProfile {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.skills.is_empty() {
            return Err(AppError::Validation(
                "at least one skill rating is required".to_string(),
            ));
        }
        for skill in &self.skills {
            if !(1..=5).contains(&skill.rating) {
                return Err(AppError::Validation(format!(
                    "rating for '{}' must be between 1 and 5, got {}",
                    skill.name, skill.rating
                )));
            }
        }
        if !self.experience_years.is_finite() || self.experience_years < 0.0 {
            return Err(AppError::Validation(
                "experience_years must be a non-negative number".to_string(),
            ));
        }
        if self.interests.trim().is_empty() {
            return Err(AppError::Validation(
                "interests cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
