//! Assessment input: the self-rated skill set plus profile fields collected
//! by the dashboard form. All analytics endpoints take this as their request body.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// A single self-rated skill. Ratings run 1 (beginner) to 5 (expert).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRating {
    pub name: String,
    pub rating: u8,
}

/// One complete self-assessment. Transient: nothing is persisted between requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub skills: Vec<SkillRating>,
    /// Free-form role label. Known roles get a benchmark modifier; unknown roles default to 0.
    #[serde(default)]
    pub current_role: String,
    pub experience_years: f64,
    #[serde(default)]
    pub education_level: String,
    /// Free-text learning goals, matched against domain keyword tables.
    #[serde(default)]
    pub learning_goals: Vec<String>,
}

impl Assessment {
    /// Boundary validation. The analytics functions themselves are total over
    /// their documented ranges, so all range checking happens here, once.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.skills.is_empty() {
            return Err(AppError::Validation(
                "at least one skill rating is required".to_string(),
            ));
        }

        for skill in &self.skills {
            if skill.name.trim().is_empty() {
                return Err(AppError::Validation(
                    "skill names cannot be empty".to_string(),
                ));
            }
            if !(1..=5).contains(&skill.rating) {
                return Err(AppError::Validation(format!(
                    "rating for '{}' must be between 1 and 5, got {}",
                    skill.name, skill.rating
                )));
            }
        }

        for (i, skill) in self.skills.iter().enumerate() {
            if self.skills[..i].iter().any(|s| s.name == skill.name) {
                return Err(AppError::Validation(format!(
                    "duplicate skill name '{}'",
                    skill.name
                )));
            }
        }

        if !self.experience_years.is_finite() || self.experience_years < 0.0 {
            return Err(AppError::Validation(
                "experience_years must be a non-negative number".to_string(),
            ));
        }

        Ok(())
    }
}
