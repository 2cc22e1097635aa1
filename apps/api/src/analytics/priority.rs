//! Priority scoring: collapses a quadrant point into a single 0-99 score and
//! a coarse tier for the learning-roadmap chart.
//!
//! Weights: 40% impact, 25% inverted effort, 20% goal alignment, 15% inverted
//! current level (gap size). Tier boundaries are inclusive on the upper edge:
//! score ≤ 30 → Consider Later, ≤ 60 → Medium Priority, > 60 → High Priority.

use serde::{Deserialize, Serialize};

use crate::analytics::domains::Domain;
use crate::analytics::quadrant::QuadrantPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorityTier {
    #[serde(rename = "Consider Later")]
    ConsiderLater,
    #[serde(rename = "Medium Priority")]
    MediumPriority,
    #[serde(rename = "High Priority")]
    HighPriority,
}

/// One ranked development priority.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillPriority {
    pub skill: String,
    pub domain: Domain,
    pub current_level: u8,
    pub score: u8,
    pub tier: PriorityTier,
}

/// Weighted priority score, rounded and clamped to [0, 99].
///
/// `round(100 · (0.40·impact/10 + 0.25·max(1, 10−effort)/10
///              + 0.20·alignment/15 + 0.15·(5−level)/5))`
pub fn priority_score(impact: f64, effort: f64, goal_alignment: u32, current_level: u8) -> u8 {
    let impact_factor = impact / 10.0;
    let effort_factor = (10.0 - effort).max(1.0) / 10.0; // invert: lower effort scores higher
    let alignment_factor = f64::from(goal_alignment) / 15.0;
    let level_factor = (5.0 - f64::from(current_level)) / 5.0; // bigger gap scores higher

    let raw = (impact_factor * 0.40
        + effort_factor * 0.25
        + alignment_factor * 0.20
        + level_factor * 0.15)
        * 100.0;

    raw.round().clamp(0.0, 99.0) as u8
}

/// Tier for a score. Bin edges are upper-inclusive.
pub fn tier_for(score: u8) -> PriorityTier {
    if score <= 30 {
        PriorityTier::ConsiderLater
    } else if score <= 60 {
        PriorityTier::MediumPriority
    } else {
        PriorityTier::HighPriority
    }
}

/// Ranks quadrant points by priority score, highest first. Ties keep the
/// quadrant's skill order.
pub fn rank_priorities(points: &[QuadrantPoint]) -> Vec<SkillPriority> {
    let mut priorities: Vec<SkillPriority> = points
        .iter()
        .map(|p| {
            let score = priority_score(p.impact, p.effort, p.goal_alignment, p.current_level);
            SkillPriority {
                skill: p.skill.clone(),
                domain: p.domain,
                current_level: p.current_level,
                score,
                tier: tier_for(score),
            }
        })
        .collect();
    priorities.sort_by(|a, b| b.score.cmp(&a.score));
    priorities
}
