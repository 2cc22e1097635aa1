//! Impact/effort quadrant analysis: derives per-skill effort, impact, and
//! goal alignment for the quadrant scatter chart.
//!
//! Effort and impact carry a small uniform jitter so co-rated skills don't
//! stack on the same point. The random source is injected by the caller
//! (seedable via the API), so output is reproducible in tests.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::analytics::domains::{ClassifiedSkill, Domain};

/// Goal-alignment keyword sets for the scorer. Broader than the projector's
/// table: skill-level alignment tolerates looser goal phrasing.
pub const GOAL_ALIGNMENT_KEYWORDS: &[(Domain, &[&str])] = &[
    (Domain::Programming, &["Development", "Stack", "Full", "Web"]),
    (Domain::DataAnalytics, &["Data", "Analytics", "ML", "Science"]),
    (Domain::Infrastructure, &["Cloud", "DevOps", "Security", "SRE"]),
    (Domain::SoftSkills, &["Leadership", "Management"]),
];

const BASE_ALIGNMENT: u32 = 5;
const SKILL_MATCH_BONUS: u32 = 5;
const DOMAIN_MATCH_BONUS: u32 = 3;
const MAX_ALIGNMENT: u32 = 15;

/// One skill positioned on the impact/effort plane.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuadrantPoint {
    pub skill: String,
    pub domain: Domain,
    pub current_level: u8,
    /// Effort to improve, ~1–10. Lower is easier.
    pub effort: f64,
    /// Potential impact of improving, ~1–10. Higher is better.
    pub impact: f64,
    /// Alignment with the stated learning goals, 0–15.
    pub goal_alignment: u32,
    pub recommendation: String,
}

/// Positions every skill on the quadrant plane.
pub fn analyze_quadrant<R: Rng>(
    skills: &[ClassifiedSkill],
    goals: &[String],
    rng: &mut R,
) -> Vec<QuadrantPoint> {
    skills
        .iter()
        .map(|skill| {
            let level = f64::from(skill.rating);
            let effort = (10.0 - level * 1.5 + rng.random_range(-0.5..=0.5)).max(1.0);
            let impact = (10.0 - (level - 1.0) * 2.0 + rng.random_range(-1.0..=1.0)).max(1.0);
            let alignment =
                goal_alignment(&skill.name, skill.domain, goals, GOAL_ALIGNMENT_KEYWORDS);
            QuadrantPoint {
                skill: skill.name.clone(),
                domain: skill.domain,
                current_level: skill.rating,
                effort,
                impact,
                goal_alignment: alignment,
                recommendation: quadrant_recommendation(effort, impact).to_string(),
            }
        })
        .collect()
}

/// How well a skill aligns with the learning goals: base 5, +5 per goal
/// sharing a word with the skill name, +3 per goal containing a domain
/// keyword, capped at 15.
pub fn goal_alignment(
    skill: &str,
    domain: Domain,
    goals: &[String],
    table: &[(Domain, &[&str])],
) -> u32 {
    let mut score = BASE_ALIGNMENT;
    let skill_lower = skill.to_lowercase();
    let domain_keywords = table
        .iter()
        .find(|(d, _)| *d == domain)
        .map(|(_, kws)| *kws)
        .unwrap_or(&[]);

    for goal in goals {
        if goal
            .split_whitespace()
            .any(|word| skill_lower.contains(&word.to_lowercase()))
        {
            score += SKILL_MATCH_BONUS;
        }
        if domain_keywords.iter().any(|kw| goal.contains(kw)) {
            score += DOMAIN_MATCH_BONUS;
        }
    }

    score.min(MAX_ALIGNMENT)
}

/// Quadrant label for a point. Boundaries: the impact axis splits at >5,
/// the effort axis at <5.
pub fn quadrant_recommendation(effort: f64, impact: f64) -> &'static str {
    if impact > 5.0 && effort < 5.0 {
        "High Priority - Quick Win"
    } else if impact > 5.0 {
        "Strategic Investment - High Value"
    } else if effort < 5.0 {
        "Easy Improvement - Lower Priority"
    } else {
        "Consider Later - Low Value/High Effort"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn skill(name: &str, rating: u8, domain: Domain) -> ClassifiedSkill {
        ClassifiedSkill {
            name: name.to_string(),
            rating,
            domain,
        }
    }

    fn goals(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_effort_and_impact_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let skills: Vec<ClassifiedSkill> = (1..=5)
            .map(|r| skill(&format!("Skill {r}"), r, Domain::Programming))
            .collect();
        for point in analyze_quadrant(&skills, &[], &mut rng) {
            assert!(
                point.effort >= 1.0 && point.effort <= 10.0,
                "effort {} out of range",
                point.effort
            );
            // Impact can reach 11 at level 1 with maximal jitter.
            assert!(
                point.impact >= 1.0 && point.impact <= 11.0,
                "impact {} out of range",
                point.impact
            );
        }
    }

    #[test]
    fn test_seeded_rng_makes_output_reproducible() {
        let skills = vec![
            skill("Frontend Development", 2, Domain::Programming),
            skill("Cloud Services", 4, Domain::Infrastructure),
        ];
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let first = analyze_quadrant(&skills, &[], &mut a);
        let second = analyze_quadrant(&skills, &[], &mut b);
        for (x, y) in first.iter().zip(second.iter()) {
            assert_eq!(x.effort, y.effort);
            assert_eq!(x.impact, y.impact);
        }
    }

    #[test]
    fn test_low_rated_skill_needs_more_effort_and_has_more_impact() {
        let skills = vec![
            skill("Beginner Skill", 1, Domain::Other),
            skill("Expert Skill", 5, Domain::Other),
        ];
        let mut rng = StdRng::seed_from_u64(3);
        let points = analyze_quadrant(&skills, &[], &mut rng);
        // Jitter is at most ±0.5 / ±1, far smaller than the 6-point level spread.
        assert!(points[0].effort > points[1].effort);
        assert!(points[0].impact > points[1].impact);
    }

    #[test]
    fn test_goal_alignment_base_without_goals() {
        assert_eq!(
            goal_alignment("Anything", Domain::Other, &[], GOAL_ALIGNMENT_KEYWORDS),
            5
        );
    }

    #[test]
    fn test_goal_alignment_skill_name_match_adds_five() {
        let g = goals(&["Mobile apps"]);
        // "mobile" from the goal appears in the skill name: 5 + 5 = 10.
        assert_eq!(
            goal_alignment("Mobile Development", Domain::Other, &g, GOAL_ALIGNMENT_KEYWORDS),
            10
        );
    }

    #[test]
    fn test_goal_alignment_domain_match_adds_three() {
        let g = goals(&["Cloud Architecture"]);
        assert_eq!(
            goal_alignment("Networking", Domain::Infrastructure, &g, GOAL_ALIGNMENT_KEYWORDS),
            8
        );
    }

    #[test]
    fn test_goal_alignment_caps_at_fifteen() {
        let g = goals(&[
            "Data Engineering",
            "Data Science",
            "Advanced Data Analytics",
        ]);
        // Each goal matches both the skill name and the domain keywords;
        // uncapped this would be 5 + 3×(5+3) = 29.
        assert_eq!(
            goal_alignment("Data Analysis", Domain::DataAnalytics, &g, GOAL_ALIGNMENT_KEYWORDS),
            15
        );
    }

    #[test]
    fn test_quadrant_labels() {
        assert_eq!(quadrant_recommendation(2.0, 8.0), "High Priority - Quick Win");
        assert_eq!(
            quadrant_recommendation(7.0, 8.0),
            "Strategic Investment - High Value"
        );
        assert_eq!(
            quadrant_recommendation(2.0, 3.0),
            "Easy Improvement - Lower Priority"
        );
        assert_eq!(
            quadrant_recommendation(7.0, 3.0),
            "Consider Later - Low Value/High Effort"
        );
    }

    #[test]
    fn test_quadrant_boundaries_are_exclusive_on_the_split() {
        // impact exactly 5 is "low impact"; effort exactly 5 is "high effort".
        assert_eq!(
            quadrant_recommendation(5.0, 5.0),
            "Consider Later - Low Value/High Effort"
        );
    }
}
