//! Growth projector: projects a 12-month skill trajectory per domain using a
//! negative-exponential approach-to-ceiling curve.
//!
//! `level(m) = min(5.0, current + (5 − current) · (1 − e^(−rate·m)))`,
//! with `level(0) = current` exactly. The bracketed term is monotonic in `m`
//! for `rate > 0`, so the sequence is non-decreasing and bounded by 5.0.

use serde::{Deserialize, Serialize};

use crate::analytics::domains::{Domain, DomainAverage};

/// Projection horizon in months. Points cover the inclusive range [0, 12].
pub const PROJECTION_MONTHS: u32 = 12;

const MAX_LEVEL: f64 = 5.0;

/// Goal-alignment keyword sets for the projector. A domain is aligned when any
/// goal contains any of its keywords (case-sensitive substring, matching the
/// capitalized phrasing of the goal picker).
pub const GROWTH_ALIGNMENT_KEYWORDS: &[(Domain, &[&str])] = &[
    (Domain::Programming, &["Development", "Stack", "Mobile"]),
    (Domain::DataAnalytics, &["Data", "ML", "Science"]),
    (Domain::Infrastructure, &["Cloud", "DevOps", "Security"]),
    (Domain::SoftSkills, &["Leadership", "Management"]),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub month: u32,
    pub level: f64,
}

/// The 13-point trajectory for one domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainProjection {
    pub domain: Domain,
    pub current_level: f64,
    pub learning_rate: f64,
    pub goal_aligned: bool,
    pub points: Vec<ProjectionPoint>,
}

/// First month a domain's projection reaches the advanced level (4.0).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvancedMilestone {
    pub domain: Domain,
    pub month: u32,
    pub level: f64,
}

/// Base learning rate by experience bracket: beginners progress fastest.
pub fn base_learning_rate(experience_years: f64) -> f64 {
    if experience_years < 2.0 {
        0.20
    } else if experience_years < 5.0 {
        0.15
    } else {
        0.10
    }
}

/// True when any goal contains any of the domain's alignment keywords.
pub fn goal_aligned(domain: Domain, goals: &[String], table: &[(Domain, &[&str])]) -> bool {
    let Some((_, keywords)) = table.iter().find(|(d, _)| *d == domain) else {
        return false;
    };
    goals
        .iter()
        .any(|goal| keywords.iter().any(|kw| goal.contains(kw)))
}

/// Per-domain rate: base × (1.5 aligned | 0.8 not) × (1 − current/6).
/// The difficulty factor slows growth at higher current levels.
pub fn domain_learning_rate(base_rate: f64, aligned: bool, current_level: f64) -> f64 {
    let goal_factor = if aligned { 1.5 } else { 0.8 };
    let difficulty_factor = 1.0 - current_level / 6.0;
    base_rate * goal_factor * difficulty_factor
}

/// Projected level at a given month. Month 0 returns `current` exactly;
/// rate 0 keeps the curve flat at `current`.
pub fn projected_level(current: f64, rate: f64, month: u32) -> f64 {
    if month == 0 {
        return current;
    }
    let max_growth = MAX_LEVEL - current;
    let growth = max_growth * (1.0 - (-rate * f64::from(month)).exp());
    (current + growth).min(MAX_LEVEL)
}

/// Projects all domains over [0, PROJECTION_MONTHS].
pub fn project_growth(
    domain_avgs: &[DomainAverage],
    experience_years: f64,
    goals: &[String],
) -> Vec<DomainProjection> {
    let base_rate = base_learning_rate(experience_years);

    domain_avgs
        .iter()
        .map(|avg| {
            let aligned = goal_aligned(avg.domain, goals, GROWTH_ALIGNMENT_KEYWORDS);
            let rate = domain_learning_rate(base_rate, aligned, avg.average);
            let points = (0..=PROJECTION_MONTHS)
                .map(|month| ProjectionPoint {
                    month,
                    level: projected_level(avg.average, rate, month),
                })
                .collect();
            DomainProjection {
                domain: avg.domain,
                current_level: avg.average,
                learning_rate: rate,
                goal_aligned: aligned,
                points,
            }
        })
        .collect()
}

/// For each domain, the first month (>0) its projection reaches level 4.0.
/// Domains already at or above 4.0, or never reaching it, produce no milestone.
pub fn advanced_milestones(projections: &[DomainProjection]) -> Vec<AdvancedMilestone> {
    projections
        .iter()
        .filter_map(|projection| {
            projection
                .points
                .iter()
                .find(|p| p.level >= 4.0)
                .filter(|p| p.month > 0)
                .map(|p| AdvancedMilestone {
                    domain: projection.domain,
                    month: p.month,
                    level: p.level,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn avg(domain: Domain, average: f64) -> DomainAverage {
        DomainAverage {
            domain,
            average,
            skill_count: 1,
        }
    }

    fn goals(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_learning_rate_brackets() {
        assert_eq!(base_learning_rate(0.0), 0.20);
        assert_eq!(base_learning_rate(1.9), 0.20);
        assert_eq!(base_learning_rate(2.0), 0.15);
        assert_eq!(base_learning_rate(4.9), 0.15);
        assert_eq!(base_learning_rate(5.0), 0.10);
        assert_eq!(base_learning_rate(30.0), 0.10);
    }

    #[test]
    fn test_goal_alignment_matches_keywords() {
        let g = goals(&["Full-Stack Development", "Cloud Architecture"]);
        assert!(goal_aligned(
            Domain::Programming,
            &g,
            GROWTH_ALIGNMENT_KEYWORDS
        ));
        assert!(goal_aligned(
            Domain::Infrastructure,
            &g,
            GROWTH_ALIGNMENT_KEYWORDS
        ));
        assert!(!goal_aligned(
            Domain::DataAnalytics,
            &g,
            GROWTH_ALIGNMENT_KEYWORDS
        ));
        assert!(!goal_aligned(Domain::Other, &g, GROWTH_ALIGNMENT_KEYWORDS));
    }

    #[test]
    fn test_projection_is_monotonic_and_bounded() {
        for current in [1.0, 2.5, 4.0, 4.9] {
            let projections = project_growth(&[avg(Domain::Programming, current)], 3.0, &[]);
            let points = &projections[0].points;
            assert_eq!(points.len(), 13);
            for pair in points.windows(2) {
                assert!(
                    pair[1].level >= pair[0].level,
                    "projection decreased at month {} for current {current}",
                    pair[1].month
                );
            }
            assert!(points[12].level <= 5.0);
        }
    }

    #[test]
    fn test_month_zero_is_exactly_current() {
        let projections = project_growth(&[avg(Domain::SoftSkills, 3.3)], 1.0, &[]);
        assert_eq!(projections[0].points[0].level, 3.3);
    }

    #[test]
    fn test_zero_rate_is_flat() {
        for month in 0..=PROJECTION_MONTHS {
            assert_eq!(projected_level(2.7, 0.0, month), 2.7);
        }
    }

    #[test]
    fn test_ceiling_domain_stays_at_five() {
        let projections = project_growth(&[avg(Domain::DataAnalytics, 5.0)], 0.5, &[]);
        for point in &projections[0].points {
            assert_eq!(point.level, 5.0, "month {} drifted off ceiling", point.month);
        }
    }

    #[test]
    fn test_unaligned_beginner_month_six_reference_value() {
        // current 2, 1 year experience: rate = 0.20 × 0.8 × (1 − 2/6) ≈ 0.10667
        // level(6) = 2 + 3 × (1 − e^(−0.64)) ≈ 3.4181
        let projections = project_growth(&[avg(Domain::Programming, 2.0)], 1.0, &[]);
        let level_6 = projections[0].points[6].level;
        assert!(
            (level_6 - 3.4181).abs() < 1e-3,
            "level(6) was {level_6}, expected ≈3.4181"
        );
    }

    #[test]
    fn test_aligned_domain_grows_faster() {
        let aligned = project_growth(
            &[avg(Domain::Programming, 2.0)],
            1.0,
            &goals(&["Full-Stack Development"]),
        );
        let unaligned = project_growth(&[avg(Domain::Programming, 2.0)], 1.0, &[]);
        assert!(aligned[0].points[6].level > unaligned[0].points[6].level);
        assert!(aligned[0].goal_aligned);
        assert!(!unaligned[0].goal_aligned);
    }

    #[test]
    fn test_milestone_is_first_month_reaching_four() {
        let projections = project_growth(
            &[avg(Domain::Programming, 3.0)],
            0.0,
            &goals(&["Full-Stack Development"]),
        );
        let milestones = advanced_milestones(&projections);
        assert_eq!(milestones.len(), 1);
        let m = &milestones[0];
        assert!(m.level >= 4.0);
        assert!(m.month > 0);
        // The preceding month must still be below 4.0.
        let prev = &projections[0].points[(m.month - 1) as usize];
        assert!(prev.level < 4.0);
    }

    #[test]
    fn test_no_milestone_when_already_advanced() {
        let projections = project_growth(&[avg(Domain::SoftSkills, 4.5)], 2.0, &[]);
        assert!(advanced_milestones(&projections).is_empty());
    }

    #[test]
    fn test_no_milestone_when_growth_too_slow() {
        // Experienced, unaligned, starting low: rate 0.10 × 0.8 × (1 − 1/6) ≈ 0.067,
        // level(12) = 1 + 4 × (1 − e^(−0.8)) ≈ 3.20, never reaches 4.0.
        let projections = project_growth(&[avg(Domain::Other, 1.0)], 10.0, &[]);
        assert!(projections[0].points[12].level < 4.0);
        assert!(advanced_milestones(&projections).is_empty());
    }
}
