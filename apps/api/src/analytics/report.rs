//! Report assembly: aggregates every analytics computation into the single
//! response the dashboard renders. All entities here are transient, recomputed
//! per request, and never persisted.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::analytics::benchmark::{generate_benchmarks, BenchmarkEntry};
use crate::analytics::domains::{classify_all, domain_averages, ClassifiedSkill, DomainAverage};
use crate::analytics::growth::{advanced_milestones, project_growth, AdvancedMilestone, DomainProjection};
use crate::analytics::priority::{rank_priorities, PriorityTier, SkillPriority};
use crate::analytics::quadrant::{analyze_quadrant, QuadrantPoint};
use crate::analytics::recommendations::{skill_recommendations, RecommendationSet};
use crate::models::assessment::Assessment;

/// Ratings at or above this count as top skills in the summary.
const EXPERT_THRESHOLD: u8 = 4;
/// Ratings at or below this count as improvement areas.
const IMPROVEMENT_THRESHOLD: u8 = 2;
/// The priority chart shows at most this many skills.
const MAX_PRIORITIES: usize = 12;
/// Strengths/improvement lists in the insights block.
const INSIGHT_SKILLS: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub current_role: String,
    pub experience_years: f64,
    pub education_level: String,
    pub learning_goals: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryStats {
    pub skill_count: usize,
    pub average_rating: f64,
    pub expert_skill_count: usize,
    pub improvement_area_count: usize,
}

/// Count of skills at one proficiency level, for the distribution histogram.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelBucket {
    pub rating: u8,
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillHighlight {
    pub name: String,
    pub rating: u8,
}

/// The narrative block at the end of the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyInsights {
    pub top_strengths: Vec<SkillHighlight>,
    pub improvement_areas: Vec<SkillHighlight>,
    pub strongest_domain: String,
    pub weakest_domain: String,
    /// High-priority skills to focus on next, best first.
    pub focus_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub generated_at: DateTime<Utc>,
    pub profile: ProfileSummary,
    pub summary: SummaryStats,
    pub skills: Vec<ClassifiedSkill>,
    /// Sorted by average descending, for the domain comparison chart.
    pub domain_averages: Vec<DomainAverage>,
    pub level_distribution: Vec<LevelBucket>,
    pub benchmarks: Vec<BenchmarkEntry>,
    pub growth: Vec<DomainProjection>,
    pub milestones: Vec<AdvancedMilestone>,
    pub quadrant: Vec<QuadrantPoint>,
    pub priorities: Vec<SkillPriority>,
    pub recommendations: RecommendationSet,
    pub insights: KeyInsights,
}

pub fn level_label(rating: u8) -> &'static str {
    match rating {
        1 => "Beginner (1)",
        2 => "Basic (2)",
        3 => "Intermediate (3)",
        4 => "Advanced (4)",
        _ => "Expert (5)",
    }
}

/// Builds the full analytics report. Pure apart from the injected jitter RNG
/// and the timestamp.
pub fn build_report<R: Rng>(assessment: &Assessment, rng: &mut R) -> AnalyticsReport {
    let skills = classify_all(&assessment.skills);

    let mut averages = domain_averages(&skills);
    let benchmarks = generate_benchmarks(
        &averages,
        &assessment.current_role,
        assessment.experience_years,
    );
    let growth = project_growth(
        &averages,
        assessment.experience_years,
        &assessment.learning_goals,
    );
    let milestones = advanced_milestones(&growth);

    let quadrant = analyze_quadrant(&skills, &assessment.learning_goals, rng);
    let mut priorities = rank_priorities(&quadrant);
    priorities.truncate(MAX_PRIORITIES);

    let recommendations = skill_recommendations(assessment);

    // Chart order: strongest domain first.
    averages.sort_by(|a, b| b.average.total_cmp(&a.average));

    let summary = summarize(&skills);
    let insights = build_insights(&skills, &averages, &priorities);

    AnalyticsReport {
        generated_at: Utc::now(),
        profile: ProfileSummary {
            current_role: assessment.current_role.clone(),
            experience_years: assessment.experience_years,
            education_level: assessment.education_level.clone(),
            learning_goals: assessment.learning_goals.clone(),
        },
        summary,
        level_distribution: level_distribution(&skills),
        skills,
        domain_averages: averages,
        benchmarks,
        growth,
        milestones,
        quadrant,
        priorities,
        recommendations,
        insights,
    }
}

fn summarize(skills: &[ClassifiedSkill]) -> SummaryStats {
    let sum: u32 = skills.iter().map(|s| u32::from(s.rating)).sum();
    SummaryStats {
        skill_count: skills.len(),
        average_rating: f64::from(sum) / skills.len() as f64,
        expert_skill_count: skills.iter().filter(|s| s.rating >= EXPERT_THRESHOLD).count(),
        improvement_area_count: skills
            .iter()
            .filter(|s| s.rating <= IMPROVEMENT_THRESHOLD)
            .count(),
    }
}

fn level_distribution(skills: &[ClassifiedSkill]) -> Vec<LevelBucket> {
    (1..=5u8)
        .map(|rating| LevelBucket {
            rating,
            label: level_label(rating).to_string(),
            count: skills.iter().filter(|s| s.rating == rating).count(),
        })
        .collect()
}

fn build_insights(
    skills: &[ClassifiedSkill],
    sorted_averages: &[DomainAverage],
    priorities: &[SkillPriority],
) -> KeyInsights {
    let mut by_rating: Vec<&ClassifiedSkill> = skills.iter().collect();
    by_rating.sort_by(|a, b| b.rating.cmp(&a.rating)); // stable: ties keep input order

    let top_strengths = by_rating
        .iter()
        .take(INSIGHT_SKILLS)
        .map(|s| SkillHighlight {
            name: s.name.clone(),
            rating: s.rating,
        })
        .collect();
    let improvement_areas = by_rating
        .iter()
        .rev()
        .take(INSIGHT_SKILLS)
        .map(|s| SkillHighlight {
            name: s.name.clone(),
            rating: s.rating,
        })
        .collect();

    KeyInsights {
        top_strengths,
        improvement_areas,
        strongest_domain: sorted_averages
            .first()
            .map(|a| a.domain.label().to_string())
            .unwrap_or_default(),
        weakest_domain: sorted_averages
            .last()
            .map(|a| a.domain.label().to_string())
            .unwrap_or_default(),
        focus_skills: priorities
            .iter()
            .filter(|p| p.tier == PriorityTier::HighPriority)
            .take(INSIGHT_SKILLS)
            .map(|p| p.skill.clone())
            .collect(),
    }
}
