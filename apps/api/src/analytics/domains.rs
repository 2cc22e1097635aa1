//! Domain classification: maps each skill name to one of a fixed, closed set
//! of domains. Classification is total: every input resolves to a label,
//! defaulting to `Other`.

use serde::{Deserialize, Serialize};

use crate::models::assessment::SkillRating;

/// The closed set of skill domains. Display labels match the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    #[serde(rename = "Programming")]
    Programming,
    #[serde(rename = "Data & Analytics")]
    DataAnalytics,
    #[serde(rename = "Infrastructure")]
    Infrastructure,
    #[serde(rename = "Soft Skills")]
    SoftSkills,
    #[serde(rename = "Other")]
    Other,
}

impl Domain {
    pub fn label(self) -> &'static str {
        match self {
            Domain::Programming => "Programming",
            Domain::DataAnalytics => "Data & Analytics",
            Domain::Infrastructure => "Infrastructure",
            Domain::SoftSkills => "Soft Skills",
            Domain::Other => "Other",
        }
    }

    /// All domains, in stable presentation order.
    pub const ALL: [Domain; 5] = [
        Domain::Programming,
        Domain::DataAnalytics,
        Domain::Infrastructure,
        Domain::SoftSkills,
        Domain::Other,
    ];

    /// Domains checked by the classifier (everything except the catch-all).
    const CLASSIFIED: [Domain; 4] = [
        Domain::Programming,
        Domain::DataAnalytics,
        Domain::Infrastructure,
        Domain::SoftSkills,
    ];
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-domain classifier keyword lists, matched case-insensitively as
/// substrings of the skill name. Kept as data so the classification rules are
/// independently testable and extensible.
pub const DOMAIN_KEYWORDS: &[(Domain, &[&str])] = &[
    (
        Domain::Programming,
        &["frontend", "backend", "database", "version", "mobile", "testing"],
    ),
    (
        Domain::DataAnalytics,
        &["data", "analysis", "machine", "statistical", "big data", "intelligence"],
    ),
    (
        Domain::Infrastructure,
        &["cloud", "devops", "system", "security", "network", "container"],
    ),
    (
        Domain::SoftSkills,
        &["communication", "management", "problem", "collaboration", "time", "adapt"],
    ),
];

/// A skill rating tagged with its classified domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedSkill {
    pub name: String,
    pub rating: u8,
    pub domain: Domain,
}

/// Mean rating per domain. Only domains with at least one skill are emitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainAverage {
    pub domain: Domain,
    pub average: f64,
    pub skill_count: usize,
}

/// Classifies one skill name against the full set of rated skill names.
///
/// Two passes: (a) a domain-prefixed composite variant of the name exists
/// among the rated skills (`"{domain}_{skill}"` or `"{domain} {skill}"`);
/// (b) case-insensitive keyword substring match. Falls through to `Other`.
pub fn classify_skill(
    skill: &str,
    rated_names: &[&str],
    keywords: &[(Domain, &[&str])],
) -> Domain {
    for domain in Domain::CLASSIFIED {
        let underscore = format!("{}_{skill}", domain.label());
        let spaced = format!("{} {skill}", domain.label());
        if rated_names.contains(&underscore.as_str()) || rated_names.contains(&spaced.as_str()) {
            return domain;
        }
    }

    let lower = skill.to_lowercase();
    for (domain, kws) in keywords {
        if kws.iter().any(|kw| lower.contains(kw)) {
            return *domain;
        }
    }

    Domain::Other
}

/// Classifies every rated skill, preserving input order.
pub fn classify_all(skills: &[SkillRating]) -> Vec<ClassifiedSkill> {
    let names: Vec<&str> = skills.iter().map(|s| s.name.as_str()).collect();
    skills
        .iter()
        .map(|s| ClassifiedSkill {
            name: s.name.clone(),
            rating: s.rating,
            domain: classify_skill(&s.name, &names, DOMAIN_KEYWORDS),
        })
        .collect()
}

/// Mean rating per domain, in `Domain::ALL` order. Means stay within [1, 5]
/// because every rating does.
pub fn domain_averages(skills: &[ClassifiedSkill]) -> Vec<DomainAverage> {
    Domain::ALL
        .iter()
        .filter_map(|&domain| {
            let ratings: Vec<u8> = skills
                .iter()
                .filter(|s| s.domain == domain)
                .map(|s| s.rating)
                .collect();
            if ratings.is_empty() {
                return None;
            }
            let sum: u32 = ratings.iter().map(|&r| u32::from(r)).sum();
            Some(DomainAverage {
                domain,
                average: f64::from(sum) / ratings.len() as f64,
                skill_count: ratings.len(),
            })
        })
        .collect()
}
