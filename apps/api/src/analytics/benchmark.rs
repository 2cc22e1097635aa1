//! Benchmark generator: synthesizes an "industry average" per domain from the
//! user's role and experience. Deterministic, no error conditions.

use serde::{Deserialize, Serialize};

use crate::analytics::domains::{Domain, DomainAverage};

/// Domain-specific industry baselines.
const BASE_BENCHMARKS: &[(Domain, f64)] = &[
    (Domain::Programming, 3.5),
    (Domain::DataAnalytics, 3.2),
    (Domain::Infrastructure, 3.3),
    (Domain::SoftSkills, 3.7),
    (Domain::Other, 3.0),
];

const DEFAULT_BASE: f64 = 3.0;

/// Your rating next to the synthetic benchmark for one domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkEntry {
    pub domain: Domain,
    pub your_rating: f64,
    pub benchmark: f64,
}

/// Role-based benchmark modifier. Unknown roles get 0.
pub fn role_modifier(role: &str) -> f64 {
    match role {
        "Student" => -1.0,
        "Junior Developer" => -0.5,
        "Mid-level Developer" => 0.0,
        "Senior Developer" => 0.5,
        "Tech Lead" => 0.8,
        "Manager" => 0.3,
        _ => 0.0,
    }
}

fn base_benchmark(domain: Domain) -> f64 {
    BASE_BENCHMARKS
        .iter()
        .find(|(d, _)| *d == domain)
        .map(|(_, base)| *base)
        .unwrap_or(DEFAULT_BASE)
}

/// `benchmark = min(5.0, base[domain] + role_modifier + min(1.0, experience/10))`.
/// Experience contribution caps at 10 years.
pub fn generate_benchmarks(
    domain_avgs: &[DomainAverage],
    role: &str,
    experience_years: f64,
) -> Vec<BenchmarkEntry> {
    let modifier = role_modifier(role);
    let exp_modifier = (experience_years / 10.0).min(1.0);

    domain_avgs
        .iter()
        .map(|avg| BenchmarkEntry {
            domain: avg.domain,
            your_rating: avg.average,
            benchmark: (base_benchmark(avg.domain) + modifier + exp_modifier).min(5.0),
        })
        .collect()
}
