//! Static skill-development recommendations: canned guidance assembled from
//! lookup tables keyed by skill, role, and learning goal. No LLM involved.

use serde::{Deserialize, Serialize};

use crate::models::assessment::Assessment;

/// Ratings at or below this are treated as foundational gaps.
const JUNIOR_THRESHOLD: u8 = 2;
/// Ratings at or above this qualify for advanced-topic suggestions.
const MID_THRESHOLD: u8 = 3;

/// Roles eligible for specialization-path suggestions.
const SPECIALIZATION_ROLES: &[&str] = &[
    "Mid-level Developer",
    "Senior Developer",
    "Tech Lead",
    "Manager",
];

/// Curated learning resources per skill.
const RESOURCES: &[(&str, &str)] = &[
    ("Frontend Development", "MDN Web Docs, Frontend Masters, CSS-Tricks"),
    ("Backend Development", "Node.js docs, Django Project, Spring Framework docs"),
    ("Database Management", "PostgreSQL tutorials, MongoDB University, SQL exercises"),
    ("Version Control/Git", "GitHub Learning Lab, Git documentation, Atlassian Git tutorials"),
    ("Mobile Development", "Google Developer Training, Apple Developer docs, Flutter tutorials"),
    ("Testing & QA", "Test Automation University, Software Testing Help, Cypress docs"),
    ("Data Analysis", "Kaggle, DataCamp, Analytics Vidhya"),
    ("Data Visualization", "D3.js gallery, Tableau Public, Observable"),
    ("Machine Learning", "TensorFlow tutorials, PyTorch docs, fast.ai"),
    ("Statistical Analysis", "Khan Academy, StatQuest, R for Data Science"),
    ("Big Data Technologies", "Apache Spark docs, Hadoop tutorials, Databricks Academy"),
    ("Business Intelligence", "Power BI learning center, Tableau tutorials, ThoughtSpot U"),
    ("Cloud Services", "AWS Training, Google Cloud Training, Azure Learn"),
    ("DevOps", "Docker docs, Kubernetes learning path, Jenkins tutorials"),
    ("System Administration", "Linux Academy, Red Hat docs, Microsoft Learn"),
    ("Cybersecurity", "TryHackMe, HackTheBox, OWASP resources"),
    ("Networking", "Cisco Learning Network, Wireshark University, Networking Academy"),
    ("Containerization", "Docker tutorials, Kubernetes docs, Red Hat OpenShift docs"),
    ("Technical Communication", "Technical Writing courses, Grammarly, HackMD tutorials"),
    ("Project Management", "PMI resources, Agile Alliance, Scrum Guides"),
    ("Problem Solving", "LeetCode, HackerRank, Project Euler"),
    ("Team Collaboration", "Atlassian Team Playbook, GitLab Team Handbook, Slack guides"),
    ("Time Management", "Pomodoro technique resources, Time blocking guides, Todoist"),
    ("Adaptability", "LinkedIn Learning courses, Pluralsight, Coursera certificates"),
];

/// Foundational guidance for low-rated skills.
const BEGINNER_DESCRIPTIONS: &[(&str, &str)] = &[
    ("Frontend Development", "Focus on HTML, CSS basics and JavaScript fundamentals"),
    ("Backend Development", "Learn basic server concepts, RESTful APIs, and database connectivity"),
    ("Database Management", "Master SQL fundamentals and database design principles"),
    ("Version Control/Git", "Practice Git basics: commit, push, pull, and branch management"),
    ("Cloud Services", "Understand fundamental cloud concepts and basic AWS/Azure services"),
    ("DevOps", "Learn CI/CD concepts and basic pipeline construction"),
    ("Data Analysis", "Build skills in data cleaning, exploration, and basic statistics"),
    ("Machine Learning", "Learn foundations of ML algorithms and basic model training"),
];

/// Deep-dive guidance for skills being pushed past the intermediate plateau.
const INTERMEDIATE_DESCRIPTIONS: &[(&str, &str)] = &[
    ("Frontend Development", "Master modern JavaScript frameworks like React, Vue or Angular"),
    ("Backend Development", "Implement authentication, API security, and advanced server patterns"),
    ("Database Management", "Optimize queries, design schemas, and implement migrations"),
    ("Version Control/Git", "Practice advanced Git flows, rebasing, and team collaboration"),
    ("Cloud Services", "Implement serverless architectures and multi-region deployments"),
    ("DevOps", "Design robust CI/CD pipelines and infrastructure as code"),
    ("Data Analysis", "Apply advanced statistical methods and build data processing pipelines"),
    ("Machine Learning", "Implement and fine-tune complex ML models for specific domains"),
];

/// Learning goals mapped to the skills that advance them.
const GOAL_RELATED_SKILLS: &[(&str, &[&str])] = &[
    ("Full-Stack", &["Frontend Development", "Backend Development", "Database Management"]),
    ("Cloud", &["Cloud Services", "DevOps", "System Administration"]),
    ("Data Science", &["Data Analysis", "Machine Learning", "Statistical Analysis"]),
    ("DevOps", &["DevOps", "Containerization", "Cloud Services"]),
    ("Security", &["Cybersecurity", "System Administration", "Networking"]),
    ("Mobile", &["Mobile Development", "Frontend Development", "Testing & QA"]),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub level: String,
    pub description: String,
    pub resources: String,
}

/// The three recommendation categories, each guaranteed non-empty where the
/// profile qualifies for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub essential_skills: Vec<Recommendation>,
    pub advanced_topics: Vec<Recommendation>,
    pub specialization_paths: Vec<Recommendation>,
}

fn lookup<'a>(table: &[(&str, &'a str)], key: &str) -> Option<&'a str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

fn related_skills<'a>(goal: &'a str) -> Vec<&'a str> {
    for (marker, skills) in GOAL_RELATED_SKILLS {
        if goal.contains(marker) {
            return skills.to_vec();
        }
    }
    vec![goal] // default to the goal itself
}

/// Builds the full recommendation set from static tables.
pub fn skill_recommendations(assessment: &Assessment) -> RecommendationSet {
    let mut essential_skills = Vec::new();
    let mut advanced_topics = Vec::new();
    let mut specialization_paths = Vec::new();

    // Essential: foundational gaps.
    for skill in &assessment.skills {
        if skill.rating <= JUNIOR_THRESHOLD {
            essential_skills.push(Recommendation {
                title: format!("Strengthen {}", skill.name),
                level: "Fundamental".to_string(),
                description: lookup(BEGINNER_DESCRIPTIONS, &skill.name)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Build a strong foundation in {}", skill.name)),
                resources: lookup(RESOURCES, &skill.name)
                    .unwrap_or("Online courses, tutorials, and hands-on projects")
                    .to_string(),
            });
        }
    }

    // Advanced topics: goal-related skills already past the intermediate bar.
    if assessment.experience_years >= 2.0 {
        for goal in &assessment.learning_goals {
            for related in related_skills(goal) {
                let qualifies = assessment
                    .skills
                    .iter()
                    .any(|s| s.name == related && s.rating >= MID_THRESHOLD);
                if qualifies {
                    advanced_topics.push(Recommendation {
                        title: format!("Master {related}"),
                        level: "Advanced".to_string(),
                        description: lookup(INTERMEDIATE_DESCRIPTIONS, related)
                            .map(str::to_string)
                            .unwrap_or_else(|| {
                                format!("Deep dive into {related} concepts and best practices")
                            }),
                        resources: lookup(RESOURCES, related)
                            .unwrap_or("Advanced workshops and certification programs")
                            .to_string(),
                    });
                }
            }
        }
    }

    // Specialization paths: senior roles only.
    if SPECIALIZATION_ROLES.contains(&assessment.current_role.as_str()) {
        for goal in &assessment.learning_goals {
            if goal == "Technical Leadership" {
                specialization_paths.push(Recommendation {
                    title: "Engineering Leadership Path".to_string(),
                    level: "Expert".to_string(),
                    description: "Develop technical leadership skills to guide teams and make \
                                  architectural decisions"
                        .to_string(),
                    resources: "Leadership workshops, architectural decision-making courses, and \
                                mentorship programs"
                        .to_string(),
                });
            } else if goal.contains("Architecture") {
                specialization_paths.push(Recommendation {
                    title: "Solution Architecture Mastery".to_string(),
                    level: "Expert".to_string(),
                    description: "Learn to design and implement large-scale technical solutions \
                                  across multiple domains"
                        .to_string(),
                    resources: "AWS/Azure/GCP architecture certifications, system design courses, \
                                and case studies"
                        .to_string(),
                });
            } else {
                specialization_paths.push(Recommendation {
                    title: format!("{goal} Specialization"),
                    level: "Expert".to_string(),
                    description: format!(
                        "Become an expert in {goal} to lead initiatives and drive innovation"
                    ),
                    resources: format!(
                        "Industry certifications, conference speaking opportunities, and {} \
                         communities",
                        goal.to_lowercase()
                    ),
                });
            }
        }
    }

    // Every qualifying profile gets at least one entry per category.
    if essential_skills.is_empty() {
        essential_skills.push(Recommendation {
            title: "Core Technical Foundations".to_string(),
            level: "Fundamental".to_string(),
            description: "Even experienced professionals benefit from refreshing fundamentals"
                .to_string(),
            resources: "Interactive tutorials, coding challenges, and foundation courses"
                .to_string(),
        });
    }

    if advanced_topics.is_empty() && assessment.experience_years >= 1.0 {
        advanced_topics.push(Recommendation {
            title: "Technical Growth Areas".to_string(),
            level: "Advanced".to_string(),
            description: "Identify areas for growth based on industry trends and your interests"
                .to_string(),
            resources: "Technology blogs, conference talks, and specialized online courses"
                .to_string(),
        });
    }

    RecommendationSet {
        essential_skills,
        advanced_topics,
        specialization_paths,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assessment::SkillRating;

    fn assessment(
        skills: Vec<(&str, u8)>,
        role: &str,
        experience: f64,
        goals: Vec<&str>,
    ) -> Assessment {
        Assessment {
            skills: skills
                .into_iter()
                .map(|(name, rating)| SkillRating {
                    name: name.to_string(),
                    rating,
                })
                .collect(),
            current_role: role.to_string(),
            experience_years: experience,
            education_level: "Bachelor's".to_string(),
            learning_goals: goals.into_iter().map(str::to_string).collect(),
        }
    }

    #[test]
    fn test_low_rated_skill_gets_essential_entry_from_tables() {
        let a = assessment(vec![("DevOps", 1)], "Junior Developer", 1.0, vec![]);
        let set = skill_recommendations(&a);
        assert_eq!(set.essential_skills.len(), 1);
        let rec = &set.essential_skills[0];
        assert_eq!(rec.title, "Strengthen DevOps");
        assert!(rec.description.contains("CI/CD"));
        assert!(rec.resources.contains("Docker"));
    }

    #[test]
    fn test_unknown_skill_gets_fallback_text() {
        let a = assessment(vec![("Quantum Computing", 2)], "Student", 0.0, vec![]);
        let set = skill_recommendations(&a);
        let rec = &set.essential_skills[0];
        assert!(rec.description.contains("strong foundation in Quantum Computing"));
        assert!(rec.resources.contains("Online courses"));
    }

    #[test]
    fn test_essential_fallback_when_no_weak_skills() {
        let a = assessment(vec![("Data Analysis", 4)], "Senior Developer", 8.0, vec![]);
        let set = skill_recommendations(&a);
        assert_eq!(set.essential_skills.len(), 1);
        assert_eq!(set.essential_skills[0].title, "Core Technical Foundations");
    }

    #[test]
    fn test_goal_maps_to_related_skills_above_threshold() {
        let a = assessment(
            vec![
                ("Data Analysis", 4),
                ("Machine Learning", 3),
                ("Statistical Analysis", 2), // below threshold, skipped
            ],
            "Mid-level Developer",
            3.0,
            vec!["Data Science Path"],
        );
        let set = skill_recommendations(&a);
        let titles: Vec<&str> = set.advanced_topics.iter().map(|r| r.title.as_str()).collect();
        assert!(titles.contains(&"Master Data Analysis"));
        assert!(titles.contains(&"Master Machine Learning"));
        assert!(!titles.contains(&"Master Statistical Analysis"));
    }

    #[test]
    fn test_no_advanced_topics_below_two_years() {
        let a = assessment(
            vec![("Data Analysis", 5)],
            "Junior Developer",
            1.5,
            vec!["Data Science Path"],
        );
        let set = skill_recommendations(&a);
        // The ≥1 year fallback still fires, but no table-driven entries do.
        assert_eq!(set.advanced_topics.len(), 1);
        assert_eq!(set.advanced_topics[0].title, "Technical Growth Areas");
    }

    #[test]
    fn test_junior_role_gets_no_specialization_paths() {
        let a = assessment(
            vec![("Frontend Development", 3)],
            "Junior Developer",
            1.0,
            vec!["Technical Leadership"],
        );
        let set = skill_recommendations(&a);
        assert!(set.specialization_paths.is_empty());
    }

    #[test]
    fn test_technical_leadership_goal_for_senior_role() {
        let a = assessment(
            vec![("Frontend Development", 4)],
            "Tech Lead",
            6.0,
            vec!["Technical Leadership"],
        );
        let set = skill_recommendations(&a);
        assert_eq!(set.specialization_paths.len(), 1);
        assert_eq!(set.specialization_paths[0].title, "Engineering Leadership Path");
    }

    #[test]
    fn test_architecture_goal_gets_dedicated_path() {
        let a = assessment(
            vec![("Backend Development", 4)],
            "Senior Developer",
            7.0,
            vec!["Cloud Architecture"],
        );
        let set = skill_recommendations(&a);
        assert_eq!(set.specialization_paths[0].title, "Solution Architecture Mastery");
    }

    #[test]
    fn test_other_goal_gets_templated_path() {
        let a = assessment(
            vec![("Data Analysis", 4)],
            "Manager",
            9.0,
            vec!["Data Engineering"],
        );
        let set = skill_recommendations(&a);
        let rec = &set.specialization_paths[0];
        assert_eq!(rec.title, "Data Engineering Specialization");
        assert!(rec.resources.contains("data engineering communities"));
    }
}
