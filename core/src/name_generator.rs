//! Deterministic names for mock employees and tasks.
//!
//! Same RNG seed, same names.

use crate::rng::DeskRng;

pub struct NameGenerator;

impl NameGenerator {
    pub fn generate_full_name(rng: &mut DeskRng) -> String {
        let first = rng.pick(Self::first_names());
        let last = rng.pick(Self::last_names());
        format!("{first} {last}")
    }

    /// `first.last@domain`, lowercased, spaces and apostrophes dropped.
    pub fn email_for(full_name: &str, domain: &str) -> String {
        let local: Vec<String> = full_name
            .split_whitespace()
            .map(|part| {
                part.chars()
                    .filter(|c| c.is_ascii_alphanumeric())
                    .collect::<String>()
                    .to_lowercase()
            })
            .collect();
        format!("{}@{domain}", local.join("."))
    }

    /// "Verb object" task title, e.g. "Refactor billing service".
    pub fn generate_task_title(rng: &mut DeskRng) -> String {
        let verb = rng.pick(Self::task_verbs());
        let object = rng.pick(Self::task_objects());
        format!("{verb} {object}")
    }

    fn first_names() -> &'static [&'static str] {
        &[
            "Sarah", "Michael", "Emily", "David", "Priya", "James", "Aisha", "Daniel",
            "Mei", "Lucas", "Olivia", "Carlos", "Hannah", "Omar", "Grace", "Noah",
            "Sofia", "Ethan", "Yuki", "Liam", "Fatima", "Mateo", "Chloe", "Arjun",
            "Zoe", "Samuel", "Amara", "Benjamin", "Leila", "Henry", "Isabel", "Kenji",
        ]
    }

    fn last_names() -> &'static [&'static str] {
        &[
            "Chen", "Rodriguez", "Patel", "Kim", "Johnson", "Okafor", "Nguyen", "Garcia",
            "Williams", "Tanaka", "Muller", "Silva", "Brown", "Haddad", "Kowalski", "Singh",
            "O'Brien", "Rossi", "Andersen", "Morales", "Ibrahim", "Park", "Dubois", "Clarke",
        ]
    }

    fn task_verbs() -> &'static [&'static str] {
        &[
            "Build", "Redesign", "Refactor", "Migrate", "Audit", "Document",
            "Optimize", "Launch", "Test", "Prototype", "Integrate", "Review",
        ]
    }

    fn task_objects() -> &'static [&'static str] {
        &[
            "checkout flow", "user onboarding", "billing service", "analytics pipeline",
            "marketing site", "mobile navigation", "search API", "CI pipeline",
            "design system", "notification service", "reporting dashboard", "auth module",
            "data warehouse", "customer survey", "pricing page", "deployment scripts",
        ]
    }
}
