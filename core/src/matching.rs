//! Employee-to-task recommendation scoring.
//!
//! Four independent factors, each saturating at its own weight:
//!
//! | Factor       | Default weight | Contribution                              |
//! |--------------|----------------|-------------------------------------------|
//! | Skill match  | 40             | matched / required × weight               |
//! | Availability | 25             | 25 available, 10 busy, 0 unavailable      |
//! | Workload     | 20             | (100 − workload) / 100 × weight           |
//! | Experience   | 15             | min(years / cap, 1) × weight              |
//!
//! The total is rounded to the nearest integer and never clamped; with a
//! validated config it cannot leave 0..=100.
//!
//! Scoring is a pure function of its inputs. Out-of-range employee fields
//! are rejected with `InvalidInput` rather than producing a nonsense score.

use crate::{
    config::MatchingConfig,
    employee::{Availability, Employee},
    error::DeskResult,
    task::Task,
    types::Skill,
};
use serde::Serialize;

pub const DEFAULT_RECOMMENDATIONS: usize = 3;

// ── Public types ─────────────────────────────────────────────────────────────

/// Unrounded per-factor points behind a score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub skill:        f64,
    pub availability: f64,
    pub workload:     f64,
    pub experience:   f64,
}

impl ScoreBreakdown {
    pub fn sum(&self) -> f64 {
        self.skill + self.availability + self.workload + self.experience
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation<'a> {
    pub employee:       &'a Employee,
    pub score:          u32,
    /// Employee skills the task asks for, in the employee's order.
    pub matched_skills: Vec<Skill>,
    pub reasons:        Vec<String>,
    pub breakdown:      ScoreBreakdown,
}

// ── Matcher ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct Matcher {
    config: MatchingConfig,
}

impl Matcher {
    pub fn new(config: MatchingConfig) -> DeskResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    pub fn score<'a>(&self, employee: &'a Employee, task: &Task) -> DeskResult<Recommendation<'a>> {
        employee.validate()?;

        let weights = &self.config.weights;

        let matched_skills: Vec<Skill> = employee
            .skills
            .iter()
            .filter(|skill| task.requires_skill(skill))
            .cloned()
            .collect();
        let matched = matched_skills.len();
        let required = task.required_skills.len();

        // No required skills: nothing to match against, contributes nothing.
        let skill = if required == 0 {
            0.0
        } else {
            matched as f64 / required as f64 * weights.skill
        };

        let availability = match employee.availability {
            Availability::Available   => weights.available,
            Availability::Busy        => weights.busy,
            Availability::Unavailable => 0.0,
        };

        let workload = (100 - employee.workload) as f64 / 100.0 * weights.workload;

        let cap = self.config.experience_cap_years as f64;
        let experience = (employee.experience as f64 / cap).min(1.0) * weights.experience;

        let breakdown = ScoreBreakdown { skill, availability, workload, experience };
        let score = breakdown.sum().round() as u32;

        Ok(Recommendation {
            employee,
            score,
            reasons: self.reasons(employee, matched, required),
            matched_skills,
            breakdown,
        })
    }

    /// Score every candidate except the task's current assignee and keep the
    /// best `count`. Equal scores keep their candidate order.
    pub fn rank<'a>(
        &self,
        candidates: &'a [Employee],
        task: &Task,
        count: usize,
    ) -> DeskResult<Vec<Recommendation<'a>>> {
        let mut recommendations = candidates
            .iter()
            .filter(|employee| !task.is_assigned_to(&employee.id))
            .map(|employee| self.score(employee, task))
            .collect::<DeskResult<Vec<_>>>()?;

        recommendations.sort_by(|a, b| b.score.cmp(&a.score));
        recommendations.truncate(count);

        log::debug!(
            "task={} ranked {} candidates, kept {}",
            task.id,
            candidates.len(),
            recommendations.len(),
        );
        Ok(recommendations)
    }

    fn reasons(&self, employee: &Employee, matched: usize, required: usize) -> Vec<String> {
        let t = &self.config.thresholds;
        let mut reasons = Vec::new();

        if required > 0 && matched == required {
            reasons.push("Perfect skill match".to_string());
        } else if matched > 0 {
            reasons.push(format!("{matched}/{required} skills matched"));
        }
        if employee.availability == Availability::Available {
            reasons.push("Currently available".to_string());
        }
        if employee.workload < t.low_workload {
            reasons.push("Low workload".to_string());
        }
        if employee.experience >= t.senior_experience {
            reasons.push("Senior experience".to_string());
        }
        if employee.productivity >= t.high_productivity {
            reasons.push("High productivity".to_string());
        }
        reasons
    }
}

/// Score one employee against a task with the default weights.
pub fn score<'a>(employee: &'a Employee, task: &Task) -> DeskResult<Recommendation<'a>> {
    Matcher::default().score(employee, task)
}

/// Rank candidates for a task with the default weights.
pub fn rank<'a>(
    candidates: &'a [Employee],
    task: &Task,
    count: usize,
) -> DeskResult<Vec<Recommendation<'a>>> {
    Matcher::default().rank(candidates, task, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::DeskError,
        task::{Priority, TaskStatus},
    };
    use chrono::{TimeZone, Utc};

    fn employee(skills: &[&str], workload: u32, availability: Availability, experience: u32, productivity: u32) -> Employee {
        Employee {
            id: "e-1".into(),
            name: "Test Person".into(),
            contact: Default::default(),
            department: "Engineering".into(),
            role: "Developer".into(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            workload,
            availability,
            experience,
            tasks_completed: 0,
            productivity,
        }
    }

    fn task(required: &[&str]) -> Task {
        Task {
            id: "t-1".into(),
            title: "Build it".into(),
            description: String::new(),
            priority: Priority::Medium,
            status: TaskStatus::Pending,
            required_skills: required.iter().map(|s| s.to_string()).collect(),
            assigned_to: None,
            deadline: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
            estimated_hours: 16.0,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn perfect_senior_candidate_scores_88() {
        let e = employee(&["React", "Node"], 30, Availability::Available, 6, 95);
        let rec = score(&e, &task(&["React", "Node"])).unwrap();

        assert_eq!(rec.breakdown.skill, 40.0);
        assert_eq!(rec.breakdown.availability, 25.0);
        assert_eq!(rec.breakdown.workload.round(), 14.0);
        assert!((rec.breakdown.experience - 9.0).abs() < 1e-9);
        assert_eq!(rec.score, 88);
        assert_eq!(rec.matched_skills, vec!["React", "Node"]);
        assert_eq!(
            rec.reasons,
            vec![
                "Perfect skill match",
                "Currently available",
                "Low workload",
                "Senior experience",
                "High productivity",
            ]
        );
    }

    #[test]
    fn partial_match_reports_fraction() {
        let e = employee(&["Node", "Go"], 80, Availability::Busy, 2, 70);
        let rec = score(&e, &task(&["React", "Node"])).unwrap();

        assert_eq!(rec.breakdown.skill, 20.0);
        assert_eq!(rec.breakdown.availability, 10.0);
        assert_eq!(rec.reasons, vec!["1/2 skills matched"]);
        // 20 + 10 + 4 + 3
        assert_eq!(rec.score, 37);
    }

    #[test]
    fn matched_skills_follow_employee_order() {
        let e = employee(&["SQL", "Go", "React"], 50, Availability::Busy, 1, 50);
        let rec = score(&e, &task(&["React", "SQL"])).unwrap();
        assert_eq!(rec.matched_skills, vec!["SQL", "React"]);
    }

    #[test]
    fn no_required_skills_gives_zero_skill_points() {
        let e = employee(&["React"], 0, Availability::Available, 10, 50);
        let rec = score(&e, &task(&[])).unwrap();

        assert_eq!(rec.breakdown.skill, 0.0);
        assert!(!rec.reasons.iter().any(|r| r.contains("skill")));
        assert_eq!(rec.score, 60);
    }

    #[test]
    fn unavailable_contributes_nothing() {
        let e = employee(&["React"], 0, Availability::Unavailable, 20, 100);
        let rec = score(&e, &task(&["React"])).unwrap();
        assert_eq!(rec.breakdown.availability, 0.0);
        assert!(!rec.reasons.contains(&"Currently available".to_string()));
    }

    #[test]
    fn experience_saturates_at_cap() {
        let e = employee(&[], 100, Availability::Unavailable, 35, 0);
        let rec = score(&e, &task(&["React"])).unwrap();
        assert_eq!(rec.breakdown.experience, 15.0);
        assert_eq!(rec.score, 15);
    }

    #[test]
    fn out_of_range_workload_fails_fast() {
        let e = employee(&["React"], 120, Availability::Available, 3, 50);
        let err = score(&e, &task(&["React"])).unwrap_err();
        assert!(matches!(err, DeskError::InvalidInput { field: "workload", .. }));
    }

    #[test]
    fn custom_weights_are_applied() {
        let mut config = MatchingConfig::default();
        config.weights.skill = 60.0;
        config.weights.experience = 0.0;
        config.weights.workload = 15.0;
        let matcher = Matcher::new(config).unwrap();

        let e = employee(&["React"], 0, Availability::Unavailable, 10, 0);
        let rec = matcher.score(&e, &task(&["React"])).unwrap();
        assert_eq!(rec.score, 75);
    }

    #[test]
    fn invalid_config_is_refused() {
        let mut config = MatchingConfig::default();
        config.experience_cap_years = 0;
        assert!(Matcher::new(config).is_err());
    }
}
