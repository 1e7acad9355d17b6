//! Task records and their lifecycle enums.

use crate::{
    error::{DeskError, DeskResult},
    types::{EmployeeId, Skill, TaskId, Timestamp},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id:              TaskId,
    pub title:           String,
    #[serde(default)]
    pub description:     String,
    pub priority:        Priority,
    pub status:          TaskStatus,
    pub required_skills: Vec<Skill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to:     Option<EmployeeId>,
    pub deadline:        Timestamp,
    pub estimated_hours: f64,
    pub created_at:      Timestamp,
}

impl Task {
    pub fn requires_skill(&self, skill: &str) -> bool {
        self.required_skills.iter().any(|s| s == skill)
    }

    pub fn is_assigned_to(&self, employee_id: &str) -> bool {
        self.assigned_to.as_deref() == Some(employee_id)
    }

    pub fn validate(&self) -> DeskResult<()> {
        if !(self.estimated_hours.is_finite() && self.estimated_hours > 0.0) {
            return Err(DeskError::InvalidInput {
                field: "estimatedHours",
                value: format!("{} (task {})", self.estimated_hours, self.id),
            });
        }
        Ok(())
    }
}

/// Caller-supplied fields for a new task. Id, status, assignment and
/// creation time are filled in by the board.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title:           String,
    #[serde(default)]
    pub description:     String,
    pub priority:        Priority,
    pub required_skills: Vec<Skill>,
    pub deadline:        Timestamp,
    pub estimated_hours: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low    => "low",
            Self::Medium => "medium",
            Self::High   => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [Self::Pending, Self::InProgress, Self::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending    => "pending",
            Self::InProgress => "in-progress",
            Self::Completed  => "completed",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample() -> Task {
        Task {
            id: "t-1".into(),
            title: "Ship dashboard".into(),
            description: String::new(),
            priority: Priority::High,
            status: TaskStatus::InProgress,
            required_skills: vec!["React".into()],
            assigned_to: None,
            deadline: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
            estimated_hours: 8.0,
            created_at: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn wire_names_match_dashboard_format() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["status"], "in-progress");
        assert_eq!(json["priority"], "high");
        assert_eq!(json["requiredSkills"][0], "React");
        assert!(json.get("assignedTo").is_none());
    }

    #[test]
    fn non_positive_hours_fail_validation() {
        let mut t = sample();
        t.estimated_hours = 0.0;
        assert!(t.validate().is_err());
        t.estimated_hours = f64::NAN;
        assert!(t.validate().is_err());
        t.estimated_hours = 0.5;
        assert!(t.validate().is_ok());
    }
}
