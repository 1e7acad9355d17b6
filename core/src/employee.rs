//! Employee records.
//!
//! Employees are owned by the caller (usually the `Board`). Scoring and
//! querying only ever borrow them.

use crate::{
    error::{DeskError, DeskResult},
    types::{EmployeeId, Skill},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const MAX_PERCENT: u32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id:              EmployeeId,
    pub name:            String,
    /// Contact fields (`email`, `avatar`, ...). Flattened so that records
    /// carrying them as top-level keys load as-is.
    #[serde(flatten)]
    pub contact:         BTreeMap<String, String>,
    #[serde(default)]
    pub department:      String,
    #[serde(default)]
    pub role:            String,
    pub skills:          Vec<Skill>,
    /// Percent utilization, 0..=100.
    pub workload:        u32,
    pub availability:    Availability,
    /// Years.
    pub experience:      u32,
    #[serde(default)]
    pub tasks_completed: u32,
    /// 0..=100.
    pub productivity:    u32,
}

impl Employee {
    pub fn email(&self) -> Option<&str> {
        self.contact.get("email").map(String::as_str)
    }

    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }

    /// Reject percentages outside 0..=100. Negative values cannot be
    /// represented, so only the upper bound needs checking.
    pub fn validate(&self) -> DeskResult<()> {
        if self.workload > MAX_PERCENT {
            return Err(DeskError::InvalidInput {
                field: "workload",
                value: format!("{} (employee {})", self.workload, self.id),
            });
        }
        if self.productivity > MAX_PERCENT {
            return Err(DeskError::InvalidInput {
                field: "productivity",
                value: format!("{} (employee {})", self.productivity, self.id),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Busy,
    Unavailable,
}

impl Availability {
    pub const ALL: [Availability; 3] = [Self::Available, Self::Busy, Self::Unavailable];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available   => "available",
            Self::Busy        => "busy",
            Self::Unavailable => "unavailable",
        }
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Employee {
        Employee {
            id: "e-1".into(),
            name: "Ada Lovelace".into(),
            contact: [("email".to_string(), "ada@example.com".to_string())].into(),
            department: "Engineering".into(),
            role: "Engineer".into(),
            skills: vec!["Rust".into(), "SQL".into()],
            workload: 40,
            availability: Availability::Available,
            experience: 7,
            tasks_completed: 12,
            productivity: 88,
        }
    }

    #[test]
    fn contact_fields_flatten_to_top_level() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["tasksCompleted"], 12);
        assert_eq!(json["availability"], "available");

        let back: Employee = serde_json::from_value(json).unwrap();
        assert_eq!(back.email(), Some("ada@example.com"));
    }

    #[test]
    fn negative_workload_is_rejected_on_load() {
        let json = r#"{"id":"e","name":"X","skills":[],"workload":-5,
            "availability":"busy","experience":1,"productivity":50}"#;
        assert!(serde_json::from_str::<Employee>(json).is_err());
    }

    #[test]
    fn validate_flags_out_of_range_percentages() {
        let mut e = sample();
        assert!(e.validate().is_ok());

        e.workload = 101;
        assert!(matches!(
            e.validate(),
            Err(DeskError::InvalidInput { field: "workload", .. })
        ));

        e.workload = 100;
        e.productivity = 150;
        assert!(matches!(
            e.validate(),
            Err(DeskError::InvalidInput { field: "productivity", .. })
        ));
    }

    #[test]
    fn first_name_is_leading_word() {
        assert_eq!(sample().first_name(), "Ada");
    }
}
