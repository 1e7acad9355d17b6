//! Search, filter and sort over employee and task collections.
//!
//! Queries never copy records: results borrow from the input slice.

use crate::{
    employee::{Availability, Employee},
    error::DeskError,
    task::{Task, TaskStatus},
    types::Skill,
};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};

// ── Sorting ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Workload,
    Experience,
    Productivity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// An employee sort key, written `field-order` (`name-asc`, `workload-desc`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmployeeSort {
    pub field: SortField,
    pub order: SortOrder,
}

impl Default for EmployeeSort {
    fn default() -> Self {
        Self { field: SortField::Name, order: SortOrder::Asc }
    }
}

impl EmployeeSort {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    fn compare(&self, a: &Employee, b: &Employee) -> Ordering {
        let ordering = match self.field {
            SortField::Name => a
                .name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name)),
            SortField::Workload     => a.workload.cmp(&b.workload),
            SortField::Experience   => a.experience.cmp(&b.experience),
            SortField::Productivity => a.productivity.cmp(&b.productivity),
        };
        match self.order {
            SortOrder::Asc  => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for EmployeeSort {
    type Err = DeskError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let unknown = || DeskError::UnknownSortKey { key: key.to_string() };
        let (field, order) = key.split_once('-').ok_or_else(unknown)?;

        let field = match field {
            "name"         => SortField::Name,
            "workload"     => SortField::Workload,
            "experience"   => SortField::Experience,
            "productivity" => SortField::Productivity,
            _ => return Err(unknown()),
        };
        let order = match order {
            "asc"  => SortOrder::Asc,
            "desc" => SortOrder::Desc,
            _ => return Err(unknown()),
        };
        Ok(Self { field, order })
    }
}

impl TryFrom<String> for EmployeeSort {
    type Error = DeskError;

    fn try_from(key: String) -> Result<Self, Self::Error> {
        key.parse()
    }
}

impl fmt::Display for EmployeeSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = match self.field {
            SortField::Name         => "name",
            SortField::Workload     => "workload",
            SortField::Experience   => "experience",
            SortField::Productivity => "productivity",
        };
        let order = match self.order {
            SortOrder::Asc  => "asc",
            SortOrder::Desc => "desc",
        };
        write!(f, "{field}-{order}")
    }
}

impl From<EmployeeSort> for String {
    fn from(sort: EmployeeSort) -> Self {
        sort.to_string()
    }
}

// ── Employee query ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeQuery {
    /// Case-insensitive substring of name, email, role or department.
    #[serde(default)]
    pub search:       Option<String>,
    /// Keep employees holding any of these skills.
    #[serde(default)]
    pub skills:       Vec<Skill>,
    #[serde(default)]
    pub availability: Option<Availability>,
    #[serde(default)]
    pub sort:         EmployeeSort,
}

impl EmployeeQuery {
    pub fn apply<'a>(&self, employees: &'a [Employee]) -> Vec<&'a Employee> {
        let needle = normalized_search(&self.search);

        let mut result: Vec<&Employee> = employees
            .iter()
            .filter(|e| match &needle {
                Some(q) => {
                    contains_folded(&e.name, q)
                        || e.email().is_some_and(|email| contains_folded(email, q))
                        || contains_folded(&e.role, q)
                        || contains_folded(&e.department, q)
                }
                None => true,
            })
            .filter(|e| self.skills.is_empty() || self.skills.iter().any(|s| e.has_skill(s)))
            .filter(|e| self.availability.is_none_or(|a| e.availability == a))
            .collect();

        result.sort_by(|a, b| self.sort.compare(a, b));
        result
    }
}

// ── Task query ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskQuery {
    /// `None` means every status.
    #[serde(default)]
    pub status: Option<TaskStatus>,
    /// Case-insensitive substring of title or description.
    #[serde(default)]
    pub search: Option<String>,
    /// Keep tasks requiring any of these skills.
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl TaskQuery {
    /// Filters only; collection order is kept.
    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        let needle = normalized_search(&self.search);

        tasks
            .iter()
            .filter(|t| self.status.is_none_or(|s| t.status == s))
            .filter(|t| match &needle {
                Some(q) => contains_folded(&t.title, q) || contains_folded(&t.description, q),
                None => true,
            })
            .filter(|t| self.skills.is_empty() || self.skills.iter().any(|s| t.requires_skill(s)))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub all:         usize,
    pub pending:     usize,
    pub in_progress: usize,
    pub completed:   usize,
}

impl StatusCounts {
    pub fn of(tasks: &[Task]) -> Self {
        let mut counts = StatusCounts { all: tasks.len(), ..Default::default() };
        for task in tasks {
            match task.status {
                TaskStatus::Pending    => counts.pending += 1,
                TaskStatus::InProgress => counts.in_progress += 1,
                TaskStatus::Completed  => counts.completed += 1,
            }
        }
        counts
    }
}

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Lowercased search text, or `None` when there is nothing to search for.
fn normalized_search(search: &Option<String>) -> Option<String> {
    search
        .as_deref()
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase)
}

fn contains_folded(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
