//! Dashboard and analytics aggregates.
//!
//! Pure reductions over borrowed collections; nothing here mutates.

use crate::{
    employee::Employee,
    query::StatusCounts,
    task::{Priority, Task, TaskStatus},
    types::{EmployeeId, Skill, TaskId},
};
use serde::Serialize;

pub const TOP_PERFORMER_COUNT: usize = 5;
pub const RECENT_PENDING_COUNT: usize = 3;
pub const TOP_SKILL_COUNT: usize = 8;

/// Workload bands: low below 40, medium 40..70, high from 70.
const MEDIUM_WORKLOAD_FLOOR: u32 = 40;
const HIGH_WORKLOAD_FLOOR: u32 = 70;

// ── Dashboard ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WorkloadBands {
    pub low:    usize,
    pub medium: usize,
    pub high:   usize,
}

impl WorkloadBands {
    pub fn of(employees: &[Employee]) -> Self {
        let mut bands = Self::default();
        for e in employees {
            if e.workload < MEDIUM_WORKLOAD_FLOOR {
                bands.low += 1;
            } else if e.workload < HIGH_WORKLOAD_FLOOR {
                bands.medium += 1;
            } else {
                bands.high += 1;
            }
        }
        bands
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_employees: usize,
    pub tasks:           StatusCounts,
    /// Percent of tasks completed, rounded. 0 with no tasks.
    pub completion_rate: u32,
    pub workload:        WorkloadBands,
    pub top_performers:  Vec<EmployeeId>,
    pub recent_pending:  Vec<TaskId>,
}

impl DashboardStats {
    pub fn compute(employees: &[Employee], tasks: &[Task]) -> Self {
        Self::compute_with(employees, tasks, TOP_PERFORMER_COUNT)
    }

    pub fn compute_with(employees: &[Employee], tasks: &[Task], top_n: usize) -> Self {
        let counts = StatusCounts::of(tasks);

        Self {
            total_employees: employees.len(),
            tasks:           counts,
            completion_rate: completion_rate(counts.completed, counts.all),
            workload:        WorkloadBands::of(employees),
            top_performers:  top_performers(employees, top_n)
                .into_iter()
                .map(|e| e.id.clone())
                .collect(),
            recent_pending:  tasks
                .iter()
                .filter(|t| t.status == TaskStatus::Pending)
                .take(RECENT_PENDING_COUNT)
                .map(|t| t.id.clone())
                .collect(),
        }
    }
}

pub fn completion_rate(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (completed as f64 / total as f64 * 100.0).round() as u32
}

/// Highest productivity first; ties keep collection order.
pub fn top_performers(employees: &[Employee], n: usize) -> Vec<&Employee> {
    let mut ranked: Vec<&Employee> = employees.iter().collect();
    ranked.sort_by(|a, b| b.productivity.cmp(&a.productivity));
    ranked.truncate(n);
    ranked
}

// ── Analytics ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkloadRow {
    pub name:            String,
    pub workload:        u32,
    pub tasks_completed: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analytics {
    pub departments: Vec<LabelCount>,
    pub top_skills:  Vec<LabelCount>,
    pub statuses:    Vec<LabelCount>,
    pub priorities:  Vec<LabelCount>,
    pub workloads:   Vec<WorkloadRow>,
}

impl Analytics {
    pub fn compute(employees: &[Employee], tasks: &[Task]) -> Self {
        let departments = tally(employees.iter().map(|e| e.department.as_str()));

        let mut top_skills = tally(employees.iter().flat_map(|e| e.skills.iter().map(String::as_str)));
        top_skills.sort_by(|a, b| b.count.cmp(&a.count));
        top_skills.truncate(TOP_SKILL_COUNT);

        let statuses = TaskStatus::ALL
            .iter()
            .map(|s| LabelCount {
                label: s.as_str().to_string(),
                count: tasks.iter().filter(|t| t.status == *s).count(),
            })
            .collect();

        let priorities = Priority::ALL
            .iter()
            .map(|p| LabelCount {
                label: p.as_str().to_string(),
                count: tasks.iter().filter(|t| t.priority == *p).count(),
            })
            .collect();

        let workloads = employees
            .iter()
            .map(|e| WorkloadRow {
                name:            e.first_name().to_string(),
                workload:        e.workload,
                tasks_completed: e.tasks_completed,
            })
            .collect();

        Self { departments, top_skills, statuses, priorities, workloads }
    }
}

/// Every distinct skill held by any employee, in first-seen order.
pub fn all_skills(employees: &[Employee]) -> Vec<Skill> {
    let mut seen: Vec<Skill> = Vec::new();
    for skill in employees.iter().flat_map(|e| &e.skills) {
        if !seen.contains(skill) {
            seen.push(skill.clone());
        }
    }
    seen
}

/// Count labels, keeping first-seen order.
fn tally<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<LabelCount> {
    let mut counts: Vec<LabelCount> = Vec::new();
    for label in labels {
        match counts.iter_mut().find(|c| c.label == label) {
            Some(c) => c.count += 1,
            None => counts.push(LabelCount { label: label.to_string(), count: 1 }),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_rate_handles_empty_and_rounds() {
        assert_eq!(completion_rate(0, 0), 0);
        assert_eq!(completion_rate(1, 3), 33);
        assert_eq!(completion_rate(2, 3), 67);
        assert_eq!(completion_rate(4, 4), 100);
    }

    #[test]
    fn tally_keeps_first_seen_order() {
        let counts = tally(["b", "a", "b", "c", "a", "b"].into_iter());
        let labels: Vec<_> = counts.iter().map(|c| (c.label.as_str(), c.count)).collect();
        assert_eq!(labels, vec![("b", 3), ("a", 2), ("c", 1)]);
    }
}
