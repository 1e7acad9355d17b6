//! The board: in-memory owner of one session's employees and tasks.
//!
//! RULES:
//!   - Records are validated once, on the way in. Everything downstream
//!     (scoring, queries, stats) may assume in-range fields.
//!   - Every mutation appends one DeskEvent to the log.
//!   - The board never persists anything.

use crate::{
    employee::Employee,
    error::{DeskError, DeskResult},
    event::DeskEvent,
    matching::{Matcher, Recommendation},
    stats::{Analytics, DashboardStats},
    task::{Task, TaskDraft, TaskStatus},
    types::Timestamp,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A set of employees plus tasks, as loaded from JSON or generated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub employees: Vec<Employee>,
    pub tasks:     Vec<Task>,
}

pub struct Board {
    employees: Vec<Employee>,
    tasks:     Vec<Task>,
    matcher:   Matcher,
    events:    Vec<DeskEvent>,
}

impl Board {
    pub fn new(employees: Vec<Employee>, tasks: Vec<Task>) -> DeskResult<Self> {
        Self::with_matcher(employees, tasks, Matcher::default())
    }

    pub fn from_roster(roster: Roster, matcher: Matcher) -> DeskResult<Self> {
        Self::with_matcher(roster.employees, roster.tasks, matcher)
    }

    /// Validate and take ownership of the collections.
    /// Fails on the first bad record.
    pub fn with_matcher(
        employees: Vec<Employee>,
        tasks: Vec<Task>,
        matcher: Matcher,
    ) -> DeskResult<Self> {
        validate_records(&employees, &tasks)?;
        log::debug!("Board loaded: {} employees, {} tasks", employees.len(), tasks.len());

        Ok(Self { employees, tasks, matcher, events: Vec::new() })
    }

    // ── Reads ─────────────────────────────────────────────────

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn events(&self) -> &[DeskEvent] {
        &self.events
    }

    pub fn employee(&self, id: &str) -> DeskResult<&Employee> {
        self.employees
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| DeskError::EmployeeNotFound { id: id.to_string() })
    }

    pub fn task(&self, id: &str) -> DeskResult<&Task> {
        self.tasks
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| DeskError::TaskNotFound { id: id.to_string() })
    }

    /// Best `count` employees for a task, excluding its current assignee.
    pub fn recommend(&self, task_id: &str, count: usize) -> DeskResult<Vec<Recommendation<'_>>> {
        let task = self.task(task_id)?;
        self.matcher.rank(&self.employees, task, count)
    }

    pub fn dashboard(&self, top_performers: usize) -> DashboardStats {
        DashboardStats::compute_with(&self.employees, &self.tasks, top_performers)
    }

    pub fn analytics(&self) -> Analytics {
        Analytics::compute(&self.employees, &self.tasks)
    }

    // ── Mutations ─────────────────────────────────────────────

    /// Hand a task to an employee and move it to in-progress.
    /// Works from any status, including reassignment.
    pub fn assign_task(&mut self, task_id: &str, employee_id: &str) -> DeskResult<&Task> {
        self.employee(employee_id)?;
        let idx = self.task_index(task_id)?;

        let task = &mut self.tasks[idx];
        let previous = task.assigned_to.replace(employee_id.to_string());
        let from_status = task.status;
        task.status = TaskStatus::InProgress;

        log::info!(
            "task={task_id} assigned to {employee_id} (previous={:?}, from={from_status})",
            previous,
        );
        self.events.push(DeskEvent::TaskAssigned {
            task_id: task_id.to_string(),
            employee_id: employee_id.to_string(),
            previous,
            from_status,
        });

        Ok(&self.tasks[idx])
    }

    /// Change a task's status. No event when the status is unchanged.
    pub fn set_status(&mut self, task_id: &str, status: TaskStatus) -> DeskResult<&Task> {
        let idx = self.task_index(task_id)?;

        let from = self.tasks[idx].status;
        if from != status {
            self.tasks[idx].status = status;
            log::info!("task={task_id} status {from} -> {status}");
            self.events.push(DeskEvent::TaskStatusChanged {
                task_id: task_id.to_string(),
                from,
                to: status,
            });
        }

        Ok(&self.tasks[idx])
    }

    /// Add a new pending, unassigned task with a fresh id.
    pub fn create_task(&mut self, draft: TaskDraft, now: Timestamp) -> DeskResult<&Task> {
        let task = Task {
            id:              uuid::Uuid::new_v4().to_string(),
            title:           draft.title,
            description:     draft.description,
            priority:        draft.priority,
            status:          TaskStatus::Pending,
            required_skills: draft.required_skills,
            assigned_to:     None,
            deadline:        draft.deadline,
            estimated_hours: draft.estimated_hours,
            created_at:      now,
        };
        task.validate()?;

        log::info!("task={} created: {:?}", task.id, task.title);
        self.events.push(DeskEvent::TaskCreated {
            task_id: task.id.clone(),
            title:   task.title.clone(),
            at:      now,
        });
        self.tasks.push(task);

        Ok(&self.tasks[self.tasks.len() - 1])
    }

    fn task_index(&self, task_id: &str) -> DeskResult<usize> {
        self.tasks
            .iter()
            .position(|t| t.id == task_id)
            .ok_or_else(|| DeskError::TaskNotFound { id: task_id.to_string() })
    }
}

fn validate_records(employees: &[Employee], tasks: &[Task]) -> DeskResult<()> {
    let mut employee_ids = HashSet::new();
    for employee in employees {
        employee.validate()?;
        if !employee_ids.insert(employee.id.as_str()) {
            return Err(DeskError::DuplicateId { kind: "employee", id: employee.id.clone() });
        }
    }

    let mut task_ids = HashSet::new();
    for task in tasks {
        task.validate()?;
        if !task_ids.insert(task.id.as_str()) {
            return Err(DeskError::DuplicateId { kind: "task", id: task.id.clone() });
        }
        if let Some(assignee) = &task.assigned_to {
            if !employee_ids.contains(assignee.as_str()) {
                return Err(DeskError::InvalidInput {
                    field: "assignedTo",
                    value: format!("{assignee} (task {})", task.id),
                });
            }
        }
    }
    Ok(())
}
