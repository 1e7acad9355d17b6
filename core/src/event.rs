//! The board's event log.
//!
//! RULE: Every mutation of the board appends exactly one event.
//! Events are append-only and serializable so a presentation layer can
//! replay or display them.

use crate::{
    task::TaskStatus,
    types::{EmployeeId, TaskId, Timestamp},
};
use serde::{Deserialize, Serialize};

/// Variants are appended, never removed or reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeskEvent {
    TaskCreated {
        task_id: TaskId,
        title:   String,
        at:      Timestamp,
    },
    TaskAssigned {
        task_id:     TaskId,
        employee_id: EmployeeId,
        /// Previous assignee, if the task was being reassigned.
        previous:    Option<EmployeeId>,
        from_status: TaskStatus,
    },
    TaskStatusChanged {
        task_id: TaskId,
        from:    TaskStatus,
        to:      TaskStatus,
    },
}

impl DeskEvent {
    /// Stable string name of the variant, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            DeskEvent::TaskCreated { .. }       => "task_created",
            DeskEvent::TaskAssigned { .. }      => "task_assigned",
            DeskEvent::TaskStatusChanged { .. } => "task_status_changed",
        }
    }

    pub fn task_id(&self) -> &str {
        match self {
            DeskEvent::TaskCreated { task_id, .. }
            | DeskEvent::TaskAssigned { task_id, .. }
            | DeskEvent::TaskStatusChanged { task_id, .. } => task_id,
        }
    }
}
