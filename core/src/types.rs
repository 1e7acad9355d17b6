//! Shared primitive types used across the whole crate.

use chrono::{DateTime, Utc};

/// A stable, unique identifier for an employee.
pub type EmployeeId = String;

/// A stable, unique identifier for a task.
pub type TaskId = String;

/// Every timestamp on the board is UTC.
pub type Timestamp = DateTime<Utc>;

/// A skill label. Matching is exact string equality.
pub type Skill = String;
