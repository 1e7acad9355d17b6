//! teamdesk-core: the data side of a team-management dashboard.
//!
//! Employees and tasks live in memory. The library scores employees against
//! tasks, answers search/filter/sort queries, computes dashboard figures and
//! records task assignments. Rendering and persistence belong to the caller.

pub mod board;
pub mod config;
pub mod employee;
pub mod error;
pub mod event;
pub mod matching;
pub mod mock_data;
pub mod name_generator;
pub mod query;
pub mod rng;
pub mod stats;
pub mod task;
pub mod types;

pub use board::{Board, Roster};
pub use employee::{Availability, Employee};
pub use error::{DeskError, DeskResult};
pub use matching::{rank, score, Matcher, Recommendation};
pub use task::{Priority, Task, TaskDraft, TaskStatus};
