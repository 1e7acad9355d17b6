use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {field} = {value}")]
    InvalidInput { field: &'static str, value: String },

    #[error("Employee '{id}' not found")]
    EmployeeNotFound { id: String },

    #[error("Task '{id}' not found")]
    TaskNotFound { id: String },

    #[error("Duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    #[error("Invalid matching config: {reason}")]
    InvalidConfig { reason: String },

    #[error("Unknown sort key '{key}'")]
    UnknownSortKey { key: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type DeskResult<T> = Result<T, DeskError>;
