use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Serialization error")]
    Serialization(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Event '{title}' overlaps with existing event '{conflicting}'")]
    Overlap { title: String, conflicting: String },

    #[error("A schedule named '{0}' already exists")]
    DuplicateSchedule(String),

    #[error("No days of the week were selected")]
    EmptyDaySelection,
}
