use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("syllabus details are empty")]
    EmptySyllabus,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
