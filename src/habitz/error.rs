use thiserror::Error;

#[derive(Error, Debug)]
pub enum HabitzError {
    #[error("{0}")]
    Validation(String),

    #[error("Habit not found: {0}")]
    HabitNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl HabitzError {
    /// True for failures of the persisted document itself (fatal to a request).
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            HabitzError::Io(_) | HabitzError::Serialization(_) | HabitzError::Store(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, HabitzError>;
