use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("pose set is empty")]
    EmptyPoseSet,

    #[error("invalid session config: {0}")]
    InvalidConfig(String),

    #[error("resource unavailable: {0}")]
    ResourceUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SessionError {
    /// Whether the caller can recover by substituting a default.
    pub fn is_recoverable(&self) -> bool {
        match self {
            SessionError::EmptyPoseSet => true, // Built-in default set applies
            SessionError::Io(_) => true,
            SessionError::InvalidConfig(_) => false,
            SessionError::ResourceUnavailable(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
