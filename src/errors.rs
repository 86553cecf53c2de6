use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectionError {
    #[error("invalid argument `{name}`: {message}")]
    InvalidArgument {
        name: &'static str,
        message: String,
    },

    #[error("could not format date {input:?}: {reason}")]
    FormatFallback {
        input: String,
        reason: String,
    },

    #[error("storage error: {message}")]
    Storage {
        message: String,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ProjectionError {
    pub(crate) fn invalid(name: &'static str, message: impl Into<String>) -> Self {
        ProjectionError::InvalidArgument {
            name,
            message: message.into(),
        }
    }

    /// true for the argument-validation kind
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ProjectionError::InvalidArgument { .. })
    }
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
