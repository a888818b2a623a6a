use thiserror::Error;

/// Coarse classification of a [`StochasticError`], for callers that only
/// need to branch on the cause of a failed generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    Serialization,
    Io,
    Generation,
    NotFound,
}

#[derive(Debug, Error)]
pub enum StochasticError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Error while serializing: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Error while generating: {0}")]
    GenerationError(String),
    #[error("Not found: {0}")]
    NotFoundError(String),
}

impl StochasticError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StochasticError::InvalidInput(_) => ErrorKind::InvalidInput,
            StochasticError::SerializationError(_) => ErrorKind::Serialization,
            StochasticError::IoError(_) => ErrorKind::Io,
            StochasticError::GenerationError(_) => ErrorKind::Generation,
            StochasticError::NotFoundError(_) => ErrorKind::NotFound,
        }
    }
}

pub type Result<T> = std::result::Result<T, StochasticError>;

impl From<StochasticError> for String {
    fn from(e: StochasticError) -> Self {
        e.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        let io = StochasticError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(io.kind(), ErrorKind::Io);

        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(StochasticError::from(json).kind(), ErrorKind::Serialization);

        let err = StochasticError::InvalidInput("empty event name".to_string());
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_into_string() {
        let msg: String = StochasticError::NotFoundError("model vlachos".to_string()).into();
        assert_eq!(msg, "Not found: model vlachos");
    }
}
