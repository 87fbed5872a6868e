use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid {field}: {reason}")]
    InvalidArgument { field: &'static str, reason: String },

    #[error("{field} out of range: {value} is not within [{min}; {max}]")]
    OutOfRange {
        field: &'static str,
        value: String,
        min: String,
        max: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Input closed while waiting for: {prompt}")]
    InputClosed { prompt: String },
}

/// Coarse classification used by callers that only need to know which
/// validation rule rejected a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    OutOfRange,
    Other,
}

impl CatalogError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        CatalogError::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            CatalogError::OutOfRange { .. } => ErrorKind::OutOfRange,
            _ => ErrorKind::Other,
        }
    }

    /// Validation failures are recoverable by re-entering a value; everything
    /// else ends the session.
    pub fn is_validation(&self) -> bool {
        self.kind() != ErrorKind::Other
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
