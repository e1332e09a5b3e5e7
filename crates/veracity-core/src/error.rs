//! Error types for veracity

/// Result type alias using veracity's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for veracity operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid explainer configuration, rejected at request entry
    #[error("configuration error: {0}")]
    Config(String),

    /// Classifier adapter failures
    #[error("classifier error: {0}")]
    Classifier(String),

    /// Explanation-stage failures (sampling, fitting, ranking)
    #[error("explanation error: {0}")]
    Explain(String),

    /// IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The explanation stages exceeded the per-request deadline
    #[error("explanation timed out")]
    Timeout,

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new classifier error
    pub fn classifier(msg: impl Into<String>) -> Self {
        Self::Classifier(msg.into())
    }

    /// Create a new explanation error
    pub fn explain(msg: impl Into<String>) -> Self {
        Self::Explain(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether this error is a client-side configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("sample_count must be non-zero");
        assert_eq!(
            err.to_string(),
            "configuration error: sample_count must be non-zero"
        );

        let err = Error::classifier("batch rejected");
        assert_eq!(err.to_string(), "classifier error: batch rejected");

        assert_eq!(Error::Timeout.to_string(), "explanation timed out");
    }

    #[test]
    fn test_is_config() {
        assert!(Error::config("bad").is_config());
        assert!(!Error::explain("degenerate fit").is_config());
    }
}
