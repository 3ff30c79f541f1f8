use thiserror::Error;

/// Errors produced by the price lookup and eligibility cores
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Data unavailable ({source_name}): {reason}")]
    DataUnavailable { source_name: String, reason: String },
}

impl AdvisorError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn data_unavailable(source_name: impl Into<String>, reason: impl ToString) -> Self {
        Self::DataUnavailable {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }

    /// Short machine-readable error kind used in HTTP error bodies
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalid_argument",
            Self::Validation(_) => "validation_error",
            Self::DataUnavailable { .. } => "data_unavailable",
        }
    }
}

pub type Result<T> = std::result::Result<T, AdvisorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(AdvisorError::invalid_argument("x").kind(), "invalid_argument");
        assert_eq!(AdvisorError::validation("x").kind(), "validation_error");
        assert_eq!(
            AdvisorError::data_unavailable("prices.csv", "missing").kind(),
            "data_unavailable"
        );
    }

    #[test]
    fn test_data_unavailable_message() {
        let err = AdvisorError::data_unavailable("prices.csv", "row 3: latitude out of range");
        assert_eq!(
            err.to_string(),
            "Data unavailable (prices.csv): row 3: latitude out of range"
        );
    }
}
