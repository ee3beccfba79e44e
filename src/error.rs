use thiserror::Error;

/// Errors raised by the consumption and solar feasibility engines.
///
/// Every variant is raised at the boundary of the offending call; no partial
/// results are returned alongside an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Empty input: consumption series has no records")]
    EmptyInput,

    #[error("Division undefined: {0}")]
    DivisionUndefined(String),

    #[error("Unknown region '{state}' (available: {})", .available.join(", "))]
    UnknownRegion {
        state: String,
        available: Vec<String>,
    },
}

impl AnalyticsError {
    /// Short machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            AnalyticsError::InvalidArgument(_) => "InvalidArgument",
            AnalyticsError::EmptyInput => "EmptyInput",
            AnalyticsError::DivisionUndefined(_) => "DivisionUndefined",
            AnalyticsError::UnknownRegion { .. } => "UnknownRegion",
        }
    }
}

impl From<validator::ValidationErrors> for AnalyticsError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AnalyticsError::InvalidArgument(errors.to_string())
    }
}

pub type Result<T, E = AnalyticsError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_region_message_lists_codes() {
        let err = AnalyticsError::UnknownRegion {
            state: "XX".to_string(),
            available: vec!["MG".to_string(), "SP".to_string()],
        };
        assert_eq!(err.to_string(), "Unknown region 'XX' (available: MG, SP)");
        assert_eq!(err.kind(), "UnknownRegion");
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(AnalyticsError::EmptyInput.kind(), "EmptyInput");
        assert_eq!(
            AnalyticsError::InvalidArgument("days".into()).kind(),
            "InvalidArgument"
        );
        assert_eq!(
            AnalyticsError::DivisionUndefined("weekday".into()).kind(),
            "DivisionUndefined"
        );
    }
}
