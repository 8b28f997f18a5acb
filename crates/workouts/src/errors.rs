use thiserror::Error;

/// Message used when an unsupported workout type carries no details.
pub const UNSUPPORTED_TYPE_MESSAGE: &str = "workout type not supported";

#[derive(Error, Debug)]
pub enum WorkoutError {
    #[error("{}", .0.as_deref().unwrap_or(UNSUPPORTED_TYPE_MESSAGE))]
    UnsupportedType(Option<String>),

    #[error("Invalid {workout_type} package: expected {expected} values, got {actual}")]
    PackageArity {
        workout_type: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_type_default_message() {
        let err = WorkoutError::UnsupportedType(None);
        assert_eq!(err.to_string(), "workout type not supported");
    }

    #[test]
    fn test_unsupported_type_custom_message() {
        let err = WorkoutError::UnsupportedType(Some("unknown workout type: XYZ".to_string()));
        assert_eq!(err.to_string(), "unknown workout type: XYZ");
    }

    #[test]
    fn test_arity_message() {
        let err = WorkoutError::PackageArity {
            workout_type: "RUN",
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "Invalid RUN package: expected 3 values, got 2"
        );
    }
}
