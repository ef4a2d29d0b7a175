use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MazeError {
    #[error("Layout file not found at path: {path}")]
    LayoutNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid layout: {reason}")]
    InvalidConfig { reason: String },
}

impl MazeError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        MazeError::InvalidConfig {
            reason: reason.into(),
        }
    }
}

/// Result type alias for all fallible startup work
pub type MazeResult<T> = Result<T, MazeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maze_error_display() {
        let err = MazeError::invalid("field width must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid layout: field width must be positive"
        );

        let err = MazeError::LayoutNotFound {
            path: PathBuf::from("layouts/missing.json"),
        };
        assert!(err.to_string().contains("layouts/missing.json"));
    }

    #[test]
    fn test_json_error_converts() {
        let parse: Result<u32, serde_json::Error> = serde_json::from_str("not json");
        let err: MazeError = parse.unwrap_err().into();
        assert!(matches!(err, MazeError::Json(_)));
    }
}
