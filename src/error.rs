use thiserror::Error;

/// Errors that can occur while watching a page
#[derive(Debug, Error)]
pub enum WatchError {
    /// Failed to launch the browser
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    /// Failed to connect to an existing browser instance
    #[error("Failed to connect to browser: {0}")]
    ConnectionFailed(String),

    /// Navigation to a URL failed
    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    /// JavaScript evaluation in the page failed
    #[error("JavaScript evaluation failed: {0}")]
    EvaluationFailed(String),

    /// The page snapshot could not be captured or decoded
    #[error("Failed to capture page snapshot: {0}")]
    SnapshotFailed(String),

    /// A structural selector string could not be parsed
    #[error("Invalid selector '{0}'")]
    InvalidSelector(String),
}

/// Result type alias for watch operations
pub type Result<T> = std::result::Result<T, WatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WatchError::SnapshotFailed("no value returned".to_string());
        assert_eq!(
            err.to_string(),
            "Failed to capture page snapshot: no value returned"
        );

        let err = WatchError::InvalidSelector("".to_string());
        assert_eq!(err.to_string(), "Invalid selector ''");
    }
}
