use habitdeck_domain::shared::DomainError;

/// Extension trait for Result types to simplify error handling
pub trait ResultExt<T> {
    /// Convert error to DomainError::Repository with context
    /// Usage: `result.map_repo_error("Failed to read habits blob")?`
    fn map_repo_error(self, context: &str) -> Result<T, DomainError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn map_repo_error(self, context: &str) -> Result<T, DomainError> {
        self.map_err(|e| DomainError::Repository(format!("{context}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_repo_error_keeps_context() {
        let result: Result<i32, &str> = Err("disk full");
        match result.map_repo_error("Failed to write blob") {
            Err(DomainError::Repository(msg)) => {
                assert_eq!(msg, "Failed to write blob: disk full");
            }
            _ => panic!("Expected Repository error"),
        }
    }
}
