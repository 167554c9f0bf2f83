use thiserror::Error;

/// Failures surfaced by the merge pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    #[error("Failed to load node source: {0}")]
    SourceUnavailable(String),

    #[error("Failed to load template: {0}")]
    TemplateUnavailable(String),

    #[error("No nodes found in the source")]
    EmptyNodeSet,

    #[error("Failed to serialize merged config: {0}")]
    Serialize(String),

    #[error("Unknown refresh policy: {0}")]
    InvalidPolicy(String),

    #[error("Not authorized to access local files: {0}")]
    Unauthorized(String),
}

impl MergeError {
    /// Whether the failure is an expected outcome of the input rather than a
    /// fault of the service or its upstreams
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            MergeError::EmptyNodeSet | MergeError::InvalidPolicy(_) | MergeError::Unauthorized(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_distinguish_sources() {
        let source = MergeError::SourceUnavailable("HTTP error: 404".to_string());
        let template = MergeError::TemplateUnavailable("HTTP error: 404".to_string());
        assert_eq!(source.to_string(), "Failed to load node source: HTTP error: 404");
        assert_eq!(template.to_string(), "Failed to load template: HTTP error: 404");
        assert_ne!(source.to_string(), template.to_string());
    }

    #[test]
    fn test_recoverable() {
        assert!(MergeError::EmptyNodeSet.is_recoverable());
        assert!(MergeError::Unauthorized("/etc/passwd".to_string()).is_recoverable());
        assert!(!MergeError::Serialize("x".to_string()).is_recoverable());
        assert!(!MergeError::SourceUnavailable("x".to_string()).is_recoverable());
    }
}
