//! Error type for report rendering and serialization.

use thiserror::Error;

/// Errors produced while building report output.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReportError {
    /// JSON serialization of the report document failed.
    #[error("failed to serialize report document: {reason}")]
    Serialization {
        /// Underlying serializer message.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_the_reason() {
        let err = ReportError::Serialization {
            reason: "key must be a string".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to serialize report document: key must be a string"
        );
    }
}
