// Error types for recommendation extraction

use serde::Serialize;
use thiserror::Error;

/// Why a fenced block did not become a recommendation.
///
/// Skips are never surfaced to callers of `parse`; they are logged and
/// recorded on the detailed `ParseReport`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    #[error("block is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("block does not contain a JSON object")]
    NotAnObject,

    #[error("title is missing or not a string")]
    MissingTitle,

    #[error("title is empty")]
    EmptyTitle,

    #[error("steps is missing or not an array")]
    MissingSteps,

    #[error("steps array is empty")]
    EmptySteps,

    #[error("steps array has no text entries")]
    NoUsableSteps,
}

/// Faults raised while building a parser. Parsing itself never fails.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Invalid block tag '{0}': must be non-empty and contain no whitespace")]
    InvalidBlockTag(String),

    #[error("Failed to compile block pattern: {0}")]
    Pattern(#[from] regex::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_reason_display() {
        assert_eq!(
            SkipReason::InvalidJson("EOF".to_string()).to_string(),
            "block is not valid JSON: EOF"
        );
        assert_eq!(SkipReason::EmptySteps.to_string(), "steps array is empty");
    }

    #[test]
    fn test_skip_reason_serializes_tagged() {
        let value = serde_json::to_value(SkipReason::MissingTitle).unwrap();
        assert_eq!(value["kind"], "missing_title");

        let value = serde_json::to_value(SkipReason::InvalidJson("bad".to_string())).unwrap();
        assert_eq!(value["kind"], "invalid_json");
        assert_eq!(value["detail"], "bad");
    }
}
