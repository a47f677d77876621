// Fenced block extraction - pulls tagged code fences out of model responses

use crate::error::PipelineError;
use regex::Regex;

pub const DEFAULT_BLOCK_TAG: &str = "recommendation";

/// Finds every ```` ```<tag> ```` ... ```` ``` ```` fence in a response.
///
/// Matching is non-greedy: a fence ends at the nearest closing marker, and an
/// opener with no closing marker yields nothing.
#[derive(Debug, Clone)]
pub struct BlockExtractor {
    tag: String,
    pattern: Regex,
}

impl BlockExtractor {
    pub fn new(tag: &str) -> Result<Self, PipelineError> {
        let tag = tag.trim();
        if tag.is_empty() || tag.chars().any(char::is_whitespace) {
            return Err(PipelineError::InvalidBlockTag(tag.to_string()));
        }

        let pattern = Regex::new(&format!(r"```{}\s*\n([\s\S]*?)```", regex::escape(tag)))?;
        Ok(Self {
            tag: tag.to_string(),
            pattern,
        })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Return the trimmed inner text of each fence, in document order
    pub fn extract(&self, content: &str) -> Vec<String> {
        self.pattern
            .captures_iter(content)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().trim().to_string()))
            .collect()
    }
}
