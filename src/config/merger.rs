// Configuration merging with priority

use super::loader::ParserConfig;
use serde::{Deserialize, Serialize};

/// Partial configuration for merging
/// Uses Option<T> for all fields to support partial overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialParserConfig {
    pub block_tag: Option<String>,
    pub line_fallback: Option<bool>,
    pub id_prefix: Option<String>,
    pub fallback_id_prefix: Option<String>,
}

impl PartialParserConfig {
    /// Apply overrides on top of a base config.
    /// Priority order: overrides -> base (file) -> defaults
    pub fn apply_to(self, base: ParserConfig) -> ParserConfig {
        ParserConfig {
            block_tag: self.block_tag.unwrap_or(base.block_tag),
            line_fallback: self.line_fallback.unwrap_or(base.line_fallback),
            id_prefix: self.id_prefix.unwrap_or(base.id_prefix),
            fallback_id_prefix: self.fallback_id_prefix.unwrap_or(base.fallback_id_prefix),
        }
    }
}
