// Configuration file loading

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Parser configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Info-string tag that opens a recommendation fence
    #[serde(rename = "blockTag", alias = "block_tag", default = "default_block_tag")]
    pub block_tag: String,
    /// Scan plain lines when the output has no fenced blocks
    #[serde(rename = "lineFallback", alias = "line_fallback", default = "default_true")]
    pub line_fallback: bool,
    /// Id prefix for records parsed from fenced blocks
    #[serde(rename = "idPrefix", alias = "id_prefix", default = "default_id_prefix")]
    pub id_prefix: String,
    /// Id prefix for records produced by the fallback path
    #[serde(
        rename = "fallbackIdPrefix",
        alias = "fallback_id_prefix",
        default = "default_fallback_id_prefix"
    )]
    pub fallback_id_prefix: String,
}

fn default_block_tag() -> String { "recommendation".to_string() }
fn default_true() -> bool { true }
fn default_id_prefix() -> String { "rec".to_string() }
fn default_fallback_id_prefix() -> String { "fallback".to_string() }

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            block_tag: default_block_tag(),
            line_fallback: default_true(),
            id_prefix: default_id_prefix(),
            fallback_id_prefix: default_fallback_id_prefix(),
        }
    }
}

/// Supported config file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// Detect format from file path
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Parse configuration from a string in the given format
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<ParserConfig> {
    match format {
        ConfigFormat::Yaml => {
            // An empty YAML document deserializes to unit, not a mapping
            if content.trim().is_empty() {
                return Ok(ParserConfig::default());
            }
            serde_yaml::from_str(content).context("Failed to parse YAML config")
        }
        ConfigFormat::Toml => toml::from_str(content).context("Failed to parse TOML config"),
    }
}

/// Load configuration from a `.yaml`, `.yml` or `.toml` file
pub fn load_config(path: &Path) -> Result<ParserConfig> {
    let format = ConfigFormat::from_path(path).ok_or_else(|| {
        anyhow!(
            "Unsupported config file '{}': expected .yaml, .yml or .toml",
            path.display()
        )
    })?;

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    let config = parse_config(&content, format)
        .with_context(|| format!("Invalid config file {}", path.display()))?;

    log::debug!("Loaded parser config from {}", path.display());
    Ok(config)
}
