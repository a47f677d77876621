// Recommendation extraction pipeline - turns raw model output into ranked records

pub mod blocks;
pub mod candidate;
pub mod fallback;
pub mod markdown;
pub mod normalize;
pub mod ranking;

use crate::config::ParserConfig;
use crate::error::{PipelineError, SkipReason};
use crate::models::Recommendation;
use crate::utils::generate_id;
use blocks::BlockExtractor;
use candidate::{parse_candidate, validate_candidate};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::LazyLock;

static DEFAULT_PARSER: LazyLock<RecommendationParser> = LazyLock::new(|| {
    RecommendationParser::new(ParserConfig::default()).expect("default block tag is valid")
});

/// Parse raw model output with the default configuration.
///
/// Never fails: malformed blocks are skipped, and output with no usable
/// recommendation fences degrades to line parsing and finally to a single
/// generic record.
pub fn parse_recommendations(raw: &str) -> Vec<Recommendation> {
    DEFAULT_PARSER.parse(raw)
}

/// Which path produced the recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionSource {
    /// At least one fenced block produced a record
    Blocks,
    /// No usable fences; numbered/bulleted lines were used
    LineFallback,
    /// Nothing usable; the single generic record
    Default,
}

/// A fenced block that did not produce a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedBlock {
    /// Zero-based position among the detected blocks
    pub index: usize,
    pub reason: SkipReason,
}

/// Full outcome of one parse, including what was dropped and why
#[derive(Debug, Clone, Serialize)]
pub struct ParseReport {
    pub recommendations: Vec<Recommendation>,
    pub skipped: Vec<SkippedBlock>,
    pub source: ExtractionSource,
    pub blocks_found: usize,
    pub generated_at: DateTime<Utc>,
}

/// Configured extraction pipeline. Immutable once built, so one instance can
/// serve concurrent callers.
#[derive(Debug, Clone)]
pub struct RecommendationParser {
    config: ParserConfig,
    extractor: BlockExtractor,
}

impl RecommendationParser {
    pub fn new(config: ParserConfig) -> Result<Self, PipelineError> {
        let extractor = BlockExtractor::new(&config.block_tag)?;
        Ok(Self { config, extractor })
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse and return only the ordered recommendations
    pub fn parse(&self, raw: &str) -> Vec<Recommendation> {
        self.parse_detailed(raw).recommendations
    }

    pub fn parse_detailed(&self, raw: &str) -> ParseReport {
        let blocks = self.extractor.extract(raw);
        let blocks_found = blocks.len();

        if blocks.is_empty() {
            return self.fallback_report(raw, Vec::new(), blocks_found);
        }

        let outcomes: Vec<Result<Recommendation, SkipReason>> = blocks
            .iter()
            .map(|block| self.process_block(block))
            .collect();

        let mut recommendations = Vec::with_capacity(blocks_found);
        let mut skipped = Vec::new();
        for (index, outcome) in outcomes.into_iter().enumerate() {
            match outcome {
                Ok(rec) => recommendations.push(rec),
                Err(reason) => {
                    log::warn!("Skipping {} block {}: {}", self.extractor.tag(), index, reason);
                    skipped.push(SkippedBlock { index, reason });
                }
            }
        }

        if recommendations.is_empty() {
            log::warn!(
                "All {} {} blocks were rejected; falling back to line parsing",
                blocks_found,
                self.extractor.tag()
            );
            return self.fallback_report(raw, skipped, blocks_found);
        }

        ranking::sort_recommendations(&mut recommendations);
        log::debug!(
            "Parsed {} recommendations from {} blocks ({} skipped)",
            recommendations.len(),
            blocks_found,
            skipped.len()
        );

        ParseReport {
            recommendations,
            skipped,
            source: ExtractionSource::Blocks,
            blocks_found,
            generated_at: Utc::now(),
        }
    }

    fn process_block(&self, block: &str) -> Result<Recommendation, SkipReason> {
        let candidate = parse_candidate(block)?;
        let valid = validate_candidate(candidate).into_result().map_err(|reason| {
            log::debug!("Rejected recommendation candidate: {}", reason);
            reason
        })?;
        Ok(normalize::normalize_candidate(
            valid,
            generate_id(&self.config.id_prefix),
        ))
    }

    fn fallback_report(
        &self,
        raw: &str,
        skipped: Vec<SkippedBlock>,
        blocks_found: usize,
    ) -> ParseReport {
        let (mut recommendations, source) = self.fallback(raw);
        ranking::sort_recommendations(&mut recommendations);
        ParseReport {
            recommendations,
            skipped,
            source,
            blocks_found,
            generated_at: Utc::now(),
        }
    }

    fn fallback(&self, raw: &str) -> (Vec<Recommendation>, ExtractionSource) {
        let prefix = &self.config.fallback_id_prefix;

        if self.config.line_fallback {
            let recommendations = fallback::parse_lines(raw, prefix);
            if !recommendations.is_empty() {
                log::info!(
                    "No usable {} blocks; extracted {} recommendations from lines",
                    self.extractor.tag(),
                    recommendations.len()
                );
                return (recommendations, ExtractionSource::LineFallback);
            }
        }

        log::info!("No structured recommendations found; using general recommendation");
        (
            vec![fallback::default_recommendation(raw, prefix)],
            ExtractionSource::Default,
        )
    }
}
