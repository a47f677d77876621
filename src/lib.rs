// Clippy allows for reasonable defaults
#![allow(clippy::derivable_impls)] // Explicit Default impls can be clearer
#![allow(clippy::manual_strip)] // Manual prefix stripping can be clearer

// Module declarations
pub mod config;
pub mod error;
pub mod models;
pub mod parsers;
mod utils;

pub use config::{load_config, ParserConfig, PartialParserConfig};
pub use error::{PipelineError, SkipReason};
pub use models::*;
pub use parsers::{
    parse_recommendations, ExtractionSource, ParseReport, RecommendationParser, SkippedBlock,
};
