// Parser configuration: file loading and override merging

pub mod loader;
pub mod merger;

pub use loader::{load_config, parse_config, ConfigFormat, ParserConfig};
pub use merger::PartialParserConfig;
