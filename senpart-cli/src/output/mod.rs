//! Output formatting

use anyhow::Result;
use senpart_core::SentencePart;
use std::io::Write;

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per part: `part<TAB>auxiliaries`
    Text,
    /// JSON array of sentences with their parts
    Json,
}

/// Common interface for output formatters
pub trait OutputFormatter {
    /// Record one segmented sentence
    fn record(&mut self, sentence: &str, parts: &[SentencePart]) -> Result<()>;

    /// Flush any buffered output
    fn finish(&mut self) -> Result<()>;
}

/// Create a formatter for the requested format
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write>,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
    }
}
