//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use senpart_core::SentencePart;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - collects all sentences and writes one array at the
/// end
pub struct JsonFormatter<W: Write> {
    writer: W,
    sentences: Vec<SentenceRecord>,
}

/// One segmented sentence in the JSON output
#[derive(Debug, Serialize)]
pub struct SentenceRecord {
    /// The input sentence as read
    pub sentence: String,
    /// Its auxiliary-bearing parts, possibly empty
    pub parts: Vec<SentencePart>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sentences: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn record(&mut self, sentence: &str, parts: &[SentencePart]) -> Result<()> {
        self.sentences.push(SentenceRecord {
            sentence: sentence.to_string(),
            parts: parts.to_vec(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.sentences)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_output() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer);
            let parts = vec![SentencePart {
                text: "was broken".to_string(),
                auxiliaries: vec!["was".to_string()],
            }];
            formatter.record("it was broken", &parts).unwrap();
            formatter.finish().unwrap();
        }
        let rendered = String::from_utf8(buffer).unwrap();
        assert!(rendered.contains("\"sentence\": \"it was broken\""));
        assert!(rendered.contains("\"auxiliaries\""));
    }
}
