//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use senpart_core::SentencePart;
use std::io::Write;

/// Text formatter - one line per sentence part, tab-separated from its
/// auxiliaries. Sentences without parts are skipped.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn record(&mut self, _sentence: &str, parts: &[SentencePart]) -> Result<()> {
        for part in parts {
            writeln!(self.writer, "{}\t{}", part.text, part.auxiliaries.join(","))?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_output() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            let parts = vec![SentencePart {
                text: "was broken".to_string(),
                auxiliaries: vec!["was".to_string()],
            }];
            formatter.record("it was broken", &parts).unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buffer).unwrap(), "was broken\twas\n");
    }
}
