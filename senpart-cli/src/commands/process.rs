//! Process command implementation

use crate::output::{self, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use senpart_core::SentenceSegmenter;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files, or "-" for stdin; one sentence per line
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Language profile to segment with
    #[arg(short, long, value_enum, default_value = "english")]
    pub language: Language,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported languages
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Language {
    /// English profile (auxiliaries, stopwords, gerunds, stop characters)
    English,
    /// French profile (auxiliaries, stopwords, comma)
    French,
}

impl Language {
    /// The registry code for this language
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
        }
    }
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("segmenting with language profile '{}'", self.language.code());

        let segmenter = SentenceSegmenter::for_language(self.language.code())?;
        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(
                fs::File::create(path)
                    .with_context(|| format!("cannot create {}", path.display()))?,
            ),
            None => Box::new(io::stdout()),
        };
        let mut formatter = output::create_formatter(self.format, writer);

        for source in &self.input {
            let text = read_input(source)?;
            for line in text.lines() {
                let sentence = line.trim();
                if sentence.is_empty() {
                    continue;
                }
                let parts = segmenter.segment(sentence);
                log::debug!("{} part(s) in: {sentence}", parts.len());
                formatter.record(sentence, &parts)?;
            }
        }
        formatter.finish()
    }

    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init()
                .ok();
        }
    }
}

fn read_input(source: &str) -> Result<String> {
    if source == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("cannot read stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(source).with_context(|| format!("cannot read {source}"))
    }
}
