//! CLI command implementations

use crate::{
    config::CliConfig,
    error::CliError,
    input::{resolve_patterns, FileReader, InputSource},
    output::{create_formatter, OutputFormat},
    progress::ProgressReporter,
};
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use hanseg_engine::{Backend, EngineError, SentenceSplitter};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

pub mod chunk;
pub mod generate_config;
pub mod split;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text files into sentences
    Split(split::SplitArgs),

    /// Group sentences into chunks of bounded length
    Chunk(chunk::ChunkArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a configuration file with every default spelled out
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List analyzer backends
    Backends,

    /// List output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Split(args) => args.execute(),
            Commands::Chunk(args) => args.execute(),
            Commands::List { subcommand } => {
                let stdout = io::stdout();
                subcommand.write_to(&mut stdout.lock())
            }
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Print the listing
    pub fn write_to(&self, out: &mut impl Write) -> Result<()> {
        match self {
            ListCommands::Backends => {
                writeln!(out, "Available backends:")?;
                for backend in Backend::ALL {
                    writeln!(out, "  {:<8} {}", backend.as_str(), backend.description())?;
                }
            }
            ListCommands::Formats => {
                writeln!(out, "Available output formats:")?;
                for format in OutputFormat::ALL {
                    writeln!(out, "  {:<8} {}", format.as_str(), format.description())?;
                }
            }
        }
        Ok(())
    }
}

fn parse_backend(value: &str) -> std::result::Result<Backend, String> {
    value.parse().map_err(|e: EngineError| e.to_string())
}

/// Options shared by `split` and `chunk`
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Input files or patterns (supports glob; `-` reads stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text, or the config file's]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Analyzer backend: auto, mecab, pecab, punct or fast
    #[arg(short, long, env = "HANSEG_BACKEND", value_parser = parse_backend)]
    pub backend: Option<Backend>,

    /// Keep whitespace around sentences
    #[arg(long)]
    pub no_strip: bool,

    /// Text that must never be split inside (repeatable)
    #[arg(long = "ignore", value_name = "TEXT")]
    pub ignores: Vec<String>,

    /// Worker threads for multiple inputs (default: one per CPU)
    #[arg(short, long, value_name = "N")]
    pub workers: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Everything read and built before splitting starts
pub struct Prepared {
    /// Loaded configuration
    pub config: CliConfig,
    /// Configured splitter
    pub splitter: SentenceSplitter,
    /// Input documents, in order
    pub sources: Vec<InputSource>,
    /// Their contents
    pub texts: Vec<String>,
}

impl CommonArgs {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        // A second initialization (tests) keeps the first logger.
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }

    /// Load configuration, resolve inputs, read them and build the splitter.
    pub fn prepare(&self) -> Result<Prepared> {
        let config = CliConfig::load_or_default(self.config.as_deref())?;
        config.validate()?;

        let sources = resolve_patterns(&self.input)?;
        let texts = sources
            .iter()
            .map(FileReader::read_source)
            .collect::<Result<Vec<_>>>()?;

        let mut splitter_config = config.splitter_config()?;
        if let Some(backend) = self.backend {
            splitter_config.backend = backend;
        }
        if self.no_strip {
            splitter_config.strip = false;
        }
        splitter_config.ignores.extend(self.ignores.iter().cloned());
        if self.workers.is_some() {
            splitter_config.num_workers = self.workers;
        }

        let splitter = SentenceSplitter::with_config(splitter_config).map_err(CliError::from)?;
        log::info!(
            "splitting {} document(s) with the {} backend",
            sources.len(),
            splitter.backend()
        );

        Ok(Prepared {
            config,
            splitter,
            sources,
            texts,
        })
    }

    /// Write `documents`, one list of `(segment, offset)` per source.
    pub fn write_segments(
        &self,
        prepared: &Prepared,
        documents: Vec<Vec<(String, usize)>>,
        unit: &'static str,
    ) -> Result<()> {
        let format = match self.format {
            Some(format) => format,
            None => prepared.config.output_format()?,
        };
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter =
            create_formatter(format, writer, prepared.config.output.pretty_json, unit);

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(prepared.sources.len() as u64);

        let multiple = prepared.sources.len() > 1;
        for (source, segments) in prepared.sources.iter().zip(documents) {
            let name = source.display_name();
            if multiple {
                formatter.start_source(&name)?;
            }
            for (segment, offset) in &segments {
                formatter.format_segment(segment, *offset)?;
            }
            progress.file_completed(&name);
        }

        formatter.finish()?;
        progress.finish();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_backends() {
        let mut out = Vec::new();
        ListCommands::Backends.write_to(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        for name in ["auto", "mecab", "pecab", "punct", "fast"] {
            assert!(out.contains(name), "missing {name}");
        }
    }

    #[test]
    fn test_list_formats() {
        let mut out = Vec::new();
        ListCommands::Formats.write_to(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("markdown"));
    }

    #[test]
    fn test_parse_backend() {
        assert_eq!(parse_backend("Punct"), Ok(Backend::Punct));
        assert!(parse_backend("kiwi").unwrap_err().contains("backend"));
    }
}
