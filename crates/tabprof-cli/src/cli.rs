//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use tabprof::{DEFAULT_PREVIEW_ROWS, ParserConfig, ProfilerConfig};

/// tabprof: statistical profiling for delimited tabular data
#[derive(Parser)]
#[command(name = "tabprof")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Profile a data file and write the result as JSON
    Profile {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path for the JSON profile (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,

        #[command(flatten)]
        options: ProfileOptions,
    },

    /// Print a human-readable summary of a data file
    Summary {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        options: ProfileOptions,
    },
}

/// Options shared by every command that profiles a file.
#[derive(Args, Debug, Clone)]
pub struct ProfileOptions {
    /// Field delimiter: a single ASCII character, or "tab"
    /// (default: tab for .tsv files, comma otherwise)
    #[arg(short, long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,

    /// Extra field value to treat as missing (repeatable)
    #[arg(long = "null-token", value_name = "TOKEN")]
    pub null_tokens: Vec<String>,

    /// Number of leading rows in the preview
    #[arg(long, default_value_t = DEFAULT_PREVIEW_ROWS)]
    pub preview_rows: usize,

    /// Compute statistics, correlation and metadata in parallel
    #[arg(long)]
    pub parallel: bool,
}

impl ProfileOptions {
    /// Build the engine configuration for `file`.
    pub fn to_config(&self, file: &Path) -> ProfilerConfig {
        let delimiter = self.delimiter.unwrap_or_else(|| delimiter_for(file));
        let parser = self
            .null_tokens
            .iter()
            .fold(ParserConfig::default().with_delimiter(delimiter), |config, token| {
                config.with_null_token(token.clone())
            });

        ProfilerConfig {
            parser,
            preview_rows: self.preview_rows,
            parallel: self.parallel,
        }
    }
}

/// Guess the delimiter from the file extension.
fn delimiter_for(file: &Path) -> u8 {
    match file.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("tsv") || ext.eq_ignore_ascii_case("tab") => b'\t',
        _ => b',',
    }
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => match s.as_bytes() {
            [b] if b.is_ascii() && !b.is_ascii_alphanumeric() && *b != b'"' && *b != b'\n' => {
                Ok(*b)
            }
            _ => Err(format!(
                "invalid delimiter '{}': expected one ASCII punctuation character or \"tab\"",
                s
            )),
        },
    }
}
