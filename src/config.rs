// 🛠️ Configuration - command-line options and logging setup

use crate::sink::OutputFormat;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

/// Evaluate Roman-numeral arithmetic and spell the results in English.
#[derive(Parser, Debug, Clone)]
#[command(name = "roman-processor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input file of `<numeral> <op> <numeral>` records ("-" for stdin)
    #[arg(short, long, default_value = "Input.txt")]
    pub input: PathBuf,

    /// Output file ("-" for stdout)
    #[arg(short, long, default_value = "Output.txt")]
    pub output: PathBuf,

    /// Output format: text, json or csv
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Log level filter (overridden by RUST_LOG)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Log format: pretty or json
    #[arg(long, default_value = "pretty")]
    pub log_format: String,
}

impl Cli {
    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            format: self.log_format.clone(),
        }
    }
}

// ============================================================================
// LOGGING
// ============================================================================

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Install the global tracing subscriber. Logs go to stderr.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}
