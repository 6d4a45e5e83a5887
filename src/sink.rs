// 📤 Output Sinks
// One formatted record per write: plain text, JSON lines, or CSV

use crate::processor::Outcome;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

// ============================================================================
// FORMAT SELECTION
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// `XIV + IX = 23 (Twenty Three)`
    #[default]
    Text,
    /// One JSON object per line
    Json,
    Csv,
}

impl OutputFormat {
    pub fn name(&self) -> &str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" | "jsonl" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!(
                "unknown output format '{}' (expected text, json or csv)",
                other
            )),
        }
    }
}

// ============================================================================
// SINK TRAIT
// ============================================================================

/// Destination for processed records.
pub trait RecordSink {
    fn write(&mut self, outcome: &Outcome) -> Result<()>;

    /// Flush buffered output. Called once after the last record.
    fn finish(&mut self) -> Result<()>;
}

/// Get the sink for a given format.
pub fn get_sink<W: Write + 'static>(format: OutputFormat, writer: W) -> Box<dyn RecordSink> {
    match format {
        OutputFormat::Text => Box::new(TextSink::new(writer)),
        OutputFormat::Json => Box::new(JsonSink::new(writer)),
        OutputFormat::Csv => Box::new(CsvSink::new(writer)),
    }
}

// ============================================================================
// TEXT
// ============================================================================

pub struct TextSink<W: Write> {
    writer: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        TextSink { writer }
    }
}

impl<W: Write> RecordSink for TextSink<W> {
    fn write(&mut self, outcome: &Outcome) -> Result<()> {
        writeln!(self.writer, "{}", outcome).context("Failed to write output line")
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush().context("Failed to flush output")
    }
}

// ============================================================================
// JSON LINES
// ============================================================================

pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        JsonSink { writer }
    }
}

impl<W: Write> RecordSink for JsonSink<W> {
    fn write(&mut self, outcome: &Outcome) -> Result<()> {
        serde_json::to_writer(&mut self.writer, outcome).context("Failed to serialize record")?;
        self.writer.write_all(b"\n").context("Failed to write output line")
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush().context("Failed to flush output")
    }
}

// ============================================================================
// CSV
// ============================================================================

/// Flat row shape; `result` and `words` are empty for invalid records.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    status: &'a str,
    left: &'a str,
    operator: char,
    right: &'a str,
    result: Option<i32>,
    words: Option<&'a str>,
}

impl<'a> From<&'a Outcome> for CsvRow<'a> {
    fn from(outcome: &'a Outcome) -> Self {
        match outcome {
            Outcome::Evaluated {
                left,
                operator,
                right,
                result,
                words,
            } => CsvRow {
                status: "evaluated",
                left,
                operator: *operator,
                right,
                result: Some(*result),
                words: Some(words.as_str()),
            },
            Outcome::Invalid {
                left,
                operator,
                right,
            } => CsvRow {
                status: "invalid",
                left,
                operator: *operator,
                right,
                result: None,
                words: None,
            },
        }
    }
}

pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvSink<W> {
    pub fn new(writer: W) -> Self {
        CsvSink {
            writer: csv::Writer::from_writer(writer),
        }
    }
}

impl<W: Write> RecordSink for CsvSink<W> {
    fn write(&mut self, outcome: &Outcome) -> Result<()> {
        self.writer
            .serialize(CsvRow::from(outcome))
            .context("Failed to write CSV row")
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush().context("Failed to flush CSV output")
    }
}

// ============================================================================
// TESTS
// ============================================================================
