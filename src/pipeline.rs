// 🔁 Pipeline - drives reader → processor → sink over a whole input

use crate::arithmetic::Operation;
use crate::error::ProcessError;
use crate::processor::{process_record, BatchSummary, Outcome};
use crate::reader::RecordReader;
use crate::sink::{get_sink, OutputFormat, RecordSink};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Path meaning stdin (as input) or stdout (as output).
pub const STDIO_PATH: &str = "-";

pub fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO_PATH
}

/// Open the line source. A missing or unreadable file is fatal.
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead>, ProcessError> {
    if is_stdio(path) {
        return Ok(Box::new(io::stdin().lock()));
    }

    let file = File::open(path).map_err(|source| ProcessError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Box::new(BufReader::new(file)))
}

pub fn open_output(path: &Path) -> Result<Box<dyn Write>> {
    if is_stdio(path) {
        return Ok(Box::new(io::stdout()));
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {:?}", path))?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Process every record in `reader`, writing one outcome per record.
///
/// Invalid numerals are reported in the output and do not stop the run.
/// A trailing partial record is logged and dropped.
pub fn process_stream<R: BufRead>(reader: R, sink: &mut dyn RecordSink) -> Result<BatchSummary> {
    let mut summary = BatchSummary::new();

    for item in RecordReader::new(reader) {
        let record = match item {
            Ok(record) => record,
            Err(ProcessError::IncompleteRecord { tokens }) => {
                warn!(?tokens, "ignoring incomplete record at end of input");
                break;
            }
            Err(e) => return Err(e).context("Failed to read input"),
        };

        let outcome = process_record(&record);
        match &outcome {
            Outcome::Evaluated { result, .. } => {
                if !Operation::from_symbol(record.operator).is_recognized() {
                    warn!(
                        operator = %record.operator,
                        left = %record.left,
                        right = %record.right,
                        "unrecognized operator, result is zero"
                    );
                }
                debug!(left = %record.left, operator = %record.operator, right = %record.right, result, "evaluated");
            }
            Outcome::Invalid { .. } => {
                info!(left = %record.left, operator = %record.operator, right = %record.right, "invalid Roman numeral(s)");
            }
        }

        sink.write(&outcome)?;
        summary.record(&outcome);
    }

    sink.finish()?;
    info!(
        total = summary.total,
        invalid = summary.invalid,
        "processing finished: {}",
        summary.summary()
    );

    Ok(summary)
}

/// Process `input` into `output` in the given format.
///
/// The input is opened first: if that fails no output file is created.
pub fn process_file(input: &Path, output: &Path, format: OutputFormat) -> Result<BatchSummary> {
    let reader = open_input(input)?;
    let writer = open_output(output)?;
    let mut sink = get_sink(format, writer);

    info!(input = ?input, output = ?output, %format, "processing records");
    process_stream(reader, sink.as_mut())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::TextSink;
    use std::io::Cursor;
    use std::path::PathBuf;

    /// Sink that keeps rendered lines in memory.
    struct CollectSink(Vec<String>);

    impl RecordSink for CollectSink {
        fn write(&mut self, outcome: &Outcome) -> Result<()> {
            self.0.push(outcome.to_string());
            Ok(())
        }

        fn finish(&mut self) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_process_stream_mixed_records() {
        let input = "MCMXCIV + X\nABC + X\nXIV ? II\nX - L\n";
        let mut sink = CollectSink(Vec::new());

        let summary = process_stream(Cursor::new(input), &mut sink).unwrap();

        assert_eq!(
            sink.0,
            vec![
                "MCMXCIV + X = 2004 (Two Thousand Four)",
                "Invalid Roman numeral(s) detected: ABC + X",
                "XIV ? II = 0 (Zero)",
                "X - L = -40 (Negative Forty)",
            ]
        );
        assert_eq!(summary.total, 4);
        assert_eq!(summary.invalid, 1);
        assert_eq!(summary.unrecognized_operators, 1);
    }

    #[test]
    fn test_process_stream_drops_partial_tail() {
        let mut sink = CollectSink(Vec::new());
        let summary = process_stream(Cursor::new("II * III\nV +"), &mut sink).unwrap();

        assert_eq!(sink.0, vec!["II * III = 6 (Six)"]);
        assert_eq!(summary.total, 1);
    }

    #[test]
    fn test_process_stream_is_deterministic() {
        let input = "XIV + IX IV - IX MMM * MMM";
        let run = || {
            let mut sink = CollectSink(Vec::new());
            process_stream(Cursor::new(input), &mut sink).unwrap();
            sink.0
        };

        assert_eq!(run(), run());
    }

    #[test]
    fn test_process_stream_continues_past_undecodable_bytes() {
        let input: &[u8] = b"X + V\nA\xFF + X\nI + I\n";
        let mut sink = CollectSink(Vec::new());

        let summary = process_stream(Cursor::new(input), &mut sink).unwrap();

        assert_eq!(
            sink.0,
            vec![
                "X + V = 15 (Fifteen)",
                "Invalid Roman numeral(s) detected: A\u{FFFD} + X",
                "I + I = 2 (Two)",
            ]
        );
        assert_eq!(summary.invalid, 1);
    }

    #[test]
    fn test_process_stream_text_output() {
        let mut rendered = Vec::new();
        process_stream(Cursor::new("I + I"), &mut TextSink::new(&mut rendered)).unwrap();
        assert_eq!(String::from_utf8(rendered).unwrap(), "I + I = 2 (Two)\n");
    }

    #[test]
    fn test_open_input_missing_file() {
        let path = PathBuf::from("definitely/not/here/Input.txt");
        let err = open_input(&path).err().unwrap();

        assert!(matches!(err, ProcessError::SourceUnavailable { .. }));
    }

    #[test]
    fn test_stdio_path() {
        assert!(is_stdio(Path::new("-")));
        assert!(!is_stdio(Path::new("Output.txt")));
    }
}
