// Roman Numeral Processor - Core Library
// Exposes all modules for use in the CLI and tests

pub mod arithmetic;
pub mod config;
pub mod error;
pub mod numeral;
pub mod pipeline;
pub mod processor;
pub mod reader;
pub mod sink;
pub mod speller;

// Re-export commonly used types
pub use arithmetic::{apply, Operation};
pub use config::{Cli, LoggingConfig};
pub use error::ProcessError;
pub use numeral::{decode, is_valid_token, symbol_value, RomanToken, ROMAN_ALPHABET};
pub use pipeline::{open_input, open_output, process_file, process_stream};
pub use processor::{process_record, BatchSummary, Outcome, Record};
pub use reader::RecordReader;
pub use sink::{get_sink, CsvSink, JsonSink, OutputFormat, RecordSink, TextSink};
pub use speller::{to_words, to_words_wide};
