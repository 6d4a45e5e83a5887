// 📥 Record Reader
// Whitespace-delimited token stream, grouped three at a time.
// Line breaks carry no meaning: a record may span lines.

use crate::error::ProcessError;
use crate::processor::Record;
use std::collections::VecDeque;
use std::io::BufRead;

const TOKENS_PER_RECORD: usize = 3;

pub struct RecordReader<R: BufRead> {
    reader: R,
    pending: VecDeque<String>,
    line: Vec<u8>,
    exhausted: bool,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(reader: R) -> Self {
        RecordReader {
            reader,
            pending: VecDeque::new(),
            line: Vec::new(),
            exhausted: false,
        }
    }

    /// Pull lines until a full record is buffered or the stream ends.
    ///
    /// Bytes that are not UTF-8 become U+FFFD, so the token they sit in
    /// fails numeral validation instead of aborting the run.
    fn fill(&mut self) -> Result<(), ProcessError> {
        while self.pending.len() < TOKENS_PER_RECORD && !self.exhausted {
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                self.exhausted = true;
            } else {
                let text = String::from_utf8_lossy(&self.line);
                self.pending
                    .extend(text.split_whitespace().map(str::to_string));
            }
        }
        Ok(())
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<Record, ProcessError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Err(e) = self.fill() {
            // A broken stream ends iteration after reporting once
            self.exhausted = true;
            self.pending.clear();
            return Some(Err(e));
        }

        if self.pending.len() >= TOKENS_PER_RECORD {
            let tokens: Vec<String> = self.pending.drain(..TOKENS_PER_RECORD).collect();
            return Some(Ok(Record::from_tokens(&tokens[0], &tokens[1], &tokens[2])));
        }

        if self.pending.is_empty() {
            return None;
        }

        let tokens: Vec<String> = self.pending.drain(..).collect();
        Some(Err(ProcessError::IncompleteRecord { tokens }))
    }
}
