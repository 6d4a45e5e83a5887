// ⚙️ Record Processor
// One record in, one outcome out: validate → decode → apply → spell

use crate::arithmetic::Operation;
use crate::numeral::RomanToken;
use crate::speller::to_words;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// CORE TYPES
// ============================================================================

/// `<numeral> <operator> <numeral>` as read from the input stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub left: String,
    pub operator: char,
    pub right: String,
}

impl Record {
    pub fn new(left: impl Into<String>, operator: char, right: impl Into<String>) -> Self {
        Record {
            left: left.into(),
            operator,
            right: right.into(),
        }
    }

    /// Build from whitespace-split tokens. Only the first character of the
    /// operator token is kept.
    pub fn from_tokens(left: &str, operator: &str, right: &str) -> Self {
        let operator = operator
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        Record::new(left, operator, right)
    }
}

/// Result of processing one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Evaluated {
        left: String,
        operator: char,
        right: String,
        result: i32,
        words: String,
    },
    /// At least one operand held a non-Roman character.
    Invalid {
        left: String,
        operator: char,
        right: String,
    },
}

impl Outcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Evaluated { .. })
    }

    pub fn operator(&self) -> char {
        match self {
            Outcome::Evaluated { operator, .. } | Outcome::Invalid { operator, .. } => *operator,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Evaluated {
                left,
                operator,
                right,
                result,
                words,
            } => write!(f, "{} {} {} = {} ({})", left, operator, right, result, words),
            Outcome::Invalid {
                left,
                operator,
                right,
            } => write!(
                f,
                "Invalid Roman numeral(s) detected: {} {} {}",
                left, operator, right
            ),
        }
    }
}

// ============================================================================
// PROCESSING
// ============================================================================

/// Evaluate one record. Never fails: bad numerals become `Outcome::Invalid`
/// and unknown operators evaluate to zero.
pub fn process_record(record: &Record) -> Outcome {
    let (left, right) = match (
        RomanToken::parse(&record.left),
        RomanToken::parse(&record.right),
    ) {
        (Ok(left), Ok(right)) => (left, right),
        _ => {
            return Outcome::Invalid {
                left: record.left.clone(),
                operator: record.operator,
                right: record.right.clone(),
            }
        }
    };

    let result = Operation::from_symbol(record.operator).apply(left.value(), right.value());

    Outcome::Evaluated {
        left: record.left.clone(),
        operator: record.operator,
        right: record.right.clone(),
        result,
        words: to_words(result),
    }
}

// ============================================================================
// BATCH SUMMARY
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub evaluated: usize,
    pub invalid: usize,
    /// Evaluated records whose operator was not + - *
    pub unrecognized_operators: usize,
}

impl BatchSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: &Outcome) {
        self.total += 1;
        if outcome.is_valid() {
            self.evaluated += 1;
            if !Operation::from_symbol(outcome.operator()).is_recognized() {
                self.unrecognized_operators += 1;
            }
        } else {
            self.invalid += 1;
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "{} records: {} evaluated, {} invalid, {} with unrecognized operator",
            self.total, self.evaluated, self.invalid, self.unrecognized_operators
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluated_record() {
        let outcome = process_record(&Record::new("MCMXCIV", '+', "X"));

        assert!(outcome.is_valid());
        assert_eq!(outcome.to_string(), "MCMXCIV + X = 2004 (Two Thousand Four)");
    }

    #[test]
    fn test_invalid_left_operand() {
        let outcome = process_record(&Record::new("ABC", '+', "X"));

        assert!(!outcome.is_valid());
        assert_eq!(
            outcome.to_string(),
            "Invalid Roman numeral(s) detected: ABC + X"
        );
    }

    #[test]
    fn test_invalid_right_operand() {
        let outcome = process_record(&Record::new("X", '*', "iv"));
        assert_eq!(
            outcome.to_string(),
            "Invalid Roman numeral(s) detected: X * iv"
        );
    }

    #[test]
    fn test_negative_result() {
        let outcome = process_record(&Record::new("IV", '-', "IX"));
        assert_eq!(outcome.to_string(), "IV - IX = -5 (Negative Five)");
    }

    #[test]
    fn test_unrecognized_operator_is_zero() {
        let outcome = process_record(&Record::new("XIV", '/', "II"));
        assert_eq!(outcome.to_string(), "XIV / II = 0 (Zero)");
    }

    #[test]
    fn test_from_tokens_keeps_first_operator_char() {
        let record = Record::from_tokens("X", "+-", "V");
        assert_eq!(record, Record::new("X", '+', "V"));
    }

    #[test]
    fn test_batch_summary() {
        let mut summary = BatchSummary::new();
        summary.record(&process_record(&Record::new("X", '+', "V")));
        summary.record(&process_record(&Record::new("X", '?', "V")));
        summary.record(&process_record(&Record::new("Q", '+', "V")));

        assert_eq!(summary.total, 3);
        assert_eq!(summary.evaluated, 2);
        assert_eq!(summary.invalid, 1);
        assert_eq!(summary.unrecognized_operators, 1);
        assert_eq!(
            summary.summary(),
            "3 records: 2 evaluated, 1 invalid, 1 with unrecognized operator"
        );
    }

    #[test]
    fn test_outcome_json_shape() {
        let outcome = process_record(&Record::new("II", '*', "III"));
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["status"], "evaluated");
        assert_eq!(json["operator"], "*");
        assert_eq!(json["result"], 6);
        assert_eq!(json["words"], "Six");
    }
}
