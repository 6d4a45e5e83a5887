// 🏛️ Roman Numeral Parser
// Alphabet validation + subtractive-pair decoding
//
// Decoding is a mechanical two-symbol lookahead, not a grammar check:
// "IIII" decodes to 4 and "VX" decodes to 5.

use crate::error::ProcessError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The seven classical symbols, in ascending value.
pub const ROMAN_ALPHABET: &str = "IVXLCDM";

// ============================================================================
// SYMBOLS
// ============================================================================

/// Value of a single symbol. Anything outside the alphabet is 0.
pub fn symbol_value(c: char) -> i32 {
    match c {
        'I' => 1,
        'V' => 5,
        'X' => 10,
        'L' => 50,
        'C' => 100,
        'D' => 500,
        'M' => 1000,
        _ => 0,
    }
}

/// True iff every character is an uppercase Roman symbol.
///
/// The empty string is valid: no character violates the alphabet.
pub fn is_valid_token(token: &str) -> bool {
    token.chars().all(|c| ROMAN_ALPHABET.contains(c))
}

/// Decode an alphabet-valid token.
///
/// Each symbol is subtracted when the next symbol is worth more, added
/// otherwise. Callers must check `is_valid_token` first; foreign
/// characters count as 0.
pub fn decode(token: &str) -> i32 {
    let values: Vec<i32> = token.chars().map(symbol_value).collect();

    let mut total: i32 = 0;
    for (i, &current) in values.iter().enumerate() {
        let next = values.get(i + 1).copied().unwrap_or(0);

        if current < next {
            total = total.wrapping_sub(current);
        } else {
            total = total.wrapping_add(current);
        }
    }
    total
}

// ============================================================================
// VALIDATED TOKEN
// ============================================================================

/// A token known to contain only Roman symbols.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RomanToken(String);

impl RomanToken {
    pub fn parse(token: &str) -> Result<Self, ProcessError> {
        if is_valid_token(token) {
            Ok(RomanToken(token.to_string()))
        } else {
            Err(ProcessError::InvalidNumeral {
                token: token.to_string(),
            })
        }
    }

    pub fn value(&self) -> i32 {
        decode(&self.0)
    }
}

impl fmt::Display for RomanToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// TESTS
// ============================================================================
