// ➕ Arithmetic - binary operators over decoded values
//
// Fixed-width i32 semantics: results wrap on overflow.
// Unknown operator symbols evaluate to 0 without signalling an error.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    /// Any other symbol. Always evaluates to 0.
    Unrecognized(char),
}

impl Operation {
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            '+' => Operation::Add,
            '-' => Operation::Subtract,
            '*' => Operation::Multiply,
            other => Operation::Unrecognized(other),
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Unrecognized(c) => *c,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Operation::Unrecognized(_))
    }

    pub fn apply(&self, a: i32, b: i32) -> i32 {
        match self {
            Operation::Add => a.wrapping_add(b),
            Operation::Subtract => a.wrapping_sub(b),
            Operation::Multiply => a.wrapping_mul(b),
            Operation::Unrecognized(_) => 0,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Apply the operator named by `op` to `a` and `b`.
pub fn apply(a: i32, b: i32, op: char) -> i32 {
    Operation::from_symbol(op).apply(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_known_operators() {
        assert_eq!(apply(4, 9, '+'), 13);
        assert_eq!(apply(4, 9, '-'), -5);
        assert_eq!(apply(4, 9, '*'), 36);
    }

    #[test]
    fn test_apply_unrecognized_is_zero() {
        assert_eq!(apply(4, 9, '?'), 0);
        assert_eq!(apply(4, 9, '/'), 0);
        assert_eq!(apply(0, 0, 'x'), 0);
    }

    #[test]
    fn test_apply_wraps_on_overflow() {
        assert_eq!(apply(i32::MAX, 1, '+'), i32::MIN);
        assert_eq!(apply(i32::MIN, 1, '-'), i32::MAX);
        assert_eq!(apply(65536, 65536, '*'), 0);
    }

    #[test]
    fn test_operation_symbols() {
        for symbol in ['+', '-', '*', '%'] {
            assert_eq!(Operation::from_symbol(symbol).symbol(), symbol);
        }
        assert!(Operation::Multiply.is_recognized());
        assert!(!Operation::from_symbol('%').is_recognized());
        assert_eq!(Operation::Subtract.to_string(), "-");
    }
}
