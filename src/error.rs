// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! Errors raised from this library.
//!

use peg::{error::ParseError, str::LineCol};
use std::borrow::Cow;
use thiserror::Error;

/// Variants of error raised from this library.
///
/// The taxonomy is closed: every failure of parsing, decoding or construction
/// maps to exactly one of the variants below. Nothing is recovered locally and
/// no partial filter is ever returned alongside an error.
#[derive(Debug, Error)]
pub enum Cql2Error {
    /// Text input did not match the CQL2 grammar.
    #[error("syntax error at offset {offset} (line {line}, column {column}): expected {expected}")]
    Syntax {
        /// Byte offset of the failure in the input.
        offset: usize,
        /// 1-based line of the failure.
        line: usize,
        /// 1-based column of the failure.
        column: usize,
        /// Description of the tokens the parser would have accepted.
        expected: String,
    },

    /// A filter invariant was violated while constructing the syntax tree;
    /// e.g. a line string with a single position, or a `BETWEEN` with the
    /// wrong number of operands.
    #[error("structural error: {0}")]
    Structure(Cow<'static, str>),

    /// JSON input used an `op` string outside the recognized set.
    #[error("unknown operator '{op}' at '{pointer}'")]
    UnknownOp {
        /// The unrecognized operator name.
        op: String,
        /// JSON Pointer to the object carrying the operator.
        pointer: String,
    },

    /// Malformed UTF-8 input, or a literal whose spelling matched the grammar
    /// but whose value is unusable.
    #[error("encoding error: {0}")]
    Encoding(Cow<'static, str>),

    /// Expression nesting exceeded the configured limit.
    #[error("nesting depth exceeds the configured limit ({0})")]
    DepthExceeded(usize),
}

impl From<ParseError<LineCol>> for Cql2Error {
    fn from(e: ParseError<LineCol>) -> Self {
        Cql2Error::Syntax {
            offset: e.location.offset,
            line: e.location.line,
            column: e.location.column,
            expected: e.expected.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = Cql2Error::DepthExceeded(256);
        assert_eq!(
            e.to_string(),
            "nesting depth exceeds the configured limit (256)"
        );

        let e = Cql2Error::UnknownOp {
            op: "frobnicate".into(),
            pointer: "/args/1".into(),
        };
        assert!(e.to_string().contains("frobnicate"));
        assert!(e.to_string().contains("/args/1"));
    }
}
