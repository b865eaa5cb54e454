// Copyright 2025-2026 Cornell University
// released under MIT license
// author: Kevin Laeufer <laeufer@cornell.edu>

use thiserror::Error;

/// Reasons why [`crate::Polynom::div`] does not produce a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DivisionError {
    #[error("Division only supported by constant polynomials")]
    DivisionByNonConstant,
    #[error("Division by zero")]
    DivisionByZero,
}

/// A failure tied to the source line that was being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("[ERR] Line {line}: {error}")]
pub struct Diagnostic {
    pub line: u32,
    #[source]
    pub error: DivisionError,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected {found:?} at offset {offset}")]
    Unexpected { found: char, offset: usize },
    #[error("missing term at offset {0}")]
    MissingTerm(usize),
    #[error("coefficient {0} is out of range")]
    CoefOutOfRange(String),
    #[error("exponent {0} is out of range")]
    ExponentOutOfRange(String),
    #[error("{0:?} is not a variable")]
    NotAVariable(char),
}
