use std::{fmt::Display, slice::Iter};

use thiserror::Error;
use tracing::debug;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NoPrefixParseFn { .. } => "NoPrefixParseFn",
            ErrorImpl::IntegerParseError { .. } => "IntegerParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::Semicolon,
                ..
            } => ErrorTip::Suggestion(String::from("did you miss a semicolon?")),
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::Assign,
                ..
            } => ErrorTip::Suggestion(String::from("expected `=` after the bound name")),
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::Identifier,
                ..
            } => ErrorTip::Suggestion(String::from("expected a name to bind")),
            ErrorImpl::UnexpectedToken { .. } => ErrorTip::None,
            ErrorImpl::NoPrefixParseFn { kind } => ErrorTip::Suggestion(format!(
                "`{}` cannot start an expression",
                kind
            )),
            ErrorImpl::IntegerParseError { .. } => {
                ErrorTip::Suggestion(String::from("is it above the integer limit?"))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    /// An expected token kind was not found in the lookahead slot.
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    /// No prefix handler is registered for a token that should start an expression.
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn { kind: TokenKind },
    /// A token classified as a number does not fit in an `i64`.
    #[error("could not parse {literal:?} as integer")]
    IntegerParseError { literal: String },
}

/// Ordered, append-only collection of parse diagnostics.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    errors: Vec<Error>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics { errors: vec![] }
    }

    pub fn push(&mut self, error: Error) {
        debug!(
            name = error.get_error_name(),
            offset = error.get_position().0,
            "{}",
            error
        );
        self.errors.push(error);
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Error> {
        self.errors.iter()
    }

    pub fn as_slice(&self) -> &[Error] {
        &self.errors
    }

    /// The rendered message of every diagnostic, in the order recorded.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Error;
    type IntoIter = Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
