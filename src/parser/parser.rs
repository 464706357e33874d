//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the `Cursor` that holds the two-token window over a
//! token source, and the main `Parser` struct which pairs the cursor with the
//! handler lookups and the diagnostics sink.

use std::mem;

use tracing::{debug, trace};

use crate::{
    ast::ast::Program,
    errors::errors::{Diagnostics, Error, ErrorImpl},
    lexer::{
        source::{TokenSource, TokenStream},
        tokens::{Token, TokenKind},
    },
    Position, Span,
};

use super::{
    lookups::{binding_power, create_token_lookups, BindingPower, LEDHandler, Lookups, NUDHandler},
    stmt::parse_stmt,
};

/// A window of exactly two tokens over a token source: the token being
/// parsed and the one after it.
pub struct Cursor {
    source: Box<dyn TokenSource>,
    current: Token,
    lookahead: Token,
}

impl Cursor {
    /// Primes both slots by pulling two tokens from `source`.
    pub fn new(mut source: Box<dyn TokenSource>) -> Self {
        let current = source.next_token();
        let lookahead = source.next_token();

        Cursor {
            source,
            current,
            lookahead,
        }
    }

    /// Shifts the lookahead into the current slot and pulls a fresh lookahead.
    pub fn advance(&mut self) {
        let next = self.source.next_token();
        self.current = mem::replace(&mut self.lookahead, next);
        trace!(current = %self.current.kind, lookahead = %self.lookahead.kind, "advance");
    }

    pub fn current(&self) -> &Token {
        &self.current
    }

    pub fn lookahead(&self) -> &Token {
        &self.lookahead
    }
}

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Two-token window over the input
    cursor: Cursor,
    /// Prefix and infix handler tables
    lookups: Lookups,
    /// Every diagnostic recorded so far, in order
    errors: Diagnostics,
}

impl Parser {
    /// Creates a parser over `source` with the default handler tables.
    pub fn new<S: TokenSource + 'static>(source: S) -> Self {
        Parser::with_lookups(source, create_token_lookups())
    }

    /// Creates a parser over `source` using the given handler tables.
    pub fn with_lookups<S: TokenSource + 'static>(source: S, lookups: Lookups) -> Self {
        Parser {
            cursor: Cursor::new(Box::new(source)),
            lookups,
            errors: Diagnostics::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.cursor.current()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.cursor.current().kind
    }

    /// Returns the token after the current one.
    pub fn lookahead_token(&self) -> &Token {
        self.cursor.lookahead()
    }

    /// Returns the kind of the token after the current one.
    pub fn lookahead_token_kind(&self) -> TokenKind {
        self.cursor.lookahead().kind
    }

    pub fn advance(&mut self) {
        self.cursor.advance();
    }

    /// Advances if the lookahead has the given kind.
    ///
    /// On a mismatch an `UnexpectedToken` diagnostic is recorded against the
    /// lookahead and the cursor stays where it is.
    pub fn expect_lookahead(&mut self, kind: TokenKind) -> bool {
        if self.lookahead_token_kind() == kind {
            self.advance();
            return true;
        }

        let error = ErrorImpl::UnexpectedToken {
            expected: kind,
            found: self.lookahead_token_kind(),
        };
        let position = self.lookahead_token().span.start.clone();
        self.record(error, position);
        false
    }

    /// Records a diagnostic. Parsing always carries on afterwards.
    pub fn record(&mut self, error: ErrorImpl, position: Position) {
        self.errors.push(Error::new(error, position));
    }

    /// Every diagnostic recorded so far.
    pub fn errors(&self) -> &Diagnostics {
        &self.errors
    }

    pub fn get_nud(&self, kind: TokenKind) -> Option<NUDHandler> {
        self.lookups.get_nud(kind)
    }

    pub fn get_led(&self, kind: TokenKind) -> Option<LEDHandler> {
        self.lookups.get_led(kind)
    }

    pub fn current_binding_power(&self) -> BindingPower {
        binding_power(self.current_token_kind())
    }

    pub fn lookahead_binding_power(&self) -> BindingPower {
        binding_power(self.lookahead_token_kind())
    }

    /// Returns the start position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    /// Parses statements until the current token is `EOF`.
    ///
    /// Never fails: a malformed statement is dropped after its diagnostic is
    /// recorded, and the loop moves on one token at a time. Calling this again
    /// after it returns continues from wherever the cursor stopped.
    pub fn parse_program(&mut self) -> Program {
        let start = self.get_position();
        let mut statements = vec![];

        while self.current_token_kind() != TokenKind::EOF {
            if let Some(stmt) = parse_stmt(self) {
                statements.push(stmt);
            }
            self.advance();
        }

        debug!(
            statements = statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );

        Program {
            statements,
            span: Span {
                start,
                end: self.current_token().span.end.clone(),
            },
        }
    }
}

/// Parses a stream of tokens into a `Program`.
///
/// This is the convenience entry point. It builds a parser over `tokens` and
/// returns it alongside the program, so the caller can read `errors()`.
pub fn parse(tokens: Vec<Token>) -> (Parser, Program) {
    let mut parser = Parser::new(TokenStream::new(tokens));
    let program = parser.parse_program();

    (parser, program)
}
