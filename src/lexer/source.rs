use std::vec::IntoIter;

use crate::Span;

use super::{
    lexer::Lexer,
    tokens::{Token, TokenKind},
};

/// A pull-based supplier of tokens.
///
/// `next_token` must never fail. Running out of input is signalled with an
/// `EOF` token, which keeps coming back on every later call.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

impl TokenSource for Lexer {
    fn next_token(&mut self) -> Token {
        Lexer::next_token(self)
    }
}

/// Replays a prebuilt token vector, then yields `EOF` forever.
#[derive(Debug)]
pub struct TokenStream {
    tokens: IntoIter<Token>,
    eof: Token,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        let eof = match tokens.last() {
            Some(token) if token.is(TokenKind::EOF) => token.clone(),
            Some(token) => Token {
                kind: TokenKind::EOF,
                value: String::from("EOF"),
                span: Span {
                    start: token.span.end.clone(),
                    end: token.span.end.clone(),
                },
            },
            None => Token::synthetic(TokenKind::EOF, "EOF"),
        };

        TokenStream {
            tokens: tokens.into_iter(),
            eof,
        }
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Token {
        self.tokens.next().unwrap_or_else(|| self.eof.clone())
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        TokenStream::new(tokens)
    }
}
