use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &str) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

// Every pattern is anchored; multi-character operators come before their prefixes.
lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^[0-9]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new(r"^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
        RegexPattern { regex: Regex::new(r"^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
        RegexPattern { regex: Regex::new(r"^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assign, "=") },
        RegexPattern { regex: Regex::new(r"^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Bang, "!") },
        RegexPattern { regex: Regex::new(r"^\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new(r"^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Minus, "-") },
        RegexPattern { regex: Regex::new(r"^\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Asterisk, "*") },
        RegexPattern { regex: Regex::new(r"^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new(r"^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        RegexPattern { regex: Regex::new(r"^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        RegexPattern { regex: Regex::new(r"^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new(r"^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new(r"^\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new(r"^\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new(r"^\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
        RegexPattern { regex: Regex::new(r"^\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
    ];
}

/// Pull-based scanner over the monkey token vocabulary.
///
/// The lexer never fails: characters no pattern recognises come back as
/// `Illegal` tokens, and once the input is exhausted every call yields `EOF`.
#[derive(Clone, Debug)]
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Span covering the next `len` bytes from the current position.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: Position(self.pos as u32, Rc::clone(&self.file)),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    pub fn next_token(&mut self) -> Token {
        loop {
            if self.at_eof() {
                return MK_TOKEN!(TokenKind::EOF, String::from("EOF"), self.span_of(0));
            }

            let matched = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(self.remainder())
                    .map(|m| (pattern.handler, m.as_str().to_string()))
            });

            match matched {
                Some((handler, text)) => {
                    if let Some(token) = handler(self, &text) {
                        return token;
                    }
                }
                None => return illegal_handler(self),
            }
        }
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    lexer.advance_n(matched.len());
    None
}

fn number_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    let span = lexer.span_of(matched.len());
    lexer.advance_n(matched.len());

    Some(MK_TOKEN!(TokenKind::Int, String::from(matched), span))
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    let span = lexer.span_of(matched.len());
    lexer.advance_n(matched.len());

    let kind = RESERVED_LOOKUP
        .get(matched)
        .copied()
        .unwrap_or(TokenKind::Identifier);

    Some(MK_TOKEN!(kind, String::from(matched), span))
}

fn illegal_handler(lexer: &mut Lexer) -> Token {
    let ch = lexer.remainder().chars().next().unwrap_or_default();
    let span = lexer.span_of(ch.len_utf8());
    trace!(offset = lexer.pos, character = %ch, "unrecognised character");
    lexer.advance_n(ch.len_utf8());

    MK_TOKEN!(TokenKind::Illegal, ch.to_string(), span)
}

/// Scans the whole of `source`, returning every token up to and including
/// the final `EOF`.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.is(TokenKind::EOF);
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
