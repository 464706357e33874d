//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - Operators and punctuation
//! - Illegal characters
//! - The `TokenSource` contract (EOF repeats forever)

use super::{
    lexer::{tokenize, Lexer},
    source::{TokenSource, TokenStream},
    tokens::{Token, TokenKind},
};

#[test]
fn test_tokenize_keywords() {
    let source = "fn let true false if else return".to_string();
    let tokens = tokenize(source, Some("test.monkey".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Function);
    assert_eq!(tokens[1].kind, TokenKind::Let);
    assert_eq!(tokens[2].kind, TokenKind::True);
    assert_eq!(tokens[3].kind, TokenKind::False);
    assert_eq!(tokens[4].kind, TokenKind::If);
    assert_eq!(tokens[5].kind, TokenKind::Else);
    assert_eq!(tokens[6].kind, TokenKind::Return);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore letter".to_string();
    let tokens = tokenize(source, Some("test.monkey".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "bar");
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].value, "_underscore");
    // Keywords only match whole words.
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "letter");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_integers() {
    let source = "42 0 9223372036854775808".to_string();
    let tokens = tokenize(source, Some("test.monkey".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Int);
    assert_eq!(tokens[1].value, "0");
    // Range checking is the parser's job.
    assert_eq!(tokens[2].kind, TokenKind::Int);
    assert_eq!(tokens[2].value, "9223372036854775808");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    let source = "= + - ! * / < > == !=".to_string();
    let tokens = tokenize(source, Some("test.monkey".to_string()));

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Assign,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Bang,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_compound_operators_without_spaces() {
    let source = "a==b!=!c".to_string();
    let tokens = tokenize(source, Some("test.monkey".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Equals);
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].kind, TokenKind::NotEquals);
    assert_eq!(tokens[4].kind, TokenKind::Bang);
    assert_eq!(tokens[5].kind, TokenKind::Identifier);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_punctuation() {
    let source = ", ; ( ) { }".to_string();
    let tokens = tokenize(source, Some("test.monkey".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Comma);
    assert_eq!(tokens[1].kind, TokenKind::Semicolon);
    assert_eq!(tokens[2].kind, TokenKind::OpenParen);
    assert_eq!(tokens[3].kind, TokenKind::CloseParen);
    assert_eq!(tokens[4].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[5].kind, TokenKind::CloseCurly);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_let_statement_spans() {
    let source = "let five = 5;".to_string();
    let tokens = tokenize(source, Some("test.monkey".to_string()));

    assert_eq!(tokens.len(), 6);
    assert_eq!(tokens[1].value, "five");
    assert_eq!(tokens[1].span.start.0, 4);
    assert_eq!(tokens[1].span.end.0, 8);
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[4].span.start.0, 12);
    assert_eq!(*tokens[4].span.start.1, "test.monkey");
    assert_eq!(tokens[5].span.start.0, 13);
}

#[test]
fn test_tokenize_illegal_characters() {
    let source = "let x = @ é;".to_string();
    let tokens = tokenize(source, None);

    assert_eq!(tokens[3].kind, TokenKind::Illegal);
    assert_eq!(tokens[3].value, "@");
    assert_eq!(tokens[4].kind, TokenKind::Illegal);
    assert_eq!(tokens[4].value, "é");
    assert_eq!(tokens[5].kind, TokenKind::Semicolon);
    assert_eq!(*tokens[5].span.start.1, "shell");
}

#[test]
fn test_tokenize_whitespace_handling() {
    let source = "  let   \n\t x\r\n=  5  ".to_string();
    let tokens = tokenize(source, None);

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Int,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = tokenize(String::new(), None);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_lexer_repeats_eof() {
    let mut lexer = Lexer::new("x".to_string(), None);

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    }
}

#[test]
fn test_token_stream_pads_with_eof() {
    let mut stream = TokenStream::new(vec![
        Token::synthetic(TokenKind::Identifier, "a"),
        Token::synthetic(TokenKind::Semicolon, ";"),
    ]);

    assert_eq!(stream.next_token().value, "a");
    assert_eq!(stream.next_token().kind, TokenKind::Semicolon);
    assert_eq!(stream.next_token().kind, TokenKind::EOF);
    assert_eq!(stream.next_token().kind, TokenKind::EOF);

    let mut empty = TokenStream::new(vec![]);
    assert_eq!(empty.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_token_kind_display_names() {
    assert_eq!(TokenKind::Assign.to_string(), "ASSIGN");
    assert_eq!(TokenKind::Int.to_string(), "INT");
    assert_eq!(TokenKind::Identifier.to_string(), "IDENT");
    assert_eq!(TokenKind::NotEquals.to_string(), "NOT_EQ");
    assert_eq!(TokenKind::EOF.to_string(), "EOF");
}
