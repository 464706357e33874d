//! Integration tests for the front end.
//!
//! These tests drive the public API end to end: source text goes through the
//! lexer as a `TokenSource`, into the parser, and the resulting program and
//! diagnostics are checked together.

use monkey_parser::{
    ast::{
        ast::{Stmt, StmtType},
        expressions::{InfixExpression, IntegerLiteral, PrefixExpression},
        statements::{ExpressionStatement, LetStatement},
    },
    display_error,
    lexer::{
        lexer::{tokenize, Lexer},
        source::TokenStream,
        tokens::{Token, TokenKind},
    },
    parser::parser::{parse, Parser},
};

#[test]
fn test_parse_let_from_lexer() {
    let mut parser = Parser::new(Lexer::new("let x = 5;".to_string(), None));
    let program = parser.parse_program();

    assert!(parser.errors().is_empty());
    assert_eq!(program.len(), 1);

    let stmt = program.statements[0].downcast_ref::<LetStatement>().unwrap();
    assert_eq!(stmt.name.value, "x");
    assert_eq!(program.to_string(), "let x = ;");
}

#[test]
fn test_missing_assign_example() {
    let mut parser = Parser::new(Lexer::new("let x 5;".to_string(), None));
    let program = parser.parse_program();

    assert_eq!(
        parser.errors().messages(),
        vec!["expected next token to be ASSIGN, got INT instead"]
    );
    assert!(program
        .iter()
        .all(|stmt| stmt.get_stmt_type() != StmtType::LetStatement));
}

#[test]
fn test_parse_hand_built_tokens() {
    // -a * b
    let tokens = vec![
        Token::synthetic(TokenKind::Minus, "-"),
        Token::synthetic(TokenKind::Identifier, "a"),
        Token::synthetic(TokenKind::Asterisk, "*"),
        Token::synthetic(TokenKind::Identifier, "b"),
        Token::synthetic(TokenKind::EOF, ""),
    ];

    let (parser, program) = parse(tokens);

    assert!(parser.errors().is_empty());

    let stmt = program.statements[0]
        .downcast_ref::<ExpressionStatement>()
        .unwrap();
    let infix = stmt
        .expression
        .as_ref()
        .unwrap()
        .downcast_ref::<InfixExpression>()
        .unwrap();

    assert_eq!(infix.operator, "*");
    assert!(infix
        .left
        .as_ref()
        .unwrap()
        .downcast_ref::<PrefixExpression>()
        .is_some());
}

#[test]
fn test_overflowing_literal_token() {
    let (parser, program) = parse(vec![Token::synthetic(
        TokenKind::Int,
        "99999999999999999999",
    )]);

    assert_eq!(
        parser.errors().messages(),
        vec!["could not parse \"99999999999999999999\" as integer"]
    );

    let stmt = program.statements[0]
        .downcast_ref::<ExpressionStatement>()
        .unwrap();
    assert!(stmt.expression.is_none());
}

#[test]
fn test_literal_round_trip() {
    let (parser, program) = parse(vec![Token::synthetic(TokenKind::Int, "5")]);

    assert!(parser.errors().is_empty());

    let stmt = program.statements[0]
        .downcast_ref::<ExpressionStatement>()
        .unwrap();
    let literal = stmt
        .expression
        .as_ref()
        .unwrap()
        .downcast_ref::<IntegerLiteral>()
        .unwrap();
    assert_eq!(literal.value, 5);
}

#[test]
fn test_empty_token_stream() {
    let mut parser = Parser::new(TokenStream::new(vec![]));
    let program = parser.parse_program();

    assert!(program.is_empty());
    assert!(parser.errors().is_empty());
}

#[test]
fn test_mixed_program_collects_every_diagnostic() {
    let source = "\
let a = 1;
let = 2;
a + b * c;
return a;
let d 4;
-;
";
    let (parser, program) = parse(tokenize(source.to_string(), Some("mixed.monkey".to_string())));

    assert_eq!(
        parser.errors().messages(),
        vec![
            "expected next token to be IDENT, got ASSIGN instead",
            "no prefix parse function for ASSIGN found",
            "expected next token to be ASSIGN, got INT instead",
            "no prefix parse function for SEMICOLON found",
        ]
    );

    let lines: Vec<String> = program.iter().map(|stmt| stmt.to_string()).collect();
    assert_eq!(
        lines,
        vec![
            "let a = ;",
            "",
            "2",
            "(a + (b * c))",
            "return ;",
            "4",
            "(-)",
        ]
    );
}

#[test]
fn test_render_diagnostic_against_source() {
    let source = "let a = 1;\n  let b 2;\n";
    let (parser, _) = parse(tokenize(source.to_string(), Some("render.monkey".to_string())));

    let error = parser.errors().iter().next().unwrap();
    let rendered = display_error(error, source);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(
        lines[0],
        "Error: expected next token to be ASSIGN, got INT instead (expected `=` after the bound name)"
    );
    assert_eq!(lines[1], "-> render.monkey");
    assert_eq!(lines[2], "  |");
    assert_eq!(lines[3], "2 | let b 2;");
    assert_eq!(lines[4], "  | ------^");
}
