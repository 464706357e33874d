use crate::{
    ast::{
        ast::StmtWrapper,
        expressions::Identifier,
        statements::{ExpressionStatement, LetStatement, ReturnStatement},
    },
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::parser::Parser;

/// Dispatches on the current token. Only `let` and `return` have dedicated
/// routines; anything else is parsed as an expression statement.
pub fn parse_stmt(parser: &mut Parser) -> Option<StmtWrapper> {
    match parser.current_token_kind() {
        TokenKind::Let => parse_let_stmt(parser),
        TokenKind::Return => parse_return_stmt(parser),
        _ => parse_expression_stmt(parser),
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Option<StmtWrapper> {
    let start_token = parser.current_token().clone();

    if !parser.expect_lookahead(TokenKind::Identifier) {
        return None;
    }

    let name_token = parser.current_token().clone();
    let name = Identifier {
        value: name_token.value.clone(),
        token: name_token,
    };

    if !parser.expect_lookahead(TokenKind::Assign) {
        return None;
    }

    // TODO: parse the bound expression instead of skipping it
    skip_to_semicolon(parser);

    Some(StmtWrapper::new(LetStatement {
        span: Span {
            start: start_token.span.start.clone(),
            end: parser.current_token().span.end.clone(),
        },
        token: start_token,
        name,
        value: None,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Option<StmtWrapper> {
    let start_token = parser.current_token().clone();
    parser.advance();

    // TODO: parse the returned expression instead of skipping it
    skip_to_semicolon(parser);

    Some(StmtWrapper::new(ReturnStatement {
        span: Span {
            start: start_token.span.start.clone(),
            end: parser.current_token().span.end.clone(),
        },
        token: start_token,
        value: None,
    }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Option<StmtWrapper> {
    let start_token = parser.current_token().clone();

    let expression = parse_expr(parser, BindingPower::Lowest);

    // The terminator is optional
    if parser.lookahead_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Some(StmtWrapper::new(ExpressionStatement {
        span: Span {
            start: start_token.span.start.clone(),
            end: parser.current_token().span.end.clone(),
        },
        token: start_token,
        expression,
    }))
}

/// Moves the cursor onto the next `;`, or onto `EOF` if the statement is
/// never terminated.
fn skip_to_semicolon(parser: &mut Parser) {
    while parser.current_token_kind() != TokenKind::Semicolon
        && parser.current_token_kind() != TokenKind::EOF
    {
        parser.advance();
    }
}
