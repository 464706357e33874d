use tracing::trace;

use crate::{
    ast::{
        ast::{Expr, ExprWrapper},
        expressions::{Identifier, InfixExpression, IntegerLiteral, PrefixExpression},
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Option<ExprWrapper> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    trace!(token = %token_kind, ?bp, "parse_expr");

    let Some(nud) = parser.get_nud(token_kind) else {
        let position = parser.get_position();
        parser.record(ErrorImpl::NoPrefixParseFn { kind: token_kind }, position);
        return None;
    };

    let mut left = nud(parser);

    // While the lookahead binds tighter than `bp`, fold it into the lhs
    while parser.lookahead_token_kind() != TokenKind::Semicolon
        && bp < parser.lookahead_binding_power()
    {
        let Some(led) = parser.get_led(parser.lookahead_token_kind()) else {
            return left;
        };

        parser.advance();
        left = led(parser, left);
    }

    left
}

pub fn parse_identifier(parser: &mut Parser) -> Option<ExprWrapper> {
    let token = parser.current_token().clone();

    Some(ExprWrapper::new(Identifier {
        value: token.value.clone(),
        token,
    }))
}

pub fn parse_integer_literal(parser: &mut Parser) -> Option<ExprWrapper> {
    let token = parser.current_token().clone();

    match parse_integer(&token.value) {
        Some(value) => Some(ExprWrapper::new(IntegerLiteral { token, value })),
        None => {
            parser.record(
                ErrorImpl::IntegerParseError {
                    literal: token.value,
                },
                token.span.start,
            );
            None
        }
    }
}

/// Converts integer literal text to an `i64`.
///
/// Decimal by default. A `0x`, `0o` or `0b` prefix selects hex, octal or
/// binary, and a bare leading `0` means octal. An optional sign is accepted.
pub fn parse_integer(text: &str) -> Option<i64> {
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let (radix, digits) = match unsigned.get(..2) {
        Some("0x") | Some("0X") => (16, &unsigned[2..]),
        Some("0o") | Some("0O") => (8, &unsigned[2..]),
        Some("0b") | Some("0B") => (2, &unsigned[2..]),
        _ if unsigned.len() > 1 && unsigned.starts_with('0') => (8, &unsigned[1..]),
        _ => (10, unsigned),
    };

    // from_str_radix would accept a second sign here
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }

    if negative {
        i64::from_str_radix(&format!("-{}", digits), radix).ok()
    } else {
        i64::from_str_radix(digits, radix).ok()
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<ExprWrapper> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, BindingPower::Prefix);

    let end = match &right {
        Some(right) => right.get_span().end.clone(),
        None => operator_token.span.end.clone(),
    };

    Some(ExprWrapper::new(PrefixExpression {
        span: Span {
            start: operator_token.span.start.clone(),
            end,
        },
        operator: operator_token.value.clone(),
        token: operator_token,
        right,
    }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: Option<ExprWrapper>) -> Option<ExprWrapper> {
    let operator_token = parser.current_token().clone();
    let bp = parser.current_binding_power();
    parser.advance();

    // Same-level operators fail the strict comparison in the nested call,
    // which makes chains left-associative.
    let right = parse_expr(parser, bp);

    let start = match &left {
        Some(left) => left.get_span().start.clone(),
        None => operator_token.span.start.clone(),
    };
    let end = match &right {
        Some(right) => right.get_span().end.clone(),
        None => operator_token.span.end.clone(),
    };

    Some(ExprWrapper::new(InfixExpression {
        span: Span { start, end },
        left,
        operator: operator_token.value.clone(),
        token: operator_token,
        right,
    }))
}
