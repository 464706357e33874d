use std::{any::Any, fmt::Display};

use crate::{lexer::tokens::Token, Span};

use super::ast::{fmt_optional, Expr, ExprType, ExprWrapper};

// LITERALS

/// Identifier
/// A name, kept verbatim from its token.
#[derive(Debug, Clone)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Expr for Identifier {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Identifier
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.token.span
    }
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Integer Literal
/// Represents a 64-bit signed integer in the AST.
#[derive(Debug, Clone)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

impl Expr for IntegerLiteral {
    fn get_expr_type(&self) -> ExprType {
        ExprType::IntegerLiteral
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.token.span
    }
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for IntegerLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token.value)
    }
}

// OPERATORS

/// Prefix Expression
/// A unary operator applied to its operand, e.g. `-a` or `!ok`.
///
/// `right` is absent when the operand failed to parse.
#[derive(Debug, Clone)]
pub struct PrefixExpression {
    pub token: Token,
    pub operator: String,
    pub right: Option<ExprWrapper>,
    pub span: Span,
}

impl Expr for PrefixExpression {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Prefix
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for PrefixExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}", self.operator)?;
        fmt_optional(f, &self.right)?;
        write!(f, ")")
    }
}

/// Infix Expression
/// A binary operator with both operands, e.g. `a * b`.
///
/// Either side may be absent when it failed to parse.
#[derive(Debug, Clone)]
pub struct InfixExpression {
    pub token: Token,
    pub left: Option<ExprWrapper>,
    pub operator: String,
    pub right: Option<ExprWrapper>,
    pub span: Span,
}

impl Expr for InfixExpression {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Infix
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for InfixExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        fmt_optional(f, &self.left)?;
        write!(f, " {} ", self.operator)?;
        fmt_optional(f, &self.right)?;
        write!(f, ")")
    }
}
