use std::{any::Any, fmt::Display};

use crate::{lexer::tokens::Token, Span};

use super::{
    ast::{fmt_optional, ExprWrapper, Stmt, StmtType, StmtWrapper},
    expressions::Identifier,
};

/// `let <name> = <value>;`
///
/// The bound value is not parsed yet; the parser skips to the terminator and
/// leaves `value` as `None`.
#[derive(Debug, Clone)]
pub struct LetStatement {
    pub token: Token,
    pub name: Identifier,
    pub value: Option<ExprWrapper>,
    pub span: Span,
}

impl Stmt for LetStatement {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::LetStatement
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for LetStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} = ", self.token.value, self.name)?;
        fmt_optional(f, &self.value)?;
        write!(f, ";")
    }
}

/// `return <value>;`
///
/// Like `LetStatement`, the returned value is skipped and left as `None`.
#[derive(Debug, Clone)]
pub struct ReturnStatement {
    pub token: Token,
    pub value: Option<ExprWrapper>,
    pub span: Span,
}

impl Stmt for ReturnStatement {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ReturnStatement
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for ReturnStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ", self.token.value)?;
        fmt_optional(f, &self.value)?;
        write!(f, ";")
    }
}

#[derive(Debug, Clone)]
pub struct ExpressionStatement {
    pub token: Token,
    pub expression: Option<ExprWrapper>,
    pub span: Span,
}

impl Stmt for ExpressionStatement {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ExpressionStatement
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for ExpressionStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt_optional(f, &self.expression)
    }
}
