use std::{
    any::Any,
    fmt::{Debug, Display},
    slice::Iter,
};

use crate::Span;

/// Statement Types
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum StmtType {
    LetStatement,
    ReturnStatement,
    ExpressionStatement,
}

/// Statement Trait
///
/// Defines the behavior of all statement types in the AST.
pub trait Stmt: Debug + Display {
    /// Returns the type of the statement.
    fn get_stmt_type(&self) -> StmtType;
    /// Type conversion purposes - used with `.downcast_ref<T>()`
    fn as_any(&self) -> &dyn Any;
    /// Clones the statement into a StmtWrapper.
    /// Clone cannot be derived for trait objects, so this method is necessary.
    fn clone_wrapper(&self) -> StmtWrapper;
    /// Returns the span of the statement.
    fn get_span(&self) -> &Span;
    /// Returns the literal text of the token the statement starts with.
    fn token_literal(&self) -> &str;
}

/// Statement Wrapper
///
/// A wrapper that allows for any statement kind to be stored with helper methods
#[derive(Debug)]
pub struct StmtWrapper(Box<dyn Stmt>);

impl StmtWrapper {
    pub fn new<T: Stmt + 'static>(stmt: T) -> Self {
        StmtWrapper(Box::new(stmt))
    }

    /// Shorthand for `as_any().downcast_ref::<T>()`.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }
}

impl Stmt for StmtWrapper {
    fn get_stmt_type(&self) -> StmtType {
        self.0.get_stmt_type()
    }
    fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        self.0.clone_wrapper()
    }
    fn get_span(&self) -> &Span {
        self.0.get_span()
    }
    fn token_literal(&self) -> &str {
        self.0.token_literal()
    }
}

impl Clone for StmtWrapper {
    fn clone(&self) -> Self {
        self.clone_wrapper()
    }
}

impl Display for StmtWrapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Expression Types
///
/// Defines the various kinds of expressions in the AST.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum ExprType {
    Identifier,
    IntegerLiteral,
    Prefix,
    Infix,
}

pub trait Expr: Debug + Display {
    /// Returns the expression type of the expression.
    fn get_expr_type(&self) -> ExprType;
    /// Type conversion purposes - used with `.downcast_ref<T>()`
    fn as_any(&self) -> &dyn Any;
    /// Clones the expression into an ExprWrapper.
    /// Clone cannot be derived for trait objects, so this method is necessary.
    fn clone_wrapper(&self) -> ExprWrapper;
    /// Returns the span of the expression.
    fn get_span(&self) -> &Span;
    /// Returns the literal text of the expression's head token.
    fn token_literal(&self) -> &str;
}

/// Expression Wrapper
///
/// A wrapper that allows for any expression kind to be stored with helper methods
#[derive(Debug)]
pub struct ExprWrapper(Box<dyn Expr>);

impl ExprWrapper {
    pub fn new<T: Expr + 'static>(expression: T) -> Self {
        ExprWrapper(Box::new(expression))
    }

    /// Shorthand for `as_any().downcast_ref::<T>()`.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }
}

impl Expr for ExprWrapper {
    fn get_expr_type(&self) -> ExprType {
        self.0.get_expr_type()
    }
    fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        self.0.clone_wrapper()
    }
    fn get_span(&self) -> &Span {
        self.0.get_span()
    }
    fn token_literal(&self) -> &str {
        self.0.token_literal()
    }
}

impl Clone for ExprWrapper {
    fn clone(&self) -> Self {
        self.clone_wrapper()
    }
}

impl Display for ExprWrapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Writes an optional child, leaving nothing behind when it is absent.
pub(crate) fn fmt_optional<T: Display>(
    f: &mut std::fmt::Formatter<'_>,
    node: &Option<T>,
) -> std::fmt::Result {
    match node {
        Some(node) => write!(f, "{}", node),
        None => Ok(()),
    }
}

/// Program
///
/// Root of the tree. Statements are kept in source order.
#[derive(Debug, Clone)]
pub struct Program {
    pub statements: Vec<StmtWrapper>,
    pub span: Span,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, StmtWrapper> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn token_literal(&self) -> &str {
        match self.statements.first() {
            Some(stmt) => stmt.token_literal(),
            None => "",
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
