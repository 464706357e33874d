/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Core AST traits, wrappers and the `Program` root
/// - expressions: Definitions for the expression types
/// - statements: Definitions for the statement types
pub mod ast;
pub mod expressions;
pub mod statements;
