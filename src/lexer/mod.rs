//! Lexical analysis module.
//!
//! The parser only ever sees tokens through the `TokenSource` trait. This
//! module provides the token vocabulary and two sources for it:
//!
//! - `Lexer`, a regex-driven scanner that produces tokens on demand
//! - `TokenStream`, which replays a prebuilt token vector
//!
//! Unrecognised characters are reported as `Illegal` tokens rather than
//! errors, leaving the parser to diagnose them.

pub mod lexer;
pub mod source;
pub mod tokens;

#[cfg(test)]
mod tests;
