#![allow(clippy::module_inception)]

use std::{fmt::Write, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn null() -> Self {
        Span {
            start: Position::null(),
            end: Position::null(),
        }
    }
}

/// Finds the line containing the byte offset `position`.
///
/// Returns the 1-based line number, the full line text (including its newline
/// if present) and the offset of `position` within that line. Offsets at or
/// past the end of the source resolve to the last line, which is where the
/// EOF token points.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if source.is_empty() || pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;
    let mut last = None;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        last = Some((line_number, line.to_string(), pos - start));
        start = end;
        line_number += 1;
    }

    last
}

/// Renders a diagnostic with a caret pointing into the offending line.
///
/// ```text
/// Error: UnexpectedToken (expected `=` after the bound name)
/// -> main.monkey
///   |
/// 1 | let x 5;
///   | ------^
/// ```
pub fn display_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error);
    } else {
        let _ = writeln!(out, "Error: {} ({})", error, error.get_tip());
    }
    let _ = writeln!(out, "-> {}", position.1);

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();

    (String::from(&string[start..]), start)
}
