//! Error types and the diagnostics sink for the parser.
//!
//! Parse errors never abort a parse. Each one is recorded, with the position
//! of the token that caused it, into a `Diagnostics` sink that callers read
//! once parsing is done. This module includes:
//!
//! - Error structures with source position information
//! - One error variant per diagnostic category
//! - Short suggestions shown alongside rendered errors

pub mod errors;
