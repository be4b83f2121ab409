//! Scanner module.
//!
//! The scanner is split by recognizer:
//! - `core` - Scanner struct, separator skipping and ordered dispatch
//! - `operator` - single-character symbols and relational/equality operators
//! - `comment` - division and line comments
//! - `string` - string literals
//! - `number` - numeric literals
//! - `identifier` - identifiers and reserved words

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::Scanner;
