//! Error-tolerant lexical scanner for the jlox scripting language.
//!
//! Converts raw source text into typed tokens with byte-offset positions,
//! collecting lexical errors as values instead of failing fast: a buffer
//! with errors still yields every token that could be recognized, which is
//! what a REPL or editor wants.
//!
//! # Quick start
//!
//! ```
//! use jlox_rs::{TokenKind, tokenize};
//!
//! let out = tokenize("var x = 1.5e3; // trailing comment");
//! assert!(out.errors.is_empty());
//! let kinds: Vec<_> = out.tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Var,
//!         TokenKind::Identifier,
//!         TokenKind::Eq,
//!         TokenKind::Number,
//!         TokenKind::Semicolon,
//!     ]
//! );
//! ```
//!
//! ## Scanning with errors
//!
//! ```
//! use jlox_rs::tokenize;
//!
//! let out = tokenize("x @ y");
//! assert_eq!(out.tokens.len(), 2); // both identifiers survive
//! assert_eq!(out.errors.len(), 1);
//! assert_eq!(out.errors[0].kind.code(), 10); // unknown symbol
//! ```
//!
//! Each per-construct matcher (`match_symbol`, `match_number`, …) is a pure
//! function of `(content, start)` and is exported for isolated testing.

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod error;
pub mod scanner;
pub mod token;

pub use error::{ScanError, ScanErrorKind};
pub use scanner::{
    MatchResult, ScanOutput, match_comment, match_exponent, match_identifier, match_number,
    match_string, match_symbol, tokenize,
};
pub use token::{ESCAPES, KEYWORDS, Literal, PREFIXES, SYMBOLS, Token, TokenKind};
