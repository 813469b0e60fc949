//! SQL tokenizer and token classification.
//!
//! This module produces the flat, kind-tagged token stream the grouping
//! engine consumes. The tokenizer is total: every input string tokenizes,
//! unknown characters become [`TokenKind::Error`] tokens, and concatenating
//! the token values reproduces the input exactly.

pub mod keywords;
mod token;
mod tokenizer;

pub use token::{CommentKind, KeywordKind, NumberKind, StringKind, Token, TokenKind};
pub use tokenizer::tokenize;
