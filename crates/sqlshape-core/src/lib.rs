//! # sqlshape-core
//!
//! A non-validating, best-effort structural grouper for SQL.
//!
//! This crate turns a flat stream of classified lexical tokens into a nested
//! token tree that exposes SQL-meaningful structure: parenthesized
//! expressions, bracketed subscripts, function calls, dotted and aliased
//! identifiers, comma-separated lists, comparisons, assignments,
//! CASE/IF/FOR/BEGIN blocks, WHERE clauses, and comment attachments. It does
//! *not* validate the input against any SQL dialect: syntactically broken or
//! dialect-exotic input still produces a reasonable tree instead of an error.
//!
//! The tree is rewritten in place by a fixed pipeline of grouping passes
//! (see [`engine::group`]). Every pass only splices contiguous sibling runs
//! into new groups, so concatenating the leaf tokens of the tree reproduces
//! the original text at any point in the pipeline.
//!
//! ```rust
//! use sqlshape_core::{parse, GroupKind};
//!
//! let tree = parse("SELECT a, b FROM t WHERE x = 1");
//!
//! // Grouping is lossless: the tree renders back to the input.
//! assert_eq!(tree.to_string(), "SELECT a, b FROM t WHERE x = 1");
//!
//! // The WHERE clause became a single group.
//! assert!(tree
//!     .children()
//!     .iter()
//!     .any(|child| child.is_group(GroupKind::Where)));
//! ```

pub mod engine;
pub mod lexer;
pub mod tree;

pub use engine::group;
pub use lexer::{tokenize, Token, TokenKind};
pub use tree::{Group, GroupKind, TokenTree};

/// Tokenizes `sql` and runs the full grouping pipeline over the result.
///
/// This is the convenience entry point joining the two halves of the crate:
/// the tokenizer produces the flat token stream, and the engine rewrites it
/// into a structured tree. It never fails; malformed input degrades to a
/// flatter tree rather than an error.
#[must_use]
pub fn parse(sql: &str) -> Group {
    let mut root = Group::from_tokens(lexer::tokenize(sql));
    engine::group(&mut root);
    root
}
