//! Token kinds and the token type for the grouping engine.
//!
//! A token is created once by the tokenizer and never mutated afterwards;
//! the grouping passes only move tokens between groups.

use std::fmt;

/// Comment flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    /// `-- ...` or `# ...` through the end of the line.
    Line,
    /// `/* ... */`.
    Multiline,
}

/// Keyword class, as assigned by the classification table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordKind {
    /// A reserved word without a more specific class.
    Plain,
    /// Data manipulation verbs (SELECT, INSERT, UPDATE, ...).
    Dml,
    /// Data definition verbs (CREATE, DROP, ALTER, ...).
    Ddl,
    /// Ordering directions (ASC, DESC).
    Order,
}

/// String literal flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringKind {
    /// Single-quoted string literal.
    Single,
    /// Double-quoted symbol (quoted identifier).
    Symbol,
}

/// Numeric literal flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Integer,
    Float,
}

/// The kind of token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Spaces, tabs, or newlines.
    Whitespace,
    /// A comment.
    Comment(CommentKind),
    /// A classified keyword.
    Keyword(KeywordKind),
    /// An unquoted identifier or builtin type name.
    Name,
    /// A bind parameter (`?`, `:name`, `$name`, `%(name)s`).
    Placeholder,
    /// A string literal or quoted identifier.
    String(StringKind),
    /// A numeric literal.
    Number(NumberKind),
    /// A non-comparison operator (`+`, `-`, `||`, ...).
    Operator,
    /// A comparison operator (`=`, `<`, `>=`, `!=`, ...).
    Comparison,
    /// The assignment operator `:=`.
    Assignment,
    /// Punctuation (`(`, `)`, `,`, `;`, `.`, `::`, ...).
    Punctuation,
    /// The `*` wildcard.
    Wildcard,
    /// A character the tokenizer could not classify.
    Error,
}

impl TokenKind {
    /// Returns true for whitespace tokens.
    #[must_use]
    pub const fn is_whitespace(self) -> bool {
        matches!(self, Self::Whitespace)
    }

    /// Returns true for comments of any flavor.
    #[must_use]
    pub const fn is_comment(self) -> bool {
        matches!(self, Self::Comment(_))
    }

    /// Returns true for keywords of any class.
    #[must_use]
    pub const fn is_keyword(self) -> bool {
        matches!(self, Self::Keyword(_))
    }

    /// Returns true for string and number literals.
    #[must_use]
    pub const fn is_literal(self) -> bool {
        matches!(self, Self::String(_) | Self::Number(_))
    }
}

/// An atomic lexical unit: a kind tag plus the exact source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The literal source text.
    pub value: String,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Returns true for whitespace tokens.
    #[must_use]
    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }

    /// Returns true if this is punctuation with exactly the given text.
    #[must_use]
    pub fn is_punct(&self, value: &str) -> bool {
        self.kind == TokenKind::Punctuation && self.value == value
    }

    /// Returns true if this is a keyword (of any class) whose text equals
    /// `value`, ignoring ASCII case.
    #[must_use]
    pub fn is_keyword(&self, value: &str) -> bool {
        self.kind.is_keyword() && self.value.eq_ignore_ascii_case(value)
    }

    /// Returns true if this is a keyword whose text equals one of `values`,
    /// ignoring ASCII case.
    #[must_use]
    pub fn is_keyword_among(&self, values: &[&str]) -> bool {
        self.kind.is_keyword() && values.iter().any(|v| self.value.eq_ignore_ascii_case(v))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
