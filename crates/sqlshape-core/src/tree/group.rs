//! Groups and token trees.
//!
//! A [`Group`] is an ordered list of children, each either a leaf [`Token`]
//! or a nested [`Group`]. The grouping passes rewrite a group in place using
//! two splice operations: [`Group::wrap`] replaces a contiguous run of
//! children with one new group holding that run, and [`Group::absorb`] moves
//! a run into the end of a preceding child group. Neither operation deletes,
//! duplicates, or reorders tokens, so the leaf text of the tree is invariant
//! across the whole pipeline.

use std::fmt;

use crate::lexer::{CommentKind, Token, TokenKind};

/// Structural role of a group. A pass never re-groups a region whose
/// enclosing group already carries the kind that pass produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    /// No specific role; the root of a parsed stream is generic.
    Generic,
    /// `( ... )`
    Parenthesis,
    /// `[ ... ]`
    SquareBrackets,
    /// A name directly followed by a parenthesis group.
    Function,
    /// A dotted/bracketed/aliased identifier reference.
    Identifier,
    /// A comma-separated list of identifiers.
    IdentifierList,
    /// `left <op> right` for a comparison operator.
    Comparison,
    /// `left := right`.
    Assignment,
    /// `WHERE ...` through its terminator.
    Where,
    /// `CASE ... END`
    Case,
    /// `IF ... END IF`
    If,
    /// `FOR ... END LOOP` (also `FOREACH`).
    For,
    /// `BEGIN ... END`
    Begin,
    /// A contiguous run of comments.
    Comment,
}

/// One child of a group: a leaf token or a nested group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenTree {
    Token(Token),
    Group(Group),
}

impl TokenTree {
    /// The leaf token, if this child is one.
    #[must_use]
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Self::Token(token) => Some(token),
            Self::Group(_) => None,
        }
    }

    /// The nested group, if this child is one.
    #[must_use]
    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Self::Token(_) => None,
            Self::Group(group) => Some(group),
        }
    }

    /// The kind of the leaf token, if this child is one.
    #[must_use]
    pub fn token_kind(&self) -> Option<TokenKind> {
        self.as_token().map(|t| t.kind)
    }

    /// The kind of the nested group, if this child is one.
    #[must_use]
    pub fn group_kind(&self) -> Option<GroupKind> {
        self.as_group().map(|g| g.kind)
    }

    /// Returns true if this child is a group of the given kind.
    #[must_use]
    pub fn is_group(&self, kind: GroupKind) -> bool {
        self.group_kind() == Some(kind)
    }

    /// Returns true if this child is a whitespace token.
    #[must_use]
    pub fn is_whitespace(&self) -> bool {
        self.as_token().is_some_and(Token::is_whitespace)
    }

    /// The concatenated text of all leaf tokens under this child.
    #[must_use]
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TokenTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(token) => token.fmt(f),
            Self::Group(group) => group.fmt(f),
        }
    }
}

/// An ordered, mutable list of tokens and nested groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// The structural role of this group.
    pub kind: GroupKind,
    children: Vec<TokenTree>,
}

impl Group {
    /// Creates an empty group.
    #[must_use]
    pub fn new(kind: GroupKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    /// Wraps a flat token stream into a generic root group.
    #[must_use]
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self {
            kind: GroupKind::Generic,
            children: tokens.into_iter().map(TokenTree::Token).collect(),
        }
    }

    /// The children of this group, in source order.
    #[must_use]
    pub fn children(&self) -> &[TokenTree] {
        &self.children
    }

    /// The number of direct children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if the group has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The child at `idx`, if any.
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&TokenTree> {
        self.children.get(idx)
    }

    pub(crate) fn get_mut(&mut self, idx: usize) -> Option<&mut TokenTree> {
        self.children.get_mut(idx)
    }

    /// The index of the first child at or after `from` satisfying `pred`.
    pub fn find_from(&self, from: usize, pred: impl Fn(&TokenTree) -> bool) -> Option<usize> {
        self.children
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, child)| pred(child))
            .map(|(idx, _)| idx)
    }

    /// The index of the nearest non-whitespace child after `idx`.
    #[must_use]
    pub fn next_nonws(&self, idx: usize) -> Option<usize> {
        self.find_from(idx + 1, |child| !child.is_whitespace())
    }

    /// The index of the nearest non-whitespace child before `idx`.
    #[must_use]
    pub fn prev_nonws(&self, idx: usize) -> Option<usize> {
        self.children[..idx]
            .iter()
            .rposition(|child| !child.is_whitespace())
    }

    /// Splices `children[start..=end]` into a single new group of `kind`
    /// inserted at `start`. Returns the index of the new group (`start`).
    pub(crate) fn wrap(&mut self, kind: GroupKind, start: usize, end: usize) -> usize {
        debug_assert!(start <= end && end < self.children.len());
        let run: Vec<TokenTree> = self.children.drain(start..=end).collect();
        self.children
            .insert(start, TokenTree::Group(Self { kind, children: run }));
        start
    }

    /// Moves `children[host + 1..=end]` to the end of the group at `host`.
    /// Does nothing if the child at `host` is not a group.
    pub(crate) fn absorb(&mut self, host: usize, end: usize) {
        debug_assert!(host < end && end < self.children.len());
        if !matches!(self.children.get(host), Some(TokenTree::Group(_))) {
            return;
        }
        let moved: Vec<TokenTree> = self.children.drain(host + 1..=end).collect();
        if let Some(TokenTree::Group(group)) = self.children.get_mut(host) {
            group.children.extend(moved);
        }
    }

    /// Mutable iterator over the direct child groups, in order.
    pub(crate) fn sublists_mut(&mut self) -> impl Iterator<Item = &mut Self> {
        self.children.iter_mut().filter_map(|child| match child {
            TokenTree::Group(group) => Some(group),
            TokenTree::Token(_) => None,
        })
    }

    /// Returns true if this is a comment group opening with a `/* ... */`
    /// comment.
    #[must_use]
    pub fn is_multiline_comment(&self) -> bool {
        self.kind == GroupKind::Comment
            && matches!(
                self.children.first().and_then(TokenTree::token_kind),
                Some(TokenKind::Comment(CommentKind::Multiline))
            )
    }

    /// The concatenated text of all leaf tokens, in source order.
    #[must_use]
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for child in &self.children {
            child.fmt(f)?;
        }
        Ok(())
    }
}
