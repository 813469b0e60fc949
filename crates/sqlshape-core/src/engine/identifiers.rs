//! Identifier-chain grouping plus the function-call, ordering, and
//! implicit-alias passes.

use crate::lexer::{KeywordKind, StringKind, TokenKind};
use crate::tree::{Group, GroupKind, TokenTree};

/// Group kinds that can stand as an identifier for aliasing purposes.
const ALIASABLE: &[GroupKind] = &[GroupKind::Identifier, GroupKind::Function, GroupKind::Case];

/// Phase of the alternating acceptance cycle for identifier chains.
#[derive(Clone, Copy)]
enum Phase {
    /// Accepts a dot, operator, wildcard, name, or bracket subscript.
    Link,
    /// Accepts a literal, name, wildcard, or nested group.
    Operand,
}

impl Phase {
    const fn other(self) -> Self {
        match self {
            Self::Link => Self::Operand,
            Self::Operand => Self::Link,
        }
    }

    fn accepts(self, child: &TokenTree) -> bool {
        match self {
            Self::Link => {
                if let Some(token) = child.as_token() {
                    token.is_punct(".")
                        || matches!(
                            token.kind,
                            TokenKind::Operator | TokenKind::Wildcard | TokenKind::Name
                        )
                } else {
                    child.is_group(GroupKind::SquareBrackets)
                }
            }
            Self::Operand => {
                if let Some(token) = child.as_token() {
                    matches!(
                        token.kind,
                        TokenKind::String(_)
                            | TokenKind::Name
                            | TokenKind::Wildcard
                            | TokenKind::Number(_)
                    )
                } else {
                    matches!(
                        child.group_kind(),
                        Some(
                            GroupKind::Parenthesis
                                | GroupKind::SquareBrackets
                                | GroupKind::Function
                        )
                    )
                }
            }
        }
    }
}

/// An identifier chain starts at the earliest of a symbol/name/number token
/// or a function/parenthesis group.
fn is_anchor(child: &TokenTree) -> bool {
    if let Some(token) = child.as_token() {
        return matches!(
            token.kind,
            TokenKind::String(StringKind::Symbol) | TokenKind::Name | TokenKind::Number(_)
        );
    }
    matches!(
        child.group_kind(),
        Some(GroupKind::Function | GroupKind::Parenthesis)
    )
}

/// Groups maximal dotted/bracketed/wildcarded identifier chains into
/// identifier groups, leaving degenerate single-token runs (a bare number, a
/// lone function or parenthesis group) unwrapped.
pub(crate) fn group_identifier(list: &mut Group) {
    super::recurse(list, &[GroupKind::Identifier], group_identifier);
    let mut idx = 0;
    while let Some(anchor) = list.find_from(idx, is_anchor) {
        // Consume the alternating cycle after the anchor; whitespace passes
        // through without advancing the phase.
        let mut stop = anchor + 1;
        let mut phase = Phase::Link;
        while let Some(child) = list.get(stop) {
            if child.is_whitespace() {
                stop += 1;
                continue;
            }
            if phase.accepts(child) {
                phase = phase.other();
                stop += 1;
                continue;
            }
            // A trailing block comment or ordering keyword is absorbed, then
            // consumption stops.
            let absorbable = child.as_group().is_some_and(Group::is_multiline_comment)
                || matches!(
                    child.token_kind(),
                    Some(TokenKind::Keyword(KeywordKind::Order))
                );
            if absorbable {
                stop += 1;
            }
            break;
        }
        let mut end = stop - 1;
        while end > anchor && list.children()[end].is_whitespace() {
            end -= 1;
        }
        let degenerate = end == anchor
            && match &list.children()[anchor] {
                TokenTree::Token(token) => matches!(token.kind, TokenKind::Number(_)),
                TokenTree::Group(group) => {
                    matches!(group.kind, GroupKind::Function | GroupKind::Parenthesis)
                }
            };
        idx = if degenerate {
            anchor + 1
        } else {
            list.wrap(GroupKind::Identifier, anchor, end) + 1
        };
    }
}

/// Wraps a name directly followed by a parenthesis group into a function
/// group.
pub(crate) fn group_functions(list: &mut Group) {
    super::recurse(list, &[GroupKind::Function], group_functions);
    let mut idx = 0;
    while let Some(name) = list.find_from(idx, |child| {
        matches!(child.token_kind(), Some(TokenKind::Name))
    }) {
        idx = match list.next_nonws(name) {
            Some(next) if list.children()[next].is_group(GroupKind::Parenthesis) => {
                list.wrap(GroupKind::Function, name, next) + 1
            }
            _ => name + 1,
        };
    }
}

/// Merges a trailing ASC/DESC keyword into the preceding identifier or bare
/// number. Top-level only.
pub(crate) fn group_order(list: &mut Group) {
    let mut idx = 0;
    while let Some(dir) = list.find_from(idx, |child| {
        matches!(
            child.token_kind(),
            Some(TokenKind::Keyword(KeywordKind::Order))
        )
    }) {
        idx = match list.prev_nonws(dir) {
            Some(prev)
                if list.children()[prev].is_group(GroupKind::Identifier)
                    || matches!(
                        list.children()[prev].token_kind(),
                        Some(TokenKind::Number(_))
                    ) =>
            {
                list.wrap(GroupKind::Identifier, prev, dir) + 1
            }
            _ => dir + 1,
        };
    }
}

/// Merges adjacent identifier-like groups (implicit aliasing without AS).
/// The host keeps absorbing until the next sibling is no longer
/// identifier-like, so a re-run finds nothing left to merge.
pub(crate) fn group_aliased(list: &mut Group) {
    super::recurse(list, ALIASABLE, group_aliased);
    let is_aliasable =
        |child: &TokenTree| child.group_kind().is_some_and(|k| ALIASABLE.contains(&k));
    let mut idx = 0;
    while let Some(first) = list.find_from(idx, is_aliasable) {
        while let Some(next) = list.next_nonws(first) {
            let child = &list.children()[next];
            // VARCHAR(...) after an identifier is a cast-like form, not an
            // alias.
            if !is_aliasable(child) || child.text().to_ascii_uppercase().starts_with("VARCHAR") {
                break;
            }
            list.absorb(first, next);
        }
        idx = first + 1;
    }
}
