//! Paired-delimiter grouping: brackets, parentheses, keyword blocks, and the
//! WHERE clause.

use crate::lexer::{keywords, Token};
use crate::tree::{Group, GroupKind, TokenTree};

type TokenPred = fn(&Token) -> bool;

/// Open/close markers of a paired construct.
struct Pair {
    kind: GroupKind,
    open: TokenPred,
    close: TokenPred,
}

fn matches(child: &TokenTree, pred: TokenPred) -> bool {
    child.as_token().is_some_and(pred)
}

/// Finds the close marker matching the open marker at `open`, counting
/// nested pairs at this level. Returns `None` for unbalanced input.
fn find_matching(list: &Group, open: usize, pair: &Pair) -> Option<usize> {
    let mut depth = 1usize;
    for (idx, child) in list.children().iter().enumerate().skip(open + 1) {
        if matches(child, pair.open) {
            depth += 1;
        } else if matches(child, pair.close) {
            depth -= 1;
            if depth == 0 {
                return Some(idx);
            }
        }
    }
    None
}

/// Groups every top-level open/close span of `pair` in `list`, recursing
/// into nested groups first and into each newly created group. An open
/// marker without a matching close is left in place.
fn group_matching(list: &mut Group, pair: &Pair) {
    for sub in list.sublists_mut() {
        group_matching(sub, pair);
    }
    // When this list already is the pair's kind, its own open marker sits at
    // index 0; start past it instead of re-wrapping.
    let mut idx = usize::from(list.kind == pair.kind);
    while let Some(open) = list.find_from(idx, |child| matches(child, pair.open)) {
        idx = match find_matching(list, open, pair) {
            Some(close) => {
                let at = list.wrap(pair.kind, open, close);
                if let Some(TokenTree::Group(sub)) = list.get_mut(at) {
                    group_matching(sub, pair);
                }
                at + 1
            }
            None => open + 1,
        };
    }
}

pub(crate) fn group_parenthesis(list: &mut Group) {
    group_matching(
        list,
        &Pair {
            kind: GroupKind::Parenthesis,
            open: |t| t.is_punct("("),
            close: |t| t.is_punct(")"),
        },
    );
}

pub(crate) fn group_brackets(list: &mut Group) {
    group_matching(
        list,
        &Pair {
            kind: GroupKind::SquareBrackets,
            open: |t| t.is_punct("["),
            close: |t| t.is_punct("]"),
        },
    );
}

pub(crate) fn group_case(list: &mut Group) {
    group_matching(
        list,
        &Pair {
            kind: GroupKind::Case,
            open: |t| t.is_keyword("CASE"),
            close: |t| t.is_keyword("END"),
        },
    );
}

pub(crate) fn group_if(list: &mut Group) {
    group_matching(
        list,
        &Pair {
            kind: GroupKind::If,
            open: |t| t.is_keyword("IF"),
            close: |t| t.is_keyword("END IF"),
        },
    );
}

pub(crate) fn group_for(list: &mut Group) {
    group_matching(
        list,
        &Pair {
            kind: GroupKind::For,
            open: |t| t.is_keyword_among(&["FOR", "FOREACH"]),
            close: |t| t.is_keyword("END LOOP"),
        },
    );
}

pub(crate) fn group_begin(list: &mut Group) {
    group_matching(
        list,
        &Pair {
            kind: GroupKind::Begin,
            open: |t| t.is_keyword("BEGIN"),
            close: |t| t.is_keyword("END"),
        },
    );
}

/// Groups `WHERE` through the token before its terminator: the next
/// top-level closer keyword, or the end of the enclosing group. Inside a
/// bracket pair, the pair's own closing delimiter stays outside the clause.
pub(crate) fn group_where(list: &mut Group) {
    super::recurse(list, &[GroupKind::Where], group_where);
    let mut idx = 0;
    while let Some(open) = list.find_from(idx, |child| {
        child.as_token().is_some_and(|t| t.is_keyword("WHERE"))
    }) {
        let close = list.find_from(open + 1, |child| {
            child
                .as_token()
                .is_some_and(|t| t.is_keyword_among(keywords::WHERE_CLOSERS))
        });
        // Inside a bracket pair the pair's own closing delimiter stays
        // outside the clause.
        let last_groupable = match list.kind {
            GroupKind::Parenthesis | GroupKind::SquareBrackets => list.len().saturating_sub(2),
            _ => list.len().saturating_sub(1),
        };
        let end = close.map_or(last_groupable, |c| c - 1);
        if end < open {
            idx = open + 1;
            continue;
        }
        idx = list.wrap(GroupKind::Where, open, end) + 1;
    }
}
