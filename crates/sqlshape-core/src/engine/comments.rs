//! Comment-run grouping and trailing-comment attachment.

use crate::tree::{Group, GroupKind, TokenTree};

fn is_comment_token(child: &TokenTree) -> bool {
    child.token_kind().is_some_and(crate::lexer::TokenKind::is_comment)
}

/// Merges each contiguous run of comment tokens (and the whitespace between
/// them) into a single comment group. A run that reaches the end of its list
/// stays ungrouped.
pub(crate) fn group_comments(list: &mut Group) {
    super::recurse(list, &[GroupKind::Comment], group_comments);
    let mut idx = 0;
    while let Some(start) = list.find_from(idx, is_comment_token) {
        let mut end = start + 1;
        while list
            .get(end)
            .is_some_and(|child| is_comment_token(child) || child.is_whitespace())
        {
            end += 1;
        }
        if end >= list.len() {
            idx = start + 1;
            continue;
        }
        idx = list.wrap(GroupKind::Comment, start, end - 1) + 1;
    }
}

/// Attaches a comment group to the structural group directly before it.
/// A comment that is already the last non-whitespace child, or whose
/// predecessor is a bare token, stays where it is.
pub(crate) fn align_comments(list: &mut Group) {
    super::recurse(list, &[], align_comments);
    let mut idx = 0;
    while let Some(comment) = list.find_from(idx, |child| child.is_group(GroupKind::Comment)) {
        let trailing = list.next_nonws(comment).is_none();
        idx = match list.prev_nonws(comment) {
            Some(prev) if !trailing && list.children()[prev].as_group().is_some() => {
                list.absorb(prev, comment);
                prev + 1
            }
            _ => comment + 1,
        };
    }
}
