//! Comma-separated list grouping.

use crate::lexer::{CommentKind, NumberKind, StringKind, TokenKind};
use crate::tree::{Group, GroupKind, TokenTree};

/// Boundary check for list items: whether `child` may sit directly next to a
/// list separator. The checks mirror the ordered predicate list of the
/// grouping rules; the first match wins.
fn list_boundary(child: &TokenTree) -> bool {
    if let Some(kind) = child.group_kind() {
        return matches!(
            kind,
            GroupKind::Identifier
                | GroupKind::Function
                | GroupKind::Case
                | GroupKind::Comparison
                | GroupKind::Comment
        );
    }
    let Some(token) = child.as_token() else {
        return false;
    };
    token.is_whitespace()
        || matches!(
            token.kind,
            TokenKind::Name
                | TokenKind::Wildcard
                | TokenKind::Keyword(_)
                | TokenKind::Number(NumberKind::Integer)
                | TokenKind::String(StringKind::Single)
                | TokenKind::Placeholder
                | TokenKind::Comment(CommentKind::Multiline)
        )
}

/// Groups comma-separated runs of acceptable items into identifier-list
/// groups. A comma with an unacceptable neighbor abandons the candidate list
/// and the scan moves on; nothing is consumed.
pub(crate) fn group_identifier_list(list: &mut Group) {
    super::recurse(list, &[GroupKind::IdentifierList], group_identifier_list);
    let is_comma = |child: &TokenTree| child.as_token().is_some_and(|t| t.is_punct(","));
    let mut start: Option<usize> = None;
    let mut comma = list.find_from(0, is_comma);
    while let Some(at) = comma {
        let (Some(before), Some(after)) = (list.prev_nonws(at), list.next_nonws(at)) else {
            start = None;
            comma = list.find_from(at + 1, is_comma);
            continue;
        };
        if !list_boundary(&list.children()[before]) || !list_boundary(&list.children()[after]) {
            start = None;
            comma = list.find_from(at + 1, is_comma);
            continue;
        }
        let first = *start.get_or_insert(before);
        match list.next_nonws(after) {
            Some(next) if is_comma(&list.children()[next]) => comma = Some(next),
            _ => {
                let grouped = list.wrap(GroupKind::IdentifierList, first, after);
                start = None;
                comma = list.find_from(grouped + 1, is_comma);
            }
        }
    }
}
