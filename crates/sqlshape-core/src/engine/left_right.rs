//! Generic binary-operator grouping: AS aliasing, assignments, comparisons,
//! and type casts.

use crate::lexer::{KeywordKind, Token, TokenKind};
use crate::tree::{Group, GroupKind, TokenTree};

/// Description of one left-operator-right grouping.
struct LeftRight {
    /// The kind of group an accepted occurrence merges into.
    kind: GroupKind,
    /// Recognizes the operator token.
    operator: fn(&Token) -> bool,
    /// Validity of the nearest non-whitespace left neighbor.
    left_ok: fn(&TokenTree) -> bool,
    /// Validity of the nearest non-whitespace right neighbor.
    right_ok: fn(&TokenTree) -> bool,
    /// Extend the merged span through a following `;` when one exists.
    include_semicolon: bool,
}

/// Scans `list` for the rule's operator and merges each valid
/// left/operator/right occurrence into one group. Occurrences with a missing
/// or invalid neighbor are skipped, not consumed.
fn group_left_right(list: &mut Group, rule: &LeftRight) {
    for sub in list.sublists_mut() {
        if sub.kind != rule.kind {
            group_left_right(sub, rule);
        }
    }
    let mut idx = 0;
    while let Some(op) = list.find_from(idx, |child| child.as_token().is_some_and(rule.operator)) {
        let (Some(left), Some(right)) = (list.prev_nonws(op), list.next_nonws(op)) else {
            idx = op + 1;
            continue;
        };
        if !(rule.left_ok)(&list.children()[left]) || !(rule.right_ok)(&list.children()[right]) {
            idx = op + 1;
            continue;
        }
        let mut end = right;
        if rule.include_semicolon {
            if let Some(semi) = list.find_from(right, |child| {
                child.as_token().is_some_and(|t| t.is_punct(";"))
            }) {
                end = semi;
            }
        }
        let host = if list.children()[left].is_group(rule.kind) {
            left
        } else {
            list.wrap(rule.kind, left, left)
        };
        list.absorb(host, end);
        idx = host + 1;
    }
}

/// `left AS right` merges into an identifier. The right side may not be a
/// DML/DDL keyword and the left side may not be a keyword other than NULL.
pub(crate) fn group_as(list: &mut Group) {
    fn left_ok(child: &TokenTree) -> bool {
        match child.as_token() {
            Some(token) if token.kind.is_keyword() => token.value.eq_ignore_ascii_case("NULL"),
            _ => true,
        }
    }
    fn right_ok(child: &TokenTree) -> bool {
        !matches!(
            child.token_kind(),
            Some(TokenKind::Keyword(KeywordKind::Dml | KeywordKind::Ddl))
        )
    }
    group_left_right(
        list,
        &LeftRight {
            kind: GroupKind::Identifier,
            operator: |t| t.is_keyword("AS"),
            left_ok,
            right_ok,
            include_semicolon: false,
        },
    );
}

/// `left := right` merges into an assignment, absorbing the span through a
/// following statement terminator when present.
pub(crate) fn group_assignment(list: &mut Group) {
    group_left_right(
        list,
        &LeftRight {
            kind: GroupKind::Assignment,
            operator: |t| t.kind == TokenKind::Assignment,
            left_ok: |_| true,
            right_ok: |_| true,
            include_semicolon: true,
        },
    );
}

/// Both sides of a comparison must be a literal, name, placeholder, an
/// identifier/parenthesis/function group, or the keyword NULL.
fn comparison_operand(child: &TokenTree) -> bool {
    if let Some(token) = child.as_token() {
        return matches!(
            token.kind,
            TokenKind::String(_) | TokenKind::Name | TokenKind::Number(_) | TokenKind::Placeholder
        ) || (token.kind.is_keyword() && token.value.eq_ignore_ascii_case("NULL"));
    }
    matches!(
        child.group_kind(),
        Some(GroupKind::Identifier | GroupKind::Parenthesis | GroupKind::Function)
    )
}

pub(crate) fn group_comparison(list: &mut Group) {
    group_left_right(
        list,
        &LeftRight {
            kind: GroupKind::Comparison,
            operator: |t| t.kind == TokenKind::Comparison,
            left_ok: comparison_operand,
            right_ok: comparison_operand,
            include_semicolon: false,
        },
    );
}

/// `left :: right` merges into an identifier; neither side is restricted.
pub(crate) fn group_typecasts(list: &mut Group) {
    group_left_right(
        list,
        &LeftRight {
            kind: GroupKind::Identifier,
            operator: |t| t.is_punct("::"),
            left_ok: |_| true,
            right_ok: |_| true,
            include_semicolon: false,
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn list(sql: &str) -> Group {
        Group::from_tokens(tokenize(sql))
    }

    #[test]
    fn test_as_merges_into_one_identifier() {
        let mut g = list("a AS b");
        group_as(&mut g);
        assert_eq!(g.len(), 1);
        let ident = g.children()[0].as_group().unwrap();
        assert_eq!(ident.kind, GroupKind::Identifier);
        assert_eq!(ident.text(), "a AS b");
    }

    #[test]
    fn test_as_after_dml_keyword_is_skipped() {
        let mut g = list("SELECT AS x");
        group_as(&mut g);
        assert!(g.children().iter().all(|c| c.as_group().is_none()));
    }

    #[test]
    fn test_as_before_dml_keyword_is_skipped() {
        let mut g = list("a AS SELECT");
        group_as(&mut g);
        assert!(g.children().iter().all(|c| c.as_group().is_none()));
    }

    #[test]
    fn test_null_is_a_valid_left_side() {
        let mut g = list("NULL AS missing");
        group_as(&mut g);
        assert_eq!(g.len(), 1);
        assert!(g.children()[0].is_group(GroupKind::Identifier));
    }

    #[test]
    fn test_assignment_absorbs_terminator() {
        let mut g = list("x := a + b;");
        group_assignment(&mut g);
        assert_eq!(g.len(), 1);
        let assign = g.children()[0].as_group().unwrap();
        assert_eq!(assign.kind, GroupKind::Assignment);
        assert_eq!(assign.text(), "x := a + b;");
    }

    #[test]
    fn test_comparison_with_invalid_side_is_skipped() {
        let mut g = list("WHERE = 1");
        group_comparison(&mut g);
        assert!(g.children().iter().all(|c| c.as_group().is_none()));
    }

    #[test]
    fn test_comparison_groups_valid_sides() {
        let mut g = list("a = 1");
        group_comparison(&mut g);
        assert_eq!(g.len(), 1);
        assert!(g.children()[0].is_group(GroupKind::Comparison));
    }

    #[test]
    fn test_operator_without_right_side_is_skipped() {
        let mut g = list("a =");
        group_comparison(&mut g);
        assert!(g.children().iter().all(|c| c.as_group().is_none()));
        assert_eq!(g.text(), "a =");
    }
}
