//! Tests for bracketing structures: parentheses, square brackets, CASE,
//! IF, FOR, BEGIN blocks, and comment runs.

mod common;
use common::*;

use sqlshape_core::tree::GroupKind;

#[test]
fn parenthesis_groups_balanced_span() {
    let tree = round_trip("select (a + b) from t");
    let paren = expect_group(&tree, GroupKind::Parenthesis);
    assert_eq!(paren.text(), "(a + b)");
}

#[test]
fn nested_parentheses_group_inside_out() {
    let tree = round_trip("((a))");
    assert_eq!(tree.len(), 1);
    let outer = tree.children()[0].as_group().unwrap();
    assert_eq!(outer.kind, GroupKind::Parenthesis);
    let inner = find_group(outer.children()[1].as_group().unwrap(), GroupKind::Parenthesis)
        .unwrap_or_else(|| panic!("expected an inner parenthesis group"));
    assert_eq!(inner.text(), "(a)");
}

#[test]
fn square_brackets_group() {
    let tree = round_trip("select [col name] from t");
    let brackets = expect_group(&tree, GroupKind::SquareBrackets);
    assert_eq!(brackets.text(), "[col name]");
}

#[test]
fn unbalanced_open_is_left_in_place() {
    let tree = round_trip("select (a from t");
    assert_eq!(count_groups(&tree, GroupKind::Parenthesis), 0);
}

#[test]
fn stray_close_is_left_in_place() {
    let tree = round_trip("a) and (b)");
    assert_eq!(count_groups(&tree, GroupKind::Parenthesis), 1);
    assert_eq!(
        expect_group(&tree, GroupKind::Parenthesis).text(),
        "(b)"
    );
}

#[test]
fn case_block_groups_through_end() {
    let tree = round_trip("SELECT CASE WHEN x THEN 1 ELSE 2 END FROM t");
    let case = expect_group(&tree, GroupKind::Case);
    assert_eq!(case.text(), "CASE WHEN x THEN 1 ELSE 2 END");
}

#[test]
fn nested_case_blocks() {
    let tree = round_trip("CASE WHEN a THEN CASE WHEN b THEN 1 END ELSE 2 END");
    assert_eq!(count_groups(&tree, GroupKind::Case), 2);
}

#[test]
fn if_block_with_body() {
    let tree = round_trip("IF x > 0 THEN y := 1; END IF;");
    let if_group = expect_group(&tree, GroupKind::If);
    assert_eq!(if_group.text(), "IF x > 0 THEN y := 1; END IF");
    assert_eq!(count_groups(&tree, GroupKind::Comparison), 1);
    assert_eq!(count_groups(&tree, GroupKind::Assignment), 1);
}

#[test]
fn for_loop_block() {
    let tree = round_trip("FOR rec IN cur LOOP fetch; END LOOP;");
    let for_group = expect_group(&tree, GroupKind::For);
    assert_eq!(for_group.text(), "FOR rec IN cur LOOP fetch; END LOOP");
}

#[test]
fn foreach_loop_block() {
    let tree = round_trip("FOREACH x IN rows LOOP y := x; END LOOP;");
    assert_eq!(count_groups(&tree, GroupKind::For), 1);
}

#[test]
fn begin_block() {
    let tree = round_trip("BEGIN y := 1; END;");
    let begin = expect_group(&tree, GroupKind::Begin);
    assert_eq!(begin.text(), "BEGIN y := 1; END");
}

#[test]
fn comment_run_groups_as_one() {
    let tree = round_trip("select a /* one */ /* two */ from t");
    assert_eq!(count_groups(&tree, GroupKind::Comment), 1);
}

#[test]
fn line_comment_at_end_of_statement_stays_a_leaf() {
    let tree = round_trip("select a from t -- done\n");
    assert_eq!(count_groups(&tree, GroupKind::Comment), 0);
}
