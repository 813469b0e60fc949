//! Tests for comma-separated identifier lists.

mod common;
use common::*;

use sqlshape_core::tree::GroupKind;

#[test]
fn select_columns_form_one_list() {
    let tree = round_trip("select a, b, c from t");
    let list = expect_group(&tree, GroupKind::IdentifierList);
    assert_eq!(list.text(), "a, b, c");
    assert_eq!(count_groups(list, GroupKind::Identifier), 3);
}

#[test]
fn integer_literals_form_a_list() {
    let tree = round_trip("select 1, 2, 3 from t");
    let list = expect_group(&tree, GroupKind::IdentifierList);
    assert_eq!(list.text(), "1, 2, 3");
    assert_eq!(count_groups(list, GroupKind::Identifier), 0);
}

#[test]
fn function_arguments_form_a_nested_list() {
    let tree = round_trip("f(a, b)");
    let func = expect_group(&tree, GroupKind::Function);
    let list = find_group(func, GroupKind::IdentifierList)
        .unwrap_or_else(|| panic!("expected an argument list inside the call"));
    assert_eq!(list.text(), "a, b");
}

#[test]
fn trailing_comma_does_not_form_a_list() {
    let tree = round_trip("(a, b,)");
    assert_eq!(count_groups(&tree, GroupKind::IdentifierList), 0);
}

#[test]
fn mixed_literal_items_form_a_list() {
    let tree = round_trip("select a, count(b), 'x', ? from t");
    let list = expect_group(&tree, GroupKind::IdentifierList);
    assert_eq!(list.text(), "a, count(b), 'x', ?");
}
