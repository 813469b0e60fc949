#![allow(dead_code)]

use sqlshape_core::tree::{Group, GroupKind};

pub fn parse(sql: &str) -> Group {
    sqlshape_core::parse(sql)
}

/// Verifies that grouping never changes the concatenated leaf text.
pub fn round_trip(sql: &str) -> Group {
    let tree = parse(sql);
    assert_eq!(
        tree.text(),
        sql,
        "grouping changed the leaf text of: {sql}"
    );
    tree
}

/// Depth-first search for the first group of `kind`, the root included.
pub fn find_group(root: &Group, kind: GroupKind) -> Option<&Group> {
    if root.kind == kind {
        return Some(root);
    }
    root.children()
        .iter()
        .filter_map(|child| child.as_group())
        .find_map(|sub| find_group(sub, kind))
}

pub fn expect_group(root: &Group, kind: GroupKind) -> &Group {
    find_group(root, kind)
        .unwrap_or_else(|| panic!("expected a {kind:?} group in: {}", root.text()))
}

/// Number of groups of `kind` anywhere in the tree, the root included.
pub fn count_groups(root: &Group, kind: GroupKind) -> usize {
    let here = usize::from(root.kind == kind);
    here + root
        .children()
        .iter()
        .filter_map(|child| child.as_group())
        .map(|sub| count_groups(sub, kind))
        .sum::<usize>()
}
