//! The grouping engine: a fixed pipeline of tree-rewrite passes.
//!
//! Each pass scans a group's children, recurses into nested groups where the
//! pass supports nesting, and splices contiguous runs into new groups. The
//! pipeline order is load-bearing: parentheses and functions must group
//! before identifier chains so a chain can absorb them as atomic units, and
//! identifiers and aliases must group before identifier lists so the list
//! boundary checks see whole identifiers rather than raw tokens.
//!
//! No pass ever fails. Unbalanced delimiters, invalid operator neighbors,
//! and broken list boundaries are skipped silently; the only way callers
//! observe imperfect input is the shape of the resulting tree.

mod comments;
mod identifiers;
mod left_right;
mod lists;
mod matching;

use tracing::trace;

use crate::tree::{Group, GroupKind};

/// Runs every grouping pass once, in pipeline order, over `list`.
pub fn group(list: &mut Group) {
    const PASSES: &[(&str, fn(&mut Group))] = &[
        ("comments", comments::group_comments),
        ("brackets", matching::group_brackets),
        ("parenthesis", matching::group_parenthesis),
        ("functions", identifiers::group_functions),
        ("where", matching::group_where),
        ("case", matching::group_case),
        ("identifiers", identifiers::group_identifier),
        ("order", identifiers::group_order),
        ("typecasts", left_right::group_typecasts),
        ("as", left_right::group_as),
        ("aliased", identifiers::group_aliased),
        ("assignment", left_right::group_assignment),
        ("comparison", left_right::group_comparison),
        ("align-comments", comments::align_comments),
        ("identifier-list", lists::group_identifier_list),
        ("if", matching::group_if),
        ("for", matching::group_for),
        ("begin", matching::group_begin),
    ];
    for (name, pass) in PASSES {
        trace!(pass = name, "running grouping pass");
        pass(list);
    }
}

/// Applies `pass` to every direct child group whose kind is not in `skip`.
///
/// Passes call this on themselves before grouping at the current level, so
/// grouping proceeds bottom-up. Skipping the kind a pass produces is what
/// prevents a region from being re-grouped forever.
pub(crate) fn recurse(list: &mut Group, skip: &[GroupKind], pass: fn(&mut Group)) {
    for sub in list.sublists_mut() {
        if !skip.contains(&sub.kind) {
            pass(sub);
        }
    }
}
