//! The token tree the grouping passes rewrite in place.

mod group;

pub use group::{Group, GroupKind, TokenTree};
