//! Splay rotations.
//!
//! Naming follows the path from the grandparent down: `ll_splay` handles a
//! left child of a left child, `lr_splay` a right child of a left child, and
//! so on. `r_splay` / `l_splay` are the single zig rotations.

use crate::store::NodeStore;
use crate::types::{NodeId, Side};

/// Zig: promote `c2`, the left child of `c1`.
///
/// ```text
///     c1         c2
///    /     →       \
///  c2               c1
///    \             /
///     b           b
/// ```
pub(crate) fn r_splay(store: &mut NodeStore, c2: NodeId, c1: NodeId) {
    let b = store.right(c2);
    store.replace_child(store.parent(c1), c1, Some(c2));
    store.link(c2, Side::Right, Some(c1));
    store.link(c1, Side::Left, b);
}

/// Zig: promote `c2`, the right child of `c1`.
pub(crate) fn l_splay(store: &mut NodeStore, c2: NodeId, c1: NodeId) {
    let b = store.left(c2);
    store.replace_child(store.parent(c1), c1, Some(c2));
    store.link(c2, Side::Left, Some(c1));
    store.link(c1, Side::Right, b);
}

/// Zig-zig: `c3` is the left child of `c2`, which is the left child of `c1`.
pub(crate) fn ll_splay(store: &mut NodeStore, c3: NodeId, c2: NodeId, c1: NodeId) {
    let b = store.right(c2);
    let c = store.right(c3);
    store.replace_child(store.parent(c1), c1, Some(c3));
    store.link(c3, Side::Right, Some(c2));
    store.link(c2, Side::Left, c);
    store.link(c2, Side::Right, Some(c1));
    store.link(c1, Side::Left, b);
}

/// Zig-zig: `c3` is the right child of `c2`, which is the right child of `c1`.
pub(crate) fn rr_splay(store: &mut NodeStore, c3: NodeId, c2: NodeId, c1: NodeId) {
    let b = store.left(c2);
    let c = store.left(c3);
    store.replace_child(store.parent(c1), c1, Some(c3));
    store.link(c3, Side::Left, Some(c2));
    store.link(c2, Side::Right, c);
    store.link(c2, Side::Left, Some(c1));
    store.link(c1, Side::Right, b);
}

/// Zig-zag: `c3` is the right child of `c2`, which is the left child of `c1`.
pub(crate) fn lr_splay(store: &mut NodeStore, c3: NodeId, c2: NodeId, c1: NodeId) {
    let c = store.left(c3);
    let d = store.right(c3);
    store.replace_child(store.parent(c1), c1, Some(c3));
    store.link(c3, Side::Left, Some(c2));
    store.link(c3, Side::Right, Some(c1));
    store.link(c2, Side::Right, c);
    store.link(c1, Side::Left, d);
}

/// Zig-zag: `c3` is the left child of `c2`, which is the right child of `c1`.
pub(crate) fn rl_splay(store: &mut NodeStore, c3: NodeId, c2: NodeId, c1: NodeId) {
    let c = store.right(c3);
    let d = store.left(c3);
    store.replace_child(store.parent(c1), c1, Some(c3));
    store.link(c3, Side::Left, Some(c1));
    store.link(c3, Side::Right, Some(c2));
    store.link(c2, Side::Left, c);
    store.link(c1, Side::Right, d);
}
