//! Search-tree walks shared by the BST, AVL and splay engines.

use serde::Serialize;

use crate::store::NodeStore;
use crate::types::{NodeId, Side};
use crate::util::leftmost;

/// Where a descent for a value ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Descent {
    Found(NodeId),
    /// Empty slot the value belongs in; `None` when the tree is empty.
    Vacant(Option<(NodeId, Side)>),
}

impl Descent {
    /// Last node the walk touched.
    pub(crate) fn last(self) -> Option<NodeId> {
        match self {
            Descent::Found(id) => Some(id),
            Descent::Vacant(slot) => slot.map(|(p, _)| p),
        }
    }
}

/// Walks from the root toward `value`, reporting each visited node.
pub(crate) fn descend<F>(store: &NodeStore, value: i64, mut on_compare: F) -> Descent
where
    F: FnMut(NodeId, i64),
{
    let Some(mut curr) = store.root() else {
        return Descent::Vacant(None);
    };
    loop {
        let v = store.value(curr);
        on_compare(curr, v);
        if value == v {
            return Descent::Found(curr);
        }
        let side = if value < v { Side::Left } else { Side::Right };
        match store.child(curr, side) {
            Some(next) => curr = next,
            None => return Descent::Vacant(Some((curr, side))),
        }
    }
}

/// Allocates `value` and hangs it in `slot`, or makes it the root.
pub(crate) fn attach(store: &mut NodeStore, value: i64, slot: Option<(NodeId, Side)>) -> NodeId {
    let id = store.allocate(value);
    match slot {
        Some((parent, side)) => store.link(parent, side, Some(id)),
        None => store.set_root(Some(id)),
    }
    id
}

/// Shape of a node at the moment it is deleted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeleteCase {
    Leaf,
    OneChild,
    TwoChildren,
}

impl DeleteCase {
    pub fn of(store: &NodeStore, id: NodeId) -> DeleteCase {
        match (store.left(id), store.right(id)) {
            (None, None) => DeleteCase::Leaf,
            (Some(_), Some(_)) => DeleteCase::TwoChildren,
            _ => DeleteCase::OneChild,
        }
    }
}

/// Result of [`unlink`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct Unlinked {
    /// Node that was actually freed (the successor in the two-children case).
    pub removed: NodeId,
    /// Value the freed node held when it was freed.
    pub value: i64,
    /// Former parent of the freed node, where height changes start.
    pub parent: Option<NodeId>,
}

/// Deletes `target` using the leaf / one-child / two-children cases.
///
/// With two children the in-order successor's value is copied onto `target`
/// and the successor node (which has no left child) is spliced out instead,
/// so `target` keeps its identity.
pub(crate) fn unlink<F>(store: &mut NodeStore, target: NodeId, on_successor: F) -> Unlinked
where
    F: FnOnce(NodeId, i64),
{
    let victim = match (store.left(target), store.right(target)) {
        (Some(_), Some(r)) => {
            let succ = leftmost(store, r);
            let succ_value = store.value(succ);
            on_successor(succ, succ_value);
            store.set_value(target, succ_value);
            succ
        }
        _ => target,
    };
    let parent = store.parent(victim);
    let child = store.left(victim).or(store.right(victim));
    store.replace_child(parent, victim, child);
    let node = store.free(victim);
    Unlinked {
        removed: victim,
        value: node.value,
        parent,
    }
}
