//! Traversal helpers over a [`NodeStore`].
//!
//! These only read links; none of them mutate the store.

pub mod print;

use std::collections::VecDeque;

use crate::store::NodeStore;
use crate::types::NodeId;

pub use print::print;

/// Leftmost node under `root`.
pub fn first(store: &NodeStore, root: Option<NodeId>) -> Option<NodeId> {
    root.map(|r| leftmost(store, r))
}

/// Rightmost node under `root`.
pub fn last(store: &NodeStore, root: Option<NodeId>) -> Option<NodeId> {
    let mut curr = root?;
    while let Some(r) = store.right(curr) {
        curr = r;
    }
    Some(curr)
}

/// Leftmost node of the subtree rooted at `node`.
pub fn leftmost(store: &NodeStore, node: NodeId) -> NodeId {
    let mut curr = node;
    while let Some(l) = store.left(curr) {
        curr = l;
    }
    curr
}

/// In-order successor.
pub fn next(store: &NodeStore, node: NodeId) -> Option<NodeId> {
    if let Some(r) = store.right(node) {
        return Some(leftmost(store, r));
    }
    let mut curr = node;
    let mut p = store.parent(node);
    while let Some(pi) = p {
        if store.right(pi) == Some(curr) {
            curr = pi;
            p = store.parent(pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev(store: &NodeStore, node: NodeId) -> Option<NodeId> {
    if let Some(l) = store.left(node) {
        return last(store, Some(l));
    }
    let mut curr = node;
    let mut p = store.parent(node);
    while let Some(pi) = p {
        if store.left(pi) == Some(curr) {
            curr = pi;
            p = store.parent(pi);
        } else {
            return Some(pi);
        }
    }
    None
}

fn children(store: &NodeStore, node: NodeId) -> impl Iterator<Item = NodeId> {
    store.left(node).into_iter().chain(store.right(node))
}

/// Number of nodes under `root`.
pub fn size(store: &NodeStore, root: Option<NodeId>) -> usize {
    let mut count = 0;
    let mut stack: Vec<NodeId> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        count += 1;
        stack.extend(children(store, node));
    }
    count
}

/// Height in levels: 0 for an empty subtree, 1 for a single node.
///
/// Walks with an explicit stack, so degenerate chains are fine.
pub fn depth(store: &NodeStore, root: Option<NodeId>) -> usize {
    let mut deepest = 0;
    let mut stack: Vec<(NodeId, usize)> = root.map(|r| (r, 1)).into_iter().collect();
    while let Some((node, level)) = stack.pop() {
        deepest = deepest.max(level);
        stack.extend(children(store, node).map(|c| (c, level + 1)));
    }
    deepest
}

/// Values in in-order sequence.
pub fn in_order(store: &NodeStore) -> Vec<i64> {
    let mut out = Vec::with_capacity(store.len());
    let mut curr = first(store, store.root());
    while let Some(i) = curr {
        out.push(store.value(i));
        curr = next(store, i);
    }
    out
}

/// Node ids in breadth-first, left-to-right order.
pub fn level_order(store: &NodeStore) -> Vec<NodeId> {
    let mut out = Vec::with_capacity(store.len());
    let mut queue: VecDeque<NodeId> = store.root().into_iter().collect();
    while let Some(id) = queue.pop_front() {
        out.push(id);
        queue.extend(store.left(id));
        queue.extend(store.right(id));
    }
    out
}

/// Finds a node by value using search-tree ordering.
pub fn find(store: &NodeStore, value: i64) -> Option<NodeId> {
    let mut curr = store.root();
    while let Some(i) = curr {
        let v = store.value(i);
        if value == v {
            return Some(i);
        }
        curr = if value < v { store.left(i) } else { store.right(i) };
    }
    None
}

/// Finds a node by value without assuming any ordering.
pub fn scan(store: &NodeStore, value: i64) -> Option<NodeId> {
    level_order(store)
        .into_iter()
        .find(|&id| store.value(id) == value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Side;

    //        10
    //      /    \
    //     5      20
    //      \    /  \
    //       7  15  30
    fn fixture() -> NodeStore {
        let mut store = NodeStore::new();
        let n10 = store.allocate(10);
        let n5 = store.allocate(5);
        let n20 = store.allocate(20);
        let n7 = store.allocate(7);
        let n15 = store.allocate(15);
        let n30 = store.allocate(30);
        store.set_root(Some(n10));
        store.link(n10, Side::Left, Some(n5));
        store.link(n10, Side::Right, Some(n20));
        store.link(n5, Side::Right, Some(n7));
        store.link(n20, Side::Left, Some(n15));
        store.link(n20, Side::Right, Some(n30));
        store
    }

    #[test]
    fn in_order_and_level_order() {
        let store = fixture();
        assert_eq!(in_order(&store), vec![5, 7, 10, 15, 20, 30]);
        let levels: Vec<i64> = level_order(&store)
            .into_iter()
            .map(|id| store.value(id))
            .collect();
        assert_eq!(levels, vec![10, 5, 20, 7, 15, 30]);
    }

    #[test]
    fn neighbours() {
        let store = fixture();
        let n7 = find(&store, 7).unwrap();
        let n10 = find(&store, 10).unwrap();
        assert_eq!(next(&store, n7), Some(n10));
        assert_eq!(prev(&store, n10), Some(n7));
        assert_eq!(first(&store, store.root()).map(|i| store.value(i)), Some(5));
        assert_eq!(last(&store, store.root()).map(|i| store.value(i)), Some(30));
        assert_eq!(next(&store, last(&store, store.root()).unwrap()), None);
    }

    #[test]
    fn size_and_depth() {
        let store = fixture();
        assert_eq!(size(&store, store.root()), 6);
        assert_eq!(depth(&store, store.root()), 3);
        assert_eq!(depth(&store, None), 0);
        assert_eq!(find(&store, 8), None);
        assert_eq!(scan(&store, 15), find(&store, 15));
    }

    #[test]
    fn size_and_depth_on_deep_chain() {
        const N: usize = 300_000;
        let mut store = NodeStore::new();
        let mut tail = store.allocate(0);
        store.set_root(Some(tail));
        for v in 1..N as i64 {
            let n = store.allocate(v);
            store.link(tail, Side::Right, Some(n));
            tail = n;
        }
        assert_eq!(size(&store, store.root()), N);
        assert_eq!(depth(&store, store.root()), N);
        assert_eq!(depth(&store, Some(tail)), 1);
    }
}
