//! Structural validators for each tree variant.

use std::collections::{HashSet, VecDeque};

use crate::avl::balance_factor;
use crate::store::NodeStore;
use crate::types::NodeId;
use crate::util::{first, next};

/// Links are mutual, the root has no parent, and every live node is reachable
/// exactly once from the root.
pub fn assert_links(store: &NodeStore) -> Result<(), String> {
    let Some(root) = store.root() else {
        if store.is_empty() {
            return Ok(());
        }
        return Err(format!("Empty root with {} live nodes", store.len()));
    };
    if !store.contains(root) {
        return Err(format!("Root {root} is not live"));
    }
    if store.parent(root).is_some() {
        return Err("Root has parent".to_string());
    }

    let mut seen: HashSet<NodeId> = HashSet::with_capacity(store.len());
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if !seen.insert(node) {
            return Err(format!("Node {node} reached twice"));
        }
        for child in [store.left(node), store.right(node)].into_iter().flatten() {
            if !store.contains(child) {
                return Err(format!("Node {node} links to dead node {child}"));
            }
            if store.parent(child) != Some(node) {
                return Err(format!("Broken parent link on {child}"));
            }
            stack.push(child);
        }
    }
    if seen.len() != store.len() {
        return Err(format!(
            "Reachable nodes {} != live nodes {}",
            seen.len(),
            store.len()
        ));
    }
    Ok(())
}

/// Links plus strictly increasing in-order values.
pub fn assert_bst(store: &NodeStore) -> Result<(), String> {
    assert_links(store)?;
    let mut curr = first(store, store.root());
    let mut prev: Option<i64> = None;
    while let Some(i) = curr {
        let v = store.value(i);
        if let Some(p) = prev {
            if p >= v {
                return Err(format!("Node order violated: {p} before {v}"));
            }
        }
        prev = Some(v);
        curr = next(store, i);
    }
    Ok(())
}

fn exact_height(store: &NodeStore, node: Option<NodeId>) -> Result<u32, String> {
    let Some(n) = node else {
        return Ok(0);
    };
    let lh = exact_height(store, store.left(n))?;
    let rh = exact_height(store, store.right(n))?;
    let expected = 1 + lh.max(rh);
    if store.height(n) != expected {
        return Err(format!(
            "Height mismatch at {n}: expected {expected}, got {}",
            store.height(n)
        ));
    }
    if !(-1..=1).contains(&balance_factor(store, n)) {
        return Err(format!("AVL balance violated at {n}"));
    }
    Ok(expected)
}

/// BST ordering, exact stored heights and `|bf| <= 1` everywhere.
pub fn assert_avl(store: &NodeStore) -> Result<(), String> {
    assert_bst(store)?;
    exact_height(store, store.root()).map(|_| ())
}

/// Complete shape and the max-heap property.
pub fn assert_heap(store: &NodeStore) -> Result<(), String> {
    assert_links(store)?;
    let mut queue: VecDeque<Option<NodeId>> = VecDeque::new();
    queue.push_back(store.root());
    let mut gap = false;
    while let Some(slot) = queue.pop_front() {
        match slot {
            None => gap = true,
            Some(n) => {
                if gap {
                    return Err(format!("Tree is not complete: {n} after a gap"));
                }
                for child in [store.left(n), store.right(n)] {
                    if let Some(c) = child {
                        if store.value(c) > store.value(n) {
                            return Err(format!(
                                "Heap order violated: {} under {}",
                                store.value(c),
                                store.value(n)
                            ));
                        }
                    }
                    queue.push_back(child);
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Side;

    #[test]
    fn detects_out_of_order_bst() {
        let mut store = NodeStore::new();
        let root = store.allocate(10);
        let l = store.allocate(20);
        store.set_root(Some(root));
        store.link(root, Side::Left, Some(l));
        assert!(assert_links(&store).is_ok());
        assert!(assert_bst(&store).is_err());
    }

    #[test]
    fn detects_incomplete_heap() {
        //   9
        //    \
        //     3
        let mut store = NodeStore::new();
        let root = store.allocate(9);
        let r = store.allocate(3);
        store.set_root(Some(root));
        store.link(root, Side::Right, Some(r));
        assert!(assert_heap(&store).unwrap_err().contains("not complete"));
    }

    #[test]
    fn detects_unreachable_node() {
        let mut store = NodeStore::new();
        let root = store.allocate(1);
        store.allocate(2);
        store.set_root(Some(root));
        assert!(assert_links(&store).is_err());
    }

    #[test]
    fn detects_stale_height() {
        let mut store = NodeStore::new();
        let root = store.allocate(2);
        let l = store.allocate(1);
        store.set_root(Some(root));
        store.link(root, Side::Left, Some(l));
        assert!(assert_avl(&store).unwrap_err().contains("Height mismatch"));
    }
}
