use crate::store::NodeStore;
use crate::types::{NodeId, Side};

use super::types::Rotation;

/// Stored height, 0 for a missing child.
#[inline]
pub(crate) fn height(store: &NodeStore, node: Option<NodeId>) -> u32 {
    node.map_or(0, |n| store.height(n))
}

/// `height(left) - height(right)`.
#[inline]
pub fn balance_factor(store: &NodeStore, node: NodeId) -> i32 {
    height(store, store.left(node)) as i32 - height(store, store.right(node)) as i32
}

#[inline]
fn update_height(store: &mut NodeStore, node: NodeId) {
    let h = 1 + height(store, store.left(node)).max(height(store, store.right(node)));
    store.set_height(node, h);
}

/// Right rotation at `z`: its left child `y` takes `z`'s place.
///
/// ```text
///       z            y
///      / \          / \
///     y   T4  →   T1   z
///    / \              / \
///  T1   T3          T3   T4
/// ```
pub(crate) fn rotate_right(store: &mut NodeStore, z: NodeId) -> Option<NodeId> {
    let y = store.left(z)?;
    let p = store.parent(z);
    let t3 = store.right(y);
    store.replace_child(p, z, Some(y));
    store.link(y, Side::Right, Some(z));
    store.link(z, Side::Left, t3);
    update_height(store, z);
    update_height(store, y);
    Some(y)
}

/// Left rotation at `z`: its right child `y` takes `z`'s place.
pub(crate) fn rotate_left(store: &mut NodeStore, z: NodeId) -> Option<NodeId> {
    let y = store.right(z)?;
    let p = store.parent(z);
    let t2 = store.left(y);
    store.replace_child(p, z, Some(y));
    store.link(y, Side::Left, Some(z));
    store.link(z, Side::Right, t2);
    update_height(store, z);
    update_height(store, y);
    Some(y)
}

fn rotate<F>(store: &mut NodeStore, dir: Side, pivot: NodeId, on_rotate: &mut F) -> Option<NodeId>
where
    F: FnMut(Rotation),
{
    let child = match dir {
        Side::Left => store.right(pivot)?,
        Side::Right => store.left(pivot)?,
    };
    on_rotate(Rotation {
        dir,
        pivot,
        pivot_value: store.value(pivot),
        child,
        child_value: store.value(child),
    });
    match dir {
        Side::Left => rotate_left(store, pivot),
        Side::Right => rotate_right(store, pivot),
    }
}

/// Restores heights and balance from `start` up to the root.
///
/// `on_rotate` sees every rotation before it is applied. With
/// `stop_after_rotation` the walk ends at the first rebalanced ancestor;
/// after an insert one single or double rotation restores the subtree's
/// previous height, so nothing above it changes.
pub(crate) fn rebalance<F>(
    store: &mut NodeStore,
    start: Option<NodeId>,
    stop_after_rotation: bool,
    mut on_rotate: F,
) where
    F: FnMut(Rotation),
{
    let mut curr = start;
    while let Some(n) = curr {
        update_height(store, n);
        let bf = balance_factor(store, n);
        let top = if bf > 1 {
            if let Some(l) = store.left(n) {
                if balance_factor(store, l) < 0 {
                    rotate(store, Side::Left, l, &mut on_rotate);
                }
            }
            rotate(store, Side::Right, n, &mut on_rotate)
        } else if bf < -1 {
            if let Some(r) = store.right(n) {
                if balance_factor(store, r) > 0 {
                    rotate(store, Side::Right, r, &mut on_rotate);
                }
            }
            rotate(store, Side::Left, n, &mut on_rotate)
        } else {
            None
        };
        match top {
            Some(_) if stop_after_rotation => return,
            Some(top) => curr = store.parent(top),
            None => curr = store.parent(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(values: &[i64], side: Side) -> (NodeStore, Vec<NodeId>) {
        let mut store = NodeStore::new();
        let ids: Vec<NodeId> = values.iter().map(|&v| store.allocate(v)).collect();
        store.set_root(Some(ids[0]));
        for w in ids.windows(2) {
            store.link(w[0], side, Some(w[1]));
        }
        for &id in ids.iter().rev() {
            update_height(&mut store, id);
        }
        (store, ids)
    }

    #[test]
    fn rotate_right_promotes_left_child_to_root() {
        let (mut store, ids) = chain(&[3, 2, 1], Side::Left);
        assert_eq!(balance_factor(&store, ids[0]), 2);
        let top = rotate_right(&mut store, ids[0]);
        assert_eq!(top, Some(ids[1]));
        assert_eq!(store.root(), Some(ids[1]));
        assert_eq!(store.left(ids[1]), Some(ids[2]));
        assert_eq!(store.right(ids[1]), Some(ids[0]));
        assert_eq!(store.parent(ids[0]), Some(ids[1]));
        assert_eq!(store.height(ids[1]), 2);
        assert_eq!(store.height(ids[0]), 1);
    }

    #[test]
    fn rebalance_handles_right_left_case() {
        //  1
        //   \
        //    3
        //   /
        //  2
        let mut store = NodeStore::new();
        let n1 = store.allocate(1);
        let n3 = store.allocate(3);
        let n2 = store.allocate(2);
        store.set_root(Some(n1));
        store.link(n1, Side::Right, Some(n3));
        store.link(n3, Side::Left, Some(n2));
        let mut rotations = Vec::new();
        rebalance(&mut store, Some(n2), true, |r| rotations.push(r.dir));
        assert_eq!(rotations, vec![Side::Right, Side::Left]);
        assert_eq!(store.root(), Some(n2));
        assert_eq!(store.left(n2), Some(n1));
        assert_eq!(store.right(n2), Some(n3));
        assert_eq!(store.height(n2), 2);
    }
}
