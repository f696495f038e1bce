//! Max-heap kept as a complete binary tree of linked nodes.
//!
//! The next free slot is found breadth-first. Repairs (bubble-up, sink-down)
//! swap values, never node identities, so a consumer can follow "this node"
//! across a trace.

pub mod types;

use std::collections::VecDeque;

use crate::check::assert_heap;
use crate::store::NodeStore;
use crate::trace::{Recorder, Traced};
use crate::types::{NodeId, Side};
use crate::util::{level_order, scan};

pub use types::HeapStep;

#[derive(Clone, Debug, Default)]
pub struct HeapTree {
    store: NodeStore,
}

/// First node in breadth-first order with a missing child, and which one.
fn next_slot(store: &NodeStore) -> Option<(NodeId, Side)> {
    let mut queue: VecDeque<NodeId> = store.root().into_iter().collect();
    while let Some(id) = queue.pop_front() {
        match (store.left(id), store.right(id)) {
            (None, _) => return Some((id, Side::Left)),
            (Some(_), None) => return Some((id, Side::Right)),
            (Some(l), Some(r)) => {
                queue.push_back(l);
                queue.push_back(r);
            }
        }
    }
    None
}

impl HeapTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &NodeStore {
        &self.store
    }

    pub fn root(&self) -> Option<NodeId> {
        self.store.root()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }

    pub fn peek_max(&self) -> Option<i64> {
        self.store.root().map(|r| self.store.value(r))
    }

    pub fn contains(&self, value: i64) -> bool {
        scan(&self.store, value).is_some()
    }

    /// Inserts `value` and bubbles it up.
    ///
    /// Returns the id of the node that was created. Bubbling moves values,
    /// so `value` may end up in an ancestor of that node. `None` means the
    /// value was already present.
    pub fn insert(&mut self, value: i64) -> Traced<Option<NodeId>, HeapStep> {
        let mut rec = Recorder::new();
        if let Some(id) = scan(&self.store, value) {
            tracing::debug!(value, "heap: duplicate insert rejected");
            rec.push(HeapStep::Found { id, value });
            return rec.finish(None);
        }

        let slot = next_slot(&self.store);
        let id = self.store.allocate(value);
        match slot {
            Some((parent, side)) => self.store.link(parent, side, Some(id)),
            None => self.store.set_root(Some(id)),
        }
        rec.push(HeapStep::Insert {
            id,
            value,
            parent: slot.map(|(p, _)| p),
            side: slot.map(|(_, s)| s),
        });

        self.bubble_up(id, &mut rec);
        tracing::debug!(value, %id, "heap: inserted");
        rec.finish(Some(id))
    }

    fn bubble_up(&mut self, start: NodeId, rec: &mut Recorder<HeapStep>) {
        let mut curr = start;
        while let Some(p) = self.store.parent(curr) {
            let value = self.store.value(curr);
            let parent_value = self.store.value(p);
            rec.push(HeapStep::Compare {
                id: curr,
                value,
                other: p,
                other_value: parent_value,
            });
            if value <= parent_value {
                break;
            }
            rec.push(HeapStep::Swap {
                a: curr,
                a_value: value,
                b: p,
                b_value: parent_value,
            });
            self.store.swap_values(curr, p);
            curr = p;
        }
    }

    /// Removes the root value, the maximum. `None` on an empty heap.
    pub fn extract_max(&mut self) -> Traced<Option<i64>, HeapStep> {
        let mut rec = Recorder::new();
        let Some(root) = self.store.root() else {
            return rec.finish(None);
        };
        let max = self.store.value(root);
        rec.push(HeapStep::Delete {
            id: root,
            value: max,
        });

        let last = level_order(&self.store).last().copied().unwrap_or(root);
        if last == root {
            self.store.set_root(None);
            self.store.free(root);
            tracing::debug!(max, "heap: extracted last node");
            return rec.finish(Some(max));
        }

        let moved = self.store.value(last);
        rec.push(HeapStep::Move {
            from: last,
            to: root,
            value: moved,
        });
        self.store.set_value(root, moved);
        self.store.replace_child(self.store.parent(last), last, None);
        self.store.free(last);

        self.sink_down(root, &mut rec);
        tracing::debug!(max, "heap: extracted");
        rec.finish(Some(max))
    }

    fn sink_down(&mut self, start: NodeId, rec: &mut Recorder<HeapStep>) {
        let mut curr = start;
        loop {
            let value = self.store.value(curr);
            let mut largest: Option<(NodeId, i64)> = None;
            for child in [self.store.left(curr), self.store.right(curr)].into_iter().flatten() {
                let child_value = self.store.value(child);
                rec.push(HeapStep::Compare {
                    id: curr,
                    value,
                    other: child,
                    other_value: child_value,
                });
                if largest.map_or(true, |(_, v)| child_value > v) {
                    largest = Some((child, child_value));
                }
            }
            match largest {
                Some((child, child_value)) if child_value > value => {
                    rec.push(HeapStep::Swap {
                        a: curr,
                        a_value: value,
                        b: child,
                        b_value: child_value,
                    });
                    self.store.swap_values(curr, child);
                    curr = child;
                }
                _ => break,
            }
        }
    }

    /// Values in breadth-first order.
    pub fn values(&self) -> Vec<i64> {
        level_order(&self.store)
            .into_iter()
            .map(|id| self.store.value(id))
            .collect()
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        assert_heap(&self.store)
    }
}
