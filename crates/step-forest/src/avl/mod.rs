//! Height-balanced (AVL) search tree.
//!
//! Uses the BST walk from [`crate::bst`], then repairs heights on the path
//! back to the root. An insert needs at most one single or double rotation;
//! a delete may rotate at several ancestors.

pub mod types;
pub(crate) mod util;

use crate::bst::util::{attach, descend, unlink, Descent};
use crate::check::assert_avl;
use crate::forest::SearchTree;
use crate::store::NodeStore;
use crate::trace::{Recorder, Traced};
use crate::types::{NodeId, Side};

pub use types::AvlStep;

use types::Rotation;
use util::rebalance;

pub use util::balance_factor;

#[derive(Clone, Debug, Default)]
pub struct AvlTree {
    store: NodeStore,
}

fn rotation_step(r: Rotation) -> AvlStep {
    match r.dir {
        Side::Left => AvlStep::RotateLeft {
            pivot: r.pivot,
            pivot_value: r.pivot_value,
            child: r.child,
            child_value: r.child_value,
        },
        Side::Right => AvlStep::RotateRight {
            pivot: r.pivot,
            pivot_value: r.pivot_value,
            child: r.child,
            child_value: r.child_value,
        },
    }
}

impl AvlTree {
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

    /// Height of the whole tree in levels, 0 when empty.
    pub fn height(&self) -> u32 {
        util::height(&self.store, self.store.root())
    }

    pub fn insert(&mut self, value: i64) -> Traced<Option<NodeId>, AvlStep> {
        let mut rec = Recorder::new();
        let descent = descend(&self.store, value, |id, v| {
            rec.push(AvlStep::Compare {
                id,
                value: v,
                target: value,
            })
        });
        let Descent::Vacant(slot) = descent else {
            tracing::debug!(value, "avl: duplicate insert rejected");
            if let Descent::Found(id) = descent {
                rec.push(AvlStep::Found { id, value });
            }
            return rec.finish(None);
        };
        let id = attach(&mut self.store, value, slot);
        rec.push(AvlStep::Insert {
            id,
            value,
            parent: slot.map(|(p, _)| p),
            side: slot.map(|(_, s)| s),
        });
        let parent = self.store.parent(id);
        rebalance(&mut self.store, parent, true, |r| {
            tracing::trace!(pivot = %r.pivot, dir = ?r.dir, "avl: rotation");
            rec.push(rotation_step(r))
        });
        tracing::debug!(value, %id, "avl: inserted");
        rec.finish(Some(id))
    }

    pub fn delete(&mut self, value: i64) -> Traced<bool, AvlStep> {
        let mut rec = Recorder::new();
        let descent = descend(&self.store, value, |id, v| {
            rec.push(AvlStep::Compare {
                id,
                value: v,
                target: value,
            })
        });
        let Descent::Found(target) = descent else {
            rec.push(AvlStep::NotFound {
                target: value,
                last: descent.last(),
            });
            return rec.finish(false);
        };
        rec.push(AvlStep::Found { id: target, value });
        let removed = unlink(&mut self.store, target, |id, v| {
            rec.push(AvlStep::Successor {
                id,
                value: v,
                target,
            })
        });
        rec.push(AvlStep::Delete {
            id: removed.removed,
            value: removed.value,
        });
        rebalance(&mut self.store, removed.parent, false, |r| {
            tracing::trace!(pivot = %r.pivot, dir = ?r.dir, "avl: rotation");
            rec.push(rotation_step(r))
        });
        tracing::debug!(value, removed = %removed.removed, "avl: deleted");
        rec.finish(true)
    }

    pub fn search(&self, value: i64) -> Traced<Option<NodeId>, AvlStep> {
        let mut rec = Recorder::new();
        let descent = descend(&self.store, value, |id, v| {
            rec.push(AvlStep::Compare {
                id,
                value: v,
                target: value,
            })
        });
        match descent {
            Descent::Found(id) => {
                rec.push(AvlStep::Found { id, value });
                rec.finish(Some(id))
            }
            Descent::Vacant(_) => {
                rec.push(AvlStep::NotFound {
                    target: value,
                    last: descent.last(),
                });
                rec.finish(None)
            }
        }
    }

    pub fn values(&self) -> Vec<i64> {
        crate::util::in_order(&self.store)
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        assert_avl(&self.store)
    }
}

impl SearchTree for AvlTree {
    type Step = AvlStep;

    fn store(&self) -> &NodeStore {
        &self.store
    }

    fn insert(&mut self, value: i64) -> Traced<Option<NodeId>, AvlStep> {
        AvlTree::insert(self, value)
    }

    fn delete(&mut self, value: i64) -> Traced<bool, AvlStep> {
        AvlTree::delete(self, value)
    }

    fn search(&mut self, value: i64) -> Traced<Option<NodeId>, AvlStep> {
        AvlTree::search(self, value)
    }

    fn assert_valid(&self) -> Result<(), String> {
        AvlTree::assert_valid(self)
    }
}
