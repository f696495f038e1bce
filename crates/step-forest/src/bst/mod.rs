//! Unbalanced binary search tree.
//!
//! Plain BST insert / delete / search over a [`NodeStore`], no rebalancing.

pub mod types;
pub(crate) mod util;

use crate::check::assert_bst;
use crate::forest::SearchTree;
use crate::store::NodeStore;
use crate::trace::{Recorder, Traced};
use crate::types::NodeId;

pub use types::BstStep;
pub use util::DeleteCase;

use util::{attach, descend, unlink, Descent};

#[derive(Clone, Debug, Default)]
pub struct BstTree {
    store: NodeStore,
}

impl BstTree {
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

    /// Inserts `value`; `None` means it was already present.
    pub fn insert(&mut self, value: i64) -> Traced<Option<NodeId>, BstStep> {
        let mut rec = Recorder::new();
        let descent = descend(&self.store, value, |id, v| {
            rec.push(BstStep::Compare {
                id,
                value: v,
                target: value,
            })
        });
        match descent {
            Descent::Found(id) => {
                tracing::debug!(value, "bst: duplicate insert rejected");
                rec.push(BstStep::Found { id, value });
                rec.finish(None)
            }
            Descent::Vacant(slot) => {
                let id = attach(&mut self.store, value, slot);
                rec.push(BstStep::Insert {
                    id,
                    value,
                    parent: slot.map(|(p, _)| p),
                    side: slot.map(|(_, s)| s),
                });
                tracing::debug!(value, %id, "bst: inserted");
                rec.finish(Some(id))
            }
        }
    }

    /// Deletes `value`; `false` when it is absent.
    pub fn delete(&mut self, value: i64) -> Traced<bool, BstStep> {
        let mut rec = Recorder::new();
        let descent = descend(&self.store, value, |id, v| {
            rec.push(BstStep::Compare {
                id,
                value: v,
                target: value,
            })
        });
        let Descent::Found(target) = descent else {
            rec.push(BstStep::NotFound {
                target: value,
                last: descent.last(),
            });
            return rec.finish(false);
        };
        rec.push(BstStep::Found { id: target, value });
        let removed = unlink(&mut self.store, target, |id, v| {
            rec.push(BstStep::Successor {
                id,
                value: v,
                target,
            })
        });
        rec.push(BstStep::Delete {
            id: removed.removed,
            value: removed.value,
        });
        tracing::debug!(value, removed = %removed.removed, "bst: deleted");
        rec.finish(true)
    }

    pub fn search(&self, value: i64) -> Traced<Option<NodeId>, BstStep> {
        let mut rec = Recorder::new();
        let descent = descend(&self.store, value, |id, v| {
            rec.push(BstStep::Compare {
                id,
                value: v,
                target: value,
            })
        });
        match descent {
            Descent::Found(id) => {
                rec.push(BstStep::Found { id, value });
                rec.finish(Some(id))
            }
            Descent::Vacant(_) => {
                rec.push(BstStep::NotFound {
                    target: value,
                    last: descent.last(),
                });
                rec.finish(None)
            }
        }
    }

    /// Values in ascending order.
    pub fn values(&self) -> Vec<i64> {
        crate::util::in_order(&self.store)
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        assert_bst(&self.store)
    }
}

impl SearchTree for BstTree {
    type Step = BstStep;

    fn store(&self) -> &NodeStore {
        &self.store
    }

    fn insert(&mut self, value: i64) -> Traced<Option<NodeId>, BstStep> {
        BstTree::insert(self, value)
    }

    fn delete(&mut self, value: i64) -> Traced<bool, BstStep> {
        BstTree::delete(self, value)
    }

    fn search(&mut self, value: i64) -> Traced<Option<NodeId>, BstStep> {
        BstTree::search(self, value)
    }

    fn assert_valid(&self) -> Result<(), String> {
        BstTree::assert_valid(self)
    }
}
