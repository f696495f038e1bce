//! Move-to-root self-adjusting (splay) tree.
//!
//! Every operation ends by splaying the node it touched to the root: the
//! inserted node, the found node, or on a miss the last node visited.

pub mod types;
pub(crate) mod util;

use crate::bst::util::{attach, descend, unlink, Descent};
use crate::bst::DeleteCase;
use crate::check::assert_bst;
use crate::forest::SearchTree;
use crate::store::NodeStore;
use crate::trace::{Recorder, Traced};
use crate::types::{NodeId, Side};

pub use types::SplayStep;

use util::{l_splay, ll_splay, lr_splay, r_splay, rl_splay, rr_splay};

#[derive(Clone, Debug, Default)]
pub struct SplayTree {
    store: NodeStore,
}

/// Rotates `node` up until it is the root, one zig / zig-zig / zig-zag at a time.
fn splay(store: &mut NodeStore, node: NodeId, rec: &mut Recorder<SplayStep>) {
    let value = store.value(node);
    while let Some(p) = store.parent(node) {
        let node_side = store.side_of(node);
        match store.parent(p) {
            None => {
                rec.push(SplayStep::Zig {
                    id: node,
                    value,
                    parent: p,
                });
                if node_side == Some(Side::Left) {
                    r_splay(store, node, p);
                } else {
                    l_splay(store, node, p);
                }
            }
            Some(g) => {
                let parent_side = store.side_of(p);
                if parent_side == node_side {
                    rec.push(SplayStep::ZigZig {
                        id: node,
                        value,
                        parent: p,
                        grandparent: g,
                    });
                } else {
                    rec.push(SplayStep::ZigZag {
                        id: node,
                        value,
                        parent: p,
                        grandparent: g,
                    });
                }
                match (parent_side, node_side) {
                    (Some(Side::Left), Some(Side::Left)) => ll_splay(store, node, p, g),
                    (Some(Side::Left), _) => lr_splay(store, node, p, g),
                    (_, Some(Side::Left)) => rl_splay(store, node, p, g),
                    _ => rr_splay(store, node, p, g),
                }
            }
        }
    }
}

impl SplayTree {
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

    fn locate(&self, value: i64, rec: &mut Recorder<SplayStep>) -> Descent {
        descend(&self.store, value, |id, v| {
            rec.push(SplayStep::Compare {
                id,
                value: v,
                target: value,
            })
        })
    }

    /// Inserts `value` and splays the new node to the root.
    ///
    /// A duplicate is splayed to the root instead and `None` is returned.
    pub fn insert(&mut self, value: i64) -> Traced<Option<NodeId>, SplayStep> {
        let mut rec = Recorder::new();
        match self.locate(value, &mut rec) {
            Descent::Found(id) => {
                tracing::debug!(value, "splay: duplicate insert, promoting existing node");
                rec.push(SplayStep::Found { id, value });
                splay(&mut self.store, id, &mut rec);
                rec.finish(None)
            }
            Descent::Vacant(slot) => {
                let id = attach(&mut self.store, value, slot);
                rec.push(SplayStep::Insert {
                    id,
                    value,
                    parent: slot.map(|(p, _)| p),
                    side: slot.map(|(_, s)| s),
                });
                splay(&mut self.store, id, &mut rec);
                tracing::debug!(value, %id, "splay: inserted");
                rec.finish(Some(id))
            }
        }
    }

    /// Looks up `value`, splaying the found node or the last visited one.
    pub fn search(&mut self, value: i64) -> Traced<Option<NodeId>, SplayStep> {
        let mut rec = Recorder::new();
        let found = self.access(value, &mut rec);
        rec.finish(found)
    }

    fn access(&mut self, value: i64, rec: &mut Recorder<SplayStep>) -> Option<NodeId> {
        let descent = self.locate(value, rec);
        match descent {
            Descent::Found(id) => {
                rec.push(SplayStep::Found { id, value });
                splay(&mut self.store, id, rec);
                Some(id)
            }
            Descent::Vacant(_) => {
                let last = descent.last();
                rec.push(SplayStep::NotFound {
                    target: value,
                    last,
                });
                if let Some(last) = last {
                    splay(&mut self.store, last, rec);
                }
                None
            }
        }
    }

    /// Splays `value` to the root, then removes the root.
    ///
    /// On a miss the last visited node stays promoted and `false` is returned.
    pub fn delete(&mut self, value: i64) -> Traced<bool, SplayStep> {
        let mut rec = Recorder::new();
        let Some(target) = self.access(value, &mut rec) else {
            return rec.finish(false);
        };
        rec.push(SplayStep::Delete {
            id: target,
            value,
            case: DeleteCase::of(&self.store, target),
        });
        let removed = unlink(&mut self.store, target, |id, v| {
            rec.push(SplayStep::Successor {
                id,
                value: v,
                target,
            })
        });
        tracing::debug!(value, removed = %removed.removed, "splay: deleted");
        rec.finish(true)
    }

    pub fn values(&self) -> Vec<i64> {
        crate::util::in_order(&self.store)
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        assert_bst(&self.store)
    }
}

impl SearchTree for SplayTree {
    type Step = SplayStep;

    fn store(&self) -> &NodeStore {
        &self.store
    }

    fn insert(&mut self, value: i64) -> Traced<Option<NodeId>, SplayStep> {
        SplayTree::insert(self, value)
    }

    fn delete(&mut self, value: i64) -> Traced<bool, SplayStep> {
        SplayTree::delete(self, value)
    }

    fn search(&mut self, value: i64) -> Traced<Option<NodeId>, SplayStep> {
        SplayTree::search(self, value)
    }

    fn assert_valid(&self) -> Result<(), String> {
        SplayTree::assert_valid(self)
    }
}
