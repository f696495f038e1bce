//! Closed set of tree variants.
//!
//! The kind of a tree travels with its data: a [`Forest`] is one engine value
//! tagged by its [`TreeKind`], never inferred from the shape of a store.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::avl::AvlTree;
use crate::bst::BstTree;
use crate::error::PlaygroundError;
use crate::heap::HeapTree;
use crate::splay::SplayTree;
use crate::store::NodeStore;
use crate::trace::{Step, Traced};
use crate::types::NodeId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeKind {
    Bst,
    Avl,
    Heap,
    Splay,
}

impl TreeKind {
    pub const ALL: [TreeKind; 4] = [TreeKind::Bst, TreeKind::Avl, TreeKind::Heap, TreeKind::Splay];

    pub fn as_str(self) -> &'static str {
        match self {
            TreeKind::Bst => "bst",
            TreeKind::Avl => "avl",
            TreeKind::Heap => "heap",
            TreeKind::Splay => "splay",
        }
    }

    /// Step kinds the engine of this variant can emit.
    pub fn step_kinds(self) -> &'static [&'static str] {
        match self {
            TreeKind::Bst => crate::bst::BstStep::KINDS,
            TreeKind::Avl => crate::avl::AvlStep::KINDS,
            TreeKind::Heap => crate::heap::HeapStep::KINDS,
            TreeKind::Splay => crate::splay::SplayStep::KINDS,
        }
    }
}

impl fmt::Display for TreeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TreeKind {
    type Err = PlaygroundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TreeKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| PlaygroundError::UnknownKind(s.to_string()))
    }
}

/// Shared contract of the three search-ordered engines.
///
/// The heap does not implement it: it removes only its maximum, so it has
/// no by-value delete to offer.
pub trait SearchTree {
    type Step: Step;

    fn store(&self) -> &NodeStore;

    /// `None` when the value was already present.
    fn insert(&mut self, value: i64) -> Traced<Option<NodeId>, Self::Step>;

    /// `false` when the value was absent.
    fn delete(&mut self, value: i64) -> Traced<bool, Self::Step>;

    /// Takes `&mut self` because a splay search restructures the tree.
    fn search(&mut self, value: i64) -> Traced<Option<NodeId>, Self::Step>;

    fn assert_valid(&self) -> Result<(), String>;
}

/// One tree of any variant.
#[derive(Clone, Debug)]
pub enum Forest {
    Bst(BstTree),
    Avl(AvlTree),
    Heap(HeapTree),
    Splay(SplayTree),
}

impl Forest {
    pub fn new(kind: TreeKind) -> Self {
        match kind {
            TreeKind::Bst => Forest::Bst(BstTree::new()),
            TreeKind::Avl => Forest::Avl(AvlTree::new()),
            TreeKind::Heap => Forest::Heap(HeapTree::new()),
            TreeKind::Splay => Forest::Splay(SplayTree::new()),
        }
    }

    pub fn kind(&self) -> TreeKind {
        match self {
            Forest::Bst(_) => TreeKind::Bst,
            Forest::Avl(_) => TreeKind::Avl,
            Forest::Heap(_) => TreeKind::Heap,
            Forest::Splay(_) => TreeKind::Splay,
        }
    }

    pub fn store(&self) -> &NodeStore {
        match self {
            Forest::Bst(t) => t.store(),
            Forest::Avl(t) => t.store(),
            Forest::Heap(t) => t.store(),
            Forest::Splay(t) => t.store(),
        }
    }

    pub fn len(&self) -> usize {
        self.store().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store().is_empty()
    }

    pub fn clear(&mut self) {
        match self {
            Forest::Bst(t) => t.clear(),
            Forest::Avl(t) => t.clear(),
            Forest::Heap(t) => t.clear(),
            Forest::Splay(t) => t.clear(),
        }
    }

    /// Values in the variant's natural order: ascending for search trees,
    /// breadth-first for the heap.
    pub fn values(&self) -> Vec<i64> {
        match self {
            Forest::Bst(t) => t.values(),
            Forest::Avl(t) => t.values(),
            Forest::Heap(t) => t.values(),
            Forest::Splay(t) => t.values(),
        }
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        match self {
            Forest::Bst(t) => t.assert_valid(),
            Forest::Avl(t) => t.assert_valid(),
            Forest::Heap(t) => t.assert_valid(),
            Forest::Splay(t) => t.assert_valid(),
        }
    }
}
