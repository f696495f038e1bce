//! Node record and identifier types shared by every engine.
//!
//! All "pointers" are [`NodeId`] indices into a [`NodeStore`](crate::store::NodeStore)
//! arena. Links are plain `Option<NodeId>` fields, so rotations that briefly
//! leave two nodes pointing at each other are ordinary slot updates.

use std::fmt;

use serde::Serialize;

/// Opaque node identifier. Identifiers are never reused within one store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which child slot of a parent a node occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// One node of a tree.
///
/// `height` is only maintained by the AVL engine: 1 for a leaf, otherwise
/// `1 + max(height(l), height(r))`. Other engines leave it at 1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub id: NodeId,
    pub value: i64,
    pub p: Option<NodeId>,
    pub l: Option<NodeId>,
    pub r: Option<NodeId>,
    pub height: u32,
}

impl TreeNode {
    pub fn new(id: NodeId, value: i64) -> Self {
        Self {
            id,
            value,
            p: None,
            l: None,
            r: None,
            height: 1,
        }
    }

    #[inline]
    pub fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.l,
            Side::Right => self.r,
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.l.is_none() && self.r.is_none()
    }
}
