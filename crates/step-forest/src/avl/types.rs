use serde::Serialize;

use crate::trace::Step;
use crate::types::{NodeId, Side};

/// Step records emitted by the AVL engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum AvlStep {
    Compare { id: NodeId, value: i64, target: i64 },
    Found { id: NodeId, value: i64 },
    NotFound { target: i64, last: Option<NodeId> },
    Insert {
        id: NodeId,
        value: i64,
        parent: Option<NodeId>,
        side: Option<Side>,
    },
    Successor { id: NodeId, value: i64, target: NodeId },
    Delete { id: NodeId, value: i64 },
    /// Left rotation at `pivot`; its right child `child` takes its place.
    RotateLeft {
        pivot: NodeId,
        pivot_value: i64,
        child: NodeId,
        child_value: i64,
    },
    /// Right rotation at `pivot`; its left child `child` takes its place.
    RotateRight {
        pivot: NodeId,
        pivot_value: i64,
        child: NodeId,
        child_value: i64,
    },
}

impl Step for AvlStep {
    const KINDS: &'static [&'static str] = &[
        "compare",
        "found",
        "not-found",
        "insert",
        "successor",
        "delete",
        "rotate-left",
        "rotate-right",
    ];

    fn kind(&self) -> &'static str {
        match self {
            AvlStep::Compare { .. } => "compare",
            AvlStep::Found { .. } => "found",
            AvlStep::NotFound { .. } => "not-found",
            AvlStep::Insert { .. } => "insert",
            AvlStep::Successor { .. } => "successor",
            AvlStep::Delete { .. } => "delete",
            AvlStep::RotateLeft { .. } => "rotate-left",
            AvlStep::RotateRight { .. } => "rotate-right",
        }
    }
}

/// A rotation applied during a rebalance walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Rotation {
    /// Direction the pivot moves.
    pub dir: Side,
    pub pivot: NodeId,
    pub pivot_value: i64,
    pub child: NodeId,
    pub child_value: i64,
}
