use serde::Serialize;

use crate::trace::Step;
use crate::types::{NodeId, Side};

/// Step records emitted by the heap engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum HeapStep {
    /// Values of `id` and `other` were compared.
    Compare {
        id: NodeId,
        value: i64,
        other: NodeId,
        other_value: i64,
    },
    /// Values of `a` and `b` were exchanged; values are as before the swap.
    Swap {
        a: NodeId,
        a_value: i64,
        b: NodeId,
        b_value: i64,
    },
    /// New node linked at the next free slot.
    Insert {
        id: NodeId,
        value: i64,
        parent: Option<NodeId>,
        side: Option<Side>,
    },
    /// Value already present; nothing was created.
    Found { id: NodeId, value: i64 },
    /// `value` left the heap from node `id`.
    Delete { id: NodeId, value: i64 },
    /// The last node's `value` moved onto `to` and node `from` was freed.
    Move { from: NodeId, to: NodeId, value: i64 },
}

impl Step for HeapStep {
    const KINDS: &'static [&'static str] =
        &["compare", "swap", "insert", "found", "delete", "move"];

    fn kind(&self) -> &'static str {
        match self {
            HeapStep::Compare { .. } => "compare",
            HeapStep::Swap { .. } => "swap",
            HeapStep::Insert { .. } => "insert",
            HeapStep::Found { .. } => "found",
            HeapStep::Delete { .. } => "delete",
            HeapStep::Move { .. } => "move",
        }
    }
}
