use serde::Serialize;

use crate::trace::Step;
use crate::types::{NodeId, Side};

/// Step records emitted by the unbalanced search engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum BstStep {
    /// `target` was compared against the value held by `id`.
    Compare { id: NodeId, value: i64, target: i64 },
    /// The walk reached the node holding `value`.
    Found { id: NodeId, value: i64 },
    /// The walk fell off the tree; `last` is the final node visited.
    NotFound { target: i64, last: Option<NodeId> },
    /// A new node was linked under `parent` (none for a new root).
    Insert {
        id: NodeId,
        value: i64,
        parent: Option<NodeId>,
        side: Option<Side>,
    },
    /// `id` is the in-order successor of `target`; its value is copied onto `target`.
    Successor { id: NodeId, value: i64, target: NodeId },
    /// Node `id` was unlinked and freed.
    Delete { id: NodeId, value: i64 },
}

impl Step for BstStep {
    const KINDS: &'static [&'static str] = &[
        "compare",
        "found",
        "not-found",
        "insert",
        "successor",
        "delete",
    ];

    fn kind(&self) -> &'static str {
        match self {
            BstStep::Compare { .. } => "compare",
            BstStep::Found { .. } => "found",
            BstStep::NotFound { .. } => "not-found",
            BstStep::Insert { .. } => "insert",
            BstStep::Successor { .. } => "successor",
            BstStep::Delete { .. } => "delete",
        }
    }
}
