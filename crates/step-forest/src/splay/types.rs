use serde::Serialize;

use crate::bst::DeleteCase;
use crate::trace::Step;
use crate::types::{NodeId, Side};

/// Step records emitted by the splay engine.
///
/// `zig`, `zig-zig` and `zig-zag` are emitted before the rotation(s) they
/// name are applied, so a renderer can label why the tree moved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SplayStep {
    Compare { id: NodeId, value: i64, target: i64 },
    Found { id: NodeId, value: i64 },
    /// `last` is the node that gets splayed in place of the missing value.
    NotFound { target: i64, last: Option<NodeId> },
    Insert {
        id: NodeId,
        value: i64,
        parent: Option<NodeId>,
        side: Option<Side>,
    },
    /// The root `id` is about to be removed; `case` is its shape.
    Delete {
        id: NodeId,
        value: i64,
        case: DeleteCase,
    },
    Successor { id: NodeId, value: i64, target: NodeId },
    /// `parent` is the root; one rotation.
    Zig { id: NodeId, value: i64, parent: NodeId },
    /// `id` and `parent` are same-side children; rotate `grandparent`, then `parent`.
    ZigZig {
        id: NodeId,
        value: i64,
        parent: NodeId,
        grandparent: NodeId,
    },
    /// `id` and `parent` are opposite-side children; rotate `parent`, then `grandparent`.
    ZigZag {
        id: NodeId,
        value: i64,
        parent: NodeId,
        grandparent: NodeId,
    },
}

impl Step for SplayStep {
    const KINDS: &'static [&'static str] = &[
        "compare",
        "found",
        "not-found",
        "insert",
        "delete",
        "successor",
        "zig",
        "zig-zig",
        "zig-zag",
    ];

    fn kind(&self) -> &'static str {
        match self {
            SplayStep::Compare { .. } => "compare",
            SplayStep::Found { .. } => "found",
            SplayStep::NotFound { .. } => "not-found",
            SplayStep::Insert { .. } => "insert",
            SplayStep::Delete { .. } => "delete",
            SplayStep::Successor { .. } => "successor",
            SplayStep::Zig { .. } => "zig",
            SplayStep::ZigZig { .. } => "zig-zig",
            SplayStep::ZigZag { .. } => "zig-zag",
        }
    }
}
