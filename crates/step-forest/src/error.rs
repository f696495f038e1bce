use thiserror::Error;

use crate::forest::TreeKind;
use crate::playground::Operation;

#[derive(Debug, Error)]
pub enum PlaygroundError {
    #[error("tree is at capacity ({limit} nodes)")]
    AtCapacity { limit: usize },
    #[error("{op} is not supported by the {kind} engine")]
    Unsupported { kind: TreeKind, op: Operation },
    #[error("unknown tree kind: {0}")]
    UnknownKind(String),
    #[error("invalid operation: {0}")]
    Parse(String),
    #[error("invalid configuration: {0}")]
    Config(#[source] serde_json::Error),
    #[error("failed to serialize step: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
