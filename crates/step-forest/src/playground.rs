//! Caller-side session over one [`Forest`].
//!
//! The engines have no size ceiling. The playground is where a consuming
//! application's node limit lives, along with the variant-agnostic operation
//! surface a renderer drives.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PlaygroundError;
use crate::forest::{Forest, SearchTree, TreeKind};
use crate::trace::{Step, Trace};
use crate::types::NodeId;

/// Node limit applied when a config does not name one.
pub const DEFAULT_CAPACITY: usize = 31;

fn default_capacity() -> Option<usize> {
    Some(DEFAULT_CAPACITY)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaygroundConfig {
    pub kind: TreeKind,
    /// Maximum node count; `None` (JSON `null`) disables the limit.
    #[serde(default = "default_capacity")]
    pub capacity: Option<usize>,
}

impl PlaygroundConfig {
    pub fn new(kind: TreeKind) -> Self {
        Self {
            kind,
            capacity: default_capacity(),
        }
    }

    pub fn with_capacity(mut self, capacity: Option<usize>) -> Self {
        self.capacity = capacity;
        self
    }

    /// Parses a config such as `{"kind": "avl", "capacity": 15}`.
    pub fn from_json(json: &str) -> Result<Self, PlaygroundError> {
        serde_json::from_str(json).map_err(PlaygroundError::Config)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "value", rename_all = "kebab-case")]
pub enum Operation {
    Insert(i64),
    Delete(i64),
    Search(i64),
    ExtractMax,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Insert(v) => write!(f, "insert {v}"),
            Operation::Delete(v) => write!(f, "delete {v}"),
            Operation::Search(v) => write!(f, "search {v}"),
            Operation::ExtractMax => f.write_str("extract-max"),
        }
    }
}

/// Script tokens: `+5` insert, `-5` delete, `?5` search, `x` extract-max.
impl FromStr for Operation {
    type Err = PlaygroundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("x") {
            return Ok(Operation::ExtractMax);
        }
        let mut chars = s.chars();
        let op: fn(i64) -> Operation = match chars.next() {
            Some('+') => Operation::Insert,
            Some('-') => Operation::Delete,
            Some('?') => Operation::Search,
            _ => return Err(PlaygroundError::Parse(s.to_string())),
        };
        chars
            .as_str()
            .parse::<i64>()
            .map(op)
            .map_err(|_| PlaygroundError::Parse(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum Outcome {
    Inserted { id: NodeId },
    Duplicate,
    Deleted,
    Found { id: NodeId },
    NotFound,
    Extracted { value: i64 },
    Empty,
}

/// Result of one applied operation, with steps ready for a renderer.
#[derive(Clone, Debug, Serialize)]
pub struct Applied {
    pub op: Operation,
    pub outcome: Outcome,
    pub steps: Vec<Value>,
}

fn records<S: Step>(steps: Trace<S>) -> Result<Vec<Value>, PlaygroundError> {
    steps
        .map(|s| serde_json::to_value(s).map_err(PlaygroundError::Serialize))
        .collect()
}

fn run_search_tree<T: SearchTree>(
    tree: &mut T,
    kind: TreeKind,
    op: Operation,
) -> Result<(Outcome, Vec<Value>), PlaygroundError> {
    match op {
        Operation::Insert(v) => {
            let (id, steps) = tree.insert(v).into_parts();
            let outcome = id.map_or(Outcome::Duplicate, |id| Outcome::Inserted { id });
            Ok((outcome, records(steps)?))
        }
        Operation::Delete(v) => {
            let (deleted, steps) = tree.delete(v).into_parts();
            let outcome = if deleted {
                Outcome::Deleted
            } else {
                Outcome::NotFound
            };
            Ok((outcome, records(steps)?))
        }
        Operation::Search(v) => {
            let (id, steps) = tree.search(v).into_parts();
            let outcome = id.map_or(Outcome::NotFound, |id| Outcome::Found { id });
            Ok((outcome, records(steps)?))
        }
        Operation::ExtractMax => Err(PlaygroundError::Unsupported { kind, op }),
    }
}

#[derive(Clone, Debug)]
pub struct Playground {
    config: PlaygroundConfig,
    forest: Forest,
}

impl Playground {
    pub fn new(config: PlaygroundConfig) -> Self {
        Self {
            forest: Forest::new(config.kind),
            config,
        }
    }

    pub fn config(&self) -> &PlaygroundConfig {
        &self.config
    }

    pub fn kind(&self) -> TreeKind {
        self.forest.kind()
    }

    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    pub fn len(&self) -> usize {
        self.forest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forest.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.config
            .capacity
            .is_some_and(|limit| self.forest.len() >= limit)
    }

    /// Empties the tree, keeping kind and capacity.
    pub fn reset(&mut self) {
        self.forest.clear();
    }

    pub fn apply(&mut self, op: Operation) -> Result<Applied, PlaygroundError> {
        let kind = self.kind();
        if let (Operation::Insert(_), Some(limit)) = (op, self.config.capacity) {
            if self.forest.len() >= limit {
                tracing::debug!(%kind, limit, "playground: insert rejected at capacity");
                return Err(PlaygroundError::AtCapacity { limit });
            }
        }

        let (outcome, steps) = match &mut self.forest {
            Forest::Bst(t) => run_search_tree(t, kind, op)?,
            Forest::Avl(t) => run_search_tree(t, kind, op)?,
            Forest::Splay(t) => run_search_tree(t, kind, op)?,
            Forest::Heap(t) => match op {
                Operation::Insert(v) => {
                    let (id, steps) = t.insert(v).into_parts();
                    let outcome = id.map_or(Outcome::Duplicate, |id| Outcome::Inserted { id });
                    (outcome, records(steps)?)
                }
                Operation::ExtractMax => {
                    let (max, steps) = t.extract_max().into_parts();
                    let outcome = max.map_or(Outcome::Empty, |value| Outcome::Extracted { value });
                    (outcome, records(steps)?)
                }
                Operation::Delete(_) | Operation::Search(_) => {
                    return Err(PlaygroundError::Unsupported { kind, op });
                }
            },
        };
        tracing::debug!(%kind, %op, ?outcome, steps = steps.len(), "playground: applied");
        Ok(Applied {
            op,
            outcome,
            steps,
        })
    }
}
