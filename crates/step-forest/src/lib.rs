//! Binary-tree engines that record every primitive step they take.
//!
//! Four variants share one arena node representation:
//!
//! - **BST** — unbalanced search tree.
//! - **AVL** — height-balanced search tree with single and double rotations.
//! - **Heap** — max-heap kept as a complete tree of linked nodes.
//! - **Splay** — move-to-root self-adjusting search tree.
//!
//! Instead of owning references, all links are [`NodeId`] indices into a
//! [`NodeStore`]. Every operation mutates the tree to completion and returns
//! a [`Traced`] status plus a one-shot [`Trace`] of step records that a
//! renderer can replay.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`NodeId`], [`Side`], [`TreeNode`] |
//! [`store`] | [`NodeStore`] arena: allocate, link, replace, swap values |
//! [`util`] | traversals (`first`, `next`, `level_order`, …) and [`util::print`] |
//! [`trace`] | [`Step`], [`Trace`], [`Traced`] |
//! [`bst`] | [`BstTree`] |
//! [`avl`] | [`AvlTree`] |
//! [`heap`] | [`HeapTree`] |
//! [`splay`] | [`SplayTree`] |
//! [`check`] | per-variant invariant validators |
//! [`forest`] | [`TreeKind`], [`Forest`], [`SearchTree`] |
//! [`playground`] | capacity-limited session used by the `tree-trace` binary |
//!
//! # Example
//!
//! ```
//! use step_forest::{AvlStep, AvlTree};
//!
//! let mut tree = AvlTree::new();
//! tree.insert(1);
//! tree.insert(2);
//! let (id, steps) = tree.insert(3).into_parts();
//! assert!(id.is_some());
//! let rotations = steps
//!     .filter(|s| matches!(s, AvlStep::RotateLeft { .. }))
//!     .count();
//! assert_eq!(rotations, 1);
//! assert_eq!(tree.values(), vec![1, 2, 3]);
//! ```

pub mod avl;
pub mod bst;
pub mod check;
pub mod error;
pub mod forest;
pub mod heap;
pub mod playground;
pub mod splay;
pub mod store;
pub mod trace;
pub mod types;
pub mod util;

pub use avl::{AvlStep, AvlTree};
pub use bst::{BstStep, BstTree, DeleteCase};
pub use error::PlaygroundError;
pub use forest::{Forest, SearchTree, TreeKind};
pub use heap::{HeapStep, HeapTree};
pub use playground::{Applied, Operation, Outcome, Playground, PlaygroundConfig};
pub use splay::{SplayStep, SplayTree};
pub use store::NodeStore;
pub use trace::{Step, Trace, Traced};
pub use types::{NodeId, Side, TreeNode};
