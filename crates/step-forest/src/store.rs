//! Arena that owns the topology of a single tree.
//!
//! The store hands out identifiers, rewrites edges and swaps values. It never
//! checks variant invariants; that is each engine's job (see [`crate::check`]).

use crate::types::{NodeId, Side, TreeNode};

/// Slot arena of [`TreeNode`] records plus the root pointer.
///
/// Freed slots are tombstoned rather than recycled, so a [`NodeId`] is never
/// handed out twice by the same store.
#[derive(Clone, Debug, Default)]
pub struct NodeStore {
    slots: Vec<Option<TreeNode>>,
    root: Option<NodeId>,
    len: usize,
}

impl NodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Number of live nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the node if `id` is live in this store.
    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Live nodes in identifier order.
    pub fn nodes(&self) -> impl Iterator<Item = &TreeNode> + '_ {
        self.slots.iter().filter_map(Option::as_ref)
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &TreeNode {
        match self.slots.get(id.index()) {
            Some(Some(node)) => node,
            _ => panic!("node {id} is not live in this store"),
        }
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut TreeNode {
        match self.slots.get_mut(id.index()) {
            Some(Some(node)) => node,
            _ => panic!("node {id} is not live in this store"),
        }
    }

    #[inline]
    pub fn value(&self, id: NodeId) -> i64 {
        self.node(id).value
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).p
    }

    #[inline]
    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).l
    }

    #[inline]
    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).r
    }

    #[inline]
    pub fn child(&self, id: NodeId, side: Side) -> Option<NodeId> {
        self.node(id).child(side)
    }

    #[inline]
    pub fn height(&self, id: NodeId) -> u32 {
        self.node(id).height
    }

    /// Which side of its parent `id` hangs on, `None` for the root.
    pub fn side_of(&self, id: NodeId) -> Option<Side> {
        let p = self.parent(id)?;
        if self.left(p) == Some(id) {
            Some(Side::Left)
        } else {
            Some(Side::Right)
        }
    }

    /// Creates a detached node holding `value`.
    pub fn allocate(&mut self, value: i64) -> NodeId {
        let id = NodeId(self.slots.len() as u32);
        self.slots.push(Some(TreeNode::new(id, value)));
        self.len += 1;
        id
    }

    /// Destroys a node. The caller must have unlinked it already.
    pub fn free(&mut self, id: NodeId) -> TreeNode {
        let node = match self.slots.get_mut(id.index()).and_then(Option::take) {
            Some(node) => node,
            None => panic!("node {id} freed twice"),
        };
        debug_assert_ne!(self.root, Some(id), "freeing the root without detaching it");
        self.len -= 1;
        node
    }

    /// Drops every node. Identifiers keep growing from where they were.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.root = None;
        self.len = 0;
    }

    /// Rewrites the `side` edge of `parent` and the back-pointer of `child`.
    pub fn link(&mut self, parent: NodeId, side: Side, child: Option<NodeId>) {
        let node = self.node_mut(parent);
        match side {
            Side::Left => node.l = child,
            Side::Right => node.r = child,
        }
        if let Some(child) = child {
            self.node_mut(child).p = Some(parent);
        }
    }

    /// Puts `new` into the slot `old` occupies under `parent`.
    ///
    /// With no parent, `new` becomes the root (or the tree empties).
    pub fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            Some(p) => {
                let side = if self.left(p) == Some(old) {
                    Side::Left
                } else {
                    Side::Right
                };
                self.link(p, side, new);
            }
            None => self.set_root(new),
        }
    }

    /// Makes `root` the root and clears its parent pointer.
    pub fn set_root(&mut self, root: Option<NodeId>) {
        if let Some(r) = root {
            self.node_mut(r).p = None;
        }
        self.root = root;
    }

    pub fn set_value(&mut self, id: NodeId, value: i64) {
        self.node_mut(id).value = value;
    }

    /// Exchanges the values of two nodes, keeping both identities in place.
    pub fn swap_values(&mut self, a: NodeId, b: NodeId) {
        let va = self.value(a);
        let vb = self.value(b);
        self.set_value(a, vb);
        self.set_value(b, va);
    }

    pub(crate) fn set_height(&mut self, id: NodeId, height: u32) {
        self.node_mut(id).height = height;
    }
}
