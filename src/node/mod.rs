//! The binary search tree shared by maps, sets, views and cursors.
//!
//! Nodes live in an arena and refer to each other by `NodeId`. The `left` and `right` links
//! are the only structural path to a node; the `parent` link is used solely for upward walks
//! (successor and predecessor search, rotations and rebalancing) and never decides when a
//! node is freed.

mod iter;

#[cfg(test)]
mod test;

use compare::Compare;
use std::cmp::Ordering::*;
use std::mem;
use std::ops::{Index, IndexMut};
use super::balance::Balance;

pub use self::iter::Iter;

/// The index of a node in its tree's arena.
///
/// Ids are stable across rotations. The id of a removed node is recycled by later
/// insertions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// The side of a node on which a child hangs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// The left side, holding smaller keys.
    Left,
    /// The right side, holding greater keys.
    Right,
}

impl Side {
    /// Returns the other side.
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Node<K, V, B> {
    /// The entry's key.
    pub key: K,
    /// The entry's value.
    pub value: V,
    left: Option<NodeId>,
    right: Option<NodeId>,
    parent: Option<NodeId>,
    balance: B,
}

impl<K, V, B> Node<K, V, B> where B: Default {
    fn new(key: K, value: V) -> Self {
        Node { key: key, value: value, left: None, right: None, parent: None, balance: B::default() }
    }
}

/// The spot a node was spliced out of, handed to `Balance::fix_after_remove`.
#[derive(Debug)]
pub struct Removal<B> {
    /// The parent of the spliced node and the side it hung from, or `None` if it was the root.
    pub at: Option<(NodeId, Side)>,
    /// The child that took the spliced node's place, if any.
    pub child: Option<NodeId>,
    /// The balance metadata the spliced node carried.
    pub balance: B,
}

/// A node's key and value after removal, plus the id of the slot that was physically freed.
///
/// When the removed node had two children, its in-order successor's entry is moved into it
/// and the successor's slot is the one freed.
#[derive(Debug)]
pub struct Removed<K, V> {
    pub key: K,
    pub value: V,
    pub freed: NodeId,
}

/// The node arena together with the root link.
#[derive(Debug)]
pub struct Nodes<K, V, B> {
    slots: Vec<Option<Node<K, V, B>>>,
    free: Vec<NodeId>,
    root: Option<NodeId>,
}

impl<K, V, B> Nodes<K, V, B> {
    fn with_capacity(capacity: usize) -> Self {
        Nodes { slots: Vec::with_capacity(capacity), free: vec![], root: None }
    }

    /// Returns the root node, if any.
    pub fn root(&self) -> Option<NodeId> { self.root }

    /// Returns the node's parent, if any.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> { self[id].parent }

    /// Returns the node's left child, if any.
    pub fn left(&self, id: NodeId) -> Option<NodeId> { self[id].left }

    /// Returns the node's right child, if any.
    pub fn right(&self, id: NodeId) -> Option<NodeId> { self[id].right }

    /// Returns the node's child on the given side, if any.
    pub fn child(&self, id: NodeId, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self[id].left,
            Side::Right => self[id].right,
        }
    }

    /// Returns a reference to the node's balance metadata.
    pub fn balance(&self, id: NodeId) -> &B { &self[id].balance }

    /// Returns a mutable reference to the node's balance metadata.
    pub fn balance_mut(&mut self, id: NodeId) -> &mut B { &mut self[id].balance }

    /// Returns the node's parent and the side of the parent the node hangs from.
    pub fn side_of(&self, id: NodeId) -> Option<(NodeId, Side)> {
        self[id].parent.map(|parent| {
            if self[parent].left == Some(id) { (parent, Side::Left) } else { (parent, Side::Right) }
        })
    }

    fn alloc(&mut self, node: Node<K, V, B>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    fn release(&mut self, id: NodeId) -> Node<K, V, B> {
        let node = self.slots[id.0].take().expect("released a vacant node slot");
        self.free.push(id);
        node
    }

    /// Links `child` under `parent` on the given side.
    fn set_child(&mut self, parent: NodeId, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self[parent].left = child,
            Side::Right => self[parent].right = child,
        }

        if let Some(child) = child { self[child].parent = Some(parent); }
    }

    /// Links `child` into the given spot, or makes it the root if the spot is `None`.
    fn attach(&mut self, at: Option<(NodeId, Side)>, child: Option<NodeId>) {
        match at {
            Some((parent, side)) => self.set_child(parent, side, child),
            None => {
                self.root = child;
                if let Some(child) = child { self[child].parent = None; }
            }
        }
    }

    /// Rotates the subtree rooted at `id` down towards `side` and returns the subtree's new
    /// root, which is `id`'s former child on the opposite side.
    ///
    /// `rotate(id, Side::Left)` is a left rotation.
    pub fn rotate(&mut self, id: NodeId, side: Side) -> NodeId {
        let up = side.opposite();
        let pivot = self.child(id, up).expect("rotation without a pivot child");
        let at = self.side_of(id);
        let inner = self.child(pivot, side);

        self.set_child(id, up, inner);
        self.attach(at, Some(pivot));
        self.set_child(pivot, side, Some(id));

        trace!("rotated {:?} {:?} around {:?}", id, side, pivot);
        pivot
    }

    /// Returns the most extreme node on the given side of the subtree rooted at `id`.
    pub fn extremum(&self, mut id: NodeId, side: Side) -> NodeId {
        while let Some(child) = self.child(id, side) { id = child; }
        id
    }

    /// Returns the node's in-order neighbor on the given side: its successor for `Right`, its
    /// predecessor for `Left`.
    pub fn step(&self, id: NodeId, side: Side) -> Option<NodeId> {
        if let Some(child) = self.child(id, side) {
            return Some(self.extremum(child, side.opposite()));
        }

        let mut id = id;

        while let Some((parent, from)) = self.side_of(id) {
            if from != side { return Some(parent); }
            id = parent;
        }

        None
    }

    /// Returns the node's in-order successor.
    pub fn next(&self, id: NodeId) -> Option<NodeId> { self.step(id, Side::Right) }

    /// Returns the node's in-order predecessor.
    pub fn prev(&self, id: NodeId) -> Option<NodeId> { self.step(id, Side::Left) }
}

impl<K, V, B> Index<NodeId> for Nodes<K, V, B> {
    type Output = Node<K, V, B>;

    fn index(&self, id: NodeId) -> &Node<K, V, B> {
        self.slots[id.0].as_ref().expect("dangling node id")
    }
}

impl<K, V, B> IndexMut<NodeId> for Nodes<K, V, B> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<K, V, B> {
        self.slots[id.0].as_mut().expect("dangling node id")
    }
}

/// A binary search tree with cached extremes, balanced by `B`.
#[derive(Debug)]
pub struct Tree<K, V, C, B> {
    nodes: Nodes<K, V, B>,
    first: Option<NodeId>,
    last: Option<NodeId>,
    len: usize,
    cmp: C,
    default_min: Option<K>,
    default_max: Option<K>,
}

impl<K, V, C, B> Tree<K, V, C, B> where B: Balance {
    pub fn new(cmp: C) -> Self {
        Tree {
            nodes: Nodes::with_capacity(0),
            first: None,
            last: None,
            len: 0,
            cmp: cmp,
            default_min: None,
            default_max: None,
        }
    }

    pub fn nodes(&self) -> &Nodes<K, V, B> { &self.nodes }

    pub fn len(&self) -> usize { self.len }

    pub fn is_empty(&self) -> bool { self.len == 0 }

    pub fn cmp(&self) -> &C { &self.cmp }

    /// Returns the cached minimum node.
    pub fn first(&self) -> Option<NodeId> { self.first }

    /// Returns the cached maximum node.
    pub fn last(&self) -> Option<NodeId> { self.last }

    pub fn key(&self, id: NodeId) -> &K { &self.nodes[id].key }

    pub fn entry(&self, id: NodeId) -> (&K, &V) {
        let node = &self.nodes[id];
        (&node.key, &node.value)
    }

    pub fn entry_mut(&mut self, id: NodeId) -> (&K, &mut V) {
        let node = &mut self.nodes[id];
        (&node.key, &mut node.value)
    }

    pub fn default_min(&self) -> Option<&K> { self.default_min.as_ref() }

    pub fn default_max(&self) -> Option<&K> { self.default_max.as_ref() }

    pub fn set_default_min(&mut self, key: K) { self.default_min = Some(key); }

    pub fn set_default_max(&mut self, key: K) { self.default_max = Some(key); }

    pub fn find<Q: ?Sized>(&self, key: &Q) -> Option<NodeId> where C: Compare<Q, K> {
        let mut link = self.nodes.root;

        while let Some(id) = link {
            link = match self.cmp.compare(key, &self.nodes[id].key) {
                Equal => return Some(id),
                Less => self.nodes[id].left,
                Greater => self.nodes[id].right,
            };
        }

        None
    }

    /// Returns the node closest to `key` on the given side: the greatest node less than `key`
    /// for `Left` and the least node greater than `key` for `Right`. If `inclusive` is
    /// `true`, a node equal to `key` is returned instead when present.
    pub fn closest<Q: ?Sized>(&self, key: &Q, side: Side, inclusive: bool) -> Option<NodeId>
        where C: Compare<Q, K> {

        let mut link = self.nodes.root;
        let mut closest = None;

        while let Some(id) = link {
            link = match self.cmp.compare(key, &self.nodes[id].key) {
                Equal if inclusive => return Some(id),
                Equal => self.nodes.child(id, side),
                order => if (order == Greater) == (side == Side::Left) {
                    closest = Some(id);
                    self.nodes.child(id, side.opposite())
                } else {
                    self.nodes.child(id, side)
                },
            };
        }

        closest
    }

    pub fn lower<Q: ?Sized>(&self, key: &Q) -> Option<NodeId> where C: Compare<Q, K> {
        self.closest(key, Side::Left, false)
    }

    pub fn floor<Q: ?Sized>(&self, key: &Q) -> Option<NodeId> where C: Compare<Q, K> {
        self.closest(key, Side::Left, true)
    }

    pub fn ceiling<Q: ?Sized>(&self, key: &Q) -> Option<NodeId> where C: Compare<Q, K> {
        self.closest(key, Side::Right, true)
    }

    pub fn higher<Q: ?Sized>(&self, key: &Q) -> Option<NodeId> where C: Compare<Q, K> {
        self.closest(key, Side::Right, false)
    }

    /// Inserts an entry, returning its node and the value it replaced, if any.
    pub fn insert(&mut self, key: K, value: V) -> (NodeId, Option<V>) where C: Compare<K> {
        let mut at = None;
        let mut link = self.nodes.root;

        while let Some(id) = link {
            let side = match self.cmp.compare(&key, &self.nodes[id].key) {
                Equal => return (id, Some(mem::replace(&mut self.nodes[id].value, value))),
                Less => Side::Left,
                Greater => Side::Right,
            };

            at = Some((id, side));
            link = self.nodes.child(id, side);
        }

        let id = self.nodes.alloc(Node::new(key, value));
        self.nodes.attach(at, Some(id));
        self.len += 1;

        match at {
            None => {
                self.first = Some(id);
                self.last = Some(id);
            }
            Some((parent, Side::Left)) if self.first == Some(parent) => self.first = Some(id),
            Some((parent, Side::Right)) if self.last == Some(parent) => self.last = Some(id),
            _ => {}
        }

        B::fix_after_insert(&mut self.nodes, id);
        (id, None)
    }

    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Option<(K, V)> where C: Compare<Q, K> {
        self.find(key).map(|id| {
            let removed = self.remove_node(id);
            (removed.key, removed.value)
        })
    }

    /// Removes the given node's entry from the tree.
    ///
    /// A node with two children is never spliced out directly: its in-order successor's entry
    /// is moved into it and the successor's node is spliced out instead.
    pub fn remove_node(&mut self, id: NodeId) -> Removed<K, V> {
        let spliced = match (self.nodes[id].left, self.nodes[id].right) {
            (Some(_), Some(right)) => self.nodes.extremum(right, Side::Left),
            _ => id,
        };

        if self.first == Some(id) { self.first = self.nodes.next(id); }

        if self.last == Some(id) {
            self.last = self.nodes.prev(id);
        } else if self.last == Some(spliced) {
            // the maximum entry moves into `id`
            self.last = Some(id);
        }

        let at = self.nodes.side_of(spliced);
        let child = self.nodes[spliced].left.or(self.nodes[spliced].right);
        self.nodes.attach(at, child);

        let node = self.nodes.release(spliced);
        self.len -= 1;

        let (key, value) = if spliced == id {
            (node.key, node.value)
        } else {
            trace!("moved successor {:?} into {:?}", spliced, id);
            let target = &mut self.nodes[id];
            (mem::replace(&mut target.key, node.key), mem::replace(&mut target.value, node.value))
        };

        B::fix_after_remove(&mut self.nodes, Removal { at: at, child: child, balance: node.balance });
        Removed { key: key, value: value, freed: spliced }
    }

    pub fn clear(&mut self) {
        debug!("clearing tree of {} nodes", self.len);
        self.nodes = Nodes::with_capacity(0);
        self.first = None;
        self.last = None;
        self.len = 0;
    }

    /// Returns a structurally independent copy of the tree in a compact arena.
    pub fn copy(&self) -> Self where K: Clone, V: Clone, C: Clone {
        let mut nodes = Nodes::with_capacity(self.len);
        let mut stack: Vec<(NodeId, Option<(NodeId, Side)>)> =
            self.nodes.root.into_iter().map(|root| (root, None)).collect();

        while let Some((src, at)) = stack.pop() {
            let src = &self.nodes[src];

            let id = nodes.alloc(Node {
                key: src.key.clone(),
                value: src.value.clone(),
                left: None,
                right: None,
                parent: None,
                balance: src.balance.clone(),
            });

            nodes.attach(at, Some(id));

            if let Some(right) = src.right { stack.push((right, Some((id, Side::Right)))); }
            if let Some(left) = src.left { stack.push((left, Some((id, Side::Left)))); }
        }

        let first = nodes.root.map(|root| nodes.extremum(root, Side::Left));
        let last = nodes.root.map(|root| nodes.extremum(root, Side::Right));
        debug!("copied tree of {} nodes", self.len);

        Tree {
            nodes: nodes,
            first: first,
            last: last,
            len: self.len,
            cmp: self.cmp.clone(),
            default_min: self.default_min.clone(),
            default_max: self.default_max.clone(),
        }
    }
}
