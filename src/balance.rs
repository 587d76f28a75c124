//! Balancing strategies for the tree.
//!
//! A strategy stores its metadata in every node and restores its invariant after the tree
//! core links in a new node or splices one out. Both strategies keep the height of the tree
//! logarithmic in its length, so every point operation is O(log n).

use std::cmp;
use std::fmt::Debug;
use super::node::{NodeId, Nodes, Removal, Side};

/// Balance metadata for a single binary search tree node, and the fix-ups that maintain it.
pub trait Balance: Clone + Debug + Default {
    /// Restores the invariant after `node` was linked in as a leaf.
    ///
    /// `node` carries `Self::default()` metadata.
    fn fix_after_insert<K, V>(nodes: &mut Nodes<K, V, Self>, node: NodeId);

    /// Restores the invariant after a node was spliced out of the tree.
    fn fix_after_remove<K, V>(nodes: &mut Nodes<K, V, Self>, removal: Removal<Self>);
}

/// Metadata for the AVL balance scheme: the height of the node's subtree.
///
/// The subtrees of every node differ in height by at most one. An empty subtree has height
/// `-1`, so a leaf has height `0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Avl {
    height: i32,
}

impl Avl {
    /// Returns the height of the node's subtree.
    pub fn height(&self) -> i32 { self.height }

    fn height_of<K, V>(nodes: &Nodes<K, V, Self>, link: Option<NodeId>) -> i32 {
        link.map_or(-1, |id| nodes.balance(id).height)
    }

    fn factor<K, V>(nodes: &Nodes<K, V, Self>, id: NodeId) -> i32 {
        Self::height_of(nodes, nodes.left(id)) - Self::height_of(nodes, nodes.right(id))
    }

    fn update<K, V>(nodes: &mut Nodes<K, V, Self>, id: NodeId) {
        let height = 1 + cmp::max(Self::height_of(nodes, nodes.left(id)),
                                  Self::height_of(nodes, nodes.right(id)));
        nodes.balance_mut(id).height = height;
    }

    // Returns the root of the rebalanced subtree
    fn rebalance<K, V>(nodes: &mut Nodes<K, V, Self>, id: NodeId) -> NodeId {
        Self::update(nodes, id);

        let factor = Self::factor(nodes, id);
        if factor.abs() <= 1 { return id; }

        let heavy = if factor > 1 { Side::Left } else { Side::Right };
        let child = nodes.child(id, heavy).expect("heavy side of an AVL node is empty");
        let lean = Self::factor(nodes, child);

        if (heavy == Side::Left && lean < 0) || (heavy == Side::Right && lean > 0) {
            let top = nodes.rotate(child, heavy);
            Self::update(nodes, child);
            Self::update(nodes, top);
        }

        let top = nodes.rotate(id, heavy.opposite());
        Self::update(nodes, id);
        Self::update(nodes, top);
        top
    }

    fn retrace<K, V>(nodes: &mut Nodes<K, V, Self>, mut link: Option<NodeId>) {
        while let Some(id) = link {
            let top = Self::rebalance(nodes, id);
            link = nodes.parent(top);
        }
    }
}

impl Balance for Avl {
    fn fix_after_insert<K, V>(nodes: &mut Nodes<K, V, Self>, node: NodeId) {
        let parent = nodes.parent(node);
        Self::retrace(nodes, parent);
    }

    fn fix_after_remove<K, V>(nodes: &mut Nodes<K, V, Self>, removal: Removal<Self>) {
        Self::retrace(nodes, removal.at.map(|(parent, _)| parent));
    }
}

/// A node color in the red-black balance scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    /// Red.
    Red,
    /// Black.
    Black,
}

/// Metadata for the red-black balance scheme: the node's color.
///
/// The root is black, a red node has no red child, and every path from a node to an empty
/// subtree below it passes through the same number of black nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RedBlack {
    color: Color,
}

impl RedBlack {
    /// Returns the node's color.
    pub fn color(&self) -> Color { self.color }

    fn is_red<K, V>(nodes: &Nodes<K, V, Self>, link: Option<NodeId>) -> bool {
        link.map_or(false, |id| nodes.balance(id).color == Color::Red)
    }

    fn paint<K, V>(nodes: &mut Nodes<K, V, Self>, id: NodeId, color: Color) {
        nodes.balance_mut(id).color = color;
    }
}

impl Default for RedBlack {
    fn default() -> Self { RedBlack { color: Color::Red } }
}

impl Balance for RedBlack {
    fn fix_after_insert<K, V>(nodes: &mut Nodes<K, V, Self>, node: NodeId) {
        let mut node = node;

        loop {
            let parent = match nodes.parent(node) {
                Some(parent) if Self::is_red(nodes, Some(parent)) => parent,
                _ => break,
            };

            let (grandparent, side) = nodes.side_of(parent).expect("red root");
            let uncle = nodes.child(grandparent, side.opposite());

            if let Some(uncle) = uncle.filter(|&uncle| Self::is_red(nodes, Some(uncle))) {
                Self::paint(nodes, parent, Color::Black);
                Self::paint(nodes, uncle, Color::Black);
                Self::paint(nodes, grandparent, Color::Red);
                node = grandparent;
            } else {
                let mut parent = parent;

                // an inner grandchild is rotated to the outside first
                if nodes.child(parent, side.opposite()) == Some(node) {
                    node = parent;
                    parent = nodes.rotate(node, side);
                }

                Self::paint(nodes, parent, Color::Black);
                Self::paint(nodes, grandparent, Color::Red);
                nodes.rotate(grandparent, side.opposite());
            }
        }

        if let Some(root) = nodes.root() { Self::paint(nodes, root, Color::Black); }
    }

    fn fix_after_remove<K, V>(nodes: &mut Nodes<K, V, Self>, removal: Removal<Self>) {
        if removal.balance.color == Color::Red { return; }

        let mut node = removal.child;
        let mut at = removal.at;

        // `node` carries an extra black until it is red or the root
        while let Some((parent, side)) = at {
            if Self::is_red(nodes, node) { break; }

            let mut sibling = nodes.child(parent, side.opposite()).expect("doubly black node without a sibling");

            if Self::is_red(nodes, Some(sibling)) {
                Self::paint(nodes, sibling, Color::Black);
                Self::paint(nodes, parent, Color::Red);
                nodes.rotate(parent, side);
                sibling = nodes.child(parent, side.opposite()).expect("doubly black node without a sibling");
            }

            let near = nodes.child(sibling, side);
            let far = nodes.child(sibling, side.opposite());

            if !Self::is_red(nodes, near) && !Self::is_red(nodes, far) {
                Self::paint(nodes, sibling, Color::Red);
                node = Some(parent);
                at = nodes.side_of(parent);
                continue;
            }

            if !Self::is_red(nodes, far) {
                if let Some(near) = near { Self::paint(nodes, near, Color::Black); }
                Self::paint(nodes, sibling, Color::Red);
                sibling = nodes.rotate(sibling, side.opposite());
            }

            let color = nodes.balance(parent).color;
            Self::paint(nodes, sibling, color);
            Self::paint(nodes, parent, Color::Black);
            if let Some(far) = nodes.child(sibling, side.opposite()) { Self::paint(nodes, far, Color::Black); }
            nodes.rotate(parent, side);

            node = nodes.root();
            break;
        }

        if let Some(node) = node { Self::paint(nodes, node, Color::Black); }
    }
}
