use super::{NodeId, Nodes, Side};

/// An in-order iterator over the nodes between two endpoints, inclusive.
pub struct Iter<'a, K: 'a, V: 'a, B: 'a> {
    nodes: &'a Nodes<K, V, B>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    size: usize,
    exact: bool,
}

impl<'a, K, V, B> Iter<'a, K, V, B> {
    /// Creates an iterator yielding `front` through `back`.
    ///
    /// `size` is the number of nodes in that range if `exact` is `true` and an upper bound on
    /// it otherwise. Either both endpoints or neither must be given.
    pub fn new(nodes: &'a Nodes<K, V, B>, front: Option<NodeId>, back: Option<NodeId>,
               size: usize, exact: bool) -> Self {

        debug_assert_eq!(front.is_some(), back.is_some());
        Iter { nodes: nodes, front: front, back: back, size: size, exact: exact }
    }

    fn advance(&mut self, side: Side) -> Option<(&'a K, &'a V)> {
        let nodes = self.nodes;

        let id = match side {
            Side::Right => self.front,
            Side::Left => self.back,
        }?;

        if self.front == self.back {
            self.front = None;
            self.back = None;
        } else {
            match side {
                Side::Right => self.front = nodes.next(id),
                Side::Left => self.back = nodes.prev(id),
            }
        }

        self.size = self.size.saturating_sub(1);
        let node = &nodes[id];
        Some((&node.key, &node.value))
    }
}

impl<'a, K, V, B> Clone for Iter<'a, K, V, B> {
    fn clone(&self) -> Self {
        Iter { nodes: self.nodes, front: self.front, back: self.back, size: self.size, exact: self.exact }
    }
}

impl<'a, K, V, B> Iterator for Iter<'a, K, V, B> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> { self.advance(Side::Right) }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (self.front, self.exact) {
            (None, _) => (0, Some(0)),
            (Some(_), true) => (self.size, Some(self.size)),
            (Some(_), false) => (1, Some(self.size)),
        }
    }
}

impl<'a, K, V, B> DoubleEndedIterator for Iter<'a, K, V, B> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> { self.advance(Side::Left) }
}
