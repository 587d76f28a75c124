//! A bidirectional cursor over a tree or one of its views.

use compare::Compare;
use std::ops::{Deref, DerefMut};
use super::Balance;
use super::map::TreeMap;
use super::node::{NodeId, Side};

/// A bidirectional cursor over the keys of a map, set or view.
///
/// A cursor sits between two keys. `next` moves it forward over one key and returns that key,
/// `previous` moves it backward. Forward is the view's order, so a descending cursor moves
/// from greater keys to smaller ones.
///
/// A cursor over a range stops at fence nodes: the nearest nodes outside the range, captured
/// when the cursor is created. A cursor created from a mutable reference can remove the key it
/// last returned; no other mutation of the tree is possible while it is alive.
///
/// # Examples
///
/// ```
/// let mut set = navtree::TreeSet::new();
/// set.extend(vec![1, 2, 3]);
///
/// let mut cursor = set.cursor();
/// assert_eq!(cursor.next(), Some(&1));
/// assert_eq!(cursor.next(), Some(&2));
/// assert_eq!(cursor.previous(), Some(&2));
/// assert_eq!(cursor.previous(), Some(&1));
/// assert_eq!(cursor.previous(), None);
/// ```
pub struct Cursor<S> {
    map: S,
    next: Option<NodeId>,
    prev: Option<NodeId>,
    last: Option<NodeId>,
    lower_fence: Option<NodeId>,
    upper_fence: Option<NodeId>,
    descending: bool,
}

impl<S, K, V, C, B> Cursor<S>
    where S: Deref<Target = TreeMap<K, V, C, B>>, C: Compare<K>, B: Balance {

    pub(crate) fn new(map: S, next: Option<NodeId>, prev: Option<NodeId>,
                      lower_fence: Option<NodeId>, upper_fence: Option<NodeId>, descending: bool)
        -> Self {

        Cursor {
            map: map,
            next: next,
            prev: prev,
            last: None,
            lower_fence: lower_fence,
            upper_fence: upper_fence,
            descending: descending,
        }
    }

    fn forward(&self) -> Side { if self.descending { Side::Left } else { Side::Right } }

    fn can_step(&self, side: Side) -> bool {
        match side {
            Side::Right => self.next.is_some() && self.next != self.upper_fence,
            Side::Left => self.prev.is_some() && self.prev != self.lower_fence,
        }
    }

    fn step<'a>(&'a mut self, side: Side) -> Option<&'a K> where V: 'a, C: 'a, B: 'a {
        if !self.can_step(side) { return None; }

        let nodes = self.map.tree().nodes();

        let id = match side {
            Side::Right => {
                let id = self.next?;
                self.prev = Some(id);
                self.next = nodes.next(id);
                id
            }
            Side::Left => {
                let id = self.prev?;
                self.next = Some(id);
                self.prev = nodes.prev(id);
                id
            }
        };

        self.last = Some(id);
        Some(self.map.tree().key(id))
    }

    /// Checks if `next` would return a key.
    pub fn has_next(&self) -> bool { self.can_step(self.forward()) }

    /// Checks if `previous` would return a key.
    pub fn has_previous(&self) -> bool { self.can_step(self.forward().opposite()) }

    /// Moves the cursor forward and returns the key it passed over, or `None` if the cursor is
    /// at the end.
    pub fn next<'a>(&'a mut self) -> Option<&'a K> where V: 'a, C: 'a, B: 'a {
        let side = self.forward();
        self.step(side)
    }

    /// Moves the cursor backward and returns the key it passed over, or `None` if the cursor is
    /// at the start.
    pub fn previous<'a>(&'a mut self) -> Option<&'a K> where V: 'a, C: 'a, B: 'a {
        let side = self.forward().opposite();
        self.step(side)
    }
}

impl<S, K, V, C, B> Cursor<S>
    where S: Deref<Target = TreeMap<K, V, C, B>> + DerefMut, C: Compare<K>, B: Balance {

    /// Removes and returns the key most recently returned by `next` or `previous`, or returns
    /// `None` if there is no such key or it was already removed.
    ///
    /// The cursor keeps its place: the keys on either side of it are unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = navtree::TreeSet::new();
    /// set.extend(vec![1, 2, 3]);
    ///
    /// {
    ///     let mut cursor = set.cursor_mut();
    ///     assert_eq!(cursor.next(), Some(&1));
    ///     assert_eq!(cursor.remove(), Some(1));
    ///     assert_eq!(cursor.remove(), None);
    ///     assert_eq!(cursor.next(), Some(&2));
    /// }
    ///
    /// assert_eq!(set.iter().collect::<Vec<_>>(), [&2, &3]);
    /// ```
    pub fn remove(&mut self) -> Option<K> {
        let id = self.last.take()?;
        let tree = self.map.tree_mut();

        let two_children = tree.nodes().left(id).is_some() && tree.nodes().right(id).is_some();
        let prev = tree.nodes().prev(id);
        let next = tree.nodes().next(id);

        let removed = tree.remove_node(id);
        self.prev = prev;

        if two_children {
            // the successor's entry now lives in `id`
            trace!("cursor followed successor {:?} into {:?}", removed.freed, id);
            self.next = Some(id);
            if self.upper_fence == next { self.upper_fence = Some(id); }
        } else {
            self.next = next;
        }

        Some(removed.key)
    }
}
