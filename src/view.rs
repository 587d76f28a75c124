//! Live, range-bounded views of a tree.
//!
//! A view borrows its backing map and reads through to the tree on every call, so it always
//! reflects the tree's current contents. Its bounds are stored in the tree's absolute order;
//! a descending view only changes how relative operations map onto them.

use compare::Compare;
use std::cmp::Ordering;
use std::ops::{Bound, Deref, DerefMut};
use std::ops::Bound::*;
use super::{Balance, Error};
use super::cursor::Cursor;
use super::map::TreeMap;
use super::node::{self, NodeId, Tree};

/// A view of the keys of a map or set that lie within a range.
///
/// `S` is a reference to the backing map: a shared reference for read-only views and a
/// mutable one for views that can add and remove keys. Views nest: narrowing a view yields
/// another view over the same map.
///
/// # Examples
///
/// ```
/// let mut set = navtree::TreeSet::new();
/// set.extend(vec![1, 3, 5, 7, 9]);
///
/// let head = set.head_set(&5, false);
/// assert_eq!(head.iter().collect::<Vec<_>>(), [&1, &3]);
///
/// let desc = set.descending_set();
/// assert_eq!(desc.iter().collect::<Vec<_>>(), [&9, &7, &5, &3, &1]);
/// assert_eq!(desc.first(), Ok(&9));
/// ```
pub struct View<S, K> {
    map: S,
    lo: Bound<K>,
    hi: Bound<K>,
    descending: bool,
    insertable: bool,
}

impl<S, K, V, C, B> View<S, K>
    where S: Deref<Target = TreeMap<K, V, C, B>>, C: Compare<K>, B: Balance {

    pub(crate) fn new(map: S, lo: Bound<K>, hi: Bound<K>, descending: bool, insertable: bool)
        -> Self {

        View { map: map, lo: lo, hi: hi, descending: descending, insertable: insertable }
    }

    fn tree(&self) -> &Tree<K, V, C, B> { self.map.tree() }

    fn too_low(&self, key: &K) -> bool {
        match self.lo {
            Unbounded => false,
            Included(ref lo) => self.tree().cmp().compares_lt(key, lo),
            Excluded(ref lo) => self.tree().cmp().compares_le(key, lo),
        }
    }

    fn too_high(&self, key: &K) -> bool {
        match self.hi {
            Unbounded => false,
            Included(ref hi) => self.tree().cmp().compares_gt(key, hi),
            Excluded(ref hi) => self.tree().cmp().compares_ge(key, hi),
        }
    }

    fn in_range(&self, key: &K) -> bool { !self.too_low(key) && !self.too_high(key) }

    // Like `in_range`, but treats both bounds as inclusive
    fn in_closed_range(&self, key: &K) -> bool {
        let cmp = self.tree().cmp();

        let above = match self.lo {
            Unbounded => true,
            Included(ref lo) | Excluded(ref lo) => cmp.compares_ge(key, lo),
        };

        let below = match self.hi {
            Unbounded => true,
            Included(ref hi) | Excluded(ref hi) => cmp.compares_le(key, hi),
        };

        above && below
    }

    fn admits(&self, key: &K, inclusive: bool) -> bool {
        if inclusive { self.in_range(key) } else { self.in_closed_range(key) }
    }

    fn below_hi(&self, id: Option<NodeId>) -> Option<NodeId> {
        id.filter(|&id| !self.too_high(self.tree().key(id)))
    }

    fn above_lo(&self, id: Option<NodeId>) -> Option<NodeId> {
        id.filter(|&id| !self.too_low(self.tree().key(id)))
    }

    fn abs_lowest(&self) -> Option<NodeId> {
        let tree = self.tree();

        self.below_hi(match self.lo {
            Unbounded => tree.first(),
            Included(ref lo) => tree.ceiling(lo),
            Excluded(ref lo) => tree.higher(lo),
        })
    }

    fn abs_highest(&self) -> Option<NodeId> {
        let tree = self.tree();

        self.above_lo(match self.hi {
            Unbounded => tree.last(),
            Included(ref hi) => tree.floor(hi),
            Excluded(ref hi) => tree.lower(hi),
        })
    }

    fn abs_ceiling(&self, key: &K) -> Option<NodeId> {
        if self.too_low(key) { self.abs_lowest() } else { self.below_hi(self.tree().ceiling(key)) }
    }

    fn abs_higher(&self, key: &K) -> Option<NodeId> {
        if self.too_low(key) { self.abs_lowest() } else { self.below_hi(self.tree().higher(key)) }
    }

    fn abs_floor(&self, key: &K) -> Option<NodeId> {
        if self.too_high(key) { self.abs_highest() } else { self.above_lo(self.tree().floor(key)) }
    }

    fn abs_lower(&self, key: &K) -> Option<NodeId> {
        if self.too_high(key) { self.abs_highest() } else { self.above_lo(self.tree().lower(key)) }
    }

    /// Returns the first node past the upper bound, or `None` if the view is unbounded above.
    fn abs_high_fence(&self) -> Option<NodeId> {
        match self.hi {
            Unbounded => None,
            Included(ref hi) => self.tree().higher(hi),
            Excluded(ref hi) => self.tree().ceiling(hi),
        }
    }

    /// Returns the last node past the lower bound, or `None` if the view is unbounded below.
    fn abs_low_fence(&self) -> Option<NodeId> {
        match self.lo {
            Unbounded => None,
            Included(ref lo) => self.tree().lower(lo),
            Excluded(ref lo) => self.tree().floor(lo),
        }
    }

    fn rel_first(&self) -> Option<NodeId> {
        if self.descending { self.abs_highest() } else { self.abs_lowest() }
    }

    fn rel_last(&self) -> Option<NodeId> {
        if self.descending { self.abs_lowest() } else { self.abs_highest() }
    }

    fn rel_lower(&self, key: &K) -> Option<NodeId> {
        if self.descending { self.abs_higher(key) } else { self.abs_lower(key) }
    }

    fn rel_floor(&self, key: &K) -> Option<NodeId> {
        if self.descending { self.abs_ceiling(key) } else { self.abs_floor(key) }
    }

    fn rel_ceiling(&self, key: &K) -> Option<NodeId> {
        if self.descending { self.abs_floor(key) } else { self.abs_ceiling(key) }
    }

    fn rel_higher(&self, key: &K) -> Option<NodeId> {
        if self.descending { self.abs_lower(key) } else { self.abs_higher(key) }
    }

    fn key_or(&self, id: Option<NodeId>, sentinel: Option<&K>) -> K where K: Clone + Default {
        match id {
            Some(id) => self.tree().key(id).clone(),
            None => sentinel.cloned().unwrap_or_default(),
        }
    }

    /// Returns the start of a cursor over the view: its `next` and `prev` nodes.
    fn cursor_start(&self) -> (Option<NodeId>, Option<NodeId>) {
        let nodes = self.tree().nodes();

        if self.descending {
            let prev = self.abs_highest();
            (prev.and_then(|id| nodes.next(id)), prev)
        } else {
            let next = self.abs_lowest();
            (next, next.and_then(|id| nodes.prev(id)))
        }
    }

    /// Returns the `next` and `prev` nodes of a cursor positioned so that moving backward
    /// yields `key`.
    fn cursor_start_at(&self, key: &K) -> Result<(Option<NodeId>, Option<NodeId>), Error> {
        if !self.in_range(key) { return Err(Error::OutOfRange); }

        let id = self.tree().find(key).ok_or(Error::Unpositioned)?;
        let nodes = self.tree().nodes();

        Ok(if self.descending {
            (Some(id), nodes.prev(id))
        } else {
            (nodes.next(id), Some(id))
        })
    }

    /// Checks if the view is in descending order.
    pub fn is_descending(&self) -> bool { self.descending }

    /// Compares two keys in the view's order.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cmp::Ordering::*;
    ///
    /// let set: navtree::TreeSet<i32> = navtree::TreeSet::new();
    ///
    /// assert_eq!(set.head_set(&5, true).compare(&1, &2), Less);
    /// assert_eq!(set.descending_set().compare(&1, &2), Greater);
    /// ```
    pub fn compare(&self, l: &K, r: &K) -> Ordering {
        let order = self.tree().cmp().compare(l, r);
        if self.descending { order.reverse() } else { order }
    }

    /// Checks if the view contains the given key.
    ///
    /// Keys outside the view's range are never contained, even if the backing tree holds them.
    pub fn contains(&self, key: &K) -> bool {
        self.in_range(key) && self.tree().find(key).is_some()
    }

    /// Returns the number of keys in the view.
    ///
    /// This walks the range, so it takes time linear in the result.
    pub fn len(&self) -> usize { self.iter().count() }

    /// Checks if the view is empty.
    pub fn is_empty(&self) -> bool { self.abs_lowest().is_none() }

    /// Returns the view's first key.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyContainer` if the view is empty.
    pub fn first<'a>(&'a self) -> Result<&'a K, Error> where V: 'a, C: 'a, B: 'a {
        self.rel_first().map(|id| self.tree().key(id)).ok_or(Error::EmptyContainer)
    }

    /// Returns the view's last key.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyContainer` if the view is empty.
    pub fn last<'a>(&'a self) -> Result<&'a K, Error> where V: 'a, C: 'a, B: 'a {
        self.rel_last().map(|id| self.tree().key(id)).ok_or(Error::EmptyContainer)
    }

    /// Returns the view's first key, or the tree's default minimum value if the view is empty.
    pub fn first_or_default(&self) -> K where K: Clone + Default {
        self.key_or(self.rel_first(), self.tree().default_min())
    }

    /// Returns the view's last key, or the tree's default maximum value if the view is empty.
    pub fn last_or_default(&self) -> K where K: Clone + Default {
        self.key_or(self.rel_last(), self.tree().default_max())
    }

    /// Returns the view's greatest key strictly before the given key, or `None` if there is
    /// no such key.
    ///
    /// "Before" is in the view's order, so a descending view returns a greater key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = navtree::TreeSet::new();
    /// set.extend(vec![1, 3, 5, 7, 9]);
    ///
    /// let tail = set.tail_set(&3, false);
    /// assert_eq!(tail.lower(&5), None);
    /// assert_eq!(tail.lower(&6), Some(&5));
    /// assert_eq!(tail.lower(&100), Some(&9));
    ///
    /// let desc = set.descending_set();
    /// assert_eq!(desc.lower(&5), Some(&7));
    /// ```
    pub fn lower<'a>(&'a self, key: &K) -> Option<&'a K> where V: 'a, C: 'a, B: 'a {
        self.rel_lower(key).map(|id| self.tree().key(id))
    }

    /// Returns the view's greatest key at or before the given key, or `None` if there is no
    /// such key.
    pub fn floor<'a>(&'a self, key: &K) -> Option<&'a K> where V: 'a, C: 'a, B: 'a {
        self.rel_floor(key).map(|id| self.tree().key(id))
    }

    /// Returns the view's least key at or after the given key, or `None` if there is no such
    /// key.
    pub fn ceiling<'a>(&'a self, key: &K) -> Option<&'a K> where V: 'a, C: 'a, B: 'a {
        self.rel_ceiling(key).map(|id| self.tree().key(id))
    }

    /// Returns the view's least key strictly after the given key, or `None` if there is no
    /// such key.
    pub fn higher<'a>(&'a self, key: &K) -> Option<&'a K> where V: 'a, C: 'a, B: 'a {
        self.rel_higher(key).map(|id| self.tree().key(id))
    }

    /// Like [`lower`](#method.lower), but returns the tree's default minimum value if there
    /// is no such key.
    pub fn lower_or_default(&self, key: &K) -> K where K: Clone + Default {
        self.key_or(self.rel_lower(key), self.tree().default_min())
    }

    /// Like [`floor`](#method.floor), but returns the tree's default minimum value if there
    /// is no such key.
    pub fn floor_or_default(&self, key: &K) -> K where K: Clone + Default {
        self.key_or(self.rel_floor(key), self.tree().default_min())
    }

    /// Like [`ceiling`](#method.ceiling), but returns the tree's default maximum value if
    /// there is no such key.
    pub fn ceiling_or_default(&self, key: &K) -> K where K: Clone + Default {
        self.key_or(self.rel_ceiling(key), self.tree().default_max())
    }

    /// Like [`higher`](#method.higher), but returns the tree's default maximum value if there
    /// is no such key.
    pub fn higher_or_default(&self, key: &K) -> K where K: Clone + Default {
        self.key_or(self.rel_higher(key), self.tree().default_max())
    }

    /// Returns an iterator over the view's keys in the view's order.
    pub fn iter<'a>(&'a self) -> Iter<'a, K, V, B> where V: 'a, C: 'a, B: 'a {
        let tree = self.tree();

        let (front, back) = match (self.abs_lowest(), self.abs_highest()) {
            (Some(front), Some(back)) => (Some(front), Some(back)),
            _ => (None, None),
        };

        Iter {
            inner: node::Iter::new(tree.nodes(), front, back, tree.len(), false),
            descending: self.descending,
        }
    }

    /// Returns a cursor positioned before the view's first key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = navtree::TreeSet::new();
    /// set.extend(vec![1, 3, 5, 7, 9]);
    ///
    /// let view = set.sub_set(&3, true, &7, true).unwrap();
    /// let mut cursor = view.cursor();
    ///
    /// assert!(!cursor.has_previous());
    /// assert_eq!(cursor.next(), Some(&3));
    /// assert_eq!(cursor.next(), Some(&5));
    /// assert_eq!(cursor.next(), Some(&7));
    /// assert_eq!(cursor.next(), None);
    /// assert_eq!(cursor.previous(), Some(&7));
    /// ```
    pub fn cursor(&self) -> Cursor<&TreeMap<K, V, C, B>> {
        let (next, prev) = self.cursor_start();
        Cursor::new(&*self.map, next, prev, self.abs_low_fence(), self.abs_high_fence(),
                    self.descending)
    }

    /// Returns a cursor positioned just after the given key, so that `previous` yields the
    /// key and `next` yields the key after it.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if the key lies outside the view and `Error::Unpositioned`
    /// if the tree does not contain it.
    pub fn cursor_at(&self, key: &K) -> Result<Cursor<&TreeMap<K, V, C, B>>, Error> {
        let (next, prev) = self.cursor_start_at(key)?;
        Ok(Cursor::new(&*self.map, next, prev, self.abs_low_fence(), self.abs_high_fence(),
                       self.descending))
    }

    /// Converts the view into a cursor positioned before its first key.
    pub fn into_cursor(self) -> Cursor<S> {
        let (next, prev) = self.cursor_start();
        let (lower_fence, upper_fence) = (self.abs_low_fence(), self.abs_high_fence());
        Cursor::new(self.map, next, prev, lower_fence, upper_fence, self.descending)
    }

    /// Returns a view of the keys in the given range of this view.
    ///
    /// Borrows the view; see [`into_sub_set`](#method.into_sub_set) for the consuming form.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if either bound lies outside this view or the bounds are
    /// out of order.
    pub fn sub_set(&self, from: &K, from_inclusive: bool, to: &K, to_inclusive: bool)
        -> Result<View<&TreeMap<K, V, C, B>, K>, Error> where K: Clone {

        self.as_view().into_sub_set(from, from_inclusive, to, to_inclusive)
    }

    /// Returns a view of the keys of this view before the given key.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if the key lies outside this view.
    pub fn head_set(&self, to: &K, inclusive: bool)
        -> Result<View<&TreeMap<K, V, C, B>, K>, Error> where K: Clone {

        self.as_view().into_head_set(to, inclusive)
    }

    /// Returns a view of the keys of this view after the given key.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if the key lies outside this view.
    pub fn tail_set(&self, from: &K, inclusive: bool)
        -> Result<View<&TreeMap<K, V, C, B>, K>, Error> where K: Clone {

        self.as_view().into_tail_set(from, inclusive)
    }

    /// Returns a view of this view's keys in the reverse order.
    pub fn descending_set(&self) -> View<&TreeMap<K, V, C, B>, K> where K: Clone {
        self.as_view().into_descending()
    }

    /// Reborrows the view.
    pub fn as_view(&self) -> View<&TreeMap<K, V, C, B>, K> where K: Clone {
        View::new(&*self.map, self.lo.clone(), self.hi.clone(), self.descending, self.insertable)
    }

    /// Narrows the view to the given range.
    ///
    /// `from` and `to` are in the view's order, so for a descending view `from` is the greater
    /// key.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if either bound lies outside this view or the bounds are
    /// out of order.
    pub fn into_sub_set(self, from: &K, from_inclusive: bool, to: &K, to_inclusive: bool)
        -> Result<Self, Error> where K: Clone {

        let ((lo, lo_inclusive), (hi, hi_inclusive)) = if self.descending {
            ((to, to_inclusive), (from, from_inclusive))
        } else {
            ((from, from_inclusive), (to, to_inclusive))
        };

        if self.tree().cmp().compares_gt(lo, hi) {
            debug!("rejected a sub-view with inverted bounds");
            return Err(Error::OutOfRange);
        }

        if !self.admits(lo, lo_inclusive) || !self.admits(hi, hi_inclusive) {
            debug!("rejected a sub-view outside its parent's range");
            return Err(Error::OutOfRange);
        }

        Ok(View { lo: bound(lo, lo_inclusive), hi: bound(hi, hi_inclusive), ..self })
    }

    /// Narrows the view to the keys before the given key.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if the key lies outside this view.
    pub fn into_head_set(self, to: &K, inclusive: bool) -> Result<Self, Error> where K: Clone {
        if !self.admits(to, inclusive) {
            debug!("rejected a head view outside its parent's range");
            return Err(Error::OutOfRange);
        }

        Ok(if self.descending {
            View { lo: bound(to, inclusive), ..self }
        } else {
            View { hi: bound(to, inclusive), ..self }
        })
    }

    /// Narrows the view to the keys after the given key.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if the key lies outside this view.
    pub fn into_tail_set(self, from: &K, inclusive: bool) -> Result<Self, Error> where K: Clone {
        if !self.admits(from, inclusive) {
            debug!("rejected a tail view outside its parent's range");
            return Err(Error::OutOfRange);
        }

        Ok(if self.descending {
            View { hi: bound(from, inclusive), ..self }
        } else {
            View { lo: bound(from, inclusive), ..self }
        })
    }

    /// Converts the view into one over the same keys in the reverse order.
    pub fn into_descending(self) -> Self { View { descending: !self.descending, ..self } }

    /// Always fails: a view cannot be copied.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedOperation`.
    pub fn copy(&self) -> Result<TreeMap<K, V, C, B>, Error> {
        debug!("rejected a copy of a view");
        Err(Error::UnsupportedOperation("copy a view"))
    }

    /// Calls `f` on each of the view's keys in order.
    pub fn for_each<F>(&self, f: F) where F: FnMut(&K) { self.iter().for_each(f) }

    /// Folds the view's keys with `f`, starting from the first key, or returns `None` if the
    /// view is empty.
    pub fn reduce<F>(&self, mut f: F) -> Option<K> where K: Clone, F: FnMut(K, &K) -> K {
        let mut it = self.iter();
        let first = it.next()?.clone();
        Some(it.fold(first, |acc, key| f(acc, key)))
    }

    /// Returns the number of the view's keys that satisfy the predicate.
    pub fn count<F>(&self, mut pred: F) -> usize where F: FnMut(&K) -> bool {
        self.iter().filter(|key| pred(key)).count()
    }

    /// Checks if any of the view's keys satisfies the predicate.
    pub fn matches_any<F>(&self, mut pred: F) -> bool where F: FnMut(&K) -> bool {
        self.iter().any(|key| pred(key))
    }

    /// Checks if all of the view's keys satisfy the predicate.
    pub fn matches_all<F>(&self, mut pred: F) -> bool where F: FnMut(&K) -> bool {
        self.iter().all(|key| pred(key))
    }

    /// Checks if none of the view's keys satisfy the predicate.
    pub fn matches_none<F>(&self, pred: F) -> bool where F: FnMut(&K) -> bool {
        !self.matches_any(pred)
    }

    /// Returns the view's first key that satisfies the predicate, in the view's order.
    pub fn find_first<'a, F>(&'a self, mut pred: F) -> Option<&'a K>
        where V: 'a, C: 'a, B: 'a, F: FnMut(&K) -> bool {

        self.iter().find(|key| pred(key))
    }
}

impl<S, K, V, C, B> View<S, K>
    where S: Deref<Target = TreeMap<K, V, C, B>> + DerefMut, C: Compare<K>, B: Balance {

    fn tree_mut(&mut self) -> &mut Tree<K, V, C, B> { self.map.tree_mut() }

    /// Adds a key to the backing tree, returning `true` if it was not already present.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedOperation` for a map's key view and `Error::OutOfRange` if
    /// the key lies outside the view.
    ///
    /// # Examples
    ///
    /// ```
    /// use navtree::Error;
    ///
    /// let mut set = navtree::TreeSet::new();
    /// set.extend(vec![1, 5, 9]);
    ///
    /// {
    ///     let mut view = set.head_set_mut(&5, true);
    ///     assert_eq!(view.add(3), Ok(true));
    ///     assert_eq!(view.add(3), Ok(false));
    ///     assert_eq!(view.add(7), Err(Error::OutOfRange));
    /// }
    ///
    /// assert_eq!(set.len(), 4);
    /// ```
    pub fn add(&mut self, key: K) -> Result<bool, Error> where V: Default {
        if !self.insertable {
            debug!("rejected an add through a key view");
            return Err(Error::UnsupportedOperation("add to a key view"));
        }

        if !self.in_range(&key) {
            debug!("rejected an add outside the view's range");
            return Err(Error::OutOfRange);
        }

        Ok(self.tree_mut().insert(key, V::default()).1.is_none())
    }

    /// Removes a key from the backing tree, returning `true` if it was present.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if the key lies outside the view.
    pub fn remove(&mut self, key: &K) -> Result<bool, Error> {
        if !self.in_range(key) {
            debug!("rejected a removal outside the view's range");
            return Err(Error::OutOfRange);
        }

        Ok(self.tree_mut().remove(key).is_some())
    }

    /// Removes and returns the view's first key, or `None` if the view is empty.
    pub fn poll_first(&mut self) -> Option<K> {
        self.rel_first().map(|id| self.tree_mut().remove_node(id).key)
    }

    /// Removes and returns the view's last key, or `None` if the view is empty.
    pub fn poll_last(&mut self) -> Option<K> {
        self.rel_last().map(|id| self.tree_mut().remove_node(id).key)
    }

    /// Like [`poll_first`](#method.poll_first), but returns the tree's default minimum value
    /// if the view is empty.
    pub fn poll_first_or_default(&mut self) -> K where K: Clone + Default {
        match self.poll_first() {
            Some(key) => key,
            None => self.tree().default_min().cloned().unwrap_or_default(),
        }
    }

    /// Like [`poll_last`](#method.poll_last), but returns the tree's default maximum value if
    /// the view is empty.
    pub fn poll_last_or_default(&mut self) -> K where K: Clone + Default {
        match self.poll_last() {
            Some(key) => key,
            None => self.tree().default_max().cloned().unwrap_or_default(),
        }
    }

    /// Removes every key in the view from the backing tree.
    ///
    /// Keys outside the view are left untouched.
    pub fn clear(&mut self) {
        while self.poll_first().is_some() {}
    }

    /// Returns a cursor positioned before the view's first key that can remove keys.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = navtree::TreeSet::new();
    /// set.extend(1..7);
    ///
    /// {
    ///     let mut view = set.tail_set_mut(&3, true);
    ///     let mut cursor = view.cursor_mut();
    ///
    ///     while let Some(&key) = cursor.next() {
    ///         if key % 2 == 0 { cursor.remove(); }
    ///     }
    /// }
    ///
    /// assert_eq!(set.iter().collect::<Vec<_>>(), [&1, &2, &3, &5]);
    /// ```
    pub fn cursor_mut(&mut self) -> Cursor<&mut TreeMap<K, V, C, B>> {
        let (next, prev) = self.cursor_start();
        let (lower_fence, upper_fence) = (self.abs_low_fence(), self.abs_high_fence());
        Cursor::new(&mut *self.map, next, prev, lower_fence, upper_fence, self.descending)
    }

    /// Returns a cursor positioned just after the given key that can remove keys.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if the key lies outside the view and `Error::Unpositioned`
    /// if the tree does not contain it.
    pub fn cursor_at_mut(&mut self, key: &K) -> Result<Cursor<&mut TreeMap<K, V, C, B>>, Error> {
        let (next, prev) = self.cursor_start_at(key)?;
        let (lower_fence, upper_fence) = (self.abs_low_fence(), self.abs_high_fence());
        Ok(Cursor::new(&mut *self.map, next, prev, lower_fence, upper_fence, self.descending))
    }

    /// Mutably reborrows the view.
    pub fn as_view_mut(&mut self) -> View<&mut TreeMap<K, V, C, B>, K> where K: Clone {
        let (lo, hi) = (self.lo.clone(), self.hi.clone());
        View::new(&mut *self.map, lo, hi, self.descending, self.insertable)
    }

    /// Returns a mutable view of the keys in the given range of this view.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if either bound lies outside this view or the bounds are
    /// out of order.
    pub fn sub_set_mut(&mut self, from: &K, from_inclusive: bool, to: &K, to_inclusive: bool)
        -> Result<View<&mut TreeMap<K, V, C, B>, K>, Error> where K: Clone {

        self.as_view_mut().into_sub_set(from, from_inclusive, to, to_inclusive)
    }

    /// Returns a mutable view of the keys of this view before the given key.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if the key lies outside this view.
    pub fn head_set_mut(&mut self, to: &K, inclusive: bool)
        -> Result<View<&mut TreeMap<K, V, C, B>, K>, Error> where K: Clone {

        self.as_view_mut().into_head_set(to, inclusive)
    }

    /// Returns a mutable view of the keys of this view after the given key.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if the key lies outside this view.
    pub fn tail_set_mut(&mut self, from: &K, inclusive: bool)
        -> Result<View<&mut TreeMap<K, V, C, B>, K>, Error> where K: Clone {

        self.as_view_mut().into_tail_set(from, inclusive)
    }

    /// Returns a mutable view of this view's keys in the reverse order.
    pub fn descending_set_mut(&mut self) -> View<&mut TreeMap<K, V, C, B>, K> where K: Clone {
        self.as_view_mut().into_descending()
    }
}

pub(crate) fn bound<K: Clone>(key: &K, inclusive: bool) -> Bound<K> {
    if inclusive { Included(key.clone()) } else { Excluded(key.clone()) }
}

/// An iterator over a view's keys in the view's order.
///
/// Acquire through [`View::iter`](struct.View.html#method.iter).
pub struct Iter<'a, K: 'a, V: 'a, B: 'a> {
    inner: node::Iter<'a, K, V, B>,
    descending: bool,
}

impl<'a, K, V, B> Clone for Iter<'a, K, V, B> {
    fn clone(&self) -> Self { Iter { inner: self.inner.clone(), descending: self.descending } }
}

impl<'a, K, V, B> Iterator for Iter<'a, K, V, B> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let entry = if self.descending { self.inner.next_back() } else { self.inner.next() };
        entry.map(|e| e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.inner.size_hint() }
}

impl<'a, K, V, B> DoubleEndedIterator for Iter<'a, K, V, B> {
    fn next_back(&mut self) -> Option<&'a K> {
        let entry = if self.descending { self.inner.next() } else { self.inner.next_back() };
        entry.map(|e| e.0)
    }
}
