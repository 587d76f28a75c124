//! An ordered set based on a self-balancing binary search tree.

use compare::{Compare, Natural};
use std::cmp::Ordering::{self, *};
use std::fmt::{self, Debug};
use std::hash::{self, Hash};
use std::iter;
use std::ops::Bound::Unbounded;
use super::{Avl, Balance, Error, RedBlack};
use super::cursor::Cursor;
use super::map::{self, TreeMap};
use super::view::{self, View};

/// An ordered set based on a self-balancing binary search tree.
///
/// Besides the usual set operations, the set answers navigation queries (`lower`, `floor`,
/// `ceiling`, `higher`), hands out live views of its ranges, and supports cursors that can
/// remove items while walking the set in either direction.
///
/// The behavior of this set is undefined if an item's ordering relative to any other item
/// changes while the item is in the set. This is normally only possible through `Cell`,
/// `RefCell`, or unsafe code.
pub struct TreeSet<T, C = Natural<T>, B = Avl> where C: Compare<T>, B: Balance {
    map: TreeMap<T, (), C, B>,
}

/// An ordered set balanced by the red-black scheme.
pub type RbTreeSet<T, C = Natural<T>> = TreeSet<T, C, RedBlack>;

/// A view of a range of a set.
pub type SetView<'a, T, C = Natural<T>, B = Avl> = View<&'a TreeMap<T, (), C, B>, T>;

/// A view of a range of a set that can add and remove items.
pub type SetViewMut<'a, T, C = Natural<T>, B = Avl> = View<&'a mut TreeMap<T, (), C, B>, T>;

/// A cursor over a set.
pub type SetCursor<'a, T, C = Natural<T>, B = Avl> = Cursor<&'a TreeMap<T, (), C, B>>;

/// A cursor over a set that can remove items.
pub type SetCursorMut<'a, T, C = Natural<T>, B = Avl> = Cursor<&'a mut TreeMap<T, (), C, B>>;

impl<T> TreeSet<T> where T: Ord {
    /// Creates an empty set ordered according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = navtree::TreeSet::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut it = set.iter();
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { TreeSet { map: TreeMap::new() } }
}

impl<T, C> TreeSet<T, C> where C: Compare<T> {
    /// Creates an empty set ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let mut set = navtree::TreeSet::with_cmp(natural().rev());
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut it = set.iter();
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn with_cmp(cmp: C) -> Self { TreeSet { map: TreeMap::with_cmp(cmp) } }
}

impl<T, C, B> TreeSet<T, C, B> where C: Compare<T>, B: Balance {
    /// Checks if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = navtree::TreeSet::new();
    /// assert!(set.is_empty());
    ///
    /// set.insert(2);
    /// assert!(!set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.map.is_empty() }

    /// Returns the number of items in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = navtree::TreeSet::new();
    /// assert_eq!(set.len(), 0);
    ///
    /// set.insert(2);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize { self.map.len() }

    /// Returns a reference to the set's comparator.
    pub fn cmp(&self) -> &C { self.map.cmp() }

    /// Removes all items from the set.
    pub fn clear(&mut self) { self.map.clear(); }

    /// Inserts an item into the set, returning `true` if the set did not already contain the
    /// item.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = navtree::TreeSet::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, item: T) -> bool { self.map.insert(item, ()).is_none() }

    /// Adds an item to the set, returning `true` if the set did not already contain the item.
    ///
    /// This is the same as [`insert`](#method.insert).
    pub fn add(&mut self, item: T) -> bool { self.insert(item) }

    /// Removes the given item from the set, returning `true` if it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = navtree::TreeSet::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    ///
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, item: &Q) -> bool where C: Compare<Q, T> {
        self.map.remove(item).is_some()
    }

    /// Checks if the set contains the given item.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = navtree::TreeSet::new();
    /// assert!(!set.contains(&1));
    ///
    /// set.insert(1);
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<Q: ?Sized>(&self, item: &Q) -> bool where C: Compare<Q, T> {
        self.map.contains_key(item)
    }

    /// Returns the set's minimum item.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyContainer` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use navtree::Error;
    ///
    /// let mut set = navtree::TreeSet::new();
    /// assert_eq!(set.first(), Err(Error::EmptyContainer));
    ///
    /// set.extend(vec![2, 1, 3]);
    /// assert_eq!(set.first(), Ok(&1));
    /// assert_eq!(set.last(), Ok(&3));
    /// ```
    pub fn first(&self) -> Result<&T, Error> { self.map.first().map(|e| e.0) }

    /// Returns the set's maximum item.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyContainer` if the set is empty.
    pub fn last(&self) -> Result<&T, Error> { self.map.last().map(|e| e.0) }

    /// Returns the set's minimum item, or `None` if the set is empty.
    pub fn min(&self) -> Option<&T> { self.map.min().map(|e| e.0) }

    /// Returns the set's maximum item, or `None` if the set is empty.
    pub fn max(&self) -> Option<&T> { self.map.max().map(|e| e.0) }

    /// Removes and returns the set's minimum item, or `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = navtree::TreeSet::new();
    /// set.extend(vec![2, 1]);
    ///
    /// assert_eq!(set.poll_first(), Some(1));
    /// assert_eq!(set.poll_first(), Some(2));
    /// assert_eq!(set.poll_first(), None);
    /// ```
    pub fn poll_first(&mut self) -> Option<T> { self.map.poll_first().map(|e| e.0) }

    /// Removes and returns the set's maximum item, or `None` if the set is empty.
    pub fn poll_last(&mut self) -> Option<T> { self.map.poll_last().map(|e| e.0) }

    /// Returns the greatest item strictly less than the given item, or `None` if there is no
    /// such item.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = navtree::TreeSet::new();
    /// set.extend(vec![1, 3, 5, 7, 9]);
    ///
    /// assert_eq!(set.lower(&5), Some(&3));
    /// assert_eq!(set.floor(&6), Some(&5));
    /// assert_eq!(set.ceiling(&6), Some(&7));
    /// assert_eq!(set.higher(&5), Some(&7));
    /// assert_eq!(set.higher(&9), None);
    /// ```
    pub fn lower<Q: ?Sized>(&self, item: &Q) -> Option<&T> where C: Compare<Q, T> {
        self.map.lower(item).map(|e| e.0)
    }

    /// Returns the greatest item less than or equal to the given item, or `None` if there is
    /// no such item.
    pub fn floor<Q: ?Sized>(&self, item: &Q) -> Option<&T> where C: Compare<Q, T> {
        self.map.floor(item).map(|e| e.0)
    }

    /// Returns the least item greater than or equal to the given item, or `None` if there is
    /// no such item.
    pub fn ceiling<Q: ?Sized>(&self, item: &Q) -> Option<&T> where C: Compare<Q, T> {
        self.map.ceiling(item).map(|e| e.0)
    }

    /// Returns the least item strictly greater than the given item, or `None` if there is no
    /// such item.
    pub fn higher<Q: ?Sized>(&self, item: &Q) -> Option<&T> where C: Compare<Q, T> {
        self.map.higher(item).map(|e| e.0)
    }

    /// Sets the value returned by the minimum-side `*_or_default` queries when they find
    /// nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = navtree::TreeSet::new();
    /// set.extend(vec![10, 20]);
    ///
    /// assert_eq!(set.lower_or_default(&10), 0);
    ///
    /// set.set_default_min_value(i32::MIN);
    /// set.set_default_max_value(i32::MAX);
    ///
    /// assert_eq!(set.lower_or_default(&10), i32::MIN);
    /// assert_eq!(set.higher_or_default(&20), i32::MAX);
    /// assert_eq!(set.higher_or_default(&10), 20);
    /// ```
    pub fn set_default_min_value(&mut self, item: T) { self.map.tree_mut().set_default_min(item); }

    /// Sets the value returned by the maximum-side `*_or_default` queries when they find
    /// nothing.
    pub fn set_default_max_value(&mut self, item: T) { self.map.tree_mut().set_default_max(item); }

    fn default_min(&self) -> T where T: Clone + Default {
        self.map.tree().default_min().cloned().unwrap_or_default()
    }

    fn default_max(&self) -> T where T: Clone + Default {
        self.map.tree().default_max().cloned().unwrap_or_default()
    }

    /// Returns the set's minimum item, or the default minimum value if the set is empty.
    pub fn first_or_default(&self) -> T where T: Clone + Default {
        self.min().cloned().unwrap_or_else(|| self.default_min())
    }

    /// Returns the set's maximum item, or the default maximum value if the set is empty.
    pub fn last_or_default(&self) -> T where T: Clone + Default {
        self.max().cloned().unwrap_or_else(|| self.default_max())
    }

    /// Removes and returns the set's minimum item, or returns the default minimum value if the
    /// set is empty.
    pub fn poll_first_or_default(&mut self) -> T where T: Clone + Default {
        match self.poll_first() {
            Some(item) => item,
            None => self.default_min(),
        }
    }

    /// Removes and returns the set's maximum item, or returns the default maximum value if the
    /// set is empty.
    pub fn poll_last_or_default(&mut self) -> T where T: Clone + Default {
        match self.poll_last() {
            Some(item) => item,
            None => self.default_max(),
        }
    }

    /// Like [`lower`](#method.lower), but returns the default minimum value if there is no
    /// such item.
    pub fn lower_or_default<Q: ?Sized>(&self, item: &Q) -> T
        where T: Clone + Default, C: Compare<Q, T> {

        self.lower(item).cloned().unwrap_or_else(|| self.default_min())
    }

    /// Like [`floor`](#method.floor), but returns the default minimum value if there is no
    /// such item.
    pub fn floor_or_default<Q: ?Sized>(&self, item: &Q) -> T
        where T: Clone + Default, C: Compare<Q, T> {

        self.floor(item).cloned().unwrap_or_else(|| self.default_min())
    }

    /// Like [`ceiling`](#method.ceiling), but returns the default maximum value if there is no
    /// such item.
    pub fn ceiling_or_default<Q: ?Sized>(&self, item: &Q) -> T
        where T: Clone + Default, C: Compare<Q, T> {

        self.ceiling(item).cloned().unwrap_or_else(|| self.default_max())
    }

    /// Like [`higher`](#method.higher), but returns the default maximum value if there is no
    /// such item.
    pub fn higher_or_default<Q: ?Sized>(&self, item: &Q) -> T
        where T: Clone + Default, C: Compare<Q, T> {

        self.higher(item).cloned().unwrap_or_else(|| self.default_max())
    }

    /// Returns an iterator over the set.
    ///
    /// The iterator yields the items in ascending order according to the set's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = navtree::TreeSet::new();
    /// set.extend(vec![2, 1, 3]);
    ///
    /// assert_eq!(set.iter().rev().collect::<Vec<_>>(), [&3, &2, &1]);
    /// ```
    pub fn iter(&self) -> Iter<T, B> { Iter(self.map.iter()) }

    /// Returns a cursor positioned before the set's minimum item.
    pub fn cursor(&self) -> SetCursor<T, C, B> {
        Cursor::new(&self.map, self.map.tree().first(), None, None, None, false)
    }

    /// Returns a cursor positioned after the set's maximum item that moves in descending
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = navtree::TreeSet::new();
    /// set.extend(vec![1, 2, 3]);
    ///
    /// let mut cursor = set.descending_cursor();
    /// assert_eq!(cursor.next(), Some(&3));
    /// assert_eq!(cursor.next(), Some(&2));
    /// assert_eq!(cursor.previous(), Some(&2));
    /// ```
    pub fn descending_cursor(&self) -> SetCursor<T, C, B> {
        Cursor::new(&self.map, None, self.map.tree().last(), None, None, true)
    }

    /// Returns a cursor positioned just after the given item, so that `previous` yields the
    /// item and `next` yields its successor.
    ///
    /// # Errors
    ///
    /// Returns `Error::Unpositioned` if the set does not contain the item.
    ///
    /// # Examples
    ///
    /// ```
    /// use navtree::Error;
    ///
    /// let mut set = navtree::TreeSet::new();
    /// set.extend(vec![1, 2, 3]);
    ///
    /// let mut cursor = set.cursor_at(&2).unwrap();
    /// assert_eq!(cursor.next(), Some(&3));
    /// assert_eq!(cursor.previous(), Some(&3));
    /// assert_eq!(cursor.previous(), Some(&2));
    ///
    /// assert!(set.cursor_at(&4).is_err());
    /// ```
    pub fn cursor_at<Q: ?Sized>(&self, item: &Q) -> Result<SetCursor<T, C, B>, Error>
        where C: Compare<Q, T> {

        let id = self.map.tree().find(item).ok_or(Error::Unpositioned)?;
        let next = self.map.tree().nodes().next(id);
        Ok(Cursor::new(&self.map, next, Some(id), None, None, false))
    }

    /// Returns a cursor positioned before the set's minimum item that can remove items.
    pub fn cursor_mut(&mut self) -> SetCursorMut<T, C, B> {
        let first = self.map.tree().first();
        Cursor::new(&mut self.map, first, None, None, None, false)
    }

    /// Returns a cursor positioned after the set's maximum item that moves in descending order
    /// and can remove items.
    pub fn descending_cursor_mut(&mut self) -> SetCursorMut<T, C, B> {
        let last = self.map.tree().last();
        Cursor::new(&mut self.map, None, last, None, None, true)
    }

    /// Returns a cursor positioned just after the given item that can remove items.
    ///
    /// # Errors
    ///
    /// Returns `Error::Unpositioned` if the set does not contain the item.
    pub fn cursor_at_mut<Q: ?Sized>(&mut self, item: &Q) -> Result<SetCursorMut<T, C, B>, Error>
        where C: Compare<Q, T> {

        let id = self.map.tree().find(item).ok_or(Error::Unpositioned)?;
        let next = self.map.tree().nodes().next(id);
        Ok(Cursor::new(&mut self.map, next, Some(id), None, None, false))
    }

    /// Returns a view of the items in the given range.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if `from` is greater than `to`.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = navtree::TreeSet::new();
    /// set.extend(vec![1, 3, 5, 7, 9]);
    ///
    /// let view = set.sub_set(&3, false, &9, true).unwrap();
    /// assert_eq!(view.iter().collect::<Vec<_>>(), [&5, &7, &9]);
    ///
    /// assert!(set.sub_set(&9, true, &3, true).is_err());
    /// ```
    pub fn sub_set(&self, from: &T, from_inclusive: bool, to: &T, to_inclusive: bool)
        -> Result<SetView<T, C, B>, Error> where T: Clone {

        View::new(&self.map, Unbounded, Unbounded, false, true)
            .into_sub_set(from, from_inclusive, to, to_inclusive)
    }

    /// Returns a view of the items less than (or equal to, if `inclusive`) the given item.
    pub fn head_set(&self, to: &T, inclusive: bool) -> SetView<T, C, B> where T: Clone {
        View::new(&self.map, Unbounded, view::bound(to, inclusive), false, true)
    }

    /// Returns a view of the items greater than (or equal to, if `inclusive`) the given item.
    pub fn tail_set(&self, from: &T, inclusive: bool) -> SetView<T, C, B> where T: Clone {
        View::new(&self.map, view::bound(from, inclusive), Unbounded, false, true)
    }

    /// Returns a view of the set in descending order.
    pub fn descending_set(&self) -> SetView<T, C, B> {
        View::new(&self.map, Unbounded, Unbounded, true, true)
    }

    /// Returns a view of the items in the given range that can add and remove items.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if `from` is greater than `to`.
    pub fn sub_set_mut(&mut self, from: &T, from_inclusive: bool, to: &T, to_inclusive: bool)
        -> Result<SetViewMut<T, C, B>, Error> where T: Clone {

        View::new(&mut self.map, Unbounded, Unbounded, false, true)
            .into_sub_set(from, from_inclusive, to, to_inclusive)
    }

    /// Returns a view of the items less than (or equal to, if `inclusive`) the given item that
    /// can add and remove items.
    pub fn head_set_mut(&mut self, to: &T, inclusive: bool) -> SetViewMut<T, C, B>
        where T: Clone {

        View::new(&mut self.map, Unbounded, view::bound(to, inclusive), false, true)
    }

    /// Returns a view of the items greater than (or equal to, if `inclusive`) the given item
    /// that can add and remove items.
    pub fn tail_set_mut(&mut self, from: &T, inclusive: bool) -> SetViewMut<T, C, B>
        where T: Clone {

        View::new(&mut self.map, view::bound(from, inclusive), Unbounded, false, true)
    }

    /// Returns a view of the set in descending order that can add and remove items.
    pub fn descending_set_mut(&mut self) -> SetViewMut<T, C, B> {
        View::new(&mut self.map, Unbounded, Unbounded, true, true)
    }

    /// Returns a deep copy of the set.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = navtree::TreeSet::new();
    /// set.extend(vec![1, 2]);
    ///
    /// let mut copy = set.copy();
    /// copy.insert(3);
    ///
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(copy.len(), 3);
    /// ```
    pub fn copy(&self) -> Self where T: Clone, C: Clone { TreeSet { map: self.map.copy() } }

    /// Calls `f` on each item in ascending order.
    pub fn for_each<F>(&self, f: F) where F: FnMut(&T) { self.iter().for_each(f) }

    /// Folds the items in ascending order with `f`, starting from the minimum item, or returns
    /// `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = navtree::TreeSet::new();
    /// set.extend(1..5);
    ///
    /// assert_eq!(set.reduce(|acc, item| acc + item), Some(10));
    /// ```
    pub fn reduce<F>(&self, mut f: F) -> Option<T> where T: Clone, F: FnMut(T, &T) -> T {
        let mut it = self.iter();
        let first = it.next()?.clone();
        Some(it.fold(first, |acc, item| f(acc, item)))
    }

    /// Returns the number of items that satisfy the predicate.
    pub fn count<F>(&self, mut pred: F) -> usize where F: FnMut(&T) -> bool {
        self.iter().filter(|item| pred(item)).count()
    }

    /// Checks if any item satisfies the predicate.
    pub fn matches_any<F>(&self, mut pred: F) -> bool where F: FnMut(&T) -> bool {
        self.iter().any(|item| pred(item))
    }

    /// Checks if every item satisfies the predicate.
    pub fn matches_all<F>(&self, mut pred: F) -> bool where F: FnMut(&T) -> bool {
        self.iter().all(|item| pred(item))
    }

    /// Checks if no item satisfies the predicate.
    pub fn matches_none<F>(&self, pred: F) -> bool where F: FnMut(&T) -> bool {
        !self.matches_any(pred)
    }

    /// Returns the least item that satisfies the predicate.
    pub fn find_first<F>(&self, mut pred: F) -> Option<&T> where F: FnMut(&T) -> bool {
        self.iter().find(|item| pred(item))
    }
}

impl<T, C, B> Clone for TreeSet<T, C, B> where T: Clone, C: Compare<T> + Clone, B: Balance {
    fn clone(&self) -> Self { self.copy() }
}

impl<T, C, B> Debug for TreeSet<T, C, B> where T: Debug, C: Compare<T>, B: Balance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C, B> Default for TreeSet<T, C, B> where C: Compare<T> + Default, B: Balance {
    fn default() -> Self { TreeSet { map: TreeMap::default() } }
}

impl<T, C, B> Extend<T> for TreeSet<T, C, B> where C: Compare<T>, B: Balance {
    fn extend<I: IntoIterator<Item=T>>(&mut self, it: I) {
        for item in it { self.insert(item); }
    }
}

impl<T, C, B> iter::FromIterator<T> for TreeSet<T, C, B>
    where C: Compare<T> + Default, B: Balance {

    fn from_iter<I: IntoIterator<Item=T>>(it: I) -> Self {
        let mut set = TreeSet::default();
        set.extend(it);
        set
    }
}

impl<T, C, B> Hash for TreeSet<T, C, B> where T: Hash, C: Compare<T>, B: Balance {
    fn hash<H: hash::Hasher>(&self, h: &mut H) { self.map.hash(h); }
}

impl<'a, T, C, B> IntoIterator for &'a TreeSet<T, C, B> where C: Compare<T>, B: Balance {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, B>;
    fn into_iter(self) -> Iter<'a, T, B> { self.iter() }
}

impl<T, C, B> IntoIterator for TreeSet<T, C, B> where C: Compare<T>, B: Balance {
    type Item = T;
    type IntoIter = IntoIter<T, C, B>;

    /// Returns an iterator that consumes the set.
    ///
    /// The iterator yields the items in ascending order according to the set's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = navtree::TreeSet::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut it = set.into_iter();
    /// assert_eq!(it.next(), Some(1));
    /// assert_eq!(it.next_back(), Some(3));
    /// assert_eq!(it.next(), Some(2));
    /// assert_eq!(it.next(), None);
    /// ```
    fn into_iter(self) -> IntoIter<T, C, B> { IntoIter(self.map.into_iter()) }
}

impl<T, C, B> PartialEq for TreeSet<T, C, B> where C: Compare<T>, B: Balance {
    fn eq(&self, other: &Self) -> bool { self.map == other.map }
}

impl<T, C, B> Eq for TreeSet<T, C, B> where C: Compare<T>, B: Balance {}

impl<T, C, B> PartialOrd for TreeSet<T, C, B> where C: Compare<T>, B: Balance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(Ord::cmp(self, other)) }
}

impl<T, C, B> Ord for TreeSet<T, C, B> where C: Compare<T>, B: Balance {
    /// Compares the sets lexicographically by their items in ascending order.
    fn cmp(&self, other: &Self) -> Ordering {
        let cmp = self.map.cmp();
        let (mut l, mut r) = (self.iter(), other.iter());

        loop {
            match (l.next(), r.next()) {
                (None, None) => return Equal,
                (None, Some(_)) => return Less,
                (Some(_), None) => return Greater,
                (Some(a), Some(b)) => match cmp.compare(a, b) {
                    Equal => {}
                    order => return order,
                },
            }
        }
    }
}

/// An iterator that consumes the set.
///
/// The iterator yields the items in ascending order according to the set's comparator.
///
/// Acquire through the `IntoIterator` trait.
pub struct IntoIter<T, C = Natural<T>, B = Avl>(map::IntoIter<T, (), C, B>)
    where C: Compare<T>, B: Balance;

impl<T, C, B> Iterator for IntoIter<T, C, B> where C: Compare<T>, B: Balance {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> { self.0.next().map(|e| e.0) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<T, C, B> DoubleEndedIterator for IntoIter<T, C, B> where C: Compare<T>, B: Balance {
    fn next_back(&mut self) -> Option<Self::Item> { self.0.next_back().map(|e| e.0) }
}

impl<T, C, B> ExactSizeIterator for IntoIter<T, C, B> where C: Compare<T>, B: Balance {}

/// An iterator over the set.
///
/// The iterator yields the items in ascending order according to the set's comparator.
///
/// # Examples
///
/// Acquire through [`TreeSet::iter`](struct.TreeSet.html#method.iter) or the `IntoIterator`
/// trait:
///
/// ```
/// let mut set = navtree::TreeSet::new();
/// set.extend(vec![2, 1, 3]);
///
/// let mut total = 0;
/// for item in &set { total += *item; }
/// assert_eq!(total, 6);
/// ```
pub struct Iter<'a, T: 'a, B: 'a = Avl>(map::Iter<'a, T, (), B>);

impl<'a, T, B> Clone for Iter<'a, T, B> {
    fn clone(&self) -> Self { Iter(self.0.clone()) }
}

impl<'a, T, B> Iterator for Iter<'a, T, B> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> { self.0.next().map(|e| e.0) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T, B> DoubleEndedIterator for Iter<'a, T, B> {
    fn next_back(&mut self) -> Option<Self::Item> { self.0.next_back().map(|e| e.0) }
}

impl<'a, T, B> ExactSizeIterator for Iter<'a, T, B> {}
