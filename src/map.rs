//! An ordered map based on a self-balancing binary search tree.

use compare::{Compare, Natural};
use std::fmt::{self, Debug};
use std::hash::{self, Hash};
use std::iter;
use std::ops;
use std::ops::Bound::Unbounded;
use super::{Avl, Balance, Error, RedBlack};
use super::node::{self, Tree};
use super::view::View;

/// An ordered map based on a self-balancing binary search tree.
///
/// The tree is balanced by `B`, either [`Avl`](struct.Avl.html) (the default) or
/// [`RedBlack`](struct.RedBlack.html).
///
/// The behavior of this map is undefined if a key's ordering relative to any other key changes
/// while the key is in the map. This is normally only possible through `Cell`, `RefCell`, or
/// unsafe code.
pub struct TreeMap<K, V, C = Natural<K>, B = Avl> where C: Compare<K>, B: Balance {
    tree: Tree<K, V, C, B>,
}

/// An ordered map balanced by the red-black scheme.
pub type RbTreeMap<K, V, C = Natural<K>> = TreeMap<K, V, C, RedBlack>;

/// A view of a map's keys.
///
/// Keys can be queried and removed through the view, but not added.
pub type KeySet<'a, K, V, C = Natural<K>, B = Avl> = View<&'a TreeMap<K, V, C, B>, K>;

/// A mutable view of a map's keys.
pub type KeySetMut<'a, K, V, C = Natural<K>, B = Avl> = View<&'a mut TreeMap<K, V, C, B>, K>;

impl<K, V> TreeMap<K, V> where K: Ord {
    /// Creates an empty map ordered according to the natural order of its keys.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = navtree::TreeMap::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { TreeMap::with_cmp(compare::natural()) }
}

impl<K, V, C> TreeMap<K, V, C> where C: Compare<K> {
    /// Creates an empty map ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let mut map = navtree::TreeMap::with_cmp(natural().rev());
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn with_cmp(cmp: C) -> Self { TreeMap { tree: Tree::new(cmp) } }
}

impl<K, V, C, B> TreeMap<K, V, C, B> where C: Compare<K>, B: Balance {
    pub(crate) fn tree(&self) -> &Tree<K, V, C, B> { &self.tree }

    pub(crate) fn tree_mut(&mut self) -> &mut Tree<K, V, C, B> { &mut self.tree }

    /// Checks if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = navtree::TreeMap::new();
    /// assert!(map.is_empty());
    ///
    /// map.insert(2, "b");
    /// assert!(!map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.tree.is_empty() }

    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize { self.tree.len() }

    /// Returns a reference to the map's comparator.
    pub fn cmp(&self) -> &C { self.tree.cmp() }

    /// Removes all entries from the map.
    pub fn clear(&mut self) { self.tree.clear(); }

    /// Inserts an entry into the map, returning the previous value, if any, associated
    /// with the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = navtree::TreeMap::new();
    /// assert_eq!(map.insert(1, "a"), None);
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.insert(1, "b"), Some("a"));
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> { self.tree.insert(key, value).1 }

    /// Removes and returns the entry whose key is equal to the given key, returning
    /// `None` if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = navtree::TreeMap::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.remove(&1), Some((1, "a")));
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Option<(K, V)> where C: Compare<Q, K> {
        self.tree.remove(key)
    }

    /// Checks if the map contains the given key.
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool where C: Compare<Q, K> {
        self.tree.find(key).is_some()
    }

    /// Returns a reference to the value associated with the given key, or `None` if the
    /// map does not contain the key.
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V> where C: Compare<Q, K> {
        self.tree.find(key).map(|id| self.tree.entry(id).1)
    }

    /// Returns a mutable reference to the value associated with the given key, or `None`
    /// if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = navtree::TreeMap::new();
    /// map.insert(1, "a");
    ///
    /// if let Some(value) = map.get_mut(&1) { *value = "b"; }
    ///
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V> where C: Compare<Q, K> {
        match self.tree.find(key) {
            Some(id) => Some(self.tree.entry_mut(id).1),
            None => None,
        }
    }

    /// Returns the map's minimum entry.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyContainer` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use navtree::Error;
    ///
    /// let mut map = navtree::TreeMap::new();
    /// assert_eq!(map.first(), Err(Error::EmptyContainer));
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// assert_eq!(map.first(), Ok((&1, &"a")));
    /// ```
    pub fn first(&self) -> Result<(&K, &V), Error> { self.min().ok_or(Error::EmptyContainer) }

    /// Returns the map's maximum entry.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyContainer` if the map is empty.
    pub fn last(&self) -> Result<(&K, &V), Error> { self.max().ok_or(Error::EmptyContainer) }

    /// Returns the map's minimum entry, or `None` if the map is empty.
    pub fn min(&self) -> Option<(&K, &V)> { self.tree.first().map(|id| self.tree.entry(id)) }

    /// Returns the map's maximum entry, or `None` if the map is empty.
    pub fn max(&self) -> Option<(&K, &V)> { self.tree.last().map(|id| self.tree.entry(id)) }

    /// Removes and returns the map's minimum entry, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = navtree::TreeMap::new();
    /// assert_eq!(map.poll_first(), None);
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// assert_eq!(map.poll_first(), Some((1, "a")));
    /// assert_eq!(map.poll_first(), Some((2, "b")));
    /// assert!(map.is_empty());
    /// ```
    pub fn poll_first(&mut self) -> Option<(K, V)> {
        self.tree.first().map(|id| {
            let removed = self.tree.remove_node(id);
            (removed.key, removed.value)
        })
    }

    /// Removes and returns the map's maximum entry, or `None` if the map is empty.
    pub fn poll_last(&mut self) -> Option<(K, V)> {
        self.tree.last().map(|id| {
            let removed = self.tree.remove_node(id);
            (removed.key, removed.value)
        })
    }

    /// Returns the entry with the greatest key strictly less than the given key, or `None` if
    /// there is no such entry.
    ///
    /// The given key need not itself be present in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = navtree::TreeMap::new();
    ///
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.lower(&1), None);
    /// assert_eq!(map.lower(&2), Some((&1, &"a")));
    /// assert_eq!(map.floor(&3), Some((&3, &"c")));
    /// assert_eq!(map.ceiling(&2), Some((&3, &"c")));
    /// assert_eq!(map.higher(&3), None);
    /// ```
    pub fn lower<Q: ?Sized>(&self, key: &Q) -> Option<(&K, &V)> where C: Compare<Q, K> {
        self.tree.lower(key).map(|id| self.tree.entry(id))
    }

    /// Returns the entry with the greatest key less than or equal to the given key, or `None`
    /// if there is no such entry.
    pub fn floor<Q: ?Sized>(&self, key: &Q) -> Option<(&K, &V)> where C: Compare<Q, K> {
        self.tree.floor(key).map(|id| self.tree.entry(id))
    }

    /// Returns the entry with the least key greater than or equal to the given key, or `None`
    /// if there is no such entry.
    pub fn ceiling<Q: ?Sized>(&self, key: &Q) -> Option<(&K, &V)> where C: Compare<Q, K> {
        self.tree.ceiling(key).map(|id| self.tree.entry(id))
    }

    /// Returns the entry with the least key strictly greater than the given key, or `None` if
    /// there is no such entry.
    pub fn higher<Q: ?Sized>(&self, key: &Q) -> Option<(&K, &V)> where C: Compare<Q, K> {
        self.tree.higher(key).map(|id| self.tree.entry(id))
    }

    /// Returns an iterator over the map's entries.
    ///
    /// The iterator yields the entries in ascending order according to the map's comparator.
    pub fn iter(&self) -> Iter<K, V, B> {
        Iter(node::Iter::new(self.tree.nodes(), self.tree.first(), self.tree.last(),
                             self.tree.len(), true))
    }

    /// Returns a deep copy of the map.
    ///
    /// The copy shares no nodes with the map; mutating one never affects the other.
    pub fn copy(&self) -> Self where K: Clone, V: Clone, C: Clone {
        TreeMap { tree: self.tree.copy() }
    }

    /// Returns a view of the map's keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = navtree::TreeMap::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// let keys = map.key_set();
    /// assert_eq!(keys.iter().collect::<Vec<_>>(), [&1, &2]);
    /// assert!(keys.contains(&2));
    /// ```
    pub fn key_set(&self) -> KeySet<K, V, C, B> { View::new(self, Unbounded, Unbounded, false, false) }

    /// Returns a mutable view of the map's keys in ascending order.
    ///
    /// Removing a key through the view removes its entry from the map. Adding keys is not
    /// supported.
    ///
    /// # Examples
    ///
    /// ```
    /// use navtree::Error;
    ///
    /// let mut map = navtree::TreeMap::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// {
    ///     let mut keys = map.key_set_mut();
    ///     assert_eq!(keys.remove(&1), Ok(true));
    ///     assert_eq!(keys.add(3), Err(Error::UnsupportedOperation("add to a key view")));
    /// }
    ///
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn key_set_mut(&mut self) -> KeySetMut<K, V, C, B> {
        View::new(self, Unbounded, Unbounded, false, false)
    }

    /// Returns a view of the map's keys in descending order.
    pub fn descending_key_set(&self) -> KeySet<K, V, C, B> {
        View::new(self, Unbounded, Unbounded, true, false)
    }
}

impl<K, V, C, B> Clone for TreeMap<K, V, C, B>
    where K: Clone, V: Clone, C: Compare<K> + Clone, B: Balance {

    fn clone(&self) -> Self { self.copy() }
}

impl<K, V, C, B> Debug for TreeMap<K, V, C, B>
    where K: Debug, V: Debug, C: Compare<K>, B: Balance {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C, B> Default for TreeMap<K, V, C, B> where C: Compare<K> + Default, B: Balance {
    fn default() -> Self { TreeMap { tree: Tree::new(C::default()) } }
}

impl<K, V, C, B> Extend<(K, V)> for TreeMap<K, V, C, B> where C: Compare<K>, B: Balance {
    fn extend<I: IntoIterator<Item=(K, V)>>(&mut self, it: I) {
        for (k, v) in it { self.insert(k, v); }
    }
}

impl<K, V, C, B> iter::FromIterator<(K, V)> for TreeMap<K, V, C, B>
    where C: Compare<K> + Default, B: Balance {

    fn from_iter<I: IntoIterator<Item=(K, V)>>(it: I) -> Self {
        let mut map = TreeMap::default();
        map.extend(it);
        map
    }
}

impl<K, V, C, B> Hash for TreeMap<K, V, C, B> where K: Hash, V: Hash, C: Compare<K>, B: Balance {
    fn hash<H: hash::Hasher>(&self, h: &mut H) {
        for e in self.iter() { e.hash(h); }
    }
}

impl<'a, K, V, C, B, Q: ?Sized> ops::Index<&'a Q> for TreeMap<K, V, C, B>
    where C: Compare<K> + Compare<Q, K>, B: Balance {

    type Output = V;
    fn index(&self, key: &Q) -> &V { self.get(key).expect("key not found") }
}

impl<'a, K, V, C, B> IntoIterator for &'a TreeMap<K, V, C, B> where C: Compare<K>, B: Balance {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, B>;
    fn into_iter(self) -> Iter<'a, K, V, B> { self.iter() }
}

impl<K, V, C, B> IntoIterator for TreeMap<K, V, C, B> where C: Compare<K>, B: Balance {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V, C, B>;

    /// Returns an iterator that consumes the map.
    ///
    /// The iterator yields the entries in ascending order according to the map's comparator.
    fn into_iter(self) -> IntoIter<K, V, C, B> { IntoIter(self) }
}

impl<K, V, C, B> PartialEq for TreeMap<K, V, C, B> where V: PartialEq, C: Compare<K>, B: Balance {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(l, r)| {
            self.cmp().compares_eq(l.0, r.0) && l.1 == r.1
        })
    }
}

impl<K, V, C, B> Eq for TreeMap<K, V, C, B> where V: Eq, C: Compare<K>, B: Balance {}

/// An iterator that consumes the map.
///
/// The iterator yields the entries in ascending order according to the map's comparator.
///
/// # Examples
///
/// Acquire through the `IntoIterator` trait:
///
/// ```
/// let mut map = navtree::TreeMap::new();
///
/// map.insert(2, "b");
/// map.insert(1, "a");
///
/// assert_eq!(map.into_iter().collect::<Vec<_>>(), [(1, "a"), (2, "b")]);
/// ```
pub struct IntoIter<K, V, C = Natural<K>, B = Avl>(TreeMap<K, V, C, B>)
    where C: Compare<K>, B: Balance;

impl<K, V, C, B> Iterator for IntoIter<K, V, C, B> where C: Compare<K>, B: Balance {
    type Item = (K, V);
    fn next(&mut self) -> Option<(K, V)> { self.0.poll_first() }
    fn size_hint(&self) -> (usize, Option<usize>) { (self.0.len(), Some(self.0.len())) }
}

impl<K, V, C, B> DoubleEndedIterator for IntoIter<K, V, C, B> where C: Compare<K>, B: Balance {
    fn next_back(&mut self) -> Option<(K, V)> { self.0.poll_last() }
}

impl<K, V, C, B> ExactSizeIterator for IntoIter<K, V, C, B> where C: Compare<K>, B: Balance {}

/// An iterator over the map's entries.
///
/// The iterator yields the entries in ascending order according to the map's comparator.
///
/// Acquire through [`TreeMap::iter`](struct.TreeMap.html#method.iter) or the `IntoIterator`
/// trait.
pub struct Iter<'a, K: 'a, V: 'a, B: 'a = Avl>(node::Iter<'a, K, V, B>);

impl<'a, K, V, B> Clone for Iter<'a, K, V, B> {
    fn clone(&self) -> Self { Iter(self.0.clone()) }
}

impl<'a, K, V, B> Iterator for Iter<'a, K, V, B> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<(&'a K, &'a V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V, B> DoubleEndedIterator for Iter<'a, K, V, B> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> { self.0.next_back() }
}

impl<'a, K, V, B> ExactSizeIterator for Iter<'a, K, V, B> {}
