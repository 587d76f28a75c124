use ::ordered_iter::{OrderedMapIterator, OrderedSetIterator};
use compare::Compare;
use super::{map, set, Balance};

impl<K, V, C, B> OrderedMapIterator for map::IntoIter<K, V, C, B>
    where K: Ord, C: Compare<K>, B: Balance {

    type Key = K;
    type Val = V;
}

impl<'a, K, V, B> OrderedMapIterator for map::Iter<'a, K, V, B> where K: Ord {
    type Key = &'a K;
    type Val = &'a V;
}

impl<T, C, B> OrderedSetIterator for set::IntoIter<T, C, B> where T: Ord, C: Compare<T>, B: Balance {}

impl<'a, T, B> OrderedSetIterator for set::Iter<'a, T, B> where T: Ord {}
