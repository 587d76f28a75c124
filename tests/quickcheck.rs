use compare::Compare;
use navtree::{Balance, TreeMap};
use quickcheck::{Arbitrary, Gen};

pub trait Remove<K, C, B> where C: Compare<K>, B: Balance {
    fn remove<V>(&self, map: &mut TreeMap<K, V, C, B>) -> Option<(K, V)>;
}

macro_rules! remove {
    ($K:ty, $V:ty, $B:ty, $R:ty) => {
        mod remove {
            use compare::Natural;
            use crate::Remove;
            use navtree::TreeMap;
            use quickcheck::{quickcheck, TestResult};

            type Map = TreeMap<$K, $V, Natural<$K>, $B>;

            #[test]
            fn removes_key() {
                fn test(mut map: Map, removal: $R) -> TestResult {
                    match removal.remove(&mut map) {
                        None => TestResult::discard(),
                        Some((ref key, _)) => TestResult::from_bool(
                            !map.contains_key(key) &&
                            map.get(key).is_none() &&
                            map.get_mut(key).is_none() &&
                            map.iter().find(|e| e.0 == key).is_none()
                        ),
                    }
                }

                quickcheck(test as fn(Map, $R) -> TestResult);
            }

            #[test]
            fn affects_no_others() {
                fn test(mut map: Map, removal: $R) -> bool {
                    let old_map = map.clone();

                    match removal.remove(&mut map) {
                        None => map == old_map,
                        Some((ref key, _)) =>
                            map.iter().collect::<Vec<_>>() ==
                               old_map.iter().filter(|e| e.0 != key).collect::<Vec<_>>()
                    }
                }

                quickcheck(test as fn(Map, $R) -> bool);
            }

            #[test]
            fn sets_len() {
                fn test(mut map: Map, removal: $R) -> bool {
                    let old_len = map.len();

                    match removal.remove(&mut map) {
                        None => map.len() == old_len,
                        Some(_) => map.len() == old_len - 1,
                    }
                }

                quickcheck(test as fn(Map, $R) -> bool);
            }

            #[test]
            fn keeps_extremes() {
                fn test(mut map: Map, removal: $R) -> bool {
                    removal.remove(&mut map);
                    map.min() == map.iter().next() && map.max() == map.iter().next_back()
                }

                quickcheck(test as fn(Map, $R) -> bool);
            }
        }
    }
}

#[derive(Clone, Debug)]
struct Find<Q>(Q);

impl<Q> Arbitrary for Find<Q> where Q: Arbitrary {
    fn arbitrary(gen: &mut Gen) -> Self { Find(Q::arbitrary(gen)) }
    fn shrink(&self) -> Box<dyn Iterator<Item=Self>> { Box::new(self.0.shrink().map(Find)) }
}

impl<Q, K, C, B> Remove<K, C, B> for Find<Q> where C: Compare<K> + Compare<Q, K>, B: Balance {
    fn remove<V>(&self, map: &mut TreeMap<K, V, C, B>) -> Option<(K, V)> { map.remove(&self.0) }
}

pub trait Insert<K> {
    fn key(&self) -> K;
    fn insert<V, C, B>(self, map: &mut TreeMap<K, V, C, B>, value: V) -> Option<V>
        where C: Compare<K>, B: Balance;
}

impl<K> Insert<K> for Find<K> where K: Clone {
    fn key(&self) -> K { self.0.clone() }

    fn insert<V, C, B>(self, map: &mut TreeMap<K, V, C, B>, value: V) -> Option<V>
        where C: Compare<K>, B: Balance {

        map.insert(self.0, value)
    }
}

macro_rules! insert {
    ($K:ty, $V:ty, $B:ty, $R:ty) => {
        mod insert {
            use compare::Natural;
            use crate::Insert;
            use navtree::TreeMap;
            use quickcheck::quickcheck;

            type Map = TreeMap<$K, $V, Natural<$K>, $B>;

            #[test]
            fn sets_len() {
                fn test(mut map: Map, r: $R, value: $V) -> bool {
                    let old_len = map.len();

                    if r.insert(&mut map, value).is_some() {
                        map.len() == old_len
                    } else {
                        map.len() == old_len + 1
                    }
                }

                quickcheck(test as fn(Map, $R, $V) -> bool);
            }

            #[test]
            fn inserts_key() {
                fn test(mut map: Map, r: $R, mut value: $V) -> bool {
                    let key = r.key();
                    r.insert(&mut map, value);

                    map.contains_key(&key) &&
                    map.get(&key) == Some(&value) &&
                    map.get_mut(&key) == Some(&mut value) &&
                    map.iter().filter(|e| *e.0 == key).collect::<Vec<_>>() == [(&key, &value)]
                }

                quickcheck(test as fn(Map, $R, $V) -> bool);
            }

            #[test]
            fn affects_no_others() {
                fn test(mut map: Map, r: $R, value: $V) -> bool {
                    let old_map = map.clone();
                    let key = r.key();
                    r.insert(&mut map, value);

                    map.iter().filter(|e| *e.0 != key).collect::<Vec<_>>() ==
                        old_map.iter().filter(|e| *e.0 != key).collect::<Vec<_>>()
                }

                quickcheck(test as fn(Map, $R, $V) -> bool);
            }

            #[test]
            fn returns_old_value() {
                fn test(mut map: Map, r: $R, value: $V) -> bool {
                    let key = r.key();
                    map.get(&key).cloned() == r.insert(&mut map, value)
                }

                quickcheck(test as fn(Map, $R, $V) -> bool);
            }
        }
    }
}

#[derive(Clone, Debug)]
struct Last;

impl Arbitrary for Last { fn arbitrary(_gen: &mut Gen) -> Self { Last } }

impl<K, C, B> Remove<K, C, B> for Last where C: Compare<K>, B: Balance {
    fn remove<V>(&self, map: &mut TreeMap<K, V, C, B>) -> Option<(K, V)> { map.poll_last() }
}

#[derive(Clone, Debug)]
struct First;

impl Arbitrary for First { fn arbitrary(_gen: &mut Gen) -> Self { First } }

impl<K, C, B> Remove<K, C, B> for First where C: Compare<K>, B: Balance {
    fn remove<V>(&self, map: &mut TreeMap<K, V, C, B>) -> Option<(K, V)> { map.poll_first() }
}

macro_rules! balanced {
    ($B:ty) => {
        type Map = navtree::TreeMap<u32, u16, compare::Natural<u32>, $B>;

        mod find {
            insert!{u32, u16, $B, crate::Find<u32>}
            remove!{u32, u16, $B, crate::Find<u32>}
        }

        mod last {
            use quickcheck::quickcheck;
            use super::Map;

            #[test]
            fn agrees_with_iter() {
                fn test(map: Map) -> bool {
                    map.last().ok() == map.iter().rev().next() && map.max() == map.iter().rev().next()
                }

                quickcheck(test as fn(Map) -> bool);
            }

            remove!{u32, u16, $B, crate::Last}
        }

        mod first {
            use quickcheck::quickcheck;
            use super::Map;

            #[test]
            fn agrees_with_iter() {
                fn test(map: Map) -> bool {
                    map.first().ok() == map.iter().next() && map.min() == map.iter().next()
                }

                quickcheck(test as fn(Map) -> bool);
            }

            remove!{u32, u16, $B, crate::First}
        }

        mod navigation {
            use quickcheck::quickcheck;
            use super::Map;

            #[test]
            fn lower_agrees_with_iter() {
                fn test(map: Map, key: u32) -> bool {
                    map.lower(&key) == map.iter().rev().find(|e| *e.0 < key)
                }

                quickcheck(test as fn(Map, u32) -> bool);
            }

            #[test]
            fn floor_agrees_with_iter() {
                fn test(map: Map, key: u32) -> bool {
                    map.floor(&key) == map.iter().rev().find(|e| *e.0 <= key)
                }

                quickcheck(test as fn(Map, u32) -> bool);
            }

            #[test]
            fn ceiling_agrees_with_iter() {
                fn test(map: Map, key: u32) -> bool {
                    map.ceiling(&key) == map.iter().find(|e| *e.0 >= key)
                }

                quickcheck(test as fn(Map, u32) -> bool);
            }

            #[test]
            fn higher_agrees_with_iter() {
                fn test(map: Map, key: u32) -> bool {
                    map.higher(&key) == map.iter().find(|e| *e.0 > key)
                }

                quickcheck(test as fn(Map, u32) -> bool);
            }
        }

        mod iter {
            use quickcheck::quickcheck;
            use super::Map;

            #[test]
            fn ascends() {
                fn test(map: Map) -> bool {
                    map.iter().zip(map.iter().skip(1)).all(|(e1, e2)| e1.0 < e2.0)
                }

                quickcheck(test as fn(Map) -> bool);
            }

            #[test]
            fn descends_when_reversed() {
                fn test(map: Map) -> bool {
                    map.iter().rev().zip(map.iter().rev().skip(1)).all(|(e2, e1)| e2.0 > e1.0)
                }

                quickcheck(test as fn(Map) -> bool);
            }

            #[test]
            fn size_hint_is_exact() {
                fn test(map: Map) -> bool {
                    let mut len = map.len();
                    let mut it = map.iter();

                    loop {
                        if it.size_hint() != (len, Some(len)) { return false; }
                        if it.next().is_none() { break; }
                        len -= 1;
                    }

                    len == 0 && it.size_hint() == (0, Some(0))
                }

                quickcheck(test as fn(Map) -> bool);
            }

            #[test]
            fn meets_in_the_middle() {
                fn test(map: Map) -> bool {
                    let mut it = map.iter();
                    let mut seen = vec![];

                    loop {
                        match it.next() {
                            Some(e) => seen.push(e),
                            None => break,
                        }

                        match it.next_back() {
                            Some(e) => seen.push(e),
                            None => break,
                        }
                    }

                    seen.sort();
                    seen == map.iter().collect::<Vec<_>>()
                }

                quickcheck(test as fn(Map) -> bool);
            }

            #[test]
            fn into_iter_agrees_with_iter() {
                fn test(map: Map) -> bool {
                    let entries: Vec<_> = map.iter().map(|(&k, &v)| (k, v)).collect();
                    map.into_iter().collect::<Vec<_>>() == entries
                }

                quickcheck(test as fn(Map) -> bool);
            }
        }

        mod copy {
            use quickcheck::quickcheck;
            use super::Map;

            #[test]
            fn round_trips() {
                fn test(map: Map) -> bool {
                    let copy = map.copy();
                    copy == map && copy.iter().eq(map.iter())
                }

                quickcheck(test as fn(Map) -> bool);
            }

            #[test]
            fn is_independent() {
                fn test(map: Map, entries: Vec<(u32, u16)>) -> bool {
                    let old: Vec<_> = map.iter().map(|(&k, &v)| (k, v)).collect();
                    let mut copy = map.copy();

                    for (k, v) in entries { copy.insert(k, v); }
                    copy.poll_first();

                    map.iter().map(|(&k, &v)| (k, v)).collect::<Vec<_>>() == old
                }

                quickcheck(test as fn(Map, Vec<(u32, u16)>) -> bool);
            }
        }
    }
}

mod avl {
    balanced!{navtree::Avl}
}

mod red_black {
    balanced!{navtree::RedBlack}
}
