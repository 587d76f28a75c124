use compare::{natural, Compare, Natural};
use navtree::{Avl, Balance, Error, RedBlack, TreeMap, TreeSet};

fn odd_set<B: Balance>() -> TreeSet<i32, Natural<i32>, B> {
    let mut set = TreeSet::default();
    for &key in &[5, 3, 8, 1, 4, 7, 9] { set.insert(key); }
    set.remove(&8);
    set.remove(&4);
    set
}

fn collect<'a, I: Iterator<Item=&'a i32>>(it: I) -> Vec<i32> { it.cloned().collect() }

fn check_navigation<B: Balance>() {
    let set = odd_set::<B>();
    assert_eq!(collect(set.iter()), [1, 3, 5, 7, 9]);

    assert_eq!(set.first(), Ok(&1));
    assert_eq!(set.last(), Ok(&9));
    assert_eq!(set.floor(&6), Some(&5));
    assert_eq!(set.ceiling(&6), Some(&7));
    assert_eq!(set.lower(&5), Some(&3));
    assert_eq!(set.higher(&5), Some(&7));
    assert_eq!(set.lower(&1), None);
    assert_eq!(set.higher(&9), None);
}

fn check_views<B: Balance>() {
    let set = odd_set::<B>();

    assert_eq!(collect(set.head_set(&5, false).iter()), [1, 3]);
    assert_eq!(collect(set.tail_set(&5, true).iter()), [5, 7, 9]);
    assert_eq!(collect(set.descending_set().iter()), [9, 7, 5, 3, 1]);
    assert_eq!(collect(set.sub_set(&3, true, &7, false).unwrap().iter()), [3, 5]);
    assert!(set.sub_set(&5, false, &5, false).unwrap().is_empty());

    let desc = set.descending_set();
    assert_eq!(collect(desc.head_set(&5, true).unwrap().iter()), [9, 7, 5]);
    assert_eq!(collect(desc.tail_set(&5, false).unwrap().iter()), [3, 1]);
    assert_eq!(collect(desc.sub_set(&7, true, &3, true).unwrap().iter()), [7, 5, 3]);
    assert_eq!(desc.sub_set(&3, true, &7, true).err(), Some(Error::OutOfRange));
}

fn check_cursor_removal<B: Balance>() {
    let mut set: TreeSet<i32, Natural<i32>, B> = TreeSet::default();
    set.extend(vec![1, 2, 3]);

    {
        let mut cursor = set.cursor_mut();
        assert_eq!(cursor.next(), Some(&1));
        assert_eq!(cursor.remove(), Some(1));
    }

    assert_eq!(collect(set.iter()), [2, 3]);
}

#[test]
fn test_navigation() {
    check_navigation::<Avl>();
    check_navigation::<RedBlack>();
}

#[test]
fn test_views() {
    check_views::<Avl>();
    check_views::<RedBlack>();
}

#[test]
fn test_cursor_removal() {
    check_cursor_removal::<Avl>();
    check_cursor_removal::<RedBlack>();
}

#[test]
fn test_extremes_of_owned_set() {
    let set = odd_set::<RedBlack>();
    let empty: TreeSet<i32> = TreeSet::new();

    assert_eq!(TreeSet::min(&set), Some(&1));
    assert_eq!(TreeSet::max(&set), Some(&9));
    assert_eq!(TreeSet::min(&empty), None);

    let desc = set.descending_set();
    assert_eq!(desc.first(), Ok(&9));
    assert_eq!(desc.last(), Ok(&1));
    assert_eq!(desc.find_first(|&key| key < 9), Some(&7));
}

#[test]
fn test_view_queries_outlive_temporaries() {
    let set = odd_set::<Avl>();

    let found = {
        let view = set.sub_set(&2, true, &8, true).unwrap();
        let mut cursor = view.cursor();
        let first = cursor.next().cloned();
        (first, view.lower(&7).cloned(), view.iter().rev().next().cloned())
    };

    assert_eq!(found, (Some(3), Some(5), Some(7)));
}

#[test]
fn test_empty_set() {
    let mut set: TreeSet<i32> = TreeSet::new();

    assert_eq!(set.first(), Err(Error::EmptyContainer));
    assert_eq!(set.last(), Err(Error::EmptyContainer));
    assert_eq!(set.poll_first(), None);
    assert_eq!(set.poll_last(), None);
    assert!(set.cursor_at(&1).is_err());
    assert!(!set.cursor().has_next());
    assert_eq!(set.descending_set().first(), Err(Error::EmptyContainer));
}

#[test]
fn test_nested_view_bounds() {
    let set = odd_set::<Avl>();
    let view = set.sub_set(&3, true, &7, false).unwrap();

    assert_eq!(view.sub_set(&1, true, &5, true).err(), Some(Error::OutOfRange));
    assert_eq!(view.head_set(&7, true).err(), Some(Error::OutOfRange));
    assert_eq!(collect(view.head_set(&7, false).unwrap().iter()), [3, 5]);
    assert_eq!(collect(view.tail_set(&3, false).unwrap().iter()), [5]);
    assert_eq!(collect(view.descending_set().iter()), [5, 3]);

    assert!(view.contains(&5));
    assert!(!view.contains(&7));
    assert!(!view.contains(&4));
    assert_eq!(view.len(), 2);
}

#[test]
fn test_view_writes_through() {
    let mut set = odd_set::<RedBlack>();

    {
        let mut view = set.sub_set_mut(&2, true, &8, true).unwrap();
        assert_eq!(view.add(4), Ok(true));
        assert_eq!(view.add(10), Err(Error::OutOfRange));
        assert_eq!(view.remove(&1), Err(Error::OutOfRange));
        assert_eq!(view.remove(&7), Ok(true));
        assert_eq!(view.poll_first(), Some(3));
        assert_eq!(view.poll_last(), Some(5));
        assert!(view.copy().is_err());
    }

    assert_eq!(collect(set.iter()), [1, 4, 9]);

    {
        let mut desc = set.descending_set_mut();
        assert_eq!(desc.poll_first(), Some(9));
        assert_eq!(desc.poll_last(), Some(1));
    }

    assert_eq!(collect(set.iter()), [4]);
}

#[test]
fn test_view_sees_later_changes() {
    let mut set = odd_set::<Avl>();
    set.insert(6);

    let view = set.tail_set(&6, true);
    assert_eq!(collect(view.iter()), [6, 7, 9]);
    assert_eq!(view.first(), Ok(&6));
}

#[test]
fn test_key_set() {
    let mut map = TreeMap::new();
    map.insert(1, "a");
    map.insert(2, "b");

    {
        let mut keys = map.key_set_mut();
        assert_eq!(keys.add(3), Err(Error::UnsupportedOperation("add to a key view")));
        assert_eq!(keys.remove(&1), Ok(true));
        assert_eq!(keys.remove(&1), Ok(false));
    }

    assert_eq!(map.len(), 1);
    assert_eq!(map[&2], "b");
    assert_eq!(collect_keys(&map), [2]);
}

fn collect_keys<V>(map: &TreeMap<i32, V>) -> Vec<i32> { map.key_set().iter().cloned().collect() }

#[test]
fn test_sentinels() {
    let mut set = odd_set::<Avl>();

    assert_eq!(set.lower_or_default(&1), 0);
    assert_eq!(set.ceiling_or_default(&10), 0);

    set.set_default_min_value(-1);
    set.set_default_max_value(100);

    assert_eq!(set.lower_or_default(&1), -1);
    assert_eq!(set.floor_or_default(&0), -1);
    assert_eq!(set.ceiling_or_default(&10), 100);
    assert_eq!(set.higher_or_default(&9), 100);
    assert_eq!(set.floor_or_default(&6), 5);

    let view = set.head_set(&3, false);
    assert_eq!(view.higher_or_default(&1), 100);
    assert_eq!(view.lower_or_default(&1), -1);

    let copy = set.copy();
    assert_eq!(copy.lower_or_default(&1), -1);

    let mut empty = set.copy();
    empty.clear();
    assert_eq!(empty.first_or_default(), -1);
    assert_eq!(empty.last_or_default(), 100);
    assert_eq!(empty.poll_first_or_default(), -1);
    assert_eq!(empty.poll_last_or_default(), 100);
}

#[test]
fn test_copy_is_independent() {
    let set = odd_set::<RedBlack>();
    let mut copy = set.copy();

    copy.insert(2);
    copy.remove(&9);

    assert_eq!(collect(set.iter()), [1, 3, 5, 7, 9]);
    assert_eq!(collect(copy.iter()), [1, 2, 3, 5, 7]);
    assert!(set != copy);
    assert!(set > copy);
}

#[test]
fn test_reversed_comparator() {
    let mut set = TreeSet::with_cmp(natural().rev());
    set.extend(vec![1, 3, 5, 7, 9]);

    assert_eq!(set.first(), Ok(&9));
    assert_eq!(set.lower(&5), Some(&7));
    assert_eq!(collect(set.head_set(&5, false).iter()), [9, 7]);
    assert_eq!(collect(set.descending_set().iter()), [1, 3, 5, 7, 9]);
}

#[test]
fn test_bulk_operations() {
    let set = odd_set::<Avl>();

    let mut seen = vec![];
    set.for_each(|&key| seen.push(key));
    assert_eq!(seen, [1, 3, 5, 7, 9]);

    assert_eq!(set.reduce(|acc, &key| acc + key), Some(25));
    assert_eq!(set.count(|&key| key > 4), 3);
    assert!(set.matches_any(|&key| key == 7));
    assert!(set.matches_all(|&key| key % 2 == 1));
    assert!(set.matches_none(|&key| key > 9));
    assert_eq!(set.find_first(|&key| key > 4), Some(&5));

    let desc = set.descending_set();
    assert_eq!(desc.find_first(|&key| key < 6), Some(&5));
    assert_eq!(desc.reduce(|acc, &key| acc * 10 + key), Some(97531));
    assert_eq!(desc.count(|_| true), 5);
    assert!(desc.matches_none(|&key| key == 4));

    let empty: TreeSet<i32> = TreeSet::new();
    assert_eq!(empty.reduce(|acc, &key| acc + key), None);
    assert!(empty.matches_all(|_| false));
}

#[test]
fn test_map_entries() {
    let mut map: TreeMap<i32, &str, Natural<i32>, RedBlack> = TreeMap::default();
    map.extend(vec![(2, "b"), (1, "a"), (3, "c")]);

    assert_eq!(map.first(), Ok((&1, &"a")));
    assert_eq!(map.last(), Ok((&3, &"c")));
    assert_eq!(map.lower(&2), Some((&1, &"a")));
    assert_eq!(map.insert(2, "B"), Some("b"));
    assert_eq!(map.get(&2), Some(&"B"));
    assert_eq!(map.poll_last(), Some((3, "c")));
    assert_eq!(map.remove(&1), Some((1, "a")));
    assert_eq!(format!("{:?}", map), r#"{2: "B"}"#);
}

#[test]
fn test_debug() {
    let set = odd_set::<Avl>();
    assert_eq!(format!("{:?}", set), "{1, 3, 5, 7, 9}");
}
