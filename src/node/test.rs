use compare::{natural, Natural};
use quickcheck::{quickcheck, Arbitrary, Gen};
use std::cmp;
use std::fmt::Debug;
use super::{NodeId, Nodes, Side, Tree};
use super::super::balance::{Avl, Balance, Color, RedBlack};

/// An operation on a `Tree`.
#[derive(Clone, Debug)]
enum Op<K> {
    /// Insert a key into the tree.
    Insert(K),
    /// Remove the key at index `n % tree.len()` from the tree.
    Remove(usize),
}

impl<K> Arbitrary for Op<K> where K: Arbitrary {
    fn arbitrary(gen: &mut Gen) -> Self {
        if bool::arbitrary(gen) {
            Op::Insert(K::arbitrary(gen))
        } else {
            Op::Remove(usize::arbitrary(gen))
        }
    }
}

impl<K> Op<K> where K: Clone + Ord {
    /// Perform the operation on the given tree.
    fn exec<B: Balance>(self, tree: &mut Tree<K, (), Natural<K>, B>) {
        match self {
            Op::Insert(key) => { tree.insert(key, ()); }
            Op::Remove(index) => if !tree.is_empty() {
                let id = in_order(tree)[index % tree.len()];
                let key = tree.key(id).clone();
                assert!(tree.remove(&key).is_some());
            },
        }
    }
}

fn in_order<K, V, C, B>(tree: &Tree<K, V, C, B>) -> Vec<NodeId> where B: Balance {
    let mut ids = vec![];
    let mut link = tree.first();

    while let Some(id) = link {
        ids.push(id);
        link = tree.nodes().next(id);
    }

    ids
}

fn keys<K, V, C, B>(tree: &Tree<K, V, C, B>) -> Vec<K> where K: Clone, B: Balance {
    in_order(tree).into_iter().map(|id| tree.key(id).clone()).collect()
}

fn new_tree<K: Ord, B: Balance>() -> Tree<K, (), Natural<K>, B> { Tree::new(natural()) }

// Returns the number of nodes reachable from the root
fn assert_links<K, V, B>(nodes: &Nodes<K, V, B>) -> usize {
    fn walk<K, V, B>(nodes: &Nodes<K, V, B>, id: NodeId, parent: Option<NodeId>) -> usize {
        assert_eq!(nodes.parent(id), parent);
        1 + nodes.left(id).map_or(0, |left| walk(nodes, left, Some(id)))
          + nodes.right(id).map_or(0, |right| walk(nodes, right, Some(id)))
    }

    nodes.root().map_or(0, |root| walk(nodes, root, None))
}

fn assert_search_tree<K, V, C, B>(tree: &Tree<K, V, C, B>) where K: Ord + Debug, B: Balance {
    assert_eq!(assert_links(tree.nodes()), tree.len());

    let ids = in_order(tree);
    assert_eq!(ids.len(), tree.len());
    for pair in ids.windows(2) { assert!(tree.key(pair[0]) < tree.key(pair[1])); }

    let root = tree.nodes().root();
    assert_eq!(tree.first(), root.map(|root| tree.nodes().extremum(root, Side::Left)));
    assert_eq!(tree.last(), root.map(|root| tree.nodes().extremum(root, Side::Right)));
}

fn assert_avl<K, V, C>(tree: &Tree<K, V, C, Avl>) {
    fn height<K, V>(nodes: &Nodes<K, V, Avl>, link: Option<NodeId>) -> i32 {
        match link {
            None => -1,
            Some(id) => {
                let left = height(nodes, nodes.left(id));
                let right = height(nodes, nodes.right(id));
                assert!((left - right).abs() <= 1);

                let height = 1 + cmp::max(left, right);
                assert_eq!(nodes.balance(id).height(), height);
                height
            }
        }
    }

    height(tree.nodes(), tree.nodes().root());
}

fn assert_red_black<K, V, C>(tree: &Tree<K, V, C, RedBlack>) {
    fn black_height<K, V>(nodes: &Nodes<K, V, RedBlack>, link: Option<NodeId>, parent_red: bool)
        -> usize {

        match link {
            None => 1,
            Some(id) => {
                let red = nodes.balance(id).color() == Color::Red;
                assert!(!(red && parent_red));

                let left = black_height(nodes, nodes.left(id), red);
                let right = black_height(nodes, nodes.right(id), red);
                assert_eq!(left, right);

                left + if red { 0 } else { 1 }
            }
        }
    }

    let nodes = tree.nodes();
    if let Some(root) = nodes.root() { assert_eq!(nodes.balance(root).color(), Color::Black); }
    black_height(nodes, nodes.root(), false);
}

#[test]
fn test_avl() {
    fn check(ops: Vec<Op<u8>>) -> bool {
        let mut tree = new_tree::<u8, Avl>();

        for op in ops {
            op.exec(&mut tree);
            assert_search_tree(&tree);
            assert_avl(&tree);
        }

        true
    }

    quickcheck(check as fn(Vec<Op<u8>>) -> bool);
}

#[test]
fn test_red_black() {
    fn check(ops: Vec<Op<u8>>) -> bool {
        let mut tree = new_tree::<u8, RedBlack>();

        for op in ops {
            op.exec(&mut tree);
            assert_search_tree(&tree);
            assert_red_black(&tree);
        }

        true
    }

    quickcheck(check as fn(Vec<Op<u8>>) -> bool);
}

#[test]
fn test_ascending_inserts_stay_balanced() {
    let mut avl = new_tree::<u32, Avl>();
    let mut rb = new_tree::<u32, RedBlack>();

    for i in 0..1000 {
        avl.insert(i, ());
        rb.insert(i, ());
    }

    assert_avl(&avl);
    assert_red_black(&rb);
    assert!(avl.nodes().balance(avl.nodes().root().unwrap()).height() < 15);

    for i in (0..1000).filter(|i| i % 3 != 0) {
        avl.remove(&i);
        rb.remove(&i);
    }

    assert_search_tree(&avl);
    assert_avl(&avl);
    assert_search_tree(&rb);
    assert_red_black(&rb);
    assert_eq!(keys(&avl), (0..1000).filter(|i| i % 3 == 0).collect::<Vec<_>>());
    assert_eq!(keys(&avl), keys(&rb));
}

#[test]
fn test_copy() {
    fn check(ops: Vec<Op<u8>>, extra: Vec<u8>) -> bool {
        let mut tree = new_tree::<u8, RedBlack>();
        for op in ops { op.exec(&mut tree); }

        let mut copy = tree.copy();
        assert_search_tree(&copy);
        assert_red_black(&copy);
        assert_eq!(keys(&copy), keys(&tree));

        let before = keys(&tree);
        for key in extra { copy.insert(key, ()); }
        while let Some(first) = copy.first() { copy.remove_node(first); }

        assert_eq!(keys(&tree), before);
        true
    }

    quickcheck(check as fn(Vec<Op<u8>>, Vec<u8>) -> bool);
}

#[test]
fn test_copy_preserves_heights() {
    let mut tree = new_tree::<u32, Avl>();
    for i in 0..100 { tree.insert(i * 7 % 100, ()); }

    let copy = tree.copy();
    assert_avl(&copy);
    assert_eq!(copy.nodes().balance(copy.nodes().root().unwrap()).height(),
               tree.nodes().balance(tree.nodes().root().unwrap()).height());
}

#[test]
fn test_rotation_keeps_ids() {
    let mut tree = new_tree::<u32, Avl>();
    let ids: Vec<_> = (1..4).map(|i| tree.insert(i, ()).0).collect();

    // 1, 2, 3 in order forces a left rotation around 1
    assert_eq!(tree.nodes().root(), Some(ids[1]));
    for (i, &id) in ids.iter().enumerate() { assert_eq!(*tree.key(id), i as u32 + 1); }
}

fn check_two_child_removal<B: Balance>() {
    let mut tree = new_tree::<u32, B>();
    let ids: Vec<_> = [5, 3, 8, 1, 4, 7, 9].iter().map(|&i| tree.insert(i, ()).0).collect();
    let root = tree.nodes().root().unwrap();
    assert_eq!(root, ids[0]);

    let removed = tree.remove_node(root);
    assert_eq!(removed.key, 5);
    assert_eq!(removed.freed, ids[5]);
    assert_eq!(tree.nodes().root(), Some(root));
    assert_eq!(*tree.key(root), 7);
    assert_search_tree(&tree);

    // the freed slot is recycled
    assert_eq!(tree.insert(6, ()).0, ids[5]);
    assert_eq!(keys(&tree), [1, 3, 4, 6, 7, 8, 9]);
}

#[test]
fn test_two_child_removal_avl() { check_two_child_removal::<Avl>(); }

#[test]
fn test_two_child_removal_red_black() { check_two_child_removal::<RedBlack>(); }

#[test]
fn test_removing_into_last() {
    let mut tree = new_tree::<u32, Avl>();
    let ids: Vec<_> = [2, 1, 3].iter().map(|&i| tree.insert(i, ()).0).collect();

    // the spliced successor was the maximum, so its entry now lives in the old root
    tree.remove_node(ids[0]);
    assert_eq!(tree.last(), Some(ids[0]));
    assert_eq!(*tree.key(ids[0]), 3);
    assert_eq!(tree.first(), Some(ids[1]));
}

#[test]
fn test_navigation() {
    let mut tree = new_tree::<u32, RedBlack>();
    for &i in &[10, 20, 30] { tree.insert(i, ()); }

    let key = |id: Option<NodeId>| id.map(|id| *tree.key(id));

    assert_eq!(key(tree.lower(&10)), None);
    assert_eq!(key(tree.lower(&11)), Some(10));
    assert_eq!(key(tree.floor(&20)), Some(20));
    assert_eq!(key(tree.floor(&5)), None);
    assert_eq!(key(tree.ceiling(&20)), Some(20));
    assert_eq!(key(tree.ceiling(&21)), Some(30));
    assert_eq!(key(tree.higher(&20)), Some(30));
    assert_eq!(key(tree.higher(&30)), None);
}

#[test]
fn test_clear() {
    let mut tree = new_tree::<u32, Avl>();
    for i in 0..10 { tree.insert(i, ()); }

    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.first(), None);
    assert_eq!(tree.last(), None);
    assert_eq!(tree.nodes().root(), None);

    tree.insert(1, ());
    assert_search_tree(&tree);
}
