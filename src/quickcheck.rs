use ::quickcheck::{Arbitrary, Gen};
use compare::Compare;
use super::{Balance, TreeMap, TreeSet};

impl<K, V, C, B> Arbitrary for TreeMap<K, V, C, B>
    where K: Arbitrary, V: Arbitrary, C: 'static + Clone + Compare<K> + Default, B: 'static + Balance {

    fn arbitrary(gen: &mut Gen) -> Self {
        Vec::<(K, V)>::arbitrary(gen).into_iter().collect()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item=Self>> {
        let vec: Vec<(K, V)> = self.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        Box::new(vec.shrink().map(|vec| vec.into_iter().collect()))
    }
}

impl<T, C, B> Arbitrary for TreeSet<T, C, B>
    where T: Arbitrary, C: 'static + Clone + Compare<T> + Default, B: 'static + Balance {

    fn arbitrary(gen: &mut Gen) -> Self { Vec::<T>::arbitrary(gen).into_iter().collect() }

    fn shrink(&self) -> Box<dyn Iterator<Item=Self>> {
        let vec: Vec<T> = self.iter().cloned().collect();
        Box::new(vec.shrink().map(|vec| vec.into_iter().collect()))
    }
}
