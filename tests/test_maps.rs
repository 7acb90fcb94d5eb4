use keyed_collections::map::{HashMap, Map, SortedMap, UnsortedMap};
use rand::Rng;
use std::collections::BTreeMap;

fn check_against_btree_map<M>(mut map: M)
where
    M: Map<u32, u32>,
{
    let mut rng = rand::thread_rng();
    let mut expected = BTreeMap::new();

    for _ in 0..2000 {
        let key = rng.gen_range(0, 200);
        match rng.gen_range(0, 4) {
            0 => {
                let actual = map.remove(&key).map(|entry| entry.into_parts());
                assert_eq!(actual, expected.remove(&key).map(|value| (key, value)));
            },
            1 => {
                if let Some(value) = map.get_mut(&key) {
                    *value += 1;
                }
                if let Some(value) = expected.get_mut(&key) {
                    *value += 1;
                }
            },
            _ => {
                let value = rng.gen::<u32>() >> 1;
                let actual = map.put(key, value).map(|entry| entry.into_parts());
                let old = expected.insert(key, value);
                assert_eq!(actual, old.map(|value| (key, value)));
            },
        }
        assert_eq!(map.len(), expected.len());
        assert_eq!(map.get(&key).map(|entry| *entry.value()), expected.get(&key).cloned());
    }

    for (key, value) in &expected {
        assert_eq!(map.get(key).map(|entry| *entry.value()), Some(*value));
    }
}

#[test]
fn int_test_unsorted_map_against_btree_map() {
    check_against_btree_map(UnsortedMap::new());
}

#[test]
fn int_test_sorted_map_against_btree_map() {
    check_against_btree_map(SortedMap::new());
}

#[test]
fn int_test_hash_map_against_btree_map() {
    check_against_btree_map(HashMap::with_table_size(7).unwrap());
}

#[test]
fn int_test_sorted_map_iterates_in_order() {
    let mut rng = rand::thread_rng();
    let mut map = SortedMap::new();
    let mut expected = BTreeMap::new();
    for _ in 0..500 {
        let key = rng.gen::<u32>();
        map.put(key, ());
        expected.insert(key, ());
    }
    let keys: Vec<u32> = map.iter().map(|entry| *entry.key()).collect();
    assert_eq!(keys, expected.keys().cloned().collect::<Vec<u32>>());
}
