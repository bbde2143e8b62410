// OrderedMap property tests against an insertion-ordered Vec model.
//
// Property: state-machine equivalence.
//  - Model: Vec<(key, value)> in insertion order; storing an existing key
//    overwrites its value in place, deleting removes its slot.
//  - Operations: store, load, delete, contains_key.
//  - Invariant after every step: len() matches, iteration yields model
//    values in order, reverse iteration yields them reversed.
use pooled_collections::OrderedMap;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Store(u8, i32),
    Load(u8),
    Delete(u8),
    Contains(u8),
}

fn arb_op() -> impl Strategy<Value = Op> {
    // A small key space forces duplicate stores and deletes of live keys.
    let key = 0u8..12;
    prop_oneof![
        3 => (key.clone(), any::<i32>()).prop_map(|(k, v)| Op::Store(k, v)),
        1 => key.clone().prop_map(Op::Load),
        2 => key.clone().prop_map(Op::Delete),
        1 => key.prop_map(Op::Contains),
    ]
}

fn position(model: &[(u8, i32)], k: u8) -> Option<usize> {
    model.iter().position(|&(mk, _)| mk == k)
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_ordered_map_matches_model(ops in proptest::collection::vec(arb_op(), 1..150)) {
        let sut: OrderedMap<u8, i32> = OrderedMap::new();
        let mut model: Vec<(u8, i32)> = Vec::new();

        for op in ops {
            match op {
                Op::Store(k, v) => {
                    let prev = match position(&model, k) {
                        Some(p) => Some(std::mem::replace(&mut model[p].1, v)),
                        None => { model.push((k, v)); None }
                    };
                    prop_assert_eq!(sut.store(k, v), prev);
                }
                Op::Load(k) => {
                    let expected = position(&model, k).map(|p| model[p].1);
                    prop_assert_eq!(sut.load(&k), expected);
                }
                Op::Delete(k) => {
                    let expected = position(&model, k).map(|p| model.remove(p).1);
                    prop_assert_eq!(sut.delete(&k), expected);
                }
                Op::Contains(k) => {
                    prop_assert_eq!(sut.contains_key(&k), position(&model, k).is_some());
                }
            }

            prop_assert_eq!(sut.len(), model.len());
            let values: Vec<i32> = sut.iter().collect();
            prop_assert_eq!(&values, &model.iter().map(|&(_, v)| v).collect::<Vec<_>>());
            let mut rev: Vec<i32> = sut.riter().collect();
            rev.reverse();
            prop_assert_eq!(values, rev);
        }
    }
}
