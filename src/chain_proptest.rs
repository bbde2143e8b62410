#![cfg(test)]

// Property tests for Chain kept inside the crate so they can reach the
// crate-private chain and pool layers directly.

use crate::chain::Chain;
use crate::iter::Direction;
use crate::node::Link;
use proptest::prelude::*;
use std::collections::VecDeque;

#[derive(Clone, Debug)]
enum Op {
    PushFront(i32),
    PushBack(i32),
    InsertAfter(usize, i32),
    InsertBefore(usize, i32),
    PopFront,
    PopBack,
    Remove(usize),
    Get(usize),
}

fn arb_op() -> impl Strategy<Value = Op> {
    // Positions range past the usual length to exercise out-of-range no-ops.
    prop_oneof![
        any::<i32>().prop_map(Op::PushFront),
        any::<i32>().prop_map(Op::PushBack),
        (0usize..24, any::<i32>()).prop_map(|(i, v)| Op::InsertAfter(i, v)),
        (0usize..24, any::<i32>()).prop_map(|(i, v)| Op::InsertBefore(i, v)),
        Just(Op::PopFront),
        Just(Op::PopBack),
        (0usize..24).prop_map(Op::Remove),
        (0usize..24).prop_map(Op::Get),
    ]
}

// Property: State-machine equivalence against std::collections::VecDeque.
// Invariants exercised across random operation sequences:
// - Forward traversal equals the model; reverse traversal is its reverse.
// - Every link is mirrored by its opposite and `len` equals the chain length.
// - Out-of-range positions leave the chain untouched.
// - Pool capacity never shrinks and never grows while live nodes fit in it.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_chain_matches_vecdeque(presize in proptest::option::of(0usize..8), ops in proptest::collection::vec(arb_op(), 1..80)) {
        let mut sut: Chain<i32> = match presize {
            Some(n) => Chain::with_capacity(n),
            None => Chain::new(),
        };
        let mut model: VecDeque<i32> = VecDeque::new();

        for op in ops {
            let cap_before = sut.capacity();
            let len_before = sut.len();
            match op {
                Op::PushFront(v) => {
                    sut.push_front(v);
                    model.push_front(v);
                }
                Op::PushBack(v) => {
                    sut.push_back(v);
                    model.push_back(v);
                }
                Op::InsertAfter(i, v) => {
                    let at = sut.get(i).map(Link::Node);
                    sut.insert(at, v);
                    if i < model.len() {
                        model.insert(i + 1, v);
                    }
                }
                Op::InsertBefore(i, v) => {
                    let at = sut.get(i).map(Link::Node);
                    let before = sut.prev(at);
                    sut.insert(before, v);
                    if i < model.len() {
                        model.insert(i, v);
                    }
                }
                Op::PopFront => {
                    let first = sut.first().and_then(Link::node);
                    prop_assert_eq!(sut.remove(first), model.pop_front());
                }
                Op::PopBack => {
                    let last = sut.last().and_then(Link::node);
                    prop_assert_eq!(sut.remove(last), model.pop_back());
                }
                Op::Remove(i) => {
                    let at = sut.get(i);
                    prop_assert_eq!(sut.remove(at), model.remove(i));
                }
                Op::Get(i) => {
                    let at = sut.get(i).map(Link::Node);
                    prop_assert_eq!(sut.value(at), model.get(i));
                }
            }

            prop_assert!(sut.is_consistent());
            prop_assert_eq!(sut.len(), model.len());
            prop_assert!(sut.capacity() >= cap_before);
            if len_before < cap_before {
                prop_assert_eq!(sut.capacity(), cap_before, "grew with free room");
            }
            let fwd: Vec<i32> = sut.values(Direction::Forward).copied().collect();
            let mut rev: Vec<i32> = sut.values(Direction::Reverse).copied().collect();
            rev.reverse();
            prop_assert_eq!(&fwd, &rev);
            prop_assert_eq!(fwd, model.iter().copied().collect::<Vec<_>>());
        }
    }
}
