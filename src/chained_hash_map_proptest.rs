#![cfg(test)]

// Property tests for ChainedHashMap kept inside the crate so they can
// reach the collision-forcing hasher and chain internals.

use crate::chained_hash_map::{ChainedHashMap, Handle, MAX_LOAD_FACTOR};
use crate::hashing::{ByteSum, WeightedByteSum};
use core::hash::{BuildHasher, Hasher};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Put(usize, i32),
    Remove(usize),
    Get(usize),
    Contains(String),
    Mutate(usize, i32),
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z']{1,6}", 1..=12).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            3 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Put(i, v)),
            1 => idx.clone().prop_map(OpI::Remove),
            1 => idx.clone().prop_map(OpI::Get),
            1 => prop_oneof![contains_pool, "[a-z]{0,6}"].prop_map(OpI::Contains),
            1 => (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::Mutate(i, d)),
            1 => Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Runs the scenario against `sut` and a std HashMap model.
// Invariants checked after every op:
// - `len` equals the model's length and the number of iterated entries.
// - `load_factor < MAX_LOAD_FACTOR` after every put.
// - capacity never decreases; it only ever changes by doubling.
// - handles of removed keys never resolve; live handles resolve to their key.
fn run<S: BuildHasher>(
    mut sut: ChainedHashMap<S>,
    pool: &[String],
    ops: Vec<OpI>,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<String, i32> = HashMap::new();
    let mut live: HashMap<String, Handle> = HashMap::new();
    let mut stale: Vec<Handle> = Vec::new();

    for op in ops {
        let cap_before = sut.capacity();
        match op {
            OpI::Put(i, v) => {
                let k = &pool[i];
                let h = sut.put(k, v);
                if let Some(&prev) = live.get(k) {
                    prop_assert_eq!(prev, h, "update must reuse the entry");
                }
                live.insert(k.clone(), h);
                model.insert(k.clone(), v);
                prop_assert!(sut.load_factor() < MAX_LOAD_FACTOR);
                prop_assert_eq!(sut.get(k), Some(&v));
            }
            OpI::Remove(i) => {
                let k = &pool[i];
                let before = sut.len();
                let got = sut.remove(k);
                prop_assert_eq!(got, model.remove(k));
                if got.is_some() {
                    prop_assert_eq!(sut.len(), before - 1);
                    stale.push(live.remove(k).expect("tracked handle"));
                } else {
                    prop_assert_eq!(sut.len(), before);
                }
                prop_assert!(!sut.contains_key(k));
            }
            OpI::Get(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.get(k), model.get(k));
                prop_assert_eq!(sut.find(k), live.get(k).copied());
            }
            OpI::Contains(s) => {
                prop_assert_eq!(sut.contains_key(&s), model.contains_key(&s));
            }
            OpI::Mutate(i, d) => {
                let k = &pool[i];
                match (sut.get_mut(k), model.get_mut(k)) {
                    (Some(v), Some(mv)) => {
                        *v = v.saturating_add(d);
                        *mv = mv.saturating_add(d);
                    }
                    (None, None) => {}
                    _ => prop_assert!(false, "presence mismatch for {:?}", k),
                }
            }
            OpI::Iterate => {
                let s: BTreeSet<(String, i32)> =
                    sut.iter().map(|(k, v)| (k.to_string(), v)).collect();
                let m: BTreeSet<(String, i32)> =
                    model.iter().map(|(k, v)| (k.clone(), *v)).collect();
                prop_assert_eq!(s, m);
            }
        }

        let cap = sut.capacity();
        prop_assert!(cap == cap_before || cap == cap_before * 2);
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.iter().count(), model.len());
        prop_assert_eq!(sut.chain_lengths().iter().sum::<usize>(), model.len());
        for h in &stale {
            prop_assert!(h.value(&sut).is_none());
        }
        for (k, h) in &live {
            prop_assert_eq!(h.key(&sut), Some(k.as_str()));
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn prop_state_machine_weighted((pool, ops) in arb_scenario(), cap in 1usize..8) {
        run(ChainedHashMap::with_hasher(cap, WeightedByteSum).unwrap(), &pool, ops)?;
    }

    #[test]
    fn prop_state_machine_byte_sum((pool, ops) in arb_scenario(), cap in 1usize..8) {
        run(ChainedHashMap::with_hasher(cap, ByteSum).unwrap(), &pool, ops)?;
    }

    // Worst-case collisions: every key shares bucket 0, so all chain
    // splicing paths are exercised.
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario(), cap in 1usize..8) {
        run(ChainedHashMap::with_hasher(cap, ConstBuildHasher).unwrap(), &pool, ops)?;
    }
}

#[derive(Clone, Default)]
struct ConstBuildHasher;
struct ConstHasher;
impl BuildHasher for ConstBuildHasher {
    type Hasher = ConstHasher;
    fn build_hasher(&self) -> Self::Hasher {
        ConstHasher
    }
}
impl Hasher for ConstHasher {
    fn write(&mut self, _bytes: &[u8]) {}
    fn finish(&self) -> u64 {
        0
    }
}
