//! Hash policies for `ChainedHashMap`.
//!
//! The table hashes a key by feeding its raw bytes to a fresh hasher from
//! a `BuildHasher`, so any `BuildHasher` works as a policy (including
//! `RandomState`). The two policies here are the cheap byte sums used to
//! compare bucket distributions on dictionary input:
//!
//! - `ByteSum`: sum of all bytes. Anagrams always collide.
//! - `WeightedByteSum`: each byte weighted by `1 + its index`, so the
//!   same letters in a different order usually land elsewhere.
//!
//! Both use wrapping `u64` arithmetic; the table reduces the result with
//! an unsigned modulo, so every index is in `[0, capacity)`.

use core::hash::{BuildHasher, Hasher};

/// Plain byte-sum policy.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ByteSum;

/// Position-weighted byte-sum policy.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct WeightedByteSum;

#[derive(Debug, Default)]
pub struct ByteSumHasher {
    sum: u64,
}

#[derive(Debug, Default)]
pub struct WeightedByteSumHasher {
    sum: u64,
    // Bytes seen so far; keeps weights continuous across `write` calls.
    pos: u64,
}

impl BuildHasher for ByteSum {
    type Hasher = ByteSumHasher;
    fn build_hasher(&self) -> Self::Hasher {
        ByteSumHasher::default()
    }
}

impl BuildHasher for WeightedByteSum {
    type Hasher = WeightedByteSumHasher;
    fn build_hasher(&self) -> Self::Hasher {
        WeightedByteSumHasher::default()
    }
}

impl Hasher for ByteSumHasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.sum = self.sum.wrapping_add(b as u64);
        }
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.sum
    }
}

impl Hasher for WeightedByteSumHasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.pos += 1;
            self.sum = self.sum.wrapping_add(self.pos.wrapping_mul(b as u64));
        }
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.sum
    }
}

/// Hashes `key` the way `ChainedHashMap` does: raw bytes only, no length
/// prefix or terminator.
pub fn hash_key<S: BuildHasher>(policy: &S, key: &str) -> u64 {
    let mut h = policy.build_hasher();
    h.write(key.as_bytes());
    h.finish()
}
