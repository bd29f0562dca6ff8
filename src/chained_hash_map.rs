//! ChainedHashMap: separately chained string table with arena-backed links.
//!
//! Buckets hold the head of a singly linked chain; links live in a
//! `SlotMap` and point at their successor by generational key, so the
//! table is the single owner of every entry and growth only relinks.

use crate::error::Error;
use crate::hashing::{hash_key, WeightedByteSum};
use core::fmt;
use core::hash::BuildHasher;
use slotmap::{DefaultKey, SlotMap};

/// Growth is triggered once `len / capacity` reaches this ratio.
pub const MAX_LOAD_FACTOR: f64 = 0.7;

/// Stable reference to a live entry. Survives growth; never resolves
/// again once its entry is removed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Handle(DefaultKey);

impl Handle {
    pub(crate) fn new(k: DefaultKey) -> Self {
        Handle(k)
    }
    pub(crate) fn raw_handle(&self) -> DefaultKey {
        self.0
    }

    pub fn key<'a, S>(&self, map: &'a ChainedHashMap<S>) -> Option<&'a str> {
        map.links.get(self.raw_handle()).map(|l| &*l.key)
    }

    pub fn value<'a, S>(&self, map: &'a ChainedHashMap<S>) -> Option<&'a i32> {
        map.links.get(self.raw_handle()).map(|l| &l.value)
    }

    pub fn value_mut<'a, S>(&self, map: &'a mut ChainedHashMap<S>) -> Option<&'a mut i32> {
        map.links.get_mut(self.raw_handle()).map(|l| &mut l.value)
    }
}

#[derive(Debug)]
struct Link {
    key: Box<str>,
    value: i32,
    next: Option<DefaultKey>,
}

pub struct ChainedHashMap<S = WeightedByteSum> {
    hasher: S,
    buckets: Vec<Option<DefaultKey>>, // chain heads, len == capacity
    links: SlotMap<DefaultKey, Link>,
}

impl ChainedHashMap {
    /// Creates a table with `capacity` empty buckets and the default
    /// position-weighted hash.
    pub fn new(capacity: usize) -> Result<Self, Error> {
        Self::with_hasher(capacity, WeightedByteSum)
    }
}

impl<S> ChainedHashMap<S> {
    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.links.len()
    }
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Number of buckets. Never decreases.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn empty_buckets(&self) -> usize {
        self.buckets.iter().filter(|head| head.is_none()).count()
    }

    pub fn load_factor(&self) -> f64 {
        self.links.len() as f64 / self.buckets.len() as f64
    }

    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    /// Drops every entry. The bucket count is kept.
    pub fn clear(&mut self) {
        self.links.clear();
        self.buckets.iter_mut().for_each(|head| *head = None);
    }

    /// Iterates entries in bucket order, then chain order.
    pub fn iter(&self) -> Iter<'_, S> {
        Iter {
            map: self,
            bucket: 0,
            cursor: None,
        }
    }

    /// Length of every chain, indexed by bucket.
    pub fn chain_lengths(&self) -> Vec<usize> {
        (0..self.buckets.len())
            .map(|i| self.chain(i).count())
            .collect()
    }

    fn chain(&self, bucket: usize) -> ChainIter<'_> {
        ChainIter {
            links: &self.links,
            cursor: self.buckets[bucket],
        }
    }
}

impl<S> ChainedHashMap<S>
where
    S: BuildHasher,
{
    /// Creates a table with `capacity` empty buckets hashed by `hasher`.
    /// Fails with `Error::InvalidCapacity` when `capacity` is zero.
    pub fn with_hasher(capacity: usize, hasher: S) -> Result<Self, Error> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }
        Ok(Self {
            hasher,
            buckets: vec![None; capacity],
            links: SlotMap::with_key(),
        })
    }

    #[inline]
    fn bucket_of(&self, key: &str) -> usize {
        (hash_key(&self.hasher, key) % self.buckets.len() as u64) as usize
    }

    fn find_link(&self, key: &str) -> Option<DefaultKey> {
        let mut cur = self.buckets[self.bucket_of(key)];
        while let Some(k) = cur {
            let link = &self.links[k];
            if &*link.key == key {
                return Some(k);
            }
            cur = link.next;
        }
        None
    }

    /// Inserts `key` or overwrites its value in place.
    ///
    /// A new key is copied into a link appended at the tail of its chain.
    /// If that pushes the load factor to `MAX_LOAD_FACTOR` or above, the
    /// table doubles its bucket count and rehashes every entry before
    /// returning.
    pub fn put(&mut self, key: &str, value: i32) -> Handle {
        let idx = self.bucket_of(key);
        let mut tail = None;
        let mut cur = self.buckets[idx];
        while let Some(k) = cur {
            let link = &mut self.links[k];
            if &*link.key == key {
                link.value = value;
                return Handle::new(k);
            }
            tail = Some(k);
            cur = link.next;
        }

        let k = self.links.insert(Link {
            key: key.into(),
            value,
            next: None,
        });
        match tail {
            None => self.buckets[idx] = Some(k),
            Some(t) => self.links[t].next = Some(k),
        }

        if self.load_factor() >= MAX_LOAD_FACTOR {
            self.grow();
        }
        Handle::new(k)
    }

    // Relinks every entry into a bucket array twice the size. Chains are
    // walked in bucket order and each link is appended at its new tail,
    // matching what re-putting every key into a fresh table would give.
    fn grow(&mut self) {
        let old_capacity = self.buckets.len();
        let new_capacity = old_capacity * 2;
        let old = std::mem::replace(&mut self.buckets, vec![None; new_capacity]);
        let mut tails: Vec<Option<DefaultKey>> = vec![None; new_capacity];

        for head in old {
            let mut cur = head;
            while let Some(k) = cur {
                let idx = self.bucket_of(&self.links[k].key);
                cur = self.links[k].next.take();
                match tails[idx] {
                    None => self.buckets[idx] = Some(k),
                    Some(t) => self.links[t].next = Some(k),
                }
                tails[idx] = Some(k);
            }
        }

        log::debug!(
            "grew table from {} to {} buckets ({} entries)",
            old_capacity,
            new_capacity,
            self.links.len()
        );
    }

    pub fn get(&self, key: &str) -> Option<&i32> {
        self.find_link(key).map(|k| &self.links[k].value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut i32> {
        let k = self.find_link(key)?;
        Some(&mut self.links[k].value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find_link(key).is_some()
    }

    pub fn find(&self, key: &str) -> Option<Handle> {
        self.find_link(key).map(Handle::new)
    }

    /// Unlinks `key` and returns its value; `None` if it was absent.
    /// The bucket count is left unchanged.
    pub fn remove(&mut self, key: &str) -> Option<i32> {
        let idx = self.bucket_of(key);
        let mut prev: Option<DefaultKey> = None;
        let mut cur = self.buckets[idx];
        while let Some(k) = cur {
            if &*self.links[k].key == key {
                let link = self.links.remove(k)?;
                match prev {
                    None => self.buckets[idx] = link.next,
                    Some(p) => self.links[p].next = link.next,
                }
                return Some(link.value);
            }
            prev = Some(k);
            cur = self.links[k].next;
        }
        None
    }
}

struct ChainIter<'a> {
    links: &'a SlotMap<DefaultKey, Link>,
    cursor: Option<DefaultKey>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a Link;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let link = &self.links[self.cursor?];
        self.cursor = link.next;
        Some(link)
    }
}

/// Iterator over `(key, value)` pairs of a `ChainedHashMap`.
pub struct Iter<'a, S> {
    map: &'a ChainedHashMap<S>,
    bucket: usize,
    cursor: Option<DefaultKey>,
}

impl<'a, S> Iterator for Iter<'a, S> {
    type Item = (&'a str, i32);
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(k) = self.cursor {
                let link = &self.map.links[k];
                self.cursor = link.next;
                return Some((&*link.key, link.value));
            }
            self.cursor = *self.map.buckets.get(self.bucket)?;
            self.bucket += 1;
        }
    }
}

impl<'a, S> IntoIterator for &'a ChainedHashMap<S> {
    type Item = (&'a str, i32);
    type IntoIter = Iter<'a, S>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S> fmt::Debug for ChainedHashMap<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Chain<'a>(ChainIter<'a>);
        impl fmt::Debug for Chain<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let it = ChainIter {
                    links: self.0.links,
                    cursor: self.0.cursor,
                };
                f.debug_map()
                    .entries(it.map(|l| (&*l.key, l.value)))
                    .finish()
            }
        }

        f.debug_struct("ChainedHashMap")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field(
                "buckets",
                &(0..self.buckets.len())
                    .map(|i| Chain(self.chain(i)))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
