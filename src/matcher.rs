//! Full-scan approximate matching over a `ChainedHashMap`.
//!
//! Matching never writes into the table. Distances are either folded
//! straight into a bounded ranking (`find_closest`) or collected into a
//! fresh per-query side table (`distances`).

use crate::chained_hash_map::ChainedHashMap;
use crate::distance::edit_distance;
use crate::error::Error;
use hashbrown::HashMap;

/// A stored word and its edit distance from the query.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Suggestion<'a> {
    pub word: &'a str,
    pub distance: usize,
}

/// Fixed-size ranking of the `limit` smallest distances seen so far.
///
/// A candidate goes in front of the first entry with a strictly greater
/// distance, so among equal distances the earlier offer stays ahead.
/// Whatever falls off the end is discarded.
#[derive(Debug)]
pub struct TopK<'a> {
    limit: usize,
    ranked: Vec<Suggestion<'a>>,
}

impl<'a> TopK<'a> {
    pub fn new(limit: usize) -> Result<Self, Error> {
        Self::with_candidates(limit, 0)
    }

    /// Like `new`, but reserves room for at most `candidates` entries up
    /// front. `limit` itself is never used as an allocation size.
    pub fn with_candidates(limit: usize, candidates: usize) -> Result<Self, Error> {
        if limit == 0 {
            return Err(Error::InvalidLimit(limit));
        }
        Ok(Self {
            limit,
            ranked: Vec::with_capacity(limit.min(candidates)),
        })
    }

    pub fn offer(&mut self, word: &'a str, distance: usize) {
        let at = self
            .ranked
            .iter()
            .position(|s| distance < s.distance)
            .unwrap_or(self.ranked.len());
        if at < self.limit {
            self.ranked.insert(at, Suggestion { word, distance });
            self.ranked.truncate(self.limit);
        }
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    pub fn as_slice(&self) -> &[Suggestion<'a>] {
        &self.ranked
    }

    pub fn into_vec(self) -> Vec<Suggestion<'a>> {
        self.ranked
    }
}

/// Ranks every key in `table` by edit distance from `query` and keeps
/// the closest `k`, ascending by distance.
///
/// Every key is scored; there is no pruning. Ties keep table iteration
/// order. The caller is expected to have checked `contains_key(query)`
/// first; if the query is stored it simply ranks first at distance 0.
pub fn find_closest<'a, S>(
    table: &'a ChainedHashMap<S>,
    query: &str,
    k: usize,
) -> Result<Vec<Suggestion<'a>>, Error> {
    let mut top = TopK::with_candidates(k, table.len())?;
    for (word, _) in table.iter() {
        top.offer(word, edit_distance(query, word));
    }
    Ok(top.into_vec())
}

/// Edit distance from `query` to every key in `table`.
pub fn distances<'a, S>(table: &'a ChainedHashMap<S>, query: &str) -> HashMap<&'a str, usize> {
    let mut out = HashMap::with_capacity(table.len());
    for (word, _) in table.iter() {
        out.insert(word, edit_distance(query, word));
    }
    out
}
