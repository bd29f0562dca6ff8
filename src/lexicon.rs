//! Lexicon: a word list indexed by `ChainedHashMap` plus spelling checks.

use crate::chained_hash_map::ChainedHashMap;
use crate::error::Error;
use crate::hashing::WeightedByteSum;
use crate::matcher::{find_closest, Suggestion};
use crate::words::Words;
use core::hash::BuildHasher;
use std::io::Read;

/// Bucket count used when no capacity is given.
pub const DEFAULT_CAPACITY: usize = 1000;
/// Number of suggestions offered for a misspelling by default.
pub const DEFAULT_SUGGESTIONS: usize = 5;
/// Value stored for every dictionary word.
pub const PLACEHOLDER: i32 = -1;

/// Outcome of checking one query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict<'a> {
    Correct,
    Misspelled(Vec<Suggestion<'a>>),
}

/// Inserts every word as a key holding `PLACEHOLDER`. Duplicates collapse
/// into one entry and empty words are skipped. Returns how many words were
/// consumed.
pub fn load_words<S, I, W>(table: &mut ChainedHashMap<S>, words: I) -> usize
where
    S: BuildHasher,
    I: IntoIterator<Item = W>,
    W: AsRef<str>,
{
    let mut seen = 0;
    for w in words {
        let w = w.as_ref();
        if w.is_empty() {
            log::warn!("skipping empty word from word source");
            continue;
        }
        table.put(w, PLACEHOLDER);
        seen += 1;
    }
    seen
}

pub struct Lexicon<S = WeightedByteSum> {
    table: ChainedHashMap<S>,
}

impl Lexicon {
    pub fn new(capacity: usize) -> Result<Self, Error> {
        Self::with_hasher(capacity, WeightedByteSum)
    }
}

impl<S> Lexicon<S>
where
    S: BuildHasher,
{
    pub fn with_hasher(capacity: usize, hasher: S) -> Result<Self, Error> {
        Ok(Self {
            table: ChainedHashMap::with_hasher(capacity, hasher)?,
        })
    }

    pub fn from_table(table: ChainedHashMap<S>) -> Self {
        Self { table }
    }

    pub fn load_words<I, W>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let n = load_words(&mut self.table, words);
        log::trace!("loaded {} words, {} distinct", n, self.table.len());
        n
    }

    /// Tokenizes `reader` with `Words` and loads every token. Stops at the
    /// first read error; words read before it stay loaded.
    pub fn load_reader<R: Read>(&mut self, reader: R) -> Result<usize, Error> {
        let mut n = 0;
        for word in Words::new(reader) {
            n += load_words(&mut self.table, [word?]);
        }
        log::trace!("loaded {} words, {} distinct", n, self.table.len());
        Ok(n)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.table.contains_key(word)
    }

    /// The `k` closest words to `query`, whether or not it is stored.
    pub fn suggest(&self, query: &str, k: usize) -> Result<Vec<Suggestion<'_>>, Error> {
        find_closest(&self.table, query, k)
    }

    /// `Correct` if `query` is stored; otherwise its `k` closest words.
    pub fn check(&self, query: &str, k: usize) -> Result<Verdict<'_>, Error> {
        if k == 0 {
            return Err(Error::InvalidLimit(k));
        }
        if self.table.contains_key(query) {
            return Ok(Verdict::Correct);
        }
        Ok(Verdict::Misspelled(self.suggest(query, k)?))
    }
}

impl<S> Lexicon<S> {
    pub fn len(&self) -> usize {
        self.table.len()
    }
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn table(&self) -> &ChainedHashMap<S> {
        &self.table
    }

    pub fn into_table(self) -> ChainedHashMap<S> {
        self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_collapses_duplicates_and_skips_empty() {
        let mut lex = Lexicon::new(8).unwrap();
        let n = lex.load_words(["the", "cat", "", "the", "The"]);
        assert_eq!(n, 4);
        assert_eq!(lex.len(), 3);
        assert!(lex.contains("the"));
        assert!(lex.contains("The"));
        assert!(!lex.contains(""));
        assert!(lex.table().iter().all(|(_, v)| v == PLACEHOLDER));
    }

    #[test]
    fn load_is_idempotent() {
        let mut lex = Lexicon::new(4).unwrap();
        lex.load_words(["a", "b", "c"]);
        let cap = lex.table().capacity();
        lex.load_words(["a", "b", "c"]);
        assert_eq!(lex.len(), 3);
        assert_eq!(lex.table().capacity(), cap);
    }

    #[test]
    fn load_reader_tokenizes() {
        let mut lex = Lexicon::new(DEFAULT_CAPACITY).unwrap();
        let n = lex
            .load_reader("apple, apply; ample.\nApple".as_bytes())
            .unwrap();
        assert_eq!(n, 4);
        assert_eq!(lex.len(), 4);
    }

    #[test]
    fn check_reports_correct_words() {
        let mut lex = Lexicon::new(16).unwrap();
        lex.load_words(["cat", "bat"]);
        assert_eq!(lex.check("cat", 3).unwrap(), Verdict::Correct);
    }

    #[test]
    fn check_ranks_misspellings() {
        let mut lex = Lexicon::new(16).unwrap();
        lex.load_words(["cat", "cats", "bat", "dog"]);
        match lex.check("car", 3).unwrap() {
            Verdict::Misspelled(s) => {
                assert_eq!(s.len(), 3);
                assert_eq!(s[0], Suggestion { word: "cat", distance: 1 });
                let mut tied: Vec<_> = s[1..].iter().map(|x| (x.word, x.distance)).collect();
                tied.sort();
                assert_eq!(tied, [("bat", 2), ("cats", 2)]);
                assert!(s.iter().all(|x| x.word != "dog"));
            }
            Verdict::Correct => panic!("car is not in the lexicon"),
        }
    }

    #[test]
    fn check_rejects_zero_limit_even_for_known_words() {
        let mut lex = Lexicon::new(16).unwrap();
        lex.load_words(["cat"]);
        assert!(matches!(lex.check("cat", 0), Err(Error::InvalidLimit(0))));
    }

    #[test]
    fn zero_capacity_rejected() {
        assert!(matches!(Lexicon::new(0), Err(Error::InvalidCapacity(0))));
    }
}
