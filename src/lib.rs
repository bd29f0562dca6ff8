//! spellmap: a separately chained string hash table and a full-scan
//! edit-distance spelling suggester built on top of it.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep the table and the matcher in separate layers so each has
//!   a small contract that can be tested on its own.
//! - Layers:
//!   - ChainedHashMap<S>: string key to `i32` value, one singly linked
//!     chain per bucket, grows by doubling once the load factor reaches
//!     0.7. Hash policy `S` is any `BuildHasher`.
//!   - matcher: ranks every stored key by Levenshtein distance from a
//!     query and keeps the closest `k`.
//!   - Lexicon<S>: a word list loaded into a ChainedHashMap, answering
//!     "is this spelled correctly, and if not, what was meant".
//!
//! Storage
//! - Links live in a `SlotMap` arena; buckets and `next` pointers hold
//!   generational keys. The table owns every entry and there is no
//!   per-node unsafe code.
//! - Growth relinks the existing arena entries into a bucket array twice
//!   the size. Keys are never copied again and `Handle`s stay valid.
//! - Within a bucket new keys go to the tail, so chain order is insertion
//!   order; growth preserves it.
//!
//! Matching
//! - `find_closest` scores every key; there is no pruning. The cost is
//!   O(n * |query| * |key|) per query, fine for dictionaries of a few
//!   thousand words.
//! - Ties keep table iteration order (bucket ascending, then chain).
//! - Matching never writes into the table; per-query scores go into a
//!   fresh side table (`matcher::distances`) when a caller wants them.
//!
//! Notes and non-goals
//! - Single-threaded. Wrap the table in a lock if it must be shared.
//! - No shrinking on removal and no persistence.
//! - The value type is fixed to `i32`.
//! - Tokenizing input (`words`) and validating queries (`query`) are thin
//!   collaborators; the table and matcher assume clean input.

mod chained_hash_map_proptest;
pub mod chained_hash_map;
pub mod distance;
mod error;
pub mod hashing;
pub mod lexicon;
pub mod matcher;
pub mod query;
pub mod words;

// Public surface
pub use chained_hash_map::{ChainedHashMap, Handle, MAX_LOAD_FACTOR};
pub use distance::edit_distance;
pub use error::{Error, QueryError};
pub use hashing::{ByteSum, WeightedByteSum};
pub use lexicon::{Lexicon, Verdict, DEFAULT_CAPACITY, DEFAULT_SUGGESTIONS};
pub use matcher::{find_closest, Suggestion};
