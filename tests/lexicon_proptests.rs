// Matcher property tests.
//
// Property 1: find_closest returns the k smallest distances.
//  - Model: brute-force distance of every distinct word, sorted.
//  - Invariant: result distances == first min(k, n) model distances;
//    every returned word is stored and its distance is recomputable.
//
// Property 2: ties keep table iteration order.
//  - Invariant: among equal distances, words appear in the same relative
//    order as `table.iter()` yields them.
use proptest::prelude::*;
use spellmap::matcher::distances;
use spellmap::{edit_distance, find_closest, Lexicon};
use std::collections::BTreeSet;

proptest! {
    #[test]
    fn prop_k_smallest_distances(
        words in proptest::collection::vec("[a-e]{1,6}", 0..40),
        query in "[a-e]{0,6}",
        k in 1usize..8,
        cap in 1usize..16,
    ) {
        let mut lex = Lexicon::new(cap).unwrap();
        lex.load_words(&words);
        let distinct: BTreeSet<&str> = words.iter().map(String::as_str).collect();
        prop_assert_eq!(lex.len(), distinct.len());

        let got = lex.suggest(&query, k).unwrap();
        prop_assert_eq!(got.len(), k.min(distinct.len()));

        let mut model: Vec<usize> = distinct.iter().map(|w| edit_distance(&query, w)).collect();
        model.sort_unstable();
        let got_d: Vec<usize> = got.iter().map(|s| s.distance).collect();
        prop_assert_eq!(&got_d[..], &model[..got.len()]);

        let mut seen = BTreeSet::new();
        for s in &got {
            prop_assert!(lex.contains(s.word));
            prop_assert_eq!(s.distance, edit_distance(&query, s.word));
            prop_assert!(seen.insert(s.word), "duplicate suggestion {}", s.word);
        }

        let side = distances(lex.table(), &query);
        prop_assert_eq!(side.len(), distinct.len());
        for s in &got {
            prop_assert_eq!(side[s.word], s.distance);
        }
    }

    #[test]
    fn prop_ties_follow_iteration_order(
        words in proptest::collection::vec("[a-c]{1,4}", 1..30),
        query in "[a-c]{1,4}",
    ) {
        let mut lex = Lexicon::new(4).unwrap();
        lex.load_words(&words);
        let order: Vec<&str> = lex.table().iter().map(|(w, _)| w).collect();
        let got = find_closest(lex.table(), &query, order.len()).unwrap();
        for pair in got.windows(2) {
            if pair[0].distance == pair[1].distance {
                let a = order.iter().position(|w| *w == pair[0].word).unwrap();
                let b = order.iter().position(|w| *w == pair[1].word).unwrap();
                prop_assert!(a < b);
            }
        }
    }
}
