use super::tests::validate_trie;
use super::*;

use proptest::prelude::*;
use proptest_derive::Arbitrary;
use std::collections::BTreeSet;

fn word() -> impl Strategy<Value = String> {
    // A tiny alphabet keeps words overlapping, so inserts and deletes
    // constantly share and split prefixes.
    "[abc]{0,6}"
}

#[derive(Clone, Debug, Arbitrary)]
enum Op {
    #[proptest(weight = 5)]
    Insert(#[proptest(strategy = "word()")] String),
    #[proptest(weight = 3)]
    Delete(#[proptest(strategy = "word()")] String),
    #[proptest(weight = 2)]
    Search(#[proptest(strategy = "word()")] String),
    Suggest(#[proptest(strategy = "word()")] String),
    Spell(#[proptest(strategy = "word()")] String),
}

fn model_spelling(m: &BTreeSet<String>, word: &str) -> Vec<String> {
    (1..=word.len())
        .rev()
        .filter(|&end| word.is_char_boundary(end))
        .map(|end| &word[..end])
        .find(|prefix| m.contains(*prefix))
        .map(|prefix| vec![prefix.to_owned()])
        .unwrap_or_default()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        max_shrink_iters: 10_000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence(ops in prop::collection::vec(any::<Op>(), 0..=500)) {
        let mut t = Trie::new();
        let mut m: BTreeSet<String> = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(w) => {
                    prop_assert_eq!(t.insert(&w), m.insert(w.clone()));
                }
                Op::Delete(w) => {
                    prop_assert_eq!(t.delete(&w), m.remove(&w));
                }
                Op::Search(w) => {
                    prop_assert_eq!(t.search(&w), m.contains(&w));
                }
                Op::Suggest(prefix) => {
                    let expected: Vec<String> = m
                        .iter()
                        .filter(|w| w.starts_with(prefix.as_str()))
                        .cloned()
                        .collect();
                    prop_assert_eq!(t.contains_prefix(&prefix), !expected.is_empty());
                    prop_assert_eq!(t.auto_suggest(&prefix), expected);
                }
                Op::Spell(w) => {
                    prop_assert_eq!(t.spelling_suggestions(&w), model_spelling(&m, &w));
                }
            }

            prop_assert_eq!(t.len(), m.len());
        }

        validate_trie(&t);
        let got: Vec<String> = t.words().collect();
        let expected: Vec<String> = m.iter().cloned().collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_delete_everything_leaves_root(words in prop::collection::vec(word(), 0..=64)) {
        let mut t: Trie = words.iter().collect();
        let unique: BTreeSet<&String> = words.iter().collect();
        prop_assert_eq!(t.len(), unique.len());

        for w in &unique {
            prop_assert!(t.delete(w));
            validate_trie(&t);
        }
        prop_assert!(t.is_empty());
        prop_assert_eq!(t.node_count(), 1);
    }
}

/// Calls `f` with every ordering of `items` (iterative Heap's algorithm).
fn for_each_permutation<T: Clone>(items: &[T], mut f: impl FnMut(Vec<T>)) {
    let mut perm = items.to_vec();
    let mut counters = vec![0usize; perm.len()];
    f(perm.clone());

    let mut i = 1;
    while i < perm.len() {
        if counters[i] < i {
            let j = if i % 2 == 0 { 0 } else { counters[i] };
            perm.swap(j, i);
            f(perm.clone());
            counters[i] += 1;
            i = 1;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }
}

const SMALL_SET: [&str; 6] = ["", "a", "ab", "abc", "b", "ba"];

#[test]
fn permutations_are_complete() {
    let mut seen = BTreeSet::new();
    for_each_permutation(&[1, 2, 3, 4], |perm| {
        assert!(seen.insert(perm));
    });
    assert_eq!(seen.len(), 24);
}

#[test]
fn exhaustive_insert_order_small_set() {
    let mut expected: Vec<&str> = SMALL_SET.to_vec();
    expected.sort_unstable();
    let mut first_shape = None;

    for_each_permutation(&SMALL_SET, |perm| {
        let mut t = Trie::new();
        for w in perm {
            assert!(t.insert(w));
        }

        validate_trie(&t);
        assert_eq!(t.words().collect::<Vec<_>>(), expected);
        // The shape depends only on the word set, not on insertion order.
        let nodes = t.node_count();
        assert_eq!(*first_shape.get_or_insert(nodes), nodes);
    });
}

#[test]
fn exhaustive_delete_order_small_set() {
    let base: Trie = SMALL_SET.into_iter().collect();

    for_each_permutation(&SMALL_SET, |perm| {
        let mut t = base.clone();
        let mut m: BTreeSet<&str> = SMALL_SET.into_iter().collect();

        for w in perm {
            assert!(t.delete(w));
            assert!(!t.delete(w));
            m.remove(w);
            assert_eq!(t.len(), m.len());
            validate_trie(&t);
            for rest in &m {
                assert!(t.search(rest), "{rest:?} lost after deleting {w:?}");
            }
        }
        assert!(t.is_empty());
        assert_eq!(t.node_count(), 1);
    });
}
