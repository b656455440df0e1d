use arbor::Trie;
use proptest::prelude::*;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
enum Operation {
    Insert(String),
    Remove(String),
    Contains(String),
    Prefix(String),
}

// Small alphabet so operations collide on shared prefixes.
fn word() -> impl Strategy<Value = String> {
    "[abcé]{0,5}"
}

proptest! {
    #[test]
    fn test_trie_matches_std_set(ops in proptest::collection::vec(
        prop_oneof![
            word().prop_map(Operation::Insert),
            word().prop_map(Operation::Remove),
            word().prop_map(Operation::Contains),
            word().prop_map(Operation::Prefix),
        ],
        1..100
    )) {
        let mut model = BTreeSet::new();
        let mut trie = Trie::new();

        for op in ops {
            match op {
                Operation::Insert(w) => {
                    let expected = model.insert(w.clone());
                    prop_assert_eq!(trie.insert(&w), expected, "insert mismatch for {:?}", w);
                }
                Operation::Remove(w) => {
                    let expected = model.remove(&w);
                    prop_assert_eq!(trie.remove(&w), expected, "remove mismatch for {:?}", w);
                }
                Operation::Contains(w) => {
                    prop_assert_eq!(trie.contains(&w), model.contains(&w));
                }
                Operation::Prefix(p) => {
                    let expected: Vec<String> =
                        model.iter().filter(|w| w.starts_with(p.as_str())).cloned().collect();
                    prop_assert_eq!(trie.starts_with(&p), p.is_empty() || !expected.is_empty());
                    prop_assert_eq!(trie.words_with_prefix(&p), expected);
                }
            }
        }

        // Final consistency check
        prop_assert_eq!(trie.len(), model.len());
        prop_assert_eq!(trie.iter().collect::<Vec<_>>(), model.iter().cloned().collect::<Vec<_>>());

        // Pruning leaves exactly the nodes needed by the surviving words.
        let rebuilt: Trie = model.iter().collect();
        prop_assert_eq!(trie.node_count(), rebuilt.node_count());
    }
}
