//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and check each
//! structure against a model from the standard library.

use proptest::prelude::*;
use rust_core_structures::bst::BinarySearchTree;
use rust_core_structures::heap::Heap;
use rust_core_structures::trie::Trie;
use rust_core_structures::union_find::{KeyedUnionFind, NaiveUnionFind, UnionFind};
use rust_core_structures::{DisjointSet, MaxFirst, MinFirst};

use std::collections::{BTreeSet, HashSet};

/// Pops come out in the order of a sorted copy of the input
fn test_pop_order(values: Vec<i32>) -> Result<(), TestCaseError> {
    let mut heap = Heap::min();
    for &value in &values {
        heap.push(value);
    }
    prop_assert_eq!(heap.len(), values.len());

    let mut expected = values;
    expected.sort_unstable();
    let mut popped = Vec::with_capacity(expected.len());
    while let Some(value) = heap.pop() {
        popped.push(value);
    }
    prop_assert_eq!(popped, expected);
    Ok(())
}

/// Interleaved push/pop against a sorted model, max-first
fn test_push_pop_against_model(ops: Vec<(bool, i32)>) -> Result<(), TestCaseError> {
    let mut heap = Heap::max();
    let mut model: Vec<i32> = Vec::new();

    for (should_pop, value) in ops {
        if should_pop {
            model.sort_unstable();
            prop_assert_eq!(heap.pop(), model.pop());
        } else {
            heap.push(value);
            model.push(value);
        }
        prop_assert_eq!(heap.len(), model.len());
        prop_assert_eq!(heap.peek().copied(), model.iter().max().copied());
    }
    Ok(())
}

/// Heapify and append agree with pushing one at a time
fn test_heapify_and_append(left: Vec<i32>, right: Vec<i32>) -> Result<(), TestCaseError> {
    let mut merged = Heap::from_vec(left.clone(), MinFirst);
    let mut other = Heap::from_vec(right.clone(), MinFirst);
    merged.append(&mut other);
    prop_assert!(other.is_empty());

    let mut pushed = Heap::new(MinFirst);
    pushed.extend(left.into_iter().chain(right));
    prop_assert_eq!(merged.into_sorted_vec(), pushed.into_sorted_vec());
    Ok(())
}

/// BST against a BTreeSet under random inserts and deletes
fn test_bst_against_model(ops: Vec<(bool, i32)>) -> Result<(), TestCaseError> {
    let mut tree = BinarySearchTree::new();
    let mut model = BTreeSet::new();

    for (insert, value) in ops {
        if insert {
            prop_assert_eq!(tree.insert(value), model.insert(value));
        } else {
            prop_assert_eq!(tree.delete(&value), model.remove(&value));
        }
        prop_assert_eq!(tree.len(), model.len());
        prop_assert!(tree.is_ordered());
    }

    let in_order: Vec<i32> = tree.in_order().into_iter().copied().collect();
    let expected: Vec<i32> = model.iter().copied().collect();
    prop_assert_eq!(in_order, expected);
    prop_assert_eq!(tree.min(), model.first());
    prop_assert_eq!(tree.max(), model.last());
    for value in -20..20 {
        prop_assert_eq!(tree.contains(&value), model.contains(&value));
    }
    Ok(())
}

/// Trie against a HashSet, with both prefix-count strategies checked
fn test_trie_against_model(ops: Vec<(bool, String)>) -> Result<(), TestCaseError> {
    let mut trie = Trie::new();
    let mut model: HashSet<String> = HashSet::new();

    for (insert, word) in ops {
        if insert {
            prop_assert_eq!(trie.insert(&word), model.insert(word.clone()));
        } else {
            prop_assert_eq!(trie.delete(&word), model.remove(&word));
        }
        prop_assert_eq!(trie.len(), model.len());
    }

    for prefix in ["", "a", "b", "ab", "ba", "abc", "cab"] {
        let expected = model.iter().filter(|w| w.starts_with(prefix)).count();
        prop_assert_eq!(trie.prefix_count(prefix), expected);
        prop_assert_eq!(trie.prefix_count_dfs(prefix), expected);
        prop_assert_eq!(trie.starts_with(prefix), prefix.is_empty() || expected > 0);
    }

    let mut words = trie.words();
    words.sort();
    let mut expected: Vec<String> = model.into_iter().collect();
    expected.sort();
    prop_assert_eq!(words, expected);
    Ok(())
}

/// Deleting every word prunes the trie back to a bare root
fn test_trie_prunes_to_root(words: Vec<String>) -> Result<(), TestCaseError> {
    let mut trie = Trie::from_words(&words);
    for word in &words {
        trie.delete(word);
    }
    prop_assert!(trie.is_empty());
    prop_assert_eq!(trie.node_count(), 1);
    prop_assert_eq!(trie.root().count(), 0);
    Ok(())
}

/// Set count equals the universe size minus successful unions
fn test_union_count<D: DisjointSet<usize>>(
    mut sets: D,
    n: usize,
    edges: &[(usize, usize)],
) -> Result<(), TestCaseError> {
    let mut merged = 0;
    for (a, b) in edges {
        if sets.union(a, b) {
            merged += 1;
        }
        prop_assert!(sets.connected(a, b));
    }
    prop_assert_eq!(sets.set_count(), n - merged);
    Ok(())
}

/// All three union-finds agree on which pairs are connected
fn test_same_partition(n: usize, edges: Vec<(usize, usize)>) -> Result<(), TestCaseError> {
    let mut naive = NaiveUnionFind::new(n);
    let mut ranked = UnionFind::new(n);
    let mut keyed = KeyedUnionFind::new();
    for i in 0..n {
        keyed.add(i);
    }

    for &(a, b) in &edges {
        let merged = naive.union(a, b);
        prop_assert_eq!(ranked.union(a, b), merged);
        prop_assert_eq!(keyed.union(&a, &b), merged);
    }
    prop_assert_eq!(naive.components(), ranked.components());
    prop_assert_eq!(keyed.set_count(), ranked.components());

    for a in 0..n {
        for b in 0..n {
            let expected = naive.connected(a, b);
            prop_assert_eq!(ranked.connected(a, b), expected);
            prop_assert_eq!(keyed.connected(&a, &b), expected);
        }
    }
    Ok(())
}

/// Union by rank keeps every rank at most log2(n)
fn test_rank_bound(n: usize, edges: Vec<(usize, usize)>) -> Result<(), TestCaseError> {
    let mut sets = UnionFind::new(n);
    for (a, b) in edges {
        sets.union(a, b);
    }
    let bound = usize::BITS - n.leading_zeros();
    for x in 0..n {
        prop_assert!(u32::from(sets.rank_of(x)) < bound.max(1));
        let root = sets.find(x);
        prop_assert_eq!(sets.find(root), root);
        prop_assert_eq!(sets.parent_of(root), root);
    }
    Ok(())
}

fn edge_list(n: usize) -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..n, 0..n), 0..60)
}

proptest! {
    #[test]
    fn test_heap_pop_order(values in prop::collection::vec(-100i32..100, 0..100)) {
        test_pop_order(values)?;
    }

    #[test]
    fn test_heap_push_pop_against_model(ops in prop::collection::vec((any::<bool>(), -100i32..100), 0..100)) {
        test_push_pop_against_model(ops)?;
    }

    #[test]
    fn test_heap_heapify_and_append(
        left in prop::collection::vec(-100i32..100, 0..50),
        right in prop::collection::vec(-100i32..100, 0..50)
    ) {
        test_heapify_and_append(left, right)?;
    }

    #[test]
    fn test_max_heap_sorted_descending(values in prop::collection::vec(any::<i64>(), 0..100)) {
        let heap = Heap::from_vec(values.clone(), MaxFirst);
        let mut expected = values;
        expected.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(heap.into_sorted_vec(), expected);
    }

    #[test]
    fn test_bst_model(ops in prop::collection::vec((any::<bool>(), -20i32..20), 0..120)) {
        test_bst_against_model(ops)?;
    }

    #[test]
    fn test_trie_model(ops in prop::collection::vec((any::<bool>(), "[abc]{0,4}"), 0..80)) {
        test_trie_against_model(ops)?;
    }

    #[test]
    fn test_trie_delete_all(words in prop::collection::vec("[a-d]{1,6}", 0..40)) {
        test_trie_prunes_to_root(words)?;
    }

    #[test]
    fn test_naive_union_count(edges in edge_list(12)) {
        test_union_count(NaiveUnionFind::new(12), 12, &edges)?;
    }

    #[test]
    fn test_ranked_union_count(edges in edge_list(12)) {
        test_union_count(UnionFind::new(12), 12, &edges)?;
    }

    #[test]
    fn test_keyed_union_count(edges in edge_list(12)) {
        let mut sets = KeyedUnionFind::new();
        for i in 0..12 {
            sets.add(i);
        }
        test_union_count(sets, 12, &edges)?;
    }

    #[test]
    fn test_union_find_variants_agree(edges in edge_list(10)) {
        test_same_partition(10, edges)?;
    }

    #[test]
    fn test_union_find_rank_bound(edges in prop::collection::vec((0usize..64, 0usize..64), 0..200)) {
        test_rank_bound(64, edges)?;
    }
}
