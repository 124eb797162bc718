//! This module provides implementations for counting and finding duplicates from iterators.

use core::hash::{BuildHasher, Hash};
use std::collections::{HashMap, HashSet};

use crate::{num_traits::*, *};

/// A wrapper around an iterator whose items are hashable and comparable.
/// (i.e. implemented [`Hash`] and [`Eq`]).
///
/// ## Tips
///
/// The returned counts are a general HashMap, so you can choose a high performance hasher to
/// improve performance by annotating the return hashmap type.
pub struct HashableIterator<I: Iterator>(I);

/// A trait for converting an [`IntoIterator`] into a [`HashableIterator`]
pub trait IntoHashableIterator: IntoIterator {
    fn into_hash_iter(self) -> HashableIterator<Self::IntoIter>;
}

impl<I: IntoIterator> IntoHashableIterator for I {
    fn into_hash_iter(self) -> HashableIterator<Self::IntoIter> {
        HashableIterator(self.into_iter())
    }
}

impl<E, C, I, S> Tally<HashMap<E, C, S>> for HashableIterator<I>
where
    E: Eq + Hash,
    C: Count,
    I: Iterator<Item = E>,
    S: BuildHasher + Default,
{
    fn tally(self) -> HashMap<E, C, S> {
        self.0.fold(Default::default(), |mut counts, item| {
            *counts.entry(item).or_insert(C::ZERO) += C::ONE;
            counts
        })
    }
}

impl<E, I> Duplicates<E> for HashableIterator<I>
where
    E: Eq + Hash,
    I: Iterator<Item = E>,
{
    fn duplicates(self) -> Vec<E> {
        let items: Vec<E> = self.0.collect();
        let keep = duplicate_positions(&items, |item| item);

        let mut keep = keep.into_iter().peekable();
        items
            .into_iter()
            .enumerate()
            .filter_map(|(i, item)| keep.next_if_eq(&i).map(|_| item))
            .collect()
    }
}

/// Find the elements of a slice occurring at least twice, comparing them by `key`.
///
/// Two elements are the same if their keys are equal, so the key function decides what
/// "identical" means (e.g. by value, or by address for shared allocations). Every duplicated
/// element is returned once, in the order of its first occurrence.
///
/// ```
/// use tally::iter::duplicates_by_key;
///
/// let words = ["Apple", "pear", "apple", "PEAR", "plum"];
/// let dups = duplicates_by_key(&words, |w| w.to_lowercase());
/// assert_eq!(dups, [&"Apple", &"pear"]);
/// ```
pub fn duplicates_by_key<'a, T, K, F>(items: &'a [T], key: F) -> Vec<&'a T>
where
    K: Eq + Hash,
    F: Fn(&'a T) -> K,
{
    duplicate_positions(items, key)
        .into_iter()
        .map(|i| &items[i])
        .collect()
}

/// Indices of the first occurrence of each duplicated element, ascending.
fn duplicate_positions<'a, T, K, F>(items: &'a [T], key: F) -> Vec<usize>
where
    K: Eq + Hash,
    F: Fn(&'a T) -> K,
{
    let mut seen: HashMap<K, usize> = HashMap::with_capacity(items.len());
    let mut pending: HashSet<K> = HashSet::new();

    for item in items {
        let count = seen.entry(key(item)).or_insert(0);
        *count += 1;
        if *count == 2 {
            pending.insert(key(item));
        }
    }

    if pending.is_empty() {
        return Vec::new();
    }

    // emit on first sight, consuming the key so later repeats are skipped
    let mut positions = Vec::with_capacity(pending.len());
    for (i, item) in items.iter().enumerate() {
        if pending.remove(&key(item)) {
            positions.push(i);
            if pending.is_empty() {
                break;
            }
        }
    }
    positions
}
