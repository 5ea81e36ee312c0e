//! Order-preserving deduplication.
//!
//! Every function here keeps the first occurrence of each distinct value and
//! drops later repeats, so the output lists the distinct values of the input
//! in first-occurrence order. None of them mutate their input except
//! [`dedupe_in_place`], which exists to reuse an owned vector's allocation.

use std::collections::HashSet;
use std::hash::Hash;

/// Remove repeated values, keeping the first occurrence of each.
///
/// Runs in one pass with a `HashSet` sized to the number of distinct values.
///
/// ```rust
/// use uniqmap::dedupe;
///
/// assert_eq!(dedupe(&[1, 2, 2, 3, 3, 4, 5, 5, 6]), vec![1, 2, 3, 4, 5, 6]);
/// assert_eq!(dedupe::<i32>(&[]), Vec::<i32>::new());
/// ```
pub fn dedupe<T: Eq + Hash + Clone>(input: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(input.len());
    input
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Deduplicate with a caller-supplied equality.
///
/// For element types that are not `Hash`. Each element is compared against
/// the distinct values kept so far, so the cost grows with the number of
/// distinct values. `eq` should behave like an equivalence relation; the
/// first member of each class is the one kept.
pub fn dedupe_by<T, F>(input: &[T], mut eq: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut kept: Vec<T> = Vec::new();
    for item in input {
        if !kept.iter().any(|existing| eq(existing, item)) {
            kept.push(item.clone());
        }
    }
    kept
}

/// Keep the first element for each distinct key.
pub fn dedupe_by_key<T, K, F>(input: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::new();
    input
        .iter()
        .filter(|item| seen.insert(key(*item)))
        .cloned()
        .collect()
}

/// In-place variant of [`dedupe`].
pub fn dedupe_in_place<T: Eq + Hash + Clone>(values: &mut Vec<T>) {
    let mut seen = HashSet::with_capacity(values.len());
    values.retain(|item| seen.insert(item.clone()));
}

/// True when some value occurs more than once.
pub fn has_duplicates<T: Eq + Hash>(input: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(input.len());
    input.iter().any(|item| !seen.insert(item))
}

/// Lazy first-occurrence filter, created by [`Unique::unique`].
pub struct UniqueIter<I: Iterator> {
    source: I,
    seen: HashSet<I::Item>,
}

impl<I> Iterator for UniqueIter<I>
where
    I: Iterator,
    I::Item: Eq + Hash + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let seen = &mut self.seen;
        self.source.find(|item| seen.insert(item.clone()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.source.size_hint();
        (0, upper)
    }
}

/// Iterator extension yielding each distinct item once, in first-occurrence order.
///
/// ```rust
/// use uniqmap::Unique;
///
/// let words: Vec<_> = ["a", "b", "a", "c", "b"].into_iter().unique().collect();
/// assert_eq!(words, ["a", "b", "c"]);
/// ```
pub trait Unique: Iterator {
    fn unique(self) -> UniqueIter<Self>
    where
        Self: Sized,
        Self::Item: Eq + Hash + Clone,
    {
        UniqueIter {
            source: self,
            seen: HashSet::new(),
        }
    }
}

impl<I: Iterator> Unique for I {}
