//! Filtering, lookup, distinctness and grouping

use crate::error::Result;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Elements matching `predicate`, in order
///
/// Identical to [`find`].
pub fn filter<T: Clone>(slice: &[T], mut predicate: impl FnMut(&T) -> bool) -> Vec<T> {
    slice.iter().filter(|item| predicate(item)).cloned().collect()
}

/// Elements matching `predicate`, in order
///
/// Identical to [`filter`].
pub fn find<T: Clone>(slice: &[T], predicate: impl FnMut(&T) -> bool) -> Vec<T> {
    filter(slice, predicate)
}

/// First element matching `predicate`
pub fn find_first<T: Clone>(slice: &[T], mut predicate: impl FnMut(&T) -> bool) -> Option<T> {
    slice.iter().find(|item| predicate(item)).cloned()
}

/// Positions of all elements matching `predicate`
pub fn find_indices<T>(slice: &[T], mut predicate: impl FnMut(&T) -> bool) -> Vec<usize> {
    slice
        .iter()
        .enumerate()
        .filter(|(_, item)| predicate(item))
        .map(|(index, _)| index)
        .collect()
}

/// Reports whether the slice holds an element equal to `value`
pub fn contains<T: PartialEq>(slice: &[T], value: &T) -> bool {
    slice.iter().any(|item| item == value)
}

/// Drop repeated elements, keeping the first occurrence of each
pub fn distinct<T: Eq + Hash + Clone>(slice: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(slice.len());
    filter(slice, |item| seen.insert(item.clone()))
}

/// Drop elements whose key repeats an earlier one
pub fn distinct_by<T: Clone, K: Eq + Hash>(slice: &[T], mut key: impl FnMut(&T) -> K) -> Vec<T> {
    let mut seen = HashSet::with_capacity(slice.len());
    filter(slice, |item| seen.insert(key(item)))
}

/// Drop repeated elements, comparing their JSON serialization
///
/// For types that implement `Serialize` but not `Eq + Hash` (for example
/// structs holding floats). Two values are equal when they serialize to the
/// same JSON text.
///
/// # Errors
///
/// Returns [`Error::Serialization`](crate::Error::Serialization) if any
/// element fails to serialize.
pub fn distinct_serialized<T: Serialize + Clone>(slice: &[T]) -> Result<Vec<T>> {
    let mut seen = HashSet::with_capacity(slice.len());
    let mut distinct = Vec::with_capacity(slice.len());
    for item in slice {
        if seen.insert(serde_json::to_string(item)?) {
            distinct.push(item.clone());
        }
    }
    Ok(distinct)
}

/// Group elements by the key `f` derives from them
///
/// Each group keeps the input order of its elements.
pub fn group_by<T: Clone, K: Eq + Hash>(slice: &[T], mut f: impl FnMut(&T) -> K) -> HashMap<K, Vec<T>> {
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();
    for item in slice {
        groups.entry(f(item)).or_default().push(item.clone());
    }
    groups
}
