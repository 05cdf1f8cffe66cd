//! Positional access: head, tail, last, pop, shift

/// Reports whether the slice has no elements
pub fn is_empty_slice<T>(slice: &[T]) -> bool {
    slice.is_empty()
}

/// First element, or `T::default()` when the slice is empty
pub fn head<T: Clone + Default>(slice: &[T]) -> T {
    slice.first().cloned().unwrap_or_default()
}

/// Everything after the first element
///
/// Empty for an empty or single-element slice.
pub fn tail<T: Clone>(slice: &[T]) -> Vec<T> {
    slice.get(1..).map(<[T]>::to_vec).unwrap_or_default()
}

/// Last element, or `T::default()` when the slice is empty
pub fn last<T: Clone + Default>(slice: &[T]) -> T {
    slice.last().cloned().unwrap_or_default()
}

/// Split off the last element
///
/// Returns `(last, rest, true)`, or `(T::default(), vec![], false)` for an
/// empty slice.
pub fn pop<T: Clone + Default>(slice: &[T]) -> (T, Vec<T>, bool) {
    match slice.split_last() {
        Some((last, rest)) => (last.clone(), rest.to_vec(), true),
        None => (T::default(), Vec::new(), false),
    }
}

/// Split off the first element
///
/// Returns `(first, rest, true)`, or `(T::default(), vec![], false)` for an
/// empty slice.
pub fn shift<T: Clone + Default>(slice: &[T]) -> (T, Vec<T>, bool) {
    match slice.split_first() {
        Some((first, rest)) => (first.clone(), rest.to_vec(), true),
        None => (T::default(), Vec::new(), false),
    }
}

/// Independent copy of the slice
pub fn copy_slice<T: Clone>(slice: &[T]) -> Vec<T> {
    slice.to_vec()
}
