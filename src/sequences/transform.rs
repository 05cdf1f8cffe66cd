//! Element-wise transforms, folds and reshaping

/// Apply `f` to each element and collect the results
pub fn map<T, R>(slice: &[T], f: impl FnMut(&T) -> R) -> Vec<R> {
    slice.iter().map(f).collect()
}

/// Call `f` for each element in order
pub fn for_each<T>(slice: &[T], f: impl FnMut(&T)) {
    slice.iter().for_each(f)
}

/// Fold the slice into a single value, left to right
pub fn reduce<T, R>(slice: &[T], initial: R, mut f: impl FnMut(R, &T) -> R) -> R {
    slice.iter().fold(initial, |acc, item| f(acc, item))
}

/// Concatenate a slice of vectors into one vector
///
/// See [`concat`] for the variadic form.
pub fn flatten<T: Clone>(slices: &[Vec<T>]) -> Vec<T> {
    slices.iter().flatten().cloned().collect()
}

/// Map each element to a vector, then flatten the results
pub fn flat_map<T, R>(slice: &[T], f: impl FnMut(&T) -> Vec<R>) -> Vec<R> {
    slice.iter().flat_map(f).collect()
}

/// Concatenate any number of slices, preallocating the full length
pub fn concat<T: Clone>(slices: &[&[T]]) -> Vec<T> {
    let len = reduce(slices, 0, |total, slice| total + slice.len());
    let mut result = Vec::with_capacity(len);
    for slice in slices {
        result.extend_from_slice(slice);
    }
    result
}

/// Split into groups of `size` elements; the last group may be shorter
///
/// A `size` of zero yields no groups.
pub fn chunks<T: Clone>(slice: &[T], size: usize) -> Vec<Vec<T>> {
    if size == 0 {
        return Vec::new();
    }
    slice.chunks(size).map(<[T]>::to_vec).collect()
}

/// Replace every element matching `predicate` with `value`
///
/// Returns the new vector and how many elements were replaced.
pub fn replace<T: Clone>(slice: &[T], value: T, mut predicate: impl FnMut(&T) -> bool) -> (Vec<T>, usize) {
    let mut replaced = 0;
    let result = map(slice, |item| {
        if predicate(item) {
            replaced += 1;
            value.clone()
        } else {
            item.clone()
        }
    });
    (result, replaced)
}
