//! Boxing and defaulting dereference

/// Move `value` onto the heap
///
/// Handy for literals or call results where a `Box<T>` is expected.
pub fn reference_value<T>(value: T) -> Box<T> {
    Box::new(value)
}

/// Clone the referenced value, or return `T::default()` for `None`
pub fn dereference_or_default<T: Clone + Default>(ptr: Option<&T>) -> T {
    ptr.cloned().unwrap_or_default()
}
