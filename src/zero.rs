//! Zero-value helpers
//!
//! A type's zero value is its `Default`.

/// Reports whether `value` equals the default of its type
pub fn is_zero_value<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// The default value of `T`
pub fn zero_value_of<T: Default>() -> T {
    T::default()
}
