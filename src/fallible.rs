//! Value-plus-error pair
//!
//! [`Fallible`] holds the outcome of an operation that may fail as two
//! fields: the value (possibly a default placeholder) and an optional error.
//! Convert with [`Fallible::into_result`] or `From<Result<T, E>>`.

use crate::error::Error;

/// The result of an operation that may fail
///
/// See [`result_from`].
#[derive(Debug, Clone, PartialEq)]
pub struct Fallible<T, E = Error> {
    ok: T,
    err: Option<E>,
}

impl<T, E> Fallible<T, E> {
    /// The value
    pub fn ok(&self) -> &T {
        &self.ok
    }

    /// The error, `None` if the operation succeeded
    pub fn err(&self) -> Option<&E> {
        self.err.as_ref()
    }

    /// Reports whether an error is present
    pub fn is_err(&self) -> bool {
        self.err.is_some()
    }

    /// Split into a standard `Result`, dropping the value if there is an error
    pub fn into_result(self) -> Result<T, E> {
        match self.err {
            Some(err) => Err(err),
            None => Ok(self.ok),
        }
    }
}

impl<T: Default, E> From<Result<T, E>> for Fallible<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => result_from(value, None),
            Err(err) => result_from(T::default(), Some(err)),
        }
    }
}

/// Pair a value with an optional error
pub fn result_from<T, E>(value: T, err: Option<E>) -> Fallible<T, E> {
    Fallible { ok: value, err }
}
