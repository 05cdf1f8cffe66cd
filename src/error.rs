//! Error types for fpkit

use thiserror::Error;

/// fpkit errors
#[derive(Error, Debug)]
pub enum Error {
    /// A parallel callback failed for one element
    ///
    /// **Triggered by:** Callbacks passed to
    /// [`for_each_parallel_with_error`](crate::parallel::for_each_parallel_with_error)
    /// that choose this type as their error.
    /// **Example:** `Err(Error::invocation(index, "upload rejected"))`
    /// **Note:** The executor never builds this itself. Callback errors are returned unchanged.
    #[error("Invocation failed at index {index}: {message}")]
    Invocation {
        /// Position of the element in the input sequence
        index: usize,
        /// Failure description
        message: String,
    },

    /// A value could not be serialized into a comparison key
    ///
    /// **Triggered by:** [`distinct_serialized`](crate::sequences::distinct_serialized)
    /// on a value whose `Serialize` impl fails (e.g. a map with non-string keys).
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General runtime error
    #[error("Runtime error: {0}")]
    RuntimeError(String),
}

impl Error {
    /// Create an invocation error for the element at `index`
    pub fn invocation(index: usize, message: impl Into<String>) -> Self {
        Error::Invocation {
            index,
            message: message.into(),
        }
    }

    /// Create a runtime error with a message
    pub fn runtime(msg: impl Into<String>) -> Self {
        Error::RuntimeError(msg.into())
    }

    /// Index of the failing element, if this error carries one
    pub fn index(&self) -> Option<usize> {
        match self {
            Error::Invocation { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Result type for fpkit operations
pub type Result<T> = std::result::Result<T, Error>;
