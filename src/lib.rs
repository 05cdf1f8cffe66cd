//! # fpkit - Functional Helpers for Rust Collections
//!
//! A flat collection of small, generic helpers over slices and `HashMap`s,
//! plus a bounded parallel for-each.
//!
//! ## Features
//!
//! - **Slice helpers** - map, filter, reduce, chunking, grouping, distinctness,
//!   head/tail/last/pop/shift with default values on empty input
//! - **Map helpers** - keys, values, key/value transforms, indexing a slice by key
//! - **Bounded parallel for-each** - run a callback per element on scoped
//!   threads with an optional concurrency limit and first-error reporting
//! - **Small wrappers** - a value/error pair, zero-value checks, boxing helpers
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! fpkit = "1.0.0"
//! ```
//!
//! ### Slice Helpers
//!
//! ```rust
//! use fpkit::sequences::{chunks, distinct, filter, group_by, reduce};
//!
//! let numbers = [1, 2, 2, 3, 4, 4, 5];
//!
//! let even = filter(&numbers, |n| n % 2 == 0);
//! assert_eq!(even, vec![2, 2, 4, 4]);
//!
//! let unique = distinct(&numbers);
//! assert_eq!(unique, vec![1, 2, 3, 4, 5]);
//!
//! let sum = reduce(&numbers, 0, |acc, n| acc + n);
//! assert_eq!(sum, 21);
//!
//! let pairs = chunks(&unique, 2);
//! assert_eq!(pairs, vec![vec![1, 2], vec![3, 4], vec![5]]);
//!
//! let by_parity = group_by(&numbers, |n| n % 2);
//! assert_eq!(by_parity[&1], vec![1, 3, 5]);
//! ```
//!
//! ### Bounded Parallel For-Each
//!
//! ```rust
//! use fpkit::parallel::{for_each_parallel_with_error, with_limit};
//! use fpkit::{Error, Result};
//!
//! fn check(index: usize, name: &str) -> Result<()> {
//!     if name.is_empty() {
//!         return Err(Error::invocation(index, "empty name"));
//!     }
//!     Ok(())
//! }
//!
//! # fn main() -> Result<()> {
//! let names = ["alice", "bob", "carol"];
//!
//! // At most two checks run at the same time
//! for_each_parallel_with_error(&names, |i, name| check(i, name), [with_limit(2)])?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Parallel Execution Model
//!
//! ```text
//! items → queue of (index, item) → N workers → callback → first-error slot
//! ```
//!
//! - `N` is the configured limit, or one worker per element when unlimited
//! - The calling thread is one of the workers and returns only after every
//!   callback has returned
//! - Failed callbacks never cancel the others; the first error to complete
//!   is returned
//!
//! ## License
//!
//! Licensed under the [MIT License](https://opensource.org/licenses/MIT).

/// Version of fpkit
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod fallible;
pub mod maps;
pub mod parallel;
pub mod pointer;
pub mod sequences;
pub mod zero;

// Re-export main types
pub use error::{Error, Result};
pub use fallible::{result_from, Fallible};
pub use parallel::{
    for_each_parallel, for_each_parallel_mut, for_each_parallel_mut_with_error,
    for_each_parallel_with_error, with_limit, with_thread_name, ParallelOption,
};
pub use pointer::{dereference_or_default, reference_value};
pub use zero::{is_zero_value, zero_value_of};
