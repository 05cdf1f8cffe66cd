//! Slice helpers
//!
//! Every function borrows its input and returns a freshly allocated result.

mod access;
mod search;
mod transform;

pub use access::{copy_slice, head, is_empty_slice, last, pop, shift, tail};
pub use search::{
    contains, distinct, distinct_by, distinct_serialized, filter, find, find_first, find_indices,
    group_by,
};
pub use transform::{chunks, concat, flat_map, flatten, for_each, map, reduce, replace};
