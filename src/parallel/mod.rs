//! Parallel execution support for fpkit
//!
//! Provides a bounded parallel for-each over slices.

mod executor;
mod options;

pub use executor::{
    for_each_parallel, for_each_parallel_mut, for_each_parallel_mut_with_error,
    for_each_parallel_with_error,
};
pub use options::{with_limit, with_thread_name, ParallelConfig, ParallelOption};
