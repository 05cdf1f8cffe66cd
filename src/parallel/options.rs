//! Configuration for parallel execution
//!
//! Callers never see [`ParallelConfig`] directly. They pass a list of
//! [`ParallelOption`] values, each of which updates the fields it owns.
//! Options are applied in order, so a later option overrides an earlier one.

use std::fmt;

const DEFAULT_THREAD_NAME: &str = "fpkit-worker";

/// Configuration for parallel execution
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    limit: Option<usize>,
    thread_name: String,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            limit: None,
            thread_name: DEFAULT_THREAD_NAME.to_string(),
        }
    }
}

impl ParallelConfig {
    /// Start from defaults and apply `options` in order
    pub(crate) fn from_options(options: impl IntoIterator<Item = ParallelOption>) -> Self {
        let mut config = Self::default();
        for option in options {
            option.apply(&mut config);
        }
        config
    }

    /// Maximum number of callbacks in flight, `None` when unlimited
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Prefix used to name worker threads
    pub fn thread_name(&self) -> &str {
        &self.thread_name
    }

    /// Number of workers needed for `len` items
    pub(crate) fn workers_for(&self, len: usize) -> usize {
        match self.limit {
            Some(limit) => limit.min(len),
            None => len,
        }
    }
}

/// A single configuration step for the parallel executor
///
/// Build these with [`with_limit`] or [`with_thread_name`].
pub struct ParallelOption {
    apply: Box<dyn Fn(&mut ParallelConfig) + Send + Sync>,
}

impl ParallelOption {
    fn new(apply: impl Fn(&mut ParallelConfig) + Send + Sync + 'static) -> Self {
        Self {
            apply: Box::new(apply),
        }
    }

    fn apply(&self, config: &mut ParallelConfig) {
        (self.apply)(config)
    }
}

impl fmt::Debug for ParallelOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParallelOption").finish_non_exhaustive()
    }
}

/// Cap the number of callbacks running at the same time
///
/// Values of zero or below leave the configuration untouched, so
/// `with_limit(0)` behaves like passing no limit at all.
///
/// # Example
/// ```
/// use fpkit::parallel::{for_each_parallel, with_limit};
///
/// let urls = ["a", "b", "c", "d"];
/// for_each_parallel(&urls, |_, url| assert!(!url.is_empty()), [with_limit(2)]);
/// ```
pub fn with_limit(limit: i64) -> ParallelOption {
    ParallelOption::new(move |config| {
        if limit <= 0 {
            return;
        }
        config.limit = Some(usize::try_from(limit).unwrap_or(usize::MAX));
    })
}

/// Name worker threads `"{prefix}-{n}"`
///
/// An empty prefix is ignored.
pub fn with_thread_name(prefix: impl Into<String>) -> ParallelOption {
    let prefix = prefix.into();
    ParallelOption::new(move |config| {
        if prefix.is_empty() {
            return;
        }
        config.thread_name = prefix.clone();
    })
}
