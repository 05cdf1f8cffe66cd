//! Bounded parallel for-each
//!
//! Runs a callback once per element on scoped worker threads. The pool has
//! `min(limit, len)` workers (one per element when unlimited) pulling work
//! items from a shared queue; the calling thread is worker 0. Each worker
//! runs one callback at a time, so no more than `limit` callbacks are ever
//! in flight.

use super::options::{ParallelConfig, ParallelOption};
use parking_lot::Mutex;
use std::convert::Infallible;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use tracing::{debug, trace, warn};

/// Write-once error slot shared by all workers
///
/// The first error to complete is kept; later ones are dropped.
struct FirstError<E> {
    slot: Mutex<Option<E>>,
}

impl<E> FirstError<E> {
    fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    fn record(&self, index: usize, err: E) {
        let mut slot = self.slot.lock();
        if slot.is_none() {
            *slot = Some(err);
        } else {
            trace!(index, "error already recorded, discarding");
        }
    }

    fn into_inner(self) -> Option<E> {
        self.slot.into_inner()
    }
}

/// Drive `f` over every `(index, item)` pair and wait for all of them
fn run<I, X, F, E>(items: I, len: usize, f: F, config: &ParallelConfig) -> Result<(), E>
where
    I: Iterator<Item = X> + Send,
    X: Send,
    F: Fn(usize, X) -> Result<(), E> + Sync,
    E: Send,
{
    if len == 0 {
        return Ok(());
    }

    let workers = config.workers_for(len);
    debug!(
        items = len,
        workers,
        limit = ?config.limit(),
        "starting parallel for-each"
    );

    let queue = Mutex::new(items.enumerate());
    let first_error = FirstError::new();
    let completed = AtomicUsize::new(0);

    let drain = |worker: usize| {
        loop {
            // Guard is released before the callback runs
            let next = queue.lock().next();
            let Some((index, item)) = next else {
                break;
            };
            if let Err(err) = f(index, item) {
                first_error.record(index, err);
            }
            completed.fetch_add(1, Ordering::Relaxed);
        }
        trace!(worker, "worker drained queue");
    };
    let drain = &drain;

    thread::scope(|scope| {
        for worker in 1..workers {
            let spawned = thread::Builder::new()
                .name(format!("{}-{}", config.thread_name(), worker))
                .spawn_scoped(scope, move || drain(worker));

            if let Err(err) = spawned {
                warn!(
                    worker,
                    error = %err,
                    "failed to spawn worker thread, continuing with fewer workers"
                );
            }
        }

        drain(0);
    });

    let error = first_error.into_inner();
    debug!(
        completed = completed.load(Ordering::Relaxed),
        failed = error.is_some(),
        "parallel for-each finished"
    );

    match error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn unwrap_infallible(result: Result<(), Infallible>) {
    if let Err(never) = result {
        match never {}
    }
}

/// Call `f(index, &item)` for every element, in parallel
///
/// Returns once every call has returned. Call order is unspecified.
///
/// # Example
/// ```
/// use fpkit::parallel::{for_each_parallel, with_limit};
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// let total = AtomicUsize::new(0);
/// for_each_parallel(&[1, 2, 3, 4], |_, n| {
///     total.fetch_add(*n, Ordering::SeqCst);
/// }, [with_limit(2)]);
///
/// assert_eq!(total.into_inner(), 10);
/// ```
pub fn for_each_parallel<T, F>(items: &[T], f: F, options: impl IntoIterator<Item = ParallelOption>)
where
    T: Sync,
    F: Fn(usize, &T) + Sync,
{
    let config = ParallelConfig::from_options(options);
    unwrap_infallible(run(
        items.iter(),
        items.len(),
        |index, item| {
            f(index, item);
            Ok(())
        },
        &config,
    ));
}

/// Call a fallible `f(index, &item)` for every element, in parallel
///
/// Every call runs to completion even after one of them fails; there is no
/// early cancellation. If any call failed, one of the errors is returned:
/// the first to complete. Which one that is varies between runs when
/// several calls fail.
///
/// # Example
/// ```
/// use fpkit::parallel::{for_each_parallel_with_error, with_limit};
/// use fpkit::Error;
///
/// let result = for_each_parallel_with_error(&[1, -2, 3], |index, n| {
///     if *n < 0 {
///         return Err(Error::invocation(index, "negative"));
///     }
///     Ok(())
/// }, [with_limit(2)]);
///
/// assert_eq!(result.unwrap_err().index(), Some(1));
/// ```
pub fn for_each_parallel_with_error<T, F, E>(
    items: &[T],
    f: F,
    options: impl IntoIterator<Item = ParallelOption>,
) -> Result<(), E>
where
    T: Sync,
    F: Fn(usize, &T) -> Result<(), E> + Sync,
    E: Send,
{
    let config = ParallelConfig::from_options(options);
    run(items.iter(), items.len(), f, &config)
}

/// Call `f(index, &mut item)` for every element, in parallel
///
/// Each call gets exclusive access to its own element, which makes this the
/// way to update a slice in place from parallel callbacks.
pub fn for_each_parallel_mut<T, F>(
    items: &mut [T],
    f: F,
    options: impl IntoIterator<Item = ParallelOption>,
) where
    T: Send,
    F: Fn(usize, &mut T) + Sync,
{
    let config = ParallelConfig::from_options(options);
    let len = items.len();
    unwrap_infallible(run(
        items.iter_mut(),
        len,
        |index, item| {
            f(index, item);
            Ok(())
        },
        &config,
    ));
}

/// Fallible form of [`for_each_parallel_mut`]
///
/// Error semantics match [`for_each_parallel_with_error`].
pub fn for_each_parallel_mut_with_error<T, F, E>(
    items: &mut [T],
    f: F,
    options: impl IntoIterator<Item = ParallelOption>,
) -> Result<(), E>
where
    T: Send,
    F: Fn(usize, &mut T) -> Result<(), E> + Sync,
    E: Send,
{
    let config = ParallelConfig::from_options(options);
    let len = items.len();
    run(items.iter_mut(), len, f, &config)
}
