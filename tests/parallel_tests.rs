//! Integration tests for the bounded parallel for-each
//!
//! These tests check the concurrency limit, exactly-once delivery with the
//! original index, and error reporting after every callback has finished.

use fpkit::parallel::{
    for_each_parallel, for_each_parallel_mut, for_each_parallel_with_error, with_limit,
};
use fpkit::Error;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Barrier;
use std::thread;
use std::time::Duration;

/// Tracks how many callbacks are in flight and the highest count seen
#[derive(Default)]
struct ActiveCounter {
    active: AtomicUsize,
    max_seen: AtomicUsize,
}

impl ActiveCounter {
    fn enter(&self) -> usize {
        let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_seen.fetch_max(now, Ordering::SeqCst);
        now
    }

    fn leave(&self) {
        self.active.fetch_sub(1, Ordering::SeqCst);
    }

    fn max(&self) -> usize {
        self.max_seen.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Person {
    name: String,
    name2: String,
}

fn people() -> Vec<Person> {
    ["a", "b", "c"]
        .iter()
        .map(|name| Person {
            name: name.to_string(),
            ..Default::default()
        })
        .collect()
}

// =============================================================================
// Concurrency Limit
// =============================================================================

#[test]
fn test_limit_two_never_exceeded() {
    let items: Vec<i32> = (1..=10).collect();
    let counter = ActiveCounter::default();

    for_each_parallel(
        &items,
        |_, _| {
            counter.enter();
            thread::sleep(Duration::from_millis(5));
            counter.leave();
        },
        [with_limit(2)],
    );

    assert!(counter.max() <= 2, "saw {} active callbacks", counter.max());
    assert!(counter.max() >= 1);
}

#[test]
fn test_limit_reported_through_error() {
    const LIMIT: usize = 2;
    let items: Vec<i32> = (1..=10).collect();
    let counter = ActiveCounter::default();

    let result = for_each_parallel_with_error(
        &items,
        |index, _| {
            let now = counter.enter();
            let outcome = if now > LIMIT {
                Err(Error::invocation(index, format!("saw {} active callbacks", now)))
            } else {
                Ok(())
            };
            thread::sleep(Duration::from_micros(50));
            counter.leave();
            outcome
        },
        [with_limit(LIMIT as i64)],
    );

    assert!(result.is_ok(), "{:?}", result);
}

#[test]
fn test_non_positive_limit_means_unlimited() {
    // Every callback waits for all the others, which only finishes when
    // they all run at the same time
    for option in [with_limit(0), with_limit(-5)] {
        let items: Vec<usize> = (0..6).collect();
        let barrier = Barrier::new(items.len());
        let counter = ActiveCounter::default();

        for_each_parallel(
            &items,
            |_, _| {
                counter.enter();
                barrier.wait();
                counter.leave();
            },
            [option],
        );

        assert_eq!(counter.max(), items.len());
    }
}

#[test]
fn test_no_limit_runs_everything_together() {
    let items: Vec<usize> = (0..8).collect();
    let barrier = Barrier::new(items.len());

    for_each_parallel(&items, |_, _| {
        barrier.wait();
    }, []);
}

// =============================================================================
// Delivery
// =============================================================================

#[test]
fn test_every_element_once_with_its_index() {
    let items: Vec<String> = (0..50).map(|n| format!("item-{}", n)).collect();
    let seen = Mutex::new(Vec::new());

    for_each_parallel(
        &items,
        |index, item| seen.lock().push((index, item.clone())),
        [with_limit(4)],
    );

    let mut seen = seen.into_inner();
    seen.sort();
    let mut expected: Vec<(usize, String)> = items.iter().cloned().enumerate().collect();
    expected.sort();
    assert_eq!(seen, expected);
}

#[test]
fn test_collects_a_permutation() {
    let items = vec!["a", "b", "c"];
    let result = Mutex::new(Vec::new());

    for_each_parallel(&items, |_, item| result.lock().push(*item), []);

    let mut result = result.into_inner();
    assert_eq!(result.len(), 3);
    result.sort();
    assert_eq!(result, items);
}

#[test]
fn test_update_through_index() {
    let mut persons = people();

    for_each_parallel_mut(&mut persons, |_, p| p.name2 = p.name.clone(), []);

    for p in &persons {
        assert_eq!(p.name2, p.name);
    }
}

#[test]
fn test_update_shared_records() {
    // Elements that are themselves handles to shared state
    let persons: Vec<Mutex<Person>> = people().into_iter().map(Mutex::new).collect();

    for_each_parallel(&persons, |_, p| {
        let mut p = p.lock();
        p.name2 = p.name.clone();
    }, [with_limit(2)]);

    for p in &persons {
        let p = p.lock();
        assert_eq!(p.name2, p.name);
    }
}

#[test]
fn test_borrows_caller_state() {
    let lookup = vec![10, 20, 30];
    let indices = vec![2usize, 0, 1];
    let total = AtomicUsize::new(0);

    for_each_parallel(&indices, |_, i| {
        total.fetch_add(lookup[*i], Ordering::SeqCst);
    }, [with_limit(2)]);

    assert_eq!(total.into_inner(), 60);
}

#[test]
fn test_empty_input() {
    let items: Vec<u8> = Vec::new();
    let calls = AtomicUsize::new(0);

    for_each_parallel(&items, |_, _| {
        calls.fetch_add(1, Ordering::SeqCst);
    }, [with_limit(2)]);

    let result = for_each_parallel_with_error(&items, |_, _| {
        calls.fetch_add(1, Ordering::SeqCst);
        Err(Error::runtime("never called"))
    }, []);

    assert!(result.is_ok());
    assert_eq!(calls.into_inner(), 0);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_no_failures_no_error() {
    let items: Vec<i32> = (0..10).collect();
    let result: Result<(), Error> = for_each_parallel_with_error(&items, |_, _| Ok(()), [with_limit(3)]);
    assert!(result.is_ok());
}

#[test]
fn test_failures_wait_for_all_callbacks() {
    let items: Vec<u64> = (0..12).collect();
    let completed = AtomicUsize::new(0);

    let result = for_each_parallel_with_error(
        &items,
        |index, n| {
            // Slow successes keep running long after the fast failure
            if n % 4 == 0 {
                completed.fetch_add(1, Ordering::SeqCst);
                return Err(Error::invocation(index, "divisible by four"));
            }
            thread::sleep(Duration::from_millis(*n));
            completed.fetch_add(1, Ordering::SeqCst);
            Ok(())
        },
        [with_limit(3)],
    );

    assert!(result.is_err());
    assert_eq!(completed.into_inner(), items.len());
}

#[test]
fn test_error_comes_from_a_failing_element() {
    let items = vec![1, -1, 2, -2, 3];

    let err = for_each_parallel_with_error(
        &items,
        |index, n| {
            if *n < 0 {
                Err(Error::invocation(index, "negative"))
            } else {
                Ok(())
            }
        },
        [],
    )
    .unwrap_err();

    assert!(matches!(err.index(), Some(1) | Some(3)));
}

#[test]
fn test_foreign_error_type_is_returned_unchanged() {
    let items = vec!["1", "two", "3"];

    let err = for_each_parallel_with_error(
        &items,
        |_, s| {
            s.parse::<i32>()
                .map(|_| ())
                .map_err(|e| anyhow::anyhow!("bad number {:?}: {}", s, e))
        },
        [with_limit(1)],
    )
    .unwrap_err();

    assert!(err.to_string().starts_with("bad number \"two\""));
}
