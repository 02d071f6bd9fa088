/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_rmw::{
    atomic_add_f64,
    atomic_add_i32,
    atomic_add_u32,
    atomic_add_u64,
    atomic_compare_exchange_u32,
    atomic_exchange_u32,
    atomic_max_f32,
    atomic_max_i64,
    atomic_min_f32,
    atomic_min_u32,
    atomic_or_u64,
    make_atomic_with,
    AtomicF32,
    AtomicF64,
    BitwiseSameness,
    MaxOp,
    MinOp,
};
use std::sync::atomic::{
    AtomicI32,
    AtomicI64,
    AtomicU32,
    AtomicU64,
    AtomicUsize,
    Ordering,
};
use std::sync::{
    Arc,
    Barrier,
};
use std::thread;

const NUM_THREADS: usize = 64;
const ITERATIONS_PER_THREAD: usize = 1000;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Runs `task(rank)` on `NUM_THREADS` threads released together by a
/// barrier, and collects the results in rank order.
fn run_concurrently<T, F>(task: F) -> Vec<T>
where
    T: Send + 'static,
    F: Fn(usize) -> T + Send + Sync + 'static,
{
    init_logger();
    let task = Arc::new(task);
    let barrier = Arc::new(Barrier::new(NUM_THREADS));
    let mut handles = vec![];

    for rank in 0..NUM_THREADS {
        let task = task.clone();
        let barrier = barrier.clone();
        let handle = thread::spawn(move || {
            barrier.wait();
            (*task)(rank)
        });
        handles.push(handle);
    }

    handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect()
}

// Test that concurrent unsigned adds of each rank conserve the sum
#[test]
fn test_concurrent_rank_add() {
    let atomic = Arc::new(AtomicU32::new(0));
    let location = atomic.clone();
    run_concurrently(move |rank| {
        atomic_add_u32(&location, rank as u32 + 1);
    });

    assert_eq!(atomic.load(Ordering::Acquire), 2080);
}

// Test that emulated and native adds conserve every increment
#[test]
fn test_concurrent_increment() {
    let emulated = Arc::new(AtomicU64::new(0));
    let native = Arc::new(AtomicI32::new(0));
    let (e, n) = (emulated.clone(), native.clone());
    run_concurrently(move |_| {
        for _ in 0..ITERATIONS_PER_THREAD {
            atomic_add_u64(&e, 1);
            atomic_add_i32(&n, 1);
        }
    });

    let expected = NUM_THREADS * ITERATIONS_PER_THREAD;
    assert_eq!(emulated.load(Ordering::Acquire), expected as u64);
    assert_eq!(native.load(Ordering::Acquire), expected as i32);
}

// Test that every returned old value is distinct, i.e. each add took effect
// exactly once in some total order
#[test]
fn test_concurrent_add_returns_distinct_values() {
    let atomic = Arc::new(AtomicU32::new(0));
    let location = atomic.clone();
    let mut olds = run_concurrently(move |_| atomic_add_u32(&location, 1));

    olds.sort_unstable();
    let expected: Vec<u32> = (0..NUM_THREADS as u32).collect();
    assert_eq!(olds, expected);
}

// Test that concurrent min and max converge regardless of interleaving
#[test]
fn test_concurrent_min_max() {
    let min = Arc::new(AtomicU32::new(NUM_THREADS as u32));
    let max = Arc::new(AtomicI64::new(0));
    let (lo, hi) = (min.clone(), max.clone());
    run_concurrently(move |rank| {
        atomic_min_u32(&lo, rank as u32);
        atomic_max_i64(&hi, rank as i64);
    });

    assert_eq!(min.load(Ordering::Acquire), 0);
    assert_eq!(max.load(Ordering::Acquire), 63);
}

// Test that concurrent float min and max converge regardless of interleaving
#[test]
fn test_concurrent_float_min_max() {
    let min = Arc::new(AtomicF32::new(f32::INFINITY));
    let max = Arc::new(AtomicF32::new(f32::NEG_INFINITY));
    let (lo, hi) = (min.clone(), max.clone());
    run_concurrently(move |rank| {
        atomic_min_f32(&lo, rank as f32);
        atomic_max_f32(&hi, rank as f32);
    });

    assert_eq!(min.load(), 0.0);
    assert_eq!(max.load(), 63.0);
}

// Test that only the caller whose comparand matches succeeds
#[test]
fn test_concurrent_compare_exchange() {
    let atomic = Arc::new(AtomicU32::new(0));
    let location = atomic.clone();
    let olds = run_concurrently(move |rank| {
        let rank = rank as u32;
        atomic_compare_exchange_u32(&location, rank, rank + 100)
    });

    let winners: Vec<usize> = olds
        .iter()
        .enumerate()
        .filter(|(rank, old)| **old == *rank as u32)
        .map(|(rank, _)| rank)
        .collect();
    assert_eq!(winners, vec![0]);
    assert!(olds.iter().all(|old| *old == 0 || *old == 100));
    assert_eq!(atomic.load(Ordering::Acquire), 100);
}

// Test that exchanges hand every written value to exactly one observer
#[test]
fn test_concurrent_exchange_chain() {
    let atomic = Arc::new(AtomicU32::new(0));
    let location = atomic.clone();
    let olds = run_concurrently(move |rank| atomic_exchange_u32(&location, rank as u32 + 1));

    let observed: u32 = olds.iter().sum::<u32>() + atomic.load(Ordering::Acquire);
    assert_eq!(observed, 2080);
}

// Test concurrent bitwise or: every rank sets its own bit
#[test]
fn test_concurrent_or() {
    let atomic = Arc::new(AtomicU64::new(0));
    let location = atomic.clone();
    run_concurrently(move |rank| {
        atomic_or_u64(&location, 1 << rank);
    });

    assert_eq!(atomic.load(Ordering::Acquire), u64::MAX);
}

// Test concurrent floating-point additions of exactly representable values
#[test]
fn test_concurrent_float_add() {
    let sum = Arc::new(AtomicF64::new(0.0));
    let location = sum.clone();
    run_concurrently(move |_| {
        for _ in 0..100 {
            atomic_add_f64(&location, 0.5);
        }
    });

    assert_eq!(sum.load(), (NUM_THREADS * 100) as f64 * 0.5);
}

// Test that max/min on a NaN-seeded location terminate within a bounded
// number of attempts: each failed attempt is caused by another caller's
// successful write, so no caller needs more than NUM_THREADS attempts.
#[test]
fn test_concurrent_nan_seed_terminates() {
    let max = Arc::new(AtomicF32::new(f32::NAN));
    let min = Arc::new(AtomicF32::new(f32::NAN));
    let worst = Arc::new(AtomicUsize::new(0));
    let (hi, lo, w) = (max.clone(), min.clone(), worst.clone());
    run_concurrently(move |rank| {
        let up = make_atomic_with::<BitwiseSameness, _, _>(&*hi, rank as f32, MaxOp);
        let down = make_atomic_with::<BitwiseSameness, _, _>(&*lo, rank as f32, MinOp);
        w.fetch_max(up.attempts.max(down.attempts) as usize, Ordering::Relaxed);
    });

    assert!(worst.load(Ordering::Relaxed) <= NUM_THREADS);
    assert_eq!(max.load(), 63.0);
    assert_eq!(min.load(), 0.0);
}
