/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_rmw::{
    make_atomic,
    make_atomic_with,
    AddOp,
    AtomicF32,
    AtomicLocation,
    BitwiseSameness,
    NumericSameness,
    OrOp,
    Sameness,
};
use std::cell::Cell;
use std::sync::atomic::{
    AtomicU64,
    AtomicUsize,
    Ordering,
};

/// Float location that lets a competing writer store `-0.0` right before
/// the first exchange attempt.
struct SignedZeroRace {
    inner: AtomicF32,
    raced: AtomicUsize,
}

impl SignedZeroRace {
    fn new() -> Self {
        Self {
            inner: AtomicF32::new(0.0),
            raced: AtomicUsize::new(0),
        }
    }
}

impl AtomicLocation for SignedZeroRace {
    type Value = f32;
    type Sameness = BitwiseSameness;

    fn load_relaxed(&self) -> f32 {
        self.inner.load_relaxed()
    }

    fn compare_exchange(&self, compare: f32, value: f32) -> f32 {
        if self.raced.fetch_add(1, Ordering::Relaxed) == 0 {
            self.inner.swap(-0.0);
        }
        self.inner.compare_and_exchange(compare, value)
    }

    fn exchange(&self, value: f32) -> f32 {
        self.inner.swap(value)
    }
}

/// Sameness policy that counts how often it is consulted.
struct CountingSameness;

thread_local! {
    static SAMENESS_CALLS: Cell<usize> = Cell::new(0);
}

impl Sameness<u64> for CountingSameness {
    fn same(a: u64, b: u64) -> bool {
        SAMENESS_CALLS.with(|calls| calls.set(calls.get() + 1));
        a == b
    }
}

#[test]
fn test_make_atomic_returns_previous_value() {
    let atomic = AtomicU64::new(0b0101);
    assert_eq!(make_atomic(&atomic, 0b1000, OrOp), 0b0101);
    assert_eq!(atomic.load(Ordering::Acquire), 0b1101);
}

#[test]
fn test_custom_sameness_is_consulted_once_per_attempt() {
    SAMENESS_CALLS.with(|calls| calls.set(0));
    let atomic = AtomicU64::new(1);
    let outcome = make_atomic_with::<CountingSameness, _, _>(&atomic, 2, AddOp);
    assert_eq!(outcome.previous, 1);
    assert_eq!(outcome.attempts, 1);
    assert_eq!(SAMENESS_CALLS.with(Cell::get), 1);
}

// Bitwise sameness notices that -0.0 replaced 0.0 and retries on top of it
#[test]
fn test_bitwise_sameness_retries_after_signed_zero_race() {
    let location = SignedZeroRace::new();
    let outcome = make_atomic_with::<BitwiseSameness, _, _>(&location, 1.0, AddOp);
    assert_eq!(outcome.previous.to_bits(), (-0.0f32).to_bits());
    assert_eq!(outcome.attempts, 2);
    assert_eq!(location.inner.load(), 1.0);
}

// IEEE sameness takes the failed exchange for a success: the add is lost
#[test]
fn test_numeric_sameness_loses_update_after_signed_zero_race() {
    let location = SignedZeroRace::new();
    let outcome = make_atomic_with::<NumericSameness, _, _>(&location, 1.0, AddOp);
    assert_eq!(outcome.attempts, 1);
    assert_eq!(location.inner.load().to_bits(), (-0.0f32).to_bits());
}

#[test]
fn test_default_sameness_is_bitwise() {
    let location = SignedZeroRace::new();
    assert_eq!(make_atomic(&location, 1.0, AddOp).to_bits(), (-0.0f32).to_bits());
    assert_eq!(location.inner.load(), 1.0);
}
