/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # RMW Engine
//!
//! Composes a compare-exchange capable location, a sameness policy and a
//! combine function into one atomic read-modify-write operation.
//!
//! # Algorithm
//!
//! 1. Read the current value as a first guess (`Relaxed`, may be stale).
//! 2. Compute `candidate = combine(current, operand)`.
//! 3. `previous = compare_exchange(location, current, candidate)`.
//! 4. If `previous` is the same as `current`, the exchange took place:
//!    return `previous`. Otherwise another writer got there first; retry
//!    from step 2 with `current = previous`.
//!
//! The loop is unbounded. Each failed attempt implies that some other write
//! to the location succeeded in between, so the system as a whole always
//! makes progress, but a single caller under heavy contention may retry
//! arbitrarily often. There is no backoff, no timeout and no error path.
//!
//! # Memory Ordering
//!
//! The first guess uses `Relaxed`. Every exchange attempt uses the location's
//! `compare_exchange`, which is `AcqRel` on success and `Acquire` on failure
//! for all locations of this crate.
//!
//! # Author
//!
//! Haixing Hu

use log::trace;

use crate::atomic::traits::{
    AtomicLocation,
    Combine,
    Sameness,
};

/// Result of one engine run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RmwOutcome<T> {
    /// The value stored at the location before the update.
    pub previous: T,
    /// The number of compare-exchange attempts, at least 1.
    pub attempts: u64,
}

/// Atomically applies `combine` to the value at `location` and `operand`,
/// returning the value stored before the update.
///
/// Uses the location's default sameness policy, which is bit-pattern
/// equality for every location type in this crate.
///
/// # Parameters
///
/// * `location` - The shared location to update.
/// * `operand` - The right-hand side of the combine function.
/// * `combine` - The combine function marker, e.g. [`MaxOp`].
///
/// # Returns
///
/// The value at `location` immediately before this call took effect.
///
/// # Example
///
/// ```rust
/// use prism3_rmw::{make_atomic, MaxOp};
/// use std::sync::atomic::{AtomicU32, Ordering};
///
/// let location = AtomicU32::new(10);
/// assert_eq!(make_atomic(&location, 25, MaxOp), 10);
/// assert_eq!(location.load(Ordering::Acquire), 25);
/// ```
///
/// [`MaxOp`]: crate::atomic::combine::MaxOp
#[inline]
pub fn make_atomic<L, C>(location: &L, operand: L::Value, combine: C) -> L::Value
where
    L: AtomicLocation + ?Sized,
    C: Combine<L::Value>,
{
    make_atomic_with::<L::Sameness, L, C>(location, operand, combine).previous
}

/// Runs the CAS loop with an explicit sameness policy.
///
/// `S` must agree with the comparison the location's `compare_exchange`
/// performs natively, otherwise the engine misjudges attempts: see
/// [`NumericSameness`] for what goes wrong with IEEE equality on floats.
///
/// # Returns
///
/// The previous value together with the number of attempts it took.
///
/// [`NumericSameness`]: crate::atomic::traits::NumericSameness
pub fn make_atomic_with<S, L, C>(
    location: &L,
    operand: L::Value,
    combine: C,
) -> RmwOutcome<L::Value>
where
    S: Sameness<L::Value>,
    L: AtomicLocation + ?Sized,
    C: Combine<L::Value>,
{
    let mut current = location.load_relaxed();
    let mut attempts: u64 = 0;
    loop {
        attempts = attempts.saturating_add(1);
        let candidate = combine.combine(current, operand);
        let previous = location.compare_exchange(current, candidate);
        if S::same(previous, current) {
            if attempts > 1 {
                trace!("Atomic {} succeeded after {} attempts", C::KIND, attempts);
            }
            return RmwOutcome { previous, attempts };
        }
        current = previous;
    }
}
