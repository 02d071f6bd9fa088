/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 32-bit Floating Point
//!
//! Provides the `AtomicF32` location type and its entry points. The location
//! is implemented using bit conversion with `AtomicU32`, so exchange and
//! compare-exchange are native on the bit pattern, while addition, min and
//! max run through the RMW engine.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::atomic::AtomicU32;
use std::sync::atomic::Ordering;

use crate::atomic::traits::{
    AtomicLocation,
    BitwiseSameness,
};

/// Atomic 32-bit floating point location.
///
/// Implemented using `AtomicU32` with `f32::to_bits()` and
/// `f32::from_bits()` conversions. This preserves bit patterns exactly,
/// including special values like NaN and infinity.
///
/// # Memory Ordering Strategy
///
/// - **Read operations** (`load`): Use `Acquire` ordering.
/// - **Write operations** (`store`): Use `Release` ordering.
/// - **Read-Modify-Write operations** (`swap`, `compare_and_exchange`):
///   Use `AcqRel` on success and `Acquire` on failure.
///
/// # Comparison Semantics
///
/// `compare_and_exchange` compares bit patterns, not IEEE values. A location
/// holding NaN can be exchanged by passing that same NaN, and `0.0` does not
/// match a location holding `-0.0`.
///
/// # Example
///
/// ```rust
/// use prism3_rmw::{atomic_add_f32, AtomicF32};
/// use std::sync::Arc;
/// use std::thread;
///
/// let sum = Arc::new(AtomicF32::new(0.0));
/// let mut handles = vec![];
///
/// for _ in 0..10 {
///     let sum = sum.clone();
///     let handle = thread::spawn(move || {
///         for _ in 0..100 {
///             atomic_add_f32(&sum, 0.5);
///         }
///     });
///     handles.push(handle);
/// }
///
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(sum.load(), 500.0);
/// ```
///
/// # Author
///
/// Haixing Hu
#[repr(transparent)]
pub struct AtomicF32 {
    inner: AtomicU32,
}

impl AtomicF32 {
    /// Creates a new atomic floating point location.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial value.
    #[inline]
    pub fn new(value: f32) -> Self {
        Self {
            inner: AtomicU32::new(value.to_bits()),
        }
    }

    /// Gets the current value.
    ///
    /// # Memory Ordering
    ///
    /// Uses `Acquire` ordering on the underlying `AtomicU32`. This ensures
    /// that all writes from other threads that happened before a `Release`
    /// store are visible after this load.
    #[inline]
    pub fn load(&self) -> f32 {
        f32::from_bits(self.inner.load(Ordering::Acquire))
    }

    /// Sets a new value.
    ///
    /// Uses `Release` ordering. A plain store racing with RMW operations on
    /// the same location breaks their linearizability; use
    /// [`swap`](Self::swap) for concurrent writes.
    #[inline]
    pub fn store(&self, value: f32) {
        self.inner.store(value.to_bits(), Ordering::Release);
    }

    /// Swaps the current value with a new value, returning the old value.
    ///
    /// Uses `AcqRel` ordering.
    #[inline]
    pub fn swap(&self, value: f32) -> f32 {
        f32::from_bits(self.inner.swap(value.to_bits(), Ordering::AcqRel))
    }

    /// Compares and exchanges the value atomically, returning the previous
    /// value.
    ///
    /// If the stored bit pattern equals that of `current`, sets it to `new`.
    /// Returns the value present before the operation either way.
    ///
    /// Uses `AcqRel` ordering on success and `Acquire` ordering on failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_rmw::AtomicF32;
    ///
    /// let atomic = AtomicF32::new(f32::NAN);
    /// let prev = atomic.compare_and_exchange(f32::NAN, 2.0);
    /// assert!(prev.is_nan());
    /// assert_eq!(atomic.load(), 2.0);
    /// ```
    #[inline]
    pub fn compare_and_exchange(&self, current: f32, new: f32) -> f32 {
        match self.inner.compare_exchange(
            current.to_bits(),
            new.to_bits(),
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            Ok(prev_bits) => f32::from_bits(prev_bits),
            Err(actual_bits) => f32::from_bits(actual_bits),
        }
    }

    /// Consumes the location and returns the contained value.
    #[inline]
    pub fn into_inner(self) -> f32 {
        f32::from_bits(self.inner.into_inner())
    }

    /// Gets a reference to the underlying standard library atomic type.
    ///
    /// Remember to use `f32::to_bits()` and `f32::from_bits()` for
    /// conversions.
    #[inline]
    pub fn inner(&self) -> &AtomicU32 {
        &self.inner
    }
}

impl AtomicLocation for AtomicF32 {
    type Value = f32;
    type Sameness = BitwiseSameness;

    #[inline]
    fn load_relaxed(&self) -> f32 {
        f32::from_bits(self.inner.load(Ordering::Relaxed))
    }

    #[inline]
    fn compare_exchange(&self, compare: f32, value: f32) -> f32 {
        self.compare_and_exchange(compare, value)
    }

    #[inline]
    fn exchange(&self, value: f32) -> f32 {
        self.swap(value)
    }
}

impl Default for AtomicF32 {
    #[inline]
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl From<f32> for AtomicF32 {
    #[inline]
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for AtomicF32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicF32")
            .field("value", &self.load())
            .finish()
    }
}

impl fmt::Display for AtomicF32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.load())
    }
}

impl_entry_points! {
    AtomicF32, f32, F32;
    cas [AddOp] => atomic_add_f32, ATOMIC_ADD_F32;
    cas [MaxOp] => atomic_max_f32, ATOMIC_MAX_F32;
    cas [MinOp] => atomic_min_f32, ATOMIC_MIN_F32;
    exchange => atomic_exchange_f32, ATOMIC_EXCHANGE_F32;
    compare_exchange => atomic_compare_exchange_f32, ATOMIC_COMPARE_EXCHANGE_F32;
}
