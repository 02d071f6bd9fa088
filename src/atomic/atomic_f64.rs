/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 64-bit Floating Point
//!
//! Provides the `AtomicF64` location type and its entry points. The location
//! is implemented using bit conversion with `AtomicU64`, so exchange and
//! compare-exchange are native on the bit pattern, while addition, min and
//! max run through the RMW engine.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use crate::atomic::traits::{
    AtomicLocation,
    BitwiseSameness,
};

/// Atomic 64-bit floating point location.
///
/// The double precision counterpart of [`AtomicF32`], stored as the bit
/// pattern in an `AtomicU64`. Loads use `Acquire`, stores use `Release` and
/// read-modify-write operations use `AcqRel` on success and `Acquire` on
/// failure. `compare_and_exchange` compares bit patterns.
///
/// [`AtomicF32`]: crate::atomic::AtomicF32
///
/// # Author
///
/// Haixing Hu
#[repr(transparent)]
pub struct AtomicF64 {
    inner: AtomicU64,
}

impl AtomicF64 {
    /// Creates a new atomic floating point location.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial value.
    #[inline]
    pub fn new(value: f64) -> Self {
        Self {
            inner: AtomicU64::new(value.to_bits()),
        }
    }

    /// Gets the current value, using `Acquire` ordering.
    #[inline]
    pub fn load(&self) -> f64 {
        f64::from_bits(self.inner.load(Ordering::Acquire))
    }

    /// Sets a new value.
    ///
    /// Uses `Release` ordering. A plain store racing with RMW operations on
    /// the same location breaks their linearizability; use
    /// [`swap`](Self::swap) for concurrent writes.
    #[inline]
    pub fn store(&self, value: f64) {
        self.inner.store(value.to_bits(), Ordering::Release);
    }

    /// Swaps the current value with a new value, returning the old value.
    ///
    /// Uses `AcqRel` ordering.
    #[inline]
    pub fn swap(&self, value: f64) -> f64 {
        f64::from_bits(self.inner.swap(value.to_bits(), Ordering::AcqRel))
    }

    /// Compares and exchanges the value atomically, returning the previous
    /// value.
    ///
    /// If the stored bit pattern equals that of `current`, sets it to `new`.
    /// Returns the value present before the operation either way.
    ///
    /// Uses `AcqRel` ordering on success and `Acquire` ordering on failure.
    #[inline]
    pub fn compare_and_exchange(&self, current: f64, new: f64) -> f64 {
        match self.inner.compare_exchange(
            current.to_bits(),
            new.to_bits(),
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            Ok(prev_bits) => f64::from_bits(prev_bits),
            Err(actual_bits) => f64::from_bits(actual_bits),
        }
    }

    /// Consumes the location and returns the contained value.
    #[inline]
    pub fn into_inner(self) -> f64 {
        f64::from_bits(self.inner.into_inner())
    }

    /// Gets a reference to the underlying standard library atomic type.
    ///
    /// Remember to use `f64::to_bits()` and `f64::from_bits()` for
    /// conversions.
    #[inline]
    pub fn inner(&self) -> &AtomicU64 {
        &self.inner
    }
}

impl AtomicLocation for AtomicF64 {
    type Value = f64;
    type Sameness = BitwiseSameness;

    #[inline]
    fn load_relaxed(&self) -> f64 {
        f64::from_bits(self.inner.load(Ordering::Relaxed))
    }

    #[inline]
    fn compare_exchange(&self, compare: f64, value: f64) -> f64 {
        self.compare_and_exchange(compare, value)
    }

    #[inline]
    fn exchange(&self, value: f64) -> f64 {
        self.swap(value)
    }
}

impl Default for AtomicF64 {
    #[inline]
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl From<f64> for AtomicF64 {
    #[inline]
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for AtomicF64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicF64")
            .field("value", &self.load())
            .finish()
    }
}

impl fmt::Display for AtomicF64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.load())
    }
}

impl_entry_points! {
    AtomicF64, f64, F64;
    cas [AddOp] => atomic_add_f64, ATOMIC_ADD_F64;
    cas [MaxOp] => atomic_max_f64, ATOMIC_MAX_F64;
    cas [MinOp] => atomic_min_f64, ATOMIC_MIN_F64;
    exchange => atomic_exchange_f64, ATOMIC_EXCHANGE_F64;
    compare_exchange => atomic_compare_exchange_f64, ATOMIC_COMPARE_EXCHANGE_F64;
}
