/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Capability Traits
//!
//! Defines the three capabilities the RMW engine is built from: the
//! compare-exchange capability of a memory location, the sameness test used
//! to judge whether a compare-exchange attempt succeeded, and the combine
//! function of one RMW operation.
//!
//! # Author
//!
//! Haixing Hu

use crate::atomic::intrinsic::OperationKind;

/// Compare-exchange capability of a shared memory location.
///
/// A location is a cell of a fixed-width scalar type that may be mutated
/// concurrently by any number of threads. The RMW engine only borrows it for
/// the duration of one call.
///
/// # Linearizability
///
/// The engine is linearizable with respect to every other operation on the
/// same location as long as all writers go through `compare_exchange` or
/// `exchange` (or a native RMW instruction). A plain unprotected store racing
/// with an RMW call voids that guarantee.
///
/// # Author
///
/// Haixing Hu
pub trait AtomicLocation: Sync {
    /// The scalar type stored in the location.
    type Value: Copy;

    /// The sameness policy the engine uses by default for this location.
    type Sameness: Sameness<Self::Value>;

    /// Reads the current value as a first guess for a CAS loop.
    ///
    /// Uses `Relaxed` ordering: the value need not be fresh, a stale guess
    /// only costs one extra attempt.
    fn load_relaxed(&self) -> Self::Value;

    /// Compares the stored value to `compare` and, if they are bitwise
    /// identical, replaces it with `value`.
    ///
    /// Uses `AcqRel` ordering on success and `Acquire` ordering on failure.
    ///
    /// # Parameters
    ///
    /// * `compare` - The expected current value.
    /// * `value` - The value to install if the comparison holds.
    ///
    /// # Returns
    ///
    /// The value present at the instant of the attempt, whether or not the
    /// exchange took place.
    fn compare_exchange(&self, compare: Self::Value, value: Self::Value) -> Self::Value;

    /// Unconditionally replaces the stored value, returning the old one.
    ///
    /// Uses `AcqRel` ordering.
    fn exchange(&self, value: Self::Value) -> Self::Value;
}

/// Sameness capability: decides whether two values should be treated as
/// the same when judging the outcome of a compare-exchange attempt.
///
/// The judgement must agree with the comparison the location's
/// `compare_exchange` performs natively, which is bit-pattern equality for
/// every location in this crate. See [`BitwiseSameness`] and
/// [`NumericSameness`].
pub trait Sameness<T> {
    /// Returns `true` if `a` and `b` are the same value.
    fn same(a: T, b: T) -> bool;
}

/// Sameness by exact bit pattern.
///
/// Total and safe for every producible value, including NaN payloads and
/// signed zeros. This is the default policy of every location type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitwiseSameness;

/// Sameness by `PartialEq`.
///
/// Coincides with [`BitwiseSameness`] for integers. For floats it is IEEE
/// numeric equality, which disagrees with the bitwise compare-exchange in
/// two ways:
///
/// - `NaN != NaN`: a successful exchange on a NaN-valued location is
///   reported as a failure, so the engine applies the combine function a
///   second time and returns a value that was never the pre-update value.
/// - `-0.0 == 0.0`: a failed exchange is reported as a success, so an
///   update is lost.
///
/// It is kept to make those hazards observable; no location uses it by
/// default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumericSameness;

impl<T: PartialEq> Sameness<T> for NumericSameness {
    #[inline]
    fn same(a: T, b: T) -> bool {
        a == b
    }
}

/// Scalar types whose bit pattern can be compared exactly.
pub trait BitPattern: Copy {
    /// The unsigned integer holding the raw bits.
    type Bits: Eq;

    /// Returns the raw bit pattern.
    fn bit_pattern(self) -> Self::Bits;
}

impl<T: BitPattern> Sameness<T> for BitwiseSameness {
    #[inline]
    fn same(a: T, b: T) -> bool {
        a.bit_pattern() == b.bit_pattern()
    }
}

macro_rules! impl_bit_pattern {
    ($($value_type:ty => $bits:ty, $to_bits:expr;)*) => {
        $(
            impl BitPattern for $value_type {
                type Bits = $bits;

                #[inline]
                fn bit_pattern(self) -> $bits {
                    $to_bits(self)
                }
            }
        )*
    };
}

impl_bit_pattern! {
    i32 => i32, core::convert::identity;
    i64 => i64, core::convert::identity;
    u32 => u32, core::convert::identity;
    u64 => u64, core::convert::identity;
    f32 => u32, f32::to_bits;
    f64 => u64, f64::to_bits;
}

/// Combine function of one RMW operation.
///
/// Implementors are stateless markers. `combine` must be pure: the engine
/// may call it speculatively any number of times and discard every result
/// but the one it manages to install.
pub trait Combine<T>: Copy {
    /// The operation kind this combine function implements.
    const KIND: OperationKind;

    /// Computes the value to install from the current value and the operand.
    fn combine(self, current: T, operand: T) -> T;
}
