/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Combine Functions
//!
//! One zero-sized marker per RMW operation. Each marker implements
//! [`Combine<T>`] for the scalar types the operation is defined on, so the
//! marker doubles as the static operation descriptor of a call site.
//!
//! # Min/Max Semantics
//!
//! `MaxOp` keeps `current` only if `current > operand`, otherwise it takes
//! `operand`; `MinOp` mirrors this with `<`. Ties therefore resolve to the
//! operand, which is indistinguishable for integers. For floats every
//! comparison involving NaN is false, so:
//!
//! - a NaN operand is always installed;
//! - a NaN current value is always replaced by the operand.
//!
//! # Author
//!
//! Haixing Hu

use std::cmp;

use crate::atomic::intrinsic::OperationKind;
use crate::atomic::traits::Combine;

/// Addition. Wrapping for integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddOp;

/// Maximum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxOp;

/// Minimum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinOp;

/// Bitwise AND.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AndOp;

/// Bitwise OR.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrOp;

/// Bitwise XOR.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XorOp;

macro_rules! impl_combine {
    ($op:ident, $kind:ident, |$current:ident, $operand:ident| $body:expr; $($value_type:ty),+) => {
        $(
            impl Combine<$value_type> for $op {
                const KIND: OperationKind = OperationKind::$kind;

                #[inline]
                fn combine(self, $current: $value_type, $operand: $value_type) -> $value_type {
                    $body
                }
            }
        )+
    };
}

impl_combine!(AddOp, Add, |current, operand| current.wrapping_add(operand); i32, i64, u32, u64);
impl_combine!(AddOp, Add, |current, operand| current + operand; f32, f64);

impl_combine!(MaxOp, Max, |current, operand| cmp::max(current, operand); i32, i64, u32, u64);
impl_combine!(MaxOp, Max, |current, operand| if current > operand { current } else { operand }; f32, f64);

impl_combine!(MinOp, Min, |current, operand| cmp::min(current, operand); i32, i64, u32, u64);
impl_combine!(MinOp, Min, |current, operand| if current < operand { current } else { operand }; f32, f64);

impl_combine!(AndOp, And, |current, operand| current & operand; i32, i64, u32, u64);
impl_combine!(OrOp, Or, |current, operand| current | operand; i32, i64, u32, u64);
impl_combine!(XorOp, Xor, |current, operand| current ^ operand; i32, i64, u32, u64);
