/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! Sequential model properties: on a single thread every entry point must
//! behave exactly like reading the value, combining and writing it back.

use prism3_rmw::{
    atomic_add_f64,
    atomic_add_u64,
    atomic_max_f32,
    atomic_max_i32,
    atomic_min_i64,
    atomic_xor_u32,
    AddOp,
    AtomicF32,
    AtomicF64,
    Combine,
    MaxOp,
    MinOp,
};
use proptest::prelude::*;
use std::sync::atomic::{
    AtomicI32,
    AtomicI64,
    AtomicU32,
    AtomicU64,
    Ordering,
};

proptest! {
    #[test]
    fn prop_unsigned_add_matches_wrapping_add(a in any::<u64>(), b in any::<u64>()) {
        let atomic = AtomicU64::new(a);
        prop_assert_eq!(atomic_add_u64(&atomic, b), a);
        prop_assert_eq!(atomic.load(Ordering::Acquire), a.wrapping_add(b));
    }

    #[test]
    fn prop_signed_max_matches_ord(a in any::<i32>(), b in any::<i32>()) {
        let atomic = AtomicI32::new(a);
        prop_assert_eq!(atomic_max_i32(&atomic, b), a);
        prop_assert_eq!(atomic.load(Ordering::Acquire), a.max(b));
    }

    #[test]
    fn prop_signed_min_matches_ord(a in any::<i64>(), b in any::<i64>()) {
        let atomic = AtomicI64::new(a);
        prop_assert_eq!(atomic_min_i64(&atomic, b), a);
        prop_assert_eq!(atomic.load(Ordering::Acquire), a.min(b));
    }

    #[test]
    fn prop_xor_is_an_involution(a in any::<u32>(), b in any::<u32>()) {
        let atomic = AtomicU32::new(a);
        atomic_xor_u32(&atomic, b);
        atomic_xor_u32(&atomic, b);
        prop_assert_eq!(atomic.load(Ordering::Acquire), a);
    }

    #[test]
    fn prop_float_add_matches_ieee_add(a in -1e300f64..1e300, b in -1e300f64..1e300) {
        let atomic = AtomicF64::new(a);
        prop_assert_eq!(atomic_add_f64(&atomic, b).to_bits(), a.to_bits());
        prop_assert_eq!(atomic.load().to_bits(), (a + b).to_bits());
    }

    #[test]
    fn prop_float_max_installs_combine_result(a in any::<f32>(), b in any::<f32>()) {
        let atomic = AtomicF32::new(a);
        prop_assert_eq!(atomic_max_f32(&atomic, b).to_bits(), a.to_bits());
        prop_assert_eq!(atomic.load().to_bits(), MaxOp.combine(a, b).to_bits());
    }

    #[test]
    fn prop_combine_is_referentially_transparent(a in -1e30f32..1e30, b in -1e30f32..1e30) {
        prop_assert_eq!(AddOp.combine(a, b).to_bits(), AddOp.combine(a, b).to_bits());
        prop_assert_eq!(MinOp.combine(a, b).to_bits(), MinOp.combine(a, b).to_bits());
    }
}
