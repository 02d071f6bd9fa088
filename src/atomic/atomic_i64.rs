/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 64-bit Signed Integer Operations
//!
//! Entry points for `AtomicI64` locations. Addition, exchange and
//! compare-exchange lower to native instructions; min, max and the bitwise
//! operations run through the RMW engine.
//!
//! # Author
//!
//! Haixing Hu

use std::sync::atomic::AtomicI64;

impl_integer_location!(AtomicI64, i64);

impl_entry_points! {
    AtomicI64, i64, I64;
    native_add => atomic_add_i64, ATOMIC_ADD_I64;
    cas [MaxOp] => atomic_max_i64, ATOMIC_MAX_I64;
    cas [MinOp] => atomic_min_i64, ATOMIC_MIN_I64;
    cas [AndOp] => atomic_and_i64, ATOMIC_AND_I64;
    cas [OrOp] => atomic_or_i64, ATOMIC_OR_I64;
    cas [XorOp] => atomic_xor_i64, ATOMIC_XOR_I64;
    exchange => atomic_exchange_i64, ATOMIC_EXCHANGE_I64;
    compare_exchange => atomic_compare_exchange_i64, ATOMIC_COMPARE_EXCHANGE_I64;
}
