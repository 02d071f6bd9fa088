/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 32-bit Signed Integer Operations
//!
//! Entry points for `AtomicI32` locations. Addition, exchange and
//! compare-exchange lower to native instructions; min, max and the bitwise
//! operations run through the RMW engine.
//!
//! # Author
//!
//! Haixing Hu

use std::sync::atomic::AtomicI32;

impl_integer_location!(AtomicI32, i32);

impl_entry_points! {
    AtomicI32, i32, I32;
    native_add => atomic_add_i32, ATOMIC_ADD_I32;
    cas [MaxOp] => atomic_max_i32, ATOMIC_MAX_I32;
    cas [MinOp] => atomic_min_i32, ATOMIC_MIN_I32;
    cas [AndOp] => atomic_and_i32, ATOMIC_AND_I32;
    cas [OrOp] => atomic_or_i32, ATOMIC_OR_I32;
    cas [XorOp] => atomic_xor_i32, ATOMIC_XOR_I32;
    exchange => atomic_exchange_i32, ATOMIC_EXCHANGE_I32;
    compare_exchange => atomic_compare_exchange_i32, ATOMIC_COMPARE_EXCHANGE_I32;
}
