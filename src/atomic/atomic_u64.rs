/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 64-bit Unsigned Integer Operations
//!
//! Entry points for `AtomicU64` locations. Only exchange and
//! compare-exchange lower to native instructions. Wrapping addition, min,
//! max and the bitwise operations run through the RMW engine.
//!
//! # Author
//!
//! Haixing Hu

use std::sync::atomic::AtomicU64;

impl_integer_location!(AtomicU64, u64);

impl_entry_points! {
    AtomicU64, u64, U64;
    cas [AddOp] => atomic_add_u64, ATOMIC_ADD_U64;
    cas [MaxOp] => atomic_max_u64, ATOMIC_MAX_U64;
    cas [MinOp] => atomic_min_u64, ATOMIC_MIN_U64;
    cas [AndOp] => atomic_and_u64, ATOMIC_AND_U64;
    cas [OrOp] => atomic_or_u64, ATOMIC_OR_U64;
    cas [XorOp] => atomic_xor_u64, ATOMIC_XOR_U64;
    exchange => atomic_exchange_u64, ATOMIC_EXCHANGE_U64;
    compare_exchange => atomic_compare_exchange_u64, ATOMIC_COMPARE_EXCHANGE_U64;
}
