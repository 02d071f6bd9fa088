/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 32-bit Unsigned Integer Operations
//!
//! Entry points for `AtomicU32` locations. Only exchange and
//! compare-exchange lower to native instructions. Wrapping addition, min,
//! max and the bitwise operations run through the RMW engine.
//!
//! # Author
//!
//! Haixing Hu

use std::sync::atomic::AtomicU32;

impl_integer_location!(AtomicU32, u32);

impl_entry_points! {
    AtomicU32, u32, U32;
    cas [AddOp] => atomic_add_u32, ATOMIC_ADD_U32;
    cas [MaxOp] => atomic_max_u32, ATOMIC_MAX_U32;
    cas [MinOp] => atomic_min_u32, ATOMIC_MIN_U32;
    cas [AndOp] => atomic_and_u32, ATOMIC_AND_U32;
    cas [OrOp] => atomic_or_u32, ATOMIC_OR_U32;
    cas [XorOp] => atomic_xor_u32, ATOMIC_XOR_U32;
    exchange => atomic_exchange_u32, ATOMIC_EXCHANGE_U32;
    compare_exchange => atomic_compare_exchange_u32, ATOMIC_COMPARE_EXCHANGE_U32;
}
