/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic RMW Operations
//!
//! Atomic read-modify-write operations emulated with a compare-exchange
//! retry loop, for (operation, type) pairs that have no native atomic
//! instruction.
//!
//! # Features
//!
//! - A single generic engine, [`make_atomic`], parameterized by a location,
//!   a sameness policy and a combine function
//! - One typed entry point per (operation, type) pair
//! - A static intrinsic descriptor per entry point, queryable through
//!   [`intrinsic`]
//! - Float locations, [`AtomicF32`] and [`AtomicF64`], with bit-exact
//!   compare-exchange
//!
//! # Author
//!
//! Haixing Hu

#[macro_use]
mod atomic_rmw_macro;

mod atomic_f32;
mod atomic_f64;
mod atomic_i32;
mod atomic_i64;
mod atomic_u32;
mod atomic_u64;
pub mod combine;
mod engine;
mod error;
pub mod intrinsic;
mod traits;

pub use atomic_f32::{
    atomic_add_f32,
    atomic_compare_exchange_f32,
    atomic_exchange_f32,
    atomic_max_f32,
    atomic_min_f32,
    AtomicF32,
    ATOMIC_ADD_F32,
    ATOMIC_COMPARE_EXCHANGE_F32,
    ATOMIC_EXCHANGE_F32,
    ATOMIC_MAX_F32,
    ATOMIC_MIN_F32,
};
pub use atomic_f64::{
    atomic_add_f64,
    atomic_compare_exchange_f64,
    atomic_exchange_f64,
    atomic_max_f64,
    atomic_min_f64,
    AtomicF64,
    ATOMIC_ADD_F64,
    ATOMIC_COMPARE_EXCHANGE_F64,
    ATOMIC_EXCHANGE_F64,
    ATOMIC_MAX_F64,
    ATOMIC_MIN_F64,
};
pub use atomic_i32::{
    atomic_add_i32,
    atomic_and_i32,
    atomic_compare_exchange_i32,
    atomic_exchange_i32,
    atomic_max_i32,
    atomic_min_i32,
    atomic_or_i32,
    atomic_xor_i32,
    ATOMIC_ADD_I32,
    ATOMIC_AND_I32,
    ATOMIC_COMPARE_EXCHANGE_I32,
    ATOMIC_EXCHANGE_I32,
    ATOMIC_MAX_I32,
    ATOMIC_MIN_I32,
    ATOMIC_OR_I32,
    ATOMIC_XOR_I32,
};
pub use atomic_i64::{
    atomic_add_i64,
    atomic_and_i64,
    atomic_compare_exchange_i64,
    atomic_exchange_i64,
    atomic_max_i64,
    atomic_min_i64,
    atomic_or_i64,
    atomic_xor_i64,
    ATOMIC_ADD_I64,
    ATOMIC_AND_I64,
    ATOMIC_COMPARE_EXCHANGE_I64,
    ATOMIC_EXCHANGE_I64,
    ATOMIC_MAX_I64,
    ATOMIC_MIN_I64,
    ATOMIC_OR_I64,
    ATOMIC_XOR_I64,
};
pub use atomic_u32::{
    atomic_add_u32,
    atomic_and_u32,
    atomic_compare_exchange_u32,
    atomic_exchange_u32,
    atomic_max_u32,
    atomic_min_u32,
    atomic_or_u32,
    atomic_xor_u32,
    ATOMIC_ADD_U32,
    ATOMIC_AND_U32,
    ATOMIC_COMPARE_EXCHANGE_U32,
    ATOMIC_EXCHANGE_U32,
    ATOMIC_MAX_U32,
    ATOMIC_MIN_U32,
    ATOMIC_OR_U32,
    ATOMIC_XOR_U32,
};
pub use atomic_u64::{
    atomic_add_u64,
    atomic_and_u64,
    atomic_compare_exchange_u64,
    atomic_exchange_u64,
    atomic_max_u64,
    atomic_min_u64,
    atomic_or_u64,
    atomic_xor_u64,
    ATOMIC_ADD_U64,
    ATOMIC_AND_U64,
    ATOMIC_COMPARE_EXCHANGE_U64,
    ATOMIC_EXCHANGE_U64,
    ATOMIC_MAX_U64,
    ATOMIC_MIN_U64,
    ATOMIC_OR_U64,
    ATOMIC_XOR_U64,
};
pub use combine::{
    AddOp,
    AndOp,
    MaxOp,
    MinOp,
    OrOp,
    XorOp,
};
pub use engine::{
    make_atomic,
    make_atomic_with,
    RmwOutcome,
};
pub use error::IntrinsicError;
pub use intrinsic::{
    IntrinsicDescriptor,
    IntrinsicTag,
    Lowering,
    OperationKind,
    ScalarKind,
};
pub use traits::{
    AtomicLocation,
    BitPattern,
    BitwiseSameness,
    Combine,
    NumericSameness,
    Sameness,
};
