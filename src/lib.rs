/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # prism3-rust-rmw
//!
//! Portable atomic read-modify-write (RMW) operations for targets that only
//! offer an atomic compare-and-exchange for a given scalar type.
//!
//! The crate is the substrate a kernel compiler lowers user-level atomics
//! onto when a backend has no native instruction for the requested
//! (operation, type) combination. Every entry point is a correct portable
//! reference lowering; each one also carries a static [`IntrinsicDescriptor`]
//! so that a compiler can recognize the call and substitute a native
//! instruction instead.
//!
//! ## Components
//!
//! - **Capabilities**: [`AtomicLocation`] (compare-exchange), [`Sameness`]
//!   and [`Combine`].
//! - **Engine**: [`make_atomic`], an optimistic CAS retry loop.
//! - **Entry points**: `atomic_<op>_<type>` functions for `i32`, `i64`,
//!   `u32`, `u64`, `f32` and `f64`.
//! - **Intrinsic metadata**: [`IntrinsicTag`], [`IntrinsicDescriptor`] and
//!   the registry in [`atomic::intrinsic`].
//!
//! ## Example
//!
//! ```rust
//! use prism3_rmw::{atomic_add_u32, atomic_max_f32, AtomicF32};
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use std::sync::Arc;
//! use std::thread;
//!
//! let hits = Arc::new(AtomicU32::new(0));
//! let peak = Arc::new(AtomicF32::new(f32::NEG_INFINITY));
//! let mut handles = vec![];
//!
//! for i in 0..8 {
//!     let hits = hits.clone();
//!     let peak = peak.clone();
//!     handles.push(thread::spawn(move || {
//!         atomic_add_u32(&hits, 1);
//!         atomic_max_f32(&peak, i as f32);
//!     }));
//! }
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(hits.load(Ordering::Acquire), 8);
//! assert_eq!(peak.load(), 7.0);
//! ```
//!
//! ## Author
//!
//! Haixing Hu

#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod atomic;

// Re-export the engine, capabilities and entry points
pub use atomic::{
    atomic_add_f32,
    atomic_add_f64,
    atomic_add_i32,
    atomic_add_i64,
    atomic_add_u32,
    atomic_add_u64,
    atomic_and_i32,
    atomic_and_i64,
    atomic_and_u32,
    atomic_and_u64,
    atomic_compare_exchange_f32,
    atomic_compare_exchange_f64,
    atomic_compare_exchange_i32,
    atomic_compare_exchange_i64,
    atomic_compare_exchange_u32,
    atomic_compare_exchange_u64,
    atomic_exchange_f32,
    atomic_exchange_f64,
    atomic_exchange_i32,
    atomic_exchange_i64,
    atomic_exchange_u32,
    atomic_exchange_u64,
    atomic_max_f32,
    atomic_max_f64,
    atomic_max_i32,
    atomic_max_i64,
    atomic_max_u32,
    atomic_max_u64,
    atomic_min_f32,
    atomic_min_f64,
    atomic_min_i32,
    atomic_min_i64,
    atomic_min_u32,
    atomic_min_u64,
    atomic_or_i32,
    atomic_or_i64,
    atomic_or_u32,
    atomic_or_u64,
    atomic_xor_i32,
    atomic_xor_i64,
    atomic_xor_u32,
    atomic_xor_u64,
    make_atomic,
    make_atomic_with,
    AddOp,
    AndOp,
    AtomicF32,
    AtomicF64,
    AtomicLocation,
    BitwiseSameness,
    Combine,
    IntrinsicDescriptor,
    IntrinsicError,
    IntrinsicTag,
    Lowering,
    MaxOp,
    MinOp,
    NumericSameness,
    OperationKind,
    OrOp,
    RmwOutcome,
    Sameness,
    ScalarKind,
    XorOp,
};
