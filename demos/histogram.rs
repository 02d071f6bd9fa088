/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Parallel Histogram Example
//!
//! Demonstrates building a histogram and a running maximum from several
//! threads with the CAS-loop entry points, and dumps the intrinsic table a
//! compiler would match against.

use prism3_rmw::atomic::intrinsic;
use prism3_rmw::{
    atomic_add_u32,
    atomic_max_f32,
    AtomicF32,
};
use std::sync::atomic::{
    AtomicU32,
    Ordering,
};
use std::sync::Arc;
use std::thread;

const BINS: usize = 8;
const SAMPLES_PER_THREAD: u32 = 10_000;

/// Deterministic per-thread sample stream in `[0, 1)`.
fn samples(seed: u32) -> impl Iterator<Item = f32> {
    let mut state = seed.wrapping_mul(2_654_435_761).wrapping_add(1);
    (0..SAMPLES_PER_THREAD).map(move |_| {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        (state >> 8) as f32 / (1u32 << 24) as f32
    })
}

fn main() {
    env_logger::init();
    println!("=== Parallel Histogram Example ===\n");

    let bins: Arc<Vec<AtomicU32>> = Arc::new((0..BINS).map(|_| AtomicU32::new(0)).collect());
    let peak = Arc::new(AtomicF32::new(f32::NEG_INFINITY));
    let num_threads = 8;

    let mut handles = vec![];
    for i in 0..num_threads {
        let bins = bins.clone();
        let peak = peak.clone();
        let handle = thread::spawn(move || {
            for sample in samples(i) {
                let bin = ((sample * BINS as f32) as usize).min(BINS - 1);
                atomic_add_u32(&bins[bin], 1);
                atomic_max_f32(&peak, sample);
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    println!("1. Histogram:");
    let mut total = 0;
    for (index, bin) in bins.iter().enumerate() {
        let count = bin.load(Ordering::Acquire);
        total += count;
        println!("   bin {}: {}", index, count);
    }
    println!(
        "   Total: {} (expected: {})",
        total,
        num_threads * SAMPLES_PER_THREAD
    );
    println!("   Peak sample: {}", peak.load());

    println!("\n2. Intrinsic table:");
    for descriptor in intrinsic::descriptors() {
        println!("   {:?} {}", descriptor.lowering, descriptor);
    }
}
