//! Swinging rope demo.
//!
//! Demonstrates: DynamicArray-backed particles → Verlet + Jakobsen step →
//! InlineRingBuffer trail of the tip → HeapRingBuffer of per-step timings.
//!
//! Run with `RUST_LOG=debug` to see container growth and construction logs.

use std::time::Instant;

use oats_bench::{Rope, TRAIL_LEN};
use oats_containers::{HeapRingBuffer, RingBuffer};
use oats_math::{distance, Vec2};

fn main() {
    env_logger::init();

    println!("=== Oats Rope Trail Example ===\n");

    let mut rope = Rope::new(Vec2::new(0.0, 0.0), 24, 0.25, 12)
        .with_bounds(Vec2::new(-20.0, -8.0), Vec2::new(20.0, 8.0));
    let mut timings: HeapRingBuffer<u128> = match RingBuffer::with_capacity(60) {
        Ok(ring) => ring,
        Err(err) => {
            eprintln!("failed to build timing ring: {err}");
            return;
        }
    };

    for tick in 0..300 {
        let start = Instant::now();
        rope.step(1.0 / 60.0);
        timings.enqueue(start.elapsed().as_nanos());

        if tick % 60 == 59 {
            let tip = rope.positions()[rope.positions().len() - 1];
            let trail = rope.trail();
            let travelled: f32 = (1..trail.size())
                .map(|i| distance(trail[i - 1], trail[i]))
                .sum();
            let mean_ns: u128 =
                (0..timings.size()).map(|i| timings[i]).sum::<u128>() / timings.size() as u128;
            println!(
                "  tick {:>3}: tip=({:>7.3}, {:>7.3}), trail[{}] path={:>7.3}, step={:>6}ns",
                tick + 1,
                tip.x,
                tip.y,
                TRAIL_LEN,
                travelled,
                mean_ns,
            );
        }
    }

    println!("\nDone.");
}
