//! Benchmarks for note synthesis and realtime mixing.
//!
//! Run with: cargo bench
//!
//! Synthesis runs once per note at startup, so it only needs to be quick
//! enough not to delay launch. Mixing runs in the audio callback and must
//! finish well inside the frame deadline.
//!
//! Reference deadlines at 44.1kHz sample rate:
//!   - 256 samples  = 5.80ms deadline
//!   - 512 samples  = 11.61ms deadline
//!   - 1024 samples = 23.22ms deadline
//!
//! Benchmark groups:
//!   - dsp/*        Offline waveform synthesis
//!   - scenarios/*  Mixing many overlapping voices

use criterion::{criterion_group, criterion_main};

mod dsp;
mod scenarios;

/// Frame sizes a device is likely to ask for.
pub const FRAME_SIZES: &[usize] = &[256, 512, 1024];

criterion_group!(
    benches,
    // Offline synthesis
    dsp::bench_additive,
    // Realtime mixing
    scenarios::bench_mixer,
);
criterion_main!(benches);
