//! Benchmarks for rendering whole notes from harmonic partials.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use keytone::dsp::{synthesize, DecayEnvelope, Harmonic, PIANO_HARMONICS};
use keytone::{synth::WaveformBank, EngineConfig};

pub fn bench_additive(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/additive");
    group.sample_size(10);

    let env = DecayEnvelope::normal();

    // Single partial vs the full piano stack, one second each
    let fundamental = [Harmonic::new(1.0, 1.0)];
    group.bench_with_input(BenchmarkId::new("one_partial", "1s"), &1.0f32, |b, &secs| {
        b.iter(|| synthesize(black_box(440.0), &env, &fundamental, 44_100, secs))
    });
    group.bench_with_input(BenchmarkId::new("piano_stack", "1s"), &1.0f32, |b, &secs| {
        b.iter(|| synthesize(black_box(440.0), &env, &PIANO_HARMONICS, 44_100, secs))
    });

    // Full startup cost: 32 notes at the default length
    let config = EngineConfig::default();
    group.bench_function("bank/default", |b| {
        b.iter(|| WaveformBank::build(black_box(&config)))
    });

    group.finish();
}
