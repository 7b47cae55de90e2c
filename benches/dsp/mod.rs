//! Benchmarks for offline synthesis.

mod additive;

pub use additive::bench_additive;
