//! Realtime scenario benchmarks.
//!
//! These model a player mashing keys: many voices overlapping at different
//! points in their waveforms.

mod mixer;

pub use mixer::bench_mixer;
