//! Offline DSP used to precompute note waveforms.
//!
//! Nothing in here runs on the audio thread. Every note is rendered once at
//! startup and the realtime side only reads the resulting buffers.

/// Sum of enveloped sine partials into a fixed-length waveform.
pub mod additive;
/// Time-to-amplitude envelopes for struck notes.
pub mod envelope;
/// Harmonic partial stacks that define timbre.
pub mod harmonics;

pub use additive::synthesize;
pub use envelope::{DecayEnvelope, Envelope};
pub use harmonics::{Harmonic, PIANO_HARMONICS};
