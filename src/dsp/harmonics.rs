#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One sine partial at `multiplier` times the fundamental, scaled by `gain`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Harmonic {
    pub multiplier: f32,
    pub gain: f32,
}

impl Harmonic {
    pub const fn new(multiplier: f32, gain: f32) -> Self {
        Self { multiplier, gain }
    }
}

/// Partial stack measured from a C4 piano note.
///
/// The second partial sits at about half the fundamental, the seventh is
/// unusually strong, and the rest are faint.
pub const PIANO_HARMONICS: [Harmonic; 7] = [
    Harmonic::new(1.0, 1.0),
    Harmonic::new(2.0, 0.52),
    Harmonic::new(3.0, 0.033),
    Harmonic::new(4.0, 0.033),
    Harmonic::new(5.0, 0.0165),
    Harmonic::new(6.0, 0.0263),
    Harmonic::new(7.0, 0.052),
];
