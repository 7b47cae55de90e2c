use std::{ops::Deref, sync::Arc};

/// Immutable sample buffer for one fully rendered note.
///
/// Cloning is a reference-count bump, so every voice playing the same note
/// shares one allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform(Arc<[f32]>);

impl Waveform {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn samples(&self) -> &[f32] {
        &self.0
    }
}

impl From<Vec<f32>> for Waveform {
    fn from(samples: Vec<f32>) -> Self {
        Self(samples.into())
    }
}

impl From<&[f32]> for Waveform {
    fn from(samples: &[f32]) -> Self {
        Self(samples.into())
    }
}

impl Deref for Waveform {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        &self.0
    }
}
