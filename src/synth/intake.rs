use std::sync::Arc;

use rtrb::{Producer, PushError};
use tracing::{trace, warn};

use crate::{notes::NoteId, synth::bank::WaveformBank, synth::voice::Voice};

/// Control-thread side of the engine: turns key presses into voices.
///
/// Voices are handed to the [`Mixer`](crate::synth::mixer::Mixer) through a
/// wait-free single-producer ring, so a key press never blocks the audio
/// thread and vice versa.
pub struct NoteIntake {
    bank: Arc<WaveformBank>,
    tx: Producer<Voice>,
}

impl NoteIntake {
    pub fn new(bank: Arc<WaveformBank>, tx: Producer<Voice>) -> Self {
        Self { bank, tx }
    }

    /// Start a new voice for `id`.
    ///
    /// Keys with no waveform are ignored. Pressing a key that is already
    /// sounding layers a second, independent voice on top.
    pub fn note_on(&mut self, id: impl Into<NoteId>) {
        let id = id.into();
        let Some(waveform) = self.bank.get(id) else {
            trace!(note = %id, "ignoring unmapped key");
            return;
        };

        if let Err(PushError::Full(_)) = self.tx.push(Voice::new(waveform.clone())) {
            warn!(note = %id, "voice queue full, dropping note");
        }
    }

    /// Voices queued but not yet picked up by the mixer.
    pub fn pending(&self) -> usize {
        self.tx.buffer().capacity() - self.tx.slots()
    }

    pub fn bank(&self) -> &WaveformBank {
        &self.bank
    }
}
