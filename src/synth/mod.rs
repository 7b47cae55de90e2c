// Purpose: precomputed note cache, voice intake and realtime mixing
// Intake runs on the input thread, the mixer on the audio thread

pub mod bank;
pub mod intake;
pub mod mixer;
pub mod voice;
pub mod waveform;

use std::sync::Arc;

use rtrb::RingBuffer;

use crate::{config::EngineConfig, error::Result};

pub use bank::WaveformBank;
pub use intake::NoteIntake;
pub use mixer::{Mixer, RenderStats, RenderStatus, ShutdownHandle};
pub use voice::Voice;
pub use waveform::Waveform;

/// Wire an intake to a mixer through a voice ring sized from `config`.
pub fn voice_channel(
    bank: Arc<WaveformBank>,
    config: &EngineConfig,
) -> Result<(NoteIntake, Mixer, ShutdownHandle)> {
    config.validate()?;

    let (tx, rx) = RingBuffer::<Voice>::new(config.voice_queue_capacity);
    let shutdown = ShutdownHandle::new();

    Ok((
        NoteIntake::new(bank, tx),
        Mixer::new(config.frame_size, rx, shutdown.clone()),
        shutdown,
    ))
}
