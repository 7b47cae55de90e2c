pub mod config;
pub mod dsp; // Offline waveform synthesis
pub mod error;
pub mod io;
pub mod notes;
pub mod synth; // Voice intake and realtime mixing

pub use config::EngineConfig;
pub use error::{Error, Result};
pub use notes::{NoteClass, NoteId, NoteTable};

pub const SAMPLE_RATE: u32 = 44_100;
pub const NOTE_DURATION_SECONDS: f32 = 4.0;
pub const FRAME_SIZE: usize = 1024;
pub const CHANNELS: u16 = 1;
pub const VOICE_QUEUE_CAPACITY: usize = 256;
