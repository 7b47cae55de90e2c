use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use rtrb::Consumer;

use crate::{io::converter::block_to_i16, synth::voice::Voice};

/// What the device binding should do after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStatus {
    Continue,
    Stop,
}

/// Shared stop flag. Setting it makes every later render pass silent.
#[derive(Debug, Clone, Default)]
pub struct ShutdownHandle(Arc<AtomicBool>);

impl ShutdownHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shutdown(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_shutdown(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Snapshot of the last render pass, cheap enough to publish every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RenderStats {
    pub active_voices: usize,
    /// Largest absolute mixed value before conversion.
    pub peak: f32,
}

/// Audio-thread side of the engine: sums all sounding voices into frames.
///
/// The mixer owns its active-voice set outright. New voices arrive through
/// the ring buffer and are moved into the set at the start of each pass, so
/// rendering never takes a lock. The set is pre-allocated to the ring's
/// capacity and only grows if more voices than that are ringing at once.
pub struct Mixer {
    voices: Vec<Voice>,
    rx: Consumer<Voice>,
    mix_buffer: Vec<f32>,
    shutdown: ShutdownHandle,
    stats: RenderStats,
    started: u64,
}

impl Mixer {
    pub fn new(frame_size: usize, rx: Consumer<Voice>, shutdown: ShutdownHandle) -> Self {
        let capacity = rx.buffer().capacity();
        Self {
            voices: Vec::with_capacity(capacity),
            rx,
            mix_buffer: vec![0.0; frame_size.max(1)],
            shutdown,
            stats: RenderStats::default(),
            started: 0,
        }
    }

    /// Move newly started voices into the active set.
    fn drain_intake(&mut self) {
        while let Ok(voice) = self.rx.pop() {
            self.voices.push(voice);
            self.started += 1;
        }
    }

    /// Mix the next `len` samples of every active voice and return the sum.
    ///
    /// `len` must not exceed the configured frame size. Voices that were
    /// already exhausted before this pass are dropped without contributing; a
    /// voice whose last samples land in this pass stays until the next one.
    pub fn mix_frame(&mut self, len: usize) -> &[f32] {
        debug_assert!(
            len <= self.mix_buffer.len(),
            "requested {len} samples from a {}-sample mixer",
            self.mix_buffer.len()
        );
        self.drain_intake();

        let len = len.min(self.mix_buffer.len());
        let out = &mut self.mix_buffer[..len];
        out.fill(0.0);

        self.voices.retain_mut(|voice| {
            if voice.is_exhausted() {
                return false;
            }
            voice.mix_into(out);
            true
        });

        self.stats = RenderStats {
            active_voices: self.voices.len(),
            peak: out.iter().fold(0.0f32, |acc, &x| acc.max(x.abs())),
        };

        out
    }

    /// Fill `out` with 16-bit PCM.
    ///
    /// Any length is accepted; buffers longer than the frame size are rendered
    /// in frame-sized pieces. After shutdown `out` is filled with silence and
    /// the voices are left untouched.
    pub fn render_frame(&mut self, out: &mut [i16]) -> RenderStatus {
        if self.shutdown.is_shutdown() {
            out.fill(0);
            return RenderStatus::Stop;
        }

        let frame = self.mix_buffer.len();
        for chunk in out.chunks_mut(frame) {
            let mixed = self.mix_frame(chunk.len());
            block_to_i16(mixed, chunk);
        }

        RenderStatus::Continue
    }

    /// Total voices taken from the intake since creation.
    pub fn voices_started(&self) -> u64 {
        self.started
    }

    pub fn active_voices(&self) -> usize {
        self.voices.len()
    }

    pub fn frame_size(&self) -> usize {
        self.mix_buffer.len()
    }

    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        self.shutdown.clone()
    }
}
