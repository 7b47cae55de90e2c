//! Output stream setup: opens the device and drives the mixer from its callback

use std::sync::Arc;

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::{
    traits::{DeviceTrait, HostTrait, StreamTrait},
    BufferSize, SampleFormat, SampleRate, StreamConfig,
};
use rtrb::{Consumer, RingBuffer};
use tracing::{error, info};

use keytone::{
    synth::{voice_channel, NoteIntake, RenderStats, RenderStatus, ShutdownHandle, WaveformBank},
    EngineConfig,
};

/// Capacity of the audio → UI stats ring, in frames
const STATS_RING_LEN: usize = 64;

/// Everything the UI thread needs once audio is running
pub struct Engine {
    pub intake: NoteIntake,
    pub stats_rx: Consumer<RenderStats>,
    pub shutdown: ShutdownHandle,
    pub device_name: String,
    stream: cpal::Stream,
}

impl Engine {
    /// Stop rendering, then close the stream.
    pub fn stop(self) {
        self.shutdown.shutdown();
        if let Err(err) = self.stream.pause() {
            error!("failed to pause output stream: {err}");
        }
    }
}

/// Open the default output device as 16-bit PCM and start playback.
pub fn start(bank: Arc<WaveformBank>, config: &EngineConfig) -> EyreResult<Engine> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no default output device available"))?;
    let device_name = device.name().unwrap_or_else(|_| "unknown device".into());

    let rate = SampleRate(config.sample_rate);
    let supported = device
        .supported_output_configs()
        .wrap_err("failed to query output configs")?
        .any(|range| {
            range.sample_format() == SampleFormat::I16
                && range.channels() == config.channels
                && range.min_sample_rate() <= rate
                && rate <= range.max_sample_rate()
        });
    if !supported {
        return Err(eyre!(
            "{device_name} does not support {} channel(s) of i16 at {} Hz",
            config.channels,
            config.sample_rate
        ));
    }

    let stream_config = StreamConfig {
        channels: config.channels,
        sample_rate: rate,
        buffer_size: BufferSize::Fixed(config.frame_size as u32),
    };
    let channels = config.channels as usize;

    let (intake, mut mixer, shutdown) =
        voice_channel(bank, config).wrap_err("failed to create voice channel")?;
    let (mut stats_tx, stats_rx) = RingBuffer::<RenderStats>::new(STATS_RING_LEN);

    // Mono render buffer reused by the callback
    let mut frame = vec![0i16; config.frame_size];

    let stream = device
        .build_output_stream(
            &stream_config,
            move |data: &mut [i16], _: &cpal::OutputCallbackInfo| {
                let total_frames = data.len() / channels;
                if frame.len() < total_frames {
                    frame.resize(total_frames, 0);
                }

                let block = &mut frame[..total_frames];
                if mixer.render_frame(block) == RenderStatus::Stop {
                    data.fill(0);
                    return;
                }

                // Duplicate mono to all channels
                for (out, &s) in data.chunks_mut(channels).zip(block.iter()) {
                    out.fill(s);
                }

                // Drop on overflow, UI only wants the latest
                let _ = stats_tx.push(mixer.stats());
            },
            |err| error!("audio stream error: {err}"),
            None,
        )
        .wrap_err("failed to build output stream")?;

    stream.play().wrap_err("failed to start output stream")?;
    info!(
        device = %device_name,
        sample_rate = config.sample_rate,
        frame_size = config.frame_size,
        deadline_ms = config.frame_budget() * 1_000.0,
        "output stream started"
    );

    Ok(Engine {
        intake,
        stats_rx,
        shutdown,
        device_name,
        stream,
    })
}
