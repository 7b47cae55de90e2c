//! Benchmarks for one render pass over many active voices.

use std::hint::black_box;

use criterion::{BatchSize, BenchmarkId, Criterion};
use keytone::synth::{Mixer, ShutdownHandle, Voice, WaveformBank};
use keytone::{EngineConfig, NoteTable};
use rtrb::RingBuffer;

use crate::FRAME_SIZES;

const VOICE_COUNTS: &[usize] = &[1, 8, 32, 128];

/// Mixer with `voices` queued, spread across the reference keys.
fn loaded_mixer(bank: &WaveformBank, frame_size: usize, voices: usize) -> Mixer {
    let (mut tx, rx) = RingBuffer::<Voice>::new(voices);
    let keys: Vec<_> = NoteTable::all()
        .iter()
        .flat_map(|table| table.iter())
        .map(|(id, _)| id)
        .collect();

    for i in 0..voices {
        let wave = bank.get(keys[i % keys.len()]).expect("reference key in bank");
        let _ = tx.push(Voice::new(wave.clone()));
    }

    Mixer::new(frame_size, rx, ShutdownHandle::new())
}

pub fn bench_mixer(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/mixer");
    let config = EngineConfig::default();
    let bank = WaveformBank::build(&config).expect("default config is valid");

    for &frame_size in FRAME_SIZES {
        let mut out = vec![0i16; frame_size];

        for &voices in VOICE_COUNTS {
            let id = format!("{voices}_voices");
            group.bench_with_input(BenchmarkId::new(id, frame_size), &frame_size, |b, &size| {
                b.iter_batched(
                    || loaded_mixer(&bank, size, voices),
                    |mut mixer| {
                        mixer.render_frame(black_box(&mut out));
                        mixer
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }

    group.finish();
}
