use std::{collections::HashMap, time::Instant};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::{
    config::EngineConfig,
    dsp::additive::synthesize,
    error::Result,
    notes::{NoteId, NoteTable},
    synth::waveform::Waveform,
};

/// Read-only cache of every playable note, rendered up front.
#[derive(Debug, Clone, Default)]
pub struct WaveformBank {
    waveforms: HashMap<NoteId, Waveform>,
}

impl WaveformBank {
    /// Render both reference tables with the configured envelopes.
    pub fn build(config: &EngineConfig) -> Result<Self> {
        Self::from_tables(config, &NoteTable::all())
    }

    /// Render every note of `tables`. Notes are synthesized in parallel.
    ///
    /// If a key appears in more than one table the later table wins.
    pub fn from_tables(config: &EngineConfig, tables: &[NoteTable]) -> Result<Self> {
        config.validate()?;
        let started = Instant::now();

        let jobs: Vec<_> = tables
            .iter()
            .flat_map(|table| {
                let envelope = *config.envelope(table.class());
                table.iter().map(move |(id, freq)| (id, freq, envelope))
            })
            .collect();

        let rendered = jobs
            .into_par_iter()
            .map(|(id, freq, envelope)| {
                let wave = synthesize(
                    freq,
                    &envelope,
                    &config.harmonics,
                    config.sample_rate,
                    config.note_duration,
                )?;
                debug!(note = %id, freq, samples = wave.len(), "rendered note");
                Ok((id, wave))
            })
            .collect::<Result<Vec<_>>>()?;

        let waveforms: HashMap<_, _> = rendered.into_iter().collect();

        info!(
            notes = waveforms.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "waveform bank ready"
        );

        Ok(Self { waveforms })
    }

    pub fn get(&self, id: NoteId) -> Option<&Waveform> {
        self.waveforms.get(&id)
    }

    pub fn contains(&self, id: NoteId) -> bool {
        self.waveforms.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.waveforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waveforms.is_empty()
    }
}
