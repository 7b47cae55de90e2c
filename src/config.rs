//! Process-wide engine settings, fixed once the output stream opens.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    dsp::{
        envelope::DecayEnvelope,
        harmonics::{Harmonic, PIANO_HARMONICS},
    },
    error::{Error, Result},
    notes::NoteClass,
    CHANNELS, FRAME_SIZE, NOTE_DURATION_SECONDS, SAMPLE_RATE, VOICE_QUEUE_CAPACITY,
};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Length of every precomputed note, in seconds.
    pub note_duration: f32,
    /// Samples per rendered frame (also the requested device buffer size).
    pub frame_size: usize,
    /// Output channel count. Mono frames are duplicated to every channel.
    pub channels: u16,
    /// Pending note-ons the intake can queue ahead of the audio thread.
    pub voice_queue_capacity: usize,
    pub normal_envelope: DecayEnvelope,
    pub long_envelope: DecayEnvelope,
    pub harmonics: Vec<Harmonic>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: SAMPLE_RATE,
            note_duration: NOTE_DURATION_SECONDS,
            frame_size: FRAME_SIZE,
            channels: CHANNELS,
            voice_queue_capacity: VOICE_QUEUE_CAPACITY,
            normal_envelope: DecayEnvelope::normal(),
            long_envelope: DecayEnvelope::long(),
            harmonics: PIANO_HARMONICS.to_vec(),
        }
    }
}

impl EngineConfig {
    pub fn envelope(&self, class: NoteClass) -> &DecayEnvelope {
        match class {
            NoteClass::Normal => &self.normal_envelope,
            NoteClass::Long => &self.long_envelope,
        }
    }

    /// Frame deadline in seconds.
    pub fn frame_budget(&self) -> f64 {
        self.frame_size as f64 / self.sample_rate as f64
    }

    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(invalid("sample_rate must be non-zero"));
        }
        if !(self.note_duration.is_finite() && self.note_duration > 0.0) {
            return Err(Error::InvalidDuration(self.note_duration));
        }
        if self.frame_size == 0 {
            return Err(invalid("frame_size must be non-zero"));
        }
        if self.channels == 0 {
            return Err(invalid("channels must be non-zero"));
        }
        if self.voice_queue_capacity == 0 {
            return Err(invalid("voice_queue_capacity must be non-zero"));
        }
        if self.harmonics.is_empty() {
            return Err(invalid("harmonics must not be empty"));
        }
        if self
            .harmonics
            .iter()
            .any(|h| !(h.multiplier.is_finite() && h.gain.is_finite()))
        {
            return Err(invalid("harmonic multipliers and gains must be finite"));
        }
        if !self.normal_envelope.is_finite() || !self.long_envelope.is_finite() {
            return Err(invalid("envelope parameters must be finite"));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> Error {
    Error::InvalidConfig(msg.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_constants() {
        let config = EngineConfig::default();
        assert_eq!(config.sample_rate, 44_100);
        assert_eq!(config.frame_size, 1024);
        assert_eq!(config.channels, 1);
        assert_eq!(config.note_duration, 4.0);
        assert_eq!(config.harmonics.len(), 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn picks_envelope_by_class() {
        let config = EngineConfig::default();
        assert_eq!(config.envelope(NoteClass::Normal).decay_rate, 5.0);
        assert_eq!(config.envelope(NoteClass::Long).decay_rate, 1.5);
    }

    #[test]
    fn frame_budget_is_frame_over_rate() {
        let config = EngineConfig::default();
        assert!((config.frame_budget() - 1024.0 / 44_100.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_degenerate_settings() {
        let zero_frame = EngineConfig {
            frame_size: 0,
            ..Default::default()
        };
        assert!(matches!(zero_frame.validate(), Err(Error::InvalidConfig(_))));

        let negative_duration = EngineConfig {
            note_duration: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            negative_duration.validate(),
            Err(Error::InvalidDuration(_))
        ));

        let silent = EngineConfig {
            harmonics: Vec::new(),
            ..Default::default()
        };
        assert!(silent.validate().is_err());

        let nan_env = EngineConfig {
            long_envelope: DecayEnvelope::new(f32::NAN, 50.0, 1.5),
            ..Default::default()
        };
        assert!(nan_env.validate().is_err());
    }
}
