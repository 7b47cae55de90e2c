use std::f64::consts::TAU;

use crate::{
    dsp::{envelope::Envelope, harmonics::Harmonic},
    error::{Error, Result},
    synth::waveform::Waveform,
};

/*
Additive Synthesis
==================

Any periodic tone can be built by adding sine waves at whole-number multiples
of its pitch. Instead of starting from a bright waveform and filtering it
down (subtractive), we start from silence and stack up exactly the partials
we want.

Vocabulary
----------

  fundamental   The pitch of the note in Hz. Partial 1.

  partial       A sine at `multiplier × fundamental`. For a piano the
                multipliers are 1, 2, 3, ... 7.

  gain          How loud a partial is relative to the fundamental.


The Math
--------

For each output sample index i:

    t       = i / sample_rate
    out[i]  = Σ_k  gain_k × envelope(t) × sin(2π × f × multiplier_k × t)

All partials share one envelope, so it is factored out of the sum:

    out[i]  = envelope(t) × Σ_k gain_k × sin(2π × f × multiplier_k × t)


Why Precompute?
---------------

Seven `sin()` calls per sample per voice adds up fast once ten notes are
ringing. Every key always produces the same sound, so each note is rendered
once into a fixed-length buffer at startup and voices just read from it.

Length is always round(sample_rate × duration) regardless of pitch. At
44.1 kHz and 4 s that is 176,400 samples (~690 KB as f32) per note.


Precision
---------

Phase is computed in f64 from the absolute sample index rather than by
accumulating an increment. By the end of a 4 s note the seventh partial of
the top key has turned through ~1.2e5 radians, which f32 can only resolve to
about a hundredth of a radian.
*/

/// Number of samples in every synthesized note.
pub fn waveform_len(sample_rate: u32, duration: f32) -> usize {
    (sample_rate as f64 * duration as f64).round() as usize
}

/// Render one note by summing enveloped sine partials.
pub fn synthesize<E: Envelope + ?Sized>(
    frequency: f32,
    envelope: &E,
    harmonics: &[Harmonic],
    sample_rate: u32,
    duration: f32,
) -> Result<Waveform> {
    if !(frequency.is_finite() && frequency > 0.0) {
        return Err(Error::InvalidFrequency(frequency));
    }
    if !(duration.is_finite() && duration > 0.0) {
        return Err(Error::InvalidDuration(duration));
    }
    if sample_rate == 0 {
        return Err(Error::InvalidConfig("sample rate must be non-zero".into()));
    }

    let len = waveform_len(sample_rate, duration);
    let sr = sample_rate as f64;
    let fundamental = frequency as f64;

    let samples: Vec<f32> = (0..len)
        .map(|i| {
            let t = i as f64 / sr;
            let partials: f64 = harmonics
                .iter()
                .map(|h| {
                    h.gain as f64 * (TAU * fundamental * h.multiplier as f64 * t).sin()
                })
                .sum();
            (envelope.amplitude(t) * partials) as f32
        })
        .collect();

    Ok(Waveform::from(samples))
}
