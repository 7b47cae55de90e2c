#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Exponential Decay Envelope
==========================

A struck piano string does not hold its level the way a synth pad does. The
hammer hits, the level jumps up almost instantly, and then it dies away for as
long as the string rings. There is no sustain stage and no release stage: the
note simply decays until it is inaudible.

Vocabulary
----------

  peak          Overall scale of the envelope. The curve never actually
                reaches `peak`, because the decay starts eating into the
                level while the attack is still rising.

  attack rate   How fast the level rises, in 1/seconds. Bigger is snappier.

  decay rate    How fast the level falls away, in 1/seconds. The
                characteristic decay time is 1 / decay_rate.


The Math
--------

    amplitude(t) = peak × (1 - e^(-attack × t)) × e^(-decay × t)

  - The first factor is a rising exponential: 0 at t = 0, approaching 1.
  - The second factor is a falling exponential: 1 at t = 0, approaching 0.

Their product starts at exactly 0 (no click at note start), climbs for a
few tens of milliseconds, then rolls off.

  Level
   peak ┐
        │ ╭╮
        │╭╯╰╮
        ││   ╰╮
        ││     ╰──╮
    0.0 └┴────────╰──────────────────→ Time
         ↑ attack (~1/50 s)  decay (~1/5 s or ~1/1.5 s)


Presets
-------

  normal   peak 0.12, attack 50/s, decay 5/s     (~200 ms characteristic)
  long     peak 0.10, attack 50/s, decay 1.5/s   (~650 ms characteristic)

The long preset is a touch quieter so that a held chord of long notes does
not pile up louder than the same chord played short.

Unlike a gated ADSR this envelope has no runtime state. It is evaluated as a
pure function of time while a note's waveform is precomputed, never on the
audio thread.
*/

/// Maps time since note start (seconds) to an amplitude multiplier.
pub trait Envelope: Sync {
    fn amplitude(&self, time: f64) -> f64;
}

impl<F> Envelope for F
where
    F: Fn(f64) -> f64 + Sync,
{
    fn amplitude(&self, time: f64) -> f64 {
        self(time)
    }
}

/// Fast-attack exponential decay envelope.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayEnvelope {
    pub peak: f32,
    pub attack_rate: f32,
    pub decay_rate: f32,
}

impl DecayEnvelope {
    pub const fn new(peak: f32, attack_rate: f32, decay_rate: f32) -> Self {
        Self {
            peak,
            attack_rate,
            decay_rate,
        }
    }

    /// Envelope for regular key presses.
    pub const fn normal() -> Self {
        Self::new(0.12, 50.0, 5.0)
    }

    /// Envelope for the sustained (shifted) key variant.
    pub const fn long() -> Self {
        Self::new(0.10, 50.0, 1.5)
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.peak.is_finite() && self.attack_rate.is_finite() && self.decay_rate.is_finite()
    }
}

impl Envelope for DecayEnvelope {
    #[inline]
    fn amplitude(&self, time: f64) -> f64 {
        let rise = 1.0 - (-(self.attack_rate as f64) * time).exp();
        let fall = (-(self.decay_rate as f64) * time).exp();
        self.peak as f64 * rise * fall
    }
}
