use crate::synth::waveform::Waveform;

/// One sounding instance of a precomputed note.
///
/// A voice only owns its read position; the samples are shared with every
/// other voice playing the same note. There is no note-off: a voice plays
/// until its waveform runs out.
#[derive(Debug, Clone)]
pub struct Voice {
    waveform: Waveform,
    offset: usize,
}

impl Voice {
    pub fn new(waveform: Waveform) -> Self {
        Self {
            waveform,
            offset: 0,
        }
    }

    /// Samples left to play.
    pub fn remaining(&self) -> usize {
        self.waveform.len() - self.offset
    }

    /// True once every sample has been consumed by an earlier frame.
    pub fn is_exhausted(&self) -> bool {
        self.offset >= self.waveform.len()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Add the next `out.len()` samples into `out` and advance.
    ///
    /// Near the end of the waveform only a prefix of `out` is touched. The
    /// offset advances by the full frame width but never past the end.
    pub fn mix_into(&mut self, out: &mut [f32]) {
        let take = out.len().min(self.remaining());
        let slice = &self.waveform[self.offset..self.offset + take];

        for (o, s) in out.iter_mut().zip(slice) {
            *o += s;
        }

        self.offset = (self.offset + out.len()).min(self.waveform.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_sequential_slices() {
        let mut voice = Voice::new(Waveform::from(vec![1.0, 2.0, 3.0, 4.0, 5.0]));
        let mut out = [0.0f32; 2];

        voice.mix_into(&mut out);
        assert_eq!(out, [1.0, 2.0]);

        out.fill(0.0);
        voice.mix_into(&mut out);
        assert_eq!(out, [3.0, 4.0]);
        assert_eq!(voice.remaining(), 1);
        assert!(!voice.is_exhausted());
    }

    #[test]
    fn short_tail_touches_only_a_prefix() {
        let mut voice = Voice::new(Waveform::from(vec![7.0]));
        let mut out = [1.0f32; 4];

        voice.mix_into(&mut out);

        assert_eq!(out, [8.0, 1.0, 1.0, 1.0]);
        assert_eq!(voice.offset(), 1);
        assert!(voice.is_exhausted());
    }

    #[test]
    fn accumulates_instead_of_overwriting() {
        let mut voice = Voice::new(Waveform::from(vec![0.25, 0.25]));
        let mut out = [0.5f32, -0.5];

        voice.mix_into(&mut out);
        assert_eq!(out, [0.75, -0.25]);
    }

    #[test]
    fn empty_waveform_is_exhausted_immediately() {
        let voice = Voice::new(Waveform::from(Vec::new()));
        assert!(voice.is_exhausted());
        assert_eq!(voice.remaining(), 0);
    }
}
