/// Full-scale value for signed 16-bit PCM.
pub const I16_FULL_SCALE: f32 = 32_767.0;

/// Convert one float sample to 16-bit PCM, saturating at the format limits.
///
/// Loud piles of overlapping voices clip instead of wrapping around.
#[inline]
pub fn sample_to_i16(sample: f32) -> i16 {
    (sample * I16_FULL_SCALE)
        .round()
        .clamp(i16::MIN as f32, i16::MAX as f32) as i16
}

/// Convert a block of float samples into `out`. Lengths must match.
pub fn block_to_i16(input: &[f32], out: &mut [i16]) {
    debug_assert_eq!(input.len(), out.len());
    for (o, &s) in out.iter_mut().zip(input) {
        *o = sample_to_i16(s);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_and_rounds() {
        assert_eq!(sample_to_i16(0.0), 0);
        assert_eq!(sample_to_i16(1.0), 32_767);
        assert_eq!(sample_to_i16(-1.0), -32_767);
        assert_eq!(sample_to_i16(0.5), 16_384);
    }

    #[test]
    fn saturates_out_of_range() {
        assert_eq!(sample_to_i16(3.0), i16::MAX);
        assert_eq!(sample_to_i16(-3.0), i16::MIN);
        assert_eq!(sample_to_i16(f32::INFINITY), i16::MAX);
    }

    #[test]
    fn nan_becomes_silence() {
        assert_eq!(sample_to_i16(f32::NAN), 0);
    }

    #[test]
    fn converts_blocks() {
        let mut out = [0i16; 3];
        block_to_i16(&[0.25, -0.25, 2.0], &mut out);
        assert_eq!(out, [8_192, -8_192, i16::MAX]);
    }
}
