/// Offline chord example: press three keys, render a second of audio, report levels
use std::sync::Arc;

use keytone::{
    synth::{voice_channel, WaveformBank},
    EngineConfig,
};

fn main() -> keytone::Result<()> {
    println!("=== Offline Chord ===\n");

    let config = EngineConfig::default();
    let bank = Arc::new(WaveformBank::build(&config)?);
    println!("Rendered {} notes of {} s each\n", bank.len(), config.note_duration);

    let (mut intake, mut mixer, _shutdown) = voice_channel(bank, &config)?;

    // C major: C4 E4 G4, then the same chord again with the long envelope
    println!("Playing a d g");
    for key in ['a', 'd', 'g'] {
        intake.note_on(key);
    }

    let mut frame = vec![0i16; config.frame_size];
    let frames_per_second = config.sample_rate as usize / config.frame_size;

    for second in 0..2 {
        if second == 1 {
            println!("Playing A D G");
            for key in ['A', 'D', 'G'] {
                intake.note_on(key);
            }
        }

        let mut peak = 0i16;
        for _ in 0..frames_per_second {
            mixer.render_frame(&mut frame);
            peak = frame.iter().fold(peak, |acc, &s| acc.max(s.saturating_abs()));
        }
        println!(
            "  second {}: {} voice(s), peak {} ({:.1}% of full scale)",
            second + 1,
            mixer.active_voices(),
            peak,
            peak as f32 / i16::MAX as f32 * 100.0
        );
    }

    Ok(())
}
