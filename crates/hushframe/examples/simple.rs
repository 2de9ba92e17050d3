//! Minimal denoising demo.
//!
//! Feeds one second of a synthetic tone buried in hiss through a
//! [`Denoiser`], then prints the VAD probability every 100 ms and the energy
//! removed.
//!
//! ```sh
//! cargo run -p hushframe --example simple
//! ```

use std::f32::consts::PI;

use hushframe::{Denoiser, DenoiserConfig, FRAME_SIZE, SAMPLE_RATE_HZ};

fn main() {
    let mut denoiser = Denoiser::new(DenoiserConfig::default()).expect("builtin model loads");
    let num_frames = SAMPLE_RATE_HZ as usize / FRAME_SIZE;

    let mut input_energy = 0.0f64;
    let mut output_energy = 0.0f64;
    let mut output = [0.0f32; FRAME_SIZE];

    for frame_idx in 0..num_frames {
        let input = noisy_frame(frame_idx);
        let vad = denoiser
            .process_frame(&input, &mut output)
            .expect("frame is exactly FRAME_SIZE samples");

        input_energy += input.iter().map(|&s| f64::from(s) * f64::from(s)).sum::<f64>();
        output_energy += output.iter().map(|&s| f64::from(s) * f64::from(s)).sum::<f64>();

        if frame_idx % 10 == 0 {
            println!("frame {frame_idx:3}: vad = {vad:.3}");
        }
    }

    let reduction_db = 10.0 * (input_energy / output_energy.max(f64::EPSILON)).log10();
    let stats = denoiser.statistics();
    println!(
        "Processed {} frames; energy reduced by {reduction_db:.1} dB.",
        stats.frames_processed
    );
}

/// One frame of a 440 Hz tone plus deterministic broadband hiss, in the
/// i16 sample range.
fn noisy_frame(frame_idx: usize) -> Vec<f32> {
    let rate = SAMPLE_RATE_HZ as f32;
    (0..FRAME_SIZE)
        .map(|i| {
            let n = frame_idx * FRAME_SIZE + i;
            let t = n as f32 / rate;
            let tone = (2.0 * PI * 440.0 * t).sin() * 5000.0;
            let hiss = ((n.wrapping_mul(2_654_435_761) >> 7) % 2001) as f32 - 1000.0;
            tone + hiss
        })
        .collect()
}
