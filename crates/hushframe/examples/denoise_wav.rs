//! Offline WAV denoising.
//!
//! Reads a mono 16-bit 48 kHz WAV file, denoises it frame by frame with a
//! single [`Denoiser`], and writes the result next to it.
//!
//! ```sh
//! cargo run -p hushframe --example denoise_wav --features examples -- \
//!     --input vocals.wav --output vocals_clean.wav
//! ```
//!
//! Other sample rates are refused; resample beforehand.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, bail, ensure};
use clap::Parser;
use hound::{SampleFormat, WavReader, WavWriter};
use hushframe::{Denoiser, DenoiserConfig, FRAME_SIZE, SAMPLE_RATE_HZ};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(about = "Denoise a 48 kHz mono WAV file with RNNoise")]
struct Args {
    /// Input WAV file (mono, 16-bit PCM, 48 kHz).
    #[arg(short, long)]
    input: PathBuf,
    /// Output WAV file.
    #[arg(short, long)]
    output: PathBuf,
    /// Optional serialized RNNoise model to load instead of the builtin one.
    #[arg(long)]
    model: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let mut reader = WavReader::open(&args.input)
        .with_context(|| format!("opening {}", args.input.display()))?;
    let spec = reader.spec();
    ensure!(spec.channels == 1, "expected mono input, got {} channels", spec.channels);
    ensure!(
        spec.sample_format == SampleFormat::Int && spec.bits_per_sample == 16,
        "expected 16-bit PCM input"
    );
    if spec.sample_rate != SAMPLE_RATE_HZ {
        bail!(
            "input is {} Hz; the denoiser only runs at {SAMPLE_RATE_HZ} Hz",
            spec.sample_rate
        );
    }

    let pcm: Vec<i16> = reader
        .samples::<i16>()
        .collect::<Result<_, _>>()
        .context("reading samples")?;

    let config = match &args.model {
        Some(path) => DenoiserConfig::with_model_bytes(
            fs::read(path).with_context(|| format!("reading {}", path.display()))?,
        ),
        None => DenoiserConfig::default(),
    };
    let mut denoiser = Denoiser::new(config)?;

    // Zero-pad the tail to a whole frame; the padding is dropped on output.
    let padded_len = pcm.len().div_ceil(FRAME_SIZE) * FRAME_SIZE;
    let mut samples: Vec<f32> = pcm.iter().map(|&s| f32::from(s)).collect();
    samples.resize(padded_len, 0.0);

    let mut denoised = vec![0.0f32; padded_len];
    let mut vad_sum = 0.0f64;
    for (input, output) in samples
        .chunks_exact(FRAME_SIZE)
        .zip(denoised.chunks_exact_mut(FRAME_SIZE))
    {
        vad_sum += f64::from(denoiser.process_frame(input, output)?);
    }
    denoised.truncate(pcm.len());

    let mut writer = WavWriter::create(&args.output, spec)
        .with_context(|| format!("creating {}", args.output.display()))?;
    for &s in &denoised {
        writer.write_sample(s.round().clamp(f32::from(i16::MIN), f32::from(i16::MAX)) as i16)?;
    }
    writer.finalize()?;

    let frames = denoiser.statistics().frames_processed;
    println!(
        "Denoised {frames} frames into {} (mean VAD {:.3}).",
        args.output.display(),
        if frames == 0 { 0.0 } else { vad_sum / frames as f64 }
    );
    Ok(())
}
