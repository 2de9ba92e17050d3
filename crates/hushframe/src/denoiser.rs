//! The owning denoiser handle.

use crate::config::DenoiserConfig;
use crate::engine::{FrameDenoiser, RnnoiseEngine};
use crate::error::{Error, FrameError};
use crate::frame::{FRAME_SIZE, Frame, split_frame, split_frame_mut};
use crate::stats::DenoiserStats;

/// One streaming denoiser instance.
///
/// Owns the engine state for its whole lifetime and releases it on drop.
/// Each call to [`process_frame`](Self::process_frame) copies the input
/// into a fresh stack buffer and runs the engine into a second one. The
/// result is then copied out to the caller. No sample survives in these
/// buffers from one call to the next; only the engine's own filter state
/// carries over.
///
/// # Example
///
/// ```
/// use hushframe::{Denoiser, FRAME_SIZE};
///
/// let mut denoiser = Denoiser::new(Default::default())?;
/// let input = [0.0f32; FRAME_SIZE];
/// let mut output = [0.0f32; FRAME_SIZE];
/// let vad = denoiser.process_frame(&input, &mut output)?;
/// assert!((0.0..=1.0).contains(&vad));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(derive_more::Debug)]
pub struct Denoiser<E: FrameDenoiser = RnnoiseEngine> {
    #[debug(skip)]
    engine: E,
    stats: DenoiserStats,
}

impl Denoiser {
    /// Create a denoiser backed by the RNNoise engine.
    pub fn new(config: DenoiserConfig) -> Result<Self, Error> {
        let engine = RnnoiseEngine::new(&config)?;
        tracing::debug!(model = config.model.label(), "created denoiser");
        Ok(Self::with_engine(engine))
    }
}

impl<E: FrameDenoiser> Denoiser<E> {
    /// Wrap an already constructed engine.
    pub fn with_engine(engine: E) -> Self {
        Self {
            engine,
            stats: DenoiserStats::default(),
        }
    }

    /// Denoise one frame.
    ///
    /// Reads the first [`FRAME_SIZE`] samples of `input` and writes the first
    /// [`FRAME_SIZE`] samples of `output`, returning the frame's VAD
    /// probability. If either buffer is shorter than a frame, nothing is
    /// processed and `output` is left untouched.
    pub fn process_frame(&mut self, input: &[f32], output: &mut [f32]) -> Result<f32, FrameError> {
        let Some(input) = split_frame(input) else {
            return Err(self.reject(FrameError::InputTooShort { len: input.len() }));
        };
        let output_len = output.len();
        let Some(output) = split_frame_mut(output) else {
            return Err(self.reject(FrameError::OutputTooShort { len: output_len }));
        };

        let vad = self.process_copied(input, output);
        Ok(vad)
    }

    /// Copy-in, process, copy-out through transient stack buffers.
    fn process_copied(&mut self, input: &Frame, output: &mut Frame) -> f32 {
        let mut scratch_in: Frame = [0.0; FRAME_SIZE];
        scratch_in.copy_from_slice(input);
        let mut scratch_out: Frame = [0.0; FRAME_SIZE];

        let vad = self.engine.process(&mut scratch_out, &scratch_in);
        output.copy_from_slice(&scratch_out);

        self.stats.frames_processed += 1;
        self.stats.last_vad_probability = Some(vad);
        vad
    }

    /// Denoise a frame supplied as exactly-sized arrays.
    ///
    /// Infallible counterpart of [`process_frame`](Self::process_frame) for
    /// callers that already hold [`Frame`]s.
    pub fn process(&mut self, input: &Frame, output: &mut Frame) -> f32 {
        self.process_copied(input, output)
    }

    fn reject(&mut self, err: FrameError) -> FrameError {
        self.count_rejected();
        tracing::trace!(%err, "frame rejected");
        err
    }

    pub(crate) fn count_rejected(&mut self) {
        self.stats.frames_rejected += 1;
    }

    /// Length check for raw buffers, ahead of copying them into frames.
    #[cfg(feature = "ffi")]
    pub(crate) fn admit(&mut self, input_len: usize, output_len: usize) -> Result<(), FrameError> {
        if input_len < FRAME_SIZE {
            return Err(self.reject(FrameError::InputTooShort { len: input_len }));
        }
        if output_len < FRAME_SIZE {
            return Err(self.reject(FrameError::OutputTooShort { len: output_len }));
        }
        Ok(())
    }

    /// Processing counters for this handle.
    pub fn statistics(&self) -> DenoiserStats {
        self.stats
    }

    /// Zero all counters.
    pub fn reset_statistics(&mut self) {
        self.stats = DenoiserStats::default();
    }

    /// Borrow the engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tests::tiny_model_bytes;

    /// Engine double that counts calls and records the last input it saw.
    #[derive(Debug, Default)]
    struct CountingEngine {
        calls: usize,
        last_input: Option<Frame>,
    }

    impl FrameDenoiser for CountingEngine {
        fn process(&mut self, output: &mut Frame, input: &Frame) -> f32 {
            self.calls += 1;
            self.last_input = Some(*input);
            for (o, i) in output.iter_mut().zip(input) {
                *o = i * 0.5;
            }
            0.75
        }
    }

    #[test]
    fn short_input_is_rejected_without_engine_call() {
        let mut denoiser = Denoiser::with_engine(CountingEngine::default());
        let mut output = [3.0f32; FRAME_SIZE];
        let err = denoiser
            .process_frame(&[1.0; FRAME_SIZE - 1], &mut output)
            .unwrap_err();
        assert_eq!(
            err,
            FrameError::InputTooShort {
                len: FRAME_SIZE - 1
            }
        );
        assert_eq!(denoiser.engine().calls, 0);
        assert!(output.iter().all(|&s| s == 3.0));
    }

    #[test]
    fn short_output_is_rejected_without_engine_call() {
        let mut denoiser = Denoiser::with_engine(CountingEngine::default());
        let mut output = vec![3.0f32; 10];
        let err = denoiser
            .process_frame(&[1.0; FRAME_SIZE], &mut output)
            .unwrap_err();
        assert_eq!(err, FrameError::OutputTooShort { len: 10 });
        assert_eq!(denoiser.engine().calls, 0);
        assert!(output.iter().all(|&s| s == 3.0));
    }

    #[test]
    fn valid_frame_reaches_engine_and_fills_output() {
        let mut denoiser = Denoiser::with_engine(CountingEngine::default());
        let input: Vec<f32> = (0..FRAME_SIZE).map(|i| i as f32).collect();
        let mut output = [f32::NAN; FRAME_SIZE];
        let vad = denoiser.process_frame(&input, &mut output).unwrap();
        assert_eq!(vad, 0.75);
        assert_eq!(denoiser.engine().calls, 1);
        for (i, &s) in output.iter().enumerate() {
            assert_eq!(s, i as f32 * 0.5);
        }
    }

    #[test]
    fn oversized_buffers_use_leading_frame_only() {
        let mut denoiser = Denoiser::with_engine(CountingEngine::default());
        let input = vec![2.0f32; FRAME_SIZE + 32];
        let mut output = vec![-1.0f32; FRAME_SIZE + 32];
        denoiser.process_frame(&input, &mut output).unwrap();
        assert!(output[..FRAME_SIZE].iter().all(|&s| s == 1.0));
        assert!(output[FRAME_SIZE..].iter().all(|&s| s == -1.0));
    }

    #[test]
    fn consecutive_frames_do_not_bleed_into_each_other() {
        let mut denoiser = Denoiser::with_engine(CountingEngine::default());
        let mut output = [0.0f32; FRAME_SIZE];

        denoiser.process_frame(&[9.0; FRAME_SIZE], &mut output).unwrap();
        let second: Vec<f32> = (0..FRAME_SIZE).map(|i| -(i as f32)).collect();
        denoiser.process_frame(&second, &mut output).unwrap();

        let seen = denoiser.engine().last_input.unwrap();
        assert_eq!(seen.as_slice(), second.as_slice());
        for (i, &s) in output.iter().enumerate() {
            assert_eq!(s, -(i as f32) * 0.5);
        }
    }

    #[test]
    fn statistics_track_processed_and_rejected_frames() {
        let mut denoiser = Denoiser::with_engine(CountingEngine::default());
        let mut output = [0.0f32; FRAME_SIZE];
        assert_eq!(denoiser.statistics(), DenoiserStats::default());

        denoiser.process_frame(&[0.0; FRAME_SIZE], &mut output).unwrap();
        denoiser.process_frame(&[0.0; FRAME_SIZE], &mut output).unwrap();
        let _ = denoiser.process_frame(&[], &mut output);

        let stats = denoiser.statistics();
        assert_eq!(stats.frames_processed, 2);
        assert_eq!(stats.frames_rejected, 1);
        assert_eq!(stats.last_vad_probability, Some(0.75));

        denoiser.reset_statistics();
        assert_eq!(denoiser.statistics(), DenoiserStats::default());
    }

    #[test]
    fn array_api_matches_slice_api() {
        let mut a = Denoiser::with_engine(CountingEngine::default());
        let mut b = Denoiser::with_engine(CountingEngine::default());
        let input = [4.0f32; FRAME_SIZE];
        let mut out_a = [0.0f32; FRAME_SIZE];
        let mut out_b = [0.0f32; FRAME_SIZE];
        let vad_a = a.process(&input, &mut out_a);
        let vad_b = b.process_frame(&input, &mut out_b).unwrap();
        assert_eq!(vad_a, vad_b);
        assert_eq!(out_a, out_b);
    }

    #[test]
    fn rnnoise_silence_is_deterministic() {
        let run = || {
            let mut denoiser = Denoiser::new(DenoiserConfig::default()).unwrap();
            let mut output = [f32::NAN; FRAME_SIZE];
            let vad = denoiser
                .process_frame(&[0.0; FRAME_SIZE], &mut output)
                .unwrap();
            (vad, output)
        };
        let (vad_a, out_a) = run();
        let (vad_b, out_b) = run();
        assert!((0.0..=1.0).contains(&vad_a), "vad {vad_a} out of range");
        assert_eq!(vad_a.to_bits(), vad_b.to_bits());
        assert_eq!(out_a.map(f32::to_bits), out_b.map(f32::to_bits));
    }

    #[test]
    fn custom_model_denoiser_processes_frames() {
        let config = DenoiserConfig::with_model_bytes(tiny_model_bytes());
        let mut denoiser = Denoiser::new(config).unwrap();
        let input: Vec<f32> = (0..FRAME_SIZE).map(|i| (i as f32 * 0.1).sin() * 4000.0).collect();
        let mut output = [f32::NAN; FRAME_SIZE];
        let vad = denoiser.process_frame(&input, &mut output).unwrap();
        assert!((0.0..=1.0).contains(&vad), "vad {vad} out of range");
        assert!(output.iter().all(|s| s.is_finite()));
        assert_eq!(denoiser.statistics().frames_processed, 1);
    }

    #[test]
    fn create_and_drop_without_processing() {
        let denoiser = Denoiser::new(DenoiserConfig::default()).unwrap();
        assert_eq!(denoiser.statistics().frames_processed, 0);
        drop(denoiser);
    }
}
