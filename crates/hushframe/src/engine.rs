//! The denoising engine seam.
//!
//! The neural model and its DSP are not part of this crate. They are reached
//! through [`FrameDenoiser`], a single-frame processing call on state owned by
//! the implementation. [`RnnoiseEngine`] backs it with `nnnoiseless`.

use nnnoiseless::{DenoiseState, RnnModel};

use crate::config::{DenoiserConfig, ModelSource};
use crate::error::Error;
use crate::frame::{FRAME_SIZE, Frame};

const _: () = assert!(DenoiseState::<'static>::FRAME_SIZE == FRAME_SIZE);

/// A stateful, frame-oriented noise suppressor.
///
/// Implementations carry their own filter history and recurrent state from
/// one call to the next. Callers serialize access through `&mut self`.
pub trait FrameDenoiser: Send {
    /// Denoise `input` into `output` and return the frame's voice-activity
    /// probability.
    fn process(&mut self, output: &mut Frame, input: &Frame) -> f32;
}

impl<E: FrameDenoiser + ?Sized> FrameDenoiser for Box<E> {
    #[inline]
    fn process(&mut self, output: &mut Frame, input: &Frame) -> f32 {
        (**self).process(output, input)
    }
}

/// RNNoise engine, backed by the pure-Rust `nnnoiseless` port.
#[derive(derive_more::Debug)]
pub struct RnnoiseEngine {
    #[debug(skip)]
    state: Box<DenoiseState<'static>>,
}

impl RnnoiseEngine {
    /// Instantiate the engine described by `config`.
    pub fn new(config: &DenoiserConfig) -> Result<Self, Error> {
        let state = match &config.model {
            ModelSource::Builtin => DenoiseState::new(),
            ModelSource::Bytes(bytes) => {
                let model = RnnModel::from_bytes(bytes)
                    .ok_or(Error::InvalidModel { len: bytes.len() })
                    .inspect_err(|err| tracing::warn!(%err, "rejecting model weights"))?;
                DenoiseState::from_model(model)
            }
        };
        Ok(Self { state })
    }
}

impl FrameDenoiser for RnnoiseEngine {
    #[inline]
    fn process(&mut self, output: &mut Frame, input: &Frame) -> f32 {
        self.state.process_frame(output, input)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::array;

    use super::*;

    /// Smallest well-formed model: every hidden layer one neuron wide, all
    /// weights zero.
    pub(crate) fn tiny_model_bytes() -> Vec<u8> {
        const TANH: u8 = 0;
        const SIGMOID: u8 = 1;
        let layer = |inputs: u8, neurons: u8, activation: u8, params: usize| {
            let mut bytes = vec![inputs, neurons, activation];
            bytes.resize(3 + params, 0);
            bytes
        };
        let dense = |inputs: u8, neurons: u8, activation| {
            layer(inputs, neurons, activation, (usize::from(inputs) + 1) * usize::from(neurons))
        };
        let gru = |inputs: u8, neurons: u8| {
            let (i, n) = (usize::from(inputs), usize::from(neurons));
            layer(inputs, neurons, TANH, 3 * n * (i + n + 1))
        };
        [
            dense(42, 1, TANH),
            gru(1, 1),
            gru(44, 1),
            gru(44, 1),
            dense(1, 22, SIGMOID),
            dense(1, 1, SIGMOID),
        ]
        .concat()
    }

    fn tone(phase: usize) -> Frame {
        array::from_fn(|i| ((phase + i) as f32 * 0.05).sin() * 8000.0)
    }

    #[test]
    fn builtin_engine_produces_finite_output() {
        let mut engine = RnnoiseEngine::new(&DenoiserConfig::default()).unwrap();
        let mut output = [f32::NAN; FRAME_SIZE];
        for n in 0..10 {
            let vad = engine.process(&mut output, &tone(n * FRAME_SIZE));
            assert!(vad.is_finite());
            assert!((0.0..=1.0).contains(&vad), "vad {vad} out of range");
            assert!(output.iter().all(|s| s.is_finite()));
        }
    }

    #[test]
    fn empty_model_bytes_are_rejected() {
        let err = RnnoiseEngine::new(&DenoiserConfig::with_model_bytes(Vec::new())).unwrap_err();
        assert_eq!(err, Error::InvalidModel { len: 0 });
    }

    #[test]
    fn truncated_model_bytes_are_rejected() {
        let err = RnnoiseEngine::new(&DenoiserConfig::with_model_bytes([0u8; 1])).unwrap_err();
        assert_eq!(err, Error::InvalidModel { len: 1 });
    }

    #[test]
    fn custom_model_bytes_drive_the_engine() {
        let config = DenoiserConfig::with_model_bytes(tiny_model_bytes());
        let mut engine = RnnoiseEngine::new(&config).unwrap();
        let mut output = [f32::NAN; FRAME_SIZE];
        for n in 0..4 {
            let vad = engine.process(&mut output, &tone(n * FRAME_SIZE));
            assert!((0.0..=1.0).contains(&vad), "vad {vad} out of range");
            assert!(output.iter().all(|s| s.is_finite()));
        }
    }

    #[test]
    fn trailing_model_bytes_are_rejected() {
        let mut bytes = tiny_model_bytes();
        bytes.push(0);
        let len = bytes.len();
        let err = RnnoiseEngine::new(&DenoiserConfig::with_model_bytes(bytes)).unwrap_err();
        assert_eq!(err, Error::InvalidModel { len });
    }

    #[test]
    fn boxed_engine_forwards_calls() {
        let mut engine: Box<dyn FrameDenoiser> =
            Box::new(RnnoiseEngine::new(&DenoiserConfig::default()).unwrap());
        let mut output = [f32::NAN; FRAME_SIZE];
        let vad = engine.process(&mut output, &[0.0; FRAME_SIZE]);
        assert!(vad.is_finite());
        assert!(output.iter().all(|s| s.is_finite()));
    }
}
