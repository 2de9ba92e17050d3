//! Error types.

use crate::frame::FRAME_SIZE;

/// Error returned when a [`Denoiser`](crate::Denoiser) cannot be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The serialized model weights could not be parsed.
    #[error("model data ({len} bytes) is not a valid RNNoise model")]
    InvalidModel {
        /// Length of the rejected model data in bytes.
        len: usize,
    },
}

/// A frame buffer violated the fixed-size frame contract.
///
/// When this is returned, the engine was not invoked and the output buffer
/// was not written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    /// The input buffer holds fewer than [`FRAME_SIZE`] samples.
    #[error("input holds {len} samples; at least {min} are required", min = FRAME_SIZE)]
    InputTooShort {
        /// Length of the rejected input buffer.
        len: usize,
    },
    /// The output buffer holds fewer than [`FRAME_SIZE`] samples.
    #[error("output holds {len} samples; at least {min} are required", min = FRAME_SIZE)]
    OutputTooShort {
        /// Length of the rejected output buffer.
        len: usize,
    },
}
