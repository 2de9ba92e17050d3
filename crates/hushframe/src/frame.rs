//! The fixed-size frame contract.
//!
//! Every buffer that crosses the bridge holds exactly one frame of
//! [`FRAME_SIZE`] samples: 10 ms of mono audio at 48 kHz. Samples use the
//! 16-bit PCM range (`-32768.0..=32767.0`), which is the scale the RNNoise
//! model was trained on.

/// Samples per frame (10 ms at 48 kHz).
pub const FRAME_SIZE: usize = 480;

/// Sample rate the denoiser model operates at, in Hz.
pub const SAMPLE_RATE_HZ: u32 = 48_000;

/// One frame of audio.
pub type Frame = [f32; FRAME_SIZE];

/// Borrow the leading frame of `samples`.
///
/// Returns `None` when `samples` is shorter than [`FRAME_SIZE`]. Anything
/// past the first frame is ignored.
#[inline]
pub fn split_frame(samples: &[f32]) -> Option<&Frame> {
    samples.first_chunk::<FRAME_SIZE>()
}

/// Mutable counterpart of [`split_frame`].
#[inline]
pub fn split_frame_mut(samples: &mut [f32]) -> Option<&mut Frame> {
    samples.first_chunk_mut::<FRAME_SIZE>()
}
