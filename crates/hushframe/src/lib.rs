//! Fixed-frame bridge to an RNNoise-style streaming denoiser.
//!
//! A [`Denoiser`] owns one engine instance and denoises 480-sample frames
//! (10 ms at 48 kHz), returning a voice-activity probability per frame.
//! With the `ffi` feature the same contract is exported as a C ABI in
//! [`ffi`], for callers that manage the handle's lifetime themselves.
//!
//! # Quick Start
//!
//! ```
//! use hushframe::{Denoiser, DenoiserConfig, FRAME_SIZE};
//!
//! let mut denoiser = Denoiser::new(DenoiserConfig::default())?;
//!
//! // For each 10 ms frame of 48 kHz mono audio in the i16 range:
//! let input = [0.0f32; FRAME_SIZE];
//! let mut output = [0.0f32; FRAME_SIZE];
//! let vad = denoiser.process_frame(&input, &mut output)?;
//! # let _ = vad;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
mod denoiser;
pub mod engine;
mod error;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod frame;
pub mod stats;

// Public re-exports.
pub use config::DenoiserConfig;
pub use denoiser::Denoiser;
pub use engine::{FrameDenoiser, RnnoiseEngine};
pub use error::{Error, FrameError};
pub use frame::{FRAME_SIZE, Frame, SAMPLE_RATE_HZ};
pub use stats::DenoiserStats;
