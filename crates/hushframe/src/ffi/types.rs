//! C-compatible types exported through the `hf_*` API.

use std::ptr;

use crate::denoiser::Denoiser;

/// Opaque denoiser handle.
///
/// Created by `hf_create` or `hf_create_with_config`, released by
/// `hf_destroy`.
#[derive(Debug)]
pub struct HfDenoiser {
    pub(crate) inner: Denoiser,
}

/// Status code returned by the checked entry points.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HfError {
    /// Success.
    None = 0,
    /// The handle was `NULL`.
    NullHandle = -1,
    /// An input, output or out-parameter pointer was `NULL`.
    NullPointer = -2,
    /// The input buffer holds fewer than 480 samples.
    InputTooShort = -3,
    /// The output buffer holds fewer than 480 samples.
    OutputTooShort = -4,
}

/// Creation parameters.
///
/// A `NULL` `model_data` or a zero `model_len` selects the builtin model.
/// Otherwise `model_data` must point to `model_len` readable bytes of
/// serialized RNNoise weights for the duration of the create call.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct HfConfig {
    pub model_data: *const u8,
    pub model_len: usize,
}

impl Default for HfConfig {
    fn default() -> Self {
        Self {
            model_data: ptr::null(),
            model_len: 0,
        }
    }
}

/// Per-handle counters.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HfStats {
    pub frames_processed: u64,
    pub frames_rejected: u64,
    pub has_last_vad_probability: bool,
    pub last_vad_probability: f32,
}
