//! Conversions between C API types and Rust types.

use std::slice;

use crate::config::{DenoiserConfig, ModelSource};
use crate::error::FrameError;
use crate::stats::DenoiserStats;

use super::types::{HfConfig, HfError, HfStats};

impl HfConfig {
    /// Convert to an owned Rust [`DenoiserConfig`], copying any model bytes.
    ///
    /// # Safety
    ///
    /// If `model_data` is non-null and `model_len` is non-zero, `model_data`
    /// must point to `model_len` readable bytes.
    pub(crate) unsafe fn to_rust(self) -> DenoiserConfig {
        if self.model_data.is_null() || self.model_len == 0 {
            return DenoiserConfig::default();
        }
        // SAFETY: non-null and sized per the caller's contract.
        let bytes = unsafe { slice::from_raw_parts(self.model_data, self.model_len) };
        DenoiserConfig::with_model_bytes(bytes)
    }

    /// Borrowing view of a Rust config. The result is only valid while
    /// `config` is alive and unmodified.
    pub(crate) fn from_rust(config: &DenoiserConfig) -> Self {
        match &config.model {
            ModelSource::Builtin => Self::default(),
            ModelSource::Bytes(bytes) => Self {
                model_data: bytes.as_ptr(),
                model_len: bytes.len(),
            },
        }
    }
}

impl HfStats {
    pub(crate) fn from_rust(stats: &DenoiserStats) -> Self {
        Self {
            frames_processed: stats.frames_processed,
            frames_rejected: stats.frames_rejected,
            has_last_vad_probability: stats.last_vad_probability.is_some(),
            last_vad_probability: stats.last_vad_probability.unwrap_or(0.0),
        }
    }
}

impl From<FrameError> for HfError {
    fn from(err: FrameError) -> Self {
        match err {
            FrameError::InputTooShort { .. } => Self::InputTooShort,
            FrameError::OutputTooShort { .. } => Self::OutputTooShort,
        }
    }
}

impl HfError {
    /// Static NUL-terminated description.
    pub(crate) fn message(self) -> &'static [u8] {
        match self {
            Self::None => b"success\0",
            Self::NullHandle => b"null denoiser handle\0",
            Self::NullPointer => b"null buffer pointer\0",
            Self::InputTooShort => b"input buffer shorter than one frame\0",
            Self::OutputTooShort => b"output buffer shorter than one frame\0",
        }
    }
}
