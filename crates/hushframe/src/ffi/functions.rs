//! `extern "C"` entry points.
//!
//! Handles are not tracked: passing a destroyed handle, or using one handle
//! from two threads at once, is undefined behavior. `NULL` handles are
//! always safe and turn into sentinels or no-ops.

use std::ffi::c_char;
use std::ptr;

use tracing::debug;

use crate::denoiser::Denoiser;
use crate::frame::{FRAME_SIZE, Frame};

use super::types::{HfConfig, HfDenoiser, HfError, HfStats};

/// VAD score returned by [`hf_process_frame`] when a call is refused.
pub const HF_SENTINEL_VAD: f32 = 0.0;

/// Samples per frame (always 480).
#[unsafe(no_mangle)]
pub extern "C" fn hf_frame_size() -> usize {
    FRAME_SIZE
}

/// Configuration that selects the builtin model.
#[unsafe(no_mangle)]
pub extern "C" fn hf_config_default() -> HfConfig {
    HfConfig::from_rust(&Default::default())
}

/// Create a denoiser with the builtin model.
///
/// Returns `NULL` if the engine could not be created.
#[unsafe(no_mangle)]
pub extern "C" fn hf_create() -> *mut HfDenoiser {
    // SAFETY: a null config is always accepted.
    unsafe { hf_create_with_config(ptr::null()) }
}

/// Create a denoiser from `config`, or with defaults if `config` is `NULL`.
///
/// Returns `NULL` if the engine rejects the configuration.
///
/// # Safety
///
/// `config` must be `NULL` or point to a valid [`HfConfig`] whose model
/// pointer satisfies the contract documented on that type.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn hf_create_with_config(config: *const HfConfig) -> *mut HfDenoiser {
    // SAFETY: caller guarantees `config` is null or valid.
    let config = match unsafe { config.as_ref() } {
        // SAFETY: model pointer validity is part of the caller's contract.
        Some(config) => unsafe { config.to_rust() },
        None => Default::default(),
    };
    match Denoiser::new(config) {
        Ok(inner) => {
            let handle = Box::into_raw(Box::new(HfDenoiser { inner }));
            debug!(?handle, "hf_create");
            handle
        }
        Err(err) => {
            debug!(%err, "hf_create failed");
            ptr::null_mut()
        }
    }
}

/// Release a denoiser. `NULL` is a no-op.
///
/// # Safety
///
/// `handle` must be `NULL` or a live handle from `hf_create*` that is not
/// used again afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn hf_destroy(handle: *mut HfDenoiser) {
    if handle.is_null() {
        return;
    }
    debug!(?handle, "hf_destroy");
    // SAFETY: non-null handles originate from `Box::into_raw` in
    // `hf_create_with_config` and are destroyed at most once.
    drop(unsafe { Box::from_raw(handle) });
}

/// Denoise one 480-sample frame and return its VAD probability.
///
/// Returns [`HF_SENTINEL_VAD`] without touching `output` when `handle`,
/// `input` or `output` is `NULL`, or when either length is below 480. A
/// legitimate score of exactly `0.0` looks the same; use
/// [`hf_process_frame_checked`] to tell them apart.
///
/// `input` and `output` may point to the same buffer.
///
/// # Safety
///
/// `handle` must be `NULL` or live. Non-null `input` must be readable for
/// `input_len` samples and non-null `output` writable for `output_len`
/// samples. No other call may use `handle` concurrently.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn hf_process_frame(
    handle: *mut HfDenoiser,
    input: *const f32,
    input_len: usize,
    output: *mut f32,
    output_len: usize,
) -> f32 {
    // SAFETY: forwarded caller contract.
    unsafe { process_raw(handle, input, input_len, output, output_len) }
        .unwrap_or(HF_SENTINEL_VAD)
}

/// Denoise one frame, reporting failures as a status code.
///
/// On success writes the VAD probability to `vad_out` and returns
/// [`HfError::None`]. On failure neither `output` nor `vad_out` is written.
/// A null handle is reported before any other argument; a null `vad_out`
/// on a live handle counts as a rejected frame.
///
/// # Safety
///
/// As for [`hf_process_frame`]; `vad_out` must be `NULL` or writable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn hf_process_frame_checked(
    handle: *mut HfDenoiser,
    input: *const f32,
    input_len: usize,
    output: *mut f32,
    output_len: usize,
    vad_out: *mut f32,
) -> HfError {
    if vad_out.is_null() {
        // SAFETY: caller guarantees `handle` is null or live and unshared.
        return match unsafe { handle.as_mut() } {
            Some(handle) => {
                handle.inner.count_rejected();
                HfError::NullPointer
            }
            None => HfError::NullHandle,
        };
    }
    // SAFETY: forwarded caller contract.
    match unsafe { process_raw(handle, input, input_len, output, output_len) } {
        Ok(vad) => {
            // SAFETY: checked non-null above; writable per contract.
            unsafe { vad_out.write(vad) };
            HfError::None
        }
        Err(err) => err,
    }
}

/// Copy the handle's counters into `stats`.
///
/// # Safety
///
/// `handle` must be `NULL` or live; `stats` must be `NULL` or writable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn hf_get_statistics(handle: *mut HfDenoiser, stats: *mut HfStats) -> HfError {
    // SAFETY: caller guarantees `handle` is null or live.
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return HfError::NullHandle;
    };
    if stats.is_null() {
        return HfError::NullPointer;
    }
    // SAFETY: checked non-null above; writable per contract.
    unsafe { stats.write(HfStats::from_rust(&handle.inner.statistics())) };
    HfError::None
}

/// Static, NUL-terminated description of `error`.
#[unsafe(no_mangle)]
pub extern "C" fn hf_error_message(error: HfError) -> *const c_char {
    error.message().as_ptr().cast()
}

/// Shared body of the two process entry points.
///
/// # Safety
///
/// See [`hf_process_frame`].
unsafe fn process_raw(
    handle: *mut HfDenoiser,
    input: *const f32,
    input_len: usize,
    output: *mut f32,
    output_len: usize,
) -> Result<f32, HfError> {
    // SAFETY: caller guarantees `handle` is null or live and unshared.
    let Some(handle) = (unsafe { handle.as_mut() }) else {
        return Err(HfError::NullHandle);
    };
    if input.is_null() || output.is_null() {
        handle.inner.count_rejected();
        return Err(HfError::NullPointer);
    }
    handle.inner.admit(input_len, output_len)?;

    // Raw copies so that aliased input/output never form overlapping
    // references.
    let mut frame_in: Frame = [0.0; FRAME_SIZE];
    // SAFETY: `input` is readable for `input_len >= FRAME_SIZE` samples and
    // `frame_in` is a distinct local.
    unsafe { ptr::copy_nonoverlapping(input, frame_in.as_mut_ptr(), FRAME_SIZE) };

    let mut frame_out: Frame = [0.0; FRAME_SIZE];
    let vad = handle.inner.process(&frame_in, &mut frame_out);

    // SAFETY: `output` is writable for `output_len >= FRAME_SIZE` samples and
    // `frame_out` is a distinct local.
    unsafe { ptr::copy_nonoverlapping(frame_out.as_ptr(), output, FRAME_SIZE) };
    Ok(vad)
}
