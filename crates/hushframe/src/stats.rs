//! Per-handle processing statistics.

/// Counters kept by a [`Denoiser`](crate::Denoiser).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DenoiserStats {
    /// Frames handed to the engine.
    pub frames_processed: u64,
    /// Frames refused because a buffer was shorter than one frame.
    pub frames_rejected: u64,
    /// VAD probability returned for the most recent processed frame.
    ///
    /// `None` until the first frame has been processed.
    pub last_vad_probability: Option<f32>,
}
