//! Denoiser configuration.
//!
//! The configuration is forwarded to the engine unchanged. The bridge does
//! not interpret the model bytes; the engine decides whether they are valid.

/// Configuration for creating a [`Denoiser`](crate::Denoiser).
///
/// # Example
///
/// ```
/// use hushframe::config::{DenoiserConfig, ModelSource};
///
/// let config = DenoiserConfig::default();
/// assert_eq!(config.model, ModelSource::Builtin);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DenoiserConfig {
    /// Which model weights to load (default: [`ModelSource::Builtin`]).
    pub model: ModelSource,
}

/// Where the engine's neural network weights come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModelSource {
    /// The weights compiled into the engine.
    #[default]
    Builtin,
    /// Serialized RNNoise weights, as written by the RNNoise training tools.
    Bytes(Vec<u8>),
}

impl DenoiserConfig {
    /// Configuration that loads the given serialized model.
    pub fn with_model_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            model: ModelSource::Bytes(bytes.into()),
        }
    }
}

impl ModelSource {
    /// Short label used in log output.
    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Builtin => "builtin",
            Self::Bytes(_) => "custom",
        }
    }
}
