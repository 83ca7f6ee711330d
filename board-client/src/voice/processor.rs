//! Post-processing hooks for recorded audio.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::blob::AudioBlob;

/// Processing switches. Not applied yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioProcessorOptions {
    /// Request noise reduction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noise_reduction: Option<bool>,
    /// Request automatic gain control.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gain_control: Option<bool>,
}

/// Extension point for noise reduction, gain control and transcoding.
///
/// Both operations currently hand the input back untouched.
#[derive(Debug, Clone, Default)]
pub struct AudioProcessor {
    options: AudioProcessorOptions,
}

impl AudioProcessor {
    /// Create a processor.
    #[must_use]
    pub fn new(options: AudioProcessorOptions) -> Self {
        Self { options }
    }

    /// Configured switches.
    #[must_use]
    pub const fn options(&self) -> &AudioProcessorOptions {
        &self.options
    }

    /// Apply the configured processing.
    #[must_use]
    pub fn process_audio(&self, audio: AudioBlob) -> AudioBlob {
        trace!(bytes = audio.len(), options = ?self.options, "process_audio passthrough");
        audio
    }

    /// Convert to another container format.
    #[must_use]
    pub fn convert_to_format(&self, audio: AudioBlob, format: &str) -> AudioBlob {
        trace!(bytes = audio.len(), format, "convert_to_format passthrough");
        audio
    }
}
