//! Microphone permission checks with fail-safe defaults.
//!
//! Permission lookups never surface platform errors. A failed lookup
//! resolves to the most conservative answer (`false`, `prompt`) and is
//! marked as [`FailSafe::Defaulted`] so callers can tell the difference.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::platform::{CaptureStream, MediaPlatform, PermissionState};

/// Permission snapshot for the devices the board uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionStatus {
    /// Microphone permission.
    pub microphone: PermissionState,
}

impl PermissionStatus {
    /// Status used when the platform cannot be asked.
    pub const FAIL_SAFE: Self = Self {
        microphone: PermissionState::Prompt,
    };
}

/// Outcome of a lookup that falls back to a safe value on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailSafe<T> {
    /// The platform answered.
    Resolved(T),
    /// The platform failed; `value` is the conservative default.
    Defaulted {
        /// Fallback value.
        value: T,
        /// Why the platform could not answer.
        reason: String,
    },
}

impl<T> FailSafe<T> {
    /// The resolved or default value.
    #[must_use]
    pub const fn value(&self) -> &T {
        match self {
            Self::Resolved(value) | Self::Defaulted { value, .. } => value,
        }
    }

    /// Take the resolved or default value.
    #[must_use]
    pub fn into_value(self) -> T {
        match self {
            Self::Resolved(value) | Self::Defaulted { value, .. } => value,
        }
    }

    /// Whether the fallback was used.
    #[must_use]
    pub const fn is_defaulted(&self) -> bool {
        matches!(self, Self::Defaulted { .. })
    }

    /// Failure reason, if the fallback was used.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Resolved(_) => None,
            Self::Defaulted { reason, .. } => Some(reason),
        }
    }
}

/// Requests and inspects microphone permission.
#[derive(Debug, Clone)]
pub struct PermissionManager<P> {
    platform: P,
}

impl<P: MediaPlatform> PermissionManager<P> {
    /// Create a manager over a platform.
    #[must_use]
    pub fn new(platform: P) -> Self {
        Self { platform }
    }

    /// Prompt for the microphone, release it straight away and report
    /// whether access was granted.
    pub async fn request_microphone_permission(&self) -> FailSafe<bool> {
        match self.platform.acquire_microphone().await {
            Ok(mut stream) => {
                stream.release();
                debug!("microphone permission granted");
                FailSafe::Resolved(true)
            }
            Err(e) => {
                warn!(error = %e, "microphone permission request failed, reporting denied");
                FailSafe::Defaulted {
                    value: false,
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Read the current permission state without prompting.
    pub async fn get_permission_status(&self) -> FailSafe<PermissionStatus> {
        match self.platform.query_microphone_permission().await {
            Ok(microphone) => FailSafe::Resolved(PermissionStatus { microphone }),
            Err(e) => {
                warn!(error = %e, "permission query failed, reporting prompt");
                FailSafe::Defaulted {
                    value: PermissionStatus::FAIL_SAFE,
                    reason: e.to_string(),
                }
            }
        }
    }
}
