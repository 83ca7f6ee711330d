//! Recognized voice commands.

use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// A transcribed command together with the intent it was classified as.
///
/// Produced by a speech pipeline outside this workspace; nothing here
/// interprets `intent` or `parameters`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceCommand {
    /// Unique identifier.
    pub id: String,
    /// Raw command text.
    pub command: String,
    /// Intent label.
    pub intent: String,
    /// Intent parameters.
    #[serde(default)]
    pub parameters: HashMap<String, serde_json::Value>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
}

impl VoiceCommand {
    /// Create a command stamped with the current time.
    #[must_use]
    pub fn new(command: impl Into<String>, intent: impl Into<String>) -> Self {
        Self {
            id: crate::new_id(),
            command: command.into(),
            intent: intent.into(),
            parameters: HashMap::new(),
            timestamp: now_millis(),
        }
    }

    /// Attach a parameter.
    #[must_use]
    pub fn with_parameter(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.parameters.insert(key.into(), value);
        self
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}
