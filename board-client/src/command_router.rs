//! Client for the server-side command router.
//!
//! Posts a [`CommandRequest`] to `/api/commands` and hands back the
//! router's [`CommandResponse`]. Transport, status and decoding failures
//! are folded into a failed response so callers only ever branch on
//! `success`.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::error::{ClientError, ClientResult};

/// Path of the command endpoint, relative to the router base URL.
pub const COMMANDS_PATH: &str = "/api/commands";

#[cfg(not(target_arch = "wasm32"))]
const USER_AGENT: &str = concat!("board-client/", env!("CARGO_PKG_VERSION"));

/// A command sent to the router.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandRequest {
    /// Command identifier.
    pub command: String,
    /// Optional opaque payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl CommandRequest {
    /// Create a request without a payload.
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            payload: None,
        }
    }

    /// Attach a payload.
    #[must_use]
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// The router's answer to a command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandResponse {
    /// Whether the command succeeded.
    pub success: bool,
    /// Optional result data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Error message when `success` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CommandResponse {
    /// A successful response carrying `data`.
    #[must_use]
    pub fn ok(data: Option<Value>) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }

    /// A failed response with an error message.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// HTTP client for the command router.
#[derive(Debug, Clone)]
pub struct CommandRouterClient {
    http: Client,
    endpoint: Url,
}

impl CommandRouterClient {
    /// Create a client for the router at `base_url`.
    ///
    /// Any path on `base_url` is kept as a prefix, so
    /// `http://host/board` posts to `http://host/board/api/commands`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the URL is malformed.
    /// Returns [`ClientError::Http`] if the HTTP client fails to build.
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.user_agent(USER_AGENT);
        let http = builder.build()?;
        Self::with_client(base_url, http)
    }

    /// Create a client that reuses an existing [`reqwest::Client`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the URL is malformed.
    pub fn with_client(base_url: &str, http: Client) -> ClientResult<Self> {
        let endpoint = resolve_endpoint(base_url)?;
        Ok(Self { http, endpoint })
    }

    /// The fully resolved command endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Send a command to the router.
    ///
    /// Makes exactly one request. Never fails: any error is reported as a
    /// response with `success = false` and a non-empty `error`.
    pub async fn send_command(&self, request: &CommandRequest) -> CommandResponse {
        match self.post(request).await {
            Ok(response) => {
                debug!(command = %request.command, success = response.success, "command routed");
                response
            }
            Err(e) => {
                warn!(command = %request.command, error = %e, "command failed");
                CommandResponse::failure(e.to_string())
            }
        }
    }

    async fn post(&self, request: &CommandRequest) -> ClientResult<CommandResponse> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

fn resolve_endpoint(base_url: &str) -> ClientResult<Url> {
    let mut base = Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
    if base.cannot_be_a_base() {
        return Err(ClientError::InvalidUrl(format!(
            "{base_url} cannot be used as a base URL"
        )));
    }

    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join(COMMANDS_PATH.trim_start_matches('/'))
        .map_err(|e| ClientError::InvalidUrl(e.to_string()))
}
