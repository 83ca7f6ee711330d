//! # Voice Board Demo
//!
//! Small Axum host that serves a page with the voice board mounted.
//!
//! ```bash
//! cargo run -p board-demo -- --port 5173
//! ```
//!
//! - `GET /` - demo page
//! - `GET /health/live` - liveness probe

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]

pub mod page;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Html, routing::get, Router};
use clap::Parser;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use voice_board::VoiceBoardProps;

/// Default port for the demo server.
pub const DEFAULT_PORT: u16 = 5173;

/// Command-line arguments for board-demo.
#[derive(Debug, Clone, Parser)]
#[command(name = "board-demo")]
#[command(about = "Voice Board Canvas demo server")]
#[command(version)]
pub struct CliArgs {
    /// Address to bind
    #[arg(long, env = "BOARD_DEMO_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "BOARD_DEMO_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Render the board with voice input disabled
    #[arg(long)]
    pub disable_voice: bool,

    /// Render the board with developer tools disabled
    #[arg(long)]
    pub disable_dev_tools: bool,
}

/// Demo server configuration.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Socket address to bind.
    pub addr: SocketAddr,
    /// Props for the mounted board.
    pub board: VoiceBoardProps,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), DEFAULT_PORT),
            board: page::demo_board_props(true, true),
        }
    }
}

impl From<CliArgs> for DemoConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            addr: SocketAddr::new(args.host, args.port),
            board: page::demo_board_props(!args.disable_voice, !args.disable_dev_tools),
        }
    }
}

/// Build the demo router.
pub fn router(config: &DemoConfig) -> Router {
    let page: Arc<str> = page::render_page(&config.board).into();

    Router::new()
        .route("/", get(index_handler))
        .route("/health/live", get(liveness))
        .with_state(page)
        // Request ID for tracing correlation
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Serve the pre-rendered demo page.
async fn index_handler(State(page): State<Arc<str>>) -> Html<String> {
    Html(page.to_string())
}

/// Liveness probe - is the server running?
#[tracing::instrument(name = "liveness_probe")]
async fn liveness() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
            .await
            .expect("response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, String::from_utf8(bytes.to_vec()).expect("utf8"))
    }

    #[tokio::test]
    async fn test_index_serves_mounted_board() {
        let (status, body) = get_body(router(&DemoConfig::default()), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"<div class="voice-board""#));
        assert!(body.contains("Voice: ✅ Enabled"));
        assert!(body.contains("Dev Tools: ✅ Enabled"));
        assert!(body.contains("height: 600px"));
    }

    #[tokio::test]
    async fn test_flags_flow_from_cli() {
        let args = CliArgs::parse_from(["board-demo", "--disable-voice"]);
        let config = DemoConfig::from(args);
        let (_, body) = get_body(router(&config), "/").await;

        assert!(body.contains("Voice: ❌ Disabled"));
        assert!(body.contains("Dev Tools: ✅ Enabled"));
    }

    #[tokio::test]
    async fn test_liveness() {
        let (status, _) = get_body(router(&DemoConfig::default()), "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_request_id_propagated() {
        let response = router(&DemoConfig::default())
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_unknown_route_not_found() {
        let (status, _) = get_body(router(&DemoConfig::default()), "/missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_cli_defaults() {
        let args = CliArgs::parse_from(["board-demo"]);
        assert_eq!(args.port, DEFAULT_PORT);
        assert!(!args.disable_voice);
        let config = DemoConfig::from(args);
        assert_eq!(config.addr.to_string(), "127.0.0.1:5173");
    }
}
