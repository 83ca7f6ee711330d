//! # Voice Board Demo Server
//!
//! Serves the demo page with the voice board mounted.

use board_demo::{router, CliArgs, DemoConfig};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured tracing with optional JSON format.
///
/// Set `RUST_LOG` to control log levels (default: info,board_demo=debug,tower_http=debug).
/// Set `RUST_LOG_FORMAT=json` for JSON output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,board_demo=debug,tower_http=debug"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true);

    if std::env::var("RUST_LOG_FORMAT").as_deref() == Ok("json") {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = DemoConfig::from(CliArgs::parse());
    tracing::debug!(
        "Board props: voice={} dev_tools={}",
        config.board.enable_voice,
        config.board.enable_dev_tools
    );

    let app = router(&config);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;

    tracing::info!("Voice Board demo starting on http://{}", config.addr);
    axum::serve(listener, app).await?;

    Ok(())
}
