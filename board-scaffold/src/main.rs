//! # create-feature
//!
//! Scaffold a new UI feature inside a package.
//!
//! ```bash
//! create-feature array-element packages/canvas
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use board_scaffold::create_feature;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const USAGE: &str = "Usage: create-feature <feature-name> <package-path>";
const EXAMPLE: &str = "Example: create-feature array-element packages/canvas";

/// Command-line arguments for create-feature.
///
/// Both positionals are optional so a missing one prints our own usage and
/// exits with status 1.
#[derive(Debug, Parser)]
#[command(name = "create-feature")]
#[command(about = "Scaffold a component, types file and test stub for a new feature")]
#[command(version)]
struct CliArgs {
    /// Kebab-case feature name (e.g. array-element)
    feature_name: Option<String>,

    /// Package directory the feature is created in (e.g. packages/canvas)
    package_path: Option<PathBuf>,

    /// Anything after the package path is ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _rest: Vec<String>,
}

/// Log to stderr so stdout carries only the user-facing messages.
///
/// Set `RUST_LOG` to control log levels (default: warn).
/// Set `RUST_LOG_FORMAT=json` for JSON output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

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

fn main() -> ExitCode {
    init_tracing();

    let args = CliArgs::parse();
    let (Some(feature_name), Some(package_path)) = (args.feature_name, args.package_path) else {
        println!("{USAGE}");
        println!("{EXAMPLE}");
        return ExitCode::FAILURE;
    };

    match create_feature(&feature_name, &package_path) {
        Ok(files) => {
            tracing::info!("Scaffolded {}", files.directory.display());
            println!("✅ Created feature: {feature_name}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error creating feature: {e}");
            ExitCode::FAILURE
        }
    }
}
