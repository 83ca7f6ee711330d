//! The demo page.

use std::fmt::Write;

use voice_board::{App, Dimension, VoiceBoardProps};

const STYLESHEET: &str = "\
body { margin: 0; font-family: system-ui, sans-serif; background: #f5f5f5; color: #222; }
.demo-app { max-width: 1100px; margin: 0 auto; padding: 2rem 1rem; }
.demo-header { text-align: center; margin-bottom: 2rem; }
.demo-header h1 { margin: 0 0 0.5rem; }
.demo-header p { margin: 0; color: #555; }
.demo-main { margin-bottom: 2rem; }
.demo-footer { text-align: center; font-size: 0.85em; color: #888; }
.array-element { display: flex; gap: 4px; }
.array-cell { min-width: 40px; padding: 8px; border: 1px solid #ccc; text-align: center; cursor: pointer; }
.array-cell.selected { border-color: #1976d2; background: #e3f2fd; }
";

/// Props the demo mounts the board with: full width, 600px tall.
#[must_use]
pub fn demo_board_props(enable_voice: bool, enable_dev_tools: bool) -> VoiceBoardProps {
    VoiceBoardProps {
        width: Dimension::from("100%"),
        height: Dimension::from("600px"),
        enable_voice,
        enable_dev_tools,
        ..VoiceBoardProps::default()
    }
}

/// Render the full demo document with the board mounted.
#[must_use]
pub fn render_page(board: &VoiceBoardProps) -> String {
    let app = App::new(board.clone());

    let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>Voice Board Canvas - Demo</title>\n");
    let _ = writeln!(html, "<style>\n{STYLESHEET}</style>");
    html.push_str("</head>\n<body>\n<div id=\"root\"><div class=\"demo-app\">\n");
    html.push_str(concat!(
        "<header class=\"demo-header\">",
        "<h1>🎯 Voice Board Canvas - Demo</h1>",
        "<p>Interactive voice-driven educational tool for teaching data structures</p>",
        "</header>\n"
    ));
    let _ = writeln!(html, "<main class=\"demo-main\">{}</main>", app.render_html());
    let _ = writeln!(
        html,
        "<footer class=\"demo-footer\"><p>Built with Rust, Axum and serde - v{}</p></footer>",
        voice_board::VERSION
    );
    html.push_str("</div></div>\n</body>\n</html>\n");
    html
}
