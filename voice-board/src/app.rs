//! Application root.

use crate::board::{VoiceBoard, VoiceBoardProps};

/// Root component: a [`VoiceBoard`] with the given props.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct App {
    board: VoiceBoard,
}

impl App {
    /// Create the app.
    #[must_use]
    pub fn new(props: VoiceBoardProps) -> Self {
        Self {
            board: VoiceBoard::new(props),
        }
    }

    /// The mounted board.
    #[must_use]
    pub const fn board(&self) -> &VoiceBoard {
        &self.board
    }

    /// Render to HTML.
    #[must_use]
    pub fn render_html(&self) -> String {
        self.board.render_html()
    }
}
