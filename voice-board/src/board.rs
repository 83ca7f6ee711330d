//! The voice board container.

use std::fmt::Write;

use board_canvas::html::{class_list, escape};
use serde::{Deserialize, Serialize};

/// A CSS length: a bare number means pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    /// Length in pixels.
    Pixels(f64),
    /// Any CSS length (`"100%"`, `"400px"`, `"50vh"`).
    Css(String),
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pixels(n) => write!(f, "{n}px"),
            Self::Css(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Dimension {
    fn from(s: &str) -> Self {
        Self::Css(s.to_string())
    }
}

impl From<f64> for Dimension {
    fn from(n: f64) -> Self {
        Self::Pixels(n)
    }
}

/// Props for [`VoiceBoard`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VoiceBoardProps {
    /// Container width.
    pub width: Dimension,
    /// Container height.
    pub height: Dimension,
    /// Whether voice input is enabled.
    pub enable_voice: bool,
    /// Whether developer tools are enabled.
    pub enable_dev_tools: bool,
    /// Extra CSS classes.
    pub class_name: Option<String>,
    /// Extra style declarations (`property`, `value`); these override the
    /// container defaults. Serialized as a JSON object in declaration order.
    #[serde(with = "style_map")]
    pub style: Vec<(String, String)>,
}

impl Default for VoiceBoardProps {
    fn default() -> Self {
        Self {
            width: Dimension::from("100%"),
            height: Dimension::from("400px"),
            enable_voice: true,
            enable_dev_tools: false,
            class_name: None,
            style: Vec::new(),
        }
    }
}

/// Container that will host the canvas and voice controls.
///
/// Currently renders a status panel reflecting its two feature flags.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VoiceBoard {
    props: VoiceBoardProps,
}

impl VoiceBoard {
    /// Create a board.
    #[must_use]
    pub fn new(props: VoiceBoardProps) -> Self {
        Self { props }
    }

    /// The board's props.
    #[must_use]
    pub const fn props(&self) -> &VoiceBoardProps {
        &self.props
    }

    /// Status text, one line per flag.
    #[must_use]
    pub fn status_lines(&self) -> [String; 2] {
        [
            format!("Voice: {}", enabled_label(self.props.enable_voice)),
            format!("Dev Tools: {}", enabled_label(self.props.enable_dev_tools)),
        ]
    }

    /// Inline style for the container, defaults first, overrides applied.
    #[must_use]
    pub fn container_style(&self) -> String {
        let mut declarations: Vec<(String, String)> = vec![
            ("width".into(), self.props.width.to_string()),
            ("height".into(), self.props.height.to_string()),
            ("border".into(), "1px solid #e0e0e0".into()),
            ("border-radius".into(), "8px".into()),
            ("background".into(), "#ffffff".into()),
            ("display".into(), "flex".into()),
            ("align-items".into(), "center".into()),
            ("justify-content".into(), "center".into()),
        ];

        for (property, value) in &self.props.style {
            match declarations.iter_mut().find(|(p, _)| p == property) {
                Some(existing) => existing.1.clone_from(value),
                None => declarations.push((property.clone(), value.clone())),
            }
        }

        declarations
            .iter()
            .map(|(p, v)| format!("{p}: {v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Render to HTML.
    #[must_use]
    pub fn render_html(&self) -> String {
        let class = class_list("voice-board", [self.props.class_name.as_deref()]);
        let mut html = String::new();
        let _ = write!(
            html,
            r#"<div class="{}" style="{}">"#,
            escape(&class),
            escape(&self.container_style())
        );
        html.push_str(r#"<div style="text-align: center; color: #666">"#);
        html.push_str("<h3>🎯 Voice Board Canvas</h3>");
        let _ = write!(
            html,
            "<p>Voice: {}</p><p>Dev Tools: {}</p>",
            marked_label(self.props.enable_voice),
            marked_label(self.props.enable_dev_tools)
        );
        html.push_str(
            r#"<p style="font-size: 0.9em; margin-top: 1rem">Interactive canvas will be implemented here</p>"#,
        );
        html.push_str("</div></div>");
        html
    }
}

/// Style declarations as a JSON object, keeping the order properties were
/// written in. Numeric values are accepted and printed as-is.
mod style_map {
    use std::fmt;

    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum CssValue {
        Text(String),
        Number(f64),
    }

    pub fn serialize<S: Serializer>(
        style: &[(String, String)],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(style.len()))?;
        for (property, value) in style {
            map.serialize_entry(property, value)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<(String, String)>, D::Error> {
        deserializer.deserialize_map(StyleVisitor)
    }

    struct StyleVisitor;

    impl<'de> Visitor<'de> for StyleVisitor {
        type Value = Vec<(String, String)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an object of CSS properties")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut style = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((property, value)) = access.next_entry::<String, CssValue>()? {
                let value = match value {
                    CssValue::Text(text) => text,
                    CssValue::Number(n) => n.to_string(),
                };
                style.push((property, value));
            }
            Ok(style)
        }
    }
}

const fn enabled_label(enabled: bool) -> &'static str {
    if enabled {
        "Enabled"
    } else {
        "Disabled"
    }
}

const fn marked_label(enabled: bool) -> &'static str {
    if enabled {
        "✅ Enabled"
    } else {
        "❌ Disabled"
    }
}
