//! Canvas elements and animation settings.

use serde::{Deserialize, Serialize};

use crate::geometry::{Bounds, Position, Size};

/// An item placed on the canvas.
///
/// `kind` is a free-form tag (`"array"`, `"node"`, ...) and `data` an opaque
/// payload interpreted by whichever component renders the element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasElement {
    /// Unique identifier.
    pub id: String,
    /// Element type tag.
    #[serde(rename = "type")]
    pub kind: String,
    /// Top-left corner.
    pub position: Position,
    /// Extent.
    pub size: Size,
    /// Opaque payload.
    pub data: serde_json::Value,
}

impl CanvasElement {
    /// Create an element with a freshly allocated id.
    #[must_use]
    pub fn new(
        kind: impl Into<String>,
        position: Position,
        size: Size,
        data: serde_json::Value,
    ) -> Self {
        Self {
            id: crate::new_id(),
            kind: kind.into(),
            position,
            size,
            data,
        }
    }

    /// Bounds covered by this element.
    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        Bounds::from_parts(self.position, self.size)
    }
}

/// Timing for a canvas animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Duration in milliseconds.
    pub duration: f64,
    /// Easing function name.
    pub easing: String,
    /// Start delay in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_element_new_assigns_unique_ids() {
        let a = CanvasElement::new("array", Position::default(), Size::default(), json!(null));
        let b = CanvasElement::new("array", Position::default(), Size::default(), json!(null));
        assert_ne!(a.id, b.id);
        assert!(!a.id.is_empty());
    }

    #[test]
    fn test_element_type_field_name() {
        let element = CanvasElement {
            id: "el-1".to_string(),
            kind: "array".to_string(),
            position: Position::new(5.0, 6.0),
            size: Size::new(7.0, 8.0),
            data: json!({"values": [1, 2, 3]}),
        };

        let value = serde_json::to_value(&element).expect("should serialize");
        assert_eq!(value["type"], "array");
        assert_eq!(value["position"]["x"], 5.0);
        assert_eq!(value["data"]["values"][2], 3);

        let back: CanvasElement = serde_json::from_value(value).expect("should deserialize");
        assert_eq!(back, element);
    }

    #[test]
    fn test_element_bounds() {
        let element = CanvasElement::new(
            "node",
            Position::new(10.0, 10.0),
            Size::new(20.0, 20.0),
            json!({}),
        );
        assert!(element.bounds().contains(Position::new(15.0, 15.0)));
    }

    #[test]
    fn test_animation_delay_optional() {
        let config: AnimationConfig =
            serde_json::from_str(r#"{"duration": 300, "easing": "ease-in"}"#)
                .expect("should deserialize");
        assert!(config.delay.is_none());

        let json = serde_json::to_string(&config).expect("should serialize");
        assert!(!json.contains("delay"));
    }
}
