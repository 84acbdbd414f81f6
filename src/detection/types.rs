use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    Button,
    Text,
    Icon,
    Input,
}

/// One detected on-screen element. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UIComponent {
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub text: String,
    /// In [0, 1].
    pub confidence: f32,
    /// [x, y, w, h] in pixel coordinates of the source frame.
    pub bbox: [u32; 4],
    /// Identifier of the frame this was observed on; tagged by the
    /// aggregator, absent until then.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame: Option<String>,
}

impl UIComponent {
    pub fn new(component_type: ComponentType, text: &str, confidence: f32, bbox: [u32; 4]) -> Self {
        Self {
            component_type,
            text: text.to_string(),
            confidence,
            bbox,
            frame: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_legacy_field_names() {
        let component = UIComponent::new(ComponentType::Button, "Submit", 0.99, [10, 10, 50, 20]);
        let json = serde_json::to_value(&component).unwrap();
        assert_eq!(json["type"], "button");
        assert_eq!(json["bbox"], serde_json::json!([10, 10, 50, 20]));
        assert!(json.get("frame").is_none());
    }
}
