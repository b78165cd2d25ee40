use serde::{Deserialize, Serialize};

use crate::domain::ComponentId;

/// User selection sent to the configuration service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationRequest {
    pub seat_color: String,
    pub leg_style: i64,
}

impl ConfigurationRequest {
    pub fn new(seat_color: impl Into<String>, leg_style: i64) -> Self {
        Self {
            seat_color: seat_color.into(),
            leg_style,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Numbers(Vec<f64>),
    Text(String),
    /// Any other JSON shape, kept for property kinds this client does not know yet.
    Other(serde_json::Value),
}

impl PropertyValue {
    pub fn kind(&self) -> &'static str {
        match self {
            PropertyValue::Bool(_) => "boolean",
            PropertyValue::Numbers(_) => "number list",
            PropertyValue::Text(_) => "string",
            PropertyValue::Other(serde_json::Value::Null) => "null",
            PropertyValue::Other(_) => "json value",
        }
    }
}

/// An instruction sent without a `value` carries JSON `null`, which every
/// built-in handler rejects as malformed.
impl Default for PropertyValue {
    fn default() -> Self {
        PropertyValue::Other(serde_json::Value::Null)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub component_id: ComponentId,
    pub property_name: String,
    #[serde(default)]
    pub value: PropertyValue,
}

impl Instruction {
    pub fn new(
        component_id: impl Into<ComponentId>,
        property_name: impl Into<String>,
        value: PropertyValue,
    ) -> Self {
        Self {
            component_id: component_id.into(),
            property_name: property_name.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationResponse {
    pub update_list: Vec<Instruction>,
    #[serde(default)]
    pub final_price: f64,
}

/// Text written to the price display for a response's `final_price`.
pub fn price_text(final_price: f64) -> String {
    format!("Total Price: ${final_price}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_value_shapes() {
        let raw = r#"{
            "update_list": [
                {"component_id": "ALL_MESHES", "property_name": "baseColorFactor", "value": [0, 0, 1, 1]},
                {"component_id": "ALL_MESHES", "property_name": "baseColorFactor", "value": "original"},
                {"component_id": "Legs_3_Group", "property_name": "visible", "value": false},
                {"component_id": "Seat", "property_name": "uvTransform", "value": {"scale": 2}}
            ],
            "final_price": 170.0
        }"#;

        let response: ConfigurationResponse = serde_json::from_str(raw).expect("parse");
        let values: Vec<_> = response.update_list.iter().map(|i| &i.value).collect();
        assert_eq!(values[0], &PropertyValue::Numbers(vec![0.0, 0.0, 1.0, 1.0]));
        assert_eq!(values[1], &PropertyValue::Text("original".into()));
        assert_eq!(values[2], &PropertyValue::Bool(false));
        assert!(matches!(values[3], PropertyValue::Other(_)));
        assert_eq!(response.final_price, 170.0);
    }

    #[test]
    fn instruction_without_value_still_parses_as_null() {
        let response: ConfigurationResponse = serde_json::from_str(
            r#"{"update_list": [{"component_id": "Seat", "property_name": "visible"}], "final_price": 1.0}"#,
        )
        .expect("parse");
        assert_eq!(response.update_list[0].value, PropertyValue::default());
        assert_eq!(response.update_list[0].value.kind(), "null");
    }

    #[test]
    fn missing_final_price_defaults_to_zero() {
        let response: ConfigurationResponse =
            serde_json::from_str(r#"{"update_list": []}"#).expect("parse");
        assert_eq!(response.final_price, 0.0);
    }

    #[test]
    fn request_serializes_with_wire_field_names() {
        let body = serde_json::to_value(ConfigurationRequest::new("Blue", 4)).expect("json");
        assert_eq!(body, serde_json::json!({"seat_color": "Blue", "leg_style": 4}));
    }

    #[test]
    fn price_text_uses_shortest_number_form() {
        assert_eq!(price_text(129.99), "Total Price: $129.99");
        assert_eq!(price_text(100.0), "Total Price: $100");
        assert_eq!(price_text(150.5), "Total Price: $150.5");
    }
}
