//! Property handlers keyed by the instruction's `property_name`.
//!
//! Built-in properties decode into [`PropertyUpdate`], whose application is an
//! exhaustive match. Hosts can register further [`PropertyHandler`]s (textures,
//! transforms) on a [`PropertyRegistry`] without touching the dispatcher.

use std::{collections::HashMap, fmt, sync::Arc};

use shared::{domain::Rgba, protocol::PropertyValue};
use thiserror::Error;

use crate::graph::SceneNode;

pub const BASE_COLOR_FACTOR: &str = "baseColorFactor";
pub const VISIBLE: &str = "visible";
const ORIGINAL_COLOR_KEYWORD: &str = "original";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    #[error("expected {expected}, got {actual}")]
    Malformed {
        expected: &'static str,
        actual: &'static str,
    },
    #[error("node has no material")]
    MissingMaterial,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyUpdate {
    /// Only the RGB channels reach the material.
    Color(Rgba),
    RestoreColor,
    Visibility(bool),
}

impl PropertyUpdate {
    pub fn apply_to(&self, node: &mut dyn SceneNode) -> Result<(), HandlerError> {
        match *self {
            PropertyUpdate::Color(rgba) => {
                let material = node.material_mut().ok_or(HandlerError::MissingMaterial)?;
                material.set_rgb(rgba.rgb());
            }
            PropertyUpdate::RestoreColor => {
                let material = node.material_mut().ok_or(HandlerError::MissingMaterial)?;
                material.restore_color();
            }
            PropertyUpdate::Visibility(visible) => node.set_visible(visible),
        }
        Ok(())
    }
}

pub trait PropertyHandler: Send + Sync {
    fn apply(&self, node: &mut dyn SceneNode, value: &PropertyValue) -> Result<(), HandlerError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinProperty {
    BaseColorFactor,
    Visible,
}

impl BuiltinProperty {
    pub const ALL: [BuiltinProperty; 2] = [BuiltinProperty::BaseColorFactor, BuiltinProperty::Visible];

    pub fn name(self) -> &'static str {
        match self {
            BuiltinProperty::BaseColorFactor => BASE_COLOR_FACTOR,
            BuiltinProperty::Visible => VISIBLE,
        }
    }

    pub fn decode(self, value: &PropertyValue) -> Result<PropertyUpdate, HandlerError> {
        match (self, value) {
            (BuiltinProperty::BaseColorFactor, PropertyValue::Numbers(channels)) => {
                Rgba::from_slice(channels)
                    .map(PropertyUpdate::Color)
                    .ok_or(HandlerError::Malformed {
                        expected: "4 color channels",
                        actual: "wrong channel count",
                    })
            }
            (BuiltinProperty::BaseColorFactor, PropertyValue::Text(keyword))
                if keyword == ORIGINAL_COLOR_KEYWORD =>
            {
                Ok(PropertyUpdate::RestoreColor)
            }
            (BuiltinProperty::BaseColorFactor, other) => Err(HandlerError::Malformed {
                expected: "number list or \"original\"",
                actual: other.kind(),
            }),
            (BuiltinProperty::Visible, PropertyValue::Bool(visible)) => {
                Ok(PropertyUpdate::Visibility(*visible))
            }
            (BuiltinProperty::Visible, other) => Err(HandlerError::Malformed {
                expected: "boolean",
                actual: other.kind(),
            }),
        }
    }
}

impl PropertyHandler for BuiltinProperty {
    fn apply(&self, node: &mut dyn SceneNode, value: &PropertyValue) -> Result<(), HandlerError> {
        self.decode(value)?.apply_to(node)
    }
}

#[derive(Clone)]
pub struct PropertyRegistry {
    handlers: HashMap<String, Arc<dyn PropertyHandler>>,
}

impl PropertyRegistry {
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        for property in BuiltinProperty::ALL {
            registry.register(property.name(), property);
        }
        registry
    }

    /// Installs `handler` for `name`, returning the handler it replaced.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: impl PropertyHandler + 'static,
    ) -> Option<Arc<dyn PropertyHandler>> {
        self.handlers.insert(name.into(), Arc::new(handler))
    }

    pub fn handler(&self, name: &str) -> Option<&dyn PropertyHandler> {
        self.handlers.get(name).map(|handler| handler.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn property_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for PropertyRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl fmt::Debug for PropertyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyRegistry")
            .field("properties", &self.property_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_color_requires_exactly_four_channels() {
        let err = BuiltinProperty::BaseColorFactor
            .decode(&PropertyValue::Numbers(vec![1.0, 0.0, 0.0]))
            .expect_err("three channels");
        assert!(matches!(err, HandlerError::Malformed { .. }));
    }

    #[test]
    fn base_color_accepts_original_keyword() {
        let update = BuiltinProperty::BaseColorFactor
            .decode(&PropertyValue::Text("original".into()))
            .expect("decode");
        assert_eq!(update, PropertyUpdate::RestoreColor);
    }

    #[test]
    fn visible_rejects_non_boolean() {
        let err = BuiltinProperty::Visible
            .decode(&PropertyValue::Text("false".into()))
            .expect_err("string");
        assert_eq!(
            err,
            HandlerError::Malformed {
                expected: "boolean",
                actual: "string"
            }
        );
    }

    #[test]
    fn builtins_are_registered_by_wire_name() {
        let registry = PropertyRegistry::with_builtins();
        assert_eq!(registry.property_names(), ["baseColorFactor", "visible"]);
        assert!(PropertyRegistry::empty().handler(VISIBLE).is_none());
    }
}
