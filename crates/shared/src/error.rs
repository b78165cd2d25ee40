use thiserror::Error;

use crate::domain::ComponentId;

/// Per-instruction failure. Every variant is recoverable: the instruction is
/// skipped and the rest of the batch still applies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstructionError {
    #[error("component not found: {component_id}")]
    NodeNotFound { component_id: ComponentId },
    #[error("unhandled property '{property_name}' for component {component_id}")]
    UnhandledProperty {
        component_id: ComponentId,
        property_name: String,
    },
    #[error(
        "malformed '{property_name}' value for component {component_id}: expected {expected}, got {actual}"
    )]
    MalformedInstruction {
        component_id: ComponentId,
        property_name: String,
        expected: &'static str,
        actual: &'static str,
    },
    #[error("component {component_id} has no material for '{property_name}'")]
    MissingMaterial {
        component_id: ComponentId,
        property_name: String,
    },
}

impl InstructionError {
    pub fn component_id(&self) -> &ComponentId {
        match self {
            InstructionError::NodeNotFound { component_id }
            | InstructionError::UnhandledProperty { component_id, .. }
            | InstructionError::MalformedInstruction { component_id, .. }
            | InstructionError::MissingMaterial { component_id, .. } => component_id,
        }
    }
}
