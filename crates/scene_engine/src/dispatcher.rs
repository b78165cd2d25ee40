use shared::{error::InstructionError, protocol::Instruction};
use tracing::{debug, info, warn};

use crate::{
    graph::{SceneGraph, SceneNode},
    property::{HandlerError, PropertyRegistry},
    resolver::resolve,
};

/// Result of applying one `update_list`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub applied: usize,
    pub skipped: Vec<InstructionError>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct InstructionDispatcher {
    registry: PropertyRegistry,
}

impl InstructionDispatcher {
    pub fn new(registry: PropertyRegistry) -> Self {
        Self { registry }
    }

    pub fn registry_mut(&mut self) -> &mut PropertyRegistry {
        &mut self.registry
    }

    /// Applies a single instruction to an already resolved node.
    pub fn apply(
        &self,
        node: &mut dyn SceneNode,
        instruction: &Instruction,
    ) -> Result<(), InstructionError> {
        let handler = self
            .registry
            .handler(&instruction.property_name)
            .ok_or_else(|| InstructionError::UnhandledProperty {
                component_id: instruction.component_id.clone(),
                property_name: instruction.property_name.clone(),
            })?;

        handler
            .apply(node, &instruction.value)
            .map_err(|err| with_context(err, instruction))?;

        debug!(
            "scene: applied {} to node={} value={:?}",
            instruction.property_name,
            node.name(),
            instruction.value
        );
        Ok(())
    }

    /// Applies `instructions` in order. A failing instruction is skipped with a
    /// warning and never stops the ones after it.
    pub fn apply_batch<G>(&self, graph: &mut G, instructions: &[Instruction]) -> BatchReport
    where
        G: SceneGraph + ?Sized,
    {
        let mut report = BatchReport::default();
        for instruction in instructions {
            match self.apply_one(graph, instruction) {
                Ok(()) => report.applied += 1,
                Err(err) => {
                    warn!("scene: skipping instruction: {err}");
                    report.skipped.push(err);
                }
            }
        }
        info!(
            "scene: batch applied={} skipped={}",
            report.applied,
            report.skipped.len()
        );
        report
    }

    fn apply_one<G>(&self, graph: &mut G, instruction: &Instruction) -> Result<(), InstructionError>
    where
        G: SceneGraph + ?Sized,
    {
        let named = resolve(graph, &instruction.component_id)
            .map(|node| self.apply(node, instruction));

        match named {
            Some(result) => result,
            None if instruction.component_id.is_all_meshes() => {
                self.apply_to_meshes(graph, instruction)
            }
            None => Err(InstructionError::NodeNotFound {
                component_id: instruction.component_id.clone(),
            }),
        }
    }

    /// Fans `instruction` out to every node owning a material. Group nodes
    /// without one, such as leg groups, are left alone.
    fn apply_to_meshes<G>(&self, graph: &mut G, instruction: &Instruction) -> Result<(), InstructionError>
    where
        G: SceneGraph + ?Sized,
    {
        let mut meshes = 0usize;
        let mut first_error = None;
        graph.for_each_node(&mut |node| {
            if node.material().is_none() {
                return;
            }
            meshes += 1;
            if let Err(err) = self.apply(node, instruction) {
                first_error.get_or_insert(err);
            }
        });

        if meshes == 0 {
            return Err(InstructionError::NodeNotFound {
                component_id: instruction.component_id.clone(),
            });
        }
        debug!(
            "scene: fanned out {} to meshes={meshes}",
            instruction.property_name
        );
        first_error.map_or(Ok(()), Err)
    }
}

fn with_context(err: HandlerError, instruction: &Instruction) -> InstructionError {
    let component_id = instruction.component_id.clone();
    let property_name = instruction.property_name.clone();
    match err {
        HandlerError::Malformed { expected, actual } => InstructionError::MalformedInstruction {
            component_id,
            property_name,
            expected,
            actual,
        },
        HandlerError::MissingMaterial => InstructionError::MissingMaterial {
            component_id,
            property_name,
        },
    }
}

#[cfg(test)]
#[path = "tests/dispatcher_tests.rs"]
mod tests;
