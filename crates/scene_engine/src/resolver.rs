use shared::domain::ComponentId;
use tracing::debug;

use crate::graph::{SceneGraph, SceneNode};

/// Looks up the node addressed by `component_id`.
///
/// A miss is an ordinary outcome and yields `None`. Empty ids never match.
pub fn resolve<'g, G>(graph: &'g mut G, component_id: &ComponentId) -> Option<&'g mut dyn SceneNode>
where
    G: SceneGraph + ?Sized,
{
    if component_id.as_str().is_empty() {
        debug!("scene: refusing to resolve empty component id");
        return None;
    }
    graph.find_by_name(component_id.as_str())
}

#[cfg(test)]
#[path = "tests/resolver_tests.rs"]
mod tests;
