use super::*;
use crate::memory::{MemoryNode, MemoryScene};
use shared::domain::Rgb;

fn chair() -> MemoryScene {
    MemoryScene::new(
        MemoryNode::group("Chair")
            .with_child(MemoryNode::mesh("Seat", Rgb::new(0.5, 0.5, 0.5)))
            .with_child(
                MemoryNode::group("Legs_4_Group")
                    .with_child(MemoryNode::mesh("leg_1", Rgb::default()))
                    .with_child(MemoryNode::mesh("leg_2", Rgb::default())),
            ),
    )
}

#[test]
fn resolves_nested_node_by_name() {
    let mut scene = chair();
    let node = resolve(&mut scene, &ComponentId::from("leg_2")).expect("leg_2");
    assert_eq!(node.name(), "leg_2");
}

#[test]
fn missing_component_is_none() {
    let mut scene = chair();
    assert!(resolve(&mut scene, &ComponentId::from("Legs_3_Group")).is_none());
}

#[test]
fn empty_component_id_never_matches() {
    let mut scene = MemoryScene::new(MemoryNode::group(""));
    assert!(resolve(&mut scene, &ComponentId::from("")).is_none());
}

#[test]
fn resolving_does_not_mutate_graph() {
    let mut scene = chair();
    let before = scene.clone();
    let _ = resolve(&mut scene, &ComponentId::from("Seat"));
    let _ = resolve(&mut scene, &ComponentId::from("nope"));
    assert_eq!(scene, before);
}

#[test]
fn resolves_through_trait_object() {
    let mut scene = chair();
    let graph: &mut dyn SceneGraph = &mut scene;
    let node = resolve(graph, &ComponentId::from("Seat")).expect("seat");
    assert!(node.material().is_some());
}
