use scene_engine::{MemoryNode, MemoryScene};
use shared::domain::Rgb;

const WOOD: Rgb = Rgb::new(0.55, 0.27, 0.07);
const FABRIC: Rgb = Rgb::new(0.5, 0.5, 0.5);

/// Chair with interchangeable three- and four-leg groups, four legs shown.
pub fn chair() -> MemoryScene {
    let three_legs = (1..=3).fold(MemoryNode::group("Legs_3_Group").hidden(), |group, i| {
        group.with_child(MemoryNode::mesh(format!("Leg_3_{i}"), WOOD))
    });
    let four_legs = (1..=4).fold(MemoryNode::group("Legs_4_Group"), |group, i| {
        group.with_child(MemoryNode::mesh(format!("Leg_4_{i}"), WOOD))
    });

    MemoryScene::new(
        MemoryNode::group("Chair")
            .with_child(MemoryNode::mesh("Seat", FABRIC))
            .with_child(MemoryNode::mesh("Backrest", FABRIC))
            .with_child(three_legs)
            .with_child(four_legs),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_four_leg_group_by_default() {
        let scene = chair();
        assert!(!scene.node("Legs_3_Group").expect("3 legs").visible());
        assert!(scene.node("Legs_4_Group").expect("4 legs").visible());
        assert_eq!(scene.node("Legs_4_Group").expect("4 legs").children().len(), 4);
    }
}
