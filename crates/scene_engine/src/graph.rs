//! Seams to the rendering library's scene graph.
//!
//! The engine never owns nodes. It borrows one node at a time through
//! [`SceneGraph::find_by_name`] and mutates it through [`SceneNode`].

use shared::domain::Rgb;

pub trait Material {
    fn color(&self) -> Rgb;
    fn set_rgb(&mut self, color: Rgb);
    /// Restores the color the material had when the model was loaded.
    fn restore_color(&mut self);
}

pub trait SceneNode {
    fn name(&self) -> &str;
    fn is_visible(&self) -> bool;
    fn set_visible(&mut self, visible: bool);
    fn material(&self) -> Option<&dyn Material>;
    fn material_mut(&mut self) -> Option<&mut dyn Material>;
}

pub trait SceneGraph {
    /// First node carrying `name`, searching the whole hierarchy.
    fn find_by_name(&mut self, name: &str) -> Option<&mut dyn SceneNode>;

    /// Visits every node of the hierarchy in depth-first pre-order.
    fn for_each_node(&mut self, visit: &mut dyn FnMut(&mut dyn SceneNode));
}
