//! In-memory scene graph: the default host-side implementation of the
//! [`SceneGraph`] seam, and the fake used by the test suites.

use shared::domain::Rgb;

use crate::graph::{Material, SceneGraph, SceneNode};

#[derive(Debug, Clone, PartialEq)]
pub struct MemoryMaterial {
    color: Rgb,
    loaded_color: Rgb,
}

impl MemoryMaterial {
    pub fn new(color: Rgb) -> Self {
        Self {
            color,
            loaded_color: color,
        }
    }
}

impl Material for MemoryMaterial {
    fn color(&self) -> Rgb {
        self.color
    }

    fn set_rgb(&mut self, color: Rgb) {
        self.color = color;
    }

    fn restore_color(&mut self) {
        self.color = self.loaded_color;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemoryNode {
    name: String,
    visible: bool,
    material: Option<MemoryMaterial>,
    children: Vec<MemoryNode>,
}

impl MemoryNode {
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visible: true,
            material: None,
            children: Vec::new(),
        }
    }

    pub fn mesh(name: impl Into<String>, color: Rgb) -> Self {
        Self {
            material: Some(MemoryMaterial::new(color)),
            ..Self::group(name)
        }
    }

    pub fn with_child(mut self, child: MemoryNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn color(&self) -> Option<Rgb> {
        self.material.as_ref().map(|material| material.color)
    }

    pub fn children(&self) -> &[MemoryNode] {
        &self.children
    }

    fn find(&self, name: &str) -> Option<&MemoryNode> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut MemoryNode> {
        if self.name == name {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_mut(name))
    }

    fn visit_mut(&mut self, visit: &mut dyn FnMut(&mut dyn SceneNode)) {
        visit(&mut *self);
        for child in &mut self.children {
            child.visit_mut(visit);
        }
    }

    fn outline_into(&self, depth: usize, lines: &mut Vec<String>) {
        let mut line = format!("{}{} visible={}", "  ".repeat(depth), self.name, self.visible);
        if let Some(color) = self.color() {
            line.push_str(&format!(" color={color}"));
        }
        lines.push(line);
        for child in &self.children {
            child.outline_into(depth + 1, lines);
        }
    }
}

impl SceneNode for MemoryNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn material(&self) -> Option<&dyn Material> {
        self.material
            .as_ref()
            .map(|material| material as &dyn Material)
    }

    fn material_mut(&mut self) -> Option<&mut dyn Material> {
        self.material
            .as_mut()
            .map(|material| material as &mut dyn Material)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemoryScene {
    root: MemoryNode,
}

impl MemoryScene {
    pub fn new(root: MemoryNode) -> Self {
        Self { root }
    }

    pub fn node(&self, name: &str) -> Option<&MemoryNode> {
        self.root.find(name)
    }

    /// One line per node, indented by depth.
    pub fn outline(&self) -> Vec<String> {
        let mut lines = Vec::new();
        self.root.outline_into(0, &mut lines);
        lines
    }
}

impl SceneGraph for MemoryScene {
    fn find_by_name(&mut self, name: &str) -> Option<&mut dyn SceneNode> {
        self.root
            .find_mut(name)
            .map(|node| node as &mut dyn SceneNode)
    }

    fn for_each_node(&mut self, visit: &mut dyn FnMut(&mut dyn SceneNode)) {
        self.root.visit_mut(visit);
    }
}
