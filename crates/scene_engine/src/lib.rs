pub mod dispatcher;
pub mod graph;
pub mod memory;
pub mod property;
pub mod resolver;

pub use dispatcher::{BatchReport, InstructionDispatcher};
pub use graph::{Material, SceneGraph, SceneNode};
pub use memory::{MemoryMaterial, MemoryNode, MemoryScene};
pub use property::{BuiltinProperty, HandlerError, PropertyHandler, PropertyRegistry, PropertyUpdate};
pub use resolver::resolve;
