//! # Scene Management Module
//!
//! Holds the objects, materials, and camera that make up the rendered
//! scene, plus the vertex format shared with the render pipelines.

pub mod object;
pub mod scene;
pub mod vertex;

// Re-export main types
pub use object::{DrawObject, Object};
pub use scene::Scene;
pub use vertex::Vertex3D;
