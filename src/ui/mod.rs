//! # User Interface Module
//!
//! Dear ImGui overlay for the scene: [`UiManager`] handles the
//! imgui/winit/wgpu integration and input capture, [`panel`] provides the
//! swatch bar the demo draws every frame.

pub mod manager;
pub mod panel;

// Re-export main types
pub use manager::UiManager;
pub use panel::swatch_bar;
