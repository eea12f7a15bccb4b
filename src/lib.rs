// src/lib.rs
//! Spincube
//!
//! An interactive 3D scene built on wgpu and winit: one cube spins
//! continuously, eases its colour toward whichever swatch is selected in
//! the overlay, and scales up when clicked.

pub mod app;
pub mod gfx;
pub mod interaction;
pub mod ui;
pub mod wgpu_utils;

// Re-export main types
pub use app::SpincubeApp;

/// Creates a default Spincube application instance
pub fn default() -> SpincubeApp {
    pollster::block_on(SpincubeApp::new())
}
