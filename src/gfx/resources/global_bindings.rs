//! Global uniform bindings for camera and lighting
//!
//! One uniform buffer, bound at slot 0 of every pipeline, carries the
//! camera matrices and the scene's fixed light rig.

use cgmath::{InnerSpace, Vector3};

use crate::{
    gfx::camera::camera_utils::CameraUniform,
    wgpu_utils::{
        binding_builder::{BindGroupBuilder, BindGroupLayoutBuilder, BindGroupLayoutWithDesc},
        binding_types,
        uniform_buffer::UniformBuffer,
    },
};

/// Global uniform buffer content; must match the shader's Globals struct
///
/// vec3 fields are padded to 16 bytes by pairing each with an f32.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobalUBOContent {
    view_position: [f32; 4],
    view_proj: [[f32; 4]; 4],

    ambient_color: [f32; 3],
    ambient_intensity: f32,
    spot_position: [f32; 3],
    spot_intensity: f32,
    spot_direction: [f32; 3],
    spot_cos_outer: f32,
    spot_color: [f32; 3],
    spot_cos_inner: f32,
    point_position: [f32; 3],
    point_intensity: f32,
    point_color: [f32; 3],
    _padding: f32,
}

/// The scene's fixed three-light rig: ambient fill, a spot aimed at the
/// origin, and a point light opposite it
///
/// Positions and intensities are static; nothing in the app reconfigures
/// them at runtime.
#[derive(Copy, Clone, Debug)]
pub struct LightRig {
    pub ambient_color: [f32; 3],
    pub ambient_intensity: f32,

    pub spot_position: [f32; 3],
    pub spot_color: [f32; 3],
    /// Outer cone half-angle, radians
    pub spot_angle: f32,
    /// Fraction of the cone softened toward the edge, 0..1
    pub spot_penumbra: f32,
    pub spot_intensity: f32,

    pub point_position: [f32; 3],
    pub point_color: [f32; 3],
    pub point_intensity: f32,
}

impl Default for LightRig {
    fn default() -> Self {
        use std::f32::consts::{FRAC_PI_2, PI};
        Self {
            ambient_color: [1.0, 1.0, 1.0],
            ambient_intensity: FRAC_PI_2,

            spot_position: [10.0, 10.0, 10.0],
            spot_color: [1.0, 1.0, 1.0],
            spot_angle: 0.15,
            spot_penumbra: 1.0,
            spot_intensity: PI,

            point_position: [-10.0, -10.0, -10.0],
            point_color: [1.0, 1.0, 1.0],
            point_intensity: PI,
        }
    }
}

/// Type alias for the global uniform buffer
pub type GlobalUBO = UniformBuffer<GlobalUBOContent>;

/// Uploads camera and light data; call once per frame
pub fn update_global_ubo(
    ubo: &mut GlobalUBO,
    queue: &wgpu::Queue,
    camera: CameraUniform,
    rig: LightRig,
) {
    // The spot light is aimed at the scene origin.
    let spot_position = Vector3::from(rig.spot_position);
    let spot_direction: [f32; 3] = (-spot_position).normalize().into();

    let cos_outer = rig.spot_angle.cos();
    let cos_inner = (rig.spot_angle * (1.0 - rig.spot_penumbra)).cos();

    let content = GlobalUBOContent {
        view_position: camera.view_position,
        view_proj: camera.view_proj,

        ambient_color: rig.ambient_color,
        ambient_intensity: rig.ambient_intensity,
        spot_position: rig.spot_position,
        spot_intensity: rig.spot_intensity,
        spot_direction,
        spot_cos_outer: cos_outer,
        spot_color: rig.spot_color,
        spot_cos_inner: cos_inner,
        point_position: rig.point_position,
        point_intensity: rig.point_intensity,
        point_color: rig.point_color,
        _padding: 0.0,
    };

    ubo.update_content(queue, content);
}

/// Manages the bind group layout and bind group for global uniforms
pub struct GlobalBindings {
    bind_group_layout: BindGroupLayoutWithDesc,
    bind_group: Option<wgpu::BindGroup>,
}

impl GlobalBindings {
    pub fn new(device: &wgpu::Device) -> Self {
        let bind_group_layout = BindGroupLayoutBuilder::new()
            .next_binding_rendering(binding_types::uniform())
            .create(device, "Globals Bind Group Layout");

        GlobalBindings {
            bind_group_layout,
            bind_group: None,
        }
    }

    /// Creates the bind group; must run before the first frame
    pub fn create_bind_group(&mut self, device: &wgpu::Device, ubo: &GlobalUBO) {
        self.bind_group = Some(
            BindGroupBuilder::new(&self.bind_group_layout)
                .resource(ubo.binding_resource())
                .create(device, "Globals Bind Group"),
        );
    }

    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout.layout
    }

    /// # Panics
    /// Panics if `create_bind_group()` has not been called yet
    pub fn bind_group(&self) -> &wgpu::BindGroup {
        self.bind_group
            .as_ref()
            .expect("Bind group has not been created yet!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ubo_content_size_matches_shader_struct() {
        // 16 (view_position) + 64 (view_proj) + 6 * 16 (light rig)
        assert_eq!(std::mem::size_of::<GlobalUBOContent>(), 176);
    }

    #[test]
    fn full_penumbra_softens_the_whole_cone() {
        let rig = LightRig::default();
        // penumbra 1.0 means the inner cone collapses to the axis
        let cos_inner = (rig.spot_angle * (1.0 - rig.spot_penumbra)).cos();
        assert_eq!(cos_inner, 1.0);
        assert!(rig.spot_angle.cos() < cos_inner);
    }
}
