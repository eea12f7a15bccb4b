use super::camera_utils::{convert_matrix4_to_array, CameraUniform};
use cgmath::*;

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.5,
    0.0, 0.0, 0.0, 1.0,
);

const MIN_PITCH: f32 = -std::f32::consts::FRAC_PI_2 + f32::EPSILON;
const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2 - f32::EPSILON;

/// Camera orbiting a target point at a given distance, pitch, and yaw
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub distance: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub eye: Vector3<f32>,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
    pub min_distance: f32,
    pub max_distance: f32,
    pub aspect: f32,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
    pub uniform: CameraUniform,
}

impl OrbitCamera {
    pub fn new(distance: f32, pitch: f32, yaw: f32, target: Vector3<f32>, aspect: f32) -> Self {
        let mut camera = Self {
            distance,
            pitch,
            yaw,
            eye: Vector3::zero(), // Recalculated by `update()`
            target,
            up: Vector3::unit_z(),
            min_distance: 1.5,
            max_distance: 16.0,
            aspect,
            fovy: Rad(std::f32::consts::PI / 4.0),
            znear: 0.1,
            zfar: 1000.0,
            uniform: CameraUniform::default(),
        };
        camera.update();
        camera
    }

    pub fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        let eye = Point3::from_vec(self.eye);
        let target = Point3::from_vec(self.target);
        let view = Matrix4::look_at_rh(eye, target, self.up);
        let proj =
            OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }

    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance.clamp(self.min_distance, self.max_distance);
        self.update();
    }

    pub fn add_distance(&mut self, delta: f32) {
        // Log-scaled so zooming feels uniform at any distance
        let corrected_zoom = f32::log10(self.distance.max(1.0 + f32::EPSILON)) * delta;
        self.set_distance(self.distance + corrected_zoom);
    }

    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(MIN_PITCH, MAX_PITCH);
        self.update();
    }

    pub fn add_pitch(&mut self, delta: f32) {
        self.set_pitch(self.pitch + delta);
    }

    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
        self.update();
    }

    pub fn add_yaw(&mut self, delta: f32) {
        self.set_yaw(self.yaw + delta);
    }

    pub fn resize_projection(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
    }

    pub fn update_view_proj(&mut self) {
        self.uniform.view_position = [self.eye.x, self.eye.y, self.eye.z, 1.0];
        self.uniform.view_proj = convert_matrix4_to_array(self.build_view_projection_matrix());
    }

    /// Recomputes the eye position after `distance`, `pitch` or `yaw` change
    fn update(&mut self) {
        self.eye = Vector3::new(
            self.distance * self.yaw.sin() * self.pitch.cos(),
            self.distance * self.pitch.sin(),
            self.distance * self.yaw.cos() * self.pitch.cos(),
        ) + self.target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_clamped_to_bounds() {
        let mut camera = OrbitCamera::new(5.0, 0.4, 0.2, Vector3::zero(), 1.0);
        camera.set_distance(100.0);
        assert_eq!(camera.distance, camera.max_distance);
        camera.set_distance(0.0);
        assert_eq!(camera.distance, camera.min_distance);
    }

    #[test]
    fn eye_sits_at_distance_from_target() {
        let camera = OrbitCamera::new(5.0, 0.4, 0.2, Vector3::zero(), 1.0);
        let length = camera.eye.magnitude();
        assert!((length - 5.0).abs() < 1e-4);
    }
}
