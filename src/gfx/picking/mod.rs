//! # Object Picking
//!
//! Mouse ray-casting against scene objects. The cursor position is
//! unprojected through the camera into a world-space ray, which is tested
//! against each object's transformed bounding box. The app uses this for
//! both the click that toggles the cube's active state and the hover
//! highlight.

use cgmath::{ElementWise, InnerSpace, Matrix4, SquareMatrix, Vector3, Vector4, Zero};

use crate::gfx::{camera::orbit_camera::OrbitCamera, scene::Scene};

/// A world-space ray for intersection testing
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vector3<f32>,
    /// Normalized direction
    pub direction: Vector3<f32>,
}

impl Ray {
    pub fn new(origin: Vector3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Point along the ray at distance `t`
    pub fn point_at(&self, t: f32) -> Vector3<f32> {
        self.origin + self.direction * t
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vector3<f32>,
    pub max: Vector3<f32>,
}

impl Aabb {
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    pub fn from_points(points: &[[f32; 3]]) -> Self {
        if points.is_empty() {
            return Self::new(Vector3::zero(), Vector3::zero());
        }

        let mut min = Vector3::from(points[0]);
        let mut max = min;

        for point in points.iter().skip(1) {
            let v = Vector3::from(*point);
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            min.z = min.z.min(v.z);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
            max.z = max.z.max(v.z);
        }

        Self::new(min, max)
    }

    /// Slab test; returns the distance to the entry point, or None
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let inv_dir = Vector3::new(
            1.0 / ray.direction.x,
            1.0 / ray.direction.y,
            1.0 / ray.direction.z,
        );

        let t_min = (self.min - ray.origin).mul_element_wise(inv_dir);
        let t_max = (self.max - ray.origin).mul_element_wise(inv_dir);

        let t1 = Vector3::new(
            t_min.x.min(t_max.x),
            t_min.y.min(t_max.y),
            t_min.z.min(t_max.z),
        );
        let t2 = Vector3::new(
            t_min.x.max(t_max.x),
            t_min.y.max(t_max.y),
            t_min.z.max(t_max.z),
        );

        let t_near = t1.x.max(t1.y.max(t1.z));
        let t_far = t2.x.min(t2.y.min(t2.z));

        if t_near <= t_far && t_far >= 0.0 {
            Some(if t_near >= 0.0 { t_near } else { t_far })
        } else {
            None
        }
    }

    /// Bounds of this box under an affine transform
    pub fn transform(&self, matrix: &Matrix4<f32>) -> Self {
        let corners = [
            [self.min.x, self.min.y, self.min.z],
            [self.max.x, self.min.y, self.min.z],
            [self.min.x, self.max.y, self.min.z],
            [self.min.x, self.min.y, self.max.z],
            [self.max.x, self.max.y, self.min.z],
            [self.max.x, self.min.y, self.max.z],
            [self.min.x, self.max.y, self.max.z],
            [self.max.x, self.max.y, self.max.z],
        ];

        let transformed: Vec<[f32; 3]> = corners
            .iter()
            .map(|corner| {
                let homogeneous = Vector4::new(corner[0], corner[1], corner[2], 1.0);
                let t = matrix * homogeneous;
                [t.x / t.w, t.y / t.w, t.z / t.w]
            })
            .collect();

        Self::from_points(&transformed)
    }
}

/// Result of a successful pick
#[derive(Debug, Clone)]
pub struct PickResult {
    pub object_index: usize,
    /// Distance from the ray origin to the hit point
    pub distance: f32,
    pub point: Vector3<f32>,
}

/// Unprojects a screen position into a world-space ray
pub fn screen_ray(
    screen_pos: (f32, f32),
    screen_size: (f32, f32),
    camera: &OrbitCamera,
) -> Ray {
    let (mouse_x, mouse_y) = screen_pos;
    let (screen_width, screen_height) = screen_size;

    // Normalized device coordinates, Y flipped
    let ndc_x = (2.0 * mouse_x) / screen_width - 1.0;
    let ndc_y = 1.0 - (2.0 * mouse_y) / screen_height;

    let view_proj = camera.build_view_projection_matrix();
    let inv_view_proj = view_proj.invert().unwrap_or_else(Matrix4::identity);

    let near = inv_view_proj * Vector4::new(ndc_x, ndc_y, 0.0, 1.0);
    let far = inv_view_proj * Vector4::new(ndc_x, ndc_y, 1.0, 1.0);

    let near_3d = Vector3::new(near.x / near.w, near.y / near.w, near.z / near.w);
    let far_3d = Vector3::new(far.x / far.w, far.y / far.w, far.z / far.w);

    Ray::new(near_3d, far_3d - near_3d)
}

/// Picks the closest visible object under the cursor, if any
pub fn pick_object(
    screen_pos: (f32, f32),
    screen_size: (f32, f32),
    camera: &OrbitCamera,
    scene: &Scene,
) -> Option<PickResult> {
    let ray = screen_ray(screen_pos, screen_size, camera);

    let mut closest: Option<PickResult> = None;

    for (i, object) in scene.objects.iter().enumerate() {
        if !object.visible {
            continue;
        }

        let world_aabb = object_aabb(object).transform(&object.transform);

        if let Some(distance) = world_aabb.intersect_ray(&ray) {
            if closest
                .as_ref()
                .map_or(true, |result| distance < result.distance)
            {
                closest = Some(PickResult {
                    object_index: i,
                    distance,
                    point: ray.point_at(distance),
                });
            }
        }
    }

    closest
}

/// Local-space bounds of an object's meshes
fn object_aabb(object: &crate::gfx::scene::object::Object) -> Aabb {
    let points: Vec<[f32; 3]> = object
        .meshes
        .iter()
        .flat_map(|mesh| mesh.vertices().iter().map(|v| v.position))
        .collect();

    if points.is_empty() {
        // Degenerate object; give it unit-cube bounds so it stays clickable
        Aabb::new(Vector3::new(-0.5, -0.5, -0.5), Vector3::new(0.5, 0.5, 0.5))
    } else {
        Aabb::from_points(&points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aabb_bounds_cover_all_points() {
        let points = vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [-1.0, -1.0, -1.0]];
        let aabb = Aabb::from_points(&points);

        assert_eq!(aabb.min, Vector3::new(-1.0, -1.0, -1.0));
        assert_eq!(aabb.max, Vector3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn ray_hits_and_misses_aabb() {
        let aabb = Aabb::new(Vector3::new(-1.0, -1.0, -1.0), Vector3::new(1.0, 1.0, 1.0));

        let hit = Ray::new(Vector3::new(0.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(aabb.intersect_ray(&hit).is_some());

        let miss = Ray::new(Vector3::new(5.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(aabb.intersect_ray(&miss).is_none());
    }

    #[test]
    fn ray_from_inside_reports_exit_distance() {
        let aabb = Aabb::new(Vector3::new(-1.0, -1.0, -1.0), Vector3::new(1.0, 1.0, 1.0));
        let ray = Ray::new(Vector3::zero(), Vector3::new(0.0, 0.0, 1.0));

        let distance = aabb.intersect_ray(&ray).unwrap();
        assert!((distance - 1.0).abs() < 1e-5);
    }

    #[test]
    fn scaled_aabb_catches_wider_rays() {
        let aabb = Aabb::new(
            Vector3::new(-0.5, -0.5, -0.5),
            Vector3::new(0.5, 0.5, 0.5),
        );
        let ray = Ray::new(Vector3::new(0.6, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));

        // Misses the unit cube, hits the same cube scaled by 1.5
        assert!(aabb.intersect_ray(&ray).is_none());
        let scaled = aabb.transform(&Matrix4::from_scale(1.5));
        assert!(scaled.intersect_ray(&ray).is_some());
    }
}
