use wgpu::Device;

use crate::gfx::{
    camera::camera_utils::CameraManager,
    geometry,
    resources::material::{Material, MaterialManager},
    scene::object::Mesh,
};

use super::object::Object;

/// Main scene containing objects, materials, and camera
pub struct Scene {
    pub camera_manager: CameraManager,
    pub objects: Vec<Object>,
    material_manager: MaterialManager,
}

impl Scene {
    /// Creates a new scene with the given camera manager
    pub fn new(camera_manager: CameraManager) -> Self {
        Self {
            camera_manager,
            objects: Vec::new(),
            material_manager: MaterialManager::new(),
        }
    }

    /// Updates camera-derived state; call once per frame before rendering
    pub fn update(&mut self) {
        self.camera_manager.camera.update_view_proj();
    }

    /// Adds a procedural unit cube to the scene
    pub fn add_cube(&mut self, name: &str) -> &mut Object {
        let (vertices, indices) = geometry::unit_cube().to_scene_format();
        let object = Object::new(name, vec![Mesh::new(vertices, indices)]);
        self.objects.push(object);
        self.objects.last_mut().unwrap()
    }

    /// Creates a material with RGB colour and adds it to the manager
    pub fn add_material_rgb(
        &mut self,
        name: &str,
        r: f32,
        g: f32,
        b: f32,
        metallic: f32,
        roughness: f32,
    ) -> &mut Material {
        let material = Material::new(name, [r, g, b, 1.0], metallic, roughness);
        self.material_manager.add_material(material);
        self.material_manager.get_material_mut(name).unwrap()
    }

    /// Initializes GPU resources for all objects and materials
    ///
    /// Must be called after the GPU context is available and before
    /// rendering.
    pub fn init_gpu_resources(&mut self, device: &Device, queue: &wgpu::Queue) {
        for object in self.objects.iter_mut() {
            object.init_gpu_resources(device);
        }
        self.material_manager
            .update_all_gpu_resources(device, queue);
    }

    /// Syncs object transforms to the GPU
    pub fn update_all_transforms(&mut self, queue: &wgpu::Queue) {
        for object in &mut self.objects {
            if object.gpu_resources.is_some() {
                object.update_transform(queue);
            }
        }
    }

    /// Syncs material changes to the GPU
    ///
    /// Call after modifying material properties; unchanged materials skip
    /// the buffer write.
    pub fn update_materials(&mut self, device: &Device, queue: &wgpu::Queue) {
        self.material_manager
            .update_all_gpu_resources(device, queue);
    }

    /// Material assigned to the object, or the default material as fallback
    pub fn get_material_for_object(&self, object: &Object) -> &Material {
        self.material_manager
            .get_material_for_object(object.material_id())
    }

    pub fn get_object_mut(&mut self, index: usize) -> Option<&mut Object> {
        self.objects.get_mut(index)
    }

    pub fn material_manager_mut(&mut self) -> &mut MaterialManager {
        &mut self.material_manager
    }
}
