//! Application shell: window, event loop, and the per-frame driver
//!
//! Owns the shared state (scene, selection store, cube motion) and wires
//! the winit event loop to it. The redraw
//! handler is the render driver: it measures the elapsed frame time,
//! advances the cube, and renders the scene with the swatch bar on top.

use std::sync::Arc;
use std::time::Instant;

use cgmath::{Matrix4, Rad, Vector3};
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{CursorIcon, Window, WindowAttributes},
};

use crate::gfx::{
    camera::{
        camera_controller::CameraController, camera_utils::CameraManager,
        orbit_camera::OrbitCamera,
    },
    picking,
    rendering::render_engine::RenderEngine,
    scene::Scene,
};
use crate::interaction::{motion::CubeMotion, store::SelectionStore};
use crate::ui::{manager::UiManager, panel};

/// Name of the one object in the scene and its material
const CUBE_NAME: &str = "cube";

pub struct SpincubeApp {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState,
}

struct AppState {
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    ui_manager: Option<UiManager>,
    scene: Scene,
    store: SelectionStore,
    motion: CubeMotion,
    cursor_position: Option<(f32, f32)>,
    last_frame: Instant,
}

impl SpincubeApp {
    /// Creates the application with the demo scene already populated
    pub async fn new() -> Self {
        let event_loop = EventLoop::new().expect("Failed to create event loop");

        let camera = OrbitCamera::new(4.0, 0.35, 0.4, Vector3::new(0.0, 0.0, 0.0), 1.0);
        let controller = CameraController::new(0.005, 0.1);
        let camera_manager = CameraManager::new(camera, controller);

        let mut scene = Scene::new(camera_manager);
        // The material starts white; the colour easing takes it from there.
        scene.add_material_rgb(CUBE_NAME, 1.0, 1.0, 1.0, 0.05, 0.5);
        scene.add_cube(CUBE_NAME).set_material(CUBE_NAME);

        Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                window: None,
                render_engine: None,
                ui_manager: None,
                scene,
                store: SelectionStore::new(),
                motion: CubeMotion::new(),
                cursor_position: None,
                last_frame: Instant::now(),
            },
        }
    }

    /// Runs the application; consumes self and blocks on the event loop
    pub fn run(mut self) {
        let event_loop = self.event_loop.take().expect("Event loop already consumed");
        event_loop.set_control_flow(ControlFlow::Poll);

        event_loop
            .run_app(&mut self.app_state)
            .expect("Failed to run event loop");
    }
}

impl AppState {
    fn surface_size_f32(render_engine: &RenderEngine) -> (f32, f32) {
        let (width, height) = render_engine.surface_size();
        (width as f32, height as f32)
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let Ok(window) = event_loop.create_window(
            WindowAttributes::default()
                .with_title("spincube")
                .with_inner_size(winit::dpi::LogicalSize::new(1200, 800)),
        ) else {
            log::error!("failed to create window");
            return;
        };

        let window_handle = Arc::new(window);
        self.window = Some(window_handle.clone());

        let (width, height) = window_handle.inner_size().into();

        let window_clone = window_handle.clone();
        let renderer =
            pollster::block_on(async move { RenderEngine::new(window_clone, width, height).await });

        self.scene.camera_manager.camera.resize_projection(width, height);
        self.scene
            .init_gpu_resources(renderer.device(), renderer.queue());

        let ui_manager = UiManager::new(
            renderer.device(),
            renderer.queue(),
            renderer.surface_format(),
            &window_handle,
        );

        self.ui_manager = Some(ui_manager);
        self.render_engine = Some(renderer);
        self.last_frame = Instant::now();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(render_engine) = self.render_engine.as_mut() else {
            return;
        };

        let Some(window) = self.window.as_ref() else {
            return;
        };

        // The overlay gets first refusal on every input event; a click on
        // the swatch bar must never fall through to picking.
        if let Some(ui_manager) = self.ui_manager.as_mut() {
            let ui_event: winit::event::Event<()> = winit::event::Event::WindowEvent {
                window_id,
                event: event.clone(),
            };
            if ui_manager.handle_input(window, &ui_event) {
                window.request_redraw();
                return;
            }
        }

        match event {
            WindowEvent::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        physical_key: winit::keyboard::PhysicalKey::Code(key_code),
                        ..
                    },
                ..
            } => {
                if matches!(key_code, winit::keyboard::KeyCode::Escape) {
                    event_loop.exit();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let cursor = (position.x as f32, position.y as f32);
                self.cursor_position = Some(cursor);

                let hovered = picking::pick_object(
                    cursor,
                    Self::surface_size_f32(render_engine),
                    &self.scene.camera_manager.camera,
                    &self.scene,
                )
                .is_some();

                if hovered != self.motion.hovered {
                    self.motion.set_hovered(hovered);
                    window.set_cursor(if hovered {
                        CursorIcon::Pointer
                    } else {
                        CursorIcon::Default
                    });
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if let Some(cursor) = self.cursor_position {
                    let hit = picking::pick_object(
                        cursor,
                        Self::surface_size_f32(render_engine),
                        &self.scene.camera_manager.camera,
                        &self.scene,
                    );
                    if hit.is_some() {
                        self.motion.toggle_active();
                        log::debug!("cube clicked; active = {}", self.motion.active);
                    }
                }
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.scene
                    .camera_manager
                    .camera
                    .resize_projection(width, height);
                render_engine.resize(width, height);
                if let Some(ui_manager) = self.ui_manager.as_mut() {
                    ui_manager.update_display_size(width, height);
                }
            }
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let delta = now.duration_since(self.last_frame).as_secs_f32();
                self.last_frame = now;

                self.motion.advance(delta, self.store.colour());

                if let Some(cube) = self.scene.get_object_mut(0) {
                    cube.set_transform(
                        Matrix4::from_angle_x(Rad(self.motion.rotation_x))
                            * Matrix4::from_scale(self.motion.scale()),
                    );
                }
                if let Some(material) =
                    self.scene.material_manager_mut().get_material_mut(CUBE_NAME)
                {
                    material.base_color = self.motion.colour.to_array4();
                }

                self.scene.update();
                self.scene.update_all_transforms(render_engine.queue());
                self.scene
                    .update_materials(render_engine.device(), render_engine.queue());
                render_engine.update(self.scene.camera_manager.camera.uniform);

                let store = &mut self.store;
                let window_clone = window.clone();
                if let Some(ui_manager) = self.ui_manager.as_mut() {
                    render_engine.render_frame_with_ui(
                        &self.scene,
                        |device, queue, encoder, color_attachment| {
                            ui_manager.draw(
                                device,
                                queue,
                                encoder,
                                &window_clone,
                                color_attachment,
                                |ui| panel::swatch_bar(ui, store),
                            );
                        },
                    );
                } else {
                    render_engine.render_frame(
                        &self.scene,
                        None::<
                            fn(
                                &wgpu::Device,
                                &wgpu::Queue,
                                &mut wgpu::CommandEncoder,
                                &wgpu::TextureView,
                            ),
                        >,
                    );
                }
            }
            _ => (),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: winit::event::DeviceEvent,
    ) {
        let Some(window) = self.window.as_ref() else {
            return;
        };

        // Don't orbit the camera while the UI owns the mouse
        if let Some(ui_manager) = self.ui_manager.as_ref() {
            if ui_manager.wants_input() {
                return;
            }
        }

        self.scene.camera_manager.process_event(&event, window);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // Continuous animation: keep frames coming
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
