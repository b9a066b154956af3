mod gpu;
mod mesh;

use std::time::Instant;
use winit::{
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::EventLoop,
    keyboard::Key,
    window::WindowBuilder,
};

use house_core::anim::{DoorHinge, FanRotor};
use house_core::camera::{screen_to_world_ray, CameraRig};
use house_core::lighting::LightingRig;
use house_core::pick::door_hit;
use house_core::props::build_scene;
use house_core::ui;
use house_core::HouseState;

/// Everything the frame loop owns besides the GPU: the shared UI state and
/// the animated rigs easing toward its targets.
struct App {
    state: HouseState,
    camera_rig: CameraRig,
    lighting: LightingRig,
    door: DoorHinge,
    fan: FanRotor,
    cursor: (f32, f32),
    last_frame: Instant,
}

impl App {
    fn new() -> Self {
        Self {
            state: HouseState::default(),
            camera_rig: CameraRig::default(),
            lighting: LightingRig::default(),
            door: DoorHinge::default(),
            fan: FanRotor::default(),
            cursor: (0.0, 0.0),
            last_frame: Instant::now(),
        }
    }

    fn advance(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.camera_rig.step(self.state.room, dt);
        self.lighting.step(&self.state, dt);
        self.door.step(dt);
        self.fan.step(dt, self.state.fan_on);
    }

    /// A click lands on the UI first; otherwise it is cast into the scene
    /// and may toggle the door.
    fn handle_click(&mut self, width: f32, height: f32) {
        let (cx, cy) = self.cursor;
        let buttons = ui::layout(width, height);
        if let Some(action) = ui::hit(&buttons, cx, cy) {
            action.apply(&mut self.state);
            return;
        }
        let camera = self.camera_rig.camera(width / height.max(1.0));
        let (ro, rd) = screen_to_world_ray(&camera, width, height, cx, cy);
        if door_hit(ro, rd, self.door.angle).is_some() {
            self.door.toggle();
        }
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new().expect("event loop");
    let window = WindowBuilder::new()
        .with_title("house-scene")
        .with_inner_size(winit::dpi::LogicalSize::new(1280.0, 800.0))
        .build(&event_loop)
        .expect("window");

    let mut gpu = pollster::block_on(gpu::GpuState::new(&window)).expect("gpu");
    let mut app = App::new();

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::Resized(size) => gpu.resize(size),
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::CursorMoved { position, .. } => {
                    app.cursor = (position.x as f32, position.y as f32);
                }
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button: MouseButton::Left,
                    ..
                } => {
                    app.handle_click(gpu.width as f32, gpu.height as f32);
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    if event.state == ElementState::Pressed {
                        if let Key::Character(text) = &event.logical_key {
                            if let Some(action) = ui::action_for_key(text.as_str()) {
                                action.apply(&mut app.state);
                            }
                        }
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                app.advance();
                let width = gpu.width as f32;
                let height = gpu.height as f32;
                let camera = app.camera_rig.camera(width / height.max(1.0));
                let props = build_scene(app.door.angle, app.fan.angle, &app.lighting);
                let buttons = ui::layout(width, height);
                match gpu.render(&props, &camera, &app.lighting, &buttons, &app.state) {
                    Ok(()) => gpu.window.request_redraw(),
                    Err(wgpu::SurfaceError::Lost) => {
                        let size = gpu.window.inner_size();
                        gpu.resize(size);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                    Err(e) => log::error!("render error: {e:?}"),
                }
            }
            _ => {}
        })
        .expect("event loop run");
}
