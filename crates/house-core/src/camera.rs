//! Camera description plus the rig that glides it between room views.

use crate::anim::approach_vec3;
use crate::constants::CAMERA_RATE;
use crate::state::Room;
use glam::{Mat4, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(eye: Vec3, target: Vec3, aspect: f32) -> Self {
        Self {
            eye,
            target,
            up: Vec3::Y,
            aspect,
            fovy_radians: 45f32.to_radians(),
            znear: 0.1,
            zfar: 100.0,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Rest pose (eye, look target) for each room selection.
#[inline]
pub fn room_pose(room: Room) -> (Vec3, Vec3) {
    match room {
        Room::Living => (Vec3::new(-2.0, 4.0, 8.0), Vec3::new(-2.0, 1.0, 0.0)),
        Room::Bedroom => (Vec3::new(6.0, 4.0, 8.0), Vec3::new(6.0, 1.0, 0.0)),
        Room::Overview => (Vec3::new(10.0, 12.0, 10.0), Vec3::new(2.0, 0.0, 0.0)),
    }
}

/// Smoothed camera position/look-at pair chasing the active room's pose.
#[derive(Clone, Copy, Debug)]
pub struct CameraRig {
    pub eye: Vec3,
    pub look: Vec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        let (eye, look) = room_pose(Room::Overview);
        Self { eye, look }
    }
}

impl CameraRig {
    pub fn step(&mut self, room: Room, dt: f32) {
        let (target_eye, target_look) = room_pose(room);
        self.eye = approach_vec3(self.eye, target_eye, CAMERA_RATE, dt);
        self.look = approach_vec3(self.look, target_look, CAMERA_RATE, dt);
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera::new(self.eye, self.look, aspect)
    }
}

/// Compute a world-space ray from pixel coordinates through the camera.
///
/// Returns `(ray_origin, ray_direction)` in world space.
pub fn screen_to_world_ray(camera: &Camera, width: f32, height: f32, sx: f32, sy: f32) -> (Vec3, Vec3) {
    let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
    let inv = (camera.projection_matrix() * camera.view_matrix()).inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p_far: Vec3 = p_far.truncate() / p_far.w;
    let ro = camera.eye;
    let rd = (p_far - ro).normalize();
    (ro, rd)
}
