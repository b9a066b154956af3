//! Frame-rate-independent smoothing for everything animated in the scene.

use crate::constants::{DOOR_DAMP_RATE, DOOR_OPEN_ANGLE, FAN_SPEED};
use glam::Vec3;
use std::f32::consts::TAU;

/// Exponential approach of `current` toward `target`.
///
/// Uses the `1 - exp(-rate * dt)` step so the motion is monotonic and never
/// overshoots regardless of how large a frame time is handed in.
#[inline]
pub fn approach(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    let alpha = 1.0 - (-rate * dt).exp();
    current + (target - current) * alpha
}

/// Componentwise `approach` for colors and positions.
#[inline]
pub fn approach_vec3(current: Vec3, target: Vec3, rate: f32, dt: f32) -> Vec3 {
    let alpha = 1.0 - (-rate * dt).exp();
    current + (target - current) * alpha
}

/// Wrap an angle into [0, TAU).
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    angle.rem_euclid(TAU)
}

/// Per-door swing state: a logical open flag plus a damped hinge angle.
#[derive(Clone, Copy, Debug, Default)]
pub struct DoorHinge {
    pub open: bool,
    pub angle: f32,
}

impl DoorHinge {
    pub fn toggle(&mut self) {
        self.open = !self.open;
        log::info!("door {}", if self.open { "open" } else { "closed" });
    }

    /// Damp the hinge angle toward the open or closed rest position.
    pub fn step(&mut self, dt: f32) {
        let target = if self.open { DOOR_OPEN_ANGLE } else { 0.0 };
        self.angle = approach(self.angle, target, DOOR_DAMP_RATE, dt);
    }
}

/// Ceiling fan rotation: advances linearly with elapsed time while spinning,
/// holds its angle otherwise.
#[derive(Clone, Copy, Debug, Default)]
pub struct FanRotor {
    pub angle: f32,
}

impl FanRotor {
    pub fn step(&mut self, dt: f32, spinning: bool) {
        if spinning {
            self.angle = wrap_angle(self.angle + FAN_SPEED * dt);
        }
    }
}
