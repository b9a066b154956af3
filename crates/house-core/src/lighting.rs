//! Smoothed lighting values converging on state-derived targets each frame.

use crate::ambience::settings;
use crate::anim::{approach, approach_vec3};
use crate::constants::{
    LAMP_GLOW_ON, LAMP_ON_INTENSITY, LIGHT_RATE, SUN_DIM_INTENSITY, SUN_FULL_INTENSITY,
    TV_GLOW_ON_INTENSITY,
};
use crate::state::{Ambience, HouseState};
use glam::Vec3;

/// Displayed lighting state. Targets are recomputed from `HouseState` every
/// frame; the stored values ease toward them so preset switches and toggles
/// cross-fade instead of snapping.
#[derive(Clone, Copy, Debug)]
pub struct LightingRig {
    pub background: Vec3,
    pub ambient: f32,
    pub sun: f32,
    pub bulb_color: Vec3,
    pub bulb_intensity: f32,
    pub lamp_intensity: f32,
    pub lamp_glow: f32,
    pub tv_glow: f32,
    pub shadow_tint: Vec3,
}

impl Default for LightingRig {
    fn default() -> Self {
        // Settled at the startup state: calm preset, lights on, TV off.
        let s = settings(Ambience::Calm);
        Self {
            background: Vec3::from(s.background),
            ambient: s.ambient_intensity,
            sun: SUN_FULL_INTENSITY,
            bulb_color: Vec3::from(s.bulb_color),
            bulb_intensity: s.bulb_intensity,
            lamp_intensity: LAMP_ON_INTENSITY,
            lamp_glow: LAMP_GLOW_ON,
            tv_glow: 0.0,
            shadow_tint: Vec3::from(s.shadow_tint),
        }
    }
}

impl LightingRig {
    pub fn step(&mut self, state: &HouseState, dt: f32) {
        let s = settings(state.ambience);

        let sun_target = if state.ambience == Ambience::Midnight {
            SUN_DIM_INTENSITY
        } else {
            SUN_FULL_INTENSITY
        };
        let bulb_target = if state.lights_on { s.bulb_intensity } else { 0.0 };
        let lamp_target = if state.lights_on { LAMP_ON_INTENSITY } else { 0.0 };
        let glow_target = if state.lights_on { LAMP_GLOW_ON } else { 0.0 };
        let tv_target = if state.tv_on { TV_GLOW_ON_INTENSITY } else { 0.0 };

        self.background = approach_vec3(self.background, Vec3::from(s.background), LIGHT_RATE, dt);
        self.ambient = approach(self.ambient, s.ambient_intensity, LIGHT_RATE, dt);
        self.sun = approach(self.sun, sun_target, LIGHT_RATE, dt);
        self.bulb_color = approach_vec3(self.bulb_color, Vec3::from(s.bulb_color), LIGHT_RATE, dt);
        self.bulb_intensity = approach(self.bulb_intensity, bulb_target, LIGHT_RATE, dt);
        self.lamp_intensity = approach(self.lamp_intensity, lamp_target, LIGHT_RATE, dt);
        self.lamp_glow = approach(self.lamp_glow, glow_target, LIGHT_RATE, dt);
        self.tv_glow = approach(self.tv_glow, tv_target, LIGHT_RATE, dt);
        self.shadow_tint = approach_vec3(self.shadow_tint, Vec3::from(s.shadow_tint), LIGHT_RATE, dt);
    }
}
