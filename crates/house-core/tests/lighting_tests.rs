use glam::Vec3;
use house_core::ambience::settings;
use house_core::constants::{SUN_DIM_INTENSITY, SUN_FULL_INTENSITY, TV_GLOW_ON_INTENSITY};
use house_core::lighting::LightingRig;
use house_core::state::{Ambience, HouseState};

fn settle(rig: &mut LightingRig, state: &HouseState) {
    for _ in 0..1200 {
        rig.step(state, 1.0 / 60.0);
    }
}

#[test]
fn rig_starts_settled_at_the_default_state() {
    let rig = LightingRig::default();
    let s = settings(Ambience::Calm);
    assert_eq!(rig.background, Vec3::from(s.background));
    assert_eq!(rig.bulb_intensity, s.bulb_intensity);
    assert_eq!(rig.sun, SUN_FULL_INTENSITY);
    assert_eq!(rig.tv_glow, 0.0);
}

#[test]
fn lights_off_drives_every_bulb_toward_zero() {
    let mut rig = LightingRig::default();
    let mut state = HouseState::default();
    state.toggle_lights();
    settle(&mut rig, &state);
    assert!(rig.bulb_intensity < 1e-3);
    assert!(rig.lamp_intensity < 1e-3);
    assert!(rig.lamp_glow < 1e-3);
}

#[test]
fn tv_glow_follows_the_tv_toggle() {
    let mut rig = LightingRig::default();
    let mut state = HouseState::default();
    state.toggle_tv();
    settle(&mut rig, &state);
    assert!((rig.tv_glow - TV_GLOW_ON_INTENSITY).abs() < 1e-3);

    state.toggle_tv();
    settle(&mut rig, &state);
    assert!(rig.tv_glow < 1e-3);
}

#[test]
fn ambience_switch_retargets_the_whole_row_atomically() {
    let mut rig = LightingRig::default();
    let mut state = HouseState::default();
    state.set_ambience(Ambience::Neon);
    settle(&mut rig, &state);
    let s = settings(Ambience::Neon);
    assert!(rig.background.distance(Vec3::from(s.background)) < 1e-3);
    assert!((rig.ambient - s.ambient_intensity).abs() < 1e-3);
    assert!(rig.bulb_color.distance(Vec3::from(s.bulb_color)) < 1e-3);
    assert!((rig.bulb_intensity - s.bulb_intensity).abs() < 1e-3);
    assert!(rig.shadow_tint.distance(Vec3::from(s.shadow_tint)) < 1e-3);
}

#[test]
fn sun_dims_only_at_midnight() {
    let mut state = HouseState::default();
    let mut rig = LightingRig::default();
    state.set_ambience(Ambience::Midnight);
    settle(&mut rig, &state);
    assert!((rig.sun - SUN_DIM_INTENSITY).abs() < 1e-3);

    state.set_ambience(Ambience::Daylight);
    settle(&mut rig, &state);
    assert!((rig.sun - SUN_FULL_INTENSITY).abs() < 1e-3);
}

#[test]
fn transitions_are_gradual_rather_than_snaps() {
    let mut rig = LightingRig::default();
    let mut state = HouseState::default();
    state.set_ambience(Ambience::Midnight);
    let before = rig.background;
    rig.step(&state, 1.0 / 60.0);
    let target = Vec3::from(settings(Ambience::Midnight).background);
    // One frame moves part way, not all the way
    assert!(rig.background.distance(before) > 0.0);
    assert!(rig.background.distance(target) > 0.1);
}
