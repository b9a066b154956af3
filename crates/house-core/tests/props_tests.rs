use glam::Vec3;
use house_core::constants::DOOR_OPEN_ANGLE;
use house_core::lighting::LightingRig;
use house_core::props::{bedroom, build_scene, hinge_transform, house_structure, living_room, Mesh};

#[test]
fn scene_prop_count_is_independent_of_animation_state() {
    let rig = LightingRig::default();
    let base = build_scene(0.0, 0.0, &rig).len();
    assert!(base > 40, "suspiciously small scene: {base} props");
    assert_eq!(build_scene(DOOR_OPEN_ANGLE, 3.0, &rig).len(), base);
    assert_eq!(build_scene(-0.5, 100.0, &rig).len(), base);
}

#[test]
fn every_transform_is_finite() {
    let rig = LightingRig::default();
    for prop in build_scene(DOOR_OPEN_ANGLE, 1.0, &rig) {
        for v in prop.transform.to_cols_array() {
            assert!(v.is_finite());
        }
        assert!(prop.color.iter().all(|c| c.is_finite()));
    }
}

#[test]
fn closed_door_slab_sits_centered_in_the_doorway() {
    let center = hinge_transform(0.0).transform_point3(Vec3::ZERO);
    assert!(center.distance(Vec3::new(2.0, 0.5, 0.0)) < 1e-5);
}

#[test]
fn opening_the_door_moves_only_the_door_props() {
    let closed = house_structure(0.0);
    let open = house_structure(DOOR_OPEN_ANGLE);
    assert_eq!(closed.len(), open.len());
    let mut moved = 0;
    for (a, b) in closed.iter().zip(&open) {
        if a.transform != b.transform {
            moved += 1;
        }
    }
    // Slab, glass insert, and two handles swing; walls and frame stay put
    assert_eq!(moved, 4);
}

#[test]
fn fan_angle_rotates_only_the_spinning_assembly() {
    let still = living_room(0.0, 0.0);
    let spinning = living_room(1.0, 0.0);
    assert_eq!(still.len(), spinning.len());
    let moved = still
        .iter()
        .zip(&spinning)
        .filter(|(a, b)| a.transform != b.transform)
        .count();
    // Five blades and five blade irons
    assert_eq!(moved, 10);
}

#[test]
fn tv_screen_emissive_follows_the_glow_value() {
    let off = living_room(0.0, 0.0);
    let on = living_room(0.0, 2.0);
    let glow_off: f32 = off.iter().map(|p| p.emissive_strength).sum();
    let glow_on: f32 = on.iter().map(|p| p.emissive_strength).sum();
    assert!(glow_on > glow_off);
}

#[test]
fn lamp_bulb_glows_with_the_preset_color() {
    let color = Vec3::new(1.0, 0.0, 1.0);
    let props = bedroom(color, 2.0);
    let bulb = props
        .iter()
        .find(|p| p.mesh == Mesh::Sphere && p.emissive_strength > 0.0)
        .expect("glowing bulb present");
    assert_eq!(bulb.emissive, [1.0, 0.0, 1.0]);
}

#[test]
fn scene_uses_all_three_unit_meshes() {
    let rig = LightingRig::default();
    let props = build_scene(0.0, 0.0, &rig);
    assert!(props.iter().any(|p| p.mesh == Mesh::Cube));
    assert!(props.iter().any(|p| p.mesh == Mesh::Cylinder));
    assert!(props.iter().any(|p| p.mesh == Mesh::Sphere));
}

#[test]
fn shadow_disc_is_translucent_and_tinted() {
    let mut rig = LightingRig::default();
    rig.shadow_tint = Vec3::new(0.1, 0.2, 0.3);
    let props = build_scene(0.0, 0.0, &rig);
    let disc = props.last().expect("non-empty scene");
    assert!(disc.color[3] < 1.0);
    assert_eq!(disc.color[0], 0.1);
    assert_eq!(disc.color[1], 0.2);
    assert_eq!(disc.color[2], 0.3);
}
