//! Declarative scene content: every wall, furniture piece, and moving part as
//! a unit primitive plus a world transform and material color.
//!
//! The renderer owns the vertex data for the three unit meshes; this module
//! only describes where instances of them go. Positions and colors are the
//! house model's fixed floor plan; only the door and fan transforms and a few
//! emissive strengths vary frame to frame.

use crate::constants::*;
use crate::lighting::LightingRig;
use glam::{Mat4, Quat, Vec3};

/// Unit primitive a prop instances. Cube and cylinder span [-0.5, 0.5] on
/// each axis; the sphere has radius 0.5.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mesh {
    Cube,
    Cylinder,
    Sphere,
}

#[derive(Clone, Copy, Debug)]
pub struct Prop {
    pub mesh: Mesh,
    pub transform: Mat4,
    pub color: [f32; 4],
    pub emissive: [f32; 3],
    pub emissive_strength: f32,
}

impl Prop {
    fn new(mesh: Mesh, transform: Mat4, color: [f32; 4]) -> Self {
        Self {
            mesh,
            transform,
            color,
            emissive: [0.0; 3],
            emissive_strength: 0.0,
        }
    }

    fn glowing(mut self, emissive: [f32; 3], strength: f32) -> Self {
        self.emissive = emissive;
        self.emissive_strength = strength;
        self
    }
}

#[inline]
fn srt(center: Vec3, rotation: Quat, size: Vec3) -> Mat4 {
    Mat4::from_scale_rotation_translation(size, rotation, center)
}

#[inline]
fn cube(center: Vec3, size: Vec3, color: [f32; 3]) -> Prop {
    Prop::new(
        Mesh::Cube,
        srt(center, Quat::IDENTITY, size),
        [color[0], color[1], color[2], 1.0],
    )
}

#[inline]
fn cylinder(center: Vec3, radius: f32, height: f32, color: [f32; 3]) -> Prop {
    Prop::new(
        Mesh::Cylinder,
        srt(center, Quat::IDENTITY, Vec3::new(radius * 2.0, height, radius * 2.0)),
        [color[0], color[1], color[2], 1.0],
    )
}

// Palette (sRGB bytes scaled to [0, 1])
const WHITE_WALL: [f32; 3] = [0.941, 0.941, 0.941];
const LAVENDER_WALL: [f32; 3] = [0.902, 0.902, 0.980];
const PARTITION_GRAY: [f32; 3] = [0.863, 0.863, 0.863];
const FLOOR_BROWN: [f32; 3] = [0.545, 0.353, 0.169];
const FRAME_WOOD: [f32; 3] = [0.173, 0.102, 0.071];
const DOOR_WOOD: [f32; 3] = [0.243, 0.153, 0.137];
const GLASS_BLUE: [f32; 3] = [0.667, 0.8, 1.0];
const HANDLE_STEEL: [f32; 3] = [0.878, 0.878, 0.878];
const DARK_SET: [f32; 3] = [0.2, 0.2, 0.2];
const NEAR_BLACK: [f32; 3] = [0.067, 0.067, 0.067];
const SOFA_TAN: [f32; 3] = [0.369, 0.294, 0.208];
const SOFA_ARM: [f32; 3] = [0.290, 0.231, 0.165];
const FAN_METAL: [f32; 3] = [0.102, 0.102, 0.102];
const FAN_HOUSING: [f32; 3] = [0.165, 0.165, 0.165];
const BLADE_WALNUT: [f32; 3] = [0.361, 0.251, 0.200];
const BED_WOOD: [f32; 3] = [0.243, 0.153, 0.137];
const HEADBOARD_PAD: [f32; 3] = [0.365, 0.251, 0.216];
const DUVET_BLUE: [f32; 3] = [0.553, 0.600, 0.682];
const PLAIN_WHITE: [f32; 3] = [1.0, 1.0, 1.0];
const SHADE_WHITE: [f32; 3] = [0.980, 0.980, 0.980];
const RUG_BLUE: [f32; 3] = [0.8, 0.867, 0.933];

/// World transform of the door slab group for a given hinge angle: translate
/// to the jamb pivot, swing around Y, then offset to the slab center.
pub fn hinge_transform(angle: f32) -> Mat4 {
    Mat4::from_translation(door_pivot())
        * Mat4::from_rotation_y(angle)
        * Mat4::from_translation(Vec3::from(DOOR_SLAB_OFFSET))
}

/// Floor, outer walls, middle partition with doorway, and door frame.
pub fn house_structure(door_angle: f32) -> Vec<Prop> {
    let wall_y = HOUSE_BASE_Y + WALL_HEIGHT / 2.0;
    let mut props = vec![
        // Floor spans both rooms; top face flush with the house base
        cube(
            Vec3::new(PARTITION_X, HOUSE_BASE_Y - 0.025, 0.0),
            Vec3::new(LIVING_WIDTH + BEDROOM_WIDTH, 0.05, ROOM_DEPTH),
            FLOOR_BROWN,
        ),
        // Living room: back and left walls
        cube(
            Vec3::new(LIVING_CENTER_X, wall_y, -ROOM_DEPTH / 2.0),
            Vec3::new(LIVING_WIDTH, WALL_HEIGHT, WALL_THICKNESS),
            WHITE_WALL,
        ),
        cube(
            Vec3::new(LIVING_CENTER_X - LIVING_WIDTH / 2.0, wall_y, 0.0),
            Vec3::new(WALL_THICKNESS, WALL_HEIGHT, ROOM_DEPTH),
            WHITE_WALL,
        ),
        // Bedroom: back and right walls
        cube(
            Vec3::new(BEDROOM_CENTER_X, wall_y, -ROOM_DEPTH / 2.0),
            Vec3::new(BEDROOM_WIDTH, WALL_HEIGHT, WALL_THICKNESS),
            LAVENDER_WALL,
        ),
        cube(
            Vec3::new(BEDROOM_CENTER_X + BEDROOM_WIDTH / 2.0, wall_y, 0.0),
            Vec3::new(WALL_THICKNESS, WALL_HEIGHT, ROOM_DEPTH),
            LAVENDER_WALL,
        ),
        // Middle partition: two segments flanking the doorway plus a header
        cube(
            Vec3::new(PARTITION_X, wall_y, -2.5),
            Vec3::new(WALL_THICKNESS, WALL_HEIGHT, 3.0),
            PARTITION_GRAY,
        ),
        cube(
            Vec3::new(PARTITION_X, wall_y, 2.5),
            Vec3::new(WALL_THICKNESS, WALL_HEIGHT, 3.0),
            PARTITION_GRAY,
        ),
        cube(
            Vec3::new(PARTITION_X, wall_y + 1.5, 0.0),
            Vec3::new(WALL_THICKNESS, 1.0, DOOR_WIDTH),
            PARTITION_GRAY,
        ),
        // Door frame: posts at each jamb, lintel above
        cube(
            Vec3::new(PARTITION_X, wall_y - 0.5, -1.0),
            Vec3::new(0.22, DOOR_HEIGHT, 0.15),
            FRAME_WOOD,
        ),
        cube(
            Vec3::new(PARTITION_X, wall_y - 0.5, 1.0),
            Vec3::new(0.22, DOOR_HEIGHT, 0.15),
            FRAME_WOOD,
        ),
        cube(
            Vec3::new(PARTITION_X, wall_y + 1.0, 0.0),
            Vec3::new(0.24, 0.15, 2.2),
            FRAME_WOOD,
        ),
    ];
    props.extend(door_assembly(door_angle));
    props
}

/// Swinging door: wooden slab, frosted glass insert, and a handle per side.
fn door_assembly(door_angle: f32) -> Vec<Prop> {
    let base = hinge_transform(door_angle);
    let local = |offset: Vec3, size: Vec3| base * srt(offset, Quat::IDENTITY, size);
    vec![
        Prop::new(
            Mesh::Cube,
            local(Vec3::ZERO, Vec3::new(0.08, DOOR_HEIGHT, DOOR_WIDTH)),
            [DOOR_WOOD[0], DOOR_WOOD[1], DOOR_WOOD[2], 1.0],
        ),
        Prop::new(
            Mesh::Cube,
            local(Vec3::ZERO, Vec3::new(0.09, DOOR_HEIGHT - 0.4, DOOR_WIDTH - 0.4)),
            [GLASS_BLUE[0], GLASS_BLUE[1], GLASS_BLUE[2], 0.8],
        ),
        Prop::new(
            Mesh::Cube,
            local(
                Vec3::new(0.08, 0.0, DOOR_WIDTH / 2.0 - 0.3),
                Vec3::new(0.04, 0.8, 0.04),
            ),
            [HANDLE_STEEL[0], HANDLE_STEEL[1], HANDLE_STEEL[2], 1.0],
        ),
        Prop::new(
            Mesh::Cube,
            local(
                Vec3::new(-0.08, 0.0, DOOR_WIDTH / 2.0 - 0.3),
                Vec3::new(0.04, 0.8, 0.04),
            ),
            [HANDLE_STEEL[0], HANDLE_STEEL[1], HANDLE_STEEL[2], 1.0],
        ),
    ]
}

/// TV set, sofa, coffee table, and the ceiling fan.
///
/// `tv_glow` is the smoothed TV light intensity; the screen emissive follows
/// it so the panel and its spill light fade together.
pub fn living_room(fan_angle: f32, tv_glow: f32) -> Vec<Prop> {
    let gx = LIVING_CENTER_X;
    let gy = HOUSE_BASE_Y;
    let mut props = vec![
        // TV stand, bezel, screen
        cube(Vec3::new(gx, gy + 0.5, -3.5), Vec3::new(2.5, 1.0, 0.8), DARK_SET),
        cube(Vec3::new(gx, gy + 1.7, -3.5), Vec3::new(2.2, 1.3, 0.1), NEAR_BLACK),
        cube(Vec3::new(gx, gy + 1.7, -3.44), Vec3::new(2.0, 1.1, 0.02), NEAR_BLACK)
            .glowing(TV_GLOW_COLOR, tv_glow * 0.75),
        // Sofa: base, backrest, armrests
        cube(Vec3::new(gx, gy + 0.5, 2.0), Vec3::new(2.8, 0.8, 1.0), SOFA_TAN),
        cube(Vec3::new(gx, gy + 1.1, 2.3), Vec3::new(2.8, 0.6, 0.4), SOFA_TAN),
        cube(Vec3::new(gx - 1.6, gy + 0.7, 2.0), Vec3::new(0.4, 0.6, 1.0), SOFA_ARM),
        cube(Vec3::new(gx + 1.6, gy + 0.7, 2.0), Vec3::new(0.4, 0.6, 1.0), SOFA_ARM),
        // Coffee table: round top on a short pedestal
        cylinder(Vec3::new(gx, gy + 0.4, 0.0), 0.8, 0.1, DARK_SET),
        cylinder(Vec3::new(gx, gy + 0.2, 0.0), 0.1, 0.4, NEAR_BLACK),
    ];
    props.extend(ceiling_fan(Vec3::new(gx, gy + 3.5, 0.0), fan_angle));
    props
}

/// Ceiling fan: fixed rod/canopy/motor, rotating hub with five pitched
/// blades, and the light-kit glass underneath.
fn ceiling_fan(center: Vec3, fan_angle: f32) -> Vec<Prop> {
    let mut props = vec![
        cylinder(center + Vec3::new(0.0, 0.3, 0.0), 0.04, 0.6, FAN_METAL),
        cylinder(center + Vec3::new(0.0, 0.55, 0.0), 0.12, 0.1, FAN_METAL),
        cylinder(center, 0.235, 0.25, FAN_HOUSING),
    ];
    let hub = center + Vec3::new(0.0, -0.12, 0.0);
    props.push(cylinder(hub, 0.15, 0.1, FAN_HOUSING));
    for i in 0..5 {
        let yaw = fan_angle + (i as f32) * std::f32::consts::TAU / 5.0;
        let spoke = Mat4::from_translation(hub) * Mat4::from_rotation_y(yaw);
        // Blade iron connecting hub to blade
        props.push(Prop::new(
            Mesh::Cube,
            spoke * srt(Vec3::new(0.25, 0.0, 0.0), Quat::IDENTITY, Vec3::new(0.2, 0.02, 0.06)),
            [FAN_METAL[0], FAN_METAL[1], FAN_METAL[2], 1.0],
        ));
        // Tapered blade with a slight pitch
        props.push(Prop::new(
            Mesh::Cube,
            spoke
                * srt(
                    Vec3::new(1.0, 0.0, 0.0),
                    Quat::from_rotation_x(0.1),
                    Vec3::new(1.5, 0.02, 0.25),
                ),
            [BLADE_WALNUT[0], BLADE_WALNUT[1], BLADE_WALNUT[2], 1.0],
        ));
    }
    // Light-kit glass and rim below the hub
    let mut glass = Prop::new(
        Mesh::Sphere,
        srt(
            center + Vec3::new(0.0, -0.25, 0.0),
            Quat::IDENTITY,
            Vec3::new(0.28, 0.18, 0.28),
        ),
        [1.0, 1.0, 1.0, 0.9],
    );
    glass.emissive = PLAIN_WHITE;
    glass.emissive_strength = 0.2;
    props.push(glass);
    props.push(cylinder(center + Vec3::new(0.0, -0.17, 0.0), 0.14, 0.02, NEAR_BLACK));
    props
}

/// Bed, floor lamp, and rug.
///
/// `bulb_color`/`lamp_glow` are the smoothed lamp emissive values so the bulb
/// mesh glows in step with its point light.
pub fn bedroom(bulb_color: Vec3, lamp_glow: f32) -> Vec<Prop> {
    let gx = BEDROOM_CENTER_X;
    let gy = HOUSE_BASE_Y;
    let bed = Vec3::new(gx, gy, -2.0);
    let mut props = Vec::with_capacity(16);
    // Bed legs
    for (lx, lz) in [(-1.1, -1.6), (1.1, -1.6), (-1.1, 1.6), (1.1, 1.6)] {
        props.push(cylinder(
            bed + Vec3::new(lx, 0.15, lz),
            0.035,
            0.3,
            FRAME_WOOD,
        ));
    }
    // Platform, mattress
    props.push(cube(bed + Vec3::new(0.0, 0.4, 0.0), Vec3::new(2.4, 0.2, 3.4), BED_WOOD));
    props.push(cube(
        bed + Vec3::new(0.0, 0.65, 0.05),
        Vec3::new(2.2, 0.3, 3.2),
        PLAIN_WHITE,
    ));
    // Headboard backing and upholstered padding
    props.push(cube(
        bed + Vec3::new(0.0, 0.9, -1.65),
        Vec3::new(2.6, 1.2, 0.1),
        BED_WOOD,
    ));
    props.push(cube(
        bed + Vec3::new(0.0, 0.9, -1.59),
        Vec3::new(2.4, 1.0, 0.05),
        HEADBOARD_PAD,
    ));
    // Duvet
    props.push(cube(
        bed + Vec3::new(0.0, 0.68, 0.6),
        Vec3::new(2.26, 0.32, 2.2),
        DUVET_BLUE,
    ));
    // Pillows, tilted against the headboard
    for px in [-0.6, 0.6] {
        props.push(Prop::new(
            Mesh::Cube,
            srt(
                bed + Vec3::new(px, 0.85, -1.2),
                Quat::from_rotation_x(0.4),
                Vec3::new(0.7, 0.15, 0.45),
            ),
            [1.0, 1.0, 1.0, 1.0],
        ));
    }
    // Floor lamp: base, stem, shade, glowing bulb
    let lamp = Vec3::new(gx - 2.0, gy, -2.0);
    props.push(cylinder(lamp + Vec3::new(0.0, 0.05, 0.0), 0.25, 0.1, FAN_METAL));
    props.push(cylinder(lamp + Vec3::new(0.0, 1.4, 0.0), 0.03, 2.8, FAN_METAL));
    let mut shade = cylinder(lamp + Vec3::new(0.0, 2.6, 0.0), 0.3, 0.6, SHADE_WHITE);
    shade.color[3] = 0.9;
    props.push(shade);
    props.push(
        Prop::new(
            Mesh::Sphere,
            srt(lamp + Vec3::new(0.0, 2.5, 0.0), Quat::IDENTITY, Vec3::splat(0.16)),
            [1.0, 1.0, 1.0, 1.0],
        )
        .glowing(bulb_color.to_array(), lamp_glow),
    );
    // Rug
    props.push(cylinder(Vec3::new(gx, gy + 0.02, 1.0), 1.5, 0.02, RUG_BLUE));
    props
}

/// Translucent grounding disc under the house, tinted per ambience.
pub fn shadow_disc(tint: Vec3) -> Prop {
    let mut disc = cylinder(
        Vec3::new(PARTITION_X, HOUSE_BASE_Y + 0.01, 0.0),
        12.0,
        0.02,
        tint.to_array(),
    );
    disc.color[3] = 0.5;
    disc
}

/// Assemble the full prop list for one frame. Every state-dependent value
/// arrives pre-smoothed through the lighting rig.
pub fn build_scene(door_angle: f32, fan_angle: f32, rig: &LightingRig) -> Vec<Prop> {
    let mut props = house_structure(door_angle);
    props.extend(living_room(fan_angle, rig.tv_glow));
    props.extend(bedroom(rig.bulb_color, rig.lamp_glow));
    props.push(shadow_disc(rig.shadow_tint));
    props
}
