use glam::Vec3;

// Shared layout and animation tuning constants used by the scene builders,
// the camera/lighting rigs, and the picking code.

// House structure (world units)
pub const WALL_THICKNESS: f32 = 0.2;
pub const WALL_HEIGHT: f32 = 4.0;
pub const ROOM_DEPTH: f32 = 8.0;
pub const LIVING_WIDTH: f32 = 8.0;
pub const BEDROOM_WIDTH: f32 = 8.0;
pub const DOOR_WIDTH: f32 = 2.0;
pub const DOOR_HEIGHT: f32 = 3.0;

// Room group origins (x); the whole house sits one unit below the world origin
pub const LIVING_CENTER_X: f32 = -2.0;
pub const BEDROOM_CENTER_X: f32 = 6.0;
pub const PARTITION_X: f32 = 2.0;
pub const HOUSE_BASE_Y: f32 = -1.0;

// Smoothing rates (per second)
pub const CAMERA_RATE: f32 = 2.0;
pub const LIGHT_RATE: f32 = 3.0;
pub const DOOR_DAMP_RATE: f32 = 4.0;

// Door swings into the bedroom; -100 degrees clears the frame
pub const DOOR_OPEN_ANGLE: f32 = -(std::f32::consts::PI / 1.8);
pub const FAN_SPEED: f32 = 5.0; // rad/s while the fan runs

// Light placement and targets
pub const SUN_POSITION: [f32; 3] = [10.0, 20.0, 5.0];
pub const SUN_FULL_INTENSITY: f32 = 1.0;
pub const SUN_DIM_INTENSITY: f32 = 0.2; // midnight

pub const LIVING_BULB_POSITION: [f32; 3] = [-2.0, 6.0, 0.0];
pub const BEDROOM_BULB_POSITION: [f32; 3] = [6.0, 6.0, 0.0];
pub const BULB_RANGE: f32 = 15.0;

pub const LAMP_BULB_POSITION: [f32; 3] = [4.0, 1.5, -2.0];
pub const LAMP_RANGE: f32 = 6.0;
pub const LAMP_ON_INTENSITY: f32 = 1.5;
pub const LAMP_GLOW_ON: f32 = 2.0;

pub const TV_GLOW_POSITION: [f32; 3] = [-2.0, 0.5, -2.5];
pub const TV_GLOW_RANGE: f32 = 5.0;
pub const TV_GLOW_ON_INTENSITY: f32 = 2.0;
pub const TV_GLOW_COLOR: [f32; 3] = [0.667, 0.8, 1.0];

// Door hinge frame: pivot at the partition jamb, slab centered half a door
// width and height away from it
pub const DOOR_PIVOT: [f32; 3] = [PARTITION_X, HOUSE_BASE_Y, -DOOR_WIDTH / 2.0];
pub const DOOR_SLAB_OFFSET: [f32; 3] = [0.0, DOOR_HEIGHT / 2.0, DOOR_WIDTH / 2.0];

// Slab-local picking extents (covers slab, glass, and both handles)
pub const DOOR_PICK_HALF_EXTENTS: [f32; 3] = [0.12, DOOR_HEIGHT / 2.0, DOOR_WIDTH / 2.0];

#[inline]
pub fn sun_position() -> Vec3 {
    Vec3::from(SUN_POSITION)
}

#[inline]
pub fn door_pivot() -> Vec3 {
    Vec3::from(DOOR_PIVOT)
}
