pub mod ambience;
pub mod anim;
pub mod camera;
pub mod constants;
pub mod lighting;
pub mod pick;
pub mod props;
pub mod state;
pub mod ui;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static OVERLAY_WGSL: &str = include_str!("../shaders/overlay.wgsl");

pub use state::*;
