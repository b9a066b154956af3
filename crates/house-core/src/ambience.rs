use crate::state::Ambience;

/// The five constants an ambience preset bundles. Selecting a preset swaps
/// the whole row; displayed values then converge smoothly in `LightingRig`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbienceSettings {
    pub background: [f32; 3],
    pub ambient_intensity: f32,
    pub bulb_color: [f32; 3],
    pub bulb_intensity: f32,
    pub shadow_tint: [f32; 3],
}

// Rows indexed by Ambience::ALL order. Colors are sRGB bytes scaled
// to [0, 1].
pub const AMBIENCE_SETTINGS: [AmbienceSettings; 4] = [
    // calm
    AmbienceSettings {
        background: [0.831, 0.749, 0.659],
        ambient_intensity: 0.3,
        bulb_color: [1.0, 0.667, 0.0],
        bulb_intensity: 1.5,
        shadow_tint: [0.353, 0.302, 0.231],
    },
    // daylight
    AmbienceSettings {
        background: [0.878, 0.969, 0.980],
        ambient_intensity: 0.8,
        bulb_color: [1.0, 1.0, 1.0],
        bulb_intensity: 0.5,
        shadow_tint: [0.533, 0.600, 0.651],
    },
    // midnight
    AmbienceSettings {
        background: [0.059, 0.090, 0.165],
        ambient_intensity: 0.1,
        bulb_color: [0.667, 0.867, 1.0],
        bulb_intensity: 0.8,
        shadow_tint: [0.0, 0.0, 0.0],
    },
    // neon
    AmbienceSettings {
        background: [0.133, 0.0, 0.133],
        ambient_intensity: 0.2,
        bulb_color: [1.0, 0.0, 1.0],
        bulb_intensity: 2.0,
        shadow_tint: [0.133, 0.0, 0.2],
    },
];

#[inline]
pub fn settings(ambience: Ambience) -> &'static AmbienceSettings {
    match ambience {
        Ambience::Calm => &AMBIENCE_SETTINGS[0],
        Ambience::Daylight => &AMBIENCE_SETTINGS[1],
        Ambience::Midnight => &AMBIENCE_SETTINGS[2],
        Ambience::Neon => &AMBIENCE_SETTINGS[3],
    }
}
