//! Shared UI state driving the whole scene.
//!
//! A single `HouseState` is created at startup, owned by the frame loop, and
//! mutated only in response to user input. Everything animated reads it once
//! per frame and eases its own displayed values toward state-derived targets.

/// Named lighting preset selected as a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ambience {
    Calm,
    Daylight,
    Midnight,
    Neon,
}

impl Ambience {
    pub const ALL: [Ambience; 4] = [
        Ambience::Calm,
        Ambience::Daylight,
        Ambience::Midnight,
        Ambience::Neon,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Ambience::Calm => "calm",
            Ambience::Daylight => "daylight",
            Ambience::Midnight => "midnight",
            Ambience::Neon => "neon",
        }
    }
}

/// Camera focus: the whole house or one of the two rooms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Room {
    Overview,
    Living,
    Bedroom,
}

impl Room {
    pub const ALL: [Room; 3] = [Room::Overview, Room::Living, Room::Bedroom];

    pub fn label(self) -> &'static str {
        match self {
            Room::Overview => "overview",
            Room::Living => "living",
            Room::Bedroom => "bedroom",
        }
    }
}

/// The global toggle/selection record. Lives for the process lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct HouseState {
    pub tv_on: bool,
    pub lights_on: bool,
    pub fan_on: bool,
    pub ambience: Ambience,
    pub room: Room,
}

impl Default for HouseState {
    fn default() -> Self {
        Self {
            tv_on: false,
            lights_on: true,
            fan_on: true,
            ambience: Ambience::Calm,
            room: Room::Overview,
        }
    }
}

impl HouseState {
    pub fn toggle_tv(&mut self) {
        self.tv_on = !self.tv_on;
        log::info!("tv {}", if self.tv_on { "on" } else { "standby" });
    }

    pub fn toggle_lights(&mut self) {
        self.lights_on = !self.lights_on;
        log::info!("lights {}", if self.lights_on { "on" } else { "off" });
    }

    pub fn toggle_fan(&mut self) {
        self.fan_on = !self.fan_on;
        log::info!("fan {}", if self.fan_on { "running" } else { "stopped" });
    }

    pub fn set_ambience(&mut self, ambience: Ambience) {
        if self.ambience != ambience {
            log::info!("ambience -> {}", ambience.label());
        }
        self.ambience = ambience;
    }

    pub fn set_room(&mut self, room: Room) {
        if self.room != room {
            log::info!("camera -> {}", room.label());
        }
        self.room = room;
    }
}
