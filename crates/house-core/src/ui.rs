//! On-screen controls: pixel-space button layout, hit testing, and keyboard
//! shortcuts. Pure functions so the whole surface is host-testable; the
//! frontend only draws the rects and forwards clicks.

use crate::ambience::settings;
use crate::state::{Ambience, HouseState, Room};

/// A user intent produced by a button press or key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    ToggleTv,
    ToggleLights,
    ToggleFan,
    SetAmbience(Ambience),
    SetRoom(Room),
}

impl Action {
    pub fn apply(self, state: &mut HouseState) {
        match self {
            Action::ToggleTv => state.toggle_tv(),
            Action::ToggleLights => state.toggle_lights(),
            Action::ToggleFan => state.toggle_fan(),
            Action::SetAmbience(a) => state.set_ambience(a),
            Action::SetRoom(r) => state.set_room(r),
        }
    }
}

/// Whether the button for `action` should render highlighted.
pub fn is_active(action: Action, state: &HouseState) -> bool {
    match action {
        Action::ToggleTv => state.tv_on,
        Action::ToggleLights => state.lights_on,
        Action::ToggleFan => state.fan_on,
        Action::SetAmbience(a) => state.ambience == a,
        Action::SetRoom(r) => state.room == r,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    #[inline]
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Button {
    pub rect: Rect,
    pub action: Action,
}

const MARGIN: f32 = 24.0;
const GAP: f32 = 8.0;
const TOGGLE_W: f32 = 56.0;
const TOGGLE_H: f32 = 44.0;
const AMBIENCE_W: f32 = 64.0;
const AMBIENCE_H: f32 = 36.0;
const ROOM_W: f32 = 52.0;
const ROOM_H: f32 = 44.0;

/// Compute all button rects for a window of the given pixel size.
///
/// Toggles sit in a right-side column, the ambience grid top-right, and the
/// room selector centered along the bottom edge.
pub fn layout(width: f32, height: f32) -> Vec<Button> {
    let mut buttons = Vec::with_capacity(10);

    // Ambience 2x2 grid, top-right corner
    let grid_x = width - MARGIN - 2.0 * AMBIENCE_W - GAP;
    for (i, ambience) in Ambience::ALL.into_iter().enumerate() {
        let col = (i % 2) as f32;
        let row = (i / 2) as f32;
        buttons.push(Button {
            rect: Rect {
                x: grid_x + col * (AMBIENCE_W + GAP),
                y: MARGIN + row * (AMBIENCE_H + GAP),
                w: AMBIENCE_W,
                h: AMBIENCE_H,
            },
            action: Action::SetAmbience(ambience),
        });
    }

    // Toggle column, vertically centered on the right edge
    let toggles = [Action::ToggleLights, Action::ToggleTv, Action::ToggleFan];
    let column_h = 3.0 * TOGGLE_H + 2.0 * GAP;
    let column_y = (height - column_h) / 2.0;
    for (i, action) in toggles.into_iter().enumerate() {
        buttons.push(Button {
            rect: Rect {
                x: width - MARGIN - TOGGLE_W,
                y: column_y + i as f32 * (TOGGLE_H + GAP),
                w: TOGGLE_W,
                h: TOGGLE_H,
            },
            action,
        });
    }

    // Room pills, centered along the bottom
    let row_w = 3.0 * ROOM_W + 2.0 * GAP;
    let row_x = (width - row_w) / 2.0;
    for (i, room) in Room::ALL.into_iter().enumerate() {
        buttons.push(Button {
            rect: Rect {
                x: row_x + i as f32 * (ROOM_W + GAP),
                y: height - MARGIN - ROOM_H,
                w: ROOM_W,
                h: ROOM_H,
            },
            action: Action::SetRoom(room),
        });
    }

    buttons
}

/// Resolve a pixel position to the action of the button under it.
#[inline]
pub fn hit(buttons: &[Button], px: f32, py: f32) -> Option<Action> {
    buttons
        .iter()
        .find(|b| b.rect.contains(px, py))
        .map(|b| b.action)
}

/// Keyboard shortcuts mirroring every on-screen control.
#[inline]
pub fn action_for_key(key: &str) -> Option<Action> {
    match key {
        "t" | "T" => Some(Action::ToggleTv),
        "l" | "L" => Some(Action::ToggleLights),
        "f" | "F" => Some(Action::ToggleFan),
        "1" => Some(Action::SetAmbience(Ambience::Calm)),
        "2" => Some(Action::SetAmbience(Ambience::Daylight)),
        "3" => Some(Action::SetAmbience(Ambience::Midnight)),
        "4" => Some(Action::SetAmbience(Ambience::Neon)),
        "o" | "O" => Some(Action::SetRoom(Room::Overview)),
        "v" | "V" => Some(Action::SetRoom(Room::Living)),
        "b" | "B" => Some(Action::SetRoom(Room::Bedroom)),
        _ => None,
    }
}

/// Fill color for a button given the current state. Ambience buttons carry
/// their preset's background tint; everything else is a neutral pill that
/// brightens while active.
pub fn button_color(button: &Button, state: &HouseState) -> [f32; 4] {
    let active = is_active(button.action, state);
    match button.action {
        Action::SetAmbience(a) => {
            let bg = settings(a).background;
            let alpha = if active { 0.95 } else { 0.55 };
            [bg[0], bg[1], bg[2], alpha]
        }
        _ => {
            if active {
                [1.0, 1.0, 1.0, 0.85]
            } else {
                [0.1, 0.1, 0.1, 0.55]
            }
        }
    }
}
