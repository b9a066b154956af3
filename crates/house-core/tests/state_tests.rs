use house_core::ambience::{settings, AMBIENCE_SETTINGS};
use house_core::state::{Ambience, HouseState, Room};
use house_core::ui::Action;

#[test]
fn defaults_match_startup_scene() {
    let state = HouseState::default();
    assert!(!state.tv_on);
    assert!(state.lights_on);
    assert!(state.fan_on);
    assert_eq!(state.ambience, Ambience::Calm);
    assert_eq!(state.room, Room::Overview);
}

#[test]
fn toggling_tv_leaves_other_fields_unchanged() {
    let mut state = HouseState::default();
    let before = state.clone();
    state.toggle_tv();
    assert!(state.tv_on);
    assert_eq!(state.lights_on, before.lights_on);
    assert_eq!(state.fan_on, before.fan_on);
    assert_eq!(state.ambience, before.ambience);
    assert_eq!(state.room, before.room);
}

#[test]
fn toggling_lights_leaves_other_fields_unchanged() {
    let mut state = HouseState::default();
    let before = state.clone();
    state.toggle_lights();
    assert!(!state.lights_on);
    assert_eq!(state.tv_on, before.tv_on);
    assert_eq!(state.fan_on, before.fan_on);
    assert_eq!(state.ambience, before.ambience);
    assert_eq!(state.room, before.room);
}

#[test]
fn toggling_fan_leaves_other_fields_unchanged() {
    let mut state = HouseState::default();
    let before = state.clone();
    state.toggle_fan();
    assert!(!state.fan_on);
    assert_eq!(state.tv_on, before.tv_on);
    assert_eq!(state.lights_on, before.lights_on);
    assert_eq!(state.ambience, before.ambience);
    assert_eq!(state.room, before.room);
}

#[test]
fn toggle_twice_restores_original_state() {
    let mut state = HouseState::default();
    let before = state.clone();
    state.toggle_tv();
    state.toggle_tv();
    state.toggle_lights();
    state.toggle_lights();
    state.toggle_fan();
    state.toggle_fan();
    assert_eq!(state, before);
}

#[test]
fn each_ambience_selects_its_own_settings_row() {
    for (i, ambience) in Ambience::ALL.into_iter().enumerate() {
        assert_eq!(*settings(ambience), AMBIENCE_SETTINGS[i]);
    }
}

#[test]
fn ambience_rows_are_distinct() {
    // A wrong index would silently reuse another preset's constants
    for i in 0..AMBIENCE_SETTINGS.len() {
        for j in (i + 1)..AMBIENCE_SETTINGS.len() {
            assert_ne!(AMBIENCE_SETTINGS[i], AMBIENCE_SETTINGS[j]);
        }
    }
}

#[test]
fn set_ambience_updates_all_derived_constants_together() {
    let mut state = HouseState::default();
    state.set_ambience(Ambience::Neon);
    let s = settings(state.ambience);
    assert_eq!(s.background, [0.133, 0.0, 0.133]);
    assert_eq!(s.ambient_intensity, 0.2);
    assert_eq!(s.bulb_color, [1.0, 0.0, 1.0]);
    assert_eq!(s.bulb_intensity, 2.0);
    assert_eq!(s.shadow_tint, [0.133, 0.0, 0.2]);
}

#[test]
fn every_room_is_reachable() {
    let mut state = HouseState::default();
    for room in Room::ALL {
        state.set_room(room);
        assert_eq!(state.room, room);
    }
}

#[test]
fn set_room_leaves_toggles_unchanged() {
    let mut state = HouseState::default();
    state.set_room(Room::Bedroom);
    assert!(!state.tv_on);
    assert!(state.lights_on);
    assert!(state.fan_on);
    assert_eq!(state.ambience, Ambience::Calm);
}

#[test]
fn actions_map_onto_state_mutations() {
    let mut state = HouseState::default();
    Action::ToggleTv.apply(&mut state);
    assert!(state.tv_on);
    Action::ToggleLights.apply(&mut state);
    assert!(!state.lights_on);
    Action::ToggleFan.apply(&mut state);
    assert!(!state.fan_on);
    Action::SetAmbience(Ambience::Midnight).apply(&mut state);
    assert_eq!(state.ambience, Ambience::Midnight);
    Action::SetRoom(Room::Living).apply(&mut state);
    assert_eq!(state.room, Room::Living);
}

#[test]
fn labels_are_stable() {
    assert_eq!(Ambience::Calm.label(), "calm");
    assert_eq!(Ambience::Daylight.label(), "daylight");
    assert_eq!(Ambience::Midnight.label(), "midnight");
    assert_eq!(Ambience::Neon.label(), "neon");
    assert_eq!(Room::Overview.label(), "overview");
    assert_eq!(Room::Living.label(), "living");
    assert_eq!(Room::Bedroom.label(), "bedroom");
}
