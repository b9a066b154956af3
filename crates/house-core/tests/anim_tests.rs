use glam::Vec3;
use house_core::anim::{approach, approach_vec3, wrap_angle, DoorHinge, FanRotor};
use house_core::constants::{DOOR_OPEN_ANGLE, FAN_SPEED};

#[test]
fn approach_moves_toward_target_without_overshoot() {
    // Sweep current/target/rate/dt combinations including very large steps
    let values = [-10.0f32, -1.0, 0.0, 0.5, 3.0, 100.0];
    let rates = [0.1f32, 2.0, 4.0, 50.0];
    let dts = [0.0f32, 0.001, 0.016, 0.25, 5.0];
    for &current in &values {
        for &target in &values {
            for &rate in &rates {
                for &dt in &dts {
                    let next = approach(current, target, rate, dt);
                    let before = (target - current).abs();
                    let after = (target - next).abs();
                    assert!(
                        after <= before + 1e-5,
                        "moved away: {current} -> {next} (target {target}, rate {rate}, dt {dt})"
                    );
                    // Never crosses to the far side of the target
                    assert!(
                        (target - current) * (target - next) >= -1e-5,
                        "overshoot: {current} -> {next} past {target}"
                    );
                }
            }
        }
    }
}

#[test]
fn approach_is_strictly_monotonic_while_short_of_target() {
    let mut v = 0.0f32;
    let mut prev = v;
    for _ in 0..200 {
        v = approach(v, 1.0, 3.0, 0.016);
        assert!(v > prev);
        assert!(v <= 1.0);
        prev = v;
    }
}

#[test]
fn approach_holds_at_the_target() {
    assert_eq!(approach(2.5, 2.5, 4.0, 0.1), 2.5);
    // Zero elapsed time is a no-op
    assert_eq!(approach(0.0, 1.0, 4.0, 0.0), 0.0);
}

#[test]
fn approach_vec3_matches_componentwise_scalar() {
    let current = Vec3::new(0.0, 1.0, -2.0);
    let target = Vec3::new(1.0, 1.0, 4.0);
    let stepped = approach_vec3(current, target, 3.0, 0.1);
    for i in 0..3 {
        let scalar = approach(current[i], target[i], 3.0, 0.1);
        assert!((stepped[i] - scalar).abs() < 1e-6);
    }
}

#[test]
fn wrap_angle_stays_in_range() {
    for a in [-100.0f32, -7.0, -0.1, 0.0, 0.1, 6.3, 50.0] {
        let w = wrap_angle(a);
        assert!((0.0..std::f32::consts::TAU).contains(&w), "{a} wrapped to {w}");
    }
}

#[test]
fn door_toggle_twice_returns_to_original_logical_state() {
    let mut door = DoorHinge::default();
    assert!(!door.open);
    door.toggle();
    assert!(door.open);
    door.toggle();
    assert!(!door.open);
}

#[test]
fn door_angle_converges_to_open_angle() {
    let mut door = DoorHinge::default();
    door.toggle();
    for _ in 0..600 {
        door.step(1.0 / 60.0);
    }
    assert!((door.angle - DOOR_OPEN_ANGLE).abs() < 1e-3);
}

#[test]
fn door_angle_converges_back_to_closed() {
    let mut door = DoorHinge {
        open: false,
        angle: DOOR_OPEN_ANGLE,
    };
    for _ in 0..600 {
        door.step(1.0 / 60.0);
    }
    assert!(door.angle.abs() < 1e-3);
}

#[test]
fn door_swing_never_overshoots_either_rest_position() {
    let mut door = DoorHinge::default();
    door.toggle();
    for _ in 0..600 {
        door.step(0.05);
        assert!(door.angle >= DOOR_OPEN_ANGLE - 1e-5);
        assert!(door.angle <= 1e-5);
    }
}

#[test]
fn fan_advances_only_while_spinning() {
    let mut fan = FanRotor::default();
    fan.step(0.1, true);
    let expected = FAN_SPEED * 0.1;
    assert!((fan.angle - expected).abs() < 1e-6);

    let held = fan.angle;
    fan.step(0.5, false);
    assert_eq!(fan.angle, held);
}

#[test]
fn fan_angle_stays_wrapped_over_long_runs() {
    let mut fan = FanRotor::default();
    for _ in 0..10_000 {
        fan.step(0.016, true);
        assert!((0.0..std::f32::consts::TAU).contains(&fan.angle));
    }
}
