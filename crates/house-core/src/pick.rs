//! Ray picking for the clickable door.

use crate::constants::DOOR_PICK_HALF_EXTENTS;
use crate::props::hinge_transform;
use glam::Vec3;

/// Slab-test a ray against an axis-aligned box. Returns the entry distance
/// along the ray, or the exit distance when the origin is inside the box.
pub fn ray_aabb(ray_origin: Vec3, ray_dir: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let inv = ray_dir.recip();
    let t0 = (min - ray_origin) * inv;
    let t1 = (max - ray_origin) * inv;
    let t_min = t0.min(t1);
    let t_max = t0.max(t1);
    let near = t_min.max_element();
    let far = t_max.min_element();
    if near > far || far < 0.0 {
        return None;
    }
    Some(if near >= 0.0 { near } else { far })
}

/// Test a world-space ray against the door slab at the given hinge angle.
///
/// The ray is transformed into slab-local space so the test stays an AABB
/// regardless of how far the door has swung.
pub fn door_hit(ray_origin: Vec3, ray_dir: Vec3, door_angle: f32) -> Option<f32> {
    let inv = hinge_transform(door_angle).inverse();
    let local_origin = inv.transform_point3(ray_origin);
    let local_dir = inv.transform_vector3(ray_dir);
    let half = Vec3::from(DOOR_PICK_HALF_EXTENTS);
    ray_aabb(local_origin, local_dir, -half, half)
}
