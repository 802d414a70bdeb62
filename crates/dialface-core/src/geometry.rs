//! Polar placement on the clock face plane.
//!
//! The face lies in the XY plane with its normal along +Z. Angles are
//! measured counter-clockwise from +X, in radians unless a name says
//! otherwise.

use glam::{Mat3, Quat, Vec3};

/// Convert polar coordinates on the face plane to a Cartesian point.
///
/// ```text
///   x = r × cos(θ)
///   y = r × sin(θ)
///   z = 0
/// ```
pub fn polar_to_cartesian(radius: f32, radians: f32) -> Vec3 {
    let (sin, cos) = radians.sin_cos();
    Vec3::new(radius * cos, radius * sin, 0.0)
}

/// Inverse of [`polar_to_cartesian`]. The Z component is ignored.
///
/// Returns `(radius, radians)` with the angle in `(-π, π]`.
pub fn cartesian_to_polar(point: Vec3) -> (f32, f32) {
    (point.truncate().length(), point.y.atan2(point.x))
}

/// Rotation that looks along `forward` with `up` as the up hint.
///
/// Left-handed basis: local +Z maps to `forward`, local +Y to the component
/// of `up` orthogonal to it. Returns `None` when the two are parallel.
pub fn look_rotation(forward: Vec3, up: Vec3) -> Option<Quat> {
    let forward = forward.try_normalize()?;
    let right = up.cross(forward).try_normalize()?;
    let up = forward.cross(right);
    Some(Quat::from_mat3(&Mat3::from_cols(right, up, forward)))
}

/// Keep only the twist of `rotation` about the face normal.
///
/// Zeroes the X and Y quaternion components and renormalises, so the result
/// rotates about Z alone.
pub fn twist_about_normal(rotation: Quat) -> Quat {
    let twist = Quat::from_xyzw(0.0, 0.0, rotation.z, rotation.w);
    if twist.length_squared() > f32::EPSILON {
        twist.normalize()
    } else {
        Quat::IDENTITY
    }
}

/// Orientation for a marker at `position` that faces away from `center`.
///
/// Built from a look rotation toward the center, restricted to the face
/// normal. The marker's local +Y ends up pointing radially outward.
pub fn outward_facing(position: Vec3, center: Vec3) -> Quat {
    look_rotation(center - position, Vec3::Z)
        .map(twist_about_normal)
        .unwrap_or(Quat::IDENTITY)
}
