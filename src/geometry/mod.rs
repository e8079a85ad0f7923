//! Free geometric helper functions shared by shapes, the quadtree index, the motion
//! resolver and the vision query. Grounded in `formula.py` from the original source.

pub mod segment;

pub use segment::Segment;

use crate::core::types::{Number, Point2, Vector2};
use crate::shared::aabb::Aabb;
use crate::shared::validate;

/// Angle between two vectors, in radians, in `[0, π]`. Returns `0` if either vector has no
/// well-defined direction (~zero length).
pub fn angle_between(a: Vector2, b: Vector2) -> Number {
    let (la, lb) = (a.length(), b.length());
    if la <= Number::EPSILON || lb <= Number::EPSILON {
        return 0.0;
    }
    let cos_theta = (Vector2::dot(a, b) / (la * lb)).clamp(-1.0, 1.0);
    let angle = cos_theta.acos();
    validate::number(&angle);
    angle
}

/// Rotates `v` counter-clockwise by `angle_rad` radians.
pub fn rotate_vector(v: Vector2, angle_rad: Number) -> Vector2 {
    let (sin, cos) = angle_rad.sin_cos();
    let rotated = Vector2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos);
    validate::vector2(&rotated);
    rotated
}

/// Vector projection of `v` onto `onto`. Returns the zero vector if `onto` has no
/// well-defined direction.
pub fn project_onto(v: Vector2, onto: Vector2) -> Vector2 {
    let len2 = onto.length_squared();
    if len2 <= Number::EPSILON {
        return Vector2::ZERO;
    }
    onto * (Vector2::dot(v, onto) / len2)
}

/// Resizes `v` to `length`, preserving direction. Returns the zero vector if `v` has no
/// well-defined direction.
pub fn resize_to(v: Vector2, length: Number) -> Vector2 {
    match v.try_normalize() {
        Some(unit) => unit * length,
        None => Vector2::ZERO,
    }
}

/// AABB of the oriented swept corridor: the rectangle of half-width `radius` centred on
/// segment `from -> to`, its length also padded by `radius` on each end. Used by
/// `query_swept_corridor` as a cheap pre-filter; exact candidate tests happen in the motion
/// resolver.
pub fn swept_corridor_aabb(from: Point2, to: Point2, radius: Number) -> Aabb {
    let dir = to - from;
    let len = dir.length();
    let (unit, perp) = if len <= Number::EPSILON {
        (Vector2::new(1.0, 0.0), Vector2::new(0.0, 1.0))
    } else {
        let u = dir / len;
        (u, Vector2::new(-u.y, u.x))
    };
    let half_len = len / 2.0 + radius;
    let center = from + dir / 2.0;
    let corners = [
        center + unit * half_len + perp * radius,
        center + unit * half_len - perp * radius,
        center - unit * half_len + perp * radius,
        center - unit * half_len - perp * radius,
    ];
    Aabb::encompass_points(corners).expect("four corners is never empty")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn angle_between_perpendicular_vectors_is_quarter_turn() {
        let a = Vector2::new(1.0, 0.0);
        let b = Vector2::new(0.0, 1.0);
        assert_relative_eq!(angle_between(a, b), std::f64::consts::FRAC_PI_2, epsilon = 1e-9);
    }

    #[test]
    fn project_onto_axis_isolates_component() {
        let v = Vector2::new(3.0, 4.0);
        let onto = Vector2::new(1.0, 0.0);
        let p = project_onto(v, onto);
        assert_relative_eq!(p.x, 3.0);
        assert_relative_eq!(p.y, 0.0);
    }

    #[test]
    fn resize_to_preserves_direction() {
        let v = Vector2::new(3.0, 4.0);
        let r = resize_to(v, 10.0);
        assert_relative_eq!(r.length(), 10.0, epsilon = 1e-9);
        assert_relative_eq!(r.x / r.y, v.x / v.y, epsilon = 1e-9);
    }

    #[test]
    fn swept_corridor_aabb_covers_endpoints_and_radius() {
        let aabb = swept_corridor_aabb(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0), 2.0);
        assert!(aabb.min().x <= -2.0 + 1e-9);
        assert!(aabb.max().x >= 12.0 - 1e-9);
        assert!(aabb.min().y <= -2.0 + 1e-9);
        assert!(aabb.max().y >= 2.0 - 1e-9);
    }
}
