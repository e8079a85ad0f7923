use crate::core::types::{Number, Point2, Vector2};
use crate::shared::validate;

/// A directed line segment `a -> b`, grounded in `formula.py`'s segment helpers from the
/// original source.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    pub a: Point2,
    pub b: Point2,
}

impl Segment {
    pub fn new(a: Point2, b: Point2) -> Self { Self { a, b } }

    pub fn v(&self) -> Vector2 { self.b - self.a }

    pub fn squared_distance_from_point(&self, p: Point2) -> Number {
        let v = self.v();
        let len2 = v.length_squared();
        let d2 = if len2 <= Number::EPSILON {
            (p - self.a).length_squared()
        } else {
            let t = (Vector2::dot(p - self.a, v) / len2).clamp(0.0, 1.0);
            let closest = self.a + v * t;
            (p - closest).length_squared()
        };
        validate::number(&d2);
        d2
    }

    pub fn distance_from_point(&self, p: Point2) -> Number { self.squared_distance_from_point(p).sqrt() }

    /// Whether this segment crosses `other`, treating both as closed sets (a shared endpoint
    /// or tangential touch counts as an intersection).
    pub fn intersects(&self, other: &Segment, eps: Number) -> bool {
        self.intersection_params(other, eps).is_some()
    }

    /// The point at which this segment crosses `other`, if they cross as closed sets.
    pub fn intersection_point(&self, other: &Segment, eps: Number) -> Option<Point2> {
        let (t, _u) = self.intersection_params(other, eps)?;
        Some(self.a + self.v() * t)
    }

    fn intersection_params(&self, other: &Segment, eps: Number) -> Option<(Number, Number)> {
        let (p, r) = (self.a, self.v());
        let (q, s) = (other.a, other.v());
        let denom = cross(r, s);
        if denom.abs() <= eps {
            // Parallel or collinear segments have no single well-defined crossing point.
            return None;
        }
        let diff = q - p;
        let t = cross(diff, s) / denom;
        let u = cross(diff, r) / denom;
        if (-eps..=1.0 + eps).contains(&t) && (-eps..=1.0 + eps).contains(&u) {
            Some((t, u))
        } else {
            None
        }
    }

    /// Solves the segment's line equation for `x` given `y`. Degenerate (horizontal) segments
    /// return `a.x`.
    pub fn x_at_y(&self, y: Number) -> Number {
        let v = self.v();
        if v.y.abs() <= Number::EPSILON {
            self.a.x
        } else {
            self.a.x + v.x * (y - self.a.y) / v.y
        }
    }

    /// Solves the segment's line equation for `y` given `x`. Degenerate (vertical) segments
    /// return `a.y`.
    pub fn y_at_x(&self, x: Number) -> Number {
        let v = self.v();
        if v.x.abs() <= Number::EPSILON {
            self.a.y
        } else {
            self.a.y + v.y * (x - self.a.x) / v.x
        }
    }
}

fn cross(a: Vector2, b: Vector2) -> Number { a.x * b.y - a.y * b.x }

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn distance_from_point_clamps_to_segment() {
        let s = Segment::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
        assert_relative_eq!(s.distance_from_point(Point2::new(5.0, 3.0)), 3.0);
        assert_relative_eq!(s.distance_from_point(Point2::new(-4.0, 0.0)), 4.0);
        assert_relative_eq!(s.distance_from_point(Point2::new(14.0, 0.0)), 4.0);
    }

    #[test]
    fn crossing_segments_intersect_at_midpoint() {
        let a = Segment::new(Point2::new(-1.0, 0.0), Point2::new(1.0, 0.0));
        let b = Segment::new(Point2::new(0.0, -1.0), Point2::new(0.0, 1.0));
        let p = a.intersection_point(&b, 1e-9).expect("should cross");
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn parallel_segments_do_not_intersect() {
        let a = Segment::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0));
        let b = Segment::new(Point2::new(0.0, 1.0), Point2::new(1.0, 1.0));
        assert!(!a.intersects(&b, 1e-9));
    }

    #[test]
    fn x_at_y_and_y_at_x_solve_the_line() {
        let s = Segment::new(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0));
        assert_relative_eq!(s.y_at_x(5.0), 5.0);
        assert_relative_eq!(s.x_at_y(5.0), 5.0);
    }
}
