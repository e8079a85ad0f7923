//! Arena boundary shapes (§4.2), grounded in `graphic.py`'s `Circle`/`Rectangle` hit tests.
//! The source's multiple-inheritance hierarchy (`Shape2D` + `Graphic2D` + `Collider2D`)
//! collapses to a single tagged variant with free functions dispatching on it (§9).

use crate::core::types::{Number, Point2, Size2};
use crate::shared::aabb::Aabb;

/// The arena's outer boundary: a circle or an axis-aligned rectangle, both centered.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape {
    Circle { center: Point2, radius: Number },
    Rectangle { center: Point2, width: Number, height: Number },
}

impl Shape {
    pub fn center(&self) -> Point2 {
        match *self {
            Self::Circle { center, .. } => center,
            Self::Rectangle { center, .. } => center,
        }
    }

    /// The largest radius a disc centered at [`Self::center`] can have while this shape
    /// still confines it: half the shorter rectangle side, or the circle's own radius.
    pub fn inradius(&self) -> Number {
        match *self {
            Self::Circle { radius, .. } => radius,
            Self::Rectangle { width, height, .. } => width.min(height) / 2.0,
        }
    }

    /// The root quadrant's bounds (I6): the shape's own AABB, or for a circle the
    /// `2R x 2R` square centered on it (`zone.py`'s `Quadtree(Quadrant(x, y, 2*radius, 2*radius))`).
    pub fn aabb(&self) -> Aabb {
        match *self {
            Self::Circle { center, radius } => Aabb::new_centered(center, Size2::new(2.0 * radius, 2.0 * radius)),
            Self::Rectangle { center, width, height } => Aabb::new_centered(center, Size2::new(width, height)),
        }
    }

    /// Whether `point` lies on or inside the boundary.
    pub fn contains_point(&self, point: Point2, eps: Number) -> bool {
        match *self {
            Self::Circle { center, radius } => (point - center).length_squared() <= radius * radius + eps,
            Self::Rectangle { center, width, height } => {
                let (hw, hh) = (width / 2.0, height / 2.0);
                point.x >= center.x - hw - eps
                    && point.x <= center.x + hw + eps
                    && point.y >= center.y - hh - eps
                    && point.y <= center.y + hh + eps
            }
        }
    }

    /// Whether a disc at `disc_center` with `disc_radius` touches or crosses the boundary
    /// (closed set; `graphic.py`'s `collides_circle`).
    pub fn collides_circle(&self, disc_center: Point2, disc_radius: Number, eps: Number) -> bool {
        match *self {
            Self::Circle { center, radius } => {
                let d2 = (disc_center - center).length_squared();
                let threshold = (radius + disc_radius).powi(2);
                d2 <= threshold + eps
            }
            Self::Rectangle { center, width, height } => {
                let (hw, hh) = (width / 2.0, height / 2.0);
                let left = disc_center.x + disc_radius >= center.x - hw - eps;
                let right = disc_center.x - disc_radius <= center.x + hw + eps;
                let top = disc_center.y + disc_radius >= center.y - hh - eps;
                let bottom = disc_center.y - disc_radius <= center.y + hh + eps;
                left && right && top && bottom
            }
        }
    }

    /// Whether a disc at `disc_center` with `disc_radius` strictly crosses the boundary,
    /// excluding tangency (`graphic.py`'s `overlaps_circle`).
    pub fn overlaps_circle(&self, disc_center: Point2, disc_radius: Number, eps: Number) -> bool {
        self.collides_circle(disc_center, disc_radius, -eps)
    }

    /// Whether a disc at `disc_center` with `disc_radius` lies entirely within the boundary,
    /// tangency permitted (I4; `graphic.py`'s `confines_circle`).
    pub fn confines_circle(&self, disc_center: Point2, disc_radius: Number, eps: Number) -> bool {
        match *self {
            Self::Circle { center, radius } => {
                let d = (disc_center - center).length();
                d + disc_radius <= radius + eps
            }
            Self::Rectangle { center, width, height } => {
                let (hw, hh) = (width / 2.0, height / 2.0);
                let left = disc_center.x - disc_radius >= center.x - hw - eps;
                let right = disc_center.x + disc_radius <= center.x + hw + eps;
                let top = disc_center.y - disc_radius >= center.y - hh - eps;
                let bottom = disc_center.y + disc_radius <= center.y + hh + eps;
                left && right && top && bottom
            }
        }
    }
}
