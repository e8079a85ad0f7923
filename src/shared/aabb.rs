use std::borrow::Borrow;

use getset::CopyGetters;

use crate::core::types::{Number, Point2, Size2};
use crate::geometry::Segment;

/// An **Axis-Aligned Bounding Box** (AABB)
///
/// The box spans between the two corners `min` and `max`.
#[derive(CopyGetters, Copy, Clone, Debug, PartialEq)]
#[getset(get_copy = "pub")]
pub struct Aabb {
    /// The lower corner of the [`Aabb`]; the corner with the smallest coordinates.
    min: Point2,
    /// The upper corner of the [`Aabb`]; the corner with the largest coordinates.
    max: Point2,
}

// region Constructors

impl Aabb {
    /// Creates a new [`Aabb`] from two points, which do *not* have to be sorted by min/max.
    pub fn new(a: impl Into<Point2>, b: impl Into<Point2>) -> Self {
        let (a, b) = (a.into(), b.into());
        let min = Point2::min(a, b);
        let max = Point2::max(a, b);
        Self { min, max }
    }

    pub fn new_centered(center: impl Into<Point2>, size: impl Into<Size2>) -> Self {
        let (center, size) = (center.into(), size.into());
        let min = center - size.to_vector() / 2.;
        let max = center + size.to_vector() / 2.;
        Self::new(min, max)
    }

    /// Returns an [`Aabb`] that surrounds the two given boxes.
    pub fn encompass(a: impl Borrow<Self>, b: impl Borrow<Self>) -> Self {
        let (a, b) = (a.borrow(), b.borrow());
        let min = Point2::min(a.min, b.min);
        let max = Point2::max(a.max, b.max);
        Self::new(min, max)
    }

    /// [`Self::encompass`] but for an arbitrary number of points. `None` for an empty iterator.
    pub fn encompass_points<P: Borrow<Point2>>(iter: impl IntoIterator<Item = P>) -> Option<Self> {
        let mut iter = iter.into_iter();
        let first = *iter.next()?.borrow();
        let (mut min, mut max) = (first, first);
        for p in iter {
            let p = *p.borrow();
            min = Point2::min(min, p);
            max = Point2::max(max, p);
        }
        Some(Self { min, max })
    }
}

// endregion Constructors

// region Helper

impl Aabb {
    /// Corners in `(min.x,min.y), (max.x,min.y), (min.x,max.y), (max.x,max.y)` order.
    pub fn corners(&self) -> [Point2; 4] {
        let (l, h) = (self.min, self.max);
        [
            Point2::new(l.x, l.y),
            Point2::new(h.x, l.y),
            Point2::new(l.x, h.y),
            Point2::new(h.x, h.y),
        ]
    }

    /// The four border segments, adjacent in the same winding as [`Self::corners`].
    pub fn edges(&self) -> [Segment; 4] {
        let [bl, br, tl, tr] = self.corners();
        [Segment::new(bl, br), Segment::new(br, tr), Segment::new(tr, tl), Segment::new(tl, bl)]
    }

    pub fn size(&self) -> Size2 { Size2::from_vector(self.max - self.min) }
    pub fn area(&self) -> Number {
        let size = self.size().to_vector();
        size.x * size.y
    }
    pub fn center(&self) -> Point2 { self.min + (self.size().to_vector() / 2.0) }

    /// Splits this box into four equal quadrants, in NW, NE, SW, SE order (smaller `y` is
    /// "north", matching the canvas convention the original source draws against).
    pub fn subdivide_quadrants(&self) -> [Aabb; 4] {
        let mid = self.center();
        let nw = Aabb::new(self.min, mid);
        let ne = Aabb::new(Point2::new(mid.x, self.min.y), Point2::new(self.max.x, mid.y));
        let sw = Aabb::new(Point2::new(self.min.x, mid.y), Point2::new(mid.x, self.max.y));
        let se = Aabb::new(mid, self.max);
        [nw, ne, sw, se]
    }
}

// endregion Helper

// region Hit tests

impl Aabb {
    pub fn contains_point(&self, p: Point2, eps: Number) -> bool {
        p.x >= self.min.x - eps && p.x <= self.max.x + eps && p.y >= self.min.y - eps && p.y <= self.max.y + eps
    }

    /// Closed-set intersection with another AABB: touching edges count as intersecting.
    pub fn intersects(&self, other: &Self, eps: Number) -> bool {
        self.min.x <= other.max.x + eps
            && self.max.x >= other.min.x - eps
            && self.min.y <= other.max.y + eps
            && self.max.y >= other.min.y - eps
    }

    /// Closed-set intersection with a circle: tangency counts as intersecting. This is the
    /// predicate the quadtree index uses to decide leaf membership (I2).
    pub fn intersects_circle(&self, center: Point2, radius: Number, eps: Number) -> bool {
        let clamped_x = center.x.clamp(self.min.x, self.max.x);
        let clamped_y = center.y.clamp(self.min.y, self.max.y);
        let dx = center.x - clamped_x;
        let dy = center.y - clamped_y;
        let r = radius + eps;
        dx * dx + dy * dy <= r * r
    }
}

// endregion Hit tests
