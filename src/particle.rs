//! The disc-shaped agent (§3 "Disc"), grounded in `particle.py`'s `Particle(Circle, ...)`.
//! A `Particle` owns nothing but its own identity and geometry; the motion resolver and
//! vision query are free functions/methods elsewhere that operate on it through the world.

use getset::{CopyGetters, Setters};

use crate::core::error::ConfigError;
use crate::core::types::{IdToken, Number, Point2, Vector2};
use crate::shared::validate;

/// A field of view: `range` is the sight distance, `aperture` the full cone angle in degrees.
/// Mirrors `particle.py`'s `field_of_view = (range, aperture)` tuple.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Fov {
    pub range: Number,
    pub aperture: Number,
}

impl Fov {
    /// §7 "Invalid configuration": an aperture outside `(0, 360]` fails construction rather
    /// than being silently accepted in release builds.
    pub fn new(range: Number, aperture: Number) -> Result<Self, ConfigError> {
        validate::radius(&range);
        if !(aperture > 0.0 && aperture <= 360.0) {
            return Err(ConfigError::ApertureOutOfRange { aperture });
        }
        Ok(Self { range, aperture })
    }
}

/// A disc-shaped agent: identity, position, radius, facing, and an optional vision cone.
#[derive(Clone, Debug, PartialEq, CopyGetters, Setters)]
pub struct Particle {
    #[getset(get_copy = "pub")]
    id: IdToken,
    #[getset(get_copy = "pub")]
    center: Point2,
    #[getset(get_copy = "pub")]
    radius: Number,
    /// Facing direction in degrees, `[0, 360)`. `particle.py`'s `Particle.rotate`.
    #[getset(get_copy = "pub")]
    orientation: Number,
    #[getset(get_copy = "pub", set = "pub")]
    fov: Option<Fov>,
}

impl Particle {
    pub fn new(id: IdToken, center: Point2, radius: Number) -> Self {
        validate::point2(&center);
        validate::radius(&radius);
        Self {
            id,
            center,
            radius,
            orientation: 0.0,
            fov: None,
        }
    }

    pub fn with_orientation(mut self, degrees: Number) -> Self {
        self.set_orientation(degrees);
        self
    }

    pub fn with_fov(mut self, fov: Fov) -> Self {
        self.fov = Some(fov);
        self
    }

    /// Sets the facing direction, normalizing into `[0, 360)` as `rotate` would after
    /// repeated calls (`particle.py`'s `self._rotation += angle` has no such normalization;
    /// this crate keeps the invariant explicit instead of letting it drift unbounded).
    pub fn set_orientation(&mut self, degrees: Number) {
        let normalized = degrees.rem_euclid(360.0);
        validate::orientation_degrees(&normalized);
        self.orientation = normalized;
    }

    /// Adds `delta_degrees` to the current facing, normalizing into `[0, 360)`.
    pub fn rotate(&mut self, delta_degrees: Number) { self.set_orientation(self.orientation + delta_degrees); }

    pub(crate) fn set_center(&mut self, center: Point2) {
        validate::point2(&center);
        self.center = center;
    }

    /// Unit vector pointing in [`Self::orientation`], used as the default vision facing.
    pub fn facing_vector(&self) -> Vector2 {
        let theta = self.orientation.to_radians();
        Vector2::new(theta.cos(), theta.sin())
    }

    /// Squared center-to-center distance.
    pub fn squared_distance_from(&self, other: &Particle) -> Number { (other.center - self.center).length_squared() }

    /// Surface-to-surface distance; negative when the discs overlap (`graphic.py`'s
    /// `Circle.distance_from_circle`).
    pub fn distance_from_circle(&self, other: &Particle) -> Number {
        (other.center - self.center).length() - self.radius - other.radius
    }

    /// Whether this disc touches or crosses `other` (closed set; tangency counts).
    pub fn collides(&self, other: &Particle, eps: Number) -> bool {
        let d2 = self.squared_distance_from(other);
        let threshold = (self.radius + other.radius).powi(2);
        d2 <= threshold + eps
    }

    /// Whether this disc strictly crosses `other`, excluding tangency (I5's "overlap").
    pub fn overlaps(&self, other: &Particle, eps: Number) -> bool {
        let d2 = self.squared_distance_from(other);
        let threshold = (self.radius + other.radius).powi(2);
        d2 <= threshold - eps
    }
}
