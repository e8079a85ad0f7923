use std::num::NonZeroUsize;

use nonzero::nonzero;
use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;
use crate::core::types::{Number, Point2};
use crate::shapes::Shape;

/// Serializable description of the arena boundary; converted to a [`Shape`] at construction.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub enum ArenaShapeConfig {
    Circle { center: (Number, Number), radius: Number },
    Rectangle { center: (Number, Number), width: Number, height: Number },
}

impl ArenaShapeConfig {
    pub fn to_shape(self) -> Shape {
        match self {
            Self::Circle { center, radius } => Shape::Circle {
                center: Point2::new(center.0, center.1),
                radius,
            },
            Self::Rectangle { center, width, height } => Shape::Rectangle {
                center: Point2::new(center.0, center.1),
                width,
                height,
            },
        }
    }

    pub fn inradius(&self) -> Number {
        match *self {
            Self::Circle { radius, .. } => radius,
            Self::Rectangle { width, height, .. } => width.min(height) / 2.0,
        }
    }
}

/// How a freshly-inserted particle's radius is chosen. Mirrors `add_random_circles`'s
/// `random_radius` flag from the original source, generalised to an explicit policy.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub enum RadiusPolicy {
    Fixed(Number),
    UniformRange(Number, Number),
}

/// Every tunable the core recognizes (§6). Validated as a whole via [`Config::validate`]
/// before any constructor that accepts one will use it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    pub arena_shape: ArenaShapeConfig,
    pub leaf_capacity: NonZeroUsize,
    /// `None` means "derive from arena size and max radius" (see [`Config::resolved_max_depth`]).
    pub max_depth: Option<u32>,
    pub default_radius: Number,
    pub random_radius_enabled: bool,
    pub random_radius_range: (Number, Number),
    pub max_placement_retries: usize,
    pub epsilon_rel: Number,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_shape: ArenaShapeConfig::Circle {
                center: (0.0, 0.0),
                radius: 200.0,
            },
            leaf_capacity: nonzero!(4usize),
            max_depth: None,
            default_radius: 10.0,
            random_radius_enabled: false,
            random_radius_range: (5.0, 15.0),
            max_placement_retries: 100,
            epsilon_rel: 1e-9,
        }
    }
}

impl Config {
    pub fn radius_policy(&self) -> RadiusPolicy {
        if self.random_radius_enabled {
            RadiusPolicy::UniformRange(self.random_radius_range.0, self.random_radius_range.1)
        } else {
            RadiusPolicy::Fixed(self.default_radius)
        }
    }

    /// Performs the "Invalid configuration" checks from §7: radius >= inradius, capacity < 1
    /// (unrepresentable since `leaf_capacity` is already a `NonZeroUsize`, checked anyway for
    /// symmetry with a config loaded from an external source), degenerate arena dimensions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.epsilon_rel <= 0.0 {
            return Err(ConfigError::InvalidEpsilon {
                epsilon_rel: self.epsilon_rel,
            });
        }
        if self.leaf_capacity.get() < 1 {
            return Err(ConfigError::CapacityTooSmall {
                capacity: self.leaf_capacity.get() as u64,
            });
        }

        match self.arena_shape {
            ArenaShapeConfig::Rectangle { width, height, .. } if width <= 0.0 || height <= 0.0 => {
                return Err(ConfigError::NonPositiveDimension {
                    value: width.min(height),
                });
            }
            ArenaShapeConfig::Circle { radius, .. } if radius <= 0.0 => {
                return Err(ConfigError::NonPositiveDimension { value: radius });
            }
            _ => {}
        }

        let inradius = self.arena_shape.inradius();
        if self.default_radius <= 0.0 || self.default_radius >= inradius {
            return Err(ConfigError::RadiusTooLarge {
                radius: self.default_radius,
                inradius,
            });
        }
        if self.random_radius_enabled {
            let (lo, hi) = self.random_radius_range;
            if lo <= 0.0 || hi < lo || hi >= inradius {
                return Err(ConfigError::RadiusTooLarge { radius: hi, inradius });
            }
        }

        Ok(())
    }

    /// `⌈log2(arena_min_side / (2 * max_radius))⌉`, bounding the smallest leaf side to at
    /// least twice the largest disc that will ever be inserted.
    pub fn resolved_max_depth(&self, max_disc_radius: Number) -> u32 {
        match self.max_depth {
            Some(d) => d,
            None => {
                let min_side = 2.0 * self.arena_shape.inradius();
                let target_leaf = 2.0 * max_disc_radius.max(1e-6);
                (min_side / target_leaf).log2().ceil().max(0.0) as u32
            }
        }
    }
}
