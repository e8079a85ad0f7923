use thiserror::Error;
use valuable::Valuable;

use crate::core::types::{IdToken, Number};

/// Errors reported at construction time: [`crate::arena::Arena::new`] and
/// [`crate::core::config::Config::validate`] return this before any disc exists to
/// distinguish bad setup from a tick-time failure.
#[derive(Debug, Clone, Error, Valuable)]
pub enum ConfigError {
    #[error("default radius {radius} must be smaller than the arena inradius {inradius}")]
    RadiusTooLarge { radius: Number, inradius: Number },
    #[error("leaf capacity must be at least 1, got {capacity}")]
    CapacityTooSmall { capacity: u64 },
    #[error("fov aperture must be in (0, 360], got {aperture}")]
    ApertureOutOfRange { aperture: Number },
    #[error("arena dimension must be positive, got {value}")]
    NonPositiveDimension { value: Number },
    #[error("epsilon_rel must be positive, got {epsilon_rel}")]
    InvalidEpsilon { epsilon_rel: Number },
}

/// Tick-time errors. A blocked particle simply doesn't move; these variants exist for the
/// cases the spec calls out as exceptional: an insertion that ran out of retries, or an
/// invariant that an assertion caught.
#[derive(Debug, Clone, Error, Valuable)]
pub enum SimError {
    #[error("placement exhausted for disc {id:?} after {attempted}/{max_iters} attempts")]
    PlacementExhausted {
        id: Option<IdToken>,
        attempted: u64,
        max_iters: u64,
    },

    #[error("invariant violated for disc {id:?}: {detail}")]
    InvariantViolated { id: Option<IdToken>, detail: String },

    #[error(transparent)]
    InvalidConfiguration(#[from] ConfigError),
}
