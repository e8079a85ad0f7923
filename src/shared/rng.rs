//! Random source abstraction (§9 "Random source") plus the 2D sampling helpers built on
//! top of it. Mirrors the reference's `shared::rng` free-function module, adapted from 3D
//! vectors/colours to the 2D points this crate samples.

use rand::Rng;

use crate::core::types::{Number, Vector2};
use crate::shared::validate;

/// Yields uniform reals in `[0, 1)`. Insertion and direction-sampling are the only callers
/// (§5); implementations that share a generator across threads must serialize calls.
pub trait RandomSource {
    fn next_f64(&mut self) -> Number;

    /// Uniform real in `[lo, hi)`.
    fn next_range(&mut self, lo: Number, hi: Number) -> Number {
        let t = self.next_f64();
        let v = lo + t * (hi - lo);
        validate::number(&v);
        v
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_f64(&mut self) -> Number { self.gen_range(0.0..1.0) }
}

/// Draws an angle in `[min_degrees, max_degrees)` and returns the unit-length direction it
/// describes, mirroring `Particle.move`'s `math.radians(random() * (max - min) + min)`.
pub fn direction_in_degree_range(rng: &mut impl RandomSource, min_degrees: Number, max_degrees: Number) -> Vector2 {
    let theta = rng.next_range(min_degrees, max_degrees).to_radians();
    let v = Vector2::new(theta.cos(), theta.sin());
    validate::vector2(&v);
    v
}
