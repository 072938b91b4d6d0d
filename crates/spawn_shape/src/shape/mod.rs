//! Spawn shapes: geometric samplers that place one particle per call.
//!
//! Every shape implements [`SpawnShape`]. A shape is built once from its
//! config, holds only immutable parameters, and draws each sample
//! independently from the RNG passed in by the caller.
use core::f32::consts::TAU;

use mint::Vector2;
use rand::RngCore;
use tracing::warn;

use crate::target::{SpawnPoint, SpawnTarget};

pub mod config;
pub mod oval;
pub mod rect;
pub mod torus;

pub use config::{ShapeConfig, SHAPE_TYPES};
pub use oval::{Oval, OvalConfig};
pub use rect::{Rect, RectConfig};
pub use torus::{Torus, TorusConfig};

/// Trait for spawn position sampling.
pub trait SpawnShape: Send + Sync {
    /// Stable tag identifying the shape variant, e.g. `"oval"`.
    fn shape_type(&self) -> &'static str;

    /// Configured center offset in the emitter's local space.
    ///
    /// [`SpawnShape::sample`] does not apply it; callers translate the
    /// sampled position themselves.
    fn center(&self) -> Vector2<f32>;

    /// Whether [`SpawnShape::sample`] also writes an outward rotation.
    fn affects_rotation(&self) -> bool;

    /// Overwrite `target` with one new sample.
    fn sample(&self, target: &mut dyn SpawnTarget, rng: &mut dyn RngCore);

    /// Draw one sample into a fresh [`SpawnPoint`].
    fn sample_point(&self, rng: &mut dyn RngCore) -> SpawnPoint {
        let mut point = SpawnPoint::default();
        self.sample(&mut point, rng);
        point
    }
}

/// Generate a random float in the range [0, 1).
///
/// Uses the top 24 bits of one draw so every value is exactly representable
/// and `1.0` is never produced.
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    const SCALE: f32 = 1.0 / (1u32 << 24) as f32;
    (rng.next_u32() >> 8) as f32 * SCALE
}

/// Generate a random angle in the range [0, 2π).
#[inline]
pub(crate) fn rand_angle(rng: &mut dyn RngCore) -> f32 {
    (rand01(rng) * TAU).min(next_down(TAU))
}

/// Compute the next smaller representable float value.
#[inline]
pub(crate) fn next_down(val: f32) -> f32 {
    if val.is_nan() {
        return f32::NAN;
    }

    if val == f32::NEG_INFINITY {
        return f32::NEG_INFINITY;
    }

    if val == f32::INFINITY {
        return f32::MAX;
    }

    if val == 0.0 {
        return -f32::MIN_POSITIVE;
    }

    let bits = val.to_bits();
    if val > 0.0 {
        f32::from_bits(bits.saturating_sub(1))
    } else {
        f32::from_bits(bits.saturating_add(1))
    }
}

/// Replace a non-finite config value with `0.0`.
pub(crate) fn finite_or_zero(shape: &'static str, field: &'static str, value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        warn!(shape, field, value, "non-finite shape parameter replaced with 0");
        0.0
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use rand::RngCore;

    /// RNG stub that replays fixed `u32` draws in a loop.
    pub(crate) struct SequenceRng {
        values: Vec<u32>,
        index: usize,
    }

    impl SequenceRng {
        pub(crate) fn new(values: &[u32]) -> Self {
            assert!(!values.is_empty());
            Self {
                values: values.to_vec(),
                index: 0,
            }
        }

        /// Draws that map to the given unit fractions through `rand01`.
        pub(crate) fn from_fractions(fractions: &[f32]) -> Self {
            let values: Vec<u32> = fractions
                .iter()
                .map(|f| ((f * (1u32 << 24) as f32) as u32) << 8)
                .collect();
            Self::new(&values)
        }
    }

    impl RngCore for SequenceRng {
        fn next_u32(&mut self) -> u32 {
            let v = self.values[self.index % self.values.len()];
            self.index += 1;
            v
        }

        fn next_u64(&mut self) -> u64 {
            self.next_u32() as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let bytes = self.next_u32().to_le_bytes();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = bytes[i % 4];
            }
        }
    }
}
