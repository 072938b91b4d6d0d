//! Torus spawn shape: a filled circle or a ring (annulus).
use glam::Vec2;
use mint::Vector2;
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::shape::{finite_or_zero, rand01, rand_angle, SpawnShape};
use crate::target::SpawnTarget;

/// Configuration for a [`Torus`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TorusConfig {
    /// X position of the center of the shape.
    pub x: f32,
    /// Y position of the center of the shape.
    pub y: f32,
    /// Radius of the circle, or outer radius of the ring.
    pub radius: f32,
    /// Inner radius of the ring. Use 0 for a filled circle.
    pub inner_radius: f32,
    /// Aim spawned particles away from the center.
    pub affect_rotation: bool,
}

impl TorusConfig {
    /// A filled circle of `radius`.
    pub fn circle(radius: f32) -> Self {
        Self {
            radius,
            ..Default::default()
        }
    }

    /// A ring between `inner_radius` and `radius`.
    pub fn ring(radius: f32, inner_radius: f32) -> Self {
        Self {
            radius,
            inner_radius,
            ..Default::default()
        }
    }

    /// Sets the center offset.
    pub fn with_center(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Enable/disable the outward rotation (builder-style).
    pub fn with_affect_rotation(mut self, affect_rotation: bool) -> Self {
        self.affect_rotation = affect_rotation;
        self
    }
}

/// Spawns particles uniformly by area inside a circle or ring.
///
/// With equal radii the ring degenerates to the circle boundary.
#[derive(Debug, Clone)]
pub struct Torus {
    center: Vec2,
    radius: f32,
    inner_radius: f32,
    affect_rotation: bool,
}

impl Torus {
    /// Tag used by configuration data to select this shape.
    pub const TYPE: &'static str = "torus";

    /// Build a torus from `config`.
    ///
    /// Non-finite numbers become `0.0`, negative radii are mirrored and the
    /// radii are swapped if the inner one is larger.
    pub fn new(config: &TorusConfig) -> Self {
        let mut radius = finite_or_zero(Self::TYPE, "radius", config.radius).abs();
        let mut inner_radius =
            finite_or_zero(Self::TYPE, "inner_radius", config.inner_radius).abs();
        if inner_radius > radius {
            warn!(radius, inner_radius, "torus inner radius exceeds outer radius; swapping");
            core::mem::swap(&mut radius, &mut inner_radius);
        }

        debug!(radius, inner_radius, "built torus spawn shape");
        Self {
            center: Vec2::new(
                finite_or_zero(Self::TYPE, "x", config.x),
                finite_or_zero(Self::TYPE, "y", config.y),
            ),
            radius,
            inner_radius,
            affect_rotation: config.affect_rotation,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn inner_radius(&self) -> f32 {
        self.inner_radius
    }
}

impl From<TorusConfig> for Torus {
    fn from(config: TorusConfig) -> Self {
        Self::new(&config)
    }
}

impl SpawnShape for Torus {
    fn shape_type(&self) -> &'static str {
        Self::TYPE
    }

    fn center(&self) -> Vector2<f32> {
        self.center.into()
    }

    fn affects_rotation(&self) -> bool {
        self.affect_rotation
    }

    fn sample(&self, target: &mut dyn SpawnTarget, rng: &mut dyn RngCore) {
        let theta = rand_angle(rng);

        let dist = if self.inner_radius == self.radius {
            self.radius
        } else {
            // Area-uniform radius between the two circles.
            let inner_sq = self.inner_radius * self.inner_radius;
            let outer_sq = self.radius * self.radius;
            (rand01(rng) * (outer_sq - inner_sq) + inner_sq).sqrt()
        };

        let (sin, cos) = theta.sin_cos();
        target.set_position(Vector2 {
            x: dist * cos,
            y: dist * sin,
        });
        if self.affect_rotation {
            target.set_rotation(theta);
        }
    }
}

#[cfg(test)]
mod tests {
    use core::f32::consts::{FRAC_1_SQRT_2, FRAC_PI_2};

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::shape::test_support::SequenceRng;

    #[test]
    fn ring_samples_stay_in_annulus() {
        let torus = Torus::new(&TorusConfig::ring(10.0, 4.0));
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let d = torus.sample_point(&mut rng).position.length();
            assert!((4.0 - 1e-4..=10.0 + 1e-4).contains(&d), "distance {d}");
        }
    }

    #[test]
    fn equal_radii_sample_the_boundary() {
        let torus = Torus::new(&TorusConfig::ring(5.0, 5.0));
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let d = torus.sample_point(&mut rng).position.length();
            assert!((d - 5.0).abs() < 1e-4);
        }
    }

    #[test]
    fn disc_is_area_uniform() {
        // Half the area of a disc lies inside r / sqrt(2).
        let torus = Torus::new(&TorusConfig::circle(1.0));
        let mut rng = StdRng::seed_from_u64(77);
        let n = 20_000;
        let inside = (0..n)
            .filter(|_| torus.sample_point(&mut rng).position.length() < FRAC_1_SQRT_2)
            .count();
        let frac = inside as f32 / n as f32;
        assert!((frac - 0.5).abs() < 0.02, "inner fraction {frac}");
    }

    #[test]
    fn fixed_draws_give_expected_point_and_rotation() {
        // Angle draw 0.25 -> pi/2, radius draw 0.0 -> inner radius.
        let torus = Torus::new(&TorusConfig::ring(8.0, 2.0).with_affect_rotation(true));
        let mut rng = SequenceRng::from_fractions(&[0.25, 0.0]);
        let p = torus.sample_point(&mut rng);
        assert!(p.position.x.abs() < 1e-5);
        assert!((p.position.y - 2.0).abs() < 1e-5);
        assert_eq!(p.rotation, FRAC_PI_2);
    }

    #[test]
    fn construction_normalizes_radii() {
        let torus = Torus::new(&TorusConfig::ring(-3.0, 6.0));
        assert_eq!(torus.radius(), 6.0);
        assert_eq!(torus.inner_radius(), 3.0);

        let torus = Torus::new(&TorusConfig::ring(f32::NAN, f32::INFINITY));
        assert_eq!(torus.radius(), 0.0);
        assert_eq!(torus.inner_radius(), 0.0);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(torus.sample_point(&mut rng).position, Vec2::ZERO);
    }

    #[test]
    fn reports_tag_and_center() {
        let torus = Torus::new(&TorusConfig::circle(1.0).with_center(2.0, 3.0));
        assert_eq!(torus.shape_type(), "torus");
        assert_eq!(Vec2::from(torus.center()), Vec2::new(2.0, 3.0));
        assert!(!torus.affects_rotation());
    }
}
