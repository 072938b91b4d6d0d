//! Oval spawn shape: samples points on the boundary of an ellipse.
use glam::Vec2;
use mint::Vector2;
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::shape::{finite_or_zero, rand_angle, SpawnShape};
use crate::target::SpawnTarget;

/// Configuration for an [`Oval`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OvalConfig {
    /// X position of the center of the shape.
    pub x: f32,
    /// Y position of the center of the shape.
    pub y: f32,
    /// Radius of a circle, or outer radius of a ring. Not used by ovals.
    pub radius: f32,
    /// Inner radius of a ring. Not used by ovals.
    pub inner_radius: f32,
    /// Half-length of the ellipse along the x axis.
    pub semi_major_axis: f32,
    /// Half-length of the ellipse along the y axis.
    pub semi_minor_axis: f32,
    /// Aim spawned particles away from the center.
    pub affect_rotation: bool,
}

impl OvalConfig {
    /// Create a config for an ellipse centered at the origin.
    pub fn new(semi_major_axis: f32, semi_minor_axis: f32) -> Self {
        Self {
            semi_major_axis,
            semi_minor_axis,
            ..Default::default()
        }
    }

    /// Sets the center offset.
    pub fn with_center(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Sets the circle/ring radii carried alongside the axes.
    pub fn with_radii(mut self, radius: f32, inner_radius: f32) -> Self {
        self.radius = radius;
        self.inner_radius = inner_radius;
        self
    }

    /// Enable/disable the outward rotation (builder-style).
    pub fn with_affect_rotation(mut self, affect_rotation: bool) -> Self {
        self.affect_rotation = affect_rotation;
        self
    }
}

/// Spawns particles on the boundary of an ellipse.
///
/// The angle parameter `t` is drawn uniformly from `[0, 2π)` and mapped
/// through `(a·cos t, b·sin t)`. Points are therefore uniform in `t`, not in
/// arc length, and bunch up near the ends of the major axis on eccentric
/// ellipses, where the boundary moves slowest in `t`.
#[derive(Debug, Clone)]
pub struct Oval {
    center: Vec2,
    radius: f32,
    inner_radius: f32,
    semi_major_axis: f32,
    semi_minor_axis: f32,
    affect_rotation: bool,
}

impl Oval {
    /// Tag used by configuration data to select this shape.
    pub const TYPE: &'static str = "oval";

    /// Build an oval from `config`. Non-finite numbers become `0.0`.
    pub fn new(config: &OvalConfig) -> Self {
        let oval = Self {
            center: Vec2::new(
                finite_or_zero(Self::TYPE, "x", config.x),
                finite_or_zero(Self::TYPE, "y", config.y),
            ),
            radius: finite_or_zero(Self::TYPE, "radius", config.radius),
            inner_radius: finite_or_zero(Self::TYPE, "inner_radius", config.inner_radius),
            semi_major_axis: finite_or_zero(Self::TYPE, "semi_major_axis", config.semi_major_axis),
            semi_minor_axis: finite_or_zero(Self::TYPE, "semi_minor_axis", config.semi_minor_axis),
            affect_rotation: config.affect_rotation,
        };
        debug!(
            semi_major_axis = oval.semi_major_axis,
            semi_minor_axis = oval.semi_minor_axis,
            affect_rotation = oval.affect_rotation,
            "built oval spawn shape"
        );
        oval
    }

    pub fn semi_major_axis(&self) -> f32 {
        self.semi_major_axis
    }

    pub fn semi_minor_axis(&self) -> f32 {
        self.semi_minor_axis
    }

    /// Outer radius as configured. Sampling ignores it.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Inner radius as configured. Sampling ignores it.
    pub fn inner_radius(&self) -> f32 {
        self.inner_radius
    }
}

impl From<OvalConfig> for Oval {
    fn from(config: OvalConfig) -> Self {
        Self::new(&config)
    }
}

impl SpawnShape for Oval {
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
        let t = rand_angle(rng);

        let x = self.semi_major_axis * t.cos();
        let y = self.semi_minor_axis * t.sin();

        target.set_position(Vector2 { x, y });
        if self.affect_rotation {
            target.set_rotation(y.atan2(x));
        }
    }
}
