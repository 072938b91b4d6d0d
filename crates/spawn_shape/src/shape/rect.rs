//! Rectangle spawn shape.
use glam::Vec2;
use mint::Vector2;
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::shape::{finite_or_zero, next_down, rand01, SpawnShape};
use crate::target::SpawnTarget;

/// Configuration for a [`Rect`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RectConfig {
    /// X position of the center of the rectangle.
    pub x: f32,
    /// Y position of the center of the rectangle.
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Aim spawned particles away from the center.
    pub affect_rotation: bool,
}

impl RectConfig {
    /// A `width` × `height` rectangle centered at the origin.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
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

/// Uniform i.i.d. sampling over a centered rectangle.
#[derive(Debug, Clone)]
pub struct Rect {
    center: Vec2,
    half_extent: Vec2,
    affect_rotation: bool,
}

impl Rect {
    /// Tag used by configuration data to select this shape.
    pub const TYPE: &'static str = "rect";

    /// Build a rectangle from `config`. Non-positive or non-finite extents
    /// collapse that axis onto the center line.
    pub fn new(config: &RectConfig) -> Self {
        let w = finite_or_zero(Self::TYPE, "width", config.width).max(0.0);
        let h = finite_or_zero(Self::TYPE, "height", config.height).max(0.0);

        debug!(width = w, height = h, "built rect spawn shape");
        Self {
            center: Vec2::new(
                finite_or_zero(Self::TYPE, "x", config.x),
                finite_or_zero(Self::TYPE, "y", config.y),
            ),
            half_extent: Vec2::new(w * 0.5, h * 0.5),
            affect_rotation: config.affect_rotation,
        }
    }

    /// Full width and height.
    pub fn extent(&self) -> Vec2 {
        self.half_extent * 2.0
    }
}

impl From<RectConfig> for Rect {
    fn from(config: RectConfig) -> Self {
        Self::new(&config)
    }
}

impl SpawnShape for Rect {
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
        let half_w = self.half_extent.x;
        let half_h = self.half_extent.y;

        let u = rand01(rng);
        let v = rand01(rng);

        let mut x = (u * 2.0 - 1.0) * half_w;
        let mut y = (v * 2.0 - 1.0) * half_h;

        // Keep strictly inside right/top edges.
        if half_w > 0.0 {
            x = x.clamp(-half_w, next_down(half_w));
        }
        if half_h > 0.0 {
            y = y.clamp(-half_h, next_down(half_h));
        }

        target.set_position(Vector2 { x, y });
        if self.affect_rotation {
            target.set_rotation(y.atan2(x));
        }
    }
}
