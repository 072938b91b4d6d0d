//! Tagged shape configuration and the factory that builds shapes from it.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::shape::{Oval, OvalConfig, Rect, RectConfig, SpawnShape, Torus, TorusConfig};

/// Tags of every built-in shape.
pub const SHAPE_TYPES: [&str; 3] = [Oval::TYPE, Rect::TYPE, Torus::TYPE];

/// Configuration for any built-in spawn shape.
///
/// With the `serde` feature the enum is adjacently tagged: a `type` field
/// naming the shape and a `data` field holding its config. In JSON that is
/// `{ "type": "oval", "data": { .. } }`; RON writes the tag as an identifier,
/// `(type: oval, data: ( .. ))`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", content = "data", rename_all = "lowercase")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum ShapeConfig {
    Oval(OvalConfig),
    Rect(RectConfig),
    Torus(TorusConfig),
}

impl ShapeConfig {
    /// Default configuration for the shape registered under `tag`.
    pub fn default_for(tag: &str) -> Result<Self> {
        match tag {
            Oval::TYPE => Ok(Self::Oval(OvalConfig::default())),
            Rect::TYPE => Ok(Self::Rect(RectConfig::default())),
            Torus::TYPE => Ok(Self::Torus(TorusConfig::default())),
            _ => Err(Error::UnknownShape {
                tag: tag.to_owned(),
            }),
        }
    }

    /// Tag of the configured shape.
    pub fn shape_type(&self) -> &'static str {
        match self {
            Self::Oval(_) => Oval::TYPE,
            Self::Rect(_) => Rect::TYPE,
            Self::Torus(_) => Torus::TYPE,
        }
    }

    /// Build the configured shape.
    ///
    /// Never fails: degenerate parameters produce degenerate (but finite)
    /// samples. Call [`ShapeConfig::validate`] first to reject them instead.
    pub fn build(&self) -> Box<dyn SpawnShape> {
        match self {
            Self::Oval(c) => Box::new(Oval::new(c)),
            Self::Rect(c) => Box::new(Rect::new(c)),
            Self::Torus(c) => Box::new(Torus::new(c)),
        }
    }

    /// Check that all parameters are finite and that lengths are non-negative.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Oval(c) => {
                ensure_finite("x", c.x)?;
                ensure_finite("y", c.y)?;
                ensure_non_negative("radius", c.radius)?;
                ensure_non_negative("inner_radius", c.inner_radius)?;
                ensure_non_negative("semi_major_axis", c.semi_major_axis)?;
                ensure_non_negative("semi_minor_axis", c.semi_minor_axis)?;
            }
            Self::Rect(c) => {
                ensure_finite("x", c.x)?;
                ensure_finite("y", c.y)?;
                ensure_non_negative("width", c.width)?;
                ensure_non_negative("height", c.height)?;
            }
            Self::Torus(c) => {
                ensure_finite("x", c.x)?;
                ensure_finite("y", c.y)?;
                ensure_non_negative("radius", c.radius)?;
                ensure_non_negative("inner_radius", c.inner_radius)?;
                if c.inner_radius > c.radius {
                    return Err(Error::InvalidConfig(format!(
                        "inner_radius ({}) must not exceed radius ({})",
                        c.inner_radius, c.radius
                    )));
                }
            }
        }
        Ok(())
    }
}

impl From<OvalConfig> for ShapeConfig {
    fn from(value: OvalConfig) -> Self {
        Self::Oval(value)
    }
}

impl From<RectConfig> for ShapeConfig {
    fn from(value: RectConfig) -> Self {
        Self::Rect(value)
    }
}

impl From<TorusConfig> for ShapeConfig {
    fn from(value: TorusConfig) -> Self {
        Self::Torus(value)
    }
}

fn ensure_finite(field: &str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidConfig(format!("{field} must be finite, got {value}")))
    }
}

fn ensure_non_negative(field: &str, value: f32) -> Result<()> {
    ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(Error::InvalidConfig(format!(
            "{field} must be >= 0, got {value}"
        )));
    }
    Ok(())
}
