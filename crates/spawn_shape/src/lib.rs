#![forbid(unsafe_code)]
//! spawn_shape: spawn-position shapes for particle emitters.
//!
//! Modules:
//! - shape: the [`SpawnShape`](shape::SpawnShape) contract and the oval, torus and rect variants
//! - target: particle targets a shape writes positions and rotations into
//! - error: configuration errors
//!
//! Shapes never own randomness; every call takes the caller's `RngCore`.
pub mod error;
pub mod shape;
pub mod target;

/// Convenient re-exports for common types. Import with `use spawn_shape::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::shape::{
        Oval, OvalConfig, Rect, RectConfig, ShapeConfig, SpawnShape, Torus, TorusConfig,
        SHAPE_TYPES,
    };
    pub use crate::target::{SpawnPoint, SpawnTarget};
}
