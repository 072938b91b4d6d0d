//! Particle targets that spawn shapes write into.
use glam::Vec2;
use mint::Vector2;

/// Anything a spawn shape can place: a caller-owned particle with a mutable
/// position and rotation.
///
/// Shapes only overwrite these fields. They never read the previous values,
/// so a target may be reused across spawns without resetting it.
pub trait SpawnTarget {
    /// Overwrite the position, in the shape's local coordinate space.
    fn set_position(&mut self, position: Vector2<f32>);

    /// Overwrite the rotation in radians. Only called by shapes that affect
    /// rotation.
    fn set_rotation(&mut self, rotation: f32);
}

/// A sampled spawn position and rotation.
///
/// Useful when the caller has no particle object yet, or prefers a returned
/// value over mutating a target in place.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpawnPoint {
    /// Position relative to the shape center.
    pub position: Vec2,
    /// Rotation in radians; stays `0.0` unless the shape affects rotation.
    pub rotation: f32,
}

impl SpawnPoint {
    /// Create a new spawn point.
    pub fn new(position: Vec2, rotation: f32) -> Self {
        Self { position, rotation }
    }

    /// Return this point moved by `offset`, e.g. the shape center or the
    /// emitter's world position.
    pub fn translated(self, offset: impl Into<Vec2>) -> Self {
        Self {
            position: self.position + offset.into(),
            rotation: self.rotation,
        }
    }
}

impl SpawnTarget for SpawnPoint {
    fn set_position(&mut self, position: Vector2<f32>) {
        self.position = position.into();
    }

    fn set_rotation(&mut self, rotation: f32) {
        self.rotation = rotation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_overwrite_previous_state() {
        let mut p = SpawnPoint::new(Vec2::new(9.0, 9.0), 3.0);
        p.set_position(Vector2 { x: 1.0, y: -2.0 });
        p.set_rotation(0.5);
        assert_eq!(p, SpawnPoint::new(Vec2::new(1.0, -2.0), 0.5));
    }

    #[test]
    fn translated_keeps_rotation() {
        let p = SpawnPoint::new(Vec2::new(10.0, 0.0), 1.25).translated(Vec2::new(5.0, -5.0));
        assert_eq!(p.position, Vec2::new(15.0, -5.0));
        assert_eq!(p.rotation, 1.25);
    }
}
