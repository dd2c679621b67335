use super::vec2::Vec2;

/// Placement of a shape in the world: rotation about the local origin, then translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    pub angle: f64, // Radians
}

impl Transform {
    /// Creates a new transform.
    pub fn new(position: Vec2, angle: f64) -> Self {
        Self { position, angle }
    }

    /// Creates an identity transform (no translation, no rotation).
    pub fn identity() -> Self {
        Self {
            position: Vec2::ZERO,
            angle: 0.0,
        }
    }

    /// Applies the transform (rotation then translation) to a point.
    pub fn apply(self, point: Vec2) -> Vec2 {
        point.rotate(self.angle) + self.position
    }

    /// Rotates a world-space direction into local space. Directions ignore translation.
    pub fn direction_to_local(self, direction: Vec2) -> Vec2 {
        direction.rotate(-self.angle)
    }

    /// Rotates a local-space direction into world space.
    pub fn direction_to_world(self, direction: Vec2) -> Vec2 {
        direction.rotate(self.angle)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
