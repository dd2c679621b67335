use crate::math::vec2::Vec2;
use crate::shapes::ConvexPolygon;

pub use crate::math::wrap_angle;

/// Advances the polygon's pose by one explicit Euler step.
pub fn integrate(polygon: &mut ConvexPolygon, dt: f64) {
    // --- Linear Motion --- //
    polygon.position += polygon.velocity * dt;

    // --- Angular Motion --- //
    // Kept in [0, 2π) so long runs do not accumulate a huge angle.
    polygon.angle = wrap_angle(polygon.angle + polygon.angular_velocity * dt);
}

/// Wraps each coordinate toroidally into `[-half_extent, half_extent)`.
pub fn wrap_position(position: Vec2, half_extent: f64) -> Vec2 {
    Vec2::new(wrap_axis(position.x, half_extent), wrap_axis(position.y, half_extent))
}

fn wrap_axis(value: f64, half_extent: f64) -> f64 {
    let span = 2.0 * half_extent;
    let wrapped = (value + half_extent).rem_euclid(span) - half_extent;
    // rem_euclid can round up to `span` for values just below a multiple of it.
    if wrapped >= half_extent {
        -half_extent
    } else {
        wrapped
    }
}

/// Control input sampled once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// Acceleration along the polygon's heading.
    pub thrust: f64,
    /// Angular velocity to hold for this tick.
    pub turn: f64,
}

impl InputSnapshot {
    pub fn new(thrust: f64, turn: f64) -> Self {
        Self { thrust, turn }
    }

    /// Sets the turn rate and accelerates along the current heading.
    pub fn apply(&self, polygon: &mut ConvexPolygon, dt: f64) {
        polygon.angular_velocity = self.turn;
        polygon.velocity += Vec2::from_angle(polygon.angle) * (self.thrust * dt);
    }
}
