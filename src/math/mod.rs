pub mod transform;
pub mod vec2;

pub use transform::Transform;
pub use vec2::Vec2;

use std::f64::consts::TAU;

/// Wraps an angle in radians to the range [0, 2π).
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid rounds tiny negative inputs up to TAU itself.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_wrap_angle() {
        assert!((wrap_angle(0.0) - 0.0).abs() < EPSILON);
        assert!((wrap_angle(TAU) - 0.0).abs() < EPSILON);
        assert!((wrap_angle(3.0 * PI) - PI).abs() < EPSILON);
        assert!((wrap_angle(-PI / 2.0) - 1.5 * PI).abs() < EPSILON);
        assert!(wrap_angle(-1e-300) < TAU);
    }
}
