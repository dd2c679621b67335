//! Penetration vector (EPA) from an enclosing GJK simplex.

use log::warn;

use super::gjk::minkowski_support;
use super::outcome::Outcome;
use super::simplex::Simplex;
use crate::common::NarrowPhaseConfig;
use crate::math::vec2::Vec2;
use crate::shapes::ConvexPolygon;

/// Polytope edge nearest to the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ClosestEdge {
    /// Index of the edge's first vertex; the edge runs to the next one (wrapping).
    start: usize,
    normal: Vec2,
    distance: f64,
}

/// Grows the simplex into a polytope until the edge closest to the origin is on
/// the boundary of the Minkowski difference.
///
/// The converged value is `normal * depth`, pointing from A toward B: moving B by
/// it (or A by its negation) leaves the shapes touching.
pub fn expand(
    a: &ConvexPolygon,
    b: &ConvexPolygon,
    simplex: &Simplex,
    config: &NarrowPhaseConfig,
) -> Outcome<Vec2> {
    let mut polytope: Vec<Vec2> = Vec::with_capacity(simplex.len() + config.max_epa_iterations);
    polytope.extend_from_slice(simplex.points());
    // Sorting by polar angle winds the points counter-clockwise around the origin.
    polytope.sort_by(|p, q| p.angle().total_cmp(&q.angle()));

    for _ in 0..config.max_epa_iterations {
        let closest = closest_edge(&polytope);
        let support = minkowski_support(a, b, closest.normal);

        let improvement = support.dot(closest.normal) - closest.distance;
        if polytope.contains(&support) || improvement < config.epa_tolerance {
            return Outcome::Converged(closest.normal * closest.distance);
        }

        polytope.insert(closest.start + 1, support);
    }

    Outcome::IterationLimitExceeded {
        iterations: config.max_epa_iterations,
    }
}

/// Penetration vector with the default caps. If EPA does not converge the
/// condition is logged and the zero vector is returned.
pub fn penetration(a: &ConvexPolygon, b: &ConvexPolygon, simplex: &Simplex) -> Vec2 {
    penetration_with(a, b, simplex, &NarrowPhaseConfig::default())
}

pub fn penetration_with(
    a: &ConvexPolygon,
    b: &ConvexPolygon,
    simplex: &Simplex,
    config: &NarrowPhaseConfig,
) -> Vec2 {
    match expand(a, b, simplex, config) {
        Outcome::Converged(vector) => vector,
        Outcome::IterationLimitExceeded { iterations } => {
            warn!(
                "EPA gave up after {} iterations (a at {:?}, b at {:?}); no correction this tick",
                iterations, a.position, b.position
            );
            Vec2::ZERO
        }
    }
}

fn closest_edge(polytope: &[Vec2]) -> ClosestEdge {
    let n = polytope.len();
    let mut closest = ClosestEdge {
        start: 0,
        normal: Vec2::ZERO,
        distance: f64::INFINITY,
    };

    for i in 0..n {
        let start = polytope[i];
        let end = polytope[(i + 1) % n];
        let normal = outward_normal(start, end);
        let distance = start.dot(normal);
        if distance < closest.distance {
            closest = ClosestEdge { start: i, normal, distance };
        }
    }

    closest
}

/// Unit normal of edge `start -> end` facing away from the origin.
fn outward_normal(start: Vec2, end: Vec2) -> Vec2 {
    let edge = end - start;
    let normal = Vec2::triple_product(edge, start, edge).normalize();
    if normal.is_zero() {
        // The origin lies on the edge's line; fall back on the counter-clockwise winding.
        Vec2::new(edge.y, -edge.x).normalize()
    } else {
        normal
    }
}
