//! Boolean overlap test (GJK) on the Minkowski difference of two convex polygons.

use log::warn;

use super::outcome::Outcome;
use super::simplex::{OriginLocation, Simplex};
use crate::common::NarrowPhaseConfig;
use crate::math::vec2::Vec2;
use crate::shapes::ConvexPolygon;

#[derive(Debug, Clone, PartialEq)]
pub enum GjkResult {
    /// Triangle of Minkowski points that contains the origin (boundary included).
    Enclosing(Simplex),
    NoOverlap,
}

/// Point of the Minkowski difference A - B farthest along `direction`.
pub fn minkowski_support(a: &ConvexPolygon, b: &ConvexPolygon, direction: Vec2) -> Vec2 {
    a.support(direction) - b.support(-direction)
}

/// Runs GJK until the origin is enclosed, ruled out, or the iteration cap is hit.
///
/// A candidate point whose projection on the search direction is exactly zero is
/// still accepted, so polygons that merely touch are reported as overlapping.
pub fn intersect(a: &ConvexPolygon, b: &ConvexPolygon, config: &NarrowPhaseConfig) -> Outcome<GjkResult> {
    let mut simplex = Simplex::new();

    let direction = non_zero_or(b.position - a.position, Vec2::X);
    let first = minkowski_support(a, b, direction);
    simplex.push(first);

    let direction = non_zero_or(-first, Vec2::X);
    let second = minkowski_support(a, b, direction);
    if second.dot(direction) < 0.0 {
        return Outcome::Converged(GjkResult::NoOverlap);
    }
    simplex.push(second);

    let ab = first - second;
    let ao = -second;
    // Origin on the line through ab leaves the triple product at zero; either side will do.
    let direction = non_zero_or(Vec2::triple_product(ab, ao, ab), ab.perpendicular());
    let third = minkowski_support(a, b, direction);
    if third.dot(direction) < 0.0 {
        return Outcome::Converged(GjkResult::NoOverlap);
    }
    simplex.push(third);

    for _ in 0..config.max_gjk_iterations {
        match simplex.locate_origin() {
            OriginLocation::Enclosed => return Outcome::Converged(GjkResult::Enclosing(simplex)),
            OriginLocation::Outside { edge, normal } => {
                let candidate = minkowski_support(a, b, normal);
                if candidate.dot(normal) < 0.0 {
                    return Outcome::Converged(GjkResult::NoOverlap);
                }
                simplex.replace_across(edge, candidate);
            }
        }
    }

    Outcome::IterationLimitExceeded {
        iterations: config.max_gjk_iterations,
    }
}

/// Overlap test with the default caps. Running out of iterations is logged and
/// treated as no overlap.
pub fn test_overlap(a: &ConvexPolygon, b: &ConvexPolygon) -> Option<Simplex> {
    test_overlap_with(a, b, &NarrowPhaseConfig::default())
}

pub fn test_overlap_with(a: &ConvexPolygon, b: &ConvexPolygon, config: &NarrowPhaseConfig) -> Option<Simplex> {
    match intersect(a, b, config) {
        Outcome::Converged(GjkResult::Enclosing(simplex)) => Some(simplex),
        Outcome::Converged(GjkResult::NoOverlap) => None,
        Outcome::IterationLimitExceeded { iterations } => {
            warn!(
                "GJK gave up after {} iterations (a at {:?}, b at {:?}); treating as no overlap",
                iterations, a.position, b.position
            );
            None
        }
    }
}

fn non_zero_or(direction: Vec2, fallback: Vec2) -> Vec2 {
    let direction = direction.normalize();
    if direction.is_zero() {
        fallback.normalize()
    } else {
        direction
    }
}
