//! Random convex polygons and a separating-axis reference for the narrow-phase tests.

use proptest::prelude::*;
use std::f64::consts::TAU;

use crate::math::vec2::Vec2;
use crate::shapes::ConvexPolygon;

/// Counter-clockwise convex polygon built through `ConvexPolygon::new`.
///
/// The vertices lie on a circle whose centre is offset from the local origin, so
/// the hull often does not contain the origin. The pose is chosen so the hull
/// centre lands within `range` of the world origin.
pub fn arb_convex_polygon(range: f64) -> impl Strategy<Value = ConvexPolygon> {
    (
        prop::collection::vec(0.2f64..1.0, 3..7),
        0.5f64..2.0,
        (-2.5f64..2.5, -2.5f64..2.5),
        (-range..range, -range..range),
        0.0f64..TAU,
    )
        .prop_map(|(gaps, radius, offset, centre, angle)| {
            let total: f64 = gaps.iter().sum();
            let offset = Vec2::new(offset.0, offset.1);
            let mut swept = 0.0;
            let vertices = gaps
                .iter()
                .map(|gap| {
                    let vertex = offset + Vec2::from_angle(TAU * swept / total) * radius;
                    swept += gap;
                    vertex
                })
                .collect();
            let position = Vec2::new(centre.0, centre.1) - offset.rotate(angle);
            ConvexPolygon::new(vertices, position)
                .expect("points on a circle in angular order are convex")
                .with_angle(angle)
        })
}

/// Smallest overlap of the two polygons over all edge normals; negative when a
/// separating axis exists.
pub fn sat_depth(a: &ConvexPolygon, b: &ConvexPolygon) -> f64 {
    let mut depth = f64::INFINITY;
    for polygon in [a, b] {
        let vertices: Vec<Vec2> = polygon.world_vertices().collect();
        for i in 0..vertices.len() {
            let edge = vertices[(i + 1) % vertices.len()] - vertices[i];
            let axis = Vec2::new(edge.y, -edge.x).normalize();
            let (min_a, max_a) = project(a, axis);
            let (min_b, max_b) = project(b, axis);
            depth = depth.min((max_a - min_b).min(max_b - min_a));
        }
    }
    depth
}

fn project(polygon: &ConvexPolygon, axis: Vec2) -> (f64, f64) {
    polygon
        .world_vertices()
        .map(|v| v.dot(axis))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p), hi.max(p)))
}
