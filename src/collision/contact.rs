//! Reference/incident edge selection and contact point for an overlapping pair.

use super::manifold::{Collision, Edge, Side};
use crate::math::vec2::Vec2;
use crate::shapes::ConvexPolygon;

/// Picks the reference and incident edges for two overlapping polygons and the
/// deepest incident vertex.
///
/// `penetration` is the EPA vector pointing from A toward B. Returns `None` when
/// either shape has no vertex strictly ahead of its centroid along the normal,
/// which for a valid polygon only happens with a zero penetration vector.
pub fn resolve_contact(a: &ConvexPolygon, b: &ConvexPolygon, penetration: Vec2) -> Option<Collision> {
    let normal = penetration.normalize();
    let edge_a = best_edge(a, normal)?;
    let edge_b = best_edge(b, -normal)?;

    let alignment_a = edge_a.direction().normalize().dot(normal).abs();
    let alignment_b = edge_b.direction().normalize().dot(normal).abs();

    let (reference, incident, reference_edge, incident_edge) = if alignment_a <= alignment_b {
        (Side::A, Side::B, edge_a, edge_b)
    } else {
        (Side::B, Side::A, edge_b, edge_a)
    };

    let contact_point = if incident_edge.start.dot(reference_edge.normal) <= incident_edge.end.dot(reference_edge.normal) {
        incident_edge.start
    } else {
        incident_edge.end
    };

    Some(Collision {
        reference,
        incident,
        flipped: reference == Side::B,
        reference_edge,
        incident_edge,
        contact_point,
    })
}

/// Edge of `polygon` most perpendicular to `normal` among the two that meet at
/// its supporting vertex.
///
/// Works on the local vertices and transforms only the chosen edge. Vertices are
/// measured from the centroid, which is inside the hull wherever the local
/// origin happens to be.
fn best_edge(polygon: &ConvexPolygon, normal: Vec2) -> Option<Edge> {
    let transform = polygon.transform();
    let local_normal = transform.direction_to_local(normal);
    let centroid = polygon.centroid();
    let vertices = polygon.local_vertices();
    let n = vertices.len();

    let mut best: Option<usize> = None;
    let mut best_projection = 0.0;
    for (i, vertex) in vertices.iter().enumerate() {
        let projection = local_normal.dot(*vertex - centroid);
        if projection > best_projection {
            best_projection = projection;
            best = Some(i);
        }
    }
    let index = best?;

    let vertex = vertices[index];
    let prev = vertices[(index + n - 1) % n];
    let next = vertices[(index + 1) % n];

    let (start, end) = if (vertex - prev).normalize().dot(local_normal).abs()
        <= (next - vertex).normalize().dot(local_normal).abs()
    {
        (prev, vertex)
    } else {
        (vertex, next)
    };

    Some(Edge {
        start: transform.apply(start),
        end: transform.apply(end),
        normal: transform.direction_to_world(edge_normal(start, end, centroid)),
    })
}

/// Outward unit normal of a polygon edge, given a point inside the polygon.
fn edge_normal(start: Vec2, end: Vec2, inside: Vec2) -> Vec2 {
    let edge = end - start;
    let normal = Vec2::triple_product(edge, start - inside, edge).normalize();
    if normal.is_zero() {
        // Counter-clockwise winding puts the outside to the right of the edge.
        Vec2::new(edge.y, -edge.x).normalize()
    } else {
        normal
    }
}
