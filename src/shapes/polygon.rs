use std::f64::consts::TAU;

use crate::common::ShapeError;
use crate::math::{wrap_angle, Transform, Vec2};

/// A convex polygon placed in the world.
///
/// Vertices are stored in local space, counter-clockwise, and never change after
/// construction. `position`, `angle` and the velocities belong to whoever drives
/// the simulation; the collision routines only read them.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexPolygon {
    vertices: Vec<Vec2>,
    centroid: Vec2, // Local space, strictly inside the hull
    pub position: Vec2,
    pub angle: f64, // Radians, kept in [0, 2π) by the setters and the integrator
    pub velocity: Vec2,
    pub angular_velocity: f64, // Radians per second
}

impl ConvexPolygon {
    /// Creates a polygon from local-space vertices.
    ///
    /// Repeated consecutive vertices (including last == first) are dropped before
    /// validation. The remaining list must have at least 3 vertices, wind
    /// counter-clockwise and be strictly convex.
    pub fn new(vertices: Vec<Vec2>, position: Vec2) -> Result<Self, ShapeError> {
        if let Some(index) = vertices
            .iter()
            .position(|v| !v.x.is_finite() || !v.y.is_finite())
        {
            return Err(ShapeError::NonFiniteVertex { index });
        }

        let vertices = remove_duplicate_vertices(vertices);
        if vertices.len() < 3 {
            return Err(ShapeError::TooFewVertices { count: vertices.len() });
        }
        check_convex(&vertices)?;
        let centroid = centroid_of(&vertices);

        Ok(Self {
            vertices,
            centroid,
            position,
            angle: 0.0,
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
        })
    }

    /// Regular polygon with `sides` vertices on a circle of `radius`, the first one on +x.
    pub fn regular(position: Vec2, sides: usize, radius: f64) -> Result<Self, ShapeError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ShapeError::InvalidRadius { radius });
        }
        if sides < 3 {
            return Err(ShapeError::TooFewVertices { count: sides });
        }

        let vertices = (0..sides)
            .map(|i| Vec2::from_angle(TAU * i as f64 / sides as f64) * radius)
            .collect();
        Self::new(vertices, position)
    }

    /// Builder-style variant of [`set_angle`](Self::set_angle).
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.set_angle(angle);
        self
    }

    pub fn set_angle(&mut self, angle: f64) {
        self.angle = wrap_angle(angle);
    }

    /// Sets the linear velocity from a heading (radians) and a speed.
    pub fn set_direction_and_speed(&mut self, direction: f64, speed: f64) {
        self.velocity = Vec2::from_angle(direction) * speed;
    }

    pub fn transform(&self) -> Transform {
        Transform::new(self.position, self.angle)
    }

    pub fn local_vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Vertices in world space, same order as the local ones.
    pub fn world_vertices(&self) -> impl Iterator<Item = Vec2> + '_ {
        let transform = self.transform();
        self.vertices.iter().map(move |&v| transform.apply(v))
    }

    /// World-space vertex farthest along `direction`.
    ///
    /// The direction is rotated into local space so the stored vertices can be
    /// scanned as-is; only the winner is transformed back. On exact ties the
    /// earliest vertex wins.
    pub fn support(&self, direction: Vec2) -> Vec2 {
        let transform = self.transform();
        let local_direction = transform.direction_to_local(direction);

        let mut best_vertex = self.vertices[0];
        let mut best_projection = f64::NEG_INFINITY;
        for &vertex in &self.vertices {
            let projection = local_direction.dot(vertex);
            if projection > best_projection {
                best_projection = projection;
                best_vertex = vertex;
            }
        }

        transform.apply(best_vertex)
    }

    /// Calculates the area of the polygon using the Shoelace formula.
    pub fn area(&self) -> f64 {
        signed_area(&self.vertices)
    }

    /// Centroid in local space. Unlike the local origin, it always lies inside
    /// the hull.
    pub fn centroid(&self) -> Vec2 {
        self.centroid
    }

    pub fn world_centroid(&self) -> Vec2 {
        self.transform().apply(self.centroid)
    }
}

fn centroid_of(vertices: &[Vec2]) -> Vec2 {
    let n = vertices.len();
    let origin = vertices[0];
    let mut centroid = Vec2::ZERO;
    let mut signed_area_sum = 0.0;

    for i in 1..(n - 1) {
        let v2 = vertices[i];
        let v3 = vertices[i + 1];

        let triangle_signed_area = (v2 - origin).cross(v3 - origin) / 2.0;
        signed_area_sum += triangle_signed_area;
        centroid += (origin + v2 + v3) / 3.0 * triangle_signed_area;
    }

    // Validation guarantees a positive area.
    centroid / signed_area_sum
}

fn signed_area(vertices: &[Vec2]) -> f64 {
    let n = vertices.len();
    let mut area = 0.0;
    for i in 0..n {
        area += vertices[i].cross(vertices[(i + 1) % n]);
    }
    area / 2.0
}

fn remove_duplicate_vertices(vertices: Vec<Vec2>) -> Vec<Vec2> {
    let mut deduped: Vec<Vec2> = Vec::with_capacity(vertices.len());
    for vertex in vertices {
        if deduped.last() != Some(&vertex) {
            deduped.push(vertex);
        }
    }
    while deduped.len() > 1 && deduped.first() == deduped.last() {
        deduped.pop();
    }
    deduped
}

/// Every corner must turn left, and the turns must add up to a single revolution
/// (which rules out self-intersecting stars whose corners all turn left).
fn check_convex(vertices: &[Vec2]) -> Result<(), ShapeError> {
    let n = vertices.len();
    let mut turning = 0.0;
    for i in 0..n {
        let prev = vertices[(i + n - 1) % n];
        let current = vertices[i];
        let next = vertices[(i + 1) % n];
        let incoming = current - prev;
        let outgoing = next - current;

        let cross = incoming.cross(outgoing);
        if cross <= 0.0 {
            return Err(ShapeError::NotConvex { index: i });
        }
        turning += cross.atan2(incoming.dot(outgoing));
        if turning > TAU + 1e-9 {
            return Err(ShapeError::NotConvex { index: i });
        }
    }
    Ok(())
}
