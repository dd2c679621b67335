use arrayvec::ArrayVec;

use crate::math::vec2::Vec2;

/// Up to three points of the Minkowski difference, oldest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Simplex {
    points: ArrayVec<Vec2, 3>,
}

/// The two triangle edges that touch the newest point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimplexEdge {
    /// Newest point and the middle one.
    Ab,
    /// Newest point and the oldest one.
    Ac,
}

/// Where the origin sits relative to a triangle simplex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OriginLocation {
    /// Inside the triangle or on its boundary.
    Enclosed,
    /// Beyond `edge`; `normal` is that edge's unit normal facing away from the
    /// opposite vertex, i.e. the next search direction.
    Outside { edge: SimplexEdge, normal: Vec2 },
}

impl Simplex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Triangle simplex from three points, oldest first.
    pub fn triangle(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self {
            points: ArrayVec::from([a, b, c]),
        }
    }

    pub(crate) fn push(&mut self, point: Vec2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Closed point-in-triangle test for the origin. False for fewer than 3 points.
    #[cfg(test)]
    pub(crate) fn contains_origin(&self) -> bool {
        let [a, b, c] = match self.points.as_slice() {
            &[a, b, c] => [a, b, c],
            _ => return false,
        };
        let d1 = (b - a).cross(-a);
        let d2 = (c - b).cross(-b);
        let d3 = (a - c).cross(-c);
        let has_negative = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_positive = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
        !(has_negative && has_positive)
    }

    /// Classifies the origin against the two edges adjacent to the newest point.
    ///
    /// The third edge is never tested: the newest point was found by searching
    /// across it, so the origin is already known to be on its inner side. A dot
    /// product of exactly zero counts as inside here, while the refinement step
    /// only moves across an edge on a strictly positive one.
    ///
    /// # Panics
    ///
    /// Panics if the simplex is not a triangle, or if neither classification
    /// holds, which only happens when a coordinate is NaN.
    pub fn locate_origin(&self) -> OriginLocation {
        let [a, b, c] = match self.points.as_slice() {
            &[a, b, c] => [a, b, c],
            points => panic!("locate_origin needs a triangle simplex, got {} points", points.len()),
        };
        let ao = -c;
        let ab = b - c;
        let ac = a - c;
        let ab_normal = Vec2::triple_product(ac, ab, ab).normalize();
        let ac_normal = Vec2::triple_product(ab, ac, ac).normalize();
        let ab_dot = ab_normal.dot(ao);
        let ac_dot = ac_normal.dot(ao);

        if ab_dot <= 0.0 && ac_dot <= 0.0 {
            OriginLocation::Enclosed
        } else if ab_dot > 0.0 {
            OriginLocation::Outside { edge: SimplexEdge::Ab, normal: ab_normal }
        } else if ac_dot > 0.0 {
            OriginLocation::Outside { edge: SimplexEdge::Ac, normal: ac_normal }
        } else {
            unreachable!(
                "origin is neither inside nor beyond an edge of simplex {:?}; winding was lost",
                self.points
            )
        }
    }

    /// Keeps the two points of `edge` and appends `point` as the newest one.
    pub(crate) fn replace_across(&mut self, edge: SimplexEdge, point: Vec2) {
        let [a, b, c] = match self.points.as_slice() {
            &[a, b, c] => [a, b, c],
            points => panic!("replace_across needs a triangle simplex, got {} points", points.len()),
        };
        self.points = match edge {
            SimplexEdge::Ab => ArrayVec::from([b, c, point]),
            SimplexEdge::Ac => ArrayVec::from([a, c, point]),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_simplex_push() {
        let mut simplex = Simplex::new();
        assert!(simplex.is_empty());
        simplex.push(Vec2::new(1.0, 0.0));
        simplex.push(Vec2::new(0.0, 1.0));
        assert_eq!(simplex.len(), 2);
        assert!(!simplex.contains_origin());
    }

    #[test]
    fn test_contains_origin() {
        let around = Simplex::triangle(Vec2::new(-1.0, -1.0), Vec2::new(1.0, -1.0), Vec2::new(0.0, 1.0));
        assert!(around.contains_origin());

        let beside = Simplex::triangle(Vec2::new(1.0, 1.0), Vec2::new(2.0, 1.0), Vec2::new(1.0, 2.0));
        assert!(!beside.contains_origin());

        // On an edge, either winding.
        let touching = Simplex::triangle(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0));
        assert!(touching.contains_origin());
        let reversed = Simplex::triangle(Vec2::new(0.0, 1.0), Vec2::new(1.0, 0.0), Vec2::new(-1.0, 0.0));
        assert!(reversed.contains_origin());
    }

    #[test]
    fn test_locate_origin_enclosed() {
        let simplex = Simplex::triangle(Vec2::new(-1.0, -1.0), Vec2::new(1.0, -1.0), Vec2::new(0.0, 1.0));
        assert_eq!(simplex.locate_origin(), OriginLocation::Enclosed);
    }

    #[test]
    fn test_locate_origin_on_adjacent_edge_counts_as_enclosed() {
        // Origin on the edge between the newest point (0, 1) and (0, -1).
        let simplex = Simplex::triangle(Vec2::new(1.0, 0.0), Vec2::new(0.0, -1.0), Vec2::new(0.0, 1.0));
        assert_eq!(simplex.locate_origin(), OriginLocation::Enclosed);
    }

    #[test]
    fn test_locate_origin_outside_ab() {
        // Newest point c = (1, 1); edge ab runs to (1, -1), edge ac to (2, 0).
        let simplex = Simplex::triangle(Vec2::new(2.0, 0.0), Vec2::new(1.0, -1.0), Vec2::new(1.0, 1.0));
        match simplex.locate_origin() {
            OriginLocation::Outside { edge, normal } => {
                assert_eq!(edge, SimplexEdge::Ab);
                assert!((normal.x - -1.0).abs() < EPSILON);
                assert!(normal.y.abs() < EPSILON);
            }
            other => panic!("expected the origin outside ab, got {:?}", other),
        }
    }

    #[test]
    fn test_locate_origin_outside_ac() {
        let simplex = Simplex::triangle(Vec2::new(1.0, -1.0), Vec2::new(2.0, 0.0), Vec2::new(1.0, 1.0));
        match simplex.locate_origin() {
            OriginLocation::Outside { edge, normal } => {
                assert_eq!(edge, SimplexEdge::Ac);
                assert!((normal.x - -1.0).abs() < EPSILON);
                assert!(normal.y.abs() < EPSILON);
            }
            other => panic!("expected the origin outside ac, got {:?}", other),
        }
    }

    #[test]
    #[should_panic(expected = "winding was lost")]
    fn test_locate_origin_nan_is_loud() {
        let simplex = Simplex::triangle(Vec2::new(f64::NAN, 0.0), Vec2::new(1.0, -1.0), Vec2::new(1.0, 1.0));
        simplex.locate_origin();
    }

    #[test]
    fn test_replace_across() {
        let a = Vec2::new(2.0, 0.0);
        let b = Vec2::new(1.0, -1.0);
        let c = Vec2::new(1.0, 1.0);
        let new_point = Vec2::new(-1.0, 0.0);

        let mut simplex = Simplex::triangle(a, b, c);
        simplex.replace_across(SimplexEdge::Ab, new_point);
        assert_eq!(simplex.points(), &[b, c, new_point]);

        let mut simplex = Simplex::triangle(a, b, c);
        simplex.replace_across(SimplexEdge::Ac, new_point);
        assert_eq!(simplex.points(), &[a, c, new_point]);
    }
}
