use crate::math::vec2::Vec2;

/// Which of the two shapes passed to the narrow phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// A polygon edge in world coordinates with its outward unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub start: Vec2,
    pub end: Vec2,
    pub normal: Vec2,
}

impl Edge {
    pub fn direction(&self) -> Vec2 {
        self.end - self.start
    }
}

/// Output of contact resolution for one overlapping pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collision {
    /// Shape whose edge is the most perpendicular to the separation normal.
    pub reference: Side,
    pub incident: Side,
    /// True when B supplied the reference edge.
    pub flipped: bool,
    pub reference_edge: Edge,
    pub incident_edge: Edge,
    /// Deepest incident vertex, before any positional correction.
    pub contact_point: Vec2,
}

impl Collision {
    /// Contact point after the caller moved A by `-penetration / 2` and B by
    /// `+penetration / 2`; it follows whichever shape is incident.
    pub fn corrected_contact(&self, penetration: Vec2) -> Vec2 {
        let half = penetration * 0.5;
        match self.incident {
            Side::A => self.contact_point - half,
            Side::B => self.contact_point + half,
        }
    }
}

/// Stores information about a resolved collision between two scene bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionManifold {
    /// Index of the first body involved in the collision.
    pub body_a_idx: usize,
    /// Index of the second body involved in the collision.
    pub body_b_idx: usize,
    /// The collision normal, pointing from body A towards body B.
    pub normal: Vec2,
    /// The amount of penetration between the shapes.
    pub depth: f64,
    /// Contact point after positional correction.
    pub contact_point: Vec2,
    /// True when body B supplied the reference edge.
    pub flipped: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collision(incident: Side) -> Collision {
        let edge = Edge {
            start: Vec2::new(0.0, 0.0),
            end: Vec2::new(0.0, 1.0),
            normal: Vec2::new(1.0, 0.0),
        };
        Collision {
            reference: incident.other(),
            incident,
            flipped: incident == Side::A,
            reference_edge: edge,
            incident_edge: edge,
            contact_point: Vec2::new(1.0, 1.0),
        }
    }

    #[test]
    fn test_side_other() {
        assert_eq!(Side::A.other(), Side::B);
        assert_eq!(Side::B.other(), Side::A);
    }

    #[test]
    fn test_edge_direction() {
        let edge = Edge {
            start: Vec2::new(1.0, 2.0),
            end: Vec2::new(4.0, 6.0),
            normal: Vec2::new(0.8, -0.6),
        };
        assert_eq!(edge.direction(), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_corrected_contact_follows_incident_shape() {
        let penetration = Vec2::new(0.4, 0.0);
        // B incident: B moves by +half.
        assert_eq!(collision(Side::B).corrected_contact(penetration), Vec2::new(1.2, 1.0));
        // A incident (flipped): A moves by -half.
        assert_eq!(collision(Side::A).corrected_contact(penetration), Vec2::new(0.8, 1.0));
    }
}
