use super::contact::resolve_contact;
use super::epa;
use super::gjk::{self, GjkResult};
use super::manifold::Collision;
use super::simplex::Simplex;
use crate::common::{CollisionError, NarrowPhaseConfig, Stage};
use crate::math::vec2::Vec2;
use crate::shapes::ConvexPolygon;

/// A resolved overlap: how far apart to push the pair, and where they touch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Minimum translation, pointing from A toward B.
    pub penetration: Vec2,
    pub collision: Collision,
}

impl Contact {
    pub fn depth(&self) -> f64 {
        self.penetration.magnitude()
    }

    pub fn normal(&self) -> Vec2 {
        self.penetration.normalize()
    }
}

/// GJK, EPA and contact resolution behind one configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NarrowPhase {
    pub config: NarrowPhaseConfig,
}

impl NarrowPhase {
    pub fn new(config: NarrowPhaseConfig) -> Self {
        Self { config }
    }

    /// Enclosing simplex if the shapes overlap or touch.
    pub fn test_overlap(&self, a: &ConvexPolygon, b: &ConvexPolygon) -> Option<Simplex> {
        gjk::test_overlap_with(a, b, &self.config)
    }

    pub fn penetration(&self, a: &ConvexPolygon, b: &ConvexPolygon, simplex: &Simplex) -> Vec2 {
        epa::penetration_with(a, b, simplex, &self.config)
    }

    pub fn resolve_contact(&self, a: &ConvexPolygon, b: &ConvexPolygon, penetration: Vec2) -> Option<Collision> {
        resolve_contact(a, b, penetration)
    }

    /// Full pipeline. Iteration caps fall back to "no overlap" (GJK) or a zero
    /// penetration (EPA), and a zero penetration yields no contact.
    pub fn collide(&self, a: &ConvexPolygon, b: &ConvexPolygon) -> Option<Contact> {
        let simplex = self.test_overlap(a, b)?;
        let penetration = self.penetration(a, b, &simplex);
        let collision = self.resolve_contact(a, b, penetration)?;
        Some(Contact { penetration, collision })
    }

    /// Like [`collide`](Self::collide) but reports a stage that ran out of
    /// iterations instead of falling back.
    pub fn try_collide(&self, a: &ConvexPolygon, b: &ConvexPolygon) -> Result<Option<Contact>, CollisionError> {
        let simplex = match gjk::intersect(a, b, &self.config).into_result(Stage::Gjk)? {
            GjkResult::Enclosing(simplex) => simplex,
            GjkResult::NoOverlap => return Ok(None),
        };
        let penetration = epa::expand(a, b, &simplex, &self.config).into_result(Stage::Epa)?;
        Ok(resolve_contact(a, b, penetration).map(|collision| Contact { penetration, collision }))
    }
}
