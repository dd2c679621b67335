use log::{debug, trace};

use crate::{
    collision::{CollisionManifold, NarrowPhase},
    common::{NarrowPhaseConfig, SceneConfig},
    integration::integrator,
    shapes::ConvexPolygon,
};

/// Moving convex polygons in a wrapping box, pushed apart on overlap.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub bodies: Vec<ConvexPolygon>,
    pub config: SceneConfig,
    pub narrow_phase: NarrowPhase,
    // Contacts found during the last step
    contacts: Vec<CollisionManifold>,
}

impl Scene {
    /// Creates a new, empty scene with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SceneConfig, narrow_phase: NarrowPhaseConfig) -> Self {
        Self {
            bodies: Vec::new(),
            config,
            narrow_phase: NarrowPhase::new(narrow_phase),
            contacts: Vec::new(),
        }
    }

    /// Adds a polygon to the scene and returns its index.
    pub fn add_body(&mut self, body: ConvexPolygon) -> usize {
        let index = self.bodies.len();
        self.bodies.push(body);
        index
    }

    pub fn contacts(&self) -> &[CollisionManifold] {
        &self.contacts
    }

    /// Whether the body took part in a contact during the last step.
    pub fn is_colliding(&self, index: usize) -> bool {
        self.contacts
            .iter()
            .any(|contact| contact.body_a_idx == index || contact.body_b_idx == index)
    }

    /// Advances the scene by one time step `dt`. A `dt` that is not strictly
    /// positive, NaN included, leaves the scene as it was.
    pub fn step(&mut self, dt: f64) {
        if dt.is_nan() || dt <= 0.0 {
            return;
        }

        // 1. Integrate motion and wrap into the box
        let half_extent = self.config.half_extent;
        for body in self.bodies.iter_mut() {
            integrator::integrate(body, dt);
            body.position = integrator::wrap_position(body.position, half_extent);
        }

        // 2. Collide every pair, correcting as we go
        self.contacts.clear();
        for i in 0..self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                if let Some(manifold) = self.collide_pair(i, j) {
                    debug!(
                        "bodies {} and {} in contact: normal={:?} depth={:.4} point={:?} flipped={}",
                        manifold.body_a_idx,
                        manifold.body_b_idx,
                        manifold.normal,
                        manifold.depth,
                        manifold.contact_point,
                        manifold.flipped
                    );
                    self.contacts.push(manifold);
                }
            }
        }
    }

    /// Runs the narrow phase on bodies `i < j` and splits the penetration
    /// evenly between them.
    fn collide_pair(&mut self, i: usize, j: usize) -> Option<CollisionManifold> {
        // Get mutable references using split_at_mut
        let (head, tail) = self.bodies.split_at_mut(j);
        let body_a = &mut head[i];
        let body_b = &mut tail[0];

        let contact = self.narrow_phase.collide(body_a, body_b)?;
        let half = contact.penetration * 0.5;
        body_a.position -= half;
        body_b.position += half;
        trace!(
            "positional correction {:?}: body {} -> {:?}, body {} -> {:?}",
            half,
            i,
            body_a.position,
            j,
            body_b.position
        );

        Some(CollisionManifold {
            body_a_idx: i,
            body_b_idx: j,
            normal: contact.normal(),
            depth: contact.depth(),
            contact_point: contact.collision.corrected_contact(contact.penetration),
            flipped: contact.collision.flipped,
        })
    }
}
