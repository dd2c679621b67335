pub mod contact;
pub mod epa;
pub mod gjk;
pub mod manifold;
pub mod narrow_phase;
pub mod outcome;
pub mod simplex;

#[cfg(test)]
pub(crate) mod test_shapes;

// Re-export key types
pub use contact::resolve_contact;
pub use gjk::{minkowski_support, test_overlap, GjkResult};
pub use manifold::*;
pub use narrow_phase::{Contact, NarrowPhase};
pub use outcome::Outcome;
pub use simplex::{OriginLocation, Simplex, SimplexEdge};
