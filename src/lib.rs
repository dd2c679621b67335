pub mod math;
pub mod integration;
pub mod collision;
pub mod shapes;
pub mod world;
pub mod common;

// Re-export key types for easier use
pub use collision::{Collision, CollisionManifold, Contact, NarrowPhase, Simplex};
pub use common::{CollisionError, NarrowPhaseConfig, SceneConfig, ShapeError};
pub use integration::InputSnapshot;
pub use math::vec2::Vec2;
pub use shapes::ConvexPolygon;
pub use world::Scene;
