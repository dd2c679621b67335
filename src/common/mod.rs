pub mod config;
pub mod error;

pub use config::{NarrowPhaseConfig, SceneConfig};
pub use error::{CollisionError, ShapeError, Stage};
