//! Error types for shape construction and strict narrow-phase queries.

use std::fmt;
use thiserror::Error;

/// Reasons a vertex list cannot become a [`ConvexPolygon`](crate::shapes::ConvexPolygon).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ShapeError {
    #[error("polygon needs at least 3 distinct vertices, got {count}")]
    TooFewVertices { count: usize },
    #[error("vertex {index} has a non-finite coordinate")]
    NonFiniteVertex { index: usize },
    /// The corner at `index` turns clockwise or is collinear with its neighbours.
    #[error("vertices are not strictly convex and counter-clockwise at vertex {index}")]
    NotConvex { index: usize },
    #[error("regular polygon radius must be positive and finite, got {radius}")]
    InvalidRadius { radius: f64 },
}

/// The iterative stage of the narrow phase that gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Gjk,
    Epa,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Gjk => f.write_str("GJK"),
            Stage::Epa => f.write_str("EPA"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollisionError {
    #[error("{stage} did not converge within {iterations} iterations")]
    IterationLimitExceeded { stage: Stage, iterations: usize },
}
