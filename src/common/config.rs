//! Tunables for the narrow phase and the scene driver.

/// Iteration caps and tolerances of the GJK/EPA loops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NarrowPhaseConfig {
    /// Simplex refinement steps after the initial triangle is built.
    pub max_gjk_iterations: usize,
    /// Polytope expansions before EPA gives up.
    pub max_epa_iterations: usize,
    /// EPA stops once a new support point improves the edge distance by less than this.
    pub epa_tolerance: f64,
}

impl NarrowPhaseConfig {
    pub const DEFAULT_MAX_GJK_ITERATIONS: usize = 10;
    pub const DEFAULT_MAX_EPA_ITERATIONS: usize = 10;
    pub const DEFAULT_EPA_TOLERANCE: f64 = 1e-9;
}

impl Default for NarrowPhaseConfig {
    fn default() -> Self {
        Self {
            max_gjk_iterations: Self::DEFAULT_MAX_GJK_ITERATIONS,
            max_epa_iterations: Self::DEFAULT_MAX_EPA_ITERATIONS,
            epa_tolerance: Self::DEFAULT_EPA_TOLERANCE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    /// Positions wrap toroidally into `[-half_extent, half_extent)` on both axes.
    pub half_extent: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self { half_extent: 5.0 }
    }
}
