use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::grid_point::GridPoint;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::escape_time::escape_iteration;
use crate::core::fractals::fractal_mode::FractalMode;
use crate::core::util::grid_to_complex_coords::{
    GridToComplexCoordsError, grid_to_complex_coords,
};

/// Escape-time evaluation bound to one frame's region and resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeTimeAlgorithm {
    resolution: Resolution,
    region: ComplexRect,
    mode: FractalMode,
    iteration_limit: u32,
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = u32;
    type Failure = GridToComplexCoordsError;

    fn compute(&self, point: GridPoint) -> Result<Self::Success, Self::Failure> {
        let z0 = grid_to_complex_coords(point, self.resolution, self.region)?;

        Ok(escape_iteration(z0, self.mode, self.iteration_limit))
    }

    fn resolution(&self) -> Resolution {
        self.resolution
    }
}

impl EscapeTimeAlgorithm {
    #[must_use]
    pub fn new(
        resolution: Resolution,
        region: ComplexRect,
        mode: FractalMode,
        iteration_limit: u32,
    ) -> Self {
        Self {
            resolution,
            region,
            mode,
            iteration_limit,
        }
    }

    #[must_use]
    pub fn iteration_limit(&self) -> u32 {
        self.iteration_limit
    }
}
