use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::data::grid::{Grid, GridError};
use crate::core::fractals::algorithm::EscapeTimeAlgorithm;
use crate::core::fractals::fractal_mode::FractalMode;
use crate::core::navigation::viewport::Viewport;
use crate::core::util::grid_to_complex_coords::GridToComplexCoordsError;
use std::error::Error;
use std::fmt;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleGridError {
    Coords(GridToComplexCoordsError),
    Grid(GridError),
}

impl fmt::Display for SampleGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coords(err) => write!(f, "sampling error: {}", err),
            Self::Grid(err) => write!(f, "grid error: {}", err),
        }
    }
}

impl Error for SampleGridError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Coords(err) => Some(err),
            Self::Grid(err) => Some(err),
        }
    }
}

impl From<GridToComplexCoordsError> for SampleGridError {
    fn from(err: GridToComplexCoordsError) -> Self {
        Self::Coords(err)
    }
}

impl From<GridError> for SampleGridError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}

/// Computes the escape count of every cell in the viewport from scratch.
pub fn sample_grid(viewport: &Viewport, mode: FractalMode) -> Result<Grid, SampleGridError> {
    let resolution = viewport.resolution();
    let algorithm = EscapeTimeAlgorithm::new(
        resolution,
        viewport.region(),
        mode,
        viewport.iteration_limit(),
    );

    let start = Instant::now();
    let cells = generate_fractal_parallel_rayon(&algorithm)?;
    let grid = Grid::from_data(resolution, cells)?;

    tracing::info!(
        fractal = %mode,
        rows = resolution.rows(),
        cols = resolution.cols(),
        iteration_limit = algorithm.iteration_limit(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "sampled grid"
    );

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::data::complex_rect::ComplexRect;
    use crate::core::data::grid_point::GridPoint;
    use crate::core::fractals::escape_time::escape_iteration;

    fn viewport(xmin: f64, xmax: f64, ymin: f64, ymax: f64, scaler: u32) -> Viewport {
        let region = ComplexRect::from_bounds(xmin, xmax, ymin, ymax).unwrap();

        Viewport::new(region, scaler, 0.2, 50).unwrap()
    }

    #[test]
    fn grid_matches_viewport_resolution() {
        let viewport = viewport(-2.0, 2.0, -1.0, 1.0, 1);

        let grid = sample_grid(&viewport, FractalMode::Mandelbrot).unwrap();

        assert_eq!(grid.resolution().rows(), 4);
        assert_eq!(grid.resolution().cols(), 20);
    }

    #[test]
    fn cells_sample_top_left_corner_of_each_step() {
        let viewport = viewport(-2.0, 2.0, -1.0, 1.0, 1);

        let grid = sample_grid(&viewport, FractalMode::Mandelbrot).unwrap();

        let point = GridPoint { row: 3, col: 7 };
        let z0 = Complex::new(-2.0 + 7.0 * (4.0 / 20.0), -1.0 + 3.0 * (2.0 / 4.0));
        let expected = escape_iteration(z0, FractalMode::Mandelbrot, 50);
        assert_eq!(grid.get(point).unwrap(), expected);
    }

    #[test]
    fn origin_is_interior_for_mandelbrot() {
        let viewport = viewport(0.0, 1.0, 0.0, 1.0, 1);

        let grid = sample_grid(&viewport, FractalMode::Mandelbrot).unwrap();

        assert_eq!(grid.get(GridPoint { row: 0, col: 0 }).unwrap(), 0);
    }

    #[test]
    fn julia_mode_uses_constant() {
        let viewport = viewport(-2.0, 2.0, -1.0, 1.0, 1);
        let mode = FractalMode::Julia {
            constant: Complex::new(-0.55268, 0.959456),
        };

        let grid = sample_grid(&viewport, mode).unwrap();

        let expected = escape_iteration(Complex::new(-2.0, -1.0), mode, 50);
        assert_eq!(grid.get(GridPoint { row: 0, col: 0 }).unwrap(), expected);
    }
}
