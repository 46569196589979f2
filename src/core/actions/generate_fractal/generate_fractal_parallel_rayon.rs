use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::grid_point::GridPoint;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Each task owns whole rows, so no cell is written by more than one worker. Rows are
/// reassembled in order, giving the same row-major output as [`generate_fractal`].
///
/// [`generate_fractal`]: crate::core::actions::generate_fractal::generate_fractal::generate_fractal
pub fn generate_fractal_parallel_rayon<Alg>(
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let resolution = algorithm.resolution();
    let row_width = resolution.cols() as usize;

    let rows: Result<Vec<Vec<Alg::Success>>, Alg::Failure> = (0..resolution.rows())
        .into_par_iter()
        .map(|row| {
            let mut cells = Vec::with_capacity(row_width);

            for col in 0..resolution.cols() {
                cells.push(algorithm.compute(GridPoint { row, col })?);
            }

            Ok(cells)
        })
        .collect();

    rows.map(|r| r.into_iter().flatten().collect())
}
