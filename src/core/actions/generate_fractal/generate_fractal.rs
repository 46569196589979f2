use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::grid_point::GridPoint;

/// Evaluates every cell of the algorithm's grid on the calling thread, in row-major order.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    let resolution = algorithm.resolution();

    (0..resolution.rows())
        .flat_map(|row| (0..resolution.cols()).map(move |col| GridPoint { row, col }))
        .map(|point| algorithm.compute(point))
        .collect()
}
