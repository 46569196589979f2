use crate::core::data::grid_point::GridPoint;
use crate::core::data::resolution::Resolution;
use std::error::Error;

pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, point: GridPoint) -> Result<Self::Success, Self::Failure>;

    fn resolution(&self) -> Resolution;
}
