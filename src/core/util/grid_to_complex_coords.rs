use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::grid_point::GridPoint;
use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridToComplexCoordsError {
    PointOutsideGrid {
        point: GridPoint,
        resolution: Resolution,
    },
}

impl fmt::Display for GridToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideGrid { point, resolution } => {
                write!(
                    f,
                    "cell (row: {}, col: {}) is outside the {}x{} grid",
                    point.row,
                    point.col,
                    resolution.rows(),
                    resolution.cols()
                )
            }
        }
    }
}

impl Error for GridToComplexCoordsError {}

/// Maps a grid cell to the plane coordinate of its top-left corner.
///
/// Each column advances `width / cols` along the real axis and each row advances
/// `height / rows` along the imaginary axis, so the last cell stops one step short of the
/// far bound.
pub fn grid_to_complex_coords(
    point: GridPoint,
    resolution: Resolution,
    region: ComplexRect,
) -> Result<Complex, GridToComplexCoordsError> {
    if !resolution.contains_point(point) {
        return Err(GridToComplexCoordsError::PointOutsideGrid { point, resolution });
    }

    let delta_real = region.width() / f64::from(resolution.cols());
    let delta_imag = region.height() / f64::from(resolution.rows());

    Ok(Complex {
        real: region.top_left().real + f64::from(point.col) * delta_real,
        imag: region.top_left().imag + f64::from(point.row) * delta_imag,
    })
}
