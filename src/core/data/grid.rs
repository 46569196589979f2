use crate::core::data::grid_point::GridPoint;
use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    PointOutsideBounds {
        point: GridPoint,
        resolution: Resolution,
    },
    BoundsMismatch {
        resolution_size: usize,
        data_size: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                resolution_size,
                data_size,
            } => {
                write!(
                    f,
                    "resolution size {} does not match grid data size {}",
                    resolution_size, data_size
                )
            }
            Self::PointOutsideBounds { point, resolution } => {
                write!(
                    f,
                    "cell at row:{}, col:{} outside of grid bounds rows:{}, cols:{}",
                    point.row,
                    point.col,
                    resolution.rows(),
                    resolution.cols()
                )
            }
        }
    }
}

impl Error for GridError {}

pub type GridData = Vec<u32>;

/// Row-major iteration counts for one frame.
///
/// `0` marks a point that did not escape within the iteration limit; any other value is the
/// iterate at which it escaped.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    resolution: Resolution,
    cells: GridData,
}

impl Grid {
    pub fn from_data(resolution: Resolution, cells: GridData) -> Result<Self, GridError> {
        if resolution.cell_count() != cells.len() {
            return Err(GridError::BoundsMismatch {
                resolution_size: resolution.cell_count(),
                data_size: cells.len(),
            });
        }

        Ok(Self { resolution, cells })
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn cells(&self) -> &GridData {
        &self.cells
    }

    pub fn get(&self, point: GridPoint) -> Result<u32, GridError> {
        if !self.resolution.contains_point(point) {
            return Err(GridError::PointOutsideBounds {
                point,
                resolution: self.resolution,
            });
        }

        Ok(self.cells[self.index(point)])
    }

    /// Iterates the grid one row slice at a time, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.resolution.cols() as usize)
    }

    /// Largest escape count in the frame, or `None` if every point is interior.
    #[must_use]
    pub fn max_escape_count(&self) -> Option<u32> {
        self.cells.iter().copied().filter(|&count| count > 0).max()
    }

    fn index(&self, point: GridPoint) -> usize {
        point.row as usize * self.resolution.cols() as usize + point.col as usize
    }
}
