use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::grid_point::GridPoint;
use std::error::Error;
use std::fmt;

/// Terminal cells are roughly two and a half times taller than they are wide, so one unit of
/// the plane spans 2 rows but 5 columns.
pub const ROWS_PER_UNIT: f64 = 2.0;
pub const COLS_PER_UNIT: f64 = 5.0;

/// Largest frame a viewport may sample; about 64 MiB of escape counts.
pub const MAX_CELLS: usize = 1 << 24;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ResolutionError {
    Empty { rows: u32, cols: u32 },
    OutOfRange { rows: f64, cols: f64 },
    TooManyCells { rows: u32, cols: u32 },
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { rows, cols } => {
                write!(
                    f,
                    "resolution must be at least 1x1 cells, got {} rows by {} cols",
                    rows, cols
                )
            }
            Self::OutOfRange { rows, cols } => {
                write!(
                    f,
                    "resolution of {} rows by {} cols cannot be represented",
                    rows, cols
                )
            }
            Self::TooManyCells { rows, cols } => {
                write!(
                    f,
                    "resolution of {} rows by {} cols exceeds the limit of {} cells",
                    rows, cols, MAX_CELLS
                )
            }
        }
    }
}

impl Error for ResolutionError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Resolution {
    rows: u32,
    cols: u32,
}

impl Resolution {
    pub fn new(rows: u32, cols: u32) -> Result<Self, ResolutionError> {
        if rows == 0 || cols == 0 {
            return Err(ResolutionError::Empty { rows, cols });
        }

        Ok(Self { rows, cols })
    }

    /// Derives the aspect-corrected cell resolution for a plane region.
    ///
    /// `rows = round(height * 2 * scaler)` and `cols = round(width * 5 * scaler)`.
    pub fn for_region(region: &ComplexRect, scaler: u32) -> Result<Self, ResolutionError> {
        let rows = (region.height() * ROWS_PER_UNIT * f64::from(scaler)).round();
        let cols = (region.width() * COLS_PER_UNIT * f64::from(scaler)).round();

        let limit = f64::from(u32::MAX);

        if !rows.is_finite() || !cols.is_finite() || rows > limit || cols > limit {
            return Err(ResolutionError::OutOfRange { rows, cols });
        }

        let resolution = Self::new(rows as u32, cols as u32)?;

        if resolution.cell_count() > MAX_CELLS {
            return Err(ResolutionError::TooManyCells {
                rows: resolution.rows,
                cols: resolution.cols,
            });
        }

        Ok(resolution)
    }

    #[must_use]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    #[must_use]
    pub fn contains_point(&self, point: GridPoint) -> bool {
        point.row < self.rows && point.col < self.cols
    }
}
