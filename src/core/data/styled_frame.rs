use crate::core::data::colour::Colour;
use crate::core::data::grid::GridError;
use crate::core::data::resolution::Resolution;

/// What to draw in one terminal cell, independent of how it is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyledCell {
    Blank,
    Count(u32),
    Glyph(Colour),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledFrame {
    resolution: Resolution,
    cells: Vec<StyledCell>,
}

impl StyledFrame {
    pub fn from_cells(resolution: Resolution, cells: Vec<StyledCell>) -> Result<Self, GridError> {
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

    pub fn rows(&self) -> impl Iterator<Item = &[StyledCell]> {
        self.cells.chunks(self.resolution.cols() as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_cells_rejects_size_mismatch() {
        let result = StyledFrame::from_cells(
            Resolution::new(2, 2).unwrap(),
            vec![StyledCell::Blank; 3],
        );

        assert_eq!(
            result,
            Err(GridError::BoundsMismatch {
                resolution_size: 4,
                data_size: 3
            })
        );
    }
}
