/// Cell coordinate within a sampled grid. Row 0 is the top line of the frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GridPoint {
    pub row: u32,
    pub col: u32,
}
