/// Terminal-ready output for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFrame {
    pub clear_first: bool,
    /// One entry per grid row, then a final line holding the style reset.
    pub lines: Vec<String>,
}

impl RenderedFrame {
    /// Rows of the fractal, without the trailing reset line.
    #[must_use]
    pub fn body(&self) -> &[String] {
        let end = self.lines.len().saturating_sub(1);

        &self.lines[..end]
    }
}
