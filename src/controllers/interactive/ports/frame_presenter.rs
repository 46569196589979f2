use crate::core::render::errors::RenderError;
use crate::core::render::rendered_frame::RenderedFrame;
use std::io;

pub trait FramePresenter {
    fn present(&mut self, frame: &RenderedFrame) -> io::Result<()>;

    /// Shows a recoverable render failure in place of the frame.
    fn report(&mut self, error: &RenderError) -> io::Result<()>;
}
