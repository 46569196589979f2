use crate::core::actions::sample_grid::SampleGridError;
use crate::core::render::errors::RenderError;
use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum ControllerError {
    Input(io::Error),
    Present(io::Error),
    Sample(SampleGridError),
    Render(RenderError),
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(err) => write!(f, "failed to read commands: {}", err),
            Self::Present(err) => write!(f, "failed to present frame: {}", err),
            Self::Sample(err) => write!(f, "failed to sample grid: {}", err),
            Self::Render(err) => write!(f, "failed to render frame: {}", err),
        }
    }
}

impl Error for ControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Input(err) => Some(err),
            Self::Present(err) => Some(err),
            Self::Sample(err) => Some(err),
            Self::Render(err) => Some(err),
        }
    }
}

impl From<SampleGridError> for ControllerError {
    fn from(err: SampleGridError) -> Self {
        Self::Sample(err)
    }
}
