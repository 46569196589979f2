use crate::core::data::grid::GridError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    UnknownMode { name: String },
    Grid(GridError),
    Format(fmt::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMode { name } => write!(f, "{} is an invalid render mode!", name),
            Self::Grid(err) => write!(f, "grid error: {}", err),
            Self::Format(err) => write!(f, "failed to encode frame: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnknownMode { .. } => None,
            Self::Grid(err) => Some(err),
            Self::Format(err) => Some(err),
        }
    }
}

impl From<fmt::Error> for RenderError {
    fn from(err: fmt::Error) -> Self {
        Self::Format(err)
    }
}

impl From<GridError> for RenderError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}
