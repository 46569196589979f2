use crate::core::render::errors::RenderError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Color,
    Number,
    Red,
    Green,
    Blue,
    Gray,
}

impl RenderMode {
    pub const ALL: &'static [Self] = &[
        Self::Color,
        Self::Number,
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Gray,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Number => "number",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Gray => "gray",
        }
    }
}

impl FromStr for RenderMode {
    type Err = RenderError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "color" | "colour" => Ok(Self::Color),
            "number" => Ok(Self::Number),
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "blue" => Ok(Self::Blue),
            "gray" | "grey" => Ok(Self::Gray),
            _ => Err(RenderError::UnknownMode {
                name: name.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The render mode as requested by the user.
///
/// An unrecognised name is kept rather than rejected so that it can be reported on each
/// frame while the explorer stays interactive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeSelection {
    Known(RenderMode),
    Unknown(String),
}

impl ModeSelection {
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.parse() {
            Ok(mode) => Self::Known(mode),
            Err(_) => Self::Unknown(name.to_string()),
        }
    }

    pub fn resolve(&self) -> Result<RenderMode, RenderError> {
        match self {
            Self::Known(mode) => Ok(*mode),
            Self::Unknown(name) => Err(RenderError::UnknownMode { name: name.clone() }),
        }
    }
}

impl Default for ModeSelection {
    fn default() -> Self {
        Self::Known(RenderMode::default())
    }
}
