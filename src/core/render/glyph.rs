use std::error::Error;
use std::fmt;

pub const DEFAULT_GLYPH: &str = "█";
pub const MAX_GLYPH_CHARS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlyphError {
    Empty,
    TooLong { chars: usize },
    ControlCharacter,
}

impl fmt::Display for GlyphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "glyph must not be empty"),
            Self::TooLong { chars } => write!(
                f,
                "glyph must be at most {} characters, got {}",
                MAX_GLYPH_CHARS, chars
            ),
            Self::ControlCharacter => write!(f, "glyph must not contain control characters"),
        }
    }
}

impl Error for GlyphError {}

/// Text drawn for every escaped cell in the coloured modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph(String);

impl Glyph {
    pub fn new(text: impl Into<String>) -> Result<Self, GlyphError> {
        let text = text.into();
        let chars = text.chars().count();

        if chars == 0 {
            return Err(GlyphError::Empty);
        }

        if chars > MAX_GLYPH_CHARS {
            return Err(GlyphError::TooLong { chars });
        }

        if text.chars().any(char::is_control) {
            return Err(GlyphError::ControlCharacter);
        }

        Ok(Self(text))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Self(DEFAULT_GLYPH.to_string())
    }
}
