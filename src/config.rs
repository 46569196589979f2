use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::fractals::fractal_mode::FractalMode;
use crate::core::navigation::viewport::{
    DEFAULT_ITERATION_LIMIT, DEFAULT_PAN_DELTA, DEFAULT_SCALER, DEFAULT_XMAX, DEFAULT_XMIN,
    DEFAULT_YMAX, DEFAULT_YMIN, Viewport, ViewportError,
};
use crate::core::render::glyph::{DEFAULT_GLYPH, Glyph, GlyphError};
use crate::core::render::render_config::RenderConfig;
use crate::core::render::render_mode::{ModeSelection, RenderMode};
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Bounds(ComplexRectError),
    Viewport(ViewportError),
    Glyph(GlyphError),
    ScalerOutOfRange { scaler: i64 },
    IterationLimitOutOfRange { iteration_limit: i64 },
    NonFiniteJuliaConstant { real: f64, imag: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounds(err) => write!(f, "invalid bounds: {}", err),
            Self::Viewport(err) => write!(f, "invalid viewport: {}", err),
            Self::Glyph(err) => write!(f, "invalid glyph: {}", err),
            Self::ScalerOutOfRange { scaler } => {
                write!(f, "scaler must be between 1 and {}, got {}", u32::MAX, scaler)
            }
            Self::IterationLimitOutOfRange { iteration_limit } => write!(
                f,
                "iteration limit must be between 1 and {}, got {}",
                u32::MAX,
                iteration_limit
            ),
            Self::NonFiniteJuliaConstant { real, imag } => {
                write!(f, "julia constant must be finite, got {} {:+}i", real, imag)
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Bounds(err) => Some(err),
            Self::Viewport(err) => Some(err),
            Self::Glyph(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ComplexRectError> for ConfigError {
    fn from(err: ComplexRectError) -> Self {
        Self::Bounds(err)
    }
}

impl From<ViewportError> for ConfigError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<GlyphError> for ConfigError {
    fn from(err: GlyphError) -> Self {
        Self::Glyph(err)
    }
}

/// Unvalidated settings, as typed by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigOptions {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
    pub scaler: i64,
    pub pan_delta: f64,
    pub iteration_limit: i64,
    /// `(real, imag)` of the Julia constant; `None` renders the Mandelbrot set.
    pub julia: Option<(f64, f64)>,
    pub mode: String,
    pub glyph: String,
    pub color_shift: i64,
    pub clear_before_render: bool,
    pub fixed_frame: bool,
}

impl Default for ConfigOptions {
    fn default() -> Self {
        Self {
            xmin: DEFAULT_XMIN,
            xmax: DEFAULT_XMAX,
            ymin: DEFAULT_YMIN,
            ymax: DEFAULT_YMAX,
            scaler: i64::from(DEFAULT_SCALER),
            pan_delta: DEFAULT_PAN_DELTA,
            iteration_limit: i64::from(DEFAULT_ITERATION_LIMIT),
            julia: None,
            mode: RenderMode::default().name().to_string(),
            glyph: DEFAULT_GLYPH.to_string(),
            color_shift: 0,
            clear_before_render: false,
            fixed_frame: false,
        }
    }
}

impl ConfigOptions {
    /// Validates every setting. An unrecognised render mode is kept and reported per frame.
    pub fn build(self) -> Result<ExplorerConfig, ConfigError> {
        let scaler = u32::try_from(self.scaler)
            .ok()
            .filter(|&s| s >= 1)
            .ok_or(ConfigError::ScalerOutOfRange {
                scaler: self.scaler,
            })?;

        let iteration_limit = u32::try_from(self.iteration_limit)
            .ok()
            .filter(|&limit| limit >= 1)
            .ok_or(ConfigError::IterationLimitOutOfRange {
                iteration_limit: self.iteration_limit,
            })?;

        let mode = match self.julia {
            None => FractalMode::Mandelbrot,
            Some((real, imag)) => {
                let constant = Complex::new(real, imag);
                if !constant.is_finite() {
                    return Err(ConfigError::NonFiniteJuliaConstant { real, imag });
                }
                FractalMode::Julia { constant }
            }
        };

        let region = ComplexRect::from_bounds(self.xmin, self.xmax, self.ymin, self.ymax)?;
        let viewport = Viewport::new(region, scaler, self.pan_delta, iteration_limit)?;

        let render = RenderConfig {
            mode: ModeSelection::parse(&self.mode),
            glyph: Glyph::new(self.glyph)?,
            color_shift: self.color_shift,
            clear_before_render: self.clear_before_render,
        };

        Ok(ExplorerConfig {
            viewport,
            mode,
            render,
            fixed_frame: self.fixed_frame,
        })
    }
}

/// Every tunable of one exploration session.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerConfig {
    pub viewport: Viewport,
    pub mode: FractalMode,
    pub render: RenderConfig,
    /// Render a single frame and exit without reading commands.
    pub fixed_frame: bool,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        ConfigOptions::default()
            .build()
            .expect("default configuration is valid")
    }
}
