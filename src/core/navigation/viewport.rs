use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::resolution::{Resolution, ResolutionError};
use crate::core::navigation::command::{NavigationCommand, PanDirection};
use std::error::Error;
use std::f64::consts::SQRT_2;
use std::fmt;

pub const DEFAULT_XMIN: f64 = -2.1;
pub const DEFAULT_XMAX: f64 = 0.7;
pub const DEFAULT_YMIN: f64 = -1.5;
pub const DEFAULT_YMAX: f64 = 1.5;
pub const DEFAULT_SCALER: u32 = 10;
pub const DEFAULT_PAN_DELTA: f64 = 0.2;
pub const DEFAULT_ITERATION_LIMIT: u32 = 100;
pub const ITERATION_STEP: u32 = 100;
pub const MIN_ITERATION_LIMIT: u32 = 1;

pub(crate) fn default_region() -> ComplexRect {
    ComplexRect::from_bounds(DEFAULT_XMIN, DEFAULT_XMAX, DEFAULT_YMIN, DEFAULT_YMAX)
        .expect("default fractal region is valid")
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewportError {
    Region(ComplexRectError),
    Resolution(ResolutionError),
    ZeroScaler,
    InvalidPanDelta(f64),
    IterationLimitTooLow { iteration_limit: u32 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Region(err) => write!(f, "invalid viewport bounds: {}", err),
            Self::Resolution(err) => write!(f, "invalid viewport resolution: {}", err),
            Self::ZeroScaler => write!(f, "scaler must be at least 1"),
            Self::InvalidPanDelta(delta) => {
                write!(f, "pan step must be positive and finite, got {}", delta)
            }
            Self::IterationLimitTooLow { iteration_limit } => write!(
                f,
                "iteration limit must be at least {}, got {}",
                MIN_ITERATION_LIMIT, iteration_limit
            ),
        }
    }
}

impl Error for ViewportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Region(err) => Some(err),
            Self::Resolution(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ComplexRectError> for ViewportError {
    fn from(err: ComplexRectError) -> Self {
        Self::Region(err)
    }
}

impl From<ResolutionError> for ViewportError {
    fn from(err: ResolutionError) -> Self {
        Self::Resolution(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationWarning {
    IterationLimitClamped,
    DegenerateRegion,
    DegeneratePanStep,
}

/// Result of applying one command to a [`Viewport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    /// The command ran but a value hit its limit.
    Clamped(NavigationWarning),
    /// The command would have broken a viewport invariant; state is unchanged.
    Rejected(NavigationWarning),
    Quit,
}

impl Transition {
    #[must_use]
    pub fn marks_dirty(self) -> bool {
        matches!(self, Self::Applied | Self::Clamped(_))
    }
}

/// The sampled region of the plane together with its pan/zoom and iteration settings.
///
/// The cell resolution is derived from the bounds and scaler when the viewport is built or
/// its scaler changes. Pan and zoom keep the resolution, so zooming changes the sampling
/// density rather than the frame size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    region: ComplexRect,
    scaler: u32,
    pan_delta: f64,
    iteration_limit: u32,
    resolution: Resolution,
}

impl Viewport {
    pub fn new(
        region: ComplexRect,
        scaler: u32,
        pan_delta: f64,
        iteration_limit: u32,
    ) -> Result<Self, ViewportError> {
        if scaler == 0 {
            return Err(ViewportError::ZeroScaler);
        }

        if !pan_delta.is_finite() || pan_delta <= 0.0 {
            return Err(ViewportError::InvalidPanDelta(pan_delta));
        }

        if iteration_limit < MIN_ITERATION_LIMIT {
            return Err(ViewportError::IterationLimitTooLow { iteration_limit });
        }

        let resolution = Resolution::for_region(&region, scaler)?;

        Ok(Self {
            region,
            scaler,
            pan_delta,
            iteration_limit,
            resolution,
        })
    }

    #[must_use]
    pub fn region(&self) -> ComplexRect {
        self.region
    }

    #[must_use]
    pub fn xmin(&self) -> f64 {
        self.region.top_left().real
    }

    #[must_use]
    pub fn xmax(&self) -> f64 {
        self.region.bottom_right().real
    }

    #[must_use]
    pub fn ymin(&self) -> f64 {
        self.region.top_left().imag
    }

    #[must_use]
    pub fn ymax(&self) -> f64 {
        self.region.bottom_right().imag
    }

    #[must_use]
    pub fn scaler(&self) -> u32 {
        self.scaler
    }

    #[must_use]
    pub fn pan_delta(&self) -> f64 {
        self.pan_delta
    }

    #[must_use]
    pub fn iteration_limit(&self) -> u32 {
        self.iteration_limit
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn apply(&mut self, command: NavigationCommand) -> Transition {
        match command {
            NavigationCommand::Pan(direction) => self.pan(direction),
            NavigationCommand::ZoomIn => self.zoom_in(),
            NavigationCommand::ZoomOut => self.zoom_out(),
            NavigationCommand::IncreaseIterations => self.increase_iterations(),
            NavigationCommand::DecreaseIterations => self.decrease_iterations(),
            NavigationCommand::Quit => Transition::Quit,
        }
    }

    pub fn pan(&mut self, direction: PanDirection) -> Transition {
        let offset = match direction {
            PanDirection::Up => Complex::new(0.0, -self.pan_delta),
            PanDirection::Down => Complex::new(0.0, self.pan_delta),
            PanDirection::Left => Complex::new(-self.pan_delta, 0.0),
            PanDirection::Right => Complex::new(self.pan_delta, 0.0),
        };

        match self.region.translated(offset) {
            Ok(region) => {
                self.region = region;
                Transition::Applied
            }
            Err(_) => Transition::Rejected(NavigationWarning::DegenerateRegion),
        }
    }

    /// Shrinks both axes about their midpoints by `1/√2` and the pan step with them.
    pub fn zoom_in(&mut self) -> Transition {
        self.rescale(1.0 / SQRT_2)
    }

    /// Grows both axes about their midpoints by `√2` and the pan step with them.
    pub fn zoom_out(&mut self) -> Transition {
        self.rescale(SQRT_2)
    }

    pub fn increase_iterations(&mut self) -> Transition {
        match self.iteration_limit.checked_add(ITERATION_STEP) {
            Some(limit) => {
                self.iteration_limit = limit;
                Transition::Applied
            }
            None => {
                self.iteration_limit = u32::MAX;
                Transition::Clamped(NavigationWarning::IterationLimitClamped)
            }
        }
    }

    /// Lowers the limit by 100, saturating at [`MIN_ITERATION_LIMIT`].
    pub fn decrease_iterations(&mut self) -> Transition {
        let lowered = self.iteration_limit.saturating_sub(ITERATION_STEP);

        if lowered < MIN_ITERATION_LIMIT {
            self.iteration_limit = MIN_ITERATION_LIMIT;
            Transition::Clamped(NavigationWarning::IterationLimitClamped)
        } else {
            self.iteration_limit = lowered;
            Transition::Applied
        }
    }

    fn rescale(&mut self, factor: f64) -> Transition {
        let pan_delta = self.pan_delta * factor;

        if !pan_delta.is_finite() || pan_delta <= 0.0 || pan_delta == self.pan_delta {
            return Transition::Rejected(NavigationWarning::DegeneratePanStep);
        }

        match self.region.scaled_about_center(factor) {
            // At the edge of f64 precision the rescaled bounds round back to the current ones.
            Ok(region) if region == self.region => {
                Transition::Rejected(NavigationWarning::DegenerateRegion)
            }
            Ok(region) => {
                self.region = region;
                self.pan_delta = pan_delta;
                Transition::Applied
            }
            Err(_) => Transition::Rejected(NavigationWarning::DegenerateRegion),
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(
            default_region(),
            DEFAULT_SCALER,
            DEFAULT_PAN_DELTA,
            DEFAULT_ITERATION_LIMIT,
        )
        .expect("default viewport settings are valid")
    }
}
