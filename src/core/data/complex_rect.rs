use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRectError {
    InvalidSize { width: f64, height: f64 },
    NonFinite { top_left: Complex, bottom_right: Complex },
}

impl fmt::Display for ComplexRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "complex rect size must be positive: {}x{}",
                    width, height
                )
            }
            Self::NonFinite {
                top_left,
                bottom_right,
            } => {
                write!(
                    f,
                    "complex rect bounds must be finite: x {}..{}, y {}..{}",
                    top_left.real, bottom_right.real, top_left.imag, bottom_right.imag
                )
            }
        }
    }
}

impl Error for ComplexRectError {}

/// Axis-aligned region of the complex plane.
///
/// `top_left` holds `(xmin, ymin)` and `bottom_right` holds `(xmax, ymax)`. Row 0 of a
/// sampled grid sits on `ymin`, so smaller imaginary parts are drawn higher on screen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    top_left: Complex,
    bottom_right: Complex,
}

impl ComplexRect {
    pub fn new(top_left: Complex, bottom_right: Complex) -> Result<Self, ComplexRectError> {
        if !top_left.is_finite() || !bottom_right.is_finite() {
            return Err(ComplexRectError::NonFinite {
                top_left,
                bottom_right,
            });
        }

        let width = bottom_right.real - top_left.real;
        let height = bottom_right.imag - top_left.imag;

        if width <= 0.0 || height <= 0.0 {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    pub fn from_bounds(
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
    ) -> Result<Self, ComplexRectError> {
        Self::new(Complex::new(xmin, ymin), Complex::new(xmax, ymax))
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.bottom_right.real - self.top_left.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom_right.imag - self.top_left.imag
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: (self.top_left.real + self.bottom_right.real) / 2.0,
            imag: (self.top_left.imag + self.bottom_right.imag) / 2.0,
        }
    }

    /// Shifts both bounds of each axis by the given offsets.
    pub fn translated(&self, offset: Complex) -> Result<Self, ComplexRectError> {
        Self::new(self.top_left + offset, self.bottom_right + offset)
    }

    /// Rescales both axes around their midpoints so each extent is multiplied by `factor`.
    pub fn scaled_about_center(&self, factor: f64) -> Result<Self, ComplexRectError> {
        let center = self.center();
        let half_width = self.width() * factor / 2.0;
        let half_height = self.height() * factor / 2.0;

        Self::new(
            Complex {
                real: center.real - half_width,
                imag: center.imag - half_height,
            },
            Complex {
                real: center.real + half_width,
                imag: center.imag + half_height,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn rect(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> ComplexRect {
        ComplexRect::from_bounds(xmin, xmax, ymin, ymax).expect("test rect should be valid")
    }

    #[test]
    fn test_complex_rect_new_valid() {
        let top_left = Complex::new(-2.0, -1.0);
        let bottom_right = Complex::new(1.0, 1.0);

        let value = ComplexRect::new(top_left, bottom_right).unwrap();

        assert_eq!(value.top_left(), top_left);
        assert_eq!(value.bottom_right(), bottom_right);
    }

    #[test]
    fn test_complex_rect_dimensions_must_be_positive() {
        assert_eq!(
            ComplexRect::from_bounds(0.0, 0.0, 0.0, 100.0),
            Err(ComplexRectError::InvalidSize {
                width: 0.0,
                height: 100.0
            })
        );
        assert_eq!(
            ComplexRect::from_bounds(0.0, -100.0, 0.0, 10.0),
            Err(ComplexRectError::InvalidSize {
                width: -100.0,
                height: 10.0
            })
        );
        assert_eq!(
            ComplexRect::from_bounds(0.0, 100.0, 0.0, -10.0),
            Err(ComplexRectError::InvalidSize {
                width: 100.0,
                height: -10.0
            })
        );
        assert_eq!(
            ComplexRect::from_bounds(2.0, 2.0, 2.0, 2.0),
            Err(ComplexRectError::InvalidSize {
                width: 0.0,
                height: 0.0
            })
        );
    }

    #[test]
    fn test_complex_rect_rejects_non_finite_bounds() {
        assert!(matches!(
            ComplexRect::from_bounds(f64::NAN, 1.0, -1.0, 1.0),
            Err(ComplexRectError::NonFinite { .. })
        ));
        assert!(matches!(
            ComplexRect::from_bounds(-1.0, 1.0, -1.0, f64::INFINITY),
            Err(ComplexRectError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_complex_rect_dimensions() {
        let rect = rect(-2.5, 1.0, -1.0, 1.0);

        assert_eq!(rect.width(), 3.5);
        assert_eq!(rect.height(), 2.0);
        assert_eq!(rect.center(), Complex::new(-0.75, 0.0));
    }

    #[test]
    fn test_translated_keeps_size() {
        let moved = rect(-2.0, 2.0, -1.0, 1.0)
            .translated(Complex::new(0.5, -0.25))
            .unwrap();

        assert_eq!(moved, rect(-1.5, 2.5, -1.25, 0.75));
    }

    #[test]
    fn test_scaled_about_center_keeps_center() {
        let original = rect(-3.0, 1.0, -1.0, 3.0);
        let scaled = original.scaled_about_center(0.5).unwrap();

        assert!((scaled.width() - 2.0).abs() < EPSILON);
        assert!((scaled.height() - 2.0).abs() < EPSILON);
        assert_eq!(scaled.center(), original.center());
    }

    #[test]
    fn test_scaled_about_center_rejects_collapse() {
        let result = rect(-1.0, 1.0, -1.0, 1.0).scaled_about_center(0.0);

        assert!(matches!(result, Err(ComplexRectError::InvalidSize { .. })));
    }
}
