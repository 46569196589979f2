use crate::core::data::complex::Complex;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FractalMode {
    #[default]
    Mandelbrot,
    Julia {
        constant: Complex,
    },
}

impl FractalMode {
    /// The `c` added on every step of `z = z² + c` when iterating from `z0`.
    #[must_use]
    pub fn increment_for(self, z0: Complex) -> Complex {
        match self {
            Self::Mandelbrot => z0,
            Self::Julia { constant } => constant,
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia { .. } => "Julia",
        }
    }
}

impl std::fmt::Display for FractalMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mandelbrot => f.write_str(self.display_name()),
            Self::Julia { constant } => write!(
                f,
                "{} (c = {} {:+}i)",
                self.display_name(),
                constant.real,
                constant.imag
            ),
        }
    }
}
