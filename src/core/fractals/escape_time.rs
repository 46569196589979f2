use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_mode::FractalMode;
use std::ops::ControlFlow;

/// Squared escape radius. Comparing `|z|²` against 4 is the same test as `|z| > 2`.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Counts the iterations of `z = z² + c`, starting from `z0`, until `|z| > 2`.
///
/// Returns the 1-based iterate at which the orbit escaped, or `0` if it stayed bounded for
/// all `iteration_limit` steps. In Mandelbrot mode `c` is `z0` itself; in Julia mode it is the
/// mode's constant.
///
/// Precision is that of `f64`: deep zooms eventually show numerical noise rather than detail.
#[must_use]
pub fn escape_iteration(z0: Complex, mode: FractalMode, iteration_limit: u32) -> u32 {
    let c = mode.increment_for(z0);

    let outcome = (1..=iteration_limit).try_fold(z0, |z, iteration| {
        let next = z * z + c;

        if next.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            ControlFlow::Break(iteration)
        } else {
            ControlFlow::Continue(next)
        }
    });

    match outcome {
        ControlFlow::Break(iteration) => iteration,
        ControlFlow::Continue(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn point_outside_radius_escapes_on_first_iterate() {
        assert_eq!(escape_iteration(Complex::new(3.0, 0.0), FractalMode::Mandelbrot, 100), 1);
    }

    #[test]
    fn origin_never_escapes() {
        for limit in [1, 10, 1_000] {
            assert_eq!(escape_iteration(Complex::default(), FractalMode::Mandelbrot, limit), 0);
        }
    }

    #[test]
    fn bounded_cycle_never_escapes() {
        // -1 -> 0 -> -1 -> ...
        assert_eq!(escape_iteration(Complex::new(-1.0, 0.0), FractalMode::Mandelbrot, 500), 0);
    }

    #[test]
    fn point_on_real_axis_escapes_at_known_iterate() {
        // z0 = c = 0.5: 0.75, 1.0625, 1.62890625, 3.153... escapes on the 4th step
        assert_eq!(escape_iteration(Complex::new(0.5, 0.0), FractalMode::Mandelbrot, 100), 4);
    }

    #[test]
    fn limit_below_escape_reports_interior() {
        assert_eq!(escape_iteration(Complex::new(0.5, 0.0), FractalMode::Mandelbrot, 3), 0);
    }

    #[test]
    fn zero_limit_reports_every_point_as_interior() {
        assert_eq!(escape_iteration(Complex::new(3.0, 0.0), FractalMode::Mandelbrot, 0), 0);
    }

    #[test]
    fn julia_uses_constant_instead_of_point() {
        let mode = FractalMode::Julia {
            constant: Complex::new(0.0, 0.0),
        };

        // With c = 0 the orbit of 0.5 shrinks towards zero, unlike the Mandelbrot orbit.
        assert_eq!(escape_iteration(Complex::new(0.5, 0.0), mode, 100), 0);
        assert_eq!(escape_iteration(Complex::new(1.5, 0.0), mode, 100), 1);
    }

    proptest! {
        #[test]
        fn mandelbrot_points_beyond_radius_escape_immediately(
            radius in 2.01f64..1.0e6,
            angle in 0.0f64..std::f64::consts::TAU,
            limit in 1u32..10_000,
        ) {
            let c = Complex::new(radius * angle.cos(), radius * angle.sin());

            prop_assert_eq!(escape_iteration(c, FractalMode::Mandelbrot, limit), 1);
        }

        #[test]
        fn escape_iterate_is_independent_of_larger_limits(
            real in -2.0f64..2.0,
            imag in -2.0f64..2.0,
            limit in 1u32..300,
            extra in 0u32..300,
        ) {
            let c = Complex::new(real, imag);
            let escaped_at = escape_iteration(c, FractalMode::Mandelbrot, limit);

            if escaped_at >= 1 {
                prop_assert_eq!(
                    escape_iteration(c, FractalMode::Mandelbrot, escaped_at + extra),
                    escaped_at
                );
            }
        }
    }
}
