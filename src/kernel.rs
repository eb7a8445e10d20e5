//! Escape-time iteration for a single point of the complex plane.
//!
//! Both fractal families share [`escape_time`]; they differ only in the seed and
//! the step applied to the orbit.

use num_complex::Complex64;

pub type ComplexPoint = Complex64;

/// Orbits whose magnitude reaches this value are treated as escaped.
pub const ESCAPE_BOUND: f64 = 2.0;

pub const DEFAULT_POWER: f64 = 2.0;

pub const DEFAULT_JULIA_CONSTANT: ComplexPoint = ComplexPoint::new(-0.05, -0.66);

/// Count the steps applied before `|z| >= bound` is first observed.
///
/// Returns 0 when the bound is not reached within `max_iterations` checks, which
/// makes a bounded orbit indistinguishable from one that would escape on the
/// final step. A seed already outside the bound also yields 0.
pub fn escape_time(
    seed: ComplexPoint,
    step: impl Fn(ComplexPoint) -> ComplexPoint,
    max_iterations: u32,
    bound: f64,
) -> u32 {
    let mut z = seed;
    for n in 0..max_iterations {
        // An overflowed orbit has an infinite norm, which still compares >= bound.
        if z.norm() >= bound {
            return n;
        }
        z = step(z);
    }
    0
}

/// Which recurrence to iterate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FractalKind {
    /// `z -> z^power + c`, seeded at 0, with `c` the plane point.
    Mandelbrot { power: f64 },
    /// `z -> z^2 + constant`, seeded at the plane point.
    Julia { constant: ComplexPoint },
}

impl FractalKind {
    pub fn mandelbrot() -> Self {
        FractalKind::Mandelbrot {
            power: DEFAULT_POWER,
        }
    }

    pub fn julia() -> Self {
        FractalKind::Julia {
            constant: DEFAULT_JULIA_CONSTANT,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FractalKind::Mandelbrot { .. } => "mandelbrot",
            FractalKind::Julia { .. } => "julia",
        }
    }
}

/// Integral powers use repeated multiplication; others go through the polar form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Exponent {
    Integer(i32),
    Real(f64),
}

impl Exponent {
    pub fn new(power: f64) -> Self {
        if power.fract() == 0.0 && power >= i32::MIN as f64 && power <= i32::MAX as f64 {
            Exponent::Integer(power as i32)
        } else {
            Exponent::Real(power)
        }
    }

    fn apply(self, z: ComplexPoint) -> ComplexPoint {
        match self {
            Exponent::Integer(2) => z * z,
            Exponent::Integer(n) => z.powi(n),
            Exponent::Real(p) => z.powf(p),
        }
    }
}

/// A [`FractalKind`] prepared for repeated evaluation across a grid.
#[derive(Clone, Copy, Debug)]
pub enum Recurrence {
    Multibrot { exponent: Exponent },
    Julia { constant: ComplexPoint },
}

impl Recurrence {
    pub fn new(kind: FractalKind) -> Self {
        match kind {
            FractalKind::Mandelbrot { power } => Recurrence::Multibrot {
                exponent: Exponent::new(power),
            },
            FractalKind::Julia { constant } => Recurrence::Julia { constant },
        }
    }

    pub fn iterate(&self, point: ComplexPoint, max_iterations: u32) -> u32 {
        match *self {
            Recurrence::Multibrot { exponent } => escape_time(
                ComplexPoint::new(0.0, 0.0),
                |z| exponent.apply(z) + point,
                max_iterations,
                ESCAPE_BOUND,
            ),
            Recurrence::Julia { constant } => {
                escape_time(point, |z| z * z + constant, max_iterations, ESCAPE_BOUND)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mandelbrot(point: ComplexPoint, max_iterations: u32) -> u32 {
        Recurrence::new(FractalKind::mandelbrot()).iterate(point, max_iterations)
    }

    fn julia(point: ComplexPoint, max_iterations: u32) -> u32 {
        Recurrence::new(FractalKind::julia()).iterate(point, max_iterations)
    }

    #[test]
    fn origin_never_escapes_mandelbrot() {
        for max_iterations in [1, 2, 10, 1000] {
            assert_eq!(mandelbrot(ComplexPoint::new(0.0, 0.0), max_iterations), 0);
        }
    }

    #[test]
    fn far_point_escapes_after_first_step() {
        let point = ComplexPoint::new(2.0, 2.0);
        assert_eq!(mandelbrot(point, 2), 1);
        assert_eq!(mandelbrot(point, 100), 1);
    }

    #[test]
    fn escape_on_last_allowed_step_reports_zero() {
        // Needs two steps to reach the bound: 0 -> 1 -> 2.
        let point = ComplexPoint::new(1.0, 0.0);
        assert_eq!(mandelbrot(point, 3), 2);
        assert_eq!(mandelbrot(point, 2), 0);
        assert_eq!(mandelbrot(ComplexPoint::new(2.0, 2.0), 1), 0);
    }

    #[test]
    fn point_on_the_bound_escapes() {
        assert_eq!(mandelbrot(ComplexPoint::new(-2.0, 0.0), 10), 1);
    }

    #[test]
    fn results_stay_below_budget() {
        for i in 0..40 {
            let point = ComplexPoint::new(-2.0 + i as f64 * 0.1, 0.3);
            assert!(mandelbrot(point, 25) < 25);
        }
    }

    #[test]
    fn cubic_power_uses_its_own_recurrence() {
        let kind = FractalKind::Mandelbrot { power: 3.0 };
        assert_eq!(Recurrence::new(kind).iterate(ComplexPoint::new(0.5, 0.0), 50), 6);
        assert_eq!(mandelbrot(ComplexPoint::new(0.5, 0.0), 50), 5);
    }

    #[test]
    fn real_power_is_supported() {
        let kind = FractalKind::Mandelbrot { power: 2.5 };
        let recurrence = Recurrence::new(kind);
        assert_eq!(recurrence.iterate(ComplexPoint::new(0.0, 0.0), 50), 0);
        assert_eq!(recurrence.iterate(ComplexPoint::new(3.0, 0.0), 50), 1);
    }

    #[test]
    fn integral_powers_take_the_exact_path() {
        assert_eq!(Exponent::new(2.0), Exponent::Integer(2));
        assert_eq!(Exponent::new(5.0), Exponent::Integer(5));
        assert_eq!(Exponent::new(2.5), Exponent::Real(2.5));
        assert_eq!(Exponent::new(1e12), Exponent::Real(1e12));
    }

    #[test]
    fn julia_critical_orbit_escapes_at_twenty_three() {
        let origin = ComplexPoint::new(0.0, 0.0);
        assert_eq!(julia(origin, 100), 23);
        assert_eq!(julia(origin, 24), 23);
        assert_eq!(julia(origin, 23), 0);
    }

    #[test]
    fn julia_bounded_orbit_reports_zero() {
        let recurrence = Recurrence::new(FractalKind::Julia {
            constant: ComplexPoint::new(0.0, 0.0),
        });
        assert_eq!(recurrence.iterate(ComplexPoint::new(0.5, 0.5), 1000), 0);
    }

    #[test]
    fn julia_seed_outside_bound_reports_zero() {
        assert_eq!(julia(ComplexPoint::new(3.0, 0.0), 100), 0);
    }

    #[test]
    fn overflow_to_infinity_counts_as_escape() {
        let step = |_: ComplexPoint| ComplexPoint::new(f64::INFINITY, 0.0);
        assert_eq!(escape_time(ComplexPoint::new(1.0, 0.0), step, 10, ESCAPE_BOUND), 1);
    }

    #[test]
    fn default_kinds() {
        assert_eq!(FractalKind::mandelbrot(), FractalKind::Mandelbrot { power: 2.0 });
        assert_eq!(
            FractalKind::julia(),
            FractalKind::Julia {
                constant: ComplexPoint::new(-0.05, -0.66)
            }
        );
    }
}
