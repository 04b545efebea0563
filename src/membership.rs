use thiserror::Error;

use crate::math::ramp;

/// Why a set of break points cannot form a trapezoid
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BreakPointError {
    #[error("expected at least 4 points, found {0}")]
    TooFewPoints(usize),

    #[error("break point {0} is not a finite number")]
    NotFinite(f64),

    #[error("break points must be ascending, found {0:?}")]
    NotAscending([f64; 4]),
}

/// A trapezoidal membership function with break points `a <= b <= c <= d`.
///
/// The curve rises from 0 at `a` to 1 at `b`, holds 1 until `c` and falls back
/// to 0 at `d`. A triangle is the case `b == c`, and `a == b` or `c == d`
/// turn the matching ramp into a step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trapezoid {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Trapezoid {
    pub fn new(points: [f64; 4]) -> Result<Self, BreakPointError> {
        if let Some(bad) = points.iter().copied().find(|p| !p.is_finite()) {
            return Err(BreakPointError::NotFinite(bad));
        }

        if points.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(BreakPointError::NotAscending(points));
        }

        let [a, b, c, d] = points;

        Ok(Self { a, b, c, d })
    }

    /// Builds the trapezoid from the x-coordinates of the first four
    /// `(x, degree)` points. Later points are not part of the shape.
    pub fn from_points(points: &[(f64, f64)]) -> Result<Self, BreakPointError> {
        match points {
            [(a, _), (b, _), (c, _), (d, _), ..] => Self::new([*a, *b, *c, *d]),
            _ => Err(BreakPointError::TooFewPoints(points.len())),
        }
    }

    pub fn break_points(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Degree of membership of `x`, always within [0, 1]
    pub fn degree(&self, x: f64) -> f64 {
        let Self { a, b, c, d } = *self;

        if x.is_nan() {
            return 0.;
        }

        let degree = if b <= x && x <= c {
            1.
        } else if x <= a || x >= d {
            0.
        } else if x < b {
            ramp(x, a, b)
        } else {
            ramp(x, d, c)
        };

        degree.clamp(0., 1.)
    }

    /// Samples the curve at every point of `universe`
    pub fn sample<'a, U>(&'a self, universe: U) -> impl Iterator<Item = f64> + 'a
    where
        U: IntoIterator<Item = f64>,
        U::IntoIter: 'a,
    {
        universe.into_iter().map(move |x| self.degree(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree() {
        let comfortable = Trapezoid::new([18., 22., 24., 26.]).unwrap();

        assert_eq!(comfortable.degree(15.), 0.);
        assert_eq!(comfortable.degree(18.), 0.);
        assert_eq!(comfortable.degree(21.), 0.75);
        assert_eq!(comfortable.degree(22.), 1.);
        assert_eq!(comfortable.degree(23.), 1.);
        assert_eq!(comfortable.degree(24.), 1.);
        assert_eq!(comfortable.degree(25.), 0.5);
        assert_eq!(comfortable.degree(26.), 0.);
        assert_eq!(comfortable.degree(100.), 0.);
        assert_eq!(comfortable.degree(f64::NAN), 0.);
        assert_eq!(comfortable.degree(f64::INFINITY), 0.);
    }

    #[test]
    fn test_degenerate_ramps() {
        let weak = Trapezoid::new([0., 0., 5., 8.]).unwrap();

        assert_eq!(weak.degree(0.), 1.);
        assert_eq!(weak.degree(-0.1), 0.);
        assert_eq!(weak.degree(6.5), 0.5);

        let step_down = Trapezoid::new([1., 2., 3., 3.]).unwrap();

        assert_eq!(step_down.degree(3.), 1.);
        assert_eq!(step_down.degree(3.01), 0.);

        let triangle = Trapezoid::new([0., 5., 5., 10.]).unwrap();

        assert_eq!(triangle.degree(5.), 1.);
        assert_eq!(triangle.degree(2.5), 0.5);

        let spike = Trapezoid::new([4., 4., 4., 4.]).unwrap();

        assert_eq!(spike.degree(4.), 1.);
        assert_eq!(spike.degree(4.5), 0.);
    }

    #[test]
    fn test_invalid_break_points() {
        assert_eq!(
            Trapezoid::new([0., 5., 4., 10.]),
            Err(BreakPointError::NotAscending([0., 5., 4., 10.]))
        );
        assert_eq!(
            Trapezoid::new([0., f64::NAN, 4., 10.]).unwrap_err().to_string(),
            "break point NaN is not a finite number"
        );
        assert_eq!(
            Trapezoid::new([f64::NEG_INFINITY, 0., 4., 10.]),
            Err(BreakPointError::NotFinite(f64::NEG_INFINITY))
        );
    }

    #[test]
    fn test_from_points() {
        let hot = [(0., 0.), (24., 0.), (26., 1.), (40., 1.), (50., 0.)];
        let hot = Trapezoid::from_points(&hot).unwrap();

        assert_eq!(hot.break_points(), [0., 24., 26., 40.]);
        assert_eq!(hot.degree(15.), 0.625);

        assert_eq!(
            Trapezoid::from_points(&[(0., 0.), (1., 1.), (2., 0.)]),
            Err(BreakPointError::TooFewPoints(3))
        );
    }

    #[test]
    fn test_sample() {
        let moderate = Trapezoid::new([5., 8., 13., 16.]).unwrap();
        let sampled: Vec<f64> = moderate.sample([4., 6.5, 10., 14.5, 16.]).collect();

        assert_eq!(sampled, vec![0., 0.5, 1., 0.5, 0.]);
    }
}
