use num::Float;

/// Linear interpolation from 0 at `from` to 1 at `to`.
///
/// Works for falling edges too (`from > to`). A zero-width ramp is a step that
/// is already fully on.
pub(crate) fn ramp<F: Float>(x: F, from: F, to: F) -> F {
    if from == to {
        return F::one();
    }

    (x - from) / (to - from)
}

/// Discrete centre of gravity, `Σ(x·μ) / Σμ`.
///
/// `None` when the memberships sum to zero.
pub(crate) fn centroid<F: Float>(samples: impl IntoIterator<Item = (F, F)>) -> Option<F> {
    let (num, den) = samples
        .into_iter()
        .fold((F::zero(), F::zero()), |(num, den), (x, mu)| (num + x * mu, den + mu));

    if den == F::zero() {
        None
    } else {
        Some(num / den)
    }
}

#[test]
fn test_ramp() {
    assert_eq!(ramp(15., 0., 24.), 0.625);
    assert_eq!(ramp(25., 26., 24.), 0.5);
    assert_eq!(ramp(3.0f32, 3., 3.), 1.);
    assert_eq!(ramp(0., 0., 4.), 0.);
}

#[test]
fn test_centroid() {
    let universe = [0., 1., 2., 3., 4.];
    let membership = [0., 0.5, 1., 0.5, 0.];

    assert_eq!(centroid(universe.into_iter().zip(membership)), Some(2.));
    assert_eq!(centroid(universe.into_iter().zip([0.; 5])), None);
    assert_eq!(centroid(std::iter::empty::<(f64, f64)>()), None);
}
