use num::Float;

/// Fuzzy AND (minimum) of a rule's activation degree with each sample of its
/// consequent membership function.
pub(crate) fn clip<F: Float>(degree: F, membership: impl IntoIterator<Item = F>) -> impl Iterator<Item = F> {
    membership.into_iter().map(move |m| F::min(degree, m))
}

/// Pointwise fuzzy OR (maximum) of two sampled sets.
pub(crate) fn union<F: Float>(
    u: impl IntoIterator<Item = F>,
    v: impl IntoIterator<Item = F>,
) -> impl Iterator<Item = F> {
    u.into_iter().zip(v).map(|(u, v)| F::max(u, v))
}

#[test]
fn test_clip() {
    let clipped: Vec<f64> = clip(0.75, [0., 0.5, 1., 1., 0.25]).collect();

    assert_eq!(clipped, vec![0., 0.5, 0.75, 0.75, 0.25]);
}

#[test]
fn test_union() {
    let u = [0., 0.2, 0.9, 0.4];
    let v = [0.1, 0.2, 0.3, 0.8];

    assert_eq!(union(u, v).collect::<Vec<f64>>(), vec![0.1, 0.2, 0.9, 0.8]);
    // Idempotent
    assert_eq!(union(u, u).collect::<Vec<f64>>(), u.to_vec());
}
