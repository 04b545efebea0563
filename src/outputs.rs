use crate::defuzz;
use crate::error::Result;
use crate::ops::union;
use crate::universe::Universe;

/// The aggregated fuzzy set of one inference, sampled over the consequent's
/// universe.
#[derive(Clone, Debug, PartialEq)]
pub struct AggregatedOutput {
    universe: Vec<f64>,
    membership: Vec<f64>,
}

impl AggregatedOutput {
    /// An all zero set over `universe`
    pub(crate) fn zeros(universe: &Universe) -> Self {
        let universe: Vec<f64> = universe.samples().collect();
        let membership = vec![0.; universe.len()];

        Self { universe, membership }
    }

    /// Folds `membership`, sampled over the same universe, in with fuzzy OR
    pub(crate) fn merge(&mut self, membership: impl IntoIterator<Item = f64>) {
        self.membership = union(self.membership.iter().copied(), membership).collect();
    }

    pub fn universe(&self) -> &[f64] {
        &self.universe
    }

    pub fn membership(&self) -> &[f64] {
        &self.membership
    }

    /// `(x, degree)` pairs
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.universe.iter().copied().zip(self.membership.iter().copied())
    }

    /// True if no sample has a positive degree
    pub fn is_empty_region(&self) -> bool {
        self.membership.iter().all(|mu| *mu == 0.)
    }

    pub fn defuzzify(&self) -> Result<f64> {
        defuzz::centroid(self)
    }
}

#[test]
fn test_merge() {
    let mut output = AggregatedOutput::zeros(&Universe::new(0., 4., 1.));

    assert_eq!(output.universe(), &[0., 1., 2., 3.]);
    assert!(output.is_empty_region());

    output.merge([0., 0.5, 0.5, 0.]);
    output.merge([0., 0., 0.75, 0.25]);

    assert_eq!(output.membership(), &[0., 0.5, 0.75, 0.25]);
    assert!(!output.is_empty_region());
}
