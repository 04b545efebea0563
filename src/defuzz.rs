use crate::error::{FuzzyError, Result};
use crate::math;
use crate::outputs::AggregatedOutput;

/// Centre of gravity of the aggregated set, `Σ(x·μ) / Σμ` over its samples.
///
/// The precision is bounded by the universe step the set was sampled with.
/// Fails with [`FuzzyError::EmptyOutputRegion`] when every degree is zero,
/// which includes a universe with no samples at all.
pub fn centroid(output: &AggregatedOutput) -> Result<f64> {
    math::centroid(output.samples()).ok_or(FuzzyError::EmptyOutputRegion)
}
