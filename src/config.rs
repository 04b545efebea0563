use serde::{Deserialize, Serialize};

/// Sampling steps of the antecedent and consequent universes.
///
/// Only `consequent_step` changes the crisp result: finer steps give a more
/// accurate centroid for more work, so it must match across runs that are
/// compared. Crisp inputs are evaluated on the antecedent terms directly, so
/// `antecedent_step` only sets how the antecedent universe is sampled.
///
/// ```json
/// { "antecedent_step": 1.0, "consequent_step": 0.1 }
/// ```
///
/// Either field may be left out to keep its default.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Granularity {
    pub antecedent_step: f64,
    pub consequent_step: f64,
}

impl Granularity {
    pub const DEFAULT_ANTECEDENT_STEP: f64 = 1.0;
    pub const DEFAULT_CONSEQUENT_STEP: f64 = 0.1;

    pub fn new(antecedent_step: f64, consequent_step: f64) -> Self {
        Self {
            antecedent_step,
            consequent_step,
        }
    }
}

impl Default for Granularity {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ANTECEDENT_STEP, Self::DEFAULT_CONSEQUENT_STEP)
    }
}

#[test]
fn test_partial_config() {
    let granularity: Granularity = serde_json::from_str(r#"{"consequent_step": 0.05}"#).unwrap();

    assert_eq!(granularity, Granularity::new(1.0, 0.05));
    assert_eq!(serde_json::from_str::<Granularity>("{}").unwrap(), Granularity::default());
}
