//! A single-input Mamdani fuzzy controller.
//!
//! Two [`LinguisticVariable`]s with trapezoidal terms are linked by a
//! [`RuleBase`] of `antecedent term -> consequent term` pairs. A crisp input is
//! matched against every antecedent term, each fired consequent is clipped by
//! its rule's degree (min), the clipped sets are merged (max) and the result is
//! reduced to one number by its centroid.
//!
//! ```
//! use fuzzy_controller::{FuzzyError, FuzzySystem, Granularity, SystemDefinition, VariableDefinition};
//!
//! # fn main() -> Result<(), FuzzyError> {
//! let definition = SystemDefinition {
//!     antecedent: VariableDefinition::new("temperature")
//!         .with_trapezoid("cold", [0., 5., 10., 12.])
//!         .with_trapezoid("comfortable", [18., 22., 24., 26.]),
//!     consequent: VariableDefinition::new("heating")
//!         .with_trapezoid("moderate", [5., 8., 13., 16.])
//!         .with_trapezoid("intense", [13., 18., 23., 26.]),
//!     rules: [("cold", "intense"), ("comfortable", "moderate")].into_iter().collect(),
//! };
//! let system = FuzzySystem::new(definition, &Granularity::default())?;
//!
//! assert!((system.infer(21.)? - 10.5).abs() < 1e-9);
//! assert_eq!(system.infer(15.), Err(FuzzyError::EmptyOutputRegion));
//! # Ok(())
//! # }
//! ```

mod config;
mod defuzz;
mod error;
mod inference;
mod math;
mod membership;
mod ops;
mod outputs;
mod rules;
mod system;
mod terms;
mod universe;
mod variable;

pub use config::Granularity;
pub use defuzz::centroid;
pub use error::{FuzzyError, Result};
pub use inference::{ActivatedRule, MamdaniInference};
pub use membership::{BreakPointError, Trapezoid};
pub use outputs::AggregatedOutput;
pub use rules::{Rule, RuleBase};
pub use system::{FuzzySystem, SystemDefinition};
pub use terms::{TermDefinition, VariableDefinition};
pub use universe::{Arange, Universe};
pub use variable::LinguisticVariable;
