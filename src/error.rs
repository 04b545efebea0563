use thiserror::Error;

use crate::membership::BreakPointError;

pub type Result<T, E = FuzzyError> = std::result::Result<T, E>;

/// The error type shared by every fallible operation in this crate
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FuzzyError {
    /// A term was looked up on a variable that does not configure it
    #[error("variable `{variable}` has no term named `{term}`")]
    UnknownTerm { variable: String, term: String },

    /// No rule fired, so the aggregated output is zero everywhere
    #[error("output region is empty: no rule produced a positive activation")]
    EmptyOutputRegion,

    /// A membership function was given malformed break points
    #[error("invalid membership function for term `{term}`: {source}")]
    InvalidMembershipFunction {
        term: String,
        #[source]
        source: BreakPointError,
    },

    /// The same term name appears twice in one variable
    #[error("variable `{variable}` defines term `{term}` more than once")]
    DuplicateTerm { variable: String, term: String },

    /// A variable was defined without any term
    #[error("variable `{variable}` has no terms")]
    EmptyVariable { variable: String },

    /// Universe steps must be finite and strictly positive
    #[error("variable `{variable}` has an invalid universe step {step}")]
    InvalidStep { variable: String, step: f64 },

    /// The universe would hold more samples than can reasonably be allocated
    #[error("variable `{variable}` would sample its universe {samples} times, more than the limit of {limit}")]
    UniverseTooLarge { variable: String, samples: f64, limit: usize },

    /// An activated rule carries a degree outside (0, 1]
    #[error("activation degree {degree} of consequent `{term}` is outside (0, 1]")]
    InvalidActivation { term: String, degree: f64 },

    /// The crisp input is NaN or infinite
    #[error("crisp input {0} is not a finite number")]
    NonFiniteInput(f64),
}
