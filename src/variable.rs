use indexmap::IndexMap;

use crate::error::{FuzzyError, Result};
use crate::membership::Trapezoid;
use crate::terms::VariableDefinition;
use crate::universe::Universe;

/// A named universe partitioned into trapezoidal terms.
///
/// The universe spans `[min, max)` of every point found in the term
/// definitions, sampled every `step`. Immutable once built.
#[derive(Clone, Debug)]
pub struct LinguisticVariable {
    name: String,
    universe: Universe,
    terms: IndexMap<String, Trapezoid>,
}

impl LinguisticVariable {
    pub fn new(definition: &VariableDefinition, step: f64) -> Result<Self> {
        let name = &definition.name;

        if !step.is_finite() || step <= 0. {
            return Err(FuzzyError::InvalidStep {
                variable: name.clone(),
                step,
            });
        }

        if definition.terms.is_empty() {
            return Err(FuzzyError::EmptyVariable { variable: name.clone() });
        }

        let mut terms = IndexMap::with_capacity(definition.terms.len());
        let mut min_u = f64::INFINITY;
        let mut max_u = f64::NEG_INFINITY;

        for term in &definition.terms {
            let membership = term.membership()?;

            for x in term.x_coords() {
                min_u = min_u.min(x);
                max_u = max_u.max(x);
            }

            if terms.insert(term.name.clone(), membership).is_some() {
                return Err(FuzzyError::DuplicateTerm {
                    variable: name.clone(),
                    term: term.name.clone(),
                });
            }
        }

        let samples = Universe::sample_count(min_u, max_u, step);

        if !samples.is_finite() || samples > Universe::MAX_SAMPLES as f64 {
            return Err(FuzzyError::UniverseTooLarge {
                variable: name.clone(),
                samples,
                limit: Universe::MAX_SAMPLES,
            });
        }

        Ok(Self {
            name: name.clone(),
            universe: Universe::new(min_u, max_u, step),
            terms,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn term(&self, term: &str) -> Option<&Trapezoid> {
        self.terms.get(term)
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    /// Terms in declaration order
    pub fn terms(&self) -> impl Iterator<Item = (&str, &Trapezoid)> {
        self.terms.iter().map(|(name, membership)| (name.as_str(), membership))
    }

    pub fn membership_of(&self, term: &str, x: f64) -> Result<f64> {
        self.term(term)
            .map(|membership| membership.degree(x))
            .ok_or_else(|| FuzzyError::UnknownTerm {
                variable: self.name.clone(),
                term: term.to_owned(),
            })
    }
}
