use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{FuzzyError, Result};
use crate::membership::{BreakPointError, Trapezoid};

/// A linguistic term as handed over by a loader: a name and the `(x, degree)`
/// points of its membership curve.
///
/// Deserializes from `{"id": "cold", "points": [[0, 0], [5, 1], [10, 1], [12, 0]]}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TermDefinition {
    #[serde(rename = "id")]
    pub name: String,
    pub points: Vec<(f64, f64)>,
}

impl TermDefinition {
    pub fn new(name: impl Into<String>, points: impl Into<Vec<(f64, f64)>>) -> Self {
        Self {
            name: name.into(),
            points: points.into(),
        }
    }

    pub fn trapezoid(name: impl Into<String>, [a, b, c, d]: [f64; 4]) -> Self {
        Self::new(name, vec![(a, 0.), (b, 1.), (c, 1.), (d, 0.)])
    }

    pub fn x_coords(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|(x, _)| *x)
    }

    /// The trapezoid formed by the first four points.
    ///
    /// Every point, including ignored trailing ones, must be finite since they
    /// all count towards the variable's universe bounds.
    pub fn membership(&self) -> Result<Trapezoid> {
        let invalid = |source: BreakPointError| FuzzyError::InvalidMembershipFunction {
            term: self.name.clone(),
            source,
        };

        if let Some(bad) = self.x_coords().find(|x| !x.is_finite()) {
            return Err(invalid(BreakPointError::NotFinite(bad)));
        }

        let trapezoid = Trapezoid::from_points(&self.points).map_err(invalid)?;

        if self.points.len() > 4 {
            warn!(
                term = %self.name,
                ignored = self.points.len() - 4,
                "membership points past the fourth only widen the universe"
            );
        }

        Ok(trapezoid)
    }
}

/// A named variable and its terms, in the order they were declared.
///
/// Deserializes from `{"name": "temperature", "terms": [...]}` or from a map
/// with the variable name as its only key, `{"temperature": [...]}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "VariableDefinitionRepr")]
pub struct VariableDefinition {
    pub name: String,
    pub terms: Vec<TermDefinition>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum VariableDefinitionRepr {
    Named { name: String, terms: Vec<TermDefinition> },
    Keyed(BTreeMap<String, Vec<TermDefinition>>),
}

impl TryFrom<VariableDefinitionRepr> for VariableDefinition {
    type Error = String;

    fn try_from(repr: VariableDefinitionRepr) -> std::result::Result<Self, Self::Error> {
        match repr {
            VariableDefinitionRepr::Named { name, terms } => Ok(Self { name, terms }),
            VariableDefinitionRepr::Keyed(map) if map.len() == 1 => {
                let (name, terms) = map.into_iter().next().ok_or("empty variable map")?;
                Ok(Self { name, terms })
            },
            VariableDefinitionRepr::Keyed(map) => Err(format!(
                "expected exactly one variable keyed by its name, found {}",
                map.len()
            )),
        }
    }
}

impl VariableDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            terms: Vec::new(),
        }
    }

    pub fn insert(&mut self, term: TermDefinition) {
        self.terms.push(term);
    }

    pub fn with_trapezoid(mut self, name: impl Into<String>, break_points: [f64; 4]) -> Self {
        self.insert(TermDefinition::trapezoid(name, break_points));
        self
    }
}
