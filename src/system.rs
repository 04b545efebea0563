use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use crate::config::Granularity;
use crate::error::Result;
use crate::inference::MamdaniInference;
use crate::rules::RuleBase;
use crate::terms::VariableDefinition;
use crate::variable::LinguisticVariable;

/// Everything a loader has to provide to build a [`FuzzySystem`]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemDefinition {
    pub antecedent: VariableDefinition,
    pub consequent: VariableDefinition,
    pub rules: RuleBase,
}

/// An antecedent, a consequent and the rules between them, built once and
/// shared read-only between any number of inferences.
#[derive(Clone, Debug)]
pub struct FuzzySystem {
    antecedent: LinguisticVariable,
    consequent: LinguisticVariable,
    rules: RuleBase,
    model: MamdaniInference,
}

impl FuzzySystem {
    pub fn new(definition: SystemDefinition, granularity: &Granularity) -> Result<Self> {
        let antecedent = LinguisticVariable::new(&definition.antecedent, granularity.antecedent_step)?;
        let consequent = LinguisticVariable::new(&definition.consequent, granularity.consequent_step)?;

        debug!(
            antecedent = antecedent.name(),
            consequent = consequent.name(),
            rules = definition.rules.len(),
            "built fuzzy system"
        );

        Ok(Self {
            antecedent,
            consequent,
            rules: definition.rules,
            model: MamdaniInference::new(),
        })
    }

    pub fn antecedent(&self) -> &LinguisticVariable {
        &self.antecedent
    }

    pub fn consequent(&self) -> &LinguisticVariable {
        &self.consequent
    }

    pub fn rules(&self) -> &RuleBase {
        &self.rules
    }

    /// The crisp output for one crisp input
    pub fn infer(&self, input: f64) -> Result<f64> {
        let _span = debug_span!("infer", input).entered();
        let output = self.model.eval(&self.antecedent, &self.consequent, &self.rules, input)?;

        debug!(output, "defuzzified");

        Ok(output)
    }
}
