use tracing::{debug, trace};

use crate::error::{FuzzyError, Result};
use crate::ops::clip;
use crate::outputs::AggregatedOutput;
use crate::rules::RuleBase;
use crate::variable::LinguisticVariable;

/// A rule that fired, with the degree its antecedent matched the input at.
///
/// `degree` must lie in (0, 1]; [`MamdaniInference::aggregate`] rejects
/// anything else, NaN included.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActivatedRule<'r> {
    pub degree: f64,
    pub consequent: &'r str,
}

/// Single-input Mamdani inference: min activation, max aggregation and
/// centroid defuzzification.
#[derive(Clone, Copy, Debug, Default)]
pub struct MamdaniInference;

impl MamdaniInference {
    pub fn new() -> Self {
        Self
    }

    /// Evaluates `input` against the antecedent of every rule.
    ///
    /// Rules naming a term that either variable does not configure are
    /// skipped, not reported. Only rules with a strictly positive degree are
    /// returned; duplicates are kept.
    pub fn activate<'r>(
        &self,
        rules: &'r RuleBase,
        antecedent: &LinguisticVariable,
        consequent: &LinguisticVariable,
        input: f64,
    ) -> Vec<ActivatedRule<'r>> {
        let mut activated = Vec::with_capacity(rules.len());

        for rule in rules {
            let Some(premise) = antecedent.term(&rule.antecedent) else {
                debug!(
                    antecedent = %rule.antecedent,
                    variable = antecedent.name(),
                    "skipping rule with unknown antecedent term"
                );
                continue;
            };

            if !consequent.contains_term(&rule.consequent) {
                debug!(
                    consequent = %rule.consequent,
                    variable = consequent.name(),
                    "skipping rule with unknown consequent term"
                );
                continue;
            }

            let degree = premise.degree(input);

            if degree > 0. {
                debug!(antecedent = %rule.antecedent, consequent = %rule.consequent, degree, "rule fired");
                activated.push(ActivatedRule {
                    degree,
                    consequent: &rule.consequent,
                });
            }
        }

        activated
    }

    /// Clips each fired consequent by its degree and merges them all into one
    /// set over the consequent's universe.
    pub fn aggregate(
        &self,
        activated: &[ActivatedRule<'_>],
        consequent: &LinguisticVariable,
    ) -> Result<AggregatedOutput> {
        let universe = consequent.universe();
        let mut output = AggregatedOutput::zeros(universe);

        for rule in activated {
            if !(rule.degree > 0. && rule.degree <= 1.) {
                return Err(FuzzyError::InvalidActivation {
                    term: rule.consequent.to_owned(),
                    degree: rule.degree,
                });
            }

            let membership = consequent.term(rule.consequent).ok_or_else(|| FuzzyError::UnknownTerm {
                variable: consequent.name().to_owned(),
                term: rule.consequent.to_owned(),
            })?;

            trace!(consequent = rule.consequent, degree = rule.degree, "clipping consequent");
            output.merge(clip(rule.degree, membership.sample(universe.samples())));
        }

        Ok(output)
    }

    /// Runs activation, aggregation and defuzzification for one crisp input
    pub fn eval(
        &self,
        antecedent: &LinguisticVariable,
        consequent: &LinguisticVariable,
        rules: &RuleBase,
        input: f64,
    ) -> Result<f64> {
        if !input.is_finite() {
            return Err(FuzzyError::NonFiniteInput(input));
        }

        let activated = self.activate(rules, antecedent, consequent, input);

        if activated.is_empty() {
            debug!(input, "no rule fired");
            return Err(FuzzyError::EmptyOutputRegion);
        }

        self.aggregate(&activated, consequent)?.defuzzify()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terms::{TermDefinition, VariableDefinition};

    fn temperature() -> LinguisticVariable {
        let mut definition = VariableDefinition::new("temperature")
            .with_trapezoid("cold", [0., 5., 10., 12.])
            .with_trapezoid("comfortable", [18., 22., 24., 26.]);

        definition.insert(TermDefinition::new(
            "hot",
            vec![(0., 0.), (24., 0.), (26., 1.), (40., 1.), (50., 0.)],
        ));
        LinguisticVariable::new(&definition, 1.).unwrap()
    }

    fn heating() -> LinguisticVariable {
        let definition = VariableDefinition::new("heating")
            .with_trapezoid("weak", [0., 0., 5., 8.])
            .with_trapezoid("moderate", [5., 8., 13., 16.])
            .with_trapezoid("intense", [13., 18., 23., 26.]);

        LinguisticVariable::new(&definition, 0.1).unwrap()
    }

    fn reference_rules() -> RuleBase {
        [("cold", "intense"), ("comfortable", "moderate"), ("hot", "weak")]
            .into_iter()
            .collect()
    }

    #[test_log::test]
    fn test_activate() {
        let rules = reference_rules();
        let activated = MamdaniInference::new().activate(&rules, &temperature(), &heating(), 15.);

        assert_eq!(
            activated,
            vec![ActivatedRule {
                degree: 0.625,
                consequent: "weak"
            }]
        );

        let activated = MamdaniInference::new().activate(&rules, &temperature(), &heating(), 11.);

        assert_eq!(
            activated,
            vec![
                ActivatedRule {
                    degree: 0.5,
                    consequent: "intense"
                },
                ActivatedRule {
                    degree: 11. / 24.,
                    consequent: "weak"
                },
            ]
        );
    }

    #[test_log::test]
    fn test_activate_skips_unknown_terms() {
        let rules: RuleBase = [
            ("freezing", "intense"),
            ("cold", "maximum"),
            ("cold", "intense"),
            ("cold", "intense"),
        ]
        .into_iter()
        .collect();
        let activated = MamdaniInference::new().activate(&rules, &temperature(), &heating(), 5.);

        assert_eq!(activated.len(), 2);
        assert!(activated.iter().all(|rule| rule.consequent == "intense" && rule.degree == 1.));
    }

    #[test]
    fn test_aggregate() {
        let heating = heating();
        let activated = [
            ActivatedRule {
                degree: 1.,
                consequent: "moderate",
            },
            ActivatedRule {
                degree: 0.5,
                consequent: "weak",
            },
        ];
        let output = MamdaniInference::new().aggregate(&activated, &heating).unwrap();

        assert_eq!(output.universe().len(), 260);

        for (x, mu) in output.samples() {
            let weak = heating.membership_of("weak", x).unwrap().min(0.5);
            let moderate = heating.membership_of("moderate", x).unwrap();

            assert_eq!(mu, weak.max(moderate));
        }
    }

    #[test]
    fn test_aggregate_nothing_fired() {
        let output = MamdaniInference::new().aggregate(&[], &heating()).unwrap();

        assert!(output.is_empty_region());
        assert_eq!(output.defuzzify(), Err(FuzzyError::EmptyOutputRegion));
    }

    #[test]
    fn test_aggregate_rejects_bad_degrees() {
        let heating = heating();

        for degree in [f64::NAN, 0., -0.5, 1.5] {
            let activated = [ActivatedRule {
                degree,
                consequent: "moderate",
            }];

            assert!(matches!(
                MamdaniInference::new().aggregate(&activated, &heating),
                Err(FuzzyError::InvalidActivation { term, .. }) if term == "moderate"
            ));
        }
    }

    #[test]
    fn test_aggregate_unknown_term() {
        let activated = [ActivatedRule {
            degree: 1.,
            consequent: "maximum",
        }];

        assert_eq!(
            MamdaniInference::new().aggregate(&activated, &heating()),
            Err(FuzzyError::UnknownTerm {
                variable: "heating".into(),
                term: "maximum".into(),
            })
        );
    }

    #[test]
    fn test_eval() {
        let model = MamdaniInference::new();
        let rules = reference_rules();
        let (temperature, heating) = (temperature(), heating());

        let output = model.eval(&temperature, &heating, &rules, 15.).unwrap();
        assert!((output - 3.5266029246344197).abs() < 1e-9);

        let output = model.eval(&temperature, &heating, &rules, 23.).unwrap();
        assert!((output - 7.366621687929344).abs() < 1e-9);

        let output = model.eval(&temperature, &heating, &rules, 5.).unwrap();
        assert!((output - 17.479825663577824).abs() < 1e-9);
    }

    #[test]
    fn test_eval_failures() {
        let model = MamdaniInference::new();
        let (temperature, heating) = (temperature(), heating());

        for input in [-3., 0., 45., 50., 1000.] {
            assert_eq!(
                model.eval(&temperature, &heating, &reference_rules(), input),
                Err(FuzzyError::EmptyOutputRegion)
            );
        }

        assert_eq!(
            model.eval(&temperature, &heating, &RuleBase::new(), 22.),
            Err(FuzzyError::EmptyOutputRegion)
        );
        assert!(matches!(
            model.eval(&temperature, &heating, &reference_rules(), f64::NAN),
            Err(FuzzyError::NonFiniteInput(_))
        ));
    }
}
