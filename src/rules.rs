use serde::{Deserialize, Serialize};

/// `IF antecedent THEN consequent`, both given as term names.
///
/// Serialized as a two element array, `["cold", "intense"]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Rule {
    pub antecedent: String,
    pub consequent: String,
}

impl Rule {
    pub fn new(antecedent: impl Into<String>, consequent: impl Into<String>) -> Self {
        Self {
            antecedent: antecedent.into(),
            consequent: consequent.into(),
        }
    }
}

impl From<(String, String)> for Rule {
    fn from((antecedent, consequent): (String, String)) -> Self {
        Self { antecedent, consequent }
    }
}

impl From<Rule> for (String, String) {
    fn from(rule: Rule) -> Self {
        (rule.antecedent, rule.consequent)
    }
}

/// Ordered rules. Terms may name more than any one system configures.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleBase(pub(crate) Vec<Rule>);

impl RuleBase {
    pub fn new() -> Self {
        RuleBase(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        RuleBase(Vec::with_capacity(capacity))
    }

    pub fn add(&mut self, antecedent: impl Into<String>, consequent: impl Into<String>) {
        self.0.push(Rule::new(antecedent, consequent));
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<A: Into<String>, C: Into<String>> FromIterator<(A, C)> for RuleBase {
    fn from_iter<I: IntoIterator<Item = (A, C)>>(iter: I) -> Self {
        RuleBase(iter.into_iter().map(|(a, c)| Rule::new(a, c)).collect())
    }
}

impl<'r> IntoIterator for &'r RuleBase {
    type Item = &'r Rule;
    type IntoIter = std::slice::Iter<'r, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
