use serde::Serialize;
use std::fmt;

/// A derived rule `antecedent -> consequent`. Both sides are disjoint and
/// together make up the itemset the rule came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssociationRule {
    pub antecedent: Vec<String>,
    pub consequent: Vec<String>,
    pub support_percent: f64,
    pub confidence_percent: f64,
}

impl AssociationRule {
    pub fn new(
        antecedent: Vec<String>,
        consequent: Vec<String>,
        support_percent: f64,
        confidence_percent: f64,
    ) -> Self {
        Self {
            antecedent,
            consequent,
            support_percent,
            confidence_percent,
        }
    }

    /// The union of both sides.
    pub fn items(&self) -> impl Iterator<Item = &String> {
        self.antecedent.iter().chain(self.consequent.iter())
    }
}

impl fmt::Display for AssociationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}}} -> {{{}}} Support: {:.2}%, Confidence: {:.2}%",
            self.antecedent.join(", "),
            self.consequent.join(", "),
            self.support_percent,
            self.confidence_percent
        )
    }
}
