//! Declarative visibility conditions for steps and questions
//!
//! Conditions are small expressions over the current answer set rather than
//! opaque callbacks, so the navigation controller can evaluate them and a
//! schema validator can check which questions they depend on.

use crate::{AnswerSet, QuestionId};
use serde::{Deserialize, Serialize};

/// A pure predicate over an answer set
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// The question has a non-blank answer
    Answered { question: QuestionId },

    /// The scalar answer equals `value`, or a multi answer includes it
    Equals { question: QuestionId, value: String },

    /// The answer is or includes at least one of `values`
    AnyOf {
        question: QuestionId,
        values: Vec<String>,
    },

    /// The question is answered and includes none of `values`
    NoneOf {
        question: QuestionId,
        values: Vec<String>,
    },

    /// Composite: all sub-conditions hold
    All { conditions: Vec<Condition> },

    /// Composite: at least one sub-condition holds
    Any { conditions: Vec<Condition> },

    /// Negation
    Not { condition: Box<Condition> },
}

impl Condition {
    /// Create an answered condition
    pub fn answered(question: impl Into<QuestionId>) -> Self {
        Self::Answered {
            question: question.into(),
        }
    }

    /// Create an equality condition
    pub fn equals(question: impl Into<QuestionId>, value: impl Into<String>) -> Self {
        Self::Equals {
            question: question.into(),
            value: value.into(),
        }
    }

    /// Create an any-of condition
    pub fn any_of<I, S>(question: impl Into<QuestionId>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::AnyOf {
            question: question.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a none-of condition
    pub fn none_of<I, S>(question: impl Into<QuestionId>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::NoneOf {
            question: question.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn all(conditions: Vec<Condition>) -> Self {
        Self::All { conditions }
    }

    pub fn any(conditions: Vec<Condition>) -> Self {
        Self::Any { conditions }
    }

    pub fn negate(condition: Condition) -> Self {
        Self::Not {
            condition: Box::new(condition),
        }
    }

    /// Evaluate against the current answers
    pub fn evaluate(&self, answers: &AnswerSet) -> bool {
        match self {
            Condition::Answered { question } => answers.is_answered(question),
            Condition::Equals { question, value } => answers.contains(question, value),
            Condition::AnyOf { question, values } => {
                values.iter().any(|v| answers.contains(question, v))
            }
            Condition::NoneOf { question, values } => {
                answers.is_answered(question)
                    && !values.iter().any(|v| answers.contains(question, v))
            }
            Condition::All { conditions } => conditions.iter().all(|c| c.evaluate(answers)),
            Condition::Any { conditions } => conditions.iter().any(|c| c.evaluate(answers)),
            Condition::Not { condition } => !condition.evaluate(answers),
        }
    }

    /// Every question id this condition reads
    pub fn referenced_questions(&self) -> Vec<&QuestionId> {
        let mut out = Vec::new();
        self.collect_references(&mut out);
        out
    }

    fn collect_references<'a>(&'a self, out: &mut Vec<&'a QuestionId>) {
        match self {
            Condition::Answered { question }
            | Condition::Equals { question, .. }
            | Condition::AnyOf { question, .. }
            | Condition::NoneOf { question, .. } => out.push(question),
            Condition::All { conditions } | Condition::Any { conditions } => {
                for c in conditions {
                    c.collect_references(out);
                }
            }
            Condition::Not { condition } => condition.collect_references(out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exposed() -> Condition {
        Condition::any_of("vib-type", ["hav", "wbv"])
    }

    #[test]
    fn any_of_matches_multi_and_scalar() {
        let multi = AnswerSet::new().with("vib-type", vec!["wbv"]);
        let scalar = AnswerSet::new().with("vib-type", "hav");
        let none = AnswerSet::new().with("vib-type", vec!["none"]);

        assert!(exposed().evaluate(&multi));
        assert!(exposed().evaluate(&scalar));
        assert!(!exposed().evaluate(&none));
        assert!(!exposed().evaluate(&AnswerSet::new()));
    }

    #[test]
    fn none_of_requires_an_answer() {
        let cond = Condition::none_of("vib-measures-existing", ["none"]);
        assert!(!cond.evaluate(&AnswerSet::new()));
        assert!(cond.evaluate(&AnswerSet::new().with("vib-measures-existing", vec!["gloves"])));
        assert!(!cond.evaluate(&AnswerSet::new().with("vib-measures-existing", vec!["none"])));
    }

    #[test]
    fn composites() {
        let answers = AnswerSet::new()
            .with("vib-measured", "yes")
            .with("vib-type", vec!["hav"]);

        let both = Condition::all(vec![exposed(), Condition::equals("vib-measured", "yes")]);
        assert!(both.evaluate(&answers));

        let either = Condition::any(vec![
            Condition::equals("vib-measured", "no"),
            Condition::answered("vib-type"),
        ]);
        assert!(either.evaluate(&answers));

        assert!(!Condition::negate(both).evaluate(&answers));
    }

    #[test]
    fn referenced_questions_walks_composites() {
        let cond = Condition::all(vec![
            exposed(),
            Condition::negate(Condition::answered("vib-measured")),
        ]);
        let refs: Vec<&str> = cond.referenced_questions().iter().map(|q| q.as_str()).collect();
        assert_eq!(refs, vec!["vib-type", "vib-measured"]);
    }

    #[test]
    fn serde_shape() {
        let json = serde_json::to_value(Condition::equals("vib-measured", "yes")).unwrap();
        assert_eq!(json["equals"]["question"], "vib-measured");
        assert_eq!(json["equals"]["value"], "yes");
    }
}
