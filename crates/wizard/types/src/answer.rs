//! Answer sets: the flat mapping of question id to collected value
//!
//! An answer set is created empty when a wizard session starts and grows as
//! the user answers visible questions. Entries are only removed by an
//! explicit edit ([`AnswerSet::clear`]); answers of questions that later
//! become hidden are retained.

use crate::QuestionId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A collected answer: one value, or an ordered list for multi-choice
///
/// Anything else found in an answers file (`null`, numbers, booleans, lists
/// with non-text elements) is kept as [`AnswerValue::Unreadable`] so that one
/// bad entry never rejects the whole set. Every accessor reads it as absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// Single-choice or free-text answer
    Single(String),
    /// Multi-choice answer, in selection order
    Multiple(Vec<String>),
    /// Stored value that is neither text nor a list of text
    Unreadable(serde_json::Value),
}

impl AnswerValue {
    /// The scalar value, if this is a single answer
    pub fn as_single(&self) -> Option<&str> {
        match self {
            AnswerValue::Single(v) => Some(v),
            AnswerValue::Multiple(_) | AnswerValue::Unreadable(_) => None,
        }
    }

    /// The selected values, if this is a multi answer
    pub fn as_multiple(&self) -> Option<&[String]> {
        match self {
            AnswerValue::Multiple(values) => Some(values),
            AnswerValue::Single(_) | AnswerValue::Unreadable(_) => None,
        }
    }

    /// Whether `value` is the scalar answer or one of the selected values
    pub fn contains(&self, value: &str) -> bool {
        match self {
            AnswerValue::Single(v) => v == value,
            AnswerValue::Multiple(values) => values.iter().any(|v| v == value),
            AnswerValue::Unreadable(_) => false,
        }
    }

    /// Blank text, an empty selection or an unreadable value counts as no answer
    pub fn is_empty(&self) -> bool {
        match self {
            AnswerValue::Single(v) => v.trim().is_empty(),
            AnswerValue::Multiple(values) => values.is_empty(),
            AnswerValue::Unreadable(_) => true,
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Single(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Single(value)
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(values: Vec<String>) -> Self {
        AnswerValue::Multiple(values)
    }
}

impl From<Vec<&str>> for AnswerValue {
    fn from(values: Vec<&str>) -> Self {
        AnswerValue::Multiple(values.into_iter().map(str::to_string).collect())
    }
}

/// Mapping from question id to answer, shared by every step of a wizard
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<QuestionId, AnswerValue>,
}

impl AnswerSet {
    /// Create an empty answer set
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, question: impl Into<QuestionId>, value: impl Into<AnswerValue>) -> Self {
        self.set(question, value);
        self
    }

    /// Set (or replace) an answer, returning the previous value
    pub fn set(
        &mut self,
        question: impl Into<QuestionId>,
        value: impl Into<AnswerValue>,
    ) -> Option<AnswerValue> {
        self.answers.insert(question.into(), value.into())
    }

    /// Remove an answer (explicit user edit)
    pub fn clear(&mut self, question: impl AsRef<str>) -> Option<AnswerValue> {
        self.answers.remove(question.as_ref())
    }

    /// Raw answer for a question
    pub fn get(&self, question: impl AsRef<str>) -> Option<&AnswerValue> {
        self.answers.get(question.as_ref())
    }

    /// Non-blank scalar answer; `None` when absent, blank, or stored as a list
    pub fn single(&self, question: impl AsRef<str>) -> Option<&str> {
        self.get(question)
            .and_then(AnswerValue::as_single)
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    /// Multi answer; `None` when absent or stored as a scalar
    pub fn multiple(&self, question: impl AsRef<str>) -> Option<&[String]> {
        self.get(question).and_then(AnswerValue::as_multiple)
    }

    /// Whether the answer to `question` is or includes `value`
    pub fn contains(&self, question: impl AsRef<str>, value: &str) -> bool {
        self.get(question).is_some_and(|a| a.contains(value))
    }

    /// Present and not blank
    pub fn is_answered(&self, question: impl AsRef<str>) -> bool {
        self.get(question).is_some_and(|a| !a.is_empty())
    }

    /// Iterate answers in question-id order
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &AnswerValue)> {
        self.answers.iter()
    }

    /// Number of stored answers (including blank ones)
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_and_multiple_accessors_respect_shape() {
        let answers = AnswerSet::new()
            .with("vib-type", vec!["hav", "wbv"])
            .with("vib-duration", "long");

        assert_eq!(answers.single("vib-duration"), Some("long"));
        assert_eq!(answers.multiple("vib-type").unwrap().len(), 2);

        // Wrong shape reads as absent
        assert_eq!(answers.single("vib-type"), None);
        assert_eq!(answers.multiple("vib-duration"), None);
    }

    #[test]
    fn blank_answers_are_not_answered() {
        let answers = AnswerSet::new()
            .with("vib-sources", "   ")
            .with("vib-type", Vec::<String>::new());

        assert!(!answers.is_answered("vib-sources"));
        assert!(!answers.is_answered("vib-type"));
        assert_eq!(answers.single("vib-sources"), None);
        assert_eq!(answers.len(), 2);
    }

    #[test]
    fn contains_works_for_both_shapes() {
        let answers = AnswerSet::new()
            .with("vib-type", vec!["hav"])
            .with("vib-complaints", "yes");

        assert!(answers.contains("vib-type", "hav"));
        assert!(!answers.contains("vib-type", "wbv"));
        assert!(answers.contains("vib-complaints", "yes"));
        assert!(!answers.contains("missing", "yes"));
    }

    #[test]
    fn set_replaces_and_clear_removes() {
        let mut answers = AnswerSet::new();
        assert!(answers.set("vib-duration", "short").is_none());
        let previous = answers.set("vib-duration", "long");
        assert_eq!(previous, Some(AnswerValue::from("short")));

        let qid = QuestionId::new("vib-duration");
        assert!(answers.clear(&qid).is_some());
        assert!(answers.is_empty());
    }

    #[test]
    fn json_shape_is_a_flat_map() {
        let json = r#"{"vib-type": ["hav"], "vib-duration": "long"}"#;
        let answers: AnswerSet = serde_json::from_str(json).unwrap();
        assert_eq!(answers.multiple("vib-type").unwrap(), ["hav".to_string()]);
        assert_eq!(answers.single("vib-duration"), Some("long"));

        let out = serde_json::to_string(&answers).unwrap();
        assert_eq!(out, r#"{"vib-duration":"long","vib-type":["hav"]}"#);
    }

    #[test]
    fn non_text_values_read_as_absent() {
        let json = r#"{
            "vib-type": ["hav"],
            "vib-duration": 4,
            "vib-complaints": null,
            "vib-measured": true,
            "vib-measures-existing": ["none", 1]
        }"#;
        let answers: AnswerSet = serde_json::from_str(json).unwrap();
        assert_eq!(answers.len(), 5);
        assert_eq!(answers.multiple("vib-type").unwrap(), ["hav".to_string()]);

        for question in [
            "vib-duration",
            "vib-complaints",
            "vib-measured",
            "vib-measures-existing",
        ] {
            assert!(matches!(
                answers.get(question),
                Some(AnswerValue::Unreadable(_))
            ));
            assert!(!answers.is_answered(question));
            assert_eq!(answers.single(question), None);
            assert_eq!(answers.multiple(question), None);
        }
        assert!(!answers.contains("vib-measures-existing", "none"));

        // Written back unchanged
        let out: serde_json::Value = serde_json::to_value(&answers).unwrap();
        assert!(out["vib-complaints"].is_null());
        assert_eq!(out["vib-duration"], 4);
    }
}
