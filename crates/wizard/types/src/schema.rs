//! Wizard schemas: the declarative blueprint of a questionnaire
//!
//! A WizardSchema is an ordered list of steps; each step holds ordered
//! questions. Schemas carry no behavior beyond their visibility conditions
//! and are immutable once validated. Question ids are unique across the
//! whole schema because all answers live in one flat [`AnswerSet`].

use crate::{AnswerSet, AnswerValue, Condition, Theme, WizardError, WizardResult};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashSet;

// ── Identifiers ──────────────────────────────────────────────────────

/// Identifier of a question, unique within a wizard
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub String);

impl QuestionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for QuestionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for QuestionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for QuestionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Identifier of a step, unique within a wizard
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepId(pub String);

impl StepId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StepId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StepId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

// ── Question ─────────────────────────────────────────────────────────

/// How a question is answered
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnswerType {
    SingleChoice,
    MultiChoice,
    FreeText,
}

impl AnswerType {
    pub fn is_choice(&self) -> bool {
        matches!(self, AnswerType::SingleChoice | AnswerType::MultiChoice)
    }
}

/// A selectable option of a choice question
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    /// Stored value
    pub value: String,
    /// Display label
    pub label: String,
}

impl QuestionOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A single question in a step
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub label: String,
    pub answer_type: AnswerType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<QuestionOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_when: Option<Condition>,
}

impl Question {
    pub fn new(id: impl Into<QuestionId>, label: impl Into<String>, answer_type: AnswerType) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            answer_type,
            help: None,
            options: Vec::new(),
            placeholder: None,
            visible_when: None,
        }
    }

    /// Create a single-choice question
    pub fn single(id: impl Into<QuestionId>, label: impl Into<String>) -> Self {
        Self::new(id, label, AnswerType::SingleChoice)
    }

    /// Create a multi-choice question
    pub fn multi(id: impl Into<QuestionId>, label: impl Into<String>) -> Self {
        Self::new(id, label, AnswerType::MultiChoice)
    }

    /// Create a free-text question
    pub fn text(id: impl Into<QuestionId>, label: impl Into<String>) -> Self {
        Self::new(id, label, AnswerType::FreeText)
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn with_option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.push(QuestionOption::new(value, label));
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn visible_when(mut self, condition: Condition) -> Self {
        self.visible_when = Some(condition);
        self
    }

    /// Whether the question is shown for the given answers
    pub fn is_visible(&self, answers: &AnswerSet) -> bool {
        self.visible_when
            .as_ref()
            .map_or(true, |c| c.evaluate(answers))
    }

    /// Whether `value` is one of the declared options
    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    /// Label of a declared option
    pub fn option_label(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }

    /// Check an answer against the declared type and options
    pub fn check(&self, value: &AnswerValue) -> Vec<AnswerIssueKind> {
        match (self.answer_type, value) {
            (_, AnswerValue::Unreadable(_)) => vec![AnswerIssueKind::Unreadable],
            (AnswerType::FreeText, AnswerValue::Single(_)) => Vec::new(),
            (AnswerType::FreeText, AnswerValue::Multiple(_))
            | (AnswerType::SingleChoice, AnswerValue::Multiple(_)) => {
                vec![AnswerIssueKind::ExpectedSingle]
            }
            (AnswerType::MultiChoice, AnswerValue::Single(_)) => {
                vec![AnswerIssueKind::ExpectedMultiple]
            }
            (AnswerType::SingleChoice, AnswerValue::Single(v)) => self.unknown_options([v]),
            (AnswerType::MultiChoice, AnswerValue::Multiple(values)) => {
                self.unknown_options(values)
            }
        }
    }

    fn unknown_options<'a>(
        &self,
        values: impl IntoIterator<Item = &'a String>,
    ) -> Vec<AnswerIssueKind> {
        values
            .into_iter()
            .filter(|v| !self.has_option(v))
            .map(|v| AnswerIssueKind::UnknownOption { value: v.clone() })
            .collect()
    }
}

// ── Step ─────────────────────────────────────────────────────────────

/// One page of the wizard
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Step {
    pub id: StepId,
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub questions: Vec<Question>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_when: Option<Condition>,
}

impl Step {
    pub fn new(id: impl Into<StepId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            questions: Vec::new(),
            visible_when: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    pub fn visible_when(mut self, condition: Condition) -> Self {
        self.visible_when = Some(condition);
        self
    }

    /// Whether the step is shown for the given answers
    pub fn is_visible(&self, answers: &AnswerSet) -> bool {
        self.visible_when
            .as_ref()
            .map_or(true, |c| c.evaluate(answers))
    }

    /// Questions of this step that are shown for the given answers
    pub fn visible_questions<'a>(
        &'a self,
        answers: &'a AnswerSet,
    ) -> impl Iterator<Item = &'a Question> + 'a {
        self.questions.iter().filter(move |q| q.is_visible(answers))
    }
}

// ── Wizard Schema ────────────────────────────────────────────────────

/// The complete questionnaire of one theme
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WizardSchema {
    pub theme: Theme,
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub steps: Vec<Step>,
}

impl WizardSchema {
    pub fn new(theme: Theme, title: impl Into<String>) -> Self {
        Self {
            theme,
            title: title.into(),
            description: String::new(),
            steps: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Get a step by ID
    pub fn step(&self, id: &str) -> Option<&Step> {
        self.steps.iter().find(|s| s.id.as_str() == id)
    }

    /// Index of a step in declaration order
    pub fn step_index(&self, id: &str) -> Option<usize> {
        self.steps.iter().position(|s| s.id.as_str() == id)
    }

    /// Get a question by ID, searching every step
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions().find(|q| q.id.as_str() == id)
    }

    /// All questions in declaration order
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.steps.iter().flat_map(|s| s.questions.iter())
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn question_count(&self) -> usize {
        self.questions().count()
    }

    /// Validate the schema for structural correctness
    pub fn validate(&self) -> WizardResult<()> {
        if self.steps.is_empty() {
            return Err(WizardError::EmptySchema(self.theme));
        }

        let mut step_ids = HashSet::new();
        let mut question_ids = HashSet::new();
        for step in &self.steps {
            if !step_ids.insert(&step.id) {
                return Err(WizardError::DuplicateStepId(step.id.clone()));
            }
            for question in &step.questions {
                if !question_ids.insert(&question.id) {
                    return Err(WizardError::DuplicateQuestionId(question.id.clone()));
                }
                Self::validate_options(question)?;
            }
        }

        // Conditions may only read questions of this schema
        for step in &self.steps {
            if let Some(condition) = &step.visible_when {
                Self::validate_references(format!("step {}", step.id), condition, &question_ids)?;
            }
            for question in &step.questions {
                if let Some(condition) = &question.visible_when {
                    Self::validate_references(
                        format!("question {}", question.id),
                        condition,
                        &question_ids,
                    )?;
                }
            }
        }

        Ok(())
    }

    fn validate_options(question: &Question) -> WizardResult<()> {
        if question.answer_type.is_choice() && question.options.is_empty() {
            return Err(WizardError::MissingOptions(question.id.clone()));
        }
        let mut seen = HashSet::new();
        for option in &question.options {
            if !seen.insert(option.value.as_str()) {
                return Err(WizardError::DuplicateOptionValue {
                    question: question.id.clone(),
                    value: option.value.clone(),
                });
            }
        }
        Ok(())
    }

    fn validate_references(
        owner: String,
        condition: &Condition,
        known: &HashSet<&QuestionId>,
    ) -> WizardResult<()> {
        match condition
            .referenced_questions()
            .into_iter()
            .find(|q| !known.contains(q))
        {
            Some(reference) => Err(WizardError::UnknownConditionReference {
                owner,
                reference: reference.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Report answers that do not fit this schema.
    ///
    /// Answers arrive from user-editable client state, so this is a report
    /// rather than an error; engines treat the reported values as absent.
    pub fn validate_answers(&self, answers: &AnswerSet) -> Vec<AnswerIssue> {
        let mut issues = Vec::new();
        for (id, value) in answers.iter() {
            match self.question(id.as_str()) {
                None => issues.push(AnswerIssue {
                    question: id.clone(),
                    kind: AnswerIssueKind::UnknownQuestion,
                }),
                Some(question) => {
                    issues.extend(question.check(value).into_iter().map(|kind| AnswerIssue {
                        question: id.clone(),
                        kind,
                    }))
                }
            }
        }
        issues
    }
}

// ── Answer Issues ────────────────────────────────────────────────────

/// An answer that does not fit the schema
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerIssue {
    pub question: QuestionId,
    pub kind: AnswerIssueKind,
}

/// What is wrong with an answer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerIssueKind {
    /// No question with this id exists in the schema
    UnknownQuestion,
    /// A choice value that is not among the declared options
    UnknownOption { value: String },
    /// A scalar was given for a multi-choice question
    ExpectedMultiple,
    /// A list was given for a single-choice or free-text question
    ExpectedSingle,
    /// Neither text nor a list of text (e.g. `null` or a number)
    Unreadable,
}

impl std::fmt::Display for AnswerIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            AnswerIssueKind::UnknownQuestion => write!(f, "{}: unknown question", self.question),
            AnswerIssueKind::UnknownOption { value } => {
                write!(f, "{}: '{}' is not a declared option", self.question, value)
            }
            AnswerIssueKind::ExpectedMultiple => {
                write!(f, "{}: expected a list of values", self.question)
            }
            AnswerIssueKind::ExpectedSingle => {
                write!(f, "{}: expected a single value", self.question)
            }
            AnswerIssueKind::Unreadable => {
                write!(f, "{}: not a text value or a list of text values", self.question)
            }
        }
    }
}
