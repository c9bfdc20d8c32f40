//! Wizard sessions: one user's in-progress questionnaire for one investigation
//!
//! A session owns the answer set and the navigator position. Every answer
//! mutation re-clamps the position, so a step hidden by the new answer is
//! never left as the current step. Navigation itself does not count as a
//! modification and leaves `updated_at` untouched.

use crate::navigator::{Position, Progress, WizardNavigator};
use crate::RiskEngine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use wizard_types::{
    AnswerSet, AnswerValue, Question, Step, Theme, Verdict, WizardError, WizardResult,
    WizardSchema,
};

// ── Session Identifier ───────────────────────────────────────────────

/// Unique identifier for a wizard session
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WizardSessionId(pub String);

impl WizardSessionId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn short(&self) -> &str {
        &self.0[..8.min(self.0.len())]
    }
}

impl std::fmt::Display for WizardSessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Wizard Session ───────────────────────────────────────────────────

/// A running wizard: schema, answers and position
#[derive(Clone, Debug)]
pub struct WizardSession {
    id: WizardSessionId,
    answers: AnswerSet,
    navigator: WizardNavigator,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl WizardSession {
    /// Start a fresh session with an empty answer set
    pub fn new(schema: Arc<WizardSchema>) -> Self {
        Self::resume(schema, AnswerSet::new())
    }

    /// Continue from previously collected answers, starting at the first
    /// visible step
    pub fn resume(schema: Arc<WizardSchema>, answers: AnswerSet) -> Self {
        let now = Utc::now();
        let navigator = WizardNavigator::new(schema, &answers);
        let session = Self {
            id: WizardSessionId::generate(),
            answers,
            navigator,
            created_at: now,
            updated_at: now,
        };
        tracing::debug!(
            session_id = %session.id.short(),
            theme = %session.theme(),
            answers = session.answers.len(),
            "Wizard session started"
        );
        session
    }

    pub fn id(&self) -> &WizardSessionId {
        &self.id
    }

    pub fn theme(&self) -> Theme {
        self.navigator.schema().theme
    }

    pub fn schema(&self) -> &Arc<WizardSchema> {
        self.navigator.schema()
    }

    /// Read-only view of the collected answers
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // ── Answers ──────────────────────────────────────────────────────

    /// Record an answer.
    ///
    /// The question must exist in the schema and choice answers must use
    /// declared options in the right shape.
    pub fn answer(&mut self, question: &str, value: impl Into<AnswerValue>) -> WizardResult<()> {
        let value = value.into();
        let definition = self
            .schema()
            .question(question)
            .ok_or_else(|| WizardError::UnknownQuestion(question.into()))?;

        if let Some(issue) = definition.check(&value).into_iter().next() {
            let reason = wizard_types::AnswerIssue {
                question: definition.id.clone(),
                kind: issue,
            }
            .to_string();
            return Err(WizardError::InvalidAnswer {
                question: definition.id.clone(),
                reason,
            });
        }

        self.answers.set(question, value);
        self.touch();
        Ok(())
    }

    /// Remove an answer (explicit user edit)
    pub fn clear(&mut self, question: &str) -> Option<AnswerValue> {
        let removed = self.answers.clear(question);
        if removed.is_some() {
            self.touch();
        }
        removed
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
        self.navigator.reconcile(&self.answers);
    }

    // ── Navigation ───────────────────────────────────────────────────

    pub fn position(&self) -> Position {
        self.navigator.position()
    }

    pub fn current_step(&self) -> Option<&Step> {
        self.navigator.current_step()
    }

    /// Visible questions of the current step
    pub fn current_questions(&self) -> Vec<&Question> {
        self.navigator.current_questions(&self.answers)
    }

    pub fn visible_steps(&self) -> Vec<&Step> {
        self.navigator.visible_steps(&self.answers)
    }

    pub fn next(&mut self) -> Position {
        self.navigator.next(&self.answers)
    }

    pub fn previous(&mut self) -> Position {
        self.navigator.previous(&self.answers)
    }

    pub fn go_to(&mut self, step_id: &str) -> WizardResult<Position> {
        self.navigator.go_to(step_id, &self.answers)
    }

    /// Whether the user reached the review state
    pub fn is_complete(&self) -> bool {
        self.navigator.is_at_review()
    }

    pub fn progress(&self) -> Progress {
        self.navigator.progress(&self.answers)
    }

    /// Visible questions without a usable answer, across all visible steps
    pub fn unanswered_questions(&self) -> Vec<&Question> {
        self.visible_steps()
            .into_iter()
            .flat_map(|step| step.visible_questions(&self.answers))
            .filter(|q| !self.answers.is_answered(&q.id))
            .collect()
    }

    // ── Assessment ───────────────────────────────────────────────────

    /// Run an engine over the current answers. May be called at any time.
    pub fn assess(&self, engine: &dyn RiskEngine) -> WizardResult<Verdict> {
        if engine.theme() != self.theme() {
            return Err(WizardError::EngineMismatch {
                schema: self.theme(),
                engine: engine.theme(),
            });
        }
        Ok(engine.assess(&self.answers))
    }
}
