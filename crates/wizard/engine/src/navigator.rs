//! Navigation controller: moves through the visible steps of a wizard
//!
//! The navigable sequence is recomputed from the answer set on every call;
//! nothing is cached, so an answer that hides or reveals a later step is
//! reflected on the very next query. Positions refer to schema indices.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use wizard_types::{AnswerSet, Question, Step, WizardError, WizardResult, WizardSchema};

/// Where the user currently is in the wizard
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    /// At the step with this schema index
    Step(usize),
    /// Synthetic terminal state after the last visible step
    Review,
}

/// Completion figures for the visible part of the wizard
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// 1-based ordinal of the current step among visible steps (`None` at review)
    pub current_step: Option<usize>,
    pub visible_steps: usize,
    pub answered_questions: usize,
    pub visible_questions: usize,
}

impl Progress {
    pub fn is_fully_answered(&self) -> bool {
        self.answered_questions == self.visible_questions
    }
}

/// State machine over the visible steps of one schema
#[derive(Clone, Debug)]
pub struct WizardNavigator {
    schema: Arc<WizardSchema>,
    position: Position,
}

impl WizardNavigator {
    /// Start at the first visible step (review if nothing is visible)
    pub fn new(schema: Arc<WizardSchema>, answers: &AnswerSet) -> Self {
        let position = first_visible(&schema, answers).map_or(Position::Review, Position::Step);
        Self { schema, position }
    }

    pub fn schema(&self) -> &Arc<WizardSchema> {
        &self.schema
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_at_review(&self) -> bool {
        self.position == Position::Review
    }

    /// The step at the current position
    pub fn current_step(&self) -> Option<&Step> {
        match self.position {
            Position::Step(index) => self.schema.steps.get(index),
            Position::Review => None,
        }
    }

    /// Schema indices of the steps visible for `answers`
    pub fn visible_indices(&self, answers: &AnswerSet) -> Vec<usize> {
        self.schema
            .steps
            .iter()
            .enumerate()
            .filter(|(_, step)| step.is_visible(answers))
            .map(|(index, _)| index)
            .collect()
    }

    /// Steps visible for `answers`, in order
    pub fn visible_steps(&self, answers: &AnswerSet) -> Vec<&Step> {
        self.schema
            .steps
            .iter()
            .filter(|step| step.is_visible(answers))
            .collect()
    }

    /// Visible questions of the current step
    pub fn current_questions<'a>(&'a self, answers: &'a AnswerSet) -> Vec<&'a Question> {
        self.current_step()
            .map(|step| step.visible_questions(answers).collect())
            .unwrap_or_default()
    }

    /// Advance to the lowest visible index after the current one, or review
    pub fn next(&mut self, answers: &AnswerSet) -> Position {
        if let Position::Step(index) = self.position {
            let target = self
                .schema
                .steps
                .iter()
                .enumerate()
                .skip(index + 1)
                .find(|(_, step)| step.is_visible(answers))
                .map_or(Position::Review, |(i, _)| Position::Step(i));
            self.move_to(target, "next");
        }
        self.position
    }

    /// Retreat to the highest visible index before the current one.
    ///
    /// From review this is the last visible step; at the first visible step
    /// the position is unchanged.
    pub fn previous(&mut self, answers: &AnswerSet) -> Position {
        let bound = match self.position {
            Position::Step(index) => index,
            Position::Review => self.schema.steps.len(),
        };
        if let Some(index) = last_visible_before(&self.schema, answers, bound) {
            self.move_to(Position::Step(index), "previous");
        }
        self.position
    }

    /// Jump directly to a visible step
    pub fn go_to(&mut self, step_id: &str, answers: &AnswerSet) -> WizardResult<Position> {
        let index = self
            .schema
            .step_index(step_id)
            .ok_or_else(|| WizardError::StepNotFound(step_id.into()))?;
        if !self.schema.steps[index].is_visible(answers) {
            return Err(WizardError::StepHidden(step_id.into()));
        }
        self.move_to(Position::Step(index), "go_to");
        Ok(self.position)
    }

    /// Re-clamp after an answer mutation.
    ///
    /// If the current step became hidden, move to the nearest preceding
    /// visible step, else the nearest following one, else review.
    pub fn reconcile(&mut self, answers: &AnswerSet) -> Position {
        if let Position::Step(index) = self.position {
            let still_visible = self
                .schema
                .steps
                .get(index)
                .is_some_and(|step| step.is_visible(answers));
            if !still_visible {
                let target = last_visible_before(&self.schema, answers, index)
                    .or_else(|| {
                        self.schema
                            .steps
                            .iter()
                            .enumerate()
                            .skip(index + 1)
                            .find(|(_, step)| step.is_visible(answers))
                            .map(|(i, _)| i)
                    })
                    .map_or(Position::Review, Position::Step);
                self.move_to(target, "reconcile");
            }
        }
        self.position
    }

    /// Completion figures for the visible part of the wizard
    pub fn progress(&self, answers: &AnswerSet) -> Progress {
        let visible = self.visible_indices(answers);
        let current_step = match self.position {
            Position::Step(index) => visible.iter().position(|i| *i == index).map(|p| p + 1),
            Position::Review => None,
        };

        let mut answered_questions = 0;
        let mut visible_questions = 0;
        for index in &visible {
            for question in self.schema.steps[*index].visible_questions(answers) {
                visible_questions += 1;
                if answers.is_answered(&question.id) {
                    answered_questions += 1;
                }
            }
        }

        Progress {
            current_step,
            visible_steps: visible.len(),
            answered_questions,
            visible_questions,
        }
    }

    fn move_to(&mut self, target: Position, via: &'static str) {
        if target != self.position {
            tracing::debug!(
                theme = %self.schema.theme,
                from = ?self.position,
                to = ?target,
                via,
                "Wizard position changed"
            );
            self.position = target;
        }
    }
}

fn first_visible(schema: &WizardSchema, answers: &AnswerSet) -> Option<usize> {
    schema.steps.iter().position(|step| step.is_visible(answers))
}

fn last_visible_before(schema: &WizardSchema, answers: &AnswerSet, bound: usize) -> Option<usize> {
    schema
        .steps
        .iter()
        .take(bound)
        .rposition(|step| step.is_visible(answers))
}
