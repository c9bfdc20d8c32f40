//! Error types for wizard schemas, sessions and theme lookups

use crate::{QuestionId, StepId, Theme};

/// Errors that can occur while building, navigating or assessing a wizard
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("Schema has no steps: {0}")]
    EmptySchema(Theme),

    #[error("Duplicate step id: {0}")]
    DuplicateStepId(StepId),

    #[error("Duplicate question id: {0}")]
    DuplicateQuestionId(QuestionId),

    #[error("Duplicate option value '{value}' in question {question}")]
    DuplicateOptionValue { question: QuestionId, value: String },

    #[error("Choice question declares no options: {0}")]
    MissingOptions(QuestionId),

    #[error("Condition on {owner} references unknown question {reference}")]
    UnknownConditionReference { owner: String, reference: QuestionId },

    #[error("Step not found: {0}")]
    StepNotFound(StepId),

    #[error("Step is not visible with the current answers: {0}")]
    StepHidden(StepId),

    #[error("Unknown question: {0}")]
    UnknownQuestion(QuestionId),

    #[error("Invalid answer for {question}: {reason}")]
    InvalidAnswer { question: QuestionId, reason: String },

    #[error("Theme not registered: {0}")]
    ThemeNotFound(Theme),

    #[error("Unknown theme id: {0}")]
    UnknownTheme(String),

    #[error("No risk engine configured for theme {0}")]
    NoEngine(Theme),

    #[error("Engine for theme {engine} registered with schema of theme {schema}")]
    EngineMismatch { schema: Theme, engine: Theme },
}

/// Result type alias for wizard operations
pub type WizardResult<T> = Result<T, WizardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = WizardError::NoEngine(Theme::Climate);
        assert_eq!(err.to_string(), "No risk engine configured for theme climate");

        let err = WizardError::DuplicateOptionValue {
            question: QuestionId::new("vib-type"),
            value: "hav".into(),
        };
        assert!(err.to_string().contains("'hav'"));
        assert!(err.to_string().contains("vib-type"));
    }
}
