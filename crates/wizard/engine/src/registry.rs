//! Theme registry: schema and optional risk engine per theme
//!
//! Schemas are validated on registration and immutable afterwards. A theme
//! may be registered without an engine; assessing such a theme is a
//! configuration error, not an engine failure.

use crate::session::WizardSession;
use crate::themes;
use crate::RiskEngine;
use std::collections::BTreeMap;
use std::sync::Arc;
use wizard_types::{AnswerSet, Theme, Verdict, WizardError, WizardResult, WizardSchema};

#[derive(Clone, Debug)]
struct ThemeEntry {
    schema: Arc<WizardSchema>,
    engine: Option<Arc<dyn RiskEngine>>,
}

/// Registry of theme schemas and engines
#[derive(Clone, Debug)]
pub struct ThemeRegistry {
    entries: BTreeMap<Theme, ThemeEntry>,
}

impl ThemeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Registry with every built-in theme
    pub fn builtin() -> WizardResult<Self> {
        let mut registry = Self::new();
        for theme in Theme::all() {
            registry.register(themes::schema(*theme), themes::engine(*theme))?;
        }
        Ok(registry)
    }

    /// Register (or replace) a theme.
    ///
    /// Validates the schema before storing; an engine must belong to the
    /// same theme as the schema.
    pub fn register(
        &mut self,
        schema: WizardSchema,
        engine: Option<Arc<dyn RiskEngine>>,
    ) -> WizardResult<Theme> {
        schema.validate()?;

        let theme = schema.theme;
        if let Some(engine) = &engine {
            if engine.theme() != theme {
                return Err(WizardError::EngineMismatch {
                    schema: theme,
                    engine: engine.theme(),
                });
            }
        }

        tracing::info!(
            theme = %theme,
            steps = schema.step_count(),
            questions = schema.question_count(),
            engine = engine.as_ref().map(|e| e.name()).unwrap_or("none"),
            "Theme registered"
        );

        self.entries.insert(
            theme,
            ThemeEntry {
                schema: Arc::new(schema),
                engine,
            },
        );
        Ok(theme)
    }

    /// Schema of a theme
    pub fn schema(&self, theme: Theme) -> Option<Arc<WizardSchema>> {
        self.entries.get(&theme).map(|e| Arc::clone(&e.schema))
    }

    /// Engine of a theme; `None` for unregistered themes and inventory-only themes
    pub fn engine(&self, theme: Theme) -> Option<Arc<dyn RiskEngine>> {
        self.entries.get(&theme).and_then(|e| e.engine.clone())
    }

    pub fn has_engine(&self, theme: Theme) -> bool {
        self.entries.get(&theme).is_some_and(|e| e.engine.is_some())
    }

    /// Registered themes in presentation order
    pub fn themes(&self) -> Vec<Theme> {
        self.entries.keys().copied().collect()
    }

    pub fn contains(&self, theme: Theme) -> bool {
        self.entries.contains_key(&theme)
    }

    /// Assess answers with the theme's engine
    pub fn assess(&self, theme: Theme, answers: &AnswerSet) -> WizardResult<Verdict> {
        let entry = self
            .entries
            .get(&theme)
            .ok_or(WizardError::ThemeNotFound(theme))?;
        let engine = entry.engine.as_ref().ok_or(WizardError::NoEngine(theme))?;
        Ok(engine.assess(answers))
    }

    /// Start an empty wizard session for a theme
    pub fn start_session(&self, theme: Theme) -> WizardResult<WizardSession> {
        self.resume_session(theme, AnswerSet::new())
    }

    /// Start a session from previously collected answers
    pub fn resume_session(&self, theme: Theme, answers: AnswerSet) -> WizardResult<WizardSession> {
        let schema = self.schema(theme).ok_or(WizardError::ThemeNotFound(theme))?;
        Ok(WizardSession::resume(schema, answers))
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::{SoundEngine, VibrationEngine};
    use wizard_types::{Question, RiskLevel, Step};

    #[test]
    fn test_builtin_registers_all_themes() {
        let registry = ThemeRegistry::builtin().unwrap();
        assert_eq!(registry.themes(), Theme::all().to_vec());
        assert!(registry.has_engine(Theme::Vibration));
        assert!(registry.has_engine(Theme::Sound));
        assert!(!registry.has_engine(Theme::Climate));
        assert!(registry.schema(Theme::Lighting).is_some());
    }

    #[test]
    fn test_assess_vibration() {
        let registry = ThemeRegistry::builtin().unwrap();
        let verdict = registry.assess(Theme::Vibration, &AnswerSet::new()).unwrap();
        assert_eq!(verdict.overall_level, RiskLevel::Low);
    }

    #[test]
    fn test_assess_without_engine() {
        let registry = ThemeRegistry::builtin().unwrap();
        let result = registry.assess(Theme::HazardousSubstances, &AnswerSet::new());
        assert!(matches!(
            result,
            Err(WizardError::NoEngine(Theme::HazardousSubstances))
        ));
    }

    #[test]
    fn test_assess_unregistered_theme() {
        let registry = ThemeRegistry::new();
        assert!(matches!(
            registry.assess(Theme::Sound, &AnswerSet::new()),
            Err(WizardError::ThemeNotFound(Theme::Sound))
        ));
        assert!(registry.start_session(Theme::Sound).is_err());
    }

    #[test]
    fn test_register_validates_schema() {
        let mut registry = ThemeRegistry::new();
        let invalid = WizardSchema::new(Theme::Climate, "Klimaat");
        assert!(matches!(
            registry.register(invalid, None),
            Err(WizardError::EmptySchema(Theme::Climate))
        ));
        assert!(!registry.contains(Theme::Climate));
    }

    #[test]
    fn test_register_rejects_engine_of_other_theme() {
        let mut registry = ThemeRegistry::new();
        let schema = WizardSchema::new(Theme::Vibration, "Trillingen")
            .with_step(Step::new("s", "S").with_question(Question::text("q", "Q")));
        let result = registry.register(schema, Some(Arc::new(SoundEngine::new())));
        assert!(matches!(result, Err(WizardError::EngineMismatch { .. })));
    }

    #[test]
    fn test_register_replaces_theme() {
        let mut registry = ThemeRegistry::builtin().unwrap();
        let schema = WizardSchema::new(Theme::Vibration, "Trillingen (kort)")
            .with_step(Step::new("s", "S").with_question(Question::text("q", "Q")));
        registry
            .register(schema, Some(Arc::new(VibrationEngine::new())))
            .unwrap();
        assert_eq!(
            registry.schema(Theme::Vibration).unwrap().title,
            "Trillingen (kort)"
        );
        assert_eq!(registry.themes().len(), Theme::all().len());
    }

    #[test]
    fn test_start_session() {
        let registry = ThemeRegistry::builtin().unwrap();
        let session = registry.start_session(Theme::Sound).unwrap();
        assert_eq!(session.theme(), Theme::Sound);
        assert!(session.answers().is_empty());
    }
}
