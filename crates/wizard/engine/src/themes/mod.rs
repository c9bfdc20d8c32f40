//! Built-in theme content: one schema per theme, engines where inference exists
//!
//! Vibration and sound carry a rule-based engine. The remaining themes are
//! inventory questionnaires without inference.

pub mod biological_agents;
pub mod climate;
pub mod hazardous_substances;
pub mod lighting;
pub mod physical_load;
pub mod sound;
pub mod vibration;

pub use sound::SoundEngine;
pub use vibration::VibrationEngine;

use crate::RiskEngine;
use std::sync::Arc;
use wizard_types::{AnswerSet, Theme, WizardSchema};

/// The built-in schema of a theme
pub fn schema(theme: Theme) -> WizardSchema {
    match theme {
        Theme::Sound => sound::schema(),
        Theme::Vibration => vibration::schema(),
        Theme::BiologicalAgents => biological_agents::schema(),
        Theme::PhysicalLoad => physical_load::schema(),
        Theme::Climate => climate::schema(),
        Theme::Lighting => lighting::schema(),
        Theme::HazardousSubstances => hazardous_substances::schema(),
    }
}

/// The built-in engine of a theme, if it has one
pub fn engine(theme: Theme) -> Option<Arc<dyn RiskEngine>> {
    match theme {
        Theme::Sound => Some(Arc::new(SoundEngine::new())),
        Theme::Vibration => Some(Arc::new(VibrationEngine::new())),
        Theme::BiologicalAgents
        | Theme::PhysicalLoad
        | Theme::Climate
        | Theme::Lighting
        | Theme::HazardousSubstances => None,
    }
}

// ── Answer extraction ────────────────────────────────────────────────
//
// Engines read answers through these helpers so absent, blank, malformed
// and unrecognized values all collapse into an explicit unknown.

/// Daily exposure duration bucket
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DurationBand {
    Short,
    Medium,
    Long,
    Unknown,
}

impl DurationBand {
    pub(crate) fn read(answers: &AnswerSet, question: &str) -> Self {
        match answers.single(question) {
            Some("short") => DurationBand::Short,
            Some("medium") => DurationBand::Medium,
            Some("long") => DurationBand::Long,
            _ => DurationBand::Unknown,
        }
    }

    /// Row of a duration decision table
    pub(crate) fn row(self) -> usize {
        match self {
            DurationBand::Short => 0,
            DurationBand::Medium => 1,
            DurationBand::Long => 2,
            DurationBand::Unknown => 3,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            DurationBand::Short => "korter dan 1 uur per dag",
            DurationBand::Medium => "1 tot 4 uur per dag",
            DurationBand::Long => "langer dan 4 uur per dag",
            DurationBand::Unknown => "onbekende duur",
        }
    }

    pub(crate) fn is_prolonged(self) -> bool {
        matches!(self, DurationBand::Medium | DurationBand::Long)
    }
}

/// Yes / no / unknown answer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Tristate {
    Yes,
    No,
    Unknown,
}

impl Tristate {
    pub(crate) fn read(answers: &AnswerSet, question: &str) -> Self {
        match answers.single(question) {
            Some("yes") => Tristate::Yes,
            Some("no") => Tristate::No,
            _ => Tristate::Unknown,
        }
    }

    /// Column of a complaints decision table
    pub(crate) fn column(self) -> usize {
        match self {
            Tristate::Yes => 0,
            Tristate::No => 1,
            Tristate::Unknown => 2,
        }
    }
}

/// What the user reported about mitigation already in place
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MeasureState {
    /// Explicitly "none"
    NoneYet,
    /// At least one recognized measure selected
    InPlace,
    Unknown,
}

impl MeasureState {
    /// Unrecognized values are ignored; a recognized measure wins over "none"
    pub(crate) fn read(answers: &AnswerSet, question: &str, recognized: &[&str]) -> Self {
        let Some(selected) = answers.multiple(question) else {
            return MeasureState::Unknown;
        };
        if selected.iter().any(|v| recognized.contains(&v.as_str())) {
            MeasureState::InPlace
        } else if selected.iter().any(|v| v == "none") {
            MeasureState::NoneYet
        } else {
            MeasureState::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_builtin_schemas_validate() {
        for theme in Theme::all() {
            let schema = schema(*theme);
            assert_eq!(schema.theme, *theme);
            schema
                .validate()
                .unwrap_or_else(|e| panic!("{} schema invalid: {}", theme, e));
        }
    }

    #[test]
    fn test_engines_match_their_theme() {
        for theme in Theme::all() {
            if let Some(engine) = engine(*theme) {
                assert_eq!(engine.theme(), *theme);
            }
        }
        assert!(engine(Theme::Vibration).is_some());
        assert!(engine(Theme::Sound).is_some());
        assert!(engine(Theme::Lighting).is_none());
    }

    #[test]
    fn test_extraction_defaults_to_unknown() {
        let answers = AnswerSet::new()
            .with("d", "forever")
            .with("c", vec!["yes"])
            .with("m", "none");

        assert_eq!(DurationBand::read(&answers, "d"), DurationBand::Unknown);
        assert_eq!(DurationBand::read(&answers, "missing"), DurationBand::Unknown);
        assert_eq!(Tristate::read(&answers, "c"), Tristate::Unknown);
        assert_eq!(MeasureState::read(&answers, "m", &["gloves"]), MeasureState::Unknown);
    }

    #[test]
    fn test_measure_state() {
        let recognized = ["gloves", "maintenance"];
        let read = |values: Vec<&str>| {
            MeasureState::read(&AnswerSet::new().with("m", values), "m", &recognized)
        };

        assert_eq!(read(vec!["none"]), MeasureState::NoneYet);
        assert_eq!(read(vec!["gloves"]), MeasureState::InPlace);
        assert_eq!(read(vec!["none", "gloves"]), MeasureState::InPlace);
        assert_eq!(read(vec!["none", "wishful-thinking"]), MeasureState::NoneYet);
        assert_eq!(read(vec!["wishful-thinking"]), MeasureState::Unknown);
        assert_eq!(read(vec![]), MeasureState::Unknown);
    }
}
