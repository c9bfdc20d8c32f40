//! Hazard themes: one wizard (and optionally one risk engine) per theme

use crate::WizardError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A workplace hazard domain with its own questionnaire
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    /// Noise exposure
    Sound,
    /// Hand-arm and whole-body vibration
    Vibration,
    /// Biological agents (micro-organisms, allergens)
    BiologicalAgents,
    /// Lifting, carrying, repetitive work and posture
    PhysicalLoad,
    /// Heat, cold and indoor climate
    Climate,
    /// Lighting levels and glare
    Lighting,
    /// Hazardous substances
    HazardousSubstances,
}

impl Theme {
    /// All themes, in presentation order
    pub fn all() -> &'static [Theme] {
        &[
            Theme::Sound,
            Theme::Vibration,
            Theme::BiologicalAgents,
            Theme::PhysicalLoad,
            Theme::Climate,
            Theme::Lighting,
            Theme::HazardousSubstances,
        ]
    }

    /// Stable identifier used in payloads and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Sound => "sound",
            Theme::Vibration => "vibration",
            Theme::BiologicalAgents => "biological-agents",
            Theme::PhysicalLoad => "physical-load",
            Theme::Climate => "climate",
            Theme::Lighting => "lighting",
            Theme::HazardousSubstances => "hazardous-substances",
        }
    }

    /// Display name as shown to users
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Sound => "Geluid",
            Theme::Vibration => "Trillingen",
            Theme::BiologicalAgents => "Biologische agentia",
            Theme::PhysicalLoad => "Fysieke belasting",
            Theme::Climate => "Klimaat",
            Theme::Lighting => "Verlichting",
            Theme::HazardousSubstances => "Gevaarlijke stoffen",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| WizardError::UnknownTheme(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_theme() {
        for theme in Theme::all() {
            assert_eq!(theme.as_str().parse::<Theme>().unwrap(), *theme);
        }
    }

    #[test]
    fn parse_unknown_theme() {
        let result = "radiation".parse::<Theme>();
        assert!(matches!(result, Err(WizardError::UnknownTheme(id)) if id == "radiation"));
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&Theme::HazardousSubstances).unwrap();
        assert_eq!(json, "\"hazardous-substances\"");
        let back: Theme = serde_json::from_str("\"physical-load\"").unwrap();
        assert_eq!(back, Theme::PhysicalLoad);
    }
}
