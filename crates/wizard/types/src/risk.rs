//! Risk levels and the mitigation hierarchy

use serde::{Deserialize, Serialize};

/// Severity of a finding, totally ordered.
///
/// `Unknown` is both the default and the minimum, so any real finding
/// overrides it when levels are aggregated.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Unknown,
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Unknown => "unknown",
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }

    /// Dutch label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Unknown => "Onbekend",
            RiskLevel::Low => "Laag",
            RiskLevel::Medium => "Middel",
            RiskLevel::High => "Hoog",
            RiskLevel::Critical => "Kritiek",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stage of the mitigation hierarchy a recommendation belongs to.
///
/// Declaration order is the hierarchy order: source measures first,
/// personal protection and health surveillance last.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MitigationStage {
    /// Remove or substitute the source
    Elimination,
    /// Quantify the exposure
    Measurement,
    /// Engineering controls
    Technical,
    /// Work organisation, time limits, instruction
    Organisational,
    /// Personal protective equipment
    PersonalProtection,
    /// Medical examination and follow-up
    HealthSurveillance,
}

impl MitigationStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            MitigationStage::Elimination => "elimination",
            MitigationStage::Measurement => "measurement",
            MitigationStage::Technical => "technical",
            MitigationStage::Organisational => "organisational",
            MitigationStage::PersonalProtection => "personal-protection",
            MitigationStage::HealthSurveillance => "health-surveillance",
        }
    }
}

impl std::fmt::Display for MitigationStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
