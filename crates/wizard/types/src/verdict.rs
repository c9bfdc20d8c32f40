//! Verdicts: the structured output of a theme's risk engine
//!
//! A verdict is a value object computed fresh on every assessment. It is
//! never persisted by the engine; hosts serialize it into the investigation
//! payload themselves.

use crate::{MitigationStage, RiskLevel};
use serde::{Deserialize, Serialize};

// ── Finding ──────────────────────────────────────────────────────────

/// One assessed hazard sub-topic
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Sub-topic label, e.g. "Hand-armtrillingen"
    pub topic: String,
    /// Assessed severity
    pub level: RiskLevel,
    /// One-line summary
    pub summary: String,
    /// Optional elaboration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Optional legal basis citation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_basis: Option<String>,
}

impl Finding {
    pub fn new(topic: impl Into<String>, level: RiskLevel, summary: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            level,
            summary: summary.into(),
            detail: None,
            legal_basis: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_legal_basis(mut self, citation: impl Into<String>) -> Self {
        self.legal_basis = Some(citation.into());
        self
    }
}

// ── Recommendation ───────────────────────────────────────────────────

/// One prioritized mitigation action
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Lower is more urgent
    pub priority: u32,
    /// Stage of the mitigation hierarchy
    pub stage: MitigationStage,
    /// What to do
    pub action: String,
    /// Why
    pub rationale: String,
    /// Optional deadline, free text ("direct", "binnen 3 maanden")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    /// Optional legal basis citation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_basis: Option<String>,
}

impl Recommendation {
    pub fn new(
        priority: u32,
        stage: MitigationStage,
        action: impl Into<String>,
        rationale: impl Into<String>,
    ) -> Self {
        Self {
            priority,
            stage,
            action: action.into(),
            rationale: rationale.into(),
            deadline: None,
            legal_basis: None,
        }
    }

    pub fn with_deadline(mut self, deadline: impl Into<String>) -> Self {
        self.deadline = Some(deadline.into());
        self
    }

    pub fn with_legal_basis(mut self, citation: impl Into<String>) -> Self {
        self.legal_basis = Some(citation.into());
        self
    }
}

// ── Verdict ──────────────────────────────────────────────────────────

/// Risk assessment result for one answer set
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Maximum severity across all findings
    pub overall_level: RiskLevel,
    /// Findings in sub-topic order
    pub findings: Vec<Finding>,
    /// Recommendations, ascending by priority
    pub recommendations: Vec<Recommendation>,
    /// Notes on missing or unknown inputs
    pub data_gaps: Vec<String>,
}

impl Verdict {
    /// Assemble a verdict: aggregates the overall level and sorts
    /// recommendations by priority (stable, so ties keep insertion order).
    pub fn new(
        findings: Vec<Finding>,
        mut recommendations: Vec<Recommendation>,
        data_gaps: Vec<String>,
    ) -> Self {
        recommendations.sort_by_key(|r| r.priority);
        Self {
            overall_level: aggregate_level(&findings),
            findings,
            recommendations,
            data_gaps,
        }
    }

    /// Whether any finding reached at least `level`
    pub fn reaches(&self, level: RiskLevel) -> bool {
        self.overall_level >= level
    }

    /// The most urgent recommendation
    pub fn top_recommendation(&self) -> Option<&Recommendation> {
        self.recommendations.first()
    }

    /// Whether the assessment was made on complete input
    pub fn is_complete(&self) -> bool {
        self.data_gaps.is_empty()
    }
}

/// Overall level: the maximum finding level, `Unknown` when there are none.
pub fn aggregate_level(findings: &[Finding]) -> RiskLevel {
    findings
        .iter()
        .fold(RiskLevel::Unknown, |acc, f| acc.max(f.level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_of_nothing_is_unknown() {
        assert_eq!(aggregate_level(&[]), RiskLevel::Unknown);
    }

    #[test]
    fn aggregate_takes_the_maximum() {
        let findings = vec![
            Finding::new("a", RiskLevel::Low, "low"),
            Finding::new("b", RiskLevel::High, "high"),
            Finding::new("c", RiskLevel::Medium, "medium"),
        ];
        assert_eq!(aggregate_level(&findings), RiskLevel::High);
    }

    #[test]
    fn new_sorts_recommendations_stably() {
        let recs = vec![
            Recommendation::new(3, MitigationStage::Technical, "t1", "r"),
            Recommendation::new(2, MitigationStage::Measurement, "m", "r"),
            Recommendation::new(3, MitigationStage::Technical, "t2", "r"),
            Recommendation::new(1, MitigationStage::Elimination, "e", "r"),
        ];
        let verdict = Verdict::new(Vec::new(), recs, Vec::new());

        let actions: Vec<&str> = verdict
            .recommendations
            .iter()
            .map(|r| r.action.as_str())
            .collect();
        assert_eq!(actions, vec!["e", "m", "t1", "t2"]);
        assert_eq!(verdict.overall_level, RiskLevel::Unknown);
        assert_eq!(verdict.top_recommendation().unwrap().priority, 1);
    }

    #[test]
    fn verdict_helpers() {
        let verdict = Verdict::new(
            vec![Finding::new("Trillingen", RiskLevel::Medium, "s")],
            Vec::new(),
            vec!["gap".into()],
        );
        assert!(verdict.reaches(RiskLevel::Low));
        assert!(verdict.reaches(RiskLevel::Medium));
        assert!(!verdict.reaches(RiskLevel::High));
        assert!(!verdict.is_complete());
    }

    #[test]
    fn optional_fields_are_omitted_in_json() {
        let finding = Finding::new("Lawaai", RiskLevel::Low, "s");
        let json = serde_json::to_value(&finding).unwrap();
        assert!(json.get("detail").is_none());
        assert!(json.get("legal_basis").is_none());
        assert_eq!(json["level"], "low");
    }
}
