//! Risk engine abstraction and the shared verdict assembly
//!
//! Every theme with inference implements [`RiskEngine`]. Engines collect
//! findings, recommendations and data gaps into a [`VerdictBuilder`], which
//! owns the priority scheme shared by all themes:
//!
//! - base priority from the overall level: 2 (high, critical), 3 (medium),
//!   4 (low, unknown)
//! - each successive mitigation stage present adds one; items of the same
//!   stage share a priority
//! - when the user reported no existing measures, the first recommendation
//!   is made one more urgent (never below 1); ordering is unchanged

use wizard_types::{
    aggregate_level, AnswerSet, Finding, MitigationStage, Recommendation, RiskLevel, Theme, Verdict,
};

// ── Risk Engine ──────────────────────────────────────────────────────

/// Rule set that turns a theme's answers into a verdict.
///
/// Implementations must be pure, deterministic and total: no I/O, no
/// mutation of the answers, and no failure on absent or malformed input.
/// Unusable answers become data gaps.
pub trait RiskEngine: Send + Sync + std::fmt::Debug {
    /// Theme this engine assesses
    fn theme(&self) -> Theme;

    /// Engine name for logs and listings
    fn name(&self) -> &str;

    /// Assess the raw answer set
    fn assess(&self, answers: &AnswerSet) -> Verdict;
}

/// Base priority for the first mitigation stage at a given overall level
pub fn base_priority(level: RiskLevel) -> u32 {
    match level {
        RiskLevel::Critical | RiskLevel::High => 2,
        RiskLevel::Medium => 3,
        RiskLevel::Low | RiskLevel::Unknown => 4,
    }
}

/// A recommendation whose priority is assigned later by [`VerdictBuilder::build`]
pub fn unranked(
    stage: MitigationStage,
    action: impl Into<String>,
    rationale: impl Into<String>,
) -> Recommendation {
    Recommendation::new(0, stage, action, rationale)
}

// ── Verdict Builder ──────────────────────────────────────────────────

/// Accumulates the parts of a verdict during one assessment
#[derive(Debug)]
pub struct VerdictBuilder {
    theme: Theme,
    findings: Vec<Finding>,
    recommendations: Vec<Recommendation>,
    data_gaps: Vec<String>,
}

impl VerdictBuilder {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            findings: Vec::new(),
            recommendations: Vec::new(),
            data_gaps: Vec::new(),
        }
    }

    pub fn finding(&mut self, finding: Finding) -> &mut Self {
        self.findings.push(finding);
        self
    }

    pub fn recommend(&mut self, recommendation: Recommendation) -> &mut Self {
        self.recommendations.push(recommendation);
        self
    }

    /// Record a data gap; one entry per category, repeated notes are ignored
    pub fn gap(&mut self, note: impl Into<String>) -> &mut Self {
        let note = note.into();
        if !self.data_gaps.contains(&note) {
            self.data_gaps.push(note);
        }
        self
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn has_findings(&self) -> bool {
        !self.findings.is_empty()
    }

    /// Overall level of the findings collected so far
    pub fn level(&self) -> RiskLevel {
        aggregate_level(&self.findings)
    }

    /// Assign priorities and assemble the verdict.
    ///
    /// `no_measures` marks that the user reported no mitigation in place.
    pub fn build(mut self, no_measures: bool) -> Verdict {
        let base = base_priority(self.level());

        // Hierarchy order first; the sort is stable so insertion order
        // survives within a stage.
        self.recommendations.sort_by_key(|r| r.stage);

        let mut rank = 0;
        let mut previous: Option<MitigationStage> = None;
        for recommendation in &mut self.recommendations {
            if previous.is_some_and(|stage| stage != recommendation.stage) {
                rank += 1;
            }
            previous = Some(recommendation.stage);
            recommendation.priority = base + rank;
        }

        if no_measures {
            if let Some(first) = self.recommendations.first_mut() {
                first.priority = first.priority.saturating_sub(1).max(1);
            }
        }

        let verdict = Verdict::new(self.findings, self.recommendations, self.data_gaps);
        tracing::debug!(
            theme = %self.theme,
            overall = %verdict.overall_level,
            findings = verdict.findings.len(),
            recommendations = verdict.recommendations.len(),
            data_gaps = verdict.data_gaps.len(),
            "Assessment completed"
        );
        verdict
    }
}
