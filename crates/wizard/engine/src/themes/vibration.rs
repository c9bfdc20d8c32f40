//! Vibration ("Trillingen"): schema and rule-based engine
//!
//! Two independently assessed sub-topics: hand-arm vibration (HAV) and
//! whole-body vibration (WBV). Severity is a literal lookup on daily
//! duration × health complaints. Existing measures never change severity;
//! they only influence recommendation priority.
//!
//! | Hand-armtrillingen | yes    | no     | unknown |
//! |--------------------|--------|--------|---------|
//! | short (< 1 h)      | medium | low    | low     |
//! | medium (1-4 h)     | medium | low    | medium  |
//! | long (> 4 h)       | high   | medium | medium  |
//! | unknown            | medium | medium | medium  |
//!
//! | Lichaamstrillingen | yes    | no     | unknown |
//! |--------------------|--------|--------|---------|
//! | short (< 1 h)      | low    | low    | low     |
//! | medium (1-4 h)     | medium | low    | low     |
//! | long (> 4 h)       | high   | medium | medium  |
//! | unknown            | medium | low    | medium  |

use super::{DurationBand, MeasureState, Tristate};
use crate::engine::{unranked, RiskEngine, VerdictBuilder};
use crate::legal;
use wizard_types::{
    AnswerSet, Condition, Finding, MitigationStage, Question, RiskLevel, Step, Theme, Verdict,
    WizardSchema,
};

// ── Question ids ─────────────────────────────────────────────────────

pub const TYPE: &str = "vib-type";
pub const SOURCES: &str = "vib-sources";
pub const DURATION: &str = "vib-duration";
pub const COMPLAINTS: &str = "vib-complaints";
pub const MEASURES: &str = "vib-measures-existing";
pub const MEASURED: &str = "vib-measured";
pub const MEASUREMENT_RESULT: &str = "vib-measurement-result";

/// Measures that count as mitigation in place
const RECOGNIZED_MEASURES: &[&str] = &[
    "low-vib-tools",
    "maintenance",
    "seat-suspension",
    "time-limits",
    "gloves",
];

// ── Decision tables ──────────────────────────────────────────────────

use wizard_types::RiskLevel::{High, Low, Medium};

/// Rows: short, medium, long, unknown. Columns: complaints yes, no, unknown.
const HAV_TABLE: [[RiskLevel; 3]; 4] = [
    [Medium, Low, Low],
    [Medium, Low, Medium],
    [High, Medium, Medium],
    [Medium, Medium, Medium],
];

const WBV_TABLE: [[RiskLevel; 3]; 4] = [
    [Low, Low, Low],
    [Medium, Low, Low],
    [High, Medium, Medium],
    [Medium, Low, Medium],
];

// ── Data gap notes ───────────────────────────────────────────────────

const GAP_TYPE: &str = "Soort trillingen (hand-arm of lichaam) is niet ingevuld";
const GAP_DURATION: &str = "Blootstellingsduur per dag is onbekend of niet ingevuld";
const GAP_COMPLAINTS: &str = "Onbekend of er gezondheidsklachten zijn";
const GAP_MEASURES: &str = "Bestaande maatregelen zijn niet ingevuld";
const GAP_MEASURED: &str = "Onbekend of de blootstelling is gemeten";
const GAP_MEASUREMENT_RESULT: &str = "Uitkomst van de meting ontbreekt";

// ── Measurement outcome ──────────────────────────────────────────────

/// Answer to the measurement-result question
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MeasurementResult {
    BelowAction,
    AboveAction,
    AboveLimit,
    Unknown,
}

impl MeasurementResult {
    fn read(answers: &AnswerSet) -> Self {
        match answers.single(MEASUREMENT_RESULT) {
            Some("below-action") => MeasurementResult::BelowAction,
            Some("above-action") => MeasurementResult::AboveAction,
            Some("above-limit") => MeasurementResult::AboveLimit,
            _ => MeasurementResult::Unknown,
        }
    }
}

// ── Schema ───────────────────────────────────────────────────────────

/// The vibration questionnaire
pub fn schema() -> WizardSchema {
    let exposed = || Condition::any_of(TYPE, ["hav", "wbv"]);

    WizardSchema::new(Theme::Vibration, "Trillingen")
        .with_description(
            "Inventarisatie van blootstelling aan hand-armtrillingen en lichaamstrillingen",
        )
        .with_step(
            Step::new("vib-exposure", "Blootstelling")
                .with_description("Welke trillingen komen in het werk voor?")
                .with_question(
                    Question::multi(TYPE, "Soort trillingen")
                        .with_help("HAV: trillend handgereedschap. WBV: rijdend materieel, trillende vloeren.")
                        .with_option("hav", "Hand-armtrillingen (HAV)")
                        .with_option("wbv", "Lichaamstrillingen (WBV)")
                        .with_option("none", "Geen trillingen"),
                )
                .with_question(
                    Question::text(SOURCES, "Bronnen van trillingen")
                        .with_placeholder("Bijv. klopboor, slijptol, heftruck")
                        .visible_when(exposed()),
                ),
        )
        .with_step(
            Step::new("vib-duration", "Duur en klachten")
                .visible_when(exposed())
                .with_question(
                    Question::single(DURATION, "Hoe lang per dag wordt er blootgesteld?")
                        .with_option("short", "Korter dan 1 uur")
                        .with_option("medium", "1 tot 4 uur")
                        .with_option("long", "Langer dan 4 uur")
                        .with_option("unknown", "Weet ik niet"),
                )
                .with_question(
                    Question::single(COMPLAINTS, "Zijn er gezondheidsklachten?")
                        .with_help("Bijv. tintelende of witte vingers, rugklachten")
                        .with_option("yes", "Ja")
                        .with_option("no", "Nee")
                        .with_option("unknown", "Weet ik niet"),
                ),
        )
        .with_step(
            Step::new("vib-measures", "Maatregelen en metingen")
                .visible_when(exposed())
                .with_question(
                    Question::multi(MEASURES, "Welke maatregelen zijn al genomen?")
                        .with_option("none", "Nog geen maatregelen")
                        .with_option("low-vib-tools", "Trillingsarm gereedschap")
                        .with_option("maintenance", "Regelmatig onderhoud")
                        .with_option("seat-suspension", "Geveerde stoelen")
                        .with_option("time-limits", "Beperking blootstellingstijd")
                        .with_option("gloves", "Anti-vibratiehandschoenen"),
                )
                .with_question(
                    Question::single(MEASURED, "Is de blootstelling gemeten (A(8))?")
                        .with_option("yes", "Ja")
                        .with_option("no", "Nee")
                        .with_option("unknown", "Weet ik niet"),
                )
                .with_question(
                    Question::single(MEASUREMENT_RESULT, "Uitkomst van de meting")
                        .with_option("below-action", "Onder de actiewaarde")
                        .with_option("above-action", "Boven de actiewaarde")
                        .with_option("above-limit", "Boven de grenswaarde")
                        .visible_when(Condition::equals(MEASURED, "yes")),
                ),
        )
}

// ── Engine ───────────────────────────────────────────────────────────

/// Rule-based vibration risk engine
#[derive(Debug, Default)]
pub struct VibrationEngine;

impl VibrationEngine {
    pub fn new() -> Self {
        Self
    }
}

impl RiskEngine for VibrationEngine {
    fn theme(&self) -> Theme {
        Theme::Vibration
    }

    fn name(&self) -> &str {
        "vibration-rules"
    }

    fn assess(&self, answers: &AnswerSet) -> Verdict {
        let mut verdict = VerdictBuilder::new(Theme::Vibration);

        // A scalar or an unrecognized selection reads as unknown type
        let selected = answers.multiple(TYPE).unwrap_or_default();
        let hav = selected.iter().any(|v| v == "hav");
        let wbv = selected.iter().any(|v| v == "wbv");
        let none = selected.iter().any(|v| v == "none");
        let type_known = hav || wbv || none;
        let exposed = hav || wbv;
        let relevant = exposed || !type_known;

        let duration = DurationBand::read(answers, DURATION);
        let complaints = Tristate::read(answers, COMPLAINTS);
        let measures = MeasureState::read(answers, MEASURES, RECOGNIZED_MEASURES);
        let measured = Tristate::read(answers, MEASURED);
        let result = MeasurementResult::read(answers);
        // A measurement without a usable outcome leaves exposure as unknown
        let outcome_known = measured == Tristate::Yes && result != MeasurementResult::Unknown;

        if !type_known {
            verdict.gap(GAP_TYPE);
        }
        if relevant {
            if duration == DurationBand::Unknown {
                verdict.gap(GAP_DURATION);
            }
            if complaints == Tristate::Unknown {
                verdict.gap(GAP_COMPLAINTS);
            }
            if measures == MeasureState::Unknown {
                verdict.gap(GAP_MEASURES);
            }
            if measured == Tristate::Unknown {
                verdict.gap(GAP_MEASURED);
            }
            if measured == Tristate::Yes && result == MeasurementResult::Unknown {
                verdict.gap(GAP_MEASUREMENT_RESULT);
            }
        }

        // Findings
        if hav {
            let level = HAV_TABLE[duration.row()][complaints.column()];
            verdict.finding(
                Finding::new(
                    "Hand-armtrillingen",
                    level,
                    format!("Blootstelling aan hand-armtrillingen, {}", duration.label()),
                )
                .with_detail(complaints_detail(complaints, "vingers, handen en armen"))
                .with_legal_basis(legal::VIBRATION_LIMITS.citation),
            );
        }
        if wbv {
            let level = WBV_TABLE[duration.row()][complaints.column()];
            verdict.finding(
                Finding::new(
                    "Lichaamstrillingen",
                    level,
                    format!("Blootstelling aan lichaamstrillingen, {}", duration.label()),
                )
                .with_detail(complaints_detail(complaints, "rug en nek"))
                .with_legal_basis(legal::VIBRATION_LIMITS.citation),
            );
        }
        if !verdict.has_findings() {
            verdict.finding(Finding::new(
                "Trillingen",
                Low,
                "Geen aanwijzingen voor schadelijke blootstelling aan trillingen",
            ));
        }

        if exposed {
            recommend(&mut verdict, hav, wbv, duration, complaints, outcome_known, result);
        }

        verdict.build(measures == MeasureState::NoneYet)
    }
}

fn complaints_detail(complaints: Tristate, body: &str) -> String {
    match complaints {
        Tristate::Yes => format!("Er zijn klachten gemeld aan {}", body),
        Tristate::No => "Er zijn geen klachten gemeld".to_string(),
        Tristate::Unknown => "Onbekend of er klachten zijn".to_string(),
    }
}

/// Recommendations in mitigation-hierarchy order
fn recommend(
    verdict: &mut VerdictBuilder,
    hav: bool,
    wbv: bool,
    duration: DurationBand,
    complaints: Tristate,
    outcome_known: bool,
    result: MeasurementResult,
) {
    let level = verdict.level();

    if level >= Medium {
        verdict.recommend(
            unranked(
                MitigationStage::Elimination,
                "Onderzoek of trillende werkzaamheden vermeden of vervangen kunnen worden door een andere werkmethode",
                "Bronaanpak gaat voor alle andere maatregelen",
            )
            .with_legal_basis(legal::OCCUPATIONAL_HYGIENE_STRATEGY.citation),
        );
    }

    if !outcome_known {
        let mut measurement = unranked(
            MitigationStage::Measurement,
            "Laat de dagelijkse trillingsblootstelling A(8) beoordelen of meten",
            "Zonder meting is niet vast te stellen of actie- of grenswaarden worden overschreden",
        )
        .with_legal_basis(legal::VIBRATION_ASSESSMENT.citation);
        if level >= High {
            measurement = measurement.with_deadline("binnen 3 maanden");
        }
        verdict.recommend(measurement);
    }

    if hav {
        verdict.recommend(
            unranked(
                MitigationStage::Technical,
                "Zet trillingsarm gereedschap in en onderhoud het volgens schema",
                "Trillingsarm en goed onderhouden gereedschap verlaagt de hand-armblootstelling",
            )
            .with_legal_basis(legal::VIBRATION_MEASURES.citation),
        );
    }
    if wbv {
        verdict.recommend(
            unranked(
                MitigationStage::Technical,
                "Pas geveerde stoelen of cabines toe en onderhoud rijbanen en voertuigen",
                "Vering en vlakke rijbanen verlagen de lichaamstrillingen",
            )
            .with_legal_basis(legal::VIBRATION_MEASURES.citation),
        );
    }

    if result == MeasurementResult::AboveLimit {
        verdict.recommend(
            unranked(
                MitigationStage::Organisational,
                "Breng de blootstelling direct terug tot onder de grenswaarde",
                "De gemeten blootstelling overschrijdt de wettelijke grenswaarde",
            )
            .with_deadline("direct")
            .with_legal_basis(legal::VIBRATION_LIMITS.citation),
        );
    }
    if duration.is_prolonged() {
        verdict.recommend(
            unranked(
                MitigationStage::Organisational,
                "Beperk de blootstellingsduur met taakroulatie en pauzes",
                "De blootstelling duurt een groot deel van de werkdag",
            )
            .with_legal_basis(legal::VIBRATION_MEASURES.citation),
        );
    }

    if hav {
        verdict.recommend(unranked(
            MitigationStage::PersonalProtection,
            "Stel anti-vibratiehandschoenen en warme werkkleding beschikbaar",
            "Koude handen verhogen het risico op vaatklachten",
        ));
    }

    if complaints == Tristate::Yes || level >= High {
        verdict.recommend(
            unranked(
                MitigationStage::HealthSurveillance,
                "Bied medewerkers een periodiek arbeidsgezondheidskundig onderzoek (PAGO) aan",
                "Vroegtijdige signalering van trillingsgerelateerde klachten",
            )
            .with_legal_basis(legal::VIBRATION_HEALTH.citation),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assess(answers: &AnswerSet) -> Verdict {
        VibrationEngine::new().assess(answers)
    }

    fn hav_long_with_complaints(measures: &str) -> AnswerSet {
        AnswerSet::new()
            .with(TYPE, vec!["hav"])
            .with(DURATION, "long")
            .with(COMPLAINTS, "yes")
            .with(MEASURES, vec![measures])
    }

    fn is_sorted(verdict: &Verdict) -> bool {
        verdict
            .recommendations
            .windows(2)
            .all(|w| w[0].priority <= w[1].priority)
    }

    #[test]
    fn test_schema_is_valid() {
        let schema = schema();
        assert!(schema.validate().is_ok());
        assert_eq!(schema.step_count(), 3);
        assert_eq!(schema.question_count(), 7);
    }

    #[test]
    fn test_empty_answers_give_baseline_finding() {
        let verdict = assess(&AnswerSet::new());

        assert_eq!(verdict.findings.len(), 1);
        assert_eq!(verdict.findings[0].topic, "Trillingen");
        assert_eq!(verdict.findings[0].level, RiskLevel::Low);
        assert_eq!(verdict.overall_level, RiskLevel::Low);
        assert!(verdict.data_gaps.iter().any(|g| g == GAP_TYPE));
        assert!(verdict.data_gaps.iter().any(|g| g == GAP_DURATION));
        assert!(verdict.recommendations.is_empty());
    }

    #[test]
    fn test_hav_long_with_complaints_no_measures() {
        let verdict = assess(&hav_long_with_complaints("none"));

        assert_eq!(verdict.findings.len(), 1);
        assert!(verdict.findings[0].topic.contains("Hand-armtrillingen"));
        assert_eq!(verdict.findings[0].level, RiskLevel::High);
        assert_eq!(verdict.overall_level, RiskLevel::High);

        assert!(!verdict.recommendations.is_empty());
        assert!(is_sorted(&verdict));
        assert_eq!(verdict.recommendations[0].priority, 1);
        assert_eq!(verdict.recommendations[0].stage, MitigationStage::Elimination);
    }

    #[test]
    fn test_existing_measures_do_not_change_severity() {
        let none = assess(&hav_long_with_complaints("none"));
        let tools = assess(&hav_long_with_complaints("low-vib-tools"));

        assert_eq!(tools.findings[0].level, RiskLevel::High);
        assert_eq!(none.findings, tools.findings);

        // Only the first recommendation's priority differs
        assert_eq!(tools.recommendations[0].priority, 2);
        assert_eq!(none.recommendations.len(), tools.recommendations.len());
        assert_eq!(none.recommendations[1..], tools.recommendations[1..]);
    }

    #[test]
    fn test_hierarchy_stages_are_ordered() {
        let verdict = assess(&hav_long_with_complaints("low-vib-tools"));
        let stages: Vec<MitigationStage> =
            verdict.recommendations.iter().map(|r| r.stage).collect();
        assert_eq!(
            stages,
            vec![
                MitigationStage::Elimination,
                MitigationStage::Measurement,
                MitigationStage::Technical,
                MitigationStage::Organisational,
                MitigationStage::PersonalProtection,
                MitigationStage::HealthSurveillance,
            ]
        );
        let priorities: Vec<u32> = verdict.recommendations.iter().map(|r| r.priority).collect();
        assert_eq!(priorities, vec![2, 3, 4, 5, 6, 7]);
        assert_eq!(
            verdict.recommendations[1].deadline.as_deref(),
            Some("binnen 3 maanden")
        );
    }

    #[test]
    fn test_decision_tables() {
        let cases = [
            ("short", "no", RiskLevel::Low, RiskLevel::Low),
            ("short", "yes", RiskLevel::Medium, RiskLevel::Low),
            ("medium", "unknown", RiskLevel::Medium, RiskLevel::Low),
            ("long", "no", RiskLevel::Medium, RiskLevel::Medium),
            ("unknown", "no", RiskLevel::Medium, RiskLevel::Low),
        ];
        for (duration, complaints, hav_level, wbv_level) in cases {
            let verdict = assess(
                &AnswerSet::new()
                    .with(TYPE, vec!["hav", "wbv"])
                    .with(DURATION, duration)
                    .with(COMPLAINTS, complaints),
            );
            assert_eq!(verdict.findings.len(), 2);
            assert_eq!(verdict.findings[0].level, hav_level, "{duration}/{complaints}");
            assert_eq!(verdict.findings[1].level, wbv_level, "{duration}/{complaints}");
            assert_eq!(verdict.overall_level, hav_level.max(wbv_level));
        }
    }

    #[test]
    fn test_explicit_none_makes_gaps_moot() {
        let verdict = assess(&AnswerSet::new().with(TYPE, vec!["none"]));
        assert_eq!(verdict.findings.len(), 1);
        assert_eq!(verdict.findings[0].topic, "Trillingen");
        assert!(verdict.data_gaps.is_empty());
        assert!(verdict.recommendations.is_empty());
    }

    #[test]
    fn test_malformed_type_reads_as_unknown() {
        for answers in [
            AnswerSet::new().with(TYPE, "hav"),
            AnswerSet::new().with(TYPE, vec!["rocket"]),
        ] {
            let verdict = assess(&answers);
            assert_eq!(verdict.findings[0].topic, "Trillingen");
            assert!(verdict.data_gaps.iter().any(|g| g == GAP_TYPE));
        }
    }

    #[test]
    fn test_wbv_only_has_no_gloves() {
        let verdict = assess(
            &AnswerSet::new()
                .with(TYPE, vec!["wbv"])
                .with(DURATION, "long")
                .with(COMPLAINTS, "no"),
        );
        assert_eq!(verdict.findings[0].topic, "Lichaamstrillingen");
        assert!(verdict
            .recommendations
            .iter()
            .all(|r| r.stage != MitigationStage::PersonalProtection));
    }

    #[test]
    fn test_stale_measurement_result_still_counts() {
        let measured = AnswerSet::new()
            .with(TYPE, vec!["hav"])
            .with(DURATION, "short")
            .with(COMPLAINTS, "no")
            .with(MEASURES, vec!["maintenance"])
            .with(MEASURED, "yes")
            .with(MEASUREMENT_RESULT, "above-limit");

        let verdict = assess(&measured);
        let direct = |v: &Verdict| {
            v.recommendations
                .iter()
                .any(|r| r.deadline.as_deref() == Some("direct"))
        };
        assert!(direct(&verdict));
        assert!(verdict
            .recommendations
            .iter()
            .all(|r| r.stage != MitigationStage::Measurement));

        // The result question is now hidden, but its answer is retained
        let stale = measured.with(MEASURED, "no");
        assert!(!schema()
            .question(MEASUREMENT_RESULT)
            .unwrap()
            .is_visible(&stale));

        let verdict = assess(&stale);
        assert!(direct(&verdict));
        assert!(verdict
            .recommendations
            .iter()
            .any(|r| r.stage == MitigationStage::Measurement));
    }

    #[test]
    fn test_measured_without_result_is_a_gap() {
        let answers = hav_long_with_complaints("none").with(MEASURED, "yes");
        for answers in [answers.clone(), answers.with(MEASUREMENT_RESULT, "unmeasurable")] {
            let verdict = assess(&answers);
            assert_eq!(verdict.data_gaps, vec![GAP_MEASUREMENT_RESULT.to_string()]);
            assert!(verdict
                .recommendations
                .iter()
                .any(|r| r.stage == MitigationStage::Measurement));
        }

        let verdict = assess(
            &hav_long_with_complaints("none")
                .with(MEASURED, "yes")
                .with(MEASUREMENT_RESULT, "below-action"),
        );
        assert!(verdict.data_gaps.is_empty());
        assert!(verdict
            .recommendations
            .iter()
            .all(|r| r.stage != MitigationStage::Measurement));
    }

    #[test]
    fn test_assessment_is_deterministic() {
        let answers = hav_long_with_complaints("none").with(SOURCES, "slijptol");
        assert_eq!(assess(&answers), assess(&answers));
    }

    #[test]
    fn test_findings_cite_limits() {
        let verdict = assess(&hav_long_with_complaints("none"));
        assert_eq!(
            verdict.findings[0].legal_basis.as_deref(),
            Some("Arbobesluit art. 6.11b")
        );
    }
}
