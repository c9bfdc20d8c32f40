//! Sound ("Geluid"): schema and rule-based engine
//!
//! Sub-topics are continuous noise ("Lawaai") and impulse noise
//! ("Impulsgeluid"). Without a sound level meter the wizard asks for a
//! speech-based indication: a raised voice at one metre suggests roughly
//! 80 dB(A), shouting roughly 85 dB(A) or more.
//!
//! | Lawaai   | short  | medium | long   | unknown |
//! |----------|--------|--------|--------|---------|
//! | raised   | low    | medium | medium | medium  |
//! | shouting | medium | high   | high   | high    |
//!
//! Reported hearing complaints raise the Lawaai level by one step. Impulse
//! noise is medium, high with complaints.

use super::{DurationBand, MeasureState, Tristate};
use crate::engine::{unranked, RiskEngine, VerdictBuilder};
use crate::legal;
use wizard_types::{
    AnswerSet, Condition, Finding, MitigationStage, Question, RiskLevel, Step, Theme, Verdict,
    WizardSchema,
};

pub const LEVEL: &str = "snd-level";
pub const IMPULSE: &str = "snd-impulse";
pub const SOURCES: &str = "snd-sources";
pub const DURATION: &str = "snd-duration";
pub const COMPLAINTS: &str = "snd-complaints";
pub const MEASURES: &str = "snd-measures-existing";
pub const MEASURED: &str = "snd-measured";

const RECOGNIZED_MEASURES: &[&str] = &[
    "quieter-equipment",
    "enclosure",
    "hearing-protection",
    "quiet-areas",
];

const GAP_LEVEL: &str = "Indicatie van het geluidsniveau ontbreekt";
const GAP_IMPULSE: &str = "Onbekend of er impulsgeluid voorkomt";
const GAP_DURATION: &str = "Blootstellingsduur per dag is onbekend of niet ingevuld";
const GAP_COMPLAINTS: &str = "Onbekend of er gehoorklachten zijn";
const GAP_MEASURES: &str = "Bestaande maatregelen zijn niet ingevuld";
const GAP_MEASURED: &str = "Onbekend of er een geluidsmeting is gedaan";

/// Speech-based level indication
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NoiseIndication {
    Normal,
    Raised,
    Shouting,
    Unknown,
}

impl NoiseIndication {
    fn read(answers: &AnswerSet) -> Self {
        match answers.single(LEVEL) {
            Some("normal") => NoiseIndication::Normal,
            Some("raised") => NoiseIndication::Raised,
            Some("shouting") => NoiseIndication::Shouting,
            _ => NoiseIndication::Unknown,
        }
    }

    /// Lawaai level before complaints; `None` when no finding applies
    fn level(self, duration: DurationBand) -> Option<RiskLevel> {
        use wizard_types::RiskLevel::{High, Low, Medium};
        let level = match (self, duration) {
            (NoiseIndication::Raised, DurationBand::Short) => Low,
            (NoiseIndication::Raised, _) => Medium,
            (NoiseIndication::Shouting, DurationBand::Short) => Medium,
            (NoiseIndication::Shouting, _) => High,
            (NoiseIndication::Normal | NoiseIndication::Unknown, _) => return None,
        };
        Some(level)
    }
}

/// One step up the scale, capped at critical
fn escalate(level: RiskLevel) -> RiskLevel {
    match level {
        RiskLevel::Unknown => RiskLevel::Low,
        RiskLevel::Low => RiskLevel::Medium,
        RiskLevel::Medium => RiskLevel::High,
        RiskLevel::High | RiskLevel::Critical => RiskLevel::Critical,
    }
}

/// The sound questionnaire
pub fn schema() -> WizardSchema {
    let exposed = || {
        Condition::any(vec![
            Condition::any_of(LEVEL, ["raised", "shouting"]),
            Condition::equals(IMPULSE, "yes"),
        ])
    };

    WizardSchema::new(Theme::Sound, "Geluid")
        .with_description("Inventarisatie van blootstelling aan lawaai en impulsgeluid")
        .with_step(
            Step::new("snd-exposure", "Geluidsniveau")
                .with_question(
                    Question::single(LEVEL, "Hoe moet er op 1 meter afstand gesproken worden?")
                        .with_help("Verheffen wijst op ongeveer 80 dB(A), schreeuwen op 85 dB(A) of meer")
                        .with_option("normal", "Normaal spreken is verstaanbaar")
                        .with_option("raised", "Stem verheffen")
                        .with_option("shouting", "Schreeuwen")
                        .with_option("unknown", "Weet ik niet"),
                )
                .with_question(
                    Question::single(IMPULSE, "Komen knallen of slaggeluiden voor?")
                        .with_option("yes", "Ja")
                        .with_option("no", "Nee")
                        .with_option("unknown", "Weet ik niet"),
                )
                .with_question(
                    Question::text(SOURCES, "Geluidsbronnen")
                        .with_placeholder("Bijv. compressor, zaagmachine, pers")
                        .visible_when(exposed()),
                ),
        )
        .with_step(
            Step::new("snd-duration", "Duur en klachten")
                .visible_when(exposed())
                .with_question(
                    Question::single(DURATION, "Hoe lang per dag wordt er blootgesteld?")
                        .with_option("short", "Korter dan 1 uur")
                        .with_option("medium", "1 tot 4 uur")
                        .with_option("long", "Langer dan 4 uur")
                        .with_option("unknown", "Weet ik niet"),
                )
                .with_question(
                    Question::single(COMPLAINTS, "Zijn er gehoorklachten of oorsuizen?")
                        .with_option("yes", "Ja")
                        .with_option("no", "Nee")
                        .with_option("unknown", "Weet ik niet"),
                ),
        )
        .with_step(
            Step::new("snd-measures", "Maatregelen en metingen")
                .visible_when(exposed())
                .with_question(
                    Question::multi(MEASURES, "Welke maatregelen zijn al genomen?")
                        .with_option("none", "Nog geen maatregelen")
                        .with_option("quieter-equipment", "Stillere machines")
                        .with_option("enclosure", "Omkasting of afscherming")
                        .with_option("hearing-protection", "Gehoorbescherming")
                        .with_option("quiet-areas", "Stille pauzeruimtes"),
                )
                .with_question(
                    Question::single(MEASURED, "Is er een geluidsmeting gedaan (Lex,8h)?")
                        .with_option("yes", "Ja")
                        .with_option("no", "Nee")
                        .with_option("unknown", "Weet ik niet"),
                ),
        )
}

/// Rule-based noise risk engine
#[derive(Debug, Default)]
pub struct SoundEngine;

impl SoundEngine {
    pub fn new() -> Self {
        Self
    }
}

impl RiskEngine for SoundEngine {
    fn theme(&self) -> Theme {
        Theme::Sound
    }

    fn name(&self) -> &str {
        "sound-rules"
    }

    fn assess(&self, answers: &AnswerSet) -> Verdict {
        let mut verdict = VerdictBuilder::new(Theme::Sound);

        let indication = NoiseIndication::read(answers);
        let impulse = Tristate::read(answers, IMPULSE);
        let duration = DurationBand::read(answers, DURATION);
        let complaints = Tristate::read(answers, COMPLAINTS);
        let measures = MeasureState::read(answers, MEASURES, RECOGNIZED_MEASURES);
        let measured = Tristate::read(answers, MEASURED);

        let noise = indication.level(duration).map(|level| {
            if complaints == Tristate::Yes {
                escalate(level)
            } else {
                level
            }
        });
        let exposed = noise.is_some() || impulse == Tristate::Yes;
        let relevant =
            exposed || indication == NoiseIndication::Unknown || impulse == Tristate::Unknown;

        if indication == NoiseIndication::Unknown {
            verdict.gap(GAP_LEVEL);
        }
        if impulse == Tristate::Unknown {
            verdict.gap(GAP_IMPULSE);
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
        }

        if let Some(level) = noise {
            verdict.finding(
                Finding::new(
                    "Lawaai",
                    level,
                    format!("Blootstelling aan lawaai, {}", duration.label()),
                )
                .with_legal_basis(legal::NOISE_LIMITS.citation),
            );
        }
        if impulse == Tristate::Yes {
            let level = if complaints == Tristate::Yes {
                RiskLevel::High
            } else {
                RiskLevel::Medium
            };
            verdict.finding(
                Finding::new("Impulsgeluid", level, "Er komen knallen of slaggeluiden voor")
                    .with_detail("Piekgeluid kan ook bij korte blootstelling gehoorschade geven")
                    .with_legal_basis(legal::NOISE_LIMITS.citation),
            );
        }
        if !verdict.has_findings() {
            verdict.finding(Finding::new(
                "Geluid",
                RiskLevel::Low,
                "Geen aanwijzingen voor schadelijke blootstelling aan geluid",
            ));
        }

        if exposed {
            recommend(&mut verdict, duration, complaints, measured);
        }

        verdict.build(measures == MeasureState::NoneYet)
    }
}

fn recommend(
    verdict: &mut VerdictBuilder,
    duration: DurationBand,
    complaints: Tristate,
    measured: Tristate,
) {
    let level = verdict.level();

    if level >= RiskLevel::Medium {
        verdict.recommend(
            unranked(
                MitigationStage::Elimination,
                "Vervang of verplaats lawaaiige bronnen en kies stillere werkmethoden",
                "Bronaanpak gaat voor alle andere maatregelen",
            )
            .with_legal_basis(legal::OCCUPATIONAL_HYGIENE_STRATEGY.citation),
        );
    }

    if measured != Tristate::Yes {
        let mut measurement = unranked(
            MitigationStage::Measurement,
            "Laat een geluidsmeting uitvoeren (Lex,8h en piekniveau)",
            "Zonder meting is niet vast te stellen of actiewaarden worden overschreden",
        )
        .with_legal_basis(legal::NOISE_ASSESSMENT.citation);
        if level >= RiskLevel::High {
            measurement = measurement.with_deadline("binnen 3 maanden");
        }
        verdict.recommend(measurement);
    }

    verdict.recommend(
        unranked(
            MitigationStage::Technical,
            "Pas omkasting, demping of geluidsabsorberende materialen toe",
            "Technische maatregelen verlagen het geluid voor iedereen in de ruimte",
        )
        .with_legal_basis(legal::NOISE_MEASURES.citation),
    );

    if duration.is_prolonged() {
        verdict.recommend(
            unranked(
                MitigationStage::Organisational,
                "Beperk de verblijfsduur in lawaaiige zones en markeer deze zones",
                "De blootstelling duurt een groot deel van de werkdag",
            )
            .with_legal_basis(legal::NOISE_MEASURES.citation),
        );
    }

    verdict.recommend(
        unranked(
            MitigationStage::PersonalProtection,
            "Stel passende gehoorbescherming beschikbaar en zie toe op het dragen ervan",
            "Gehoorbescherming is verplicht boven de bovenste actiewaarde",
        )
        .with_legal_basis(legal::NOISE_PROTECTION.citation),
    );

    if complaints == Tristate::Yes || level >= RiskLevel::High {
        verdict.recommend(
            unranked(
                MitigationStage::HealthSurveillance,
                "Bied audiometrisch onderzoek aan",
                "Gehoorschade is onomkeerbaar en moet vroeg worden gesignaleerd",
            )
            .with_legal_basis(legal::NOISE_HEALTH.citation),
        );
    }
}
