//! Physical load ("Fysieke belasting"): inventory only

use wizard_types::{Condition, Question, Step, Theme, WizardSchema};

pub const ACTIVITIES: &str = "phl-activities";
pub const FREQUENCY: &str = "phl-frequency";
pub const AIDS: &str = "phl-aids";
pub const COMPLAINTS: &str = "phl-complaints";

pub fn schema() -> WizardSchema {
    let loaded = || Condition::none_of(ACTIVITIES, ["none"]);

    WizardSchema::new(Theme::PhysicalLoad, "Fysieke belasting")
        .with_description("Inventarisatie van tillen, duwen en trekken, repeterend werk en houding")
        .with_step(
            Step::new("phl-activities", "Werkzaamheden").with_question(
                Question::multi(ACTIVITIES, "Welke belastende werkzaamheden komen voor?")
                    .with_option("lifting", "Tillen en dragen")
                    .with_option("pushing", "Duwen en trekken")
                    .with_option("repetitive", "Repeterende bewegingen")
                    .with_option("posture", "Ongunstige werkhouding")
                    .with_option("standing", "Langdurig staan")
                    .with_option("none", "Geen van deze"),
            ),
        )
        .with_step(
            Step::new("phl-details", "Frequentie en hulpmiddelen")
                .visible_when(loaded())
                .with_question(
                    Question::single(FREQUENCY, "Hoe vaak per dag?")
                        .with_option("occasional", "Incidenteel")
                        .with_option("regular", "Meerdere keren per uur")
                        .with_option("continuous", "Vrijwel continu"),
                )
                .with_question(
                    Question::multi(AIDS, "Welke hulpmiddelen zijn beschikbaar?")
                        .with_option("none", "Geen")
                        .with_option("lifting-aids", "Tilhulpmiddelen")
                        .with_option("adjustable", "Verstelbare werkplekken")
                        .with_option("rotation", "Taakroulatie"),
                )
                .with_question(
                    Question::single(COMPLAINTS, "Zijn er klachten aan rug, nek of schouders?")
                        .with_option("yes", "Ja")
                        .with_option("no", "Nee")
                        .with_option("unknown", "Weet ik niet"),
                ),
        )
}
