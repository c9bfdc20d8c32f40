//! Biological agents ("Biologische agentia"): inventory only

use wizard_types::{Condition, Question, Step, Theme, WizardSchema};

pub const PRESENT: &str = "bio-present";
pub const SOURCES: &str = "bio-sources";
pub const RISK_GROUP: &str = "bio-risk-group";
pub const VACCINATION: &str = "bio-vaccination";
pub const NOTES: &str = "bio-notes";

pub fn schema() -> WizardSchema {
    WizardSchema::new(Theme::BiologicalAgents, "Biologische agentia")
        .with_description("Inventarisatie van contact met micro-organismen en allergenen")
        .with_step(
            Step::new("bio-exposure", "Blootstelling")
                .with_question(
                    Question::single(PRESENT, "Is er contact met biologische agentia?")
                        .with_option("yes", "Ja")
                        .with_option("no", "Nee")
                        .with_option("unknown", "Weet ik niet"),
                )
                .with_question(
                    Question::multi(SOURCES, "Waar komt het contact vandaan?")
                        .visible_when(Condition::equals(PRESENT, "yes"))
                        .with_option("patients", "Patiënten of cliënten")
                        .with_option("animals", "Dieren of dierlijke producten")
                        .with_option("waste", "Afval of afvalwater")
                        .with_option("laboratory", "Laboratoriumwerk")
                        .with_option("mould", "Schimmels of stof"),
                ),
        )
        .with_step(
            Step::new("bio-classification", "Indeling en bescherming")
                .visible_when(Condition::equals(PRESENT, "yes"))
                .with_question(
                    Question::single(RISK_GROUP, "Hoogste risicogroep van de agentia")
                        .with_option("1", "Groep 1")
                        .with_option("2", "Groep 2")
                        .with_option("3", "Groep 3")
                        .with_option("4", "Groep 4")
                        .with_option("unknown", "Weet ik niet"),
                )
                .with_question(
                    Question::single(VACCINATION, "Wordt vaccinatie aangeboden?")
                        .with_option("yes", "Ja")
                        .with_option("no", "Nee")
                        .with_option("not-applicable", "Niet van toepassing"),
                )
                .with_question(
                    Question::text(NOTES, "Toelichting")
                        .with_placeholder("Bijv. werkzaamheden met verhoogd besmettingsrisico"),
                ),
        )
}
