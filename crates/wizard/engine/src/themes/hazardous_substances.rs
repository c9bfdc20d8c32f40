//! Hazardous substances ("Gevaarlijke stoffen"): inventory only

use wizard_types::{Condition, Question, Step, Theme, WizardSchema};

pub const PRESENT: &str = "sub-present";
pub const CATEGORIES: &str = "sub-categories";
pub const REGISTER: &str = "sub-register";
pub const SAFETY_SHEETS: &str = "sub-safety-sheets";
pub const NOTES: &str = "sub-notes";

pub fn schema() -> WizardSchema {
    let present = || Condition::equals(PRESENT, "yes");

    WizardSchema::new(Theme::HazardousSubstances, "Gevaarlijke stoffen")
        .with_description("Inventarisatie van het werken met gevaarlijke stoffen")
        .with_step(
            Step::new("sub-inventory", "Stoffen")
                .with_question(
                    Question::single(PRESENT, "Wordt er met gevaarlijke stoffen gewerkt?")
                        .with_option("yes", "Ja")
                        .with_option("no", "Nee")
                        .with_option("unknown", "Weet ik niet"),
                )
                .with_question(
                    Question::multi(CATEGORIES, "Om welke soorten stoffen gaat het?")
                        .visible_when(present())
                        .with_option("cmr", "Kankerverwekkend of reprotoxisch (CMR)")
                        .with_option("solvents", "Oplosmiddelen")
                        .with_option("dust", "Stof, rook of damp")
                        .with_option("corrosive", "Bijtende stoffen")
                        .with_option("flammable", "Brandbare stoffen"),
                ),
        )
        .with_step(
            Step::new("sub-administration", "Registratie")
                .visible_when(present())
                .with_question(
                    Question::single(REGISTER, "Is er een actueel stoffenregister?")
                        .with_option("yes", "Ja")
                        .with_option("no", "Nee"),
                )
                .with_question(
                    Question::single(SAFETY_SHEETS, "Zijn veiligheidsinformatiebladen beschikbaar?")
                        .with_option("yes", "Ja")
                        .with_option("partly", "Gedeeltelijk")
                        .with_option("no", "Nee"),
                )
                .with_question(Question::text(NOTES, "Toelichting")),
        )
}
