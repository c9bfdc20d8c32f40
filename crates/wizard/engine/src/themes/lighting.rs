//! Lighting ("Verlichting"): inventory only

use wizard_types::{Condition, Question, Step, Theme, WizardSchema};

pub const ADEQUATE: &str = "lgt-adequate";
pub const PROBLEMS: &str = "lgt-problems";
pub const DAYLIGHT: &str = "lgt-daylight";

pub fn schema() -> WizardSchema {
    WizardSchema::new(Theme::Lighting, "Verlichting")
        .with_description("Inventarisatie van verlichtingsniveau, verblinding en daglicht")
        .with_step(
            Step::new("lgt-general", "Algemeen")
                .with_question(
                    Question::single(ADEQUATE, "Is de verlichting voldoende voor het werk?")
                        .with_option("yes", "Ja")
                        .with_option("no", "Nee")
                        .with_option("unknown", "Weet ik niet"),
                )
                .with_question(
                    Question::single(DAYLIGHT, "Is er voldoende daglicht en uitzicht?")
                        .with_option("yes", "Ja")
                        .with_option("no", "Nee"),
                ),
        )
        .with_step(
            Step::new("lgt-problems", "Knelpunten")
                .visible_when(Condition::equals(ADEQUATE, "no"))
                .with_question(
                    Question::multi(PROBLEMS, "Welke knelpunten zijn er?")
                        .with_option("too-dark", "Te donker")
                        .with_option("glare", "Verblinding of schittering")
                        .with_option("flicker", "Flikkering")
                        .with_option("contrast", "Te weinig contrast"),
                ),
        )
}
