//! Climate ("Klimaat"): inventory only
//!
//! Heat stress would normally be quantified as WBGT; the wizard only records
//! indications.

use wizard_types::{Condition, Question, Step, Theme, WizardSchema};

pub const CONDITIONS: &str = "clm-conditions";
pub const HEAT_SOURCES: &str = "clm-heat-sources";
pub const CLOTHING: &str = "clm-clothing";
pub const MEASURES: &str = "clm-measures";

pub fn schema() -> WizardSchema {
    WizardSchema::new(Theme::Climate, "Klimaat")
        .with_description("Inventarisatie van hitte, koude en binnenklimaat")
        .with_step(
            Step::new("clm-conditions", "Omstandigheden")
                .with_question(
                    Question::multi(CONDITIONS, "Welke klimaatomstandigheden komen voor?")
                        .with_option("heat", "Hitte")
                        .with_option("cold", "Koude")
                        .with_option("draught", "Tocht")
                        .with_option("humidity", "Hoge of lage luchtvochtigheid")
                        .with_option("none", "Geen bijzonderheden"),
                )
                .with_question(
                    Question::text(HEAT_SOURCES, "Warmtebronnen")
                        .with_placeholder("Bijv. ovens, zoninstraling, persen")
                        .visible_when(Condition::equals(CONDITIONS, "heat")),
                ),
        )
        .with_step(
            Step::new("clm-measures", "Kleding en maatregelen")
                .visible_when(Condition::none_of(CONDITIONS, ["none"]))
                .with_question(
                    Question::single(CLOTHING, "Is beschermende kleding nodig?")
                        .with_option("yes", "Ja")
                        .with_option("no", "Nee"),
                )
                .with_question(
                    Question::multi(MEASURES, "Welke maatregelen zijn al genomen?")
                        .with_option("none", "Nog geen maatregelen")
                        .with_option("ventilation", "Ventilatie of airconditioning")
                        .with_option("shielding", "Afscherming van warmtebronnen")
                        .with_option("breaks", "Extra pauzes en drinkwater"),
                ),
        )
}
