//! Schema inspection

use crate::error::CliResult;
use crate::output::{self, OutputFormat};
use serde::Serialize;
use tabled::Tabled;
use wizard_engine::ThemeRegistry;
use wizard_types::{AnswerType, Theme, WizardError, WizardSchema};

/// Table row for question display
#[derive(Debug, Serialize, Tabled)]
struct QuestionRow {
    step: String,
    question: String,
    #[tabled(rename = "type")]
    answer_type: String,
    options: String,
    conditional: String,
}

fn answer_type_label(answer_type: AnswerType) -> &'static str {
    match answer_type {
        AnswerType::SingleChoice => "single",
        AnswerType::MultiChoice => "multi",
        AnswerType::FreeText => "text",
    }
}

fn rows(schema: &WizardSchema) -> Vec<QuestionRow> {
    schema
        .steps
        .iter()
        .flat_map(|step| {
            step.questions.iter().map(move |q| QuestionRow {
                step: step.id.to_string(),
                question: q.id.to_string(),
                answer_type: answer_type_label(q.answer_type).to_string(),
                options: q
                    .options
                    .iter()
                    .map(|o| o.value.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
                conditional: if step.visible_when.is_some() || q.visible_when.is_some() {
                    "yes".to_string()
                } else {
                    String::new()
                },
            })
        })
        .collect()
}

/// Execute the schema command
pub fn execute(registry: &ThemeRegistry, theme: Theme, format: OutputFormat) -> CliResult<()> {
    let schema = registry
        .schema(theme)
        .ok_or(WizardError::ThemeNotFound(theme))?;

    match format {
        OutputFormat::Table => {
            println!("{} ({})", schema.title, theme);
            if !schema.description.is_empty() {
                println!("{}", schema.description);
            }
            output::print_output(rows(&schema), format)
        }
        OutputFormat::Json | OutputFormat::Yaml => output::print_single(&*schema, format),
    }
}
