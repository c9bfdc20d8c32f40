//! Legal clauses and abbreviations used in reports and questionnaires

use crate::error::{CliError, CliResult};
use crate::output::{self, OutputFormat};
use serde::Serialize;
use tabled::Tabled;
use wizard_engine::legal;

/// Table row for one glossary entry
#[derive(Debug, Serialize, Tabled)]
struct GlossaryRow {
    #[tabled(rename = "Term")]
    term: String,
    #[tabled(rename = "Betekenis")]
    meaning: String,
}

fn clause_row(clause: &legal::LegalClause) -> GlossaryRow {
    GlossaryRow {
        term: clause.key.to_string(),
        meaning: format!("{}: {}", clause.citation, clause.subject),
    }
}

fn rows(term: Option<&str>) -> CliResult<Vec<GlossaryRow>> {
    let Some(term) = term else {
        let abbreviations = legal::ABBREVIATIONS.iter().map(|(abbr, meaning)| GlossaryRow {
            term: abbr.to_string(),
            meaning: meaning.to_string(),
        });
        return Ok(abbreviations
            .chain(legal::CLAUSES.iter().map(clause_row))
            .collect());
    };

    if let Some(meaning) = legal::abbreviation(term) {
        return Ok(vec![GlossaryRow {
            term: term.to_string(),
            meaning: meaning.to_string(),
        }]);
    }
    legal::citation(term)
        .map(|clause| vec![clause_row(clause)])
        .ok_or_else(|| CliError::InvalidInput(format!("Unknown term: {}", term)))
}

/// Execute the glossary command
pub fn execute(term: Option<&str>, format: OutputFormat) -> CliResult<()> {
    output::print_output(rows(term)?, format)
}
