//! Interactive wizard walk-through

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{self, print_error, print_info, print_success, OutputFormat};
use crate::payload::{self, Payload};
use colored::*;
use dialoguer::{Input, MultiSelect, Select};
use std::path::PathBuf;
use wizard_engine::{Position, ThemeRegistry, WizardSession};
use wizard_types::{AnswerSet, AnswerType, AnswerValue, Question, Theme, Verdict};

/// What the user chose after a step
enum StepAction {
    Next,
    Previous,
    Quit,
}

/// What the user chose on the review screen
enum ReviewAction {
    Finish,
    Back,
    Quit,
}

/// Execute the walk command
pub fn execute(
    registry: &ThemeRegistry,
    config: &CliConfig,
    theme: Theme,
    answers_path: Option<PathBuf>,
    save: Option<PathBuf>,
    format: OutputFormat,
) -> CliResult<()> {
    let answers = match &answers_path {
        Some(path) => payload::load_answers(path)?,
        None => AnswerSet::new(),
    };
    let mut session = registry.resume_session(theme, answers)?;
    payload::report_issues(session.schema(), session.answers());
    let engine = registry.engine(theme);

    println!("{}", session.schema().title.bold());
    if !session.schema().description.is_empty() {
        println!("{}", session.schema().description.dimmed());
    }

    loop {
        match session.position() {
            Position::Step(_) => {
                ask_current_step(&mut session)?;
                match prompt_step_action()? {
                    StepAction::Next => {
                        session.next();
                    }
                    StepAction::Previous => {
                        session.previous();
                    }
                    StepAction::Quit => {
                        print_error("Aborted, answers were not saved");
                        return Ok(());
                    }
                }
            }
            Position::Review => {
                let verdict = engine.as_ref().map(|e| e.assess(session.answers()));
                print_review(&session, verdict.as_ref(), format)?;

                match prompt_review_action()? {
                    ReviewAction::Finish => {
                        finish(config, &session, verdict, save.as_ref())?;
                        return Ok(());
                    }
                    ReviewAction::Back => {
                        session.previous();
                    }
                    ReviewAction::Quit => {
                        print_error("Aborted, answers were not saved");
                        return Ok(());
                    }
                }
            }
        }
    }
}

fn ask_current_step(session: &mut WizardSession) -> CliResult<()> {
    let Some(step) = session.current_step().cloned() else {
        return Ok(());
    };
    let progress = session.progress();

    println!();
    println!(
        "{} {}",
        format!(
            "Stap {}/{}:",
            progress.current_step.unwrap_or(0),
            progress.visible_steps
        )
        .blue()
        .bold(),
        step.title.bold()
    );
    if !step.description.is_empty() {
        println!("{}", step.description.dimmed());
    }

    // Visibility is re-checked per question: an earlier answer in this
    // step may reveal or hide a later one.
    for question in &step.questions {
        if !question.is_visible(session.answers()) {
            continue;
        }
        let current = session.answers().get(&question.id).cloned();
        match prompt_question(question, current.as_ref())? {
            Some(value) => session.answer(question.id.as_str(), value)?,
            None => {
                session.clear(question.id.as_str());
            }
        }
    }
    Ok(())
}

/// Ask one question; `None` means the user left it unanswered
fn prompt_question(
    question: &Question,
    current: Option<&AnswerValue>,
) -> CliResult<Option<AnswerValue>> {
    if let Some(help) = &question.help {
        print_info(help);
    }

    match question.answer_type {
        AnswerType::SingleChoice => {
            let mut items: Vec<&str> = question.options.iter().map(|o| o.label.as_str()).collect();
            items.push(SKIP);
            let default = single_choice_default(question, current);

            let choice = Select::new()
                .with_prompt(&question.label)
                .items(&items)
                .default(default)
                .interact()?;
            Ok(question
                .options
                .get(choice)
                .map(|o| AnswerValue::Single(o.value.clone())))
        }
        AnswerType::MultiChoice => {
            let labels: Vec<&str> = question.options.iter().map(|o| o.label.as_str()).collect();
            let checked: Vec<bool> = question
                .options
                .iter()
                .map(|o| current.is_some_and(|c| c.contains(&o.value)))
                .collect();

            let chosen = MultiSelect::new()
                .with_prompt(&question.label)
                .items(&labels)
                .defaults(&checked)
                .interact()?;
            if chosen.is_empty() {
                return Ok(None);
            }
            Ok(Some(AnswerValue::Multiple(
                chosen
                    .into_iter()
                    .map(|i| question.options[i].value.clone())
                    .collect(),
            )))
        }
        AnswerType::FreeText => {
            let initial = current
                .and_then(AnswerValue::as_single)
                .unwrap_or_default()
                .to_string();
            let text: String = Input::new()
                .with_prompt(&question.label)
                .with_initial_text(initial)
                .allow_empty(true)
                .interact_text()?;
            let text = text.trim();
            Ok((!text.is_empty()).then(|| AnswerValue::Single(text.to_string())))
        }
    }
}

const SKIP: &str = "(overslaan)";

/// Cursor for a single-choice prompt: the current answer, else the skip item
fn single_choice_default(question: &Question, current: Option<&AnswerValue>) -> usize {
    current
        .and_then(AnswerValue::as_single)
        .and_then(|v| question.options.iter().position(|o| o.value == v))
        .unwrap_or(question.options.len())
}

/// Answer as shown on the review screen, using option labels where declared
fn answer_summary(question: &Question, value: &AnswerValue) -> String {
    let label = |v: &str| question.option_label(v).unwrap_or(v).to_string();
    match (value.as_single(), value.as_multiple()) {
        (Some(v), _) => label(v),
        (_, Some(values)) => values
            .iter()
            .map(|v| label(v.as_str()))
            .collect::<Vec<_>>()
            .join(", "),
        _ => "-".to_string(),
    }
}

fn prompt_step_action() -> CliResult<StepAction> {
    let choice = Select::new()
        .with_prompt("Verder")
        .items(&["Volgende stap", "Vorige stap", "Stoppen"])
        .default(0)
        .interact()?;
    Ok(match choice {
        0 => StepAction::Next,
        1 => StepAction::Previous,
        _ => StepAction::Quit,
    })
}

fn prompt_review_action() -> CliResult<ReviewAction> {
    let choice = Select::new()
        .with_prompt("Afronden")
        .items(&["Opslaan en afsluiten", "Terug naar de laatste stap", "Stoppen zonder opslaan"])
        .default(0)
        .interact()?;
    Ok(match choice {
        0 => ReviewAction::Finish,
        1 => ReviewAction::Back,
        _ => ReviewAction::Quit,
    })
}

fn print_review(
    session: &WizardSession,
    verdict: Option<&Verdict>,
    format: OutputFormat,
) -> CliResult<()> {
    let progress = session.progress();
    println!();
    println!(
        "{} {}/{} vragen beantwoord",
        "Overzicht:".bold(),
        progress.answered_questions,
        progress.visible_questions
    );

    for step in session.visible_steps() {
        for question in step.visible_questions(session.answers()) {
            if let Some(value) = session
                .answers()
                .get(&question.id)
                .filter(|v| !v.is_empty())
            {
                println!("  {}: {}", question.label, answer_summary(question, value));
            }
        }
    }
    for question in session.unanswered_questions() {
        output::print_warning(&format!("Niet beantwoord: {}", question.label));
    }

    match verdict {
        Some(verdict) => output::print_verdict(verdict, format)?,
        None => print_info("Voor dit thema is geen risicobeoordeling beschikbaar"),
    }
    Ok(())
}

fn finish(
    config: &CliConfig,
    session: &WizardSession,
    verdict: Option<Verdict>,
    save: Option<&PathBuf>,
) -> CliResult<()> {
    let Some(path) = save else {
        print_success("Wizard afgerond");
        return Ok(());
    };

    let path = config.resolve_save_path(path);
    Payload {
        theme: session.theme(),
        answers: session.answers().clone(),
        verdict,
    }
    .save(&path)?;
    print_success(&format!("Saved payload to {}", path.display()));
    Ok(())
}
