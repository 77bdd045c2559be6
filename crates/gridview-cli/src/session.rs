//! The browse session loop: read a line, apply it, re-render.
//!
//! Recoverable view errors and malformed lines are reported as notices and
//! the session keeps going. Only I/O failures end it early.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use gridview_core::{CommandOutcome, PageJump, TableController, ViewCommand, ViewSnapshot};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::render::{TableRow, bulk_notice, render_page};
use crate::script::{CONFIRM_FLAG, ScriptLine, parse_line};

/// How a session renders and which guards it applies.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Emit one JSON object per step instead of a table.
    pub json: bool,
    /// Allow ANSI styling in rendered tables.
    pub styled: bool,
    /// Refuse a bare `delete`; require `delete --yes`.
    pub confirm_deletes: bool,
}

/// Counters for a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    /// Lines that carried a command (comments and blanks excluded).
    pub commands: usize,
    /// Commands that were rejected or could not be parsed.
    pub rejected: usize,
    /// Committed bulk actions.
    pub bulk_actions: usize,
}

/// One step of a JSON session transcript.
#[derive(Debug, Serialize)]
pub struct SessionStep<'a> {
    pub line: usize,
    pub input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<&'a CommandOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<&'a str>,
    pub view: ViewSnapshot,
}

enum Step {
    Applied(CommandOutcome),
    Rejected(String),
    Show,
}

/// Run commands from `input` against `controller`, writing each rendered
/// view to `out`.
pub fn run_session<R, I, O>(
    controller: &mut TableController<R>,
    input: I,
    out: &mut O,
    options: SessionOptions,
) -> Result<SessionSummary>
where
    R: TableRow,
    I: BufRead,
    O: Write,
{
    let mut summary = SessionSummary::default();
    emit(controller, out, options, 0, "", None, None)?;

    for (index, line) in input.lines().enumerate() {
        let line = line.context("read command")?;
        let number = index + 1;
        let parsed = match parse_line(&line) {
            Ok(None) => continue,
            Ok(Some(ScriptLine::Quit)) => {
                debug!(line = number, "quit");
                break;
            }
            Ok(Some(parsed)) => parsed,
            Err(err) => {
                summary.commands += 1;
                summary.rejected += 1;
                warn!(line = number, error = %err, "unparseable command");
                let notice = format!("line {number}: {err}");
                emit(controller, out, options, number, &line, None, Some(&notice))?;
                continue;
            }
        };
        summary.commands += 1;

        match apply(controller, parsed, options) {
            Step::Applied(outcome) => {
                let notice = outcome_notice::<R>(&outcome);
                if matches!(outcome, CommandOutcome::Bulk { .. }) {
                    summary.bulk_actions += 1;
                }
                emit(
                    controller,
                    out,
                    options,
                    number,
                    &line,
                    Some(&outcome),
                    notice.as_deref(),
                )?;
            }
            Step::Rejected(notice) => {
                summary.rejected += 1;
                emit(controller, out, options, number, &line, None, Some(&notice))?;
            }
            Step::Show => emit(controller, out, options, number, &line, None, None)?,
        }
    }

    info!(
        commands = summary.commands,
        rejected = summary.rejected,
        bulk_actions = summary.bulk_actions,
        "session finished"
    );
    Ok(summary)
}

fn apply<R: TableRow>(
    controller: &mut TableController<R>,
    line: ScriptLine,
    options: SessionOptions,
) -> Step {
    let command = match line {
        ScriptLine::Command(command) => command,
        ScriptLine::Delete { confirmed } => {
            if options.confirm_deletes && !confirmed {
                return Step::Rejected(format!(
                    "delete needs confirmation: run `delete {CONFIRM_FLAG}`"
                ));
            }
            ViewCommand::ApplyDelete
        }
        ScriptLine::Show | ScriptLine::Quit => return Step::Show,
    };
    match controller.dispatch(command) {
        Ok(outcome) => Step::Applied(outcome),
        Err(err) => Step::Rejected(err.to_string()),
    }
}

fn outcome_notice<R: TableRow>(outcome: &CommandOutcome) -> Option<String> {
    match outcome {
        CommandOutcome::PageJump {
            jump:
                PageJump::Reverted {
                    page_index,
                    requested,
                },
        } => Some(match requested {
            Some(page) => format!(
                "page {page} does not exist; staying on page {}",
                page_index + 1
            ),
            None => format!("no page number entered; staying on page {}", page_index + 1),
        }),
        CommandOutcome::Bulk { report } => Some(bulk_notice::<R>(report)),
        _ => None,
    }
}

fn emit<R: TableRow, O: Write>(
    controller: &TableController<R>,
    out: &mut O,
    options: SessionOptions,
    line: usize,
    input: &str,
    outcome: Option<&CommandOutcome>,
    notice: Option<&str>,
) -> Result<()> {
    if options.json {
        let step = SessionStep {
            line,
            input: input.trim(),
            outcome,
            notice,
            view: controller.snapshot(),
        };
        serde_json::to_writer(&mut *out, &step).context("write view snapshot")?;
        writeln!(out).context("write view snapshot")?;
    } else {
        if !input.is_empty() {
            writeln!(out, "> {}", input.trim()).context("write view")?;
        }
        if let Some(notice) = notice {
            writeln!(out, "{notice}").context("write view")?;
        }
        writeln!(out, "{}", render_page(controller, options.styled)).context("write view")?;
    }
    Ok(())
}
