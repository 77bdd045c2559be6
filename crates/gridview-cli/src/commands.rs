use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use gridview_core::{TableController, ViewOptions};
use gridview_model::{PaymentStatus, TaskStatus};
use tracing::{info, info_span};

use gridview_cli::config::load_config;
use gridview_cli::mockdata::{generate_payments, generate_tasks};
use gridview_cli::render::{TableRow, render_statuses};
use gridview_cli::session::{SessionOptions, SessionSummary, run_session};

use crate::cli::{BrowseArgs, DatasetArg, StatusesArgs};

pub fn run_statuses(args: &StatusesArgs, styled: bool) -> Result<()> {
    let table = match args.dataset {
        DatasetArg::Payments => render_statuses::<PaymentStatus>(styled),
        DatasetArg::Tasks => render_statuses::<TaskStatus>(styled),
    };
    println!("{table}");
    Ok(())
}

pub fn run_browse(args: &BrowseArgs, styled: bool) -> Result<SessionSummary> {
    let config = load_config(args.config.as_deref())?.with_page_size_override(args.page_size);
    let options = SessionOptions {
        json: args.json,
        styled,
        confirm_deletes: config.confirm_deletes,
    };
    let span = info_span!("browse", records = args.records, seed = args.seed);
    let _guard = span.enter();
    match args.dataset {
        DatasetArg::Payments => {
            let records = generate_payments(args.records, args.seed);
            browse(records, config.view, args, options)
        }
        DatasetArg::Tasks => {
            let records = generate_tasks(args.records, args.seed);
            browse(records, config.view, args, options)
        }
    }
}

fn browse<R: TableRow>(
    records: Vec<R>,
    view: ViewOptions,
    args: &BrowseArgs,
    options: SessionOptions,
) -> Result<SessionSummary> {
    info!(count = records.len(), "generated records");
    let mut controller =
        TableController::with_options(records, view).context("invalid view options")?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &args.script {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("open script {}", path.display()))?;
            run_session(&mut controller, BufReader::new(file), &mut out, options)
        }
        None => run_session(&mut controller, io::stdin().lock(), &mut out, options),
    }
}
