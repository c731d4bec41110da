use std::{io::Stdout, path::Path, process::ExitCode};

use anyhow::Result;
use clap::Args;
use dirstamp_fs::{FsStat, ScanContext, ScanSummary, resolve_target, scan};
use log::info;

use crate::commands::ScanArgs;
use crate::printer::{JsonPrinter, ReportContext, ReportPrinter, TablePrinter};

#[derive(Debug, Args)]
pub struct OutputOptions {
    /// Output one JSON object per folder (NDJSON) instead of a table
    #[arg(long)]
    pub json: bool,
}

impl OutputOptions {
    /// Create a printer based on the output options.
    pub fn make_printer(&self) -> Box<dyn ReportPrinter> {
        if self.json {
            Box::new(JsonPrinter::<Stdout>::stdout())
        } else {
            Box::new(TablePrinter::<Stdout>::stdout())
        }
    }
}

pub fn run(path: &Path, args: &ScanArgs) -> ExitCode {
    match execute(path, args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[error] {e}");
            ExitCode::from(1)
        }
    }
}

fn execute(path: &Path, args: &ScanArgs) -> Result<ExitCode> {
    let root = resolve_target(path)?;

    let ctx = ScanContext {
        stat: FsStat,
        sort_entries: !args.unsorted,
    };

    info!("[scan] scanning {}", root.display());
    let records = scan(&root, &ctx);
    let summary = ScanSummary::from_records(&records);
    info!(
        "[scan] {} folders, {} files",
        summary.folders, summary.files
    );

    let report = ReportContext {
        root: &root,
        summary,
    };

    let mut printer = args.output.make_printer();

    printer.begin(&report)?;

    for record in &records {
        printer.print_row(record, &report)?;
    }

    printer.finish(&report)?;

    Ok(ExitCode::SUCCESS)
}
