use std::process::ExitCode;

use clap::{CommandFactory, Parser};

mod commands;
mod printer;

use commands::ScanArgs;
use dirstamp_runtime::{PROGRAM_NAME, logging};

#[derive(Debug, Parser)]
#[command(
    name = PROGRAM_NAME,
    version,
    about = "Latest file timestamps and file counts for every folder in a tree"
)]
pub struct Cli {
    #[command(flatten)]
    pub scan: ScanArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_with_verbosity(cli.scan.verbose).ok();

    match cli.scan.path.as_deref() {
        Some(path) => commands::scan::run(path, &cli.scan),
        None => {
            // Running with no target is a usage error, not a help request.
            if let Err(e) = Cli::command().print_help() {
                eprintln!("[error] {e}");
            }
            println!();
            ExitCode::from(1)
        }
    }
}
