use std::{io, path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use sdlxliff::{load_file, report_with, write_report, DecoderConfig, Error, ReportOptions};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// SDLXLIFF file to read
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Print each trans-unit's sources and targets together instead of
    /// merging all of a group's units
    #[arg(long)]
    all_units: bool,

    /// Print one target line per nested g element, like the source side
    #[arg(long)]
    expand_target_groups: bool,

    /// Print errors to stdout and exit with status 0, like the original tool
    #[arg(long)]
    legacy_exit: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(&e, args.legacy_exit),
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let doc = load_file(&args.file, &DecoderConfig::default())?;

    let options = ReportOptions {
        per_unit: args.all_units,
        expand_target_groups: args.expand_target_groups,
    };
    let lines = report_with(&doc, &options);

    // A closed stdout is not worth a diagnostic
    if let Err(e) = write_report(&lines, io::stdout().lock()) {
        error!("failed to write report: {}", e);
    }
    Ok(())
}

#[allow(clippy::print_stderr)]
fn fail(err: &Error, legacy: bool) -> ExitCode {
    let prefix = match err {
        Error::FileRead { .. } => "File reading error",
        Error::Parse(_) => "XML Unmarshal error",
    };
    let message = format!("{prefix} {err}");

    if legacy {
        println!("{message}");
        return ExitCode::SUCCESS;
    }

    eprintln!("{message}");
    ExitCode::FAILURE
}
