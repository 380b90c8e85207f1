// kenpo-check - checkup eligibility reconciliation
//
// One file:  reservation ledger → insurer eligibility-check submission CSV
// Two files: insurer result + reservation ledger → result workbook

mod check;
mod exit_codes;
mod logging;
mod settings;

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::Parser;
use kenpo_recon::CheckSettings;

use check::RunContext;
use exit_codes::{EXIT_FILE_COUNT, EXIT_IO, EXIT_SUCCESS};

#[derive(Parser)]
#[command(name = "kenpo-check")]
#[command(about = "Build eligibility-check submissions and join insurer results to the reservation ledger")]
#[command(version)]
#[command(after_help = "\
Examples:
  kenpo-check 予約台帳.txt
  kenpo-check 予約台帳.txt 協会けんぽ結果.csv
  kenpo-check --out-dir submit 予約台帳.txt
  kenpo-check --config clinic.toml --log logs/check.log 予約台帳.txt")]
struct Cli {
    /// Reservation ledger (one file), or insurer result and ledger in any order (two files)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Settings file (TOML). Defaults to <config dir>/kenpo-check/config.toml when present
    #[arg(long, env = "KENPO_CHECK_CONFIG")]
    config: Option<PathBuf>,

    /// Append the run log here instead of the configured log file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Directory for the submission CSV (one-file mode)
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Run date used in output file names (YYYY-MM-DD). Defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);
    logging::finish();

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let loaded = settings::load(cli.config.as_deref());

    // Without usable settings the log still goes to --log or the default file
    let log_file = match (&cli.log, &loaded) {
        (Some(path), _) => path.clone(),
        (None, Ok(settings)) => settings.log_file.clone(),
        (None, Err(_)) => CheckSettings::default().log_file,
    };
    logging::init(&log_file).map_err(|message| CliError {
        code: EXIT_IO,
        message,
        hint: None,
    })?;

    let mut settings = loaded.inspect_err(|err| {
        log::error!("{}; aborting", err.message);
    })?;
    settings.log_file = log_file;
    if let Some(dir) = cli.out_dir {
        settings.output_dir = dir;
    }

    log::info!("Start");

    let ctx = RunContext {
        settings: &settings,
        today: cli.date.unwrap_or_else(|| chrono::Local::now().date_naive()),
    };

    let written = match cli.files.as_slice() {
        [input] => check::cmd_submission(input, &ctx)?,
        [first, second] => check::cmd_result_workbook(first, second, &ctx)?,
        files => {
            let message = format!("expected one or two input files, got {}", files.len());
            log::error!("{message}; aborting");
            return Err(CliError {
                code: EXIT_FILE_COUNT,
                message,
                hint: Some("drop the reservation ledger alone, or together with the insurer result".into()),
            });
        }
    };

    eprintln!("wrote {}", written.display());
    log::info!("Finish");
    Ok(())
}
