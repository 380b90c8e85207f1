//! The two run modes: submission export (one file) and result join (two files).

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use kenpo_io::{csv, text, xlsx, INSURER_DELIMITER, LEDGER_DELIMITER};
use kenpo_recon::{CheckError, CheckSettings, RawTable};

use crate::exit_codes::{check_exit_code, EXIT_IO};
use crate::CliError;

/// Where and for which day a run writes its output.
pub struct RunContext<'a> {
    pub settings: &'a CheckSettings,
    pub today: NaiveDate,
}

fn io_err(msg: impl Into<String>) -> CliError {
    let message = msg.into();
    log::error!("{message}");
    CliError { code: EXIT_IO, message, hint: None }
}

/// Log each missing column on its own line, then the abort notice.
fn check_err(err: CheckError, source: &Path) -> CliError {
    for field in err.missing_fields() {
        log::error!("{}: required column '{field}' not found", source.display());
    }
    let message = err.to_string();
    log::error!("{message}; aborting");
    CliError {
        code: check_exit_code(&err),
        message,
        hint: Some("check the export layout of the reservation system".into()),
    }
}

fn read_table(path: &Path, delimiter: u8) -> Result<RawTable, CliError> {
    let table = csv::import(path, delimiter).map_err(io_err)?;
    if table.is_empty() {
        log::warn!("{} is empty", path.display());
    }
    log::info!(
        "read {} ({} columns, {} data rows)",
        path.display(),
        table.width(),
        table.data_rows().len()
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// One file: eligibility submission CSV
// ---------------------------------------------------------------------------

pub fn cmd_submission(input: &Path, ctx: &RunContext<'_>) -> Result<PathBuf, CliError> {
    let table = read_table(input, LEDGER_DELIMITER)?;

    let output = kenpo_recon::transform(&table).map_err(|e| check_err(e, input))?;
    log::info!(
        "{} of {} rows in scope ({} excluded by course)",
        output.records.len(),
        output.rows_read,
        output.excluded
    );

    let out_path = ctx
        .settings
        .output_dir
        .join(ctx.settings.submission_file_name(ctx.today));
    let written = csv::export(&output.records, &out_path, b',').map_err(io_err)?;
    log::info!("wrote {written} records to {}", out_path.display());

    Ok(out_path)
}

// ---------------------------------------------------------------------------
// Two files: result workbook
// ---------------------------------------------------------------------------

pub fn cmd_result_workbook(first: &Path, second: &Path, ctx: &RunContext<'_>) -> Result<PathBuf, CliError> {
    let first_text = text::read_file_as_utf8(first).map_err(io_err)?;
    let first_header = csv::header_from_string(&first_text, INSURER_DELIMITER)
        .map_err(|e| io_err(format!("{}: {e}", first.display())))?;

    let order = kenpo_recon::classify(&first_header, &ctx.settings.insurer_signature);
    let roles = order.assign(first, second);
    log::info!(
        "file order {order}: insurer result {}, reservation ledger {}",
        roles.insurer.display(),
        roles.ledger.display()
    );

    let insurer = read_table(roles.insurer, INSURER_DELIMITER)?;
    let ledger = read_table(roles.ledger, LEDGER_DELIMITER)?;

    let sheet = kenpo_recon::compose(&insurer, &ledger).map_err(|e| check_err(e, roles.ledger))?;
    log::info!(
        "{} insurer rows: {} matched, {} without a ledger row",
        sheet.summary.insurer_rows,
        sheet.summary.matched,
        sheet.summary.unmatched
    );

    // Written beside the first declared file, whichever role it has
    let out_dir = match first.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let out_path = out_dir.join(ctx.settings.workbook_file_name(ctx.today));

    let options = xlsx::SheetOptions {
        sheet_name: ctx.settings.sheet_name.clone(),
        font_name: ctx.settings.font_name.clone(),
        font_size: ctx.settings.font_size,
    };
    let result = xlsx::export(&sheet.to_grid(), &out_path, &options).map_err(io_err)?;
    log::info!(
        "wrote {} rows to {} in {}ms",
        result.rows_exported,
        out_path.display(),
        result.export_duration_ms
    );

    Ok(out_path)
}
