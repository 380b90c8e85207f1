// Excel result workbook export

use std::path::Path;
use std::time::Instant;

use rust_xlsxwriter::{Format, Workbook as XlsxWorkbook};

/// Excel's hard sheet limits.
const MAX_ROWS: usize = 1_048_576;
const MAX_COLS: usize = 16_384;

/// Sheet name and default font for the exported workbook.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetOptions {
    pub sheet_name: String,
    pub font_name: String,
    pub font_size: f64,
}

/// Export statistics
#[derive(Debug, Default, Clone)]
pub struct ExportResult {
    pub rows_exported: usize,
    pub cells_exported: usize,
    pub export_duration_ms: u128,
}

/// Export a grid of text cells to a single-sheet XLSX file.
///
/// Every cell, blanks included, carries the default font so the sheet opens
/// with a uniform look. Row 0 is written like any other row.
pub fn export(grid: &[Vec<String>], path: &Path, options: &SheetOptions) -> Result<ExportResult, String> {
    let start_time = Instant::now();
    let mut result = ExportResult::default();

    if grid.len() > MAX_ROWS {
        return Err(format!("{} rows exceed the Excel limit of {MAX_ROWS}", grid.len()));
    }
    if let Some(wide) = grid.iter().map(|r| r.len()).max().filter(|&w| w > MAX_COLS) {
        return Err(format!("{wide} columns exceed the Excel limit of {MAX_COLS}"));
    }

    let mut xlsx_workbook = XlsxWorkbook::new();
    let format = Format::new()
        .set_font_name(&options.font_name)
        .set_font_size(options.font_size);

    let worksheet = xlsx_workbook
        .add_worksheet()
        .set_name(&options.sheet_name)
        .map_err(|e| format!("Failed to create sheet '{}': {}", options.sheet_name, e))?;

    for (row, cells) in grid.iter().enumerate() {
        // rust_xlsxwriter uses 0-based row/col as u32/u16
        let row32 = row as u32;
        for (col, value) in cells.iter().enumerate() {
            let col16 = col as u16;
            if value.is_empty() {
                worksheet
                    .write_blank(row32, col16, &format)
                    .map_err(|e| format!("Failed to write cell ({}, {}): {}", row, col, e))?;
            } else {
                worksheet
                    .write_string_with_format(row32, col16, value, &format)
                    .map_err(|e| format!("Failed to write cell ({}, {}): {}", row, col, e))?;
                result.cells_exported += 1;
            }
        }
        result.rows_exported += 1;
    }

    xlsx_workbook
        .save(path)
        .map_err(|e| format!("Failed to save XLSX file {}: {}", path.display(), e))?;

    result.export_duration_ms = start_time.elapsed().as_millis();
    Ok(result)
}
