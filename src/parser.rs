use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use csv::ReaderBuilder;
use tracing::{debug, info};

use crate::error::{PlannerError, Result};

/// Where the member names sit in the roster file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterOptions {
    /// Zero-based column holding the names
    pub column: usize,
    /// Leading rows treated as title/header block
    pub skip_rows: usize,
}

impl Default for RosterOptions {
    /// First column, names from the third row
    fn default() -> Self {
        RosterOptions { column: 0, skip_rows: 2 }
    }
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default()
}

/// Keeps non-blank cells of the configured column after the skipped rows
fn collect_names<I>(rows: I, options: &RosterOptions) -> Vec<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    rows.into_iter()
        .skip(options.skip_rows)
        .flatten()
        .map(|cell| cell.trim().to_string())
        .filter(|cell| !cell.is_empty())
        .collect()
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        other => Some(other.to_string()),
    }
}

/// Reads roster names from a CSV file
pub fn load_roster_csv<P: AsRef<Path>>(path: P, options: &RosterOptions) -> Result<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut cells = Vec::new();
    for record in reader.records() {
        let record = record?;
        cells.push(record.get(options.column).map(|c| c.to_string()));
    }
    Ok(collect_names(cells, options))
}

/// Reads roster names from the first worksheet of a spreadsheet
pub fn load_roster_spreadsheet<P: AsRef<Path>>(path: P, options: &RosterOptions) -> Result<Vec<String>> {
    let mut workbook = open_workbook_auto(path)?;
    let Some(sheet_name) = workbook.sheet_names().first().cloned() else {
        return Ok(Vec::new());
    };
    debug!(sheet = %sheet_name, "reading roster worksheet");

    let range = workbook.worksheet_range(&sheet_name)?;
    let cells = range
        .rows()
        .map(|row| row.get(options.column).and_then(cell_text));
    Ok(collect_names(cells, options))
}

/// Loads the ordered roster, picking the reader by file extension.
///
/// Every entry is kept as an opaque string; order drives the host rotation.
pub fn load_roster<P: AsRef<Path>>(path: P, options: &RosterOptions) -> Result<Vec<String>> {
    let path = path.as_ref();
    let members = match extension(path).as_str() {
        "csv" | "txt" => load_roster_csv(path, options)?,
        "xlsx" | "xlsm" | "xls" | "xlsb" | "ods" => load_roster_spreadsheet(path, options)?,
        _ => {
            return Err(PlannerError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };

    if members.is_empty() {
        return Err(PlannerError::EmptyRoster {
            path: path.to_path_buf(),
        });
    }
    info!(members = members.len(), path = %path.display(), "roster loaded");
    Ok(members)
}
