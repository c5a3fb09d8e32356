use std::path::Path;

use csv::WriterBuilder;
use rust_xlsxwriter::{Format, Workbook};
use tracing::info;

use crate::error::{PlannerError, Result};
use crate::schedule::Schedule;

pub const HEADERS: [&str; 3] = ["Dato", "Vært 1", "Vært 2"];
pub const SHEET_NAME: &str = "Tidsplan";

/// Writes the schedule as CSV into any writer, header row first
pub fn write_schedule_csv<W: std::io::Write>(writer: W, schedule: &Schedule) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(HEADERS)?;
    for entry in schedule.iter() {
        let host1 = entry.host1.to_string();
        let host2 = entry.host2.to_string();
        wtr.write_record([entry.date.as_str(), host1.as_str(), host2.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// CSV bytes for download responses
pub fn schedule_to_csv_bytes(schedule: &Schedule) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_schedule_csv(&mut buffer, schedule)?;
    Ok(buffer)
}

fn build_workbook(schedule: &Schedule) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    let header_format = Format::new().set_bold();
    for (col, header) in HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (i, entry) in schedule.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, &entry.date)?;
        sheet.write_string(row, 1, entry.host1.to_string())?;
        sheet.write_string(row, 2, entry.host2.to_string())?;
    }
    sheet.autofit();

    Ok(workbook)
}

/// XLSX bytes with one "Tidsplan" sheet
pub fn schedule_to_xlsx_bytes(schedule: &Schedule) -> Result<Vec<u8>> {
    Ok(build_workbook(schedule)?.save_to_buffer()?)
}

/// Writes the schedule to disk; the extension picks CSV or XLSX
pub fn write_schedule<P: AsRef<Path>>(path: P, schedule: &Schedule) -> Result<()> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => write_schedule_csv(std::fs::File::create(path)?, schedule)?,
        "xlsx" => build_workbook(schedule)?.save(path)?,
        _ => {
            return Err(PlannerError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    }

    info!(rows = schedule.len(), path = %path.display(), "schedule written");
    Ok(())
}
