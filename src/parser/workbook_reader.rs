//! Spreadsheet workbook reader using calamine.
//!
//! Cells are read as their stored values. Formula cells yield the value the
//! spreadsheet application cached when it last saved the file; nothing is
//! recalculated.

use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;

use calamine::{open_workbook_auto_from_rs, Data, ExcelDateTime, Range, Reader, Sheets};
use chrono::Timelike;

use crate::detect::detect_format_from_bytes;
use crate::error::{Error, Result};
use crate::model::{CellValue, Row, Sheet, Workbook};

/// Spreadsheet workbook reader.
///
/// Supports xlsx, xlsm, xlsb, xls and ods. The file is read into memory when
/// the reader is constructed and its handle is closed right away.
pub struct WorkbookReader {
    sheets: Sheets<Cursor<Vec<u8>>>,
}

impl WorkbookReader {
    /// Open a workbook file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Opening workbook {}", path.display());
        let data = fs::read(path)?;
        Self::from_vec(data)
    }

    /// Read a workbook from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_vec(data.to_vec())
    }

    /// Read a workbook from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_vec(data)
    }

    fn from_vec(data: Vec<u8>) -> Result<Self> {
        if !detect_format_from_bytes(&data)?.is_workbook_container() {
            return Err(Error::UnknownFormat);
        }

        let sheets = open_workbook_auto_from_rs(Cursor::new(data))?;
        Ok(Self { sheets })
    }

    /// Sheet names in workbook order.
    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    /// Read every sheet, in workbook order.
    pub fn read(&mut self) -> Result<Workbook> {
        let mut workbook = Workbook::new();

        for name in self.sheet_names() {
            let sheet = self.read_sheet(&name)?;
            workbook.add_sheet(sheet);
        }

        log::info!("Extracted {} sheets", workbook.sheet_count());
        Ok(workbook)
    }

    /// Read a single sheet by name.
    pub fn read_sheet(&mut self, name: &str) -> Result<Sheet> {
        if !self.sheet_names().iter().any(|n| n == name) {
            return Err(Error::SheetNotFound(name.to_string()));
        }

        let range = self.sheets.worksheet_range(name)?;
        let rows = rows_from_range(&range);
        log::debug!("Sheet '{}': {} rows", name, rows.len());

        Ok(Sheet::with_rows(name, rows))
    }
}

/// Convert a used range into rows anchored at cell A1.
///
/// calamine ranges start at the first used cell; rows and columns before it
/// are filled with empty cells so that row `i` is worksheet row `i + 1`.
pub fn rows_from_range(range: &Range<Data>) -> Vec<Row> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };
    if range.is_empty() {
        return Vec::new();
    }

    let lead_cols = start_col as usize;
    let width = lead_cols + range.width();

    let mut rows = Vec::with_capacity(start_row as usize + range.height());
    for _ in 0..start_row {
        rows.push(vec![CellValue::Empty; width]);
    }

    for source in range.rows() {
        let mut row = Vec::with_capacity(width);
        row.resize(lead_cols, CellValue::Empty);
        row.extend(source.iter().map(cell_from_data));
        rows.push(row);
    }

    rows
}

/// Convert a calamine cell into a [`CellValue`].
pub fn cell_from_data(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::number(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::DateTime(format_excel_datetime(dt)),
        Data::DateTimeIso(s) => CellValue::DateTime(s.replacen('T', " ", 1)),
        Data::DurationIso(s) => CellValue::DateTime(s.clone()),
        Data::Error(e) => CellValue::Text(e.to_string()),
    }
}

/// Render an Excel serial date/time as text.
///
/// Date-times become `YYYY-MM-DD HH:MM:SS`, pure times (serial below one day)
/// `HH:MM:SS`, durations `H:MM:SS` with a day prefix when longer than a day.
fn format_excel_datetime(dt: &ExcelDateTime) -> String {
    if dt.is_duration() {
        return match dt.as_duration() {
            Some(d) => format_duration(d.num_seconds()),
            None => dt.as_f64().to_string(),
        };
    }

    let Some(value) = dt.as_datetime() else {
        return dt.as_f64().to_string();
    };

    let serial = dt.as_f64();
    let with_fraction = value.nanosecond() != 0;
    let pattern = match ((0.0..1.0).contains(&serial), with_fraction) {
        (true, false) => "%H:%M:%S",
        (true, true) => "%H:%M:%S%.6f",
        (false, false) => "%Y-%m-%d %H:%M:%S",
        (false, true) => "%Y-%m-%d %H:%M:%S%.6f",
    };
    value.format(pattern).to_string()
}

/// Render a duration in seconds as `[N day(s), ]H:MM:SS`.
///
/// Negative durations borrow whole days, so the clock part is never negative:
/// -60 seconds is `-1 day, 23:59:00`.
fn format_duration(total_seconds: i64) -> String {
    let days = total_seconds.div_euclid(86_400);
    let rem = total_seconds.rem_euclid(86_400);
    let clock = format!("{}:{:02}:{:02}", rem / 3600, (rem % 3600) / 60, rem % 60);

    match days {
        0 => clock,
        1 | -1 => format!("{} day, {}", days, clock),
        n => format!("{} days, {}", n, clock),
    }
}
