//! Registration timestamp decomposition
//!
//! The extract stamps each row with a `yyyy/MM/dd h:mm:ss a` timestamp.
//! Downstream only the calendar parts survive: year, Spanish month name,
//! day of month. A stamp that does not match the layout yields empty parts
//! for that row instead of aborting the run; callers count and report it.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDateTime};

use crate::defaults;
use crate::error::Result;
use crate::table::Table;

/// Calendar parts of a parsed registration timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParts {
    pub year: i32,
    pub month: String,
    pub day: u32,
}

/// Month-number to display-name lookup
#[derive(Debug, Clone)]
pub struct MonthTable {
    names: HashMap<u32, String>,
}

impl MonthTable {
    pub fn new(names: HashMap<u32, String>) -> Self {
        MonthTable { names }
    }

    pub fn name(&self, month: u32) -> Option<&str> {
        self.names.get(&month).map(String::as_str)
    }
}

impl Default for MonthTable {
    fn default() -> Self {
        MonthTable {
            names: defaults::SPANISH_MONTHS
                .iter()
                .map(|(num, name)| (*num, name.to_string()))
                .collect(),
        }
    }
}

/// Parse one timestamp into calendar parts, None when it does not match.
pub fn derive_date_parts(raw: &str, format: &str, months: &MonthTable) -> Option<DateParts> {
    let parsed = NaiveDateTime::parse_from_str(raw.trim(), format).ok()?;
    Some(DateParts {
        year: parsed.year(),
        month: months.name(parsed.month()).unwrap_or_default().to_string(),
        day: parsed.day(),
    })
}

/// Replace the `source` timestamp column with ANIO, MES and DIA columns.
///
/// The new columns are appended after the surviving ones and the source
/// column is removed. Rows whose stamp fails to parse get empty parts;
/// the second return value counts them.
pub fn derive_date_columns(
    table: Table,
    source: &str,
    format: &str,
    months: &MonthTable,
) -> Result<(Table, usize)> {
    let source_idx = table.require_column(source)?;

    let mut headers = table.headers;
    headers.remove(source_idx);
    headers.push(defaults::YEAR_COLUMN.to_string());
    headers.push(defaults::MONTH_COLUMN.to_string());
    headers.push(defaults::DAY_COLUMN.to_string());

    let mut failures = 0usize;
    let mut rows = Vec::with_capacity(table.rows.len());
    for mut row in table.rows {
        let raw = row.remove(source_idx);
        match derive_date_parts(&raw, format, months) {
            Some(parts) => {
                row.push(parts.year.to_string());
                row.push(parts.month);
                row.push(parts.day.to_string());
            }
            None => {
                failures += 1;
                row.extend([String::new(), String::new(), String::new()]);
            }
        }
        rows.push(row);
    }

    Ok((Table::new(headers, rows), failures))
}
