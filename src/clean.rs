//! Null handling ahead of the reshape
//!
//! The extract is read all-string, so the empty string is the only null
//! representation. Rows missing any identifier are useless downstream and
//! are dropped; every other empty cell is filled with a sentinel so the
//! melted value column is never null.

use crate::error::Result;
use crate::table::Table;

/// Drop rows with an empty cell in any of the `subset` columns.
pub fn drop_null_rows(table: Table, subset: &[String]) -> Result<(Table, usize)> {
    let indices = subset
        .iter()
        .map(|name| table.require_column(name))
        .collect::<Result<Vec<_>>>()?;

    let before = table.rows.len();
    let rows: Vec<Vec<String>> = table
        .rows
        .into_iter()
        .filter(|row| indices.iter().all(|&idx| !row[idx].is_empty()))
        .collect();
    let dropped = before - rows.len();

    Ok((Table::new(table.headers, rows), dropped))
}

/// Replace every empty cell in the table with `sentinel`, returning the
/// number of cells filled.
pub fn fill_nulls(table: &mut Table, sentinel: &str) -> usize {
    let mut filled = 0usize;
    for row in &mut table.rows {
        for cell in row {
            if cell.is_empty() {
                *cell = sentinel.to_string();
                filled += 1;
            }
        }
    }
    filled
}
