//! Bulk file I/O bracketing the pure transform stages

use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::table::Table;

/// Read a delimited file with a header row into an in-memory table.
///
/// Field counts are strict: a ragged row aborts the read instead of
/// producing a partially loaded table.
pub fn read_table(path: &Path, delimiter: u8) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_path(path)?;

    let headers = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table::new(headers, rows))
}

/// Serialize records to a delimited file without a header row.
pub fn write_records<S: Serialize>(path: &Path, records: &[S], delimiter: u8) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_path(path)?;

    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Pair {
        left: String,
        right: String,
    }

    #[test]
    fn test_read_pipe_delimited() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "a|b\n1|2\n3|\n").unwrap();

        let table = read_table(&path, b'|').unwrap();

        assert_eq!(table.headers, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], vec!["3".to_string(), String::new()]);
    }

    #[test]
    fn test_ragged_row_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "a|b\n1|2|3\n").unwrap();

        assert!(read_table(&path, b'|').is_err());
    }

    #[test]
    fn test_write_headerless() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let records = vec![
            Pair { left: "x".into(), right: "1".into() },
            Pair { left: "y".into(), right: "2".into() },
        ];

        write_records(&path, &records, b',').unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "x,1\ny,2\n");
    }
}
