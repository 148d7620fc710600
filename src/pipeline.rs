//! Batch orchestration: file in, reshaped file out
//!
//! One pass over a static input. Every stage is a pure transform over the
//! in-memory table; reading and writing bracket them, and nothing is
//! written unless every transform succeeded.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::clean;
use crate::dates::{self, MonthTable};
use crate::defaults;
use crate::error::{Error, Result};
use crate::io;
use crate::melt::{MeltConfig, TableMelter};
use crate::recode::{decompose, Recoder};
use crate::table::Table;

/// Everything the reshape needs, threaded explicitly through [`run`].
///
/// Defaults carry the published schema of the ICU bed census extract; any
/// field can be overridden for a differently shaped report.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Pipe-delimited census extract
    pub input: PathBuf,

    /// Destination for the headerless long-form file
    pub output: PathBuf,

    pub input_delimiter: u8,
    pub output_delimiter: u8,

    /// Column allow-list applied right after reading
    pub columns: Vec<String>,

    /// Registration timestamp column, consumed by date derivation
    pub date_column: String,
    pub date_format: String,

    /// The four identifier columns replicated through the melt, in output
    /// order: scope, region, province, district
    pub key_columns: Vec<String>,

    /// Sentinel for empty non-identifier cells
    pub null_fill: String,

    pub attribute_separator: char,
    pub recoder: Recoder,
    pub months: MonthTable,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            input: PathBuf::from("Data.txt"),
            output: PathBuf::from("DataProcesada.csv"),
            input_delimiter: b'|',
            output_delimiter: b',',
            columns: defaults::REPORT_COLUMNS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            date_column: defaults::DATE_COLUMN.to_string(),
            date_format: defaults::DATE_FORMAT.to_string(),
            key_columns: defaults::KEY_COLUMNS.iter().map(|s| s.to_string()).collect(),
            null_fill: defaults::NULL_FILL.to_string(),
            attribute_separator: defaults::ATTRIBUTE_SEPARATOR,
            recoder: Recoder::default(),
            months: MonthTable::default(),
        }
    }
}

impl PipelineConfig {
    /// The metric columns: the allow-list minus the timestamp and the keys.
    pub fn value_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|name| *name != &self.date_column && !self.key_columns.contains(name))
            .cloned()
            .collect()
    }

    fn validate(&self) -> Result<()> {
        if self.key_columns.len() != 4 {
            return Err(Error::Config(format!(
                "expected 4 key columns (scope, region, province, district), got {}",
                self.key_columns.len()
            )));
        }
        for name in std::iter::once(&self.date_column).chain(&self.key_columns) {
            if !self.columns.contains(name) {
                return Err(Error::Config(format!(
                    "column {name:?} is not in the allow-list"
                )));
            }
        }
        Ok(())
    }
}

/// One normalized output row, fields in output order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongRecord {
    pub anio: String,
    pub mes: String,
    pub dia: String,
    pub ambito: String,
    pub region: String,
    pub provincia: String,
    pub distrito: String,
    pub uso: String,
    pub grupo_etario: String,
    pub estado: String,
    pub camas: String,
}

/// Row counts observed while reshaping
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReshapeStats {
    pub rows_read: usize,
    pub rows_dropped: usize,
    pub cells_filled: usize,
    pub date_parse_failures: usize,
    pub rows_melted: usize,
    pub rows_written: usize,
}

/// Run the whole reshape: read, select, clean, derive dates, melt,
/// decompose and recode, write.
pub fn run(config: &PipelineConfig) -> Result<ReshapeStats> {
    config.validate()?;
    let mut stats = ReshapeStats::default();

    info!("reading {}", config.input.display());
    let table = io::read_table(&config.input, config.input_delimiter)?;
    stats.rows_read = table.rows.len();
    debug!(
        "read {} rows with {} columns",
        table.rows.len(),
        table.headers.len()
    );

    let table = table.select(&config.columns)?;

    let mut identifier_subset = vec![config.date_column.clone()];
    identifier_subset.extend(config.key_columns.iter().cloned());
    let (mut table, dropped) = clean::drop_null_rows(table, &identifier_subset)?;
    stats.rows_dropped = dropped;
    if dropped > 0 {
        info!("dropped {dropped} rows with null identifiers");
    }

    stats.cells_filled = clean::fill_nulls(&mut table, &config.null_fill);

    let (table, failures) = dates::derive_date_columns(
        table,
        &config.date_column,
        &config.date_format,
        &config.months,
    )?;
    stats.date_parse_failures = failures;
    if failures > 0 {
        warn!(
            "{failures} rows carried an unparseable {} stamp and keep empty date parts",
            config.date_column
        );
    }

    let mut id_vars = config.key_columns.clone();
    id_vars.push(defaults::YEAR_COLUMN.to_string());
    id_vars.push(defaults::MONTH_COLUMN.to_string());
    id_vars.push(defaults::DAY_COLUMN.to_string());

    let melter = TableMelter::new(MeltConfig {
        id_vars,
        value_vars: config.value_columns(),
        var_name: defaults::ATTRIBUTE_COLUMN.to_string(),
        value_name: defaults::VALUE_COLUMN.to_string(),
    });
    let melted = melter.melt(&table)?;
    stats.rows_melted = melted.rows.len();
    info!("melted into {} rows", melted.rows.len());

    let records = project_long_records(&melted, config)?;

    io::write_records(&config.output, &records, config.output_delimiter)?;
    stats.rows_written = records.len();
    info!("wrote {} rows to {}", records.len(), config.output.display());

    Ok(stats)
}

/// Project the melted table onto typed output rows: decompose each
/// attribute name, recode its segments, and put the columns in output
/// order. Per-row, no change in row count.
fn project_long_records(melted: &Table, config: &PipelineConfig) -> Result<Vec<LongRecord>> {
    let key_indices = config
        .key_columns
        .iter()
        .map(|name| melted.require_column(name))
        .collect::<Result<Vec<_>>>()?;
    let anio_idx = melted.require_column(defaults::YEAR_COLUMN)?;
    let mes_idx = melted.require_column(defaults::MONTH_COLUMN)?;
    let dia_idx = melted.require_column(defaults::DAY_COLUMN)?;
    let attr_idx = melted.require_column(defaults::ATTRIBUTE_COLUMN)?;
    let value_idx = melted.require_column(defaults::VALUE_COLUMN)?;

    let mut records = Vec::with_capacity(melted.rows.len());
    for row in &melted.rows {
        let parts = decompose(&row[attr_idx], config.attribute_separator)?;
        let parts = config.recoder.recode(parts);
        records.push(LongRecord {
            anio: row[anio_idx].clone(),
            mes: row[mes_idx].clone(),
            dia: row[dia_idx].clone(),
            ambito: row[key_indices[0]].clone(),
            region: row[key_indices[1]].clone(),
            provincia: row[key_indices[2]].clone(),
            distrito: row[key_indices[3]].clone(),
            uso: parts.usage,
            grupo_etario: parts.age_group,
            estado: parts.status,
            camas: row[value_idx].clone(),
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_row(date: &str, keys: [&str; 4], overrides: &[(&str, &str)]) -> Vec<String> {
        let mut row = vec![date.to_string()];
        row.extend(keys.iter().map(|k| k.to_string()));
        for column in &defaults::REPORT_COLUMNS[5..] {
            let value = overrides
                .iter()
                .find(|(name, _)| name == column)
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| String::from("1"));
            row.push(value);
        }
        row
    }

    fn write_input(dir: &tempfile::TempDir, headers: &[&str], rows: &[Vec<String>]) -> PathBuf {
        let mut content = headers.join("|");
        content.push('\n');
        for row in rows {
            content.push_str(&row.join("|"));
            content.push('\n');
        }
        let path = dir.path().join("Data.txt");
        std::fs::write(&path, content).unwrap();
        path
    }

    fn config_for(dir: &tempfile::TempDir, input: PathBuf) -> PipelineConfig {
        PipelineConfig {
            input,
            output: dir.path().join("DataProcesada.csv"),
            ..PipelineConfig::default()
        }
    }

    #[test]
    fn test_value_columns_are_the_24_metrics() {
        let config = PipelineConfig::default();
        let metrics = config.value_columns();
        assert_eq!(metrics.len(), 24);
        assert!(!metrics.contains(&String::from("FECHAREGISTRO")));
        assert!(!metrics.contains(&String::from("GRUPO")));
        assert_eq!(metrics[0], "ZC_UCI_ADUL_CAM_INOPERATIVOS");
    }

    #[test]
    fn test_end_to_end_reshape() {
        let dir = tempfile::tempdir().unwrap();
        let rows = vec![
            full_row(
                "2023/05/10 3:00:00 PM",
                ["G1", "R1", "P1", "D1"],
                &[
                    ("ZC_UCI_ADUL_CAM_INOPERATIVOS", "2"),
                    // empty metric: must come out as "0" after the fill
                    ("ZNC_UCI_PEDIA_CAM_OCUPADO", ""),
                ],
            ),
            // missing GRUPO: dropped before any derivation
            full_row("2023/05/10 3:00:00 PM", ["", "R2", "P2", "D2"], &[]),
        ];
        let input = write_input(&dir, defaults::REPORT_COLUMNS, &rows);
        let config = config_for(&dir, input);

        let stats = run(&config).unwrap();

        assert_eq!(stats.rows_read, 2);
        assert_eq!(stats.rows_dropped, 1);
        assert_eq!(stats.date_parse_failures, 0);
        assert_eq!(stats.rows_melted, 24);
        assert_eq!(stats.rows_written, 24);

        let written = std::fs::read_to_string(&config.output).unwrap();
        assert_eq!(written.lines().count(), 24);
        assert!(written.contains("2023,Mayo,10,G1,R1,P1,D1,COVID,ADULTOS,INOPERATIVO,2"));
        assert!(written.contains("2023,Mayo,10,G1,R1,P1,D1,NO COVID,PEDIATRICA,OCUPADO,0"));
    }

    #[test]
    fn test_output_reads_back_as_records() {
        let dir = tempfile::tempdir().unwrap();
        let rows = vec![full_row(
            "2023/05/10 3:00:00 PM",
            ["G1", "R1", "P1", "D1"],
            &[],
        )];
        let input = write_input(&dir, defaults::REPORT_COLUMNS, &rows);
        let config = config_for(&dir, input);

        run(&config).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(&config.output)
            .unwrap();
        let records: Vec<LongRecord> =
            reader.deserialize().collect::<std::result::Result<_, _>>().unwrap();

        assert_eq!(records.len(), 24);
        for record in &records {
            assert_eq!(record.anio, "2023");
            assert_eq!(record.ambito, "G1");
            assert!(!record.camas.is_empty());
        }
    }

    #[test]
    fn test_missing_column_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let headers: Vec<&str> = defaults::REPORT_COLUMNS
            .iter()
            .copied()
            .filter(|name| *name != "ZC_UCI_ADUL_CAM_TOT_OPER")
            .collect();
        let mut row = full_row("2023/05/10 3:00:00 PM", ["G1", "R1", "P1", "D1"], &[]);
        row.remove(6);
        let input = write_input(&dir, &headers, &[row]);
        let config = config_for(&dir, input);

        let err = run(&config).unwrap_err();

        assert!(matches!(
            err,
            Error::MissingColumn(name) if name == "ZC_UCI_ADUL_CAM_TOT_OPER"
        ));
        assert!(!config.output.exists());
    }

    #[test]
    fn test_unparseable_timestamp_keeps_row_with_empty_date_parts() {
        // Silent-data-loss risk inherited from the source system: a bad
        // stamp does not reject the row, it blanks ANIO, MES and DIA.
        let dir = tempfile::tempdir().unwrap();
        let rows = vec![full_row("10-05-2023", ["G1", "R1", "P1", "D1"], &[])];
        let input = write_input(&dir, defaults::REPORT_COLUMNS, &rows);
        let config = config_for(&dir, input);

        let stats = run(&config).unwrap();

        assert_eq!(stats.date_parse_failures, 1);
        assert_eq!(stats.rows_written, 24);
        let written = std::fs::read_to_string(&config.output).unwrap();
        assert!(written.lines().all(|line| line.starts_with(",,,G1,R1,P1,D1,")));
    }

    #[test]
    fn test_extra_input_columns_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let mut headers: Vec<&str> = defaults::REPORT_COLUMNS.to_vec();
        headers.push("IGNORADO");
        let mut row = full_row("2023/05/10 3:00:00 PM", ["G1", "R1", "P1", "D1"], &[]);
        row.push(String::from("x"));
        let input = write_input(&dir, &headers, &[row]);
        let config = config_for(&dir, input);

        let stats = run(&config).unwrap();

        assert_eq!(stats.rows_written, 24);
        let written = std::fs::read_to_string(&config.output).unwrap();
        assert!(!written.contains("IGNORADO"));
    }

    #[test]
    fn test_wrong_key_column_count_is_config_error() {
        let config = PipelineConfig {
            key_columns: vec![String::from("GRUPO")],
            ..PipelineConfig::default()
        };
        assert!(matches!(run(&config), Err(Error::Config(_))));
    }
}
