use crate::error::{Error, Result};
use crate::melt::types::MeltConfig;
use crate::table::Table;

/// The core table melter that unpivots value columns into long form
pub struct TableMelter {
    config: MeltConfig,
}

impl TableMelter {
    pub fn new(config: MeltConfig) -> Self {
        TableMelter { config }
    }

    /// Melt a wide table into long form.
    ///
    /// Every input row is replaced by `value_vars.len()` output rows, each
    /// carrying the id columns unchanged plus two new columns: the
    /// originating column's name and its value. Output row count is exactly
    /// `rows * value_vars.len()`; no row is dropped or deduplicated, and
    /// empty source values propagate as empty output values.
    pub fn melt(&self, table: &Table) -> Result<Table> {
        self.validate()?;

        let id_indices = self
            .config
            .id_vars
            .iter()
            .map(|name| table.require_column(name))
            .collect::<Result<Vec<_>>>()?;

        // Duplicate names in value_vars are allowed and produce duplicate
        // attribute rows.
        let value_indices = self
            .config
            .value_vars
            .iter()
            .map(|name| table.require_column(name))
            .collect::<Result<Vec<_>>>()?;

        let mut headers = self.config.id_vars.clone();
        headers.push(self.config.var_name.clone());
        headers.push(self.config.value_name.clone());

        let mut rows = Vec::with_capacity(table.rows.len() * value_indices.len());
        for row in &table.rows {
            for (name, &idx) in self.config.value_vars.iter().zip(&value_indices) {
                let mut out = Vec::with_capacity(headers.len());
                for &id_idx in &id_indices {
                    out.push(row[id_idx].clone());
                }
                out.push(name.clone());
                out.push(row[idx].clone());
                rows.push(out);
            }
        }

        Ok(Table::new(headers, rows))
    }

    fn validate(&self) -> Result<()> {
        if self.config.value_vars.is_empty() {
            return Err(Error::Config(String::from(
                "melt requires at least one value column",
            )));
        }
        for name in [&self.config.var_name, &self.config.value_name] {
            if self.config.id_vars.contains(name) {
                return Err(Error::Config(format!(
                    "id column {name:?} collides with a melt output column"
                )));
            }
        }
        Ok(())
    }
}
