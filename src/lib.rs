//! # Camas - ICU bed census reshaping
//!
//! A batch pipeline that turns the wide, pipe-delimited ICU bed-capacity
//! extract into a normalized long-form CSV: one row per (report row, metric
//! column), with the metric name decomposed into ward usage, age group and
//! bed status and recoded into display labels.
//!
//! ## Modules
//!
//! - **melt**: the wide-to-long reshape
//! - **recode**: attribute decomposition and code-to-label mapping
//! - **dates**: registration timestamp into year / month name / day
//! - **clean**: identifier null-dropping and sentinel fill
//! - **pipeline**: configuration plus the end-to-end batch run
//!
//! ## Quick Start
//!
//! ### Melting
//!
//! ```rust
//! use camas::melt::{MeltConfig, TableMelter};
//! use camas::table::Table;
//!
//! # fn main() -> camas::Result<()> {
//! let wide = Table::new(
//!     vec!["GRUPO".into(), "ZC_UCI_ADUL_CAM_TOT_OCUP".into()],
//!     vec![vec!["PRIVADO".into(), "5".into()]],
//! );
//!
//! let melter = TableMelter::new(MeltConfig {
//!     id_vars: vec!["GRUPO".into()],
//!     value_vars: vec!["ZC_UCI_ADUL_CAM_TOT_OCUP".into()],
//!     var_name: "ATRIBUTO".into(),
//!     value_name: "CAMAS".into(),
//! });
//!
//! let long = melter.melt(&wide)?;
//! assert_eq!(long.rows[0], vec!["PRIVADO", "ZC_UCI_ADUL_CAM_TOT_OCUP", "5"]);
//! # Ok(())
//! # }
//! ```
//!
//! ### Decomposition and recoding
//!
//! ```rust
//! use camas::recode::{decompose, Recoder};
//!
//! # fn main() -> camas::Result<()> {
//! let parts = Recoder::default().recode(decompose("ZC_UCI_ADUL_CAM_TOT_OCUP", '_')?);
//! assert_eq!(parts.usage, "COVID");
//! assert_eq!(parts.age_group, "ADULTOS");
//! assert_eq!(parts.status, "OCUPADO");
//! # Ok(())
//! # }
//! ```

pub mod clean;
pub mod dates;
pub mod defaults;
pub mod error;
pub mod io;
pub mod melt;
pub mod pipeline;
pub mod recode;
pub mod table;

// Re-export commonly used types for convenience
pub use error::{Error, Result};
pub use melt::{MeltConfig, TableMelter};
pub use pipeline::{run, LongRecord, PipelineConfig, ReshapeStats};
pub use recode::{AttributeParts, RecodeTable, Recoder};
pub use table::Table;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_melt_then_recode_roundtrip() {
        let wide = Table::new(
            vec!["GRUPO".into(), "ZNC_UCI_PEDIA_CAM_DISPONIBLE".into()],
            vec![vec!["PUBLICO".into(), "3".into()]],
        );

        let melter = TableMelter::new(MeltConfig {
            id_vars: vec!["GRUPO".into()],
            value_vars: vec!["ZNC_UCI_PEDIA_CAM_DISPONIBLE".into()],
            var_name: "ATRIBUTO".into(),
            value_name: "CAMAS".into(),
        });
        let long = melter.melt(&wide).unwrap();

        let parts = Recoder::default()
            .recode(recode::decompose(&long.rows[0][1], '_').unwrap());
        assert_eq!(parts.usage, "NO COVID");
        assert_eq!(parts.age_group, "PEDIATRICA");
        assert_eq!(parts.status, "DISPONIBLE");
    }
}
