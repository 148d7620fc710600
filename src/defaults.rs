//! The fixed schema of the ICU bed census extract
//!
//! Column names, code tables and format strings as published with the
//! extract. Everything here is a default: the pipeline configuration can
//! override any of it.

use once_cell::sync::Lazy;
use std::collections::HashMap;

// =============================================================================
// Input schema
// =============================================================================

/// Registration timestamp column, consumed by date derivation
pub const DATE_COLUMN: &str = "FECHAREGISTRO";

/// Identifier columns replicated verbatim through the reshape
pub const KEY_COLUMNS: &[&str] = &["GRUPO", "REGION", "PROVINCIA", "DISTRITO"];

/// The full column allow-list of the extract, in the published order.
/// Everything after the first five entries is a bed-count metric.
pub const REPORT_COLUMNS: &[&str] = &[
    "FECHAREGISTRO",
    "GRUPO",
    "REGION",
    "PROVINCIA",
    "DISTRITO",
    "ZC_UCI_ADUL_CAM_INOPERATIVOS",
    "ZC_UCI_ADUL_CAM_TOT_OPER",
    "ZC_UCI_ADUL_CAM_TOT_DISP",
    "ZC_UCI_ADUL_CAM_TOT_OCUP",
    "ZC_UCI_NEONATAL_CAM_INOPERATIVOS",
    "ZC_UCI_NEONATAL_CAM_TOT_OPER",
    "ZC_UCI_NEONATAL_CAM_TOT_DISP",
    "ZC_UCI_NEONATAL_CAM_TOT_OCUP",
    "ZC_UCI_PEDIA_CAM_INOPERATIVOS",
    "ZC_UCI_PEDIA_CAM_TOT_OPER",
    "ZC_UCI_PEDIA_CAM_TOT_DISP",
    "ZC_UCI_PEDIA_CAM_TOT_OCUP",
    "ZNC_UCI_ADUL_CAM_INOPERATIVO",
    "ZNC_UCI_ADUL_CAM_OPERATIVO",
    "ZNC_UCI_ADUL_CAM_DISPONIBLE",
    "ZNC_UCI_ADUL_CAM_OCUPADO",
    "ZNC_UCI_NEONATAL_CAM_INOPERATIVO",
    "ZNC_UCI_NEONATAL_CAM_OPERATIVO",
    "ZNC_UCI_NEONATAL_CAM_DISPONIBLE",
    "ZNC_UCI_NEONATAL_CAM_OCUPADO",
    "ZNC_UCI_PEDIA_CAM_INOPERATIVO",
    "ZNC_UCI_PEDIA_CAM_OPERATIVO",
    "ZNC_UCI_PEDIA_CAM_DISPONIBLE",
    "ZNC_UCI_PEDIA_CAM_OCUPADO",
];

/// Timestamp layout of FECHAREGISTRO, 12-hour clock with AM/PM marker
pub const DATE_FORMAT: &str = "%Y/%m/%d %I:%M:%S %p";

/// Sentinel written into empty non-identifier cells
pub const NULL_FILL: &str = "0";

// =============================================================================
// Derived and reshaped column names
// =============================================================================

pub const YEAR_COLUMN: &str = "ANIO";
pub const MONTH_COLUMN: &str = "MES";
pub const DAY_COLUMN: &str = "DIA";

/// Long-form column holding the originating metric column name
pub const ATTRIBUTE_COLUMN: &str = "ATRIBUTO";

/// Long-form column holding the bed count
pub const VALUE_COLUMN: &str = "CAMAS";

/// Segment separator inside metric column names
pub const ATTRIBUTE_SEPARATOR: char = '_';

// =============================================================================
// Code tables
// =============================================================================

/// USO: ward usage, first segment of the metric name
pub const USAGE_CODES: &[(&str, &str)] = &[("ZC", "COVID"), ("ZNC", "NO COVID")];

/// GRUPO_ETARIO: patient age group, third segment of the metric name
pub const AGE_GROUP_CODES: &[(&str, &str)] = &[
    ("ADUL", "ADULTOS"),
    ("NEONATAL", "NEONATAL"),
    ("PEDIA", "PEDIATRICA"),
];

/// ESTADO: bed status, last segment of the metric name
pub const STATUS_CODES: &[(&str, &str)] = &[
    ("OCUP", "OCUPADO"),
    ("DISP", "DISPONIBLE"),
    ("INOPERATIVOS", "INOPERATIVO"),
    ("OPER", "OPERATIVO"),
];

/// Month names keyed by calendar month number
pub static SPANISH_MONTHS: Lazy<HashMap<u32, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (1, "Enero"),
        (2, "Febrero"),
        (3, "Marzo"),
        (4, "Abril"),
        (5, "Mayo"),
        (6, "Junio"),
        (7, "Julio"),
        (8, "Agosto"),
        (9, "Septiembre"),
        (10, "Octubre"),
        (11, "Noviembre"),
        (12, "Diciembre"),
    ])
});
