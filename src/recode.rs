//! Attribute decomposition and recoding
//!
//! A metric column name like `ZC_UCI_ADUL_CAM_TOT_OCUP` encodes three
//! categorical dimensions: ward usage (text before the first separator),
//! age group (the third segment), and bed status (text after the last
//! separator). Decomposition extracts them; recoding maps each short code
//! to its display label through a fixed table, leaving unknown codes
//! untouched.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// The three categorical dimensions extracted from a metric column name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeParts {
    pub usage: String,
    pub age_group: String,
    pub status: String,
}

/// Split an attribute name into its three dimensions.
///
/// The age group is the segment at index 2, positionally fixed regardless
/// of how many segments follow it. Names with fewer than 3 segments are
/// rejected rather than decomposed into wrong dimensions.
pub fn decompose(attribute: &str, separator: char) -> Result<AttributeParts> {
    let segments: Vec<&str> = attribute.split(separator).collect();
    if segments.len() < 3 {
        return Err(Error::MalformedAttribute {
            name: attribute.to_string(),
            separator,
        });
    }
    Ok(AttributeParts {
        usage: segments[0].to_string(),
        age_group: segments[2].to_string(),
        status: segments[segments.len() - 1].to_string(),
    })
}

/// A code-to-label mapping with pass-through for unknown codes
#[derive(Debug, Clone, Default)]
pub struct RecodeTable {
    entries: HashMap<String, String>,
}

impl RecodeTable {
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        RecodeTable {
            entries: pairs
                .iter()
                .map(|(code, label)| (code.to_string(), label.to_string()))
                .collect(),
        }
    }

    /// Label for `code`, or the code itself when unmapped.
    pub fn apply(&self, code: &str) -> String {
        match self.entries.get(code) {
            Some(label) => label.clone(),
            None => code.to_string(),
        }
    }
}

/// The three per-dimension recode tables applied after decomposition
#[derive(Debug, Clone)]
pub struct Recoder {
    pub usage: RecodeTable,
    pub age_group: RecodeTable,
    pub status: RecodeTable,
}

impl Recoder {
    pub fn recode(&self, parts: AttributeParts) -> AttributeParts {
        AttributeParts {
            usage: self.usage.apply(&parts.usage),
            age_group: self.age_group.apply(&parts.age_group),
            status: self.status.apply(&parts.status),
        }
    }
}

impl Default for Recoder {
    fn default() -> Self {
        Recoder {
            usage: RecodeTable::from_pairs(crate::defaults::USAGE_CODES),
            age_group: RecodeTable::from_pairs(crate::defaults::AGE_GROUP_CODES),
            status: RecodeTable::from_pairs(crate::defaults::STATUS_CODES),
        }
    }
}
