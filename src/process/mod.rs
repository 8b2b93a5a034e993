// src/process/mod.rs
use csv::ReaderBuilder;
use std::io::Read;
use tracing::{debug, warn};

use crate::error::{PipelineError, Result};

pub mod filter;

/// Field texts the usual tabular readers treat as null.
const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// True when `field` holds no value.
pub fn is_missing(field: &str) -> bool {
    MISSING_MARKERS.contains(&field)
}

/// An incident dataset held in memory, rows in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IncidentTable {
    /// Column names from the header row, in source order.
    pub headers: Vec<String>,
    /// Each record as raw field text. Parsed tables are always `headers.len()` wide;
    /// hand-built rows may be shorter and their absent fields read as missing.
    pub rows: Vec<Vec<String>>,
}

impl IncidentTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of `name` in the header, or a schema error naming it.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| PipelineError::missing_column(name))
    }

    /// Same columns, only the rows for which `keep` returns true.
    pub fn retain_rows<F>(self, mut keep: F) -> Self
    where
        F: FnMut(&[String]) -> bool,
    {
        let rows = self.rows.into_iter().filter(|r| keep(r.as_slice())).collect();
        Self {
            headers: self.headers,
            rows,
        }
    }

    /// Parse CSV text with a header row.
    ///
    /// Records shorter than the header are padded with empty (missing) fields;
    /// longer ones are rejected.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = rdr
            .headers()
            .map_err(PipelineError::Parse)?
            .iter()
            .map(str::to_string)
            .collect();
        if headers.is_empty() || (headers.len() == 1 && headers[0].is_empty()) {
            return Err(PipelineError::MissingHeader);
        }

        let width = headers.len();
        let mut rows = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let record = result.map_err(PipelineError::Parse)?;
            if record.len() > width {
                return Err(PipelineError::RaggedRow {
                    record: idx as u64 + 1,
                    expected: width,
                    found: record.len(),
                });
            }
            if record.len() < width {
                warn!(
                    record = idx + 1,
                    found = record.len(),
                    expected = width,
                    "short record padded with missing fields"
                );
            }
            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            row.resize(width, String::new());
            rows.push(row);
        }

        debug!(columns = width, rows = rows.len(), "parsed csv table");
        Ok(Self { headers, rows })
    }

    pub fn from_csv_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_csv_reader(bytes)
    }
}
