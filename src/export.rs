// src/export.rs
use csv::{Terminator, WriterBuilder};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::{info, instrument};

use crate::error::{PipelineError, Result};
use crate::process::IncidentTable;

/// Where the default run writes its result, relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "proactive_awareness_zones.csv";

/// Write `table` as CSV (header + one line per row) to `path`, replacing any existing file.
/// Returns the path written.
#[instrument(level = "info", skip(table, path), fields(rows = table.len(), path = %path.as_ref().display()))]
pub fn write_csv<P: AsRef<Path>>(table: &IncidentTable, path: P) -> Result<PathBuf> {
    let path = path.as_ref().to_path_buf();
    let io_err = |source| PipelineError::Io {
        path: path.clone(),
        source,
    };

    let file = File::create(&path).map_err(io_err)?;
    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(BufWriter::new(file));

    let write_err = |source| PipelineError::Write {
        path: path.clone(),
        source,
    };
    wtr.write_record(&table.headers).map_err(write_err)?;
    for row in &table.rows {
        wtr.write_record(row).map_err(write_err)?;
    }

    let mut inner = wtr
        .into_inner()
        .map_err(|e| io_err(std::io::Error::new(e.error().kind(), e.to_string())))?;
    inner.flush().map_err(io_err)?;

    info!("wrote csv");
    Ok(path)
}
