// src/pipeline.rs
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, instrument};

use crate::error::Result;
use crate::export::{self, DEFAULT_OUTPUT_FILE};
use crate::fetch::{urls, CsvFetcher, FetchSettings};
use crate::process::filter;

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub query_url: String,
    pub output_path: PathBuf,
    pub fetch: FetchSettings,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            query_url: urls::default_query_url(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            fetch: FetchSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub total_incidents: usize,
    pub human_error_zones: usize,
    pub output_path: PathBuf,
}

/// fetch → filter → clean → export, once.
#[instrument(level = "info", skip(config), fields(url = %config.query_url))]
pub fn run(config: &PipelineConfig) -> Result<RunSummary> {
    let start = Instant::now();

    let table = CsvFetcher::new(config.fetch.clone()).fetch_table(&config.query_url)?;
    let total_incidents = table.len();

    let zones = filter::filter_human_error(table)?;
    let output_path = export::write_csv(&zones, &config.output_path)?;

    info!(
        total_incidents,
        kept = zones.len(),
        elapsed = ?start.elapsed(),
        "pipeline finished"
    );
    Ok(RunSummary {
        total_incidents,
        human_error_zones: zones.len(),
        output_path,
    })
}

/// Console lines for a finished run: the summary on success, one line on failure.
pub fn report(outcome: &Result<RunSummary>) -> Vec<String> {
    match outcome {
        Ok(summary) => vec![
            "--- SUCCESS ---".to_string(),
            format!("Total incidents analyzed: {}", summary.total_incidents),
            format!("Human error zones identified: {}", summary.human_error_zones),
            format!("Data saved to: {}", summary.output_path.display()),
        ],
        Err(err) => vec![format!("An error occurred: {err}")],
    }
}
