// src/fetch/mod.rs
use reqwest::blocking::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};
use url::Url;

use crate::error::{PipelineError, Result};
use crate::process::IncidentTable;

pub mod urls;

#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Whole-request bound. `None` waits for as long as the transport does.
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout: None,
            connect_timeout: None,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Downloads a CSV resource and parses it into an [`IncidentTable`].
#[derive(Debug, Clone)]
pub struct CsvFetcher {
    settings: FetchSettings,
}

impl CsvFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self, url: &str) -> Result<Client> {
        let mut builder = Client::builder()
            .user_agent(self.settings.user_agent.clone())
            .timeout(self.settings.timeout);
        if let Some(connect) = self.settings.connect_timeout {
            builder = builder.connect_timeout(connect);
        }
        builder.build().map_err(|source| PipelineError::Network {
            url: url.to_string(),
            source,
        })
    }

    /// GET `url` once and parse the body. Any failure ends the fetch; there is no retry.
    #[instrument(level = "info", skip(self))]
    pub fn fetch_table(&self, url: &str) -> Result<IncidentTable> {
        let parsed = Url::parse(url).map_err(|source| PipelineError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        let client = self.build_client(url)?;
        let network = |source| PipelineError::Network {
            url: url.to_string(),
            source,
        };

        let start = Instant::now();
        let resp = client.get(parsed).send().map_err(network)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(PipelineError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let body = resp.bytes().map_err(network)?;
        debug!(bytes = body.len(), elapsed = ?start.elapsed(), "downloaded");

        let table = IncidentTable::from_csv_bytes(&body)?;
        info!(rows = table.len(), columns = table.headers.len(), "fetched table");
        Ok(table)
    }
}

impl Default for CsvFetcher {
    fn default() -> Self {
        Self::new(FetchSettings::default())
    }
}
