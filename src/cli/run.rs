//! The coverage command.
//!
//! Authenticates, downloads the kanji catalog, reads the text file and
//! writes the per-level table, in that order. Any failure stops the run
//! and is returned to the caller.

use std::io::Write;
use std::path::PathBuf;

use crate::analysis::{coverage_table, extract_characters, uncovered_characters};
use crate::api::{ApiConfig, WaniKaniClient};
use crate::error::Result;
use crate::ui::Output;

/// A single coverage run over one file.
pub struct CoverageCommand {
    path: PathBuf,
    api_key: String,
    config: ApiConfig,
}

impl CoverageCommand {
    /// Create a run against the public WaniKani API.
    pub fn new(path: impl Into<PathBuf>, api_key: impl Into<String>) -> Self {
        Self::with_config(path, api_key, ApiConfig::default())
    }

    /// Create a run against a custom API endpoint.
    pub fn with_config(
        path: impl Into<PathBuf>,
        api_key: impl Into<String>,
        config: ApiConfig,
    ) -> Self {
        Self {
            path: path.into(),
            api_key: api_key.into(),
            config,
        }
    }

    /// Run the analysis, writing progress and results to `out`.
    pub fn execute<W: Write>(&self, out: &mut Output<W>) -> Result<()> {
        let client = WaniKaniClient::new(self.config.clone())?;
        let session = client.authenticate(&self.api_key)?;

        out.section("Retrieving data from WaniKani...")?;
        let catalog = client.fetch_catalog(&session, |progress| out.progress(progress))?;

        out.message("")?;
        out.message("Reading data from file...")?;
        let doc = extract_characters(&self.path)?;
        let uncovered = uncovered_characters(&catalog, &doc);
        out.message(&format!(
            "\tFound {} distinct kanji, {} not taught on WaniKani",
            doc.len(),
            uncovered.len()
        ))?;
        if !uncovered.is_empty() {
            tracing::debug!("Kanji missing from catalog: {}", uncovered.iter().collect::<String>());
        }

        out.message("")?;
        out.coverage_table(&self.path, &session, &coverage_table(&catalog, &doc))
    }
}
