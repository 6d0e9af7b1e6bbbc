//! Blocking WaniKani API client.
//!
//! Authenticates a credential and walks the paginated subjects collection,
//! building a [`CharacterCatalog`] from its kanji records.

use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;

use super::config::ApiConfig;
use super::models::{Subject, SubjectPage, UserResponse};
use super::session::Session;
use crate::analysis::{CharacterCatalog, Level};
use crate::error::{CoverageError, Result};

/// Progress of a catalog download, reported after every page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FetchProgress {
    /// Pages retrieved so far.
    pub pages: usize,
    /// Running sum of `per_page / total_count` over the pages retrieved.
    ///
    /// Left uncapped, so it exceeds 1.0 after a partial last page;
    /// [`percent`](Self::percent) is the capped value shown to the user.
    pub fraction: f64,
    /// Kanji collected so far.
    pub kanji: usize,
}

impl FetchProgress {
    /// Estimated percentage done, truncated and capped at 100.
    ///
    /// Differs from `fraction * 100` once `fraction` passes 1.0.
    pub fn percent(&self) -> u32 {
        (self.fraction * 100.0).clamp(0.0, 100.0) as u32
    }
}

/// Client for the WaniKani v2 API.
pub struct WaniKaniClient {
    client: Client,
    config: ApiConfig,
}

impl WaniKaniClient {
    /// Create a client for the given endpoint configuration.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self { client, config })
    }

    /// Verify `token` against the user endpoint.
    ///
    /// A body carrying an `error` field is an authentication failure; any
    /// other unreadable response is a connectivity failure.
    pub fn authenticate(&self, token: &str) -> Result<Session> {
        let url = self.config.user_url();
        tracing::debug!("Authenticating against {}", url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .map_err(|e| CoverageError::connectivity(&url, e))?;

        let status = response.status();
        let body: UserResponse = response
            .json()
            .map_err(|e| CoverageError::connectivity(&url, format!("HTTP {}: {}", status, e)))?;

        match body {
            UserResponse::Error { error } => {
                tracing::debug!("User endpoint returned HTTP {} with error {}", status, error);
                let message = match error {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                };
                Err(CoverageError::Authentication {
                    key: token.to_string(),
                    message,
                })
            }
            UserResponse::User { data } => {
                tracing::info!("Authenticated as {} (level {})", data.username, data.level);
                Ok(Session::new(token, data.username, data.level))
            }
        }
    }

    /// Download every subjects page and collect the kanji.
    ///
    /// `on_page` runs after each page with the running progress estimate;
    /// an error from it stops the download.
    pub fn fetch_catalog<F>(&self, session: &Session, mut on_page: F) -> Result<CharacterCatalog>
    where
        F: FnMut(&FetchProgress) -> Result<()>,
    {
        let mut catalog = CharacterCatalog::new();
        let mut progress = FetchProgress {
            pages: 0,
            fraction: 0.0,
            kanji: 0,
        };
        let mut next = Some(self.config.subjects_url());

        while let Some(url) = next {
            let page: SubjectPage = self.get_json(session, &url)?;
            tracing::debug!(
                "Page {} from {}: {} subjects, total {}",
                progress.pages + 1,
                url,
                page.data.len(),
                page.total_count
            );

            collect_kanji(&mut catalog, &page.data);

            progress.pages += 1;
            progress.fraction += page_fraction(page.pages.per_page, page.total_count);
            progress.kanji = catalog.len();
            on_page(&progress)?;

            next = page.pages.next_url;
        }

        tracing::info!(
            "Fetched {} kanji across {} pages",
            catalog.len(),
            progress.pages
        );
        Ok(catalog)
    }

    fn get_json<T: DeserializeOwned>(&self, session: &Session, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .header("Authorization", session.bearer())
            .send()
            .map_err(|e| CoverageError::connectivity(url, e))?;

        let response = check_status(url, response)?;
        response
            .json()
            .map_err(|e| CoverageError::connectivity(url, format!("malformed response: {}", e)))
    }
}

fn check_status(url: &str, response: Response) -> Result<Response> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(CoverageError::connectivity(
            url,
            format!("HTTP {}", response.status()),
        ))
    }
}

/// Share of the collection one page represents.
fn page_fraction(per_page: u64, total_count: u64) -> f64 {
    if total_count == 0 {
        1.0
    } else {
        per_page as f64 / total_count as f64
    }
}

/// Add the kanji among `subjects` to `catalog`.
///
/// Kanji records without a single-character slug or with a level outside
/// `1..=60` are skipped.
fn collect_kanji(catalog: &mut CharacterCatalog, subjects: &[Subject]) {
    for subject in subjects.iter().filter(|s| s.is_kanji()) {
        let slug = subject.data.slug.as_deref().unwrap_or_default();
        let mut chars = slug.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            tracing::warn!("Skipping kanji subject with slug {:?}", slug);
            continue;
        };
        let Some(level) = subject.data.level.and_then(Level::new) else {
            tracing::warn!(
                "Skipping kanji {} with level {:?}",
                c,
                subject.data.level
            );
            continue;
        };

        if let Some(previous) = catalog.insert(c, level) {
            tracing::debug!("Kanji {} listed again (level {} -> {})", c, previous, level);
        }
    }
}
