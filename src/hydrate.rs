//! Remote content hydration for deck sections.
//!
//! A [`ContentSource`] returns section records keyed by section id. Records are fetched once,
//! with no timeout, retry or cancellation, and applied in place whenever they arrive. A failed
//! fetch is logged and leaves the fallback text from the deck file untouched.

use crate::document::{Document, Reflection};
use crate::error::HydrationError;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Content for one section as stored remotely.
pub struct SectionContent {
    /// Identifier of the section to rewrite.
    pub section_id: String,
    /// Replacement title.
    pub title: String,
    /// Replacement subtitle; empty removes it.
    pub subtitle: String,
    /// Replacement body markup.
    pub body: String,
    /// Heading for the reflection block.
    #[serde(default)]
    pub reflection_title: Option<String>,
    /// Reflection prompts in display order.
    #[serde(default)]
    pub reflections: Vec<String>,
}

/// A read-only store of section content.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetches every section record, in store order.
    async fn fetch(&self) -> Result<Vec<SectionContent>, HydrationError>;
}

#[derive(Clone, Debug)]
/// Fetches section records as a JSON array over HTTP.
pub struct HttpContentSource {
    client: reqwest::Client,
    url: String,
    api_key: Option<String>,
}

impl HttpContentSource {
    #[must_use]
    /// Source reading from `url`, sending `api_key` as a bearer token if given.
    pub fn new(url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            api_key,
        }
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn fetch(&self) -> Result<Vec<SectionContent>, HydrationError> {
        let mut request = self.client.get(&self.url).header(ACCEPT, "application/json");
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(HydrationError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Fetches records from `source`, logging and swallowing any failure.
pub async fn load(source: &dyn ContentSource) -> Option<Vec<SectionContent>> {
    match source.fetch().await {
        Ok(records) => {
            info!(count = records.len(), "fetched section content");
            Some(records)
        }
        Err(e) => {
            warn!(error = %e, "content hydration failed; keeping fallback content");
            None
        }
    }
}

/// Rewrites matching sections in place and returns how many were changed.
///
/// Records for unknown sections are skipped. A record with a reflection title or any
/// reflection prompts sets the section's reflection block.
pub fn apply(document: &mut Document, records: &[SectionContent]) -> usize {
    let mut applied = 0;
    for record in records {
        let Some(section) = document.section_mut(&record.section_id) else {
            debug!(section = %record.section_id, "no section for content record");
            continue;
        };

        section.title = Some(record.title.clone());
        section.subtitle = (!record.subtitle.trim().is_empty()).then(|| record.subtitle.clone());
        section.body = record.body.trim().to_string();
        if record.reflection_title.is_some() || !record.reflections.is_empty() {
            section.reflection = Some(Reflection {
                title: record.reflection_title.clone(),
                items: record.reflections.clone(),
            });
        }
        applied += 1;
    }
    applied
}

#[cfg(test)]
#[path = "tests/hydrate.rs"]
mod tests;
