//! Request pipeline: fetch → normalize → extract entities → classify.

use std::sync::Arc;

use orglens_common::{Classification, EntityExtractor, ExtractError};
use orglens_http::{FetchError, PageFetcher};
use thiserror::Error;
use url::Url;

use crate::{company_size, industry, location, normalize};

/// Any stage failing aborts the whole request; callers report every variant
/// as one generic processing failure and never return partial results.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error("entity extraction task failed: {0}")]
    Join(String),
}

/// Sequences the classification stages for one URL.
///
/// Holds only shared read-only state (the HTTP client and the loaded
/// extractor); nothing is carried across requests.
#[derive(Clone)]
pub struct Pipeline {
    fetcher: PageFetcher,
    extractor: Arc<dyn EntityExtractor>,
}

impl Pipeline {
    pub fn new(fetcher: PageFetcher, extractor: Arc<dyn EntityExtractor>) -> Self {
        Self { fetcher, extractor }
    }

    /// Fetch one page and classify it.
    ///
    /// The stages run strictly sequentially. Model inference is CPU-bound,
    /// so it is moved onto a blocking thread rather than stalling the
    /// runtime worker.
    pub async fn classify_url(&self, url: &Url) -> Result<Classification, PipelineError> {
        let html = self.fetcher.fetch_html(url).await?;
        let text = normalize::text_from_html(&html);

        let extractor = Arc::clone(&self.extractor);
        let extract_input = text.clone();
        let entities = tokio::task::spawn_blocking(move || {
            extractor.extract_entities(&extract_input)
        })
        .await
        .map_err(|e| PipelineError::Join(e.to_string()))??;

        let result = Classification {
            industry: industry::classify(&text, &entities).map(str::to_string),
            company_size: company_size::classify(&text, &entities).map(str::to_string),
            location: location::classify(&entities),
        };

        tracing::debug!(
            host = url.domain().unwrap_or("-"),
            entities = entities.len(),
            industry = ?result.industry,
            company_size = ?result.company_size,
            location = ?result.location,
            "pipeline.classified"
        );
        Ok(result)
    }
}
