//! Validator store for conditional backend requests.
//!
//! Remembers the `ETag` / `Last-Modified` of the last full response per URL so
//! the next request can ask the backend to skip an unchanged body.

use dashmap::DashMap;
use reqwest::header::{self, HeaderMap, HeaderValue};
use tracing::debug;
use url::Url;

use super::fetcher::BackendResponse;

#[derive(Debug, Clone)]
struct StoredResponse {
    etag: Option<HeaderValue>,
    last_modified: Option<HeaderValue>,
    response: BackendResponse,
}

/// Default bound on remembered URLs.
pub const DEFAULT_MAX_ENTRIES: usize = 10_000;

/// Last validated response per backend URL, holding at most `max_entries` URLs.
///
/// Once full, responses for URLs it has not seen are not remembered; known URLs
/// keep being refreshed.
#[derive(Debug)]
pub struct ValidatorStore {
    responses: DashMap<Url, StoredResponse>,
    max_entries: usize,
}

impl Default for ValidatorStore {
    fn default() -> Self {
        Self::bounded(DEFAULT_MAX_ENTRIES)
    }
}

impl ValidatorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bounded(max_entries: usize) -> Self {
        Self {
            responses: DashMap::new(),
            max_entries,
        }
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// Request headers revalidating the stored response for `url`, if any.
    pub fn conditional_headers(&self, url: &Url) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(stored) = self.responses.get(url) {
            if let Some(etag) = &stored.etag {
                headers.insert(header::IF_NONE_MATCH, etag.clone());
            }
            if let Some(last_modified) = &stored.last_modified {
                headers.insert(header::IF_MODIFIED_SINCE, last_modified.clone());
            }
        }
        headers
    }

    /// Remembers `response` if the backend sent any validator for it.
    pub fn remember(&self, url: &Url, headers: &HeaderMap, response: &BackendResponse) {
        let etag = headers.get(header::ETAG).cloned();
        let last_modified = headers.get(header::LAST_MODIFIED).cloned();

        if etag.is_none() && last_modified.is_none() {
            self.responses.remove(url);
            return;
        }

        if !self.responses.contains_key(url) && self.responses.len() >= self.max_entries {
            debug!("Validator store full, not remembering {}", url);
            return;
        }

        self.responses.insert(
            url.clone(),
            StoredResponse {
                etag,
                last_modified,
                response: response.clone(),
            },
        );
    }

    /// The stored response to replay after a `304 Not Modified`.
    pub fn replay(&self, url: &Url) -> Option<BackendResponse> {
        self.responses.get(url).map(|stored| stored.response.clone())
    }

    pub fn forget(&self, url: &Url) {
        self.responses.remove(url);
    }
}
