//! HTTP implementation of [`BackendFetcher`] on top of `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, header};
use tracing::{debug, warn};
use url::Url;

use super::conditional::ValidatorStore;
use super::fetcher::{BackendFetcher, BackendResponse, company_url};
use crate::error::CompanyError;

/// Fetches company documents over HTTP with a single overall timeout.
///
/// Connection pooling and TLS are left to `reqwest`; there are no retries.
#[derive(Debug)]
pub struct HttpFetcher {
    client: reqwest::Client,
    validators: Option<ValidatorStore>,
}

impl HttpFetcher {
    /// Creates a fetcher whose requests fail after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            validators: None,
        })
    }

    /// Revalidates previously seen responses with `If-None-Match` /
    /// `If-Modified-Since` and replays them on `304 Not Modified`.
    ///
    /// Validators are kept for at most `max_entries` URLs.
    pub fn with_conditional_requests(mut self, max_entries: usize) -> Self {
        self.validators = Some(ValidatorStore::bounded(max_entries));
        self
    }

    fn not_modified(&self, url: &Url) -> Result<BackendResponse, CompanyError> {
        self.validators
            .as_ref()
            .and_then(|store| store.replay(url))
            .ok_or(CompanyError::BackendServer {
                status: StatusCode::NOT_MODIFIED.as_u16(),
            })
    }
}

fn connectivity(err: reqwest::Error) -> CompanyError {
    CompanyError::ConnectivityTimeout(err.to_string())
}

#[async_trait]
impl BackendFetcher for HttpFetcher {
    async fn fetch(&self, base_url: &Url, id: &str) -> Result<BackendResponse, CompanyError> {
        let url = company_url(base_url, id)?;
        debug!("Fetching company from: {}", url);

        let mut request = self.client.get(url.clone());
        if let Some(store) = &self.validators {
            request = request.headers(store.conditional_headers(&url));
        }

        let response = request.send().await.map_err(|e| {
            warn!("Backend request to {} failed: {}", url, e);
            connectivity(e)
        })?;

        let status = response.status();
        if status == StatusCode::NOT_MODIFIED {
            debug!("Backend NOT MODIFIED: {}", url);
            return self.not_modified(&url);
        }
        if status == StatusCode::NOT_FOUND {
            if let Some(store) = &self.validators {
                store.forget(&url);
            }
            return Err(CompanyError::CompanyNotFound);
        }
        if !status.is_success() {
            warn!("Backend {} returned status {}", url, status);
            return Err(CompanyError::BackendServer {
                status: status.as_u16(),
            });
        }

        let headers = response.headers().clone();
        let content_type = headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| {
                CompanyError::Internal(format!("backend {url} responded {status} without a content type"))
            })?;

        let body = response.bytes().await.map_err(connectivity)?.to_vec();
        let fetched = BackendResponse { content_type, body };

        if let Some(store) = &self.validators {
            store.remember(&url, &headers, &fetched);
        }

        Ok(fetched)
    }
}
