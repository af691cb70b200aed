//! Backend fetcher trait.

use async_trait::async_trait;
use url::Url;

use crate::error::CompanyError;

/// A successful backend response, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendResponse {
    pub content_type: String,
    pub body: Vec<u8>,
}

/// Retrieves raw company documents from a registry backend.
///
/// One call is one attempt; implementations never retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BackendFetcher: Send + Sync {
    /// Fetches `{base_url}/companies/{id}`.
    ///
    /// # Errors
    ///
    /// - [`CompanyError::CompanyNotFound`] on HTTP 404
    /// - [`CompanyError::BackendServer`] on any other non-success status
    /// - [`CompanyError::ConnectivityTimeout`] on timeouts and network failures
    /// - [`CompanyError::Internal`] if a success response has no content type
    async fn fetch(&self, base_url: &Url, id: &str) -> Result<BackendResponse, CompanyError>;
}

/// Builds the company resource URL under a backend base URL.
///
/// `id` is appended as a single percent-encoded path segment, so it can't
/// escape the `/companies/` prefix.
pub fn company_url(base_url: &Url, id: &str) -> Result<Url, CompanyError> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|_| CompanyError::Internal(format!("backend URL {base_url} cannot be a base")))?
        .pop_if_empty()
        .push("companies")
        .push(id);
    Ok(url)
}
