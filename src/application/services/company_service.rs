//! Company lookup orchestration.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::services::MetricsService;
use crate::domain::backend_registry::BackendRegistry;
use crate::domain::entities::CompanyRecord;
use crate::domain::format::{CompanyFormat, normalize};
use crate::error::CompanyError;
use crate::infrastructure::backend::{BackendFetcher, BackendResponse};
use crate::infrastructure::cache::{CacheKey, CacheService, MemoryCache};
use crate::utils::clock::{Clock, SystemClock};

/// Resolves a company by id and country, serving from cache when possible.
///
/// Holds no per-request state; the registry is fixed at construction, so a
/// different routing table means a different service instance.
pub struct CompanyService {
    registry: BackendRegistry,
    fetcher: Arc<dyn BackendFetcher>,
    cache: Arc<dyn CacheService>,
    metrics: MetricsService,
    clock: Arc<dyn Clock>,
    last_known: Option<Arc<MemoryCache>>,
}

impl CompanyService {
    /// Creates a new company service.
    pub fn new(
        registry: BackendRegistry,
        fetcher: Arc<dyn BackendFetcher>,
        cache: Arc<dyn CacheService>,
    ) -> Self {
        Self {
            registry,
            fetcher,
            cache,
            metrics: MetricsService::new(),
            clock: Arc::new(SystemClock),
            last_known: None,
        }
    }

    /// Uses `clock` to decide whether companies are still active.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Serves the last successfully fetched record when the backend is down.
    ///
    /// Records are kept in `last_known` for as long as its expiry policy allows,
    /// and their activity is re-evaluated before being served. Only
    /// [`CompanyError::BackendServer`] and [`CompanyError::ConnectivityTimeout`]
    /// are masked. Off by default.
    pub fn with_stale_on_error(mut self, last_known: Arc<MemoryCache>) -> Self {
        self.last_known = Some(last_known);
        self
    }

    pub fn registry(&self) -> &BackendRegistry {
        &self.registry
    }

    pub fn cache(&self) -> &Arc<dyn CacheService> {
        &self.cache
    }

    /// Looks up company `id` in the registry serving `country_code`.
    ///
    /// # Flow
    ///
    /// 1. Count the request
    /// 2. Return the cached record on a hit
    /// 3. Resolve the backend for the country
    /// 4. Fetch the raw document (single attempt)
    /// 5. Normalize it by content type
    /// 6. Cache and return the record
    ///
    /// No lock is held while the backend call is in flight. Two concurrent
    /// misses for the same key both fetch, and the later write wins.
    ///
    /// # Errors
    ///
    /// Every failure is one [`CompanyError`], returned unchanged from the step
    /// that detected it. Failed lookups are never cached.
    pub async fn get_company(
        &self,
        id: &str,
        country_code: &str,
    ) -> Result<CompanyRecord, CompanyError> {
        self.metrics.increment_request_count();

        let key = CacheKey::new(id, country_code);
        if let Some(cached) = self.cache.get(&key).await {
            return Ok(cached);
        }

        let base_url = self.registry.resolve(country_code)?;

        let response = match self.fetcher.fetch(base_url, id).await {
            Ok(response) => response,
            Err(err) => return self.recover(&key, err).await,
        };

        let record = self.normalize(id, &response)?;

        self.cache.put(key.clone(), record.clone()).await;
        if let Some(last_known) = &self.last_known {
            last_known.put(key, record.clone()).await;
        }

        Ok(record)
    }

    fn normalize(&self, id: &str, response: &BackendResponse) -> Result<CompanyRecord, CompanyError> {
        match CompanyFormat::from_content_type(&response.content_type) {
            Some(format) => self.metrics.increment_response_count(format),
            None => self.metrics.increment_unexpected_content_type_count(),
        }

        normalize(id, &response.content_type, &response.body, self.clock.now()).inspect_err(
            |err| match err {
                CompanyError::ResponseFormat(cause) => {
                    warn!("Malformed response for company {}: {}", id, cause)
                }
                other => warn!("Rejected response for company {}: {}", id, other),
            },
        )
    }

    async fn recover(
        &self,
        key: &CacheKey,
        err: CompanyError,
    ) -> Result<CompanyRecord, CompanyError> {
        if !err.is_backend_failure() {
            return Err(err);
        }
        self.metrics.increment_backend_error_count();

        let stale = match &self.last_known {
            Some(last_known) => last_known
                .get(key)
                .await
                .map(|record| record.as_of(self.clock.now())),
            None => None,
        };

        match stale {
            Some(record) => {
                warn!("Serving last known record for {} after: {}", key, err);
                Ok(record)
            }
            None => {
                debug!("No fallback for {}: {}", key, err);
                Err(err)
            }
        }
    }
}
