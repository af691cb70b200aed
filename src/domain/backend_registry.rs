//! Country code to registry backend routing.

use std::collections::HashMap;

use url::Url;

use crate::error::CompanyError;

/// Immutable mapping from country code to backend base URL.
///
/// Built once at startup and shared read-only; there is no setter. Lookups
/// are exact and case-sensitive, with no default backend.
#[derive(Debug, Clone, Default)]
pub struct BackendRegistry {
    routes: HashMap<String, Url>,
}

impl BackendRegistry {
    pub fn new(routes: HashMap<String, Url>) -> Self {
        Self { routes }
    }

    /// Returns the base URL serving `country_code`.
    ///
    /// # Errors
    ///
    /// Returns [`CompanyError::CountryNotFound`] if no backend is configured.
    pub fn resolve(&self, country_code: &str) -> Result<&Url, CompanyError> {
        self.routes
            .get(country_code)
            .ok_or_else(|| CompanyError::CountryNotFound(country_code.to_string()))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterates routes sorted by country code.
    pub fn routes(&self) -> impl Iterator<Item = (&str, &Url)> {
        let mut routes: Vec<_> = self
            .routes
            .iter()
            .map(|(country, url)| (country.as_str(), url))
            .collect();
        routes.sort_by_key(|(country, _)| *country);
        routes.into_iter()
    }
}

/// Later entries for the same country replace earlier ones.
impl FromIterator<(String, Url)> for BackendRegistry {
    fn from_iter<I: IntoIterator<Item = (String, Url)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
