use std::sync::Arc;

use crate::application::services::CompanyService;

/// Shared handler state. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub company_service: Arc<CompanyService>,
}

impl AppState {
    pub fn new(company_service: Arc<CompanyService>) -> Self {
        Self { company_service }
    }
}
