//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::ReportService;
use crate::infrastructure::persistence::{SqliteYieldRepository, YieldStore};
use crate::infrastructure::templates::TemplateStore;

/// Handles shared by all requests. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub report_service: Arc<ReportService<SqliteYieldRepository>>,
    pub templates: Arc<TemplateStore>,
    pub store: Arc<YieldStore>,
}

impl AppState {
    /// Wires the repository and service over an existing store handle.
    pub fn new(store: Arc<YieldStore>, templates: TemplateStore) -> Self {
        let repository = Arc::new(SqliteYieldRepository::new(store.clone()));

        Self {
            report_service: Arc::new(ReportService::new(repository)),
            templates: Arc::new(templates),
            store,
        }
    }
}
