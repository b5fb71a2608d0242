use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::export::PageConfig;
use crate::form::FormController;
use crate::storage::PersistenceBridge;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// The build screen's working draft. Locked only for the span of one
    /// mutation, never across storage or network I/O.
    pub form: Arc<Mutex<FormController>>,
    /// Slot the submitted resume is written to and read back from.
    pub store: PersistenceBridge,
    /// Page geometry and fonts for the PDF export.
    pub page_config: PageConfig,
}

impl AppState {
    pub fn new(config: Config, store: PersistenceBridge, page_config: PageConfig) -> Self {
        Self {
            config,
            form: Arc::new(Mutex::new(FormController::new())),
            store,
            page_config,
        }
    }
}
