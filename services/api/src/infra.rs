use metrics_exporter_prometheus::PrometheusHandle;
use scheme_saathi::catalog::{CatalogError, InMemorySchemeCatalog};
use scheme_saathi::config::CatalogConfig;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Catalog from the configured JSON export, or an empty one when none is set.
pub(crate) fn load_catalog(config: &CatalogConfig) -> Result<InMemorySchemeCatalog, CatalogError> {
    match &config.scheme_path {
        Some(path) => InMemorySchemeCatalog::from_path(path),
        None => {
            warn!("no scheme catalog configured; batch checks need inline schemes");
            Ok(InMemorySchemeCatalog::default())
        }
    }
}
