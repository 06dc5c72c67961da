use metrics_exporter_prometheus::PrometheusHandle;
use rto_audit::config::CourseConfig;
use rto_audit::engine::{IntentStrategy, ProviderCatalog, StateBuckets, StateCode};
use rto_audit::error::AppError;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

/// Sample providers used when no catalog path is configured.
const BUNDLED_CATALOG: &str = include_str!("../data/sample_providers.json");

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) data: Arc<CatalogSnapshot>,
}

/// Catalog plus the per-state buckets derived from it. Built once and
/// shared read-only between requests.
#[derive(Debug)]
pub(crate) struct CatalogSnapshot {
    pub(crate) catalog: ProviderCatalog,
    pub(crate) buckets: StateBuckets,
    pub(crate) course: CourseConfig,
}

impl CatalogSnapshot {
    pub(crate) fn new(catalog: ProviderCatalog, course: CourseConfig) -> Self {
        let buckets = catalog.partition();
        Self {
            catalog,
            buckets,
            course,
        }
    }
}

pub(crate) fn load_catalog(path: Option<&Path>) -> Result<ProviderCatalog, AppError> {
    match path {
        Some(path) => Ok(ProviderCatalog::from_path(path)?),
        None => {
            let catalog = ProviderCatalog::from_json_str(BUNDLED_CATALOG)?;
            info!(providers = catalog.len(), "using bundled sample catalog");
            Ok(catalog)
        }
    }
}

pub(crate) fn parse_state(raw: &str) -> Result<StateCode, String> {
    StateCode::parse(raw).ok_or_else(|| {
        format!("unknown state '{raw}' (expected one of NSW, VIC, QLD, WA, SA, TAS, ACT, NT)")
    })
}

pub(crate) fn parse_strategy(raw: &str) -> Result<IntentStrategy, String> {
    IntentStrategy::parse(raw).ok_or_else(|| {
        format!("unknown strategy '{raw}' (expected compliance, value, authority or student-first)")
    })
}

pub(crate) fn resolve_state(raw: &str) -> Result<StateCode, AppError> {
    parse_state(raw).map_err(AppError::InvalidRequest)
}

#[cfg(test)]
pub(crate) fn sample_snapshot() -> CatalogSnapshot {
    let catalog = load_catalog(None).expect("bundled catalog is valid");
    let course = CourseConfig::detect(None, None, None, None);
    CatalogSnapshot::new(catalog, course)
}
