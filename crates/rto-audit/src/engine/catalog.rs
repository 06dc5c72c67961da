use super::domain::{Provider, StateCode};
use super::market::{calculate_market_metrics, MarketMetrics};
use super::partition::{partition_by_state, StateBuckets};
use super::scoring::{transform_all, TransformedProvider};
use std::fmt;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Json(serde_json::Error),
    InvalidProvider { id: String, reason: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "failed to read provider catalog: {}", err),
            CatalogError::Json(err) => write!(f, "invalid provider catalog JSON: {}", err),
            CatalogError::InvalidProvider { id, reason } => {
                write!(f, "provider '{}' rejected: {}", id, reason)
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(err) => Some(err),
            CatalogError::Json(err) => Some(err),
            CatalogError::InvalidProvider { .. } => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Validated, read-only snapshot of provider records.
#[derive(Debug, Clone, Default)]
pub struct ProviderCatalog {
    providers: Vec<Provider>,
}

impl ProviderCatalog {
    pub fn new(providers: Vec<Provider>) -> Result<Self, CatalogError> {
        for provider in &providers {
            validate(provider)?;
        }
        debug!(count = providers.len(), "provider catalog validated");
        Ok(Self { providers })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let catalog = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            providers = catalog.providers.len(),
            "provider catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let providers: Vec<Provider> = serde_json::from_reader(reader)?;
        Self::new(providers)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let providers: Vec<Provider> = serde_json::from_str(raw)?;
        Self::new(providers)
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Provider> {
        self.providers.iter().find(|provider| provider.id == id)
    }

    pub fn transformed(&self) -> Vec<TransformedProvider> {
        transform_all(&self.providers)
    }

    pub fn partition(&self) -> StateBuckets {
        partition_by_state(&self.transformed())
    }

    pub fn market(&self, state: StateCode) -> MarketMetrics {
        calculate_market_metrics(&self.providers, state)
    }
}

fn validate(provider: &Provider) -> Result<(), CatalogError> {
    let reject = |reason: String| CatalogError::InvalidProvider {
        id: provider.id.clone(),
        reason,
    };

    if provider.id.trim().is_empty() {
        return Err(reject("identifier must not be empty".to_string()));
    }

    if let Some(price) = provider.price {
        if !price.is_finite() || price <= 0.0 {
            return Err(reject(format!(
                "price {price} must be positive or omitted"
            )));
        }
    }

    check_score("mdpa_score", provider.primary_score).map_err(reject)?;
    check_score("overall_score", provider.audit.overall_score).map_err(reject)?;
    for (name, group) in provider.audit.groups.iter() {
        check_score(name, group.score).map_err(reject)?;
    }

    if let Some(record) = &provider.audit.sustainability {
        check_ratio("attrition_risk", record.attrition_risk).map_err(reject)?;
        check_ratio("failure_rate", record.failure_rate).map_err(reject)?;
    }

    Ok(())
}

fn check_score(name: &str, value: f64) -> Result<(), String> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(format!("{name} {value} outside 0-100"))
    }
}

fn check_ratio(name: &str, value: f64) -> Result<(), String> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(format!("{name} {value} outside 0-1"))
    }
}
