//! Provider scoring, state partitioning, market baselines, sustainability
//! verdicts and intent ranking.
//!
//! Everything below [`catalog`] is a pure function of its inputs: no I/O, no
//! caching, and identical inputs always give identical outputs.

pub mod catalog;
pub mod comparison;
pub mod domain;
pub mod export;
pub mod market;
pub mod metrics;
pub mod partition;
pub mod ranking;
pub mod scoring;
pub mod verdict;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, ProviderCatalog};
pub use comparison::{
    category_scores, comparative_insight, metric_winner, overall_winner, summarize_comparison,
    CategoryScores, ComparisonSummary, MetricWinner,
};
pub use domain::{
    AuditData, AuditGroups, CategoryGroup, InventoryDepth, Jurisdiction, Provider, StateCode,
    SustainabilityRecord, WeightedMetric,
};
pub use market::{calculate_market_metrics, MarketMetrics};
pub use metrics::{Metric, MetricCategory, MetricValue, PassFail};
pub use partition::{partition_by_state, StateBuckets};
pub use ranking::{
    rank_by_id, rank_providers, top_slate, ComparisonSession, IntentStrategy, Scenario,
    SessionSnapshot, Slate, StrategyProfile,
};
pub use scoring::{
    transform_all, transform_provider, EnquiryTarget, MetricTable, RawCategoryScores,
    TransformedProvider,
};
pub use verdict::{
    network_affinity_label, sustainability_verdict, SustainabilityVerdict, VerdictStatus,
};

/// Round to the nearest integer with halves going up (`-2.5` becomes `-2`).
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
