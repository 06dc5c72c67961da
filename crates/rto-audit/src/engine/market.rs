use super::domain::{Provider, StateCode};
use super::round_half_up;
use serde::Serialize;

/// Comparison baseline for one state's candidate pool.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MarketMetrics {
    pub median_price: f64,
    pub mean_score: u32,
    pub provider_count: usize,
}

/// Baseline over residents of `state` plus every Multi/National record.
///
/// Works from the raw catalog, so sentinel providers are counted once each
/// and never deduplicated against residents. The median is the element at
/// `floor(n / 2)` of the sorted disclosed prices, with no averaging for
/// even-length lists.
pub fn calculate_market_metrics(providers: &[Provider], state: StateCode) -> MarketMetrics {
    let pool: Vec<&Provider> = providers
        .iter()
        .filter(|provider| provider.jurisdiction.covers(state))
        .collect();

    if pool.is_empty() {
        return MarketMetrics::default();
    }

    let mut prices: Vec<f64> = pool.iter().filter_map(|provider| provider.price).collect();
    prices.sort_by(f64::total_cmp);
    let median_price = prices.get(prices.len() / 2).copied().unwrap_or(0.0);

    let total: f64 = pool.iter().map(|provider| provider.primary_score).sum();
    let mean_score = round_half_up(total / pool.len() as f64) as u32;

    MarketMetrics {
        median_price,
        mean_score,
        provider_count: pool.len(),
    }
}
