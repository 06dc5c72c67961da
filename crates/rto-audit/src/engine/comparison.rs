use super::metrics::{Metric, MetricValue};
use super::round_half_up;
use super::scoring::TransformedProvider;
use serde::Serialize;

/// Identifier of the provider that wins `metric` among `providers`.
///
/// Pass/fail metrics go to the first provider that passes, or to the first
/// provider when nobody does. Numeric metrics go to the strictly greatest
/// value, so ties stay with the earlier provider.
pub fn metric_winner<'a>(
    providers: &[&'a TransformedProvider],
    metric: Metric,
) -> Option<&'a str> {
    let (&first, rest) = providers.split_first()?;

    if metric.is_pass_fail() {
        let winner: &'a TransformedProvider = providers
            .iter()
            .copied()
            .find(|provider| {
                matches!(provider.metrics.value(metric), MetricValue::Check(check) if check.is_pass())
            })
            .unwrap_or(first);
        return Some(winner.id.as_str());
    }

    let mut best = first;
    let mut best_value = numeric(best, metric);
    for &provider in rest {
        let value = numeric(provider, metric);
        if value > best_value {
            best = provider;
            best_value = value;
        }
    }
    Some(best.id.as_str())
}

fn numeric(provider: &TransformedProvider, metric: Metric) -> f64 {
    provider
        .metrics
        .value(metric)
        .as_number()
        .unwrap_or(f64::NAN)
}

/// Provider with the strictly highest primary score; earlier wins ties.
pub fn overall_winner<'a>(
    providers: &[&'a TransformedProvider],
) -> Option<&'a TransformedProvider> {
    let (&first, rest) = providers.split_first()?;
    let winner = rest.iter().copied().fold(first, |best, current| {
        if current.score > best.score {
            current
        } else {
            best
        }
    });
    Some(winner)
}

/// Radar chart values, each on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryScores {
    pub compliance: u32,
    pub technical: u32,
    pub content: u32,
    pub trust: u32,
    pub authority: u32,
}

pub fn category_scores(provider: &TransformedProvider) -> CategoryScores {
    let table = &provider.metrics;
    let passes = [table.asqa_registration, table.scope_match]
        .into_iter()
        .filter(|check| check.is_pass())
        .count() as f64;
    let compliance = passes / 2.0 * 100.0;
    let technical = (f64::from(table.page_speed) + f64::from(table.mobile_usability)) / 2.0;
    let content = (f64::from(table.course_completeness) + f64::from(table.price_transparency))
        / 10.0
        * 100.0;
    let reviews = table.google_reviews / 5.0 * 100.0;
    let recency = f64::from(table.review_recency) / 5.0 * 100.0;
    let trust = (reviews + recency) / 2.0;

    CategoryScores {
        compliance: round_half_up(compliance) as u32,
        technical: round_half_up(technical) as u32,
        content: round_half_up(content) as u32,
        trust: round_half_up(trust) as u32,
        authority: round_half_up(provider.score) as u32,
    }
}

/// One-line takeaway shown next to each compared provider.
///
/// Review rating is checked before page speed, so a well-reviewed fast
/// site reads as trusted.
pub fn comparative_insight(provider: &TransformedProvider) -> &'static str {
    let table = &provider.metrics;
    if table.google_reviews >= 4.5 {
        "Highly trusted by the community with exceptional feedback recency."
    } else if table.page_speed > 85 {
        "Best-in-class mobile and desktop performance markers."
    } else {
        "Solid reliable baseline across all regulatory benchmarks."
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricWinner {
    pub metric: Metric,
    pub label: &'static str,
    pub provider_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderCategoryScores {
    pub provider_id: String,
    pub name: String,
    pub scores: CategoryScores,
    pub insight: &'static str,
}

/// Everything the comparison table highlights for a set of providers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonSummary {
    pub winners: Vec<MetricWinner>,
    pub overall_winner: Option<String>,
    pub category_scores: Vec<ProviderCategoryScores>,
}

pub fn summarize_comparison(providers: &[&TransformedProvider]) -> ComparisonSummary {
    let winners = Metric::ordered()
        .into_iter()
        .map(|metric| MetricWinner {
            metric,
            label: metric.label(),
            provider_id: metric_winner(providers, metric).map(str::to_string),
        })
        .collect();

    let radar = providers
        .iter()
        .map(|provider| ProviderCategoryScores {
            provider_id: provider.id.clone(),
            name: provider.name.clone(),
            scores: category_scores(provider),
            insight: comparative_insight(provider),
        })
        .collect();

    ComparisonSummary {
        winners,
        overall_winner: overall_winner(providers).map(|provider| provider.id.clone()),
        category_scores: radar,
    }
}
